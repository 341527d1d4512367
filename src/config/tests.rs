use super::*;
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.yaml", "");

    let config = resolve_file(Some(&path), Config::default(), &[]).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_whitespace_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "blank.yaml", "\n   \n");

    let config = resolve_file(Some(&path), Config::default(), &[]).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_missing_explicit_path_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("non_existing");

    let err = resolve_file(Some(&path), Config::default(), &[]).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
    assert_eq!(
        err.to_string(),
        format!(
            "configuration file can not be found on configuration path {}",
            path.display()
        )
    );
}

#[test]
fn test_no_path_and_nothing_found_returns_base() {
    let dir = TempDir::new().unwrap();
    let search = vec![dir.path().join("a.yaml"), dir.path().join("b.yaml")];

    let mut base = Config::default();
    base.hazelcast.client_name = "kept".into();
    let config = resolve_file(None, base.clone(), &search).unwrap();
    assert_eq!(config, base);
}

#[test]
fn test_empty_path_uses_default_search() {
    let dir = TempDir::new().unwrap();
    let found = write_file(&dir, "b.yaml", "hazelcast:\n  client_name: from-search\n");
    let search = vec![dir.path().join("a.yaml"), found];

    let config = resolve_file(Some(Path::new("")), Config::default(), &search).unwrap();
    assert_eq!(config.hazelcast.client_name, "from-search");
}

#[test]
fn test_first_search_hit_wins() {
    let dir = TempDir::new().unwrap();
    let first = write_file(&dir, "first.yaml", "hazelcast:\n  client_name: first\n");
    let second = write_file(&dir, "second.yaml", "hazelcast:\n  client_name: second\n");

    let config = resolve_file(None, Config::default(), &[first, second]).unwrap();
    assert_eq!(config.hazelcast.client_name, "first");
}

#[test]
fn test_partial_file_overrides_only_named_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "partial.yaml",
        r#"
hazelcast:
  cluster:
    name: staging
    unisocket: false
"#,
    );

    let config = resolve_file(Some(&path), Config::default(), &[]).unwrap();

    let mut expected = Config::default();
    expected.hazelcast.cluster.name = "staging".into();
    expected.hazelcast.cluster.unisocket = false;
    assert_eq!(config, expected);
}

#[test]
fn test_file_overlays_onto_non_default_base() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "level.yaml", "hazelcast:\n  logger:\n    level: debug\n");

    let mut base = Config::default();
    base.ssl.ca_path = "/etc/ca.pem".into();
    let config = resolve_file(Some(&path), base, &[]).unwrap();

    assert_eq!(config.hazelcast.logger.level, LogLevel::Debug);
    assert_eq!(config.ssl.ca_path, "/etc/ca.pem");
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bad.yaml", "hazelcast: [unclosed\n");

    let err = resolve_file(Some(&path), Config::default(), &[]).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("failed to parse configuration file"));
}

#[test]
fn test_unknown_key_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "unknown.yaml", "hazelcast:\n  clustr:\n    name: typo\n");

    let err = resolve_file(Some(&path), Config::default(), &[]).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("clustr"));
}

#[test]
fn test_unknown_log_level_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "level.yaml", "hazelcast:\n  logger:\n    level: chatty\n");

    let err = resolve_file(Some(&path), Config::default(), &[]).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_empty_cluster_name_is_invalid() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "name.yaml", "hazelcast:\n  cluster:\n    name: \"\"\n");

    let err = resolve_file(Some(&path), Config::default(), &[]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_resolve_file_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "custom.yaml",
        "hazelcast:\n  client_name: test-client\n  cluster:\n    network:\n      addresses: [\"m1:5701\", \"m2:5701\"]\n",
    );

    let once = resolve_file(Some(&path), Config::default(), &[]).unwrap();
    let twice = resolve_file(Some(&path), once.clone(), &[]).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_serialized_config_round_trips() {
    let mut config = Config::default();
    config.hazelcast.client_name = "test-client".into();
    config.hazelcast.logger.level = LogLevel::Trace;
    config.ssl.enabled = true;
    config.ssl.key_password = "secret".into();
    merge_flags_with_config(
        &GlobalFlagValues {
            token: Some("t1".into()),
            address: Some("a:1,b:2".into()),
            ..Default::default()
        },
        &mut config,
    )
    .unwrap();

    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "round.yaml", &config.to_yaml().unwrap());

    let reloaded = resolve_file(Some(&path), Config::default(), &[]).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_read_config_leaves_config_on_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.yaml");

    let mut config = Config::default();
    config.hazelcast.client_name = "before".into();
    assert!(read_config(Some(&path), &mut config, &[]).is_err());
    assert_eq!(config.hazelcast.client_name, "before");
}

#[test]
fn test_flags_token_enables_cloud() {
    let flags = GlobalFlagValues {
        token: Some("t1".into()),
        ..Default::default()
    };
    let config = Config::resolve(&flags, &[]).unwrap();

    assert_eq!(config.hazelcast.cluster.cloud.token, "t1");
    assert!(config.hazelcast.cluster.cloud.enabled);
    assert_eq!(config.ssl.server_name, crate::constants::CLOUD_SERVER_NAME);

    let mut expected = Config::default();
    expected.hazelcast.cluster.cloud.token = "t1".into();
    expected.hazelcast.cluster.cloud.enabled = true;
    expected.ssl.server_name = "hazelcast.cloud".into();
    assert_eq!(config, expected);
}

#[test]
fn test_flags_cluster_only_sets_name() {
    let flags = GlobalFlagValues {
        cluster: Some("test-cluster".into()),
        ..Default::default()
    };
    let config = Config::resolve(&flags, &[]).unwrap();

    let mut expected = Config::default();
    expected.hazelcast.cluster.name = "test-cluster".into();
    assert_eq!(config, expected);
}

#[test]
fn test_flags_address_list() {
    let flags = GlobalFlagValues {
        address: Some("a:1,b:2".into()),
        ..Default::default()
    };
    let config = Config::resolve(&flags, &[]).unwrap();
    assert_eq!(config.hazelcast.cluster.network.addresses, vec!["a:1", "b:2"]);
}

#[test]
fn test_no_flags_no_file_equals_defaults() {
    let dir = TempDir::new().unwrap();
    let search = vec![dir.path().join("config.yaml")];

    let config = Config::resolve(&GlobalFlagValues::default(), &search).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_flags_override_file_field_by_field() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "layered.yaml",
        r#"
hazelcast:
  client_name: from-file
  cluster:
    name: from-file
    network:
      addresses: ["file:1"]
"#,
    );
    let flags = GlobalFlagValues {
        config: Some(path),
        cluster: Some("from-flag".into()),
        ..Default::default()
    };

    let config = Config::resolve(&flags, &[]).unwrap();
    assert_eq!(config.hazelcast.cluster.name, "from-flag");
    assert_eq!(config.hazelcast.client_name, "from-file");
    assert_eq!(config.hazelcast.cluster.network.addresses, vec!["file:1"]);
    assert!(config.hazelcast.cluster.unisocket);
}

#[test]
fn test_file_error_short_circuits_flags() {
    let dir = TempDir::new().unwrap();
    let flags = GlobalFlagValues {
        config: Some(dir.path().join("gone.yaml")),
        address: Some(",".into()),
        ..Default::default()
    };

    let err = Config::resolve(&flags, &[]).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[test]
fn test_write_to_refuses_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "config.yaml", "hazelcast:\n  client_name: keep\n");

    let err = Config::default().write_to(&path, false).unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyExists { .. }));
    assert!(fs::read_to_string(&path).unwrap().contains("keep"));

    Config::default().write_to(&path, true).unwrap();
    let reloaded = resolve_file(Some(&path), Config::default(), &[]).unwrap();
    assert_eq!(reloaded, Config::default());
}

#[test]
fn test_write_to_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/deeper/config.yaml");

    Config::default().write_to(&path, false).unwrap();
    assert!(path.is_file());
    assert!(!path.with_extension("yaml.tmp").exists());
}
