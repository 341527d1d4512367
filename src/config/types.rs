//! Struct definitions and defaults for hzc configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ADDRESS, DEFAULT_CLIENT_NAME, DEFAULT_CLUSTER_NAME};

/// Effective configuration for hzc.
///
/// Every field always holds a value. Optional credentials and TLS paths use
/// the empty string for "not set". [`Config::default`] builds a fresh value
/// from the built-in defaults on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Data-grid client settings.
    pub hazelcast: ClientConfig,
    /// TLS settings used when connecting.
    pub ssl: SslConfig,
}

/// Settings handed to the data-grid client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientConfig {
    /// Name the client reports to the cluster.
    pub client_name: String,
    /// Cluster identity and connection settings.
    pub cluster: ClusterConfig,
    /// Log output settings.
    pub logger: LoggerConfig,
}

/// Cluster identity and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterConfig {
    /// Cluster name the client joins.
    pub name: String,
    /// Use a single connection instead of one per member.
    pub unisocket: bool,
    pub network: NetworkConfig,
    pub cloud: CloudConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkConfig {
    /// Member addresses in `host:port` form, tried in order.
    pub addresses: Vec<String>,
}

/// Managed cloud discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CloudConfig {
    /// Discovery token. Empty when not using the cloud.
    pub token: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoggerConfig {
    pub level: LogLevel,
}

/// TLS settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SslConfig {
    pub enabled: bool,
    /// Expected server name in the peer certificate.
    pub server_name: String,
    pub ca_path: String,
    pub cert_path: String,
    pub key_path: String,
    pub key_password: String,
}

/// Client log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Fatal,
    #[default]
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// All accepted level names, lowest verbosity first.
    pub const NAMES: &'static [&'static str] =
        &["off", "fatal", "error", "warn", "info", "debug", "trace"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Returns the equivalent `tracing` filter level.
    ///
    /// `tracing` has no fatal level, so fatal maps to error.
    pub fn as_filter(&self) -> &'static str {
        match self {
            Self::Fatal => "error",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Parses a level name. Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "fatal" => Ok(Self::Fatal),
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(format!(
                "unknown log level '{other}', must be one of: {}",
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            cluster: ClusterConfig::default(),
            logger: LoggerConfig::default(),
        }
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_CLUSTER_NAME.to_string(),
            unisocket: true,
            network: NetworkConfig::default(),
            cloud: CloudConfig::default(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            addresses: vec![DEFAULT_ADDRESS.to_string()],
        }
    }
}

// --- File layer ---
//
// The configuration file is read into these mirrors of the types above.
// Every field is optional so a file only overrides the keys it names.

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct ConfigLayer {
    pub hazelcast: Option<ClientLayer>,
    pub ssl: Option<SslLayer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct ClientLayer {
    pub client_name: Option<String>,
    pub cluster: Option<ClusterLayer>,
    pub logger: Option<LoggerLayer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct ClusterLayer {
    pub name: Option<String>,
    pub unisocket: Option<bool>,
    pub network: Option<NetworkLayer>,
    pub cloud: Option<CloudLayer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct NetworkLayer {
    pub addresses: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct CloudLayer {
    pub token: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct LoggerLayer {
    pub level: Option<LogLevel>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct SslLayer {
    pub enabled: Option<bool>,
    pub server_name: Option<String>,
    pub ca_path: Option<String>,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
    pub key_password: Option<String>,
}

/// Replaces `slot` only when the layer supplied a value.
fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl ConfigLayer {
    /// Checks values that would break a required field.
    pub(super) fn validate(&self) -> Result<(), String> {
        let Some(client) = &self.hazelcast else {
            return Ok(());
        };
        if client.client_name.as_deref() == Some("") {
            return Err("hazelcast.client_name cannot be empty".to_string());
        }
        if let Some(cluster) = &client.cluster {
            if cluster.name.as_deref() == Some("") {
                return Err("hazelcast.cluster.name cannot be empty".to_string());
            }
            let addresses = cluster.network.as_ref().and_then(|n| n.addresses.as_ref());
            if let Some(addresses) = addresses {
                if addresses.is_empty() {
                    return Err("hazelcast.cluster.network.addresses cannot be empty".to_string());
                }
                if addresses.iter().any(|a| a.is_empty()) {
                    return Err(
                        "hazelcast.cluster.network.addresses cannot contain an empty address"
                            .to_string(),
                    );
                }
            }
        }
        Ok(())
    }

    /// Overlays every value this layer supplies onto `config`.
    pub(super) fn apply(self, config: &mut Config) {
        if let Some(client) = self.hazelcast {
            let target = &mut config.hazelcast;
            set(&mut target.client_name, client.client_name);
            if let Some(cluster) = client.cluster {
                let target = &mut target.cluster;
                set(&mut target.name, cluster.name);
                set(&mut target.unisocket, cluster.unisocket);
                if let Some(network) = cluster.network {
                    set(&mut target.network.addresses, network.addresses);
                }
                if let Some(cloud) = cluster.cloud {
                    set(&mut target.cloud.token, cloud.token);
                    set(&mut target.cloud.enabled, cloud.enabled);
                }
            }
            if let Some(logger) = client.logger {
                set(&mut target.logger.level, logger.level);
            }
        }
        if let Some(ssl) = self.ssl {
            let target = &mut config.ssl;
            set(&mut target.enabled, ssl.enabled);
            set(&mut target.server_name, ssl.server_name);
            set(&mut target.ca_path, ssl.ca_path);
            set(&mut target.cert_path, ssl.cert_path);
            set(&mut target.key_path, ssl.key_path);
            set(&mut target.key_password, ssl.key_password);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_required_fields() {
        let config = Config::default();
        assert_eq!(config.hazelcast.cluster.name, DEFAULT_CLUSTER_NAME);
        assert_eq!(config.hazelcast.client_name, DEFAULT_CLIENT_NAME);
        assert_eq!(config.hazelcast.logger.level, LogLevel::Error);
        assert!(config.hazelcast.cluster.unisocket);
        assert_eq!(
            config.hazelcast.cluster.network.addresses,
            vec![DEFAULT_ADDRESS.to_string()]
        );
        assert!(!config.hazelcast.cluster.cloud.enabled);
        assert!(config.hazelcast.cluster.cloud.token.is_empty());
    }

    #[test]
    fn defaults_do_not_alias() {
        let mut first = Config::default();
        first.hazelcast.cluster.network.addresses.push("other:1".into());
        first.hazelcast.cluster.name = "changed".into();

        let second = Config::default();
        assert_eq!(second.hazelcast.cluster.network.addresses.len(), 1);
        assert_eq!(second.hazelcast.cluster.name, DEFAULT_CLUSTER_NAME);
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert!(err.contains("verbose"));
        assert!(err.contains("trace"));
    }

    #[test]
    fn fatal_maps_to_error_filter() {
        assert_eq!(LogLevel::Fatal.as_filter(), "error");
        assert_eq!(LogLevel::Off.as_filter(), "off");
        assert_eq!(LogLevel::Trace.as_filter(), "trace");
    }

    #[test]
    fn empty_layer_changes_nothing() {
        let mut config = Config::default();
        ConfigLayer::default().apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn layer_rejects_empty_address_list() {
        let layer = ConfigLayer {
            hazelcast: Some(ClientLayer {
                cluster: Some(ClusterLayer {
                    network: Some(NetworkLayer {
                        addresses: Some(Vec::new()),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = layer.validate().unwrap_err();
        assert!(err.contains("addresses"));
    }
}
