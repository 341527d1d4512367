//! Global command-line flag overlay.

use std::path::PathBuf;

use super::types::{Config, LogLevel};
use super::ConfigError;
use crate::constants::CLOUD_SERVER_NAME;

/// Global flag values as given on the command line.
///
/// `None` means the flag was not passed and must not touch the
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalFlagValues {
    /// Explicit config file path.
    pub config: Option<PathBuf>,
    /// Cloud discovery token.
    pub token: Option<String>,
    pub cluster: Option<String>,
    /// Comma-separated member addresses.
    pub address: Option<String>,
    pub log_level: Option<String>,
}

/// Applies every flag that was given to `config`.
///
/// A token also turns on cloud discovery and points the TLS server name at
/// the cloud endpoint. All values are checked before anything is written,
/// so on error `config` is unchanged.
pub fn merge_flags_with_config(
    flags: &GlobalFlagValues,
    config: &mut Config,
) -> Result<(), ConfigError> {
    if flags.cluster.as_deref() == Some("") {
        return Err(ConfigError::FlagMerge {
            flag: "cluster",
            message: "cluster name cannot be empty".to_string(),
        });
    }
    let addresses = flags.address.as_deref().map(split_addresses).transpose()?;
    let level = flags
        .log_level
        .as_deref()
        .map(|raw| {
            raw.parse::<LogLevel>()
                .map_err(|message| ConfigError::FlagMerge {
                    flag: "log-level",
                    message,
                })
        })
        .transpose()?;

    let client = &mut config.hazelcast;
    if let Some(token) = &flags.token {
        client.cluster.cloud.token = token.clone();
        client.cluster.cloud.enabled = true;
        config.ssl.server_name = CLOUD_SERVER_NAME.to_string();
    }
    if let Some(cluster) = &flags.cluster {
        client.cluster.name = cluster.clone();
    }
    if let Some(addresses) = addresses {
        client.cluster.network.addresses = addresses;
    }
    if let Some(level) = level {
        client.logger.level = level;
    }
    Ok(())
}

/// Splits a comma-separated address list.
///
/// Order and duplicates are kept and entries are not trimmed. An empty
/// entry is an error.
pub fn split_addresses(raw: &str) -> Result<Vec<String>, ConfigError> {
    let addresses: Vec<String> = raw.split(',').map(str::to_string).collect();
    if addresses.iter().any(String::is_empty) {
        return Err(ConfigError::FlagMerge {
            flag: "address",
            message: format!("'{raw}' contains an empty address"),
        });
    }
    Ok(addresses)
}
