//! Configuration types, loading and resolution for hzc.
//!
//! The effective configuration is resolved from three sources, later ones
//! overriding earlier ones field by field:
//!
//! 1. Built-in defaults ([`Config::default`])
//! 2. An optional YAML file (`--config`, or the first file found in
//!    [`Config::default_search_paths`])
//! 3. Global command-line flags ([`GlobalFlagValues`])
//!
//! A file error stops resolution before any flag is applied.

mod flags;
mod loader;
mod paths;
mod types;

#[cfg(test)]
mod tests;

pub use flags::GlobalFlagValues;
pub use types::{Config, LogLevel};

use flags::merge_flags_with_config;
use loader::read_config;
#[cfg(test)]
use loader::resolve_file;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Errors from configuration resolution and persistence.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("configuration file can not be found on configuration path {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read configuration file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse configuration file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid value in configuration file '{}': {message}", path.display())]
    InvalidValue { path: PathBuf, message: String },

    /// A global flag carried a value that cannot be applied.
    #[error("invalid value for --{flag}: {message}")]
    FlagMerge { flag: &'static str, message: String },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("failed to write configuration file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("configuration file '{}' already exists (use --force to overwrite)", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("could not determine the configuration directory")]
    NoConfigDir,
}

impl Config {
    /// Resolves the effective configuration: defaults, then the config file,
    /// then flags.
    ///
    /// # Errors
    ///
    /// Returns the first error from the file stage, or a
    /// [`ConfigError::FlagMerge`] from the flag stage.
    pub fn resolve(
        flags: &GlobalFlagValues,
        default_search: &[PathBuf],
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        read_config(flags.config.as_deref(), &mut config, default_search)?;
        merge_flags_with_config(flags, &mut config)?;
        debug!(
            cluster = %config.hazelcast.cluster.name,
            addresses = ?config.hazelcast.cluster.network.addresses,
            cloud = config.hazelcast.cluster.cloud.enabled,
            "configuration resolved"
        );
        Ok(config)
    }

    /// Serializes the configuration to YAML in the shape the loader reads.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Writes the configuration as YAML.
    ///
    /// Creates parent directories if needed. The file is written to a
    /// temporary sibling and renamed into place. An existing file is only
    /// replaced when `force` is set.
    pub fn write_to(&self, path: &Path, force: bool) -> Result<(), ConfigError> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err(path))?;
        }

        let contents = self.to_yaml()?;

        let temp_path = path.with_extension("yaml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(write_err(&temp_path))?;
        file.write_all(contents.as_bytes())
            .map_err(write_err(&temp_path))?;
        file.sync_all().map_err(write_err(&temp_path))?;

        fs::rename(&temp_path, path).map_err(write_err(path))?;
        info!(path = %path.display(), "configuration written");
        Ok(())
    }
}

/// Builds a `map_err` adapter that tags an I/O error with `path`.
fn write_err(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError {
    let path = path.to_path_buf();
    move |source| ConfigError::Write { path, source }
}
