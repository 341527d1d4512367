//! XDG path resolution for hzc configuration and cache directories.

use std::path::PathBuf;

use super::types::Config;
use super::ConfigError;
use crate::constants::{APP_NAME, CONFIG_FILENAME, HOME_CONFIG_DIR};

impl Config {
    /// Returns the platform-specific configuration directory for hzc.
    ///
    /// Returns `~/.config/hzc/` on Linux (`XDG_CONFIG_HOME/hzc`).
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Returns the platform-specific cache directory for hzc.
    ///
    /// Used for the interactive session's readline history.
    pub fn cache_dir() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join(APP_NAME))
    }

    /// Returns the canonical location `config init` writes to.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILENAME))
    }

    /// Locations tried, in order, when no `--config` path is given.
    ///
    /// 1. `$XDG_CONFIG_HOME/hzc/config.yaml`
    /// 2. `~/.hzc/config.yaml`
    ///
    /// Locations whose base directory cannot be determined are left out.
    pub fn default_search_paths() -> Vec<PathBuf> {
        let xdg = Self::config_path().ok();
        let home = dirs::home_dir().map(|home| home.join(HOME_CONFIG_DIR).join(CONFIG_FILENAME));
        xdg.into_iter().chain(home).collect()
    }
}
