//! Config file loading and overlay.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::{Config, ConfigLayer};
use super::ConfigError;

/// Overlays the config file onto `base` and returns the result.
///
/// - `path` set (and non-empty): that file must exist, otherwise
///   [`ConfigError::NotFound`].
/// - `path` unset: the first existing entry of `default_search` is used.
///   When none exists, `base` is returned unchanged.
/// - An empty or whitespace-only file leaves `base` unchanged.
///
/// Only the keys present in the file replace values in `base`.
pub fn resolve_file(
    path: Option<&Path>,
    base: Config,
    default_search: &[PathBuf],
) -> Result<Config, ConfigError> {
    let path = match path.filter(|p| !p.as_os_str().is_empty()) {
        Some(explicit) => {
            if !explicit.exists() {
                return Err(ConfigError::NotFound {
                    path: explicit.to_path_buf(),
                });
            }
            explicit
        }
        None => match default_search.iter().find(|candidate| candidate.is_file()) {
            Some(found) => found.as_path(),
            None => {
                debug!("no configuration file found, using defaults");
                return Ok(base);
            }
        },
    };
    overlay_file(path, base)
}

/// In-place form of [`resolve_file`]. On error `config` is left untouched.
pub fn read_config(
    path: Option<&Path>,
    config: &mut Config,
    default_search: &[PathBuf],
) -> Result<(), ConfigError> {
    *config = resolve_file(path, config.clone(), default_search)?;
    Ok(())
}

fn overlay_file(path: &Path, mut base: Config) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if contents.trim().is_empty() {
        debug!(path = %path.display(), "configuration file is empty, nothing to apply");
        return Ok(base);
    }

    let layer: ConfigLayer =
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    layer
        .validate()
        .map_err(|message| ConfigError::InvalidValue {
            path: path.to_path_buf(),
            message,
        })?;
    layer.apply(&mut base);

    debug!(path = %path.display(), "configuration file applied");
    Ok(base)
}
