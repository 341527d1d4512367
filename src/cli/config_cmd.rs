//! Configuration CLI operations for hzc.
//!
//! Handles the `hzc config` subcommand family: printing the effective
//! configuration, listing lookup locations and writing a default file.

use colored::Colorize;

use super::ConfigAction;
use crate::config::{Config, ConfigError};
use crate::errors::CommandError;
use crate::format;

/// Dispatches a config subcommand to its handler.
pub(crate) fn handle_config(action: &ConfigAction, config: &Config) -> Result<(), CommandError> {
    match action {
        ConfigAction::Show { json } => {
            println!("{}", render_config(config, *json)?);
            Ok(())
        }
        ConfigAction::Path => {
            config_paths();
            Ok(())
        }
        ConfigAction::Init { path, force } => {
            let target = match path {
                Some(path) => path.clone(),
                None => Config::config_path()?,
            };
            Config::default().write_to(&target, *force)?;
            println!(
                "{} {}",
                "Wrote default configuration to".green(),
                target.display()
            );
            Ok(())
        }
    }
}

/// Renders the configuration as YAML, or pretty JSON when `json` is set.
fn render_config(config: &Config, json: bool) -> Result<String, CommandError> {
    if json {
        Ok(serde_json::to_string_pretty(config)?)
    } else {
        Ok(config.to_yaml().map(|yaml| yaml.trim_end().to_string())?)
    }
}

/// Prints the default lookup locations, marking the one that would be used.
fn config_paths() {
    let paths = Config::default_search_paths();
    if paths.is_empty() {
        println!("{}", ConfigError::NoConfigDir);
        return;
    }
    println!("{}", format::format_heading("Configuration search path"));
    let active = paths.iter().position(|p| p.is_file());
    for (i, path) in paths.iter().enumerate() {
        let marker = if Some(i) == active {
            "(in use)".green().to_string()
        } else if path.exists() {
            "(shadowed)".yellow().to_string()
        } else {
            "(missing)".dimmed().to_string()
        };
        println!("  {} {}", path.display(), marker);
    }
}
