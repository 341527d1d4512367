//! Command errors and the single formatting step for fatal errors.

use colored::Colorize;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors returned by leaf command handlers.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to render configuration as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A command group was invoked without one of its subcommands.
    #[error("'{group}' needs a subcommand, try 'help {group}'")]
    Incomplete { group: &'static str },

    #[error("command cancelled")]
    Cancelled,
}

/// Renders an error and its causes as one human-readable line.
///
/// Causes already spelled out in an outer message are not repeated.
pub fn handle_error(err: &anyhow::Error) -> String {
    let mut message = err.to_string();
    for cause in err.chain().skip(1) {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
    }
    format!("{} {}", "error:".red().bold(), message)
}
