//! Interactive session for hzc.
//!
//! Provides a command loop using [`rustyline`] for readline support
//! (history, line editing). Each line is parsed as an hzc subcommand and
//! run against the configuration resolved at start-up, which stays
//! read-only for the whole session.

mod commands;

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::{HISTORY_FILENAME, PROMPT};

pub(crate) use commands::{handle_line, LineAction};

/// Runs the interactive session until it is cancelled.
///
/// # Readline behavior
///
/// - **Ctrl+C**: discards the current input, stays in the session
/// - **Ctrl+D**, `exit`, `quit`: cancels `cancel` and ends the session
/// - Readline history is persisted to `~/.cache/hzc/history.txt`
pub async fn run_repl(config: &Config, cancel: &CancellationToken) -> Result<()> {
    println!(
        "{} [cluster: {}] [addresses: {}] (Ctrl+D to exit, 'help' for commands)",
        "hzc".bold().cyan(),
        config.hazelcast.cluster.name.yellow(),
        config.hazelcast.cluster.network.addresses.join(",").yellow(),
    );
    println!();

    let mut rl = DefaultEditor::new()?;
    let history_path = Config::cache_dir().map(|dir| dir.join(HISTORY_FILENAME));
    if let Some(path) = history_path.as_ref().filter(|p| p.exists()) {
        if let Err(e) = rl.load_history(path) {
            debug!(error = %e, "could not load readline history");
        }
    }

    while !cancel.is_cancelled() {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if let Err(e) = rl.add_history_entry(line) {
                    debug!(error = %e, "could not add readline history entry");
                }

                match handle_line(line, config, cancel).await {
                    LineAction::Continue => {}
                    LineAction::Exit => cancel.cancel(),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".dimmed());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "goodbye.".dimmed());
                cancel.cancel();
            }
            Err(e) => {
                cancel.cancel();
                return Err(e.into());
            }
        }
    }

    if let Some(path) = history_path {
        save_history(&mut rl, &path);
    }

    Ok(())
}

/// Persists readline history. Failures are logged and never end the session
/// with an error.
fn save_history(rl: &mut DefaultEditor, path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!(
                error = %e,
                path = %parent.display(),
                "could not create history directory"
            );
            return;
        }
    }
    if let Err(e) = rl.save_history(path) {
        warn!(error = %e, path = %path.display(), "could not save readline history");
    }
}
