//! Line handling for the interactive session.
//!
//! A line is either a session keyword (`exit`, `quit`) or an hzc
//! subcommand. Returns a [`LineAction`] so the loop can decide how to
//! proceed.

use clap::Parser;
use tokio_util::sync::CancellationToken;

use crate::cli::{self, Commands};
use crate::config::Config;
use crate::errors::handle_error;

/// Action returned after handling one line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineAction {
    /// Keep reading input.
    Continue,
    /// End the session.
    Exit,
}

// One interactive line: a subcommand without global flags. Parsed against
// a fresh tree for every line.
#[derive(Parser, Debug)]
#[command(
    name = "hzc",
    about = "Commands available in this session (exit or quit to leave)",
    no_binary_name = true,
    disable_version_flag = true
)]
struct SessionLine {
    #[command(subcommand)]
    command: Commands,
}

/// Parses and runs one line of input.
///
/// Parse and command errors are printed and the session goes on.
pub(crate) async fn handle_line(
    line: &str,
    config: &Config,
    cancel: &CancellationToken,
) -> LineAction {
    if matches!(line, "exit" | "quit") {
        return LineAction::Exit;
    }

    let parsed = match SessionLine::try_parse_from(line.split_whitespace()) {
        Ok(parsed) => parsed,
        Err(err) => {
            let _ = err.print();
            return LineAction::Continue;
        }
    };

    if let Err(err) = cli::execute(&parsed.command, config, cancel).await {
        println!("{}", handle_error(&err.into()));
    }
    LineAction::Continue
}
