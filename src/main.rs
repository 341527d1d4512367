//! Entry point for hzc, a command-line client for a distributed data grid.
//!
//! This binary resolves the effective configuration and dispatches either a
//! single command or an interactive session via [`cli::run`].

mod cli;
mod config;
mod constants;
mod errors;
mod format;
mod logging;
mod repl;

use std::process::ExitCode;

/// Runs the hzc CLI.
///
/// Every fatal error, from configuration resolution or from the command
/// itself, is printed once to stdout through [`errors::handle_error`] and
/// ends the process with [`constants::EXIT_ERROR`].
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = std::env::args_os().collect();
    match cli::run(args).await {
        Ok(code) => code,
        Err(err) => {
            println!("{}", errors::handle_error(&err));
            ExitCode::from(constants::EXIT_ERROR)
        }
    }
}
