//! Interactive vs scripted classification.

use std::ffi::OsString;

use clap::{ArgMatches, Command};

/// How this process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Long-lived session reading commands until cancelled.
    Interactive,
    /// One command run to completion.
    Scripted,
}

/// Decides the execution mode from the tree shape and the raw arguments.
///
/// Interactive when no leaf command matches: no subcommand at all, or a
/// command group without one of its subcommands. Arguments that fail to
/// parse (including `--help` and `--version`) are scripted so the real run
/// reports them.
///
/// Takes the tree by value; parsing leaves state behind in it, so the
/// caller builds a separate one for execution.
pub fn classify(mut command: Command, args: &[OsString]) -> ExecutionMode {
    let matches = match command.try_get_matches_from_mut(args) {
        Ok(matches) => matches,
        Err(_) => return ExecutionMode::Scripted,
    };
    if matches_leaf(&command, &matches) {
        ExecutionMode::Scripted
    } else {
        ExecutionMode::Interactive
    }
}

fn matches_leaf(command: &Command, matches: &ArgMatches) -> bool {
    match matches.subcommand() {
        Some((name, sub_matches)) => command
            .find_subcommand(name)
            .is_some_and(|sub| matches_leaf(sub, sub_matches)),
        None => !command.has_subcommands(),
    }
}
