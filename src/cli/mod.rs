//! Command-line interface definition and dispatch for hzc.
//!
//! Uses [`clap`] for argument parsing with derive macros. The command tree
//! is always obtained from [`build_command`], a pure factory: resolving the
//! configuration, classifying the execution mode and the real run each get
//! their own tree. Leaf handlers live in the [`config_cmd`] and [`cluster`]
//! submodules.

mod cluster;
mod config_cmd;
mod mode;

pub use mode::{classify, ExecutionMode};

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::{Config, GlobalFlagValues};
use crate::constants::{APP_NAME, EXIT_ERROR};
use crate::errors::CommandError;
use crate::{logging, repl};

/// Top-level CLI structure for hzc.
///
/// Without a subcommand hzc starts an interactive session.
#[derive(Parser, Debug)]
#[command(
    name = "hzc",
    version,
    about = "Command-line client for a distributed data grid"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags accepted before or after any subcommand.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Path to a YAML configuration file (empty searches the default locations)
    #[arg(
        short,
        long,
        global = true,
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub config: Option<PathBuf>,

    /// Cloud discovery token (enables cloud mode)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Cluster name
    #[arg(long, global = true, value_name = "NAME")]
    pub cluster: Option<String>,

    /// Comma-separated member addresses, e.g. host1:5701,host2:5701
    #[arg(long, global = true, value_name = "ADDRESSES")]
    pub address: Option<String>,

    /// Client log level (off, fatal, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl From<&GlobalArgs> for GlobalFlagValues {
    fn from(args: &GlobalArgs) -> Self {
        Self {
            config: args.config.clone(),
            token: args.token.clone(),
            cluster: args.cluster.clone(),
            address: args.address.clone(),
            log_level: args.log_level.clone(),
        }
    }
}

/// Available subcommands.
///
/// The `///` doc comments on variants double as `--help` text rendered by
/// clap.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the hzc version
    Version,
    /// Inspect and create configuration files
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
    /// Inspect the cluster connection settings
    Cluster {
        #[command(subcommand)]
        action: Option<ClusterAction>,
    },
}

/// Subcommands for the `config` command.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
    /// Show where configuration files are looked up
    Path,
    /// Write the default configuration to a file
    Init {
        /// Target file (defaults to the user config location)
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Subcommands for the `cluster` command.
#[derive(Subcommand, Debug)]
pub enum ClusterAction {
    /// Show the connection target hzc would use
    Info,
}

/// Builds a fresh command tree.
pub fn build_command() -> clap::Command {
    Cli::command()
}

/// Parses `args` (including the binary name) against a fresh command tree.
pub fn parse_from(args: &[OsString]) -> Result<Cli, clap::Error> {
    let matches = build_command().try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}

/// Runs hzc with the given process arguments and returns the exit status.
///
/// Resolves the configuration from defaults, the config file and the global
/// flags, installs logging at the resolved level, then dispatches either
/// the single requested command or an interactive session.
pub async fn run(args: Vec<OsString>) -> Result<ExitCode> {
    let cli = match parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => return Ok(report_clap_error(&err)),
    };

    let flags = GlobalFlagValues::from(&cli.global);
    let config = Config::resolve(&flags, &Config::default_search_paths())?;
    logging::init_logging(config.hazelcast.logger.level);

    let cancel = CancellationToken::new();
    let _release = cancel.clone().drop_guard();

    let mode = classify(build_command(), &args);
    debug!(?mode, "execution mode selected");
    dispatch(mode, &args, &config, &cancel).await
}

/// Runs either the interactive session or the single matched command.
///
/// In scripted mode the arguments are parsed again against a new tree and
/// the matched command runs once. Its error, if any, is returned for the
/// caller to report.
pub async fn dispatch(
    mode: ExecutionMode,
    args: &[OsString],
    config: &Config,
    cancel: &CancellationToken,
) -> Result<ExitCode> {
    match mode {
        ExecutionMode::Interactive => {
            repl::run_repl(config, cancel).await?;
            Ok(ExitCode::SUCCESS)
        }
        ExecutionMode::Scripted => {
            let cli = parse_from(args)?;
            let command = cli.command.ok_or_else(|| anyhow!("no command given"))?;
            execute(&command, config, cancel).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Routes a parsed command to its handler.
pub async fn execute(
    command: &Commands,
    config: &Config,
    cancel: &CancellationToken,
) -> Result<(), CommandError> {
    if cancel.is_cancelled() {
        return Err(CommandError::Cancelled);
    }
    debug!(?command, "executing command");
    match command {
        Commands::Version => {
            println!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Config { action } => match action {
            Some(action) => config_cmd::handle_config(action, config),
            None => Err(CommandError::Incomplete { group: "config" }),
        },
        Commands::Cluster { action } => match action {
            Some(action) => cluster::handle_cluster(action, config),
            None => Err(CommandError::Incomplete { group: "cluster" }),
        },
    }
}

/// Prints a clap parse outcome and maps it to an exit status.
///
/// Help and version output succeed; usage errors fail.
fn report_clap_error(err: &clap::Error) -> ExitCode {
    if err.use_stderr() {
        print!("{}", err.render());
        ExitCode::from(EXIT_ERROR)
    } else {
        let _ = err.print();
        ExitCode::SUCCESS
    }
}
