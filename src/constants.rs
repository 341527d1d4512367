//! Centralized constants for hzc.
//!
//! Default configuration values, file names and exit codes live here so
//! they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "hzc";

// --- Configuration defaults ---

/// Cluster name used when neither the config file nor flags provide one.
pub const DEFAULT_CLUSTER_NAME: &str = "dev";

/// Client name reported to the cluster.
pub const DEFAULT_CLIENT_NAME: &str = "hzc";

/// Member address tried when no addresses are configured.
pub const DEFAULT_ADDRESS: &str = "localhost:5701";

/// Fixed TLS server name of the managed cloud endpoint.
pub const CLOUD_SERVER_NAME: &str = "hazelcast.cloud";

// --- Files ---

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Dot-directory under `$HOME` searched after the XDG config directory.
pub const HOME_CONFIG_DIR: &str = ".hzc";

/// Readline history filename.
pub const HISTORY_FILENAME: &str = "history.txt";

// --- Interactive session ---

/// Prompt shown by the interactive session.
pub const PROMPT: &str = "hzc> ";

// --- Exit codes ---

/// Exit status for any configuration or command failure.
pub const EXIT_ERROR: u8 = 1;
