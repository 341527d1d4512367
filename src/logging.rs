//! Log output for hzc.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogLevel;

/// Installs the global `tracing` subscriber.
///
/// Events go to stderr so command output on stdout stays clean. The
/// resolved `level` applies to hzc's own targets; `RUST_LOG` overrides it
/// when set. Calling this more than once is a no-op.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(level)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}

fn directive(level: LogLevel) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), level.as_filter())
}
