//! Tracing/logging initialization.
//!
//! Logs always go to stderr: stdout belongs to whatever the binary renders.

use tracing_subscriber::EnvFilter;

/// Line format of emitted log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Single-line human readable records.
    #[default]
    Compact,
    /// One JSON object per record, with timestamps.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Lower the default level from `warn` to `debug`.
    pub verbose: bool,
}

impl LogConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub fn default_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Initialize tracing/logging for the process.
///
/// `RUST_LOG` takes precedence over the configured default level.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Compact => builder.compact().without_time().try_init(),
    };
}
