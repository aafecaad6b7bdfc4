use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use billsplit_observability::{LogConfig, LogFormat};

/// How the summary is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatArg {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "billsplit")]
#[command(about = "Split a bill: add people, their items and fees, and see what each owes")]
pub struct CliConfig {
    /// Summary output format
    #[arg(long, value_enum, env = "BILLSPLIT_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log record format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormatArg::Compact)]
    pub log_format: LogFormatArg,

    /// Read actions from this file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Only render on `show` and once at the end of input
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            format: match self.log_format {
                LogFormatArg::Compact => LogFormat::Compact,
                LogFormatArg::Json => LogFormat::Json,
            },
            verbose: self.verbose,
        }
    }
}
