//! Command-line arguments and the resolved run configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use minisql_error::{MiniSqlError, Result};

/// Environment variable holding the log filter when `--log-level` is absent.
pub const LOG_ENV: &str = "MINISQL_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of statements.
    #[default]
    Json,
    /// Rust debug trees, one per statement.
    Debug,
    /// The token stream, one token per line; nothing is parsed.
    Tokens,
}

#[derive(Debug, Parser)]
#[command(name = "minisql", version, about = "Parse minisql statements and print their syntax trees")]
pub struct Args {
    /// Script to parse (`-` or nothing reads stdin).
    #[arg(value_name = "FILE", conflicts_with = "execute")]
    pub file: Option<PathBuf>,

    /// Parse this SQL text instead of a file.
    #[arg(short = 'e', long, value_name = "SQL")]
    pub execute: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Log filter directives, e.g. `debug` or `minisql_engine=trace`.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

/// Where the SQL text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Inline(String),
    Stdin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub input: Input,
    pub format: OutputFormat,
    pub log_filter: String,
}

impl CliConfig {
    /// Resolve parsed arguments. `env_filter` is the value of [`LOG_ENV`];
    /// `--log-level` wins over it, and both fall back to
    /// [`DEFAULT_LOG_FILTER`].
    pub fn resolve(args: Args, env_filter: Option<String>) -> Result<Self> {
        let input = match (args.execute, args.file) {
            (Some(sql), _) => Input::Inline(sql),
            (None, Some(path)) if path.as_os_str() == "-" => Input::Stdin,
            (None, Some(path)) => Input::File(path),
            (None, None) => Input::Stdin,
        };

        let log_filter = args
            .log_level
            .or(env_filter)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());
        if log_filter.trim().is_empty() {
            return Err(MiniSqlError::Config("log filter must not be empty".to_owned()));
        }

        Ok(Self {
            input,
            format: args.format,
            log_filter,
        })
    }

    /// Resolve against the process environment.
    pub fn from_env(args: Args) -> Result<Self> {
        Self::resolve(args, std::env::var(LOG_ENV).ok())
    }
}
