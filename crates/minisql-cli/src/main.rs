//! `minisql`: parse a script of minisql statements and print the result.
//!
//! Usage:
//!   minisql [FILE]                  - parse a file (stdin when omitted or `-`)
//!   minisql -e `<sql>`              - parse inline SQL
//!   minisql --format debug|tokens   - choose the output rendering
//!
//! Exit status is 0 on success, 1 on a syntax error and 2 on I/O or
//! configuration errors.

mod config;

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser as _;
use minisql_ast::Statement;
use minisql_error::{MiniSqlError, Result};
use minisql_parser::{parse_metrics_snapshot, parse_script, reset_parse_metrics, tokenize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{Args, CliConfig, Input, OutputFormat};

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_env(args)?;
    init_logging(&config.log_filter)?;

    let sql = read_input(&config.input)?;
    info!(bytes = sql.len(), format = ?config.format, "read input");

    reset_parse_metrics();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Tokens => write_tokens(&mut out, &sql)?,
        OutputFormat::Json | OutputFormat::Debug => {
            let statements = parse_script(&sql)?;
            write_statements(&mut out, &statements, config.format)?;
        }
    }
    out.flush()?;

    let metrics = parse_metrics_snapshot();
    debug!(
        tokens_emitted = metrics.minisql_tokens_emitted_total,
        tokens_consumed = metrics.minisql_tokens_consumed_total,
        error_tokens = metrics.minisql_error_tokens_total,
        "parse metrics"
    );
    Ok(())
}

fn init_logging(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|err| MiniSqlError::Config(format!("bad log filter `{filter}`: {err}")))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| MiniSqlError::Config(err.to_string()))
}

fn read_input(input: &Input) -> Result<String> {
    match input {
        Input::Inline(sql) => Ok(sql.clone()),
        Input::File(path) => std::fs::read_to_string(path).map_err(|err| {
            MiniSqlError::Io(io::Error::new(
                err.kind(),
                format!("{}: {err}", path.display()),
            ))
        }),
        Input::Stdin => {
            let mut sql = String::new();
            io::stdin().read_to_string(&mut sql)?;
            Ok(sql)
        }
    }
}

fn write_statements(
    out: &mut impl Write,
    statements: &[Statement],
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, statements).map_err(io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }
    for stmt in statements {
        writeln!(out, "{stmt:#?}")?;
    }
    Ok(())
}

/// One token per line: `line:col<TAB>description`. Error tokens are listed,
/// not reported.
fn write_tokens(out: &mut impl Write, sql: &str) -> Result<()> {
    for token in tokenize(sql) {
        writeln!(out, "{}:{}\t{token}", token.line, token.col)?;
    }
    Ok(())
}
