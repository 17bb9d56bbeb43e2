//! Lexer and parser-driver observability counters.
//!
//! Process-local counters, updated with relaxed atomics. They are the only
//! state shared between parses and never influence parsing.

use std::sync::atomic::{AtomicU64, Ordering};

use minisql_error::SyntaxErrorCause;

/// Snapshot of the pipeline counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseMetricsSnapshot {
    /// Tokens produced by any lexer, end-of-input tokens included.
    pub minisql_tokens_emitted_total: u64,
    /// Error tokens produced for unrecognized characters.
    pub minisql_error_tokens_total: u64,
    /// Tokens consumed by `Driver::expect`.
    pub minisql_tokens_consumed_total: u64,
    /// Syntax errors raised by `expect` or `branch`.
    pub minisql_syntax_errors_total: u64,
    /// The subset of syntax errors caused by an error token.
    pub minisql_unrecognized_character_errors_total: u64,
}

static TOKENS_EMITTED_TOTAL: AtomicU64 = AtomicU64::new(0);
static ERROR_TOKENS_TOTAL: AtomicU64 = AtomicU64::new(0);
static TOKENS_CONSUMED_TOTAL: AtomicU64 = AtomicU64::new(0);
static SYNTAX_ERRORS_TOTAL: AtomicU64 = AtomicU64::new(0);
static UNRECOGNIZED_CHARACTER_ERRORS_TOTAL: AtomicU64 = AtomicU64::new(0);

pub(crate) fn record_token_emitted(is_error: bool) {
    TOKENS_EMITTED_TOTAL.fetch_add(1, Ordering::Relaxed);
    if is_error {
        ERROR_TOKENS_TOTAL.fetch_add(1, Ordering::Relaxed);
    }
}

pub(crate) fn record_token_consumed() {
    TOKENS_CONSUMED_TOTAL.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_syntax_error(cause: SyntaxErrorCause) {
    SYNTAX_ERRORS_TOTAL.fetch_add(1, Ordering::Relaxed);
    if cause == SyntaxErrorCause::UnrecognizedCharacter {
        UNRECOGNIZED_CHARACTER_ERRORS_TOTAL.fetch_add(1, Ordering::Relaxed);
    }
}

/// Return a snapshot of the pipeline counters.
#[must_use]
pub fn parse_metrics_snapshot() -> ParseMetricsSnapshot {
    ParseMetricsSnapshot {
        minisql_tokens_emitted_total: TOKENS_EMITTED_TOTAL.load(Ordering::Relaxed),
        minisql_error_tokens_total: ERROR_TOKENS_TOTAL.load(Ordering::Relaxed),
        minisql_tokens_consumed_total: TOKENS_CONSUMED_TOTAL.load(Ordering::Relaxed),
        minisql_syntax_errors_total: SYNTAX_ERRORS_TOTAL.load(Ordering::Relaxed),
        minisql_unrecognized_character_errors_total: UNRECOGNIZED_CHARACTER_ERRORS_TOTAL
            .load(Ordering::Relaxed),
    }
}

/// Reset all pipeline counters.
pub fn reset_parse_metrics() {
    TOKENS_EMITTED_TOTAL.store(0, Ordering::Relaxed);
    ERROR_TOKENS_TOTAL.store(0, Ordering::Relaxed);
    TOKENS_CONSUMED_TOTAL.store(0, Ordering::Relaxed);
    SYNTAX_ERRORS_TOTAL.store(0, Ordering::Relaxed);
    UNRECOGNIZED_CHARACTER_ERRORS_TOTAL.store(0, Ordering::Relaxed);
}
