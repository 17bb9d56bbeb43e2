//! Error types for the minisql lexer/parser pipeline.
//!
//! Lexing never fails: an unrecognized character becomes an error token and
//! only turns into a [`SyntaxError`] once the parser driver needs a real token
//! at that position. Every failure therefore reaches the caller as a
//! [`SyntaxError`], with [`SyntaxErrorCause`] telling the two origins apart.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Why the parser driver rejected the lookahead token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxErrorCause {
    /// A well-formed token of the wrong kind.
    UnexpectedToken,
    /// The lexer could not classify a character and emitted an error token
    /// in its place.
    UnrecognizedCharacter,
}

/// First-failure syntax error raised by `expect` or `branch`.
///
/// `expected` and `found` hold display names of token kinds so that the
/// error stays independent of any one grammar's kind enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxError {
    /// Kinds the grammar would have accepted, in the order they were offered.
    pub expected: Vec<String>,
    /// Description of the token actually found.
    pub found: String,
    /// Exact source text of the offending token (empty at end of input).
    pub lexeme: String,
    /// Byte offset of the offending token.
    pub offset: usize,
    /// 1-based line of the offending token.
    pub line: u32,
    /// 1-based column (in characters) of the offending token.
    pub col: u32,
    pub cause: SyntaxErrorCause,
}

impl SyntaxError {
    /// `true` when the failure was caused by an unrecognized character.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self.cause, SyntaxErrorCause::UnrecognizedCharacter)
    }

    /// Human-readable rendering of the expected alternatives, e.g.
    /// `"one of SELECT, CREATE or DELETE"`.
    #[must_use]
    pub fn expected_list(&self) -> String {
        match self.expected.as_slice() {
            [] => "nothing".to_owned(),
            [only] => only.clone(),
            [init @ .., last] => format!("one of {} or {last}", init.join(", ")),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: expected {}, found ",
            self.line,
            self.col,
            self.expected_list()
        )?;
        match self.cause {
            SyntaxErrorCause::UnexpectedToken => f.write_str(&self.found),
            SyntaxErrorCause::UnrecognizedCharacter => {
                write!(f, "unrecognized character `{}`", self.lexeme)
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Top-level error for anything built on the parser (the shell, scripts).
#[derive(Debug, Error)]
pub enum MiniSqlError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl MiniSqlError {
    /// Process exit status used by the shell for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Syntax(_) => 1,
            Self::Io(_) | Self::Config(_) => 2,
        }
    }
}

/// Result alias used by the shell and other collaborators.
pub type Result<T, E = MiniSqlError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    fn error(expected: &[&str], found: &str, lexeme: &str, cause: SyntaxErrorCause) -> SyntaxError {
        SyntaxError {
            expected: expected.iter().map(|s| (*s).to_owned()).collect(),
            found: found.to_owned(),
            lexeme: lexeme.to_owned(),
            offset: 16,
            line: 1,
            col: 17,
            cause,
        }
    }

    #[test]
    fn single_expected_kind() {
        let err = error(&["';'"], "WHERE", "WHERE", SyntaxErrorCause::UnexpectedToken);
        assert_eq!(err.to_string(), "1:17: expected ';', found WHERE");
        assert!(!err.is_lexical());
    }

    #[test]
    fn several_expected_kinds() {
        let err = error(
            &["SELECT", "CREATE", "DELETE"],
            "identifier `drop`",
            "drop",
            SyntaxErrorCause::UnexpectedToken,
        );
        assert_eq!(
            err.to_string(),
            "1:17: expected one of SELECT, CREATE or DELETE, found identifier `drop`"
        );
    }

    #[test]
    fn unrecognized_character() {
        let err = error(
            &["identifier"],
            "invalid character `#`",
            "#",
            SyntaxErrorCause::UnrecognizedCharacter,
        );
        assert!(err.is_lexical());
        assert_eq!(
            err.to_string(),
            "1:17: expected identifier, found unrecognized character `#`"
        );
    }

    #[test]
    fn unrecognized_quote_stays_readable() {
        let err = error(
            &["identifier"],
            "invalid character `'`",
            "'",
            SyntaxErrorCause::UnrecognizedCharacter,
        );
        assert_eq!(
            err.to_string(),
            "1:17: expected identifier, found unrecognized character `'`"
        );
    }

    #[test]
    fn syntax_error_converts_into_crate_error() {
        let err: MiniSqlError =
            error(&["FROM"], "';'", ";", SyntaxErrorCause::UnexpectedToken).into();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "1:17: expected FROM, found ';'");
    }

    #[test]
    fn io_and_config_errors_use_exit_code_two() {
        let io = MiniSqlError::from(std::io::Error::other("disk on fire"));
        assert_eq!(io.exit_code(), 2);
        assert_eq!(io.to_string(), "i/o error: disk on fire");
        let config = MiniSqlError::Config("unknown format".to_owned());
        assert_eq!(config.exit_code(), 2);
    }

    #[test]
    fn serializes_cause_in_snake_case() {
        let err = error(&["FROM"], "end of input", "", SyntaxErrorCause::UnexpectedToken);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["cause"], "unexpected_token");
        assert_eq!(json["expected"][0], "FROM");
    }
}
