//! LL(1) parser driver.
//!
//! Grammar rules see the token stream only through two primitives:
//!
//! * [`Driver::expect`] consumes the lookahead if it has the required kind;
//! * [`Driver::branch`] reports the lookahead kind, without consuming it, if
//!   it is one of the offered alternatives.
//!
//! Both fail with a [`SyntaxError`] naming what was expected and what was
//! found. There is no backtracking and no recovery: the first mismatch ends
//! the parse.

use minisql_error::{SyntaxError, SyntaxErrorCause};
use tracing::debug;

use crate::instrumentation;
use crate::token::{Location, Terminal, Token};

pub struct Driver<K, I> {
    tokens: I,
    lookahead: Token<K>,
}

impl<K, I> Driver<K, I>
where
    K: Terminal,
    I: Iterator<Item = Token<K>>,
{
    /// Prime the lookahead slot with the first token.
    pub fn new(mut tokens: I) -> Self {
        let lookahead = tokens
            .next()
            .unwrap_or_else(|| Token::end_of_input(Location::START));
        Self { tokens, lookahead }
    }

    /// Consume a token of kind `kind` and return its text.
    pub fn expect(&mut self, kind: K) -> Result<String, SyntaxError> {
        if self.lookahead.kind != kind {
            return Err(self.unexpected(&[kind]));
        }
        let next = self.pull();
        let consumed = std::mem::replace(&mut self.lookahead, next);
        instrumentation::record_token_consumed();
        Ok(consumed.text)
    }

    /// Return the lookahead kind if it is one of `alternatives`.
    pub fn branch(&self, alternatives: &[K]) -> Result<K, SyntaxError> {
        let kind = self.lookahead.kind;
        if alternatives.contains(&kind) {
            Ok(kind)
        } else {
            Err(self.unexpected(alternatives))
        }
    }

    /// Require end of input.
    pub fn finish(mut self) -> Result<(), SyntaxError> {
        self.expect(K::END).map(drop)
    }

    /// Source location of the lookahead token.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.lookahead.location()
    }

    fn pull(&mut self) -> Token<K> {
        // Past the lexer's own END token, keep answering END.
        self.tokens
            .next()
            .unwrap_or_else(|| Token::end_of_input(self.lookahead.end_location()))
    }

    /// Syntax error for the lookahead token, naming `expected` as the kinds
    /// that would have been accepted. Does not consume anything.
    pub fn unexpected(&self, expected: &[K]) -> SyntaxError {
        let found = &self.lookahead;
        let cause = if found.is_error() {
            SyntaxErrorCause::UnrecognizedCharacter
        } else {
            SyntaxErrorCause::UnexpectedToken
        };
        instrumentation::record_syntax_error(cause);
        let err = SyntaxError {
            expected: expected.iter().map(ToString::to_string).collect(),
            found: found.kind.describe(&found.text),
            lexeme: found.text.clone(),
            offset: found.span.start,
            line: found.line,
            col: found.col,
            cause,
        };
        debug!(
            line = err.line,
            col = err.col,
            expected = %err.expected_list(),
            found = %err.found,
            lexical = err.is_lexical(),
            "syntax error"
        );
        err
    }
}
