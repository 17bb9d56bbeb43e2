//! Tokens and source locations.

use std::fmt;

/// Byte range `[start, end)` in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A cursor position: byte offset plus 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl Location {
    pub const START: Self = Self {
        offset: 0,
        line: 1,
        col: 1,
    };
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

/// A grammar's closed set of token kinds, as seen by the engine.
///
/// Every grammar has a distinguished end-of-input kind and an error kind for
/// characters its lexicon does not recognize.
pub trait Terminal: Copy + Eq + fmt::Debug + fmt::Display {
    const END: Self;
    const ERROR: Self;

    /// Describe a token of this kind for diagnostics.
    ///
    /// The default appends the lexeme; grammars override this to drop it for
    /// kinds with a fixed spelling.
    fn describe(self, text: &str) -> String {
        if text.is_empty() {
            self.to_string()
        } else {
            format!("{self} `{text}`")
        }
    }
}

/// `(kind, text)` pair produced by a lexical function, stamped with its
/// source location. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<K> {
    pub kind: K,
    /// Exact matched lexeme, original case.
    pub text: String,
    pub span: Span,
    pub line: u32,
    pub col: u32,
}

impl<K: Terminal> Token<K> {
    #[must_use]
    pub fn new(kind: K, text: impl Into<String>, start: Location, end_offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            span: Span::new(start.offset, end_offset),
            line: start.line,
            col: start.col,
        }
    }

    /// Zero-width end-of-input token at `at`.
    #[must_use]
    pub fn end_of_input(at: Location) -> Self {
        Self::new(K::END, "", at, at.offset)
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == K::END
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == K::ERROR
    }

    /// Where this token starts.
    #[must_use]
    pub const fn location(&self) -> Location {
        Location {
            offset: self.span.start,
            line: self.line,
            col: self.col,
        }
    }

    /// Position just past this token, assuming it does not span a newline.
    #[must_use]
    pub fn end_location(&self) -> Location {
        let width = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        Location {
            offset: self.span.end,
            line: self.line,
            col: self.col.saturating_add(width),
        }
    }
}

impl<K: Terminal> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind.describe(&self.text))
    }
}
