//! Character cursor over the source text.
//!
//! The tokenizer knows nothing about any grammar. It offers the handful of
//! run-reading operations a lexical function dispatches to after classifying
//! the current character. Every operation except [`Tokenizer::peek_char`]
//! advances the cursor; the cursor never moves backwards.

use crate::classify::{CharClass, classify};
use crate::token::Location;

#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    src: &'a str,
    at: Location,
    classify: fn(Option<char>) -> CharClass,
}

impl<'a> Tokenizer<'a> {
    /// Tokenizer using the default [`classify`] function.
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self::with_classifier(src, classify)
    }

    /// Tokenizer whose whitespace and digit runs follow `classify`.
    #[must_use]
    pub fn with_classifier(src: &'a str, classify: fn(Option<char>) -> CharClass) -> Self {
        Self {
            src,
            at: Location::START,
            classify,
        }
    }

    /// Current cursor position.
    #[must_use]
    pub const fn mark(&self) -> Location {
        self.at
    }

    /// Current character, or `None` at end of input. Does not advance.
    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.src[self.at.offset..].chars().next()
    }

    /// Classification of the current character.
    #[must_use]
    pub fn peek_class(&self) -> CharClass {
        (self.classify)(self.peek_char())
    }

    /// Skip a maximal run of whitespace and return it.
    pub fn skip_whitespace(&mut self) -> &'a str {
        self.take_while(|t, c| (t.classify)(Some(c)) == CharClass::Whitespace)
    }

    /// Read the identifier starting at the current character.
    ///
    /// The current character is taken unconditionally (the caller has already
    /// classified it as a letter); subsequent characters are taken while
    /// `continues` accepts them.
    pub fn read_identifier(&mut self, continues: impl Fn(char) -> bool) -> &'a str {
        let start = self.at.offset;
        if self.bump().is_some() {
            self.take_while(|_, c| continues(c));
        }
        &self.src[start..self.at.offset]
    }

    /// Read a maximal run of digits.
    pub fn read_number(&mut self) -> &'a str {
        self.take_while(|t, c| (t.classify)(Some(c)) == CharClass::Digit)
    }

    /// Read exactly one character.
    ///
    /// Must not be called at end of input; callers check [`Self::peek_char`]
    /// first. In release builds the call is a no-op returning `""`.
    pub fn read_one(&mut self) -> &'a str {
        debug_assert!(
            self.peek_char().is_some(),
            "read_one called at end of input"
        );
        let start = self.at.offset;
        self.bump();
        &self.src[start..self.at.offset]
    }

    fn take_while(&mut self, accept: impl Fn(&Self, char) -> bool) -> &'a str {
        let start = self.at.offset;
        while let Some(c) = self.peek_char() {
            if !accept(self, c) {
                break;
            }
            self.bump();
        }
        &self.src[start..self.at.offset]
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.at.offset += c.len_utf8();
        if c == '\n' {
            self.at.line = self.at.line.saturating_add(1);
            self.at.col = 1;
        } else {
            self.at.col = self.at.col.saturating_add(1);
        }
        Some(c)
    }
}
