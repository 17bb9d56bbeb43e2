//! The lexical function: a lazy token iterator over a [`Tokenizer`].
//!
//! Each call to `next` classifies the current character and dispatches to the
//! matching tokenizer operation. Whitespace is consumed but never emitted.
//! A character the [`Lexicon`] does not recognize becomes a single
//! [`Terminal::ERROR`] token and lexing carries on; the failure surfaces
//! later, when the parser driver needs a valid token at that position.
//! The sequence always ends with exactly one [`Terminal::END`] token.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use tracing::trace;

use crate::classify::{CharClass, classify};
use crate::instrumentation;
use crate::token::{Terminal, Token};
use crate::tokenizer::Tokenizer;

/// Per-grammar lexical configuration.
pub trait Lexicon {
    type Kind: Terminal;

    /// Kind for identifiers that are not keywords.
    const IDENTIFIER: Self::Kind;
    /// Kind for digit runs.
    const NUMBER: Self::Kind;

    fn classify(c: Option<char>) -> CharClass {
        classify(c)
    }

    /// Whether `c` may continue an identifier after its first letter.
    fn continues_identifier(c: char) -> bool {
        matches!(Self::classify(Some(c)), CharClass::Letter | CharClass::Digit)
    }

    /// Keyword kind for an ASCII-uppercased identifier, if it is one.
    fn keyword(normalized: &str) -> Option<Self::Kind>;

    /// Kind of a single-character operator or punctuation mark.
    fn operator(c: char) -> Option<Self::Kind>;
}

pub struct Lexer<'a, L: Lexicon> {
    tokenizer: Tokenizer<'a>,
    finished: bool,
    lexicon: PhantomData<L>,
}

impl<'a, L: Lexicon> Lexer<'a, L> {
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self {
            tokenizer: Tokenizer::with_classifier(src, L::classify),
            finished: false,
            lexicon: PhantomData,
        }
    }

    /// Lex the whole input eagerly, end-of-input token included.
    #[must_use]
    pub fn tokenize(src: &'a str) -> Vec<Token<L::Kind>> {
        Self::new(src).collect()
    }

    fn scan(&mut self) -> Token<L::Kind> {
        loop {
            let start = self.tokenizer.mark();
            let class = self.tokenizer.peek_class();
            let c = self.tokenizer.peek_char();
            let (kind, text) = match (class, c) {
                (CharClass::End, _) | (_, None) => {
                    self.finished = true;
                    (L::Kind::END, "")
                }
                (CharClass::Whitespace, Some(_)) => {
                    self.tokenizer.skip_whitespace();
                    continue;
                }
                (CharClass::Digit, Some(_)) => (L::NUMBER, self.tokenizer.read_number()),
                (CharClass::Letter, Some(_)) => {
                    let text = self.tokenizer.read_identifier(L::continues_identifier);
                    let kind = L::keyword(&text.to_ascii_uppercase()).unwrap_or(L::IDENTIFIER);
                    (kind, text)
                }
                (CharClass::Other, Some(ch)) => {
                    let kind = L::operator(ch).unwrap_or(L::Kind::ERROR);
                    (kind, self.tokenizer.read_one())
                }
            };
            let token = Token::new(kind, text, start, self.tokenizer.mark().offset);
            trace!(
                kind = %token.kind,
                class = class.as_str(),
                text = token.text.as_str(),
                line = token.line,
                col = token.col,
                "token"
            );
            return token;
        }
    }
}

impl<L: Lexicon> Iterator for Lexer<'_, L> {
    type Item = Token<L::Kind>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.scan();
        instrumentation::record_token_emitted(token.is_error());
        Some(token)
    }
}

impl<L: Lexicon> FusedIterator for Lexer<'_, L> {}
