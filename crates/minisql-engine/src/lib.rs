//! Grammar-agnostic lexing and parsing engine.
//!
//! A language built on this crate supplies three things: a token kind enum
//! implementing [`Terminal`], a [`Lexicon`] (classifier, keyword table,
//! single-character operators), and grammar rules written against the two
//! [`Driver`] primitives `expect` and `branch`. Everything else is shared:
//!
//! ```text
//! source ─► Tokenizer ─► Lexer<L> ─► Token<K>… ─► Driver<K, _> ─► grammar rules
//! ```
//!
//! The token sequence is pulled lazily: the driver holds exactly one
//! lookahead token and asks the lexer for the next one only when a token is
//! consumed.

pub mod classify;
pub mod driver;
pub mod instrumentation;
pub mod lexer;
pub mod token;
pub mod tokenizer;

pub use classify::{CharClass, classify};
pub use driver::Driver;
pub use instrumentation::{ParseMetricsSnapshot, parse_metrics_snapshot, reset_parse_metrics};
pub use lexer::{Lexer, Lexicon};
pub use token::{Location, Span, Terminal, Token};
pub use tokenizer::Tokenizer;
