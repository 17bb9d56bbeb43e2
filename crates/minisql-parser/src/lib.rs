// SQL lexer and parser for the minisql dialect.
//
// Hand-written recursive descent over the engine's `expect`/`branch`
// primitives. Produces an AST from `minisql-ast`.

pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::{Lexer, SqlLexicon, tokenize};
pub use minisql_engine::{ParseMetricsSnapshot, parse_metrics_snapshot, reset_parse_metrics};
pub use minisql_error::{SyntaxError, SyntaxErrorCause};
pub use parser::{Parser, parse, parse_script};
pub use token::{Token, TokenKind};
