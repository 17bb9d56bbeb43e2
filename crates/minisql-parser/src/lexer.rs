// SQL lexicon: the grammar-specific half of the lexical function.

use minisql_engine::Lexicon;

use crate::token::{Token, TokenKind};

/// Keyword and punctuation tables for the minisql dialect.
///
/// Identifiers are a letter followed by letters or digits; `_` and every
/// other character outside `* , ( ) ; =` lex as [`TokenKind::Error`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlLexicon;

impl Lexicon for SqlLexicon {
    type Kind = TokenKind;

    const IDENTIFIER: TokenKind = TokenKind::Ident;
    const NUMBER: TokenKind = TokenKind::Number;

    fn keyword(normalized: &str) -> Option<TokenKind> {
        TokenKind::lookup_keyword(normalized)
    }

    fn operator(c: char) -> Option<TokenKind> {
        TokenKind::lookup_operator(c)
    }
}

/// Lazy SQL token stream.
pub type Lexer<'a> = minisql_engine::Lexer<'a, SqlLexicon>;

/// Lex `sql` eagerly; the last token is always [`TokenKind::End`].
#[must_use]
pub fn tokenize(sql: &str) -> Vec<Token> {
    Lexer::tokenize(sql)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(sql: &str) -> Vec<TokenKind> {
        tokenize(sql).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn select_star() {
        assert_eq!(
            kinds("SELECT * FROM t;"),
            vec![
                TokenKind::KwSelect,
                TokenKind::Star,
                TokenKind::KwFrom,
                TokenKind::Ident,
                TokenKind::Semicolon,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn create_table_punctuation_and_numbers() {
        let tokens = tokenize("create table P (name varchar(255),);");
        let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::KwCreate, "create"),
                (TokenKind::KwTable, "table"),
                (TokenKind::Ident, "P"),
                (TokenKind::LeftParen, "("),
                (TokenKind::Ident, "name"),
                (TokenKind::Ident, "varchar"),
                (TokenKind::LeftParen, "("),
                (TokenKind::Number, "255"),
                (TokenKind::RightParen, ")"),
                (TokenKind::Comma, ","),
                (TokenKind::RightParen, ")"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::End, ""),
            ]
        );
    }

    #[test]
    fn keywords_keep_original_case() {
        let tokens = tokenize("DeLeTe");
        assert_eq!(tokens[0].kind, TokenKind::KwDelete);
        assert_eq!(tokens[0].text, "DeLeTe");
    }

    #[test]
    fn identifiers_may_contain_digits_but_not_start_with_them() {
        assert_eq!(
            kinds("atr1 1atr"),
            vec![
                TokenKind::Ident,
                TokenKind::Number,
                TokenKind::Ident,
                TokenKind::End
            ]
        );
    }

    #[test]
    fn keyword_prefix_is_an_identifier() {
        let tokens = tokenize("selection fromage");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[1].kind, TokenKind::Ident);
    }

    #[test]
    fn unrecognized_characters_become_error_tokens() {
        let tokens = tokenize("a_b 'x' 1.5");
        let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::Ident, "a"),
                (TokenKind::Error, "_"),
                (TokenKind::Ident, "b"),
                (TokenKind::Error, "'"),
                (TokenKind::Ident, "x"),
                (TokenKind::Error, "'"),
                (TokenKind::Number, "1"),
                (TokenKind::Error, "."),
                (TokenKind::Number, "5"),
                (TokenKind::End, ""),
            ]
        );
    }

    #[test]
    fn whitespace_is_never_emitted() {
        assert_eq!(kinds(" \t\r\n  "), vec![TokenKind::End]);
        assert_eq!(kinds("\n\nx\n"), vec![TokenKind::Ident, TokenKind::End]);
    }

    #[test]
    fn tokens_report_line_and_column() {
        let tokens = tokenize("SELECT a\n  FROM t;");
        let from = &tokens[2];
        assert_eq!(from.kind, TokenKind::KwFrom);
        assert_eq!((from.line, from.col), (2, 3));
    }

    #[test]
    fn relexing_is_idempotent() {
        let sql = "DELETE FROM wherever WHERE atr1=val1, atr2=val2;";
        assert_eq!(tokenize(sql), tokenize(sql));
    }
}
