// SQL token kinds, keyword table and operator table.

use std::fmt;

use minisql_engine::Terminal;

/// A lexed SQL token.
pub type Token = minisql_engine::Token<TokenKind>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Terminal / error ===
    End,
    /// Unrecognized character.
    Error,

    // === Variable text ===
    Ident,
    /// Run of ASCII digits.
    Number,

    // === Punctuation ===
    Star,
    Comma,
    LeftParen,
    RightParen,
    Semicolon,
    Equals,

    // === Keywords ===
    KwSelect,
    KwFrom,
    KwCreate,
    KwTable,
    KwDelete,
    KwWhere,
}

impl TokenKind {
    /// Keywords that open a statement, in dispatch order.
    pub const STATEMENT_STARTS: [Self; 3] = [Self::KwSelect, Self::KwCreate, Self::KwDelete];

    /// Keyword for an already uppercased spelling.
    #[must_use]
    pub fn lookup_keyword(normalized: &str) -> Option<Self> {
        Some(match normalized {
            "SELECT" => Self::KwSelect,
            "FROM" => Self::KwFrom,
            "CREATE" => Self::KwCreate,
            "TABLE" => Self::KwTable,
            "DELETE" => Self::KwDelete,
            "WHERE" => Self::KwWhere,
            _ => return None,
        })
    }

    /// `true` if `word` spells a keyword in any case.
    #[must_use]
    pub fn is_keyword_spelling(word: &str) -> bool {
        Self::lookup_keyword(&word.to_ascii_uppercase()).is_some()
    }

    #[must_use]
    pub const fn lookup_operator(c: char) -> Option<Self> {
        Some(match c {
            '*' => Self::Star,
            ',' => Self::Comma,
            '(' => Self::LeftParen,
            ')' => Self::RightParen,
            ';' => Self::Semicolon,
            '=' => Self::Equals,
            _ => return None,
        })
    }

    /// Name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::End => "end of input",
            Self::Error => "invalid character",
            Self::Ident => "identifier",
            Self::Number => "number",
            Self::Star => "'*'",
            Self::Comma => "','",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::Semicolon => "';'",
            Self::Equals => "'='",
            Self::KwSelect => "SELECT",
            Self::KwFrom => "FROM",
            Self::KwCreate => "CREATE",
            Self::KwTable => "TABLE",
            Self::KwDelete => "DELETE",
            Self::KwWhere => "WHERE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Terminal for TokenKind {
    const END: Self = Self::End;
    const ERROR: Self = Self::Error;

    fn describe(self, text: &str) -> String {
        match self {
            Self::Ident | Self::Number | Self::Error => format!("{self} `{text}`"),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_round_trips_through_display() {
        for kw in [
            TokenKind::KwSelect,
            TokenKind::KwFrom,
            TokenKind::KwCreate,
            TokenKind::KwTable,
            TokenKind::KwDelete,
            TokenKind::KwWhere,
        ] {
            assert_eq!(TokenKind::lookup_keyword(kw.as_str()), Some(kw));
        }
        assert_eq!(TokenKind::lookup_keyword("identifier"), None);
    }

    #[test]
    fn lookup_keyword_expects_uppercase() {
        assert_eq!(TokenKind::lookup_keyword("select"), None);
        assert!(TokenKind::is_keyword_spelling("select"));
        assert!(TokenKind::is_keyword_spelling("wHeRe"));
        assert!(!TokenKind::is_keyword_spelling("varchar"));
    }

    #[test]
    fn operators() {
        assert_eq!(TokenKind::lookup_operator('*'), Some(TokenKind::Star));
        assert_eq!(TokenKind::lookup_operator('='), Some(TokenKind::Equals));
        assert_eq!(TokenKind::lookup_operator('+'), None);
        assert_eq!(TokenKind::lookup_operator('.'), None);
    }

    #[test]
    fn statement_starts_are_keywords() {
        for kind in TokenKind::STATEMENT_STARTS {
            assert!(TokenKind::is_keyword_spelling(kind.as_str()));
        }
        assert!(!TokenKind::STATEMENT_STARTS.contains(&TokenKind::KwFrom));
    }

    #[test]
    fn describe_drops_fixed_spellings() {
        assert_eq!(TokenKind::KwWhere.describe("where"), "WHERE");
        assert_eq!(TokenKind::Comma.describe(","), "','");
        assert_eq!(TokenKind::Ident.describe("t"), "identifier `t`");
        assert_eq!(TokenKind::Number.describe("255"), "number `255`");
        assert_eq!(TokenKind::End.describe(""), "end of input");
    }
}
