//! Single-character classification.

/// Coarse category of one input position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Past the last character.
    End,
    Whitespace,
    /// ASCII `0`–`9`.
    Digit,
    /// Any alphabetic character.
    Letter,
    Other,
}

impl CharClass {
    /// Stable label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::End => "end",
            Self::Whitespace => "whitespace",
            Self::Digit => "digit",
            Self::Letter => "letter",
            Self::Other => "other",
        }
    }
}

/// Classify a character; `None` is the end-of-input marker.
#[must_use]
pub fn classify(c: Option<char>) -> CharClass {
    match c {
        None => CharClass::End,
        Some(c) if c.is_whitespace() => CharClass::Whitespace,
        Some(c) if c.is_ascii_digit() => CharClass::Digit,
        Some(c) if c.is_alphabetic() => CharClass::Letter,
        Some(_) => CharClass::Other,
    }
}
