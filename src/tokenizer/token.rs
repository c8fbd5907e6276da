//! # JSON Token
//!
//! Defines possible tokens from scanning a JSON document byte sequence.
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::borrow::Cow;
use std::fmt::Display;

use crate::tokenizer::Location;

/// The lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /* Values */
    /// String literal, quotes excluded from the lexeme
    String,

    /// Run of digits and dots
    Number,

    /* Delimiters */
    /// Opening curly brace
    LBrace,

    /// Closing curly brace
    RBrace,

    /// Opening square bracket
    LBracket,

    /// Closing square bracket
    RBracket,

    /// Colon character
    Colon,

    /// Comma character
    Comma,

    /* Literals */
    /// `true`
    True,

    /// `false`
    False,

    /// `null`
    Null,
}

impl TokenKind {
    /// Returns the name of the kind, e.g. `"LBrace"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::LBrace => "LBrace",
            Self::RBrace => "RBrace",
            Self::LBracket => "LBracket",
            Self::RBracket => "RBracket",
            Self::Colon => "Colon",
            Self::Comma => "Comma",
            Self::True => "True",
            Self::False => "False",
            Self::Null => "Null",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A classified span of the input buffer.
///
/// The lexeme borrows from the buffer passed to
/// [`tokenize`](crate::tokenizer::tokenize), so a token can never outlive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// Lexical category
    pub kind: TokenKind,
    /// Position of the token's first byte
    pub location: Location,
    /// Matched bytes; for strings, the bytes strictly between the quotes
    pub lexeme: &'a [u8],
}

impl<'a> Token<'a> {
    /// Returns the lexeme as text, replacing invalid UTF-8 sequences.
    ///
    /// Borrows from the input whenever the lexeme is valid UTF-8.
    #[must_use]
    pub fn lexeme_str(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.lexeme)
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.kind, self.location, self.lexeme_str())
    }
}

impl Serialize for Token<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 4)?;
        state.serialize_field("kind", self.kind.as_str())?;
        state.serialize_field("line", &self.location.line)?;
        state.serialize_field("column", &self.location.column)?;
        state.serialize_field("lexeme", &self.lexeme_str())?;
        state.end()
    }
}
