//! # Diagnostics
//!
//! Error values produced when the lexer cannot classify its input.
use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

use crate::tokenizer::Location;

/// The reason a byte could not be tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A string's opening quote has no closing quote before the end of input.
    UnclosedQuote,
    /// A byte starts no token, or `t`/`f`/`n` does not begin its literal.
    UnexpectedCharacter,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclosedQuote => f.write_str("unclosed quote"),
            Self::UnexpectedCharacter => f.write_str("unexpected character"),
        }
    }
}

/// A lexical error report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic<'a> {
    /// What went wrong
    pub kind: DiagnosticKind,
    /// The opening quote for [`DiagnosticKind::UnclosedQuote`], otherwise the
    /// offending byte
    pub location: Location,
    /// The offending byte, set only for
    /// [`DiagnosticKind::UnexpectedCharacter`]
    pub lexeme: Option<&'a [u8]>,
}

impl<'a> Diagnostic<'a> {
    pub(crate) const fn unclosed_quote(location: Location) -> Self {
        Self {
            kind: DiagnosticKind::UnclosedQuote,
            location,
            lexeme: None,
        }
    }

    pub(crate) const fn unexpected_character(
        location: Location,
        lexeme: &'a [u8],
    ) -> Self {
        Self {
            kind: DiagnosticKind::UnexpectedCharacter,
            location,
            lexeme: Some(lexeme),
        }
    }
}

impl Error for Diagnostic<'_> {}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)?;
        if let Some(lexeme) = self.lexeme {
            write!(f, " '{}'", lexeme.escape_ascii())?;
        }
        Ok(())
    }
}

/// Represents errors that can occur while tokenizing a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError<'a> {
    /// The input is not lexically valid JSON.
    Lexical(Diagnostic<'a>),
    /// Growing the token sequence failed.
    OutOfMemory(TryReserveError),
}

impl Error for TokenizeError<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lexical(_) => None,
            Self::OutOfMemory(err) => Some(err),
        }
    }
}

impl fmt::Display for TokenizeError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical(diagnostic) => write!(f, "{diagnostic}"),
            Self::OutOfMemory(_) => {
                write!(f, "Out of memory while storing tokens")
            }
        }
    }
}

impl<'a> From<Diagnostic<'a>> for TokenizeError<'a> {
    fn from(diagnostic: Diagnostic<'a>) -> Self {
        Self::Lexical(diagnostic)
    }
}

impl From<TryReserveError> for TokenizeError<'_> {
    fn from(err: TryReserveError) -> Self {
        Self::OutOfMemory(err)
    }
}
