//! # JSON Lexer
//!
//! Scans an input byte sequence from a JSON document into a sequence of
//! located tokens, failing on the first byte that starts no token.
//!
//! Strings are not unescaped: the first `"` after an opening quote always
//! closes the string. A number is any run of ASCII digits and dots. Nesting of
//! delimiters is left to a parser.
use crate::tokenizer::{Diagnostic, Location, Token, TokenKind, TokenizeError};

/// A lexer that walks an input slice of bytes from a JSON document once,
/// front to back.
struct Lexer<'a> {
    /// The input sequence of bytes to tokenize
    input: &'a [u8],
    /// Index of the current byte under examination
    position: usize,
    /// Line/column of the current byte
    location: Location,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            position: 0,
            location: Location::new(),
        }
    }

    /// Returns the next token, `None` at the end of input.
    ///
    /// Whitespace between tokens is consumed here and never tokenized.
    fn next_token(&mut self) -> Result<Option<Token<'a>>, Diagnostic<'a>> {
        while let Some(&byte) = self.input.get(self.position) {
            match byte {
                b'\n' => {
                    self.position += 1;
                    self.location.next_line();
                }
                b' ' | b'\r' | b'\t' => {
                    self.position += 1;
                    self.location.advance();
                }
                b'{' => return Ok(Some(self.emit(TokenKind::LBrace, 1))),
                b'}' => return Ok(Some(self.emit(TokenKind::RBrace, 1))),
                b'[' => return Ok(Some(self.emit(TokenKind::LBracket, 1))),
                b']' => return Ok(Some(self.emit(TokenKind::RBracket, 1))),
                b':' => return Ok(Some(self.emit(TokenKind::Colon, 1))),
                b',' => return Ok(Some(self.emit(TokenKind::Comma, 1))),
                b't' => return self.read_literal(TokenKind::True, b"true"),
                b'f' => return self.read_literal(TokenKind::False, b"false"),
                b'n' => return self.read_literal(TokenKind::Null, b"null"),
                b'"' => return self.read_string(),
                b'0'..=b'9' => return Ok(Some(self.read_number())),
                _ => return Err(self.unexpected_character()),
            }
        }
        Ok(None)
    }

    /// Builds a token of `len` bytes starting at the current byte, then moves
    /// past it.
    fn emit(&mut self, kind: TokenKind, len: usize) -> Token<'a> {
        let token = Token {
            kind,
            location: self.location,
            lexeme: &self.input[self.position..self.position + len],
        };
        self.position += len;
        self.location.advance_by(len);
        token
    }

    /// Reads one of the keyword literals, which must match exactly.
    fn read_literal(
        &mut self,
        kind: TokenKind,
        literal: &'static [u8],
    ) -> Result<Option<Token<'a>>, Diagnostic<'a>> {
        if self.input[self.position..].starts_with(literal) {
            Ok(Some(self.emit(kind, literal.len())))
        } else {
            Err(self.unexpected_character())
        }
    }

    /// Reads a string up to the next quote byte. The lexeme excludes both
    /// quotes while the location still advances over them.
    fn read_string(&mut self) -> Result<Option<Token<'a>>, Diagnostic<'a>> {
        let start = self.position + 1;
        let Some(len) = self.input[start..].iter().position(|&b| b == b'"')
        else {
            return Err(Diagnostic::unclosed_quote(self.location));
        };

        let token = Token {
            kind: TokenKind::String,
            location: self.location,
            lexeme: &self.input[start..start + len],
        };
        // opening quote + contents + closing quote
        self.position += len + 2;
        self.location.advance_by(len + 2);
        Ok(Some(token))
    }

    /// Reads a maximal run of ASCII digits and dots. A run that reaches the
    /// end of input is still emitted.
    fn read_number(&mut self) -> Token<'a> {
        let len = self.input[self.position..]
            .iter()
            .take_while(|&&b| b.is_ascii_digit() || b == b'.')
            .count();
        self.emit(TokenKind::Number, len)
    }

    /// Reports the current byte as unexpected.
    fn unexpected_character(&self) -> Diagnostic<'a> {
        Diagnostic::unexpected_character(
            self.location,
            &self.input[self.position..=self.position],
        )
    }
}

/// Tokenize a JSON document from bytes into a sequence of tokens.
///
/// Tokens are returned in source order and borrow their lexemes from `text`.
/// An empty (or all-whitespace) input yields an empty sequence.
///
/// # Errors
///
/// Returns [`TokenizeError::Lexical`] with the first [`Diagnostic`] found;
/// no tokens are returned in that case. Returns
/// [`TokenizeError::OutOfMemory`] if the token sequence cannot grow.
pub fn tokenize(text: &[u8]) -> Result<Vec<Token<'_>>, TokenizeError<'_>> {
    log::debug!("tokenizing {} bytes", text.len());

    let mut lexer = Lexer::new(text);
    let mut tokens: Vec<Token<'_>> = Vec::new();

    loop {
        let token = match lexer.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => break,
            Err(diagnostic) => {
                log::debug!(
                    "stopped after {} tokens: {diagnostic}",
                    tokens.len()
                );
                return Err(diagnostic.into());
            }
        };
        log::trace!("{token}");

        tokens.try_reserve(1)?;
        tokens.push(token);
    }

    log::debug!("produced {} tokens", tokens.len());
    Ok(tokens)
}
