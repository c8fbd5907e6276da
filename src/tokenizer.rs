/*!
# Tokenizer/ Lexer

Scans an input sequence of bytes from a JSON document into a token stream in
a single left-to-right pass. Every token records where it starts
([`Location`]) and borrows its text straight out of the input buffer.

## Examples

```rust
use jsonlex::tokenizer::{tokenize, TokenKind};

let tokens = tokenize(br#"{"num": 12.34}"#).expect("valid input");
let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
assert_eq!(
    kinds,
    [
        TokenKind::LBrace,
        TokenKind::String,
        TokenKind::Colon,
        TokenKind::Number,
        TokenKind::RBrace,
    ]
);
assert_eq!(tokens[1].lexeme, b"num");
assert_eq!(tokens[3].location.to_string(), "1:9");
```

## Errors

Scanning stops at the first byte that cannot start a token. The returned
[`TokenizeError`] carries a [`Diagnostic`] describing what went wrong and
where:

```rust
use jsonlex::tokenizer::{tokenize, DiagnosticKind, TokenizeError};

let Err(TokenizeError::Lexical(diagnostic)) = tokenize(b"[tru]") else {
    panic!("expected a lexical error");
};
assert_eq!(diagnostic.kind, DiagnosticKind::UnexpectedCharacter);
assert_eq!(diagnostic.lexeme, Some(&b"t"[..]));
assert_eq!(diagnostic.location.column, 2);
```
*/
pub mod diagnostic;
pub mod lexer;
pub mod location;
pub mod token;

// Re-exports
pub use diagnostic::{Diagnostic, DiagnosticKind, TokenizeError};
pub use lexer::tokenize;
pub use location::Location;
pub use token::{Token, TokenKind};
