/*!
# `jsonlex` Library

Single-pass tokenizer for JSON documents, reporting the exact line and column
of every token and of the first lexical error.
*/

pub mod render;
pub mod source;
pub mod tokenizer;

// Re-exports
pub use tokenizer::tokenize;
