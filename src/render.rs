//! Rendering of token listings and diagnostics for the terminal.

use anyhow::Context as _;
use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use crate::tokenizer::{Token, TokenKind, TokenizeError};

/// Output format of a token listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per token: kind, line:column, lexeme
    #[default]
    Text,
    /// A JSON array of `{kind, line, column, lexeme}` objects
    Json,
}

/// Write the tokens scanned from `path` to `writer`.
/// Silently returns `Ok(())` on broken pipe so that piping to tools like
/// `less` or `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_tokens<W: Write>(
    writer: &mut W,
    path: &Path,
    tokens: &[Token<'_>],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let result = match format {
        OutputFormat::Text => write_text(writer, path, tokens),
        OutputFormat::Json => write_json(writer, tokens),
    };

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write tokens to stdout"),
    }
}

fn write_text<W: Write>(
    writer: &mut W,
    path: &Path,
    tokens: &[Token<'_>],
) -> io::Result<()> {
    writeln!(writer, "tokens in {}:", path.display())?;
    for token in tokens {
        writeln!(
            writer,
            "  {} {} {}",
            format!("{:<8}", token.kind).bold(),
            token.location.to_string().dimmed(),
            colored_lexeme(token)
        )?;
    }
    Ok(())
}

fn write_json<W: Write>(writer: &mut W, tokens: &[Token<'_>]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, tokens)?;
    writeln!(writer)
}

/// Color a lexeme by the kind of its token.
fn colored_lexeme(token: &Token<'_>) -> ColoredString {
    let text = token.lexeme_str();
    let text = text.as_ref();
    match token.kind {
        TokenKind::String => text.green(),
        TokenKind::Number | TokenKind::True | TokenKind::False => text.yellow(),
        TokenKind::Null => text.red().dimmed(),
        TokenKind::LBrace
        | TokenKind::RBrace
        | TokenKind::LBracket
        | TokenKind::RBracket
        | TokenKind::Colon
        | TokenKind::Comma => text.normal(),
    }
}

/// Write a one-line error report for a failed tokenization of `path`.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_error<W: Write>(
    writer: &mut W,
    path: &Path,
    err: &TokenizeError<'_>,
) -> io::Result<()> {
    let label = "error:".red().bold();
    match err {
        TokenizeError::Lexical(diagnostic) => {
            write!(
                writer,
                "{label} {}:{}: {}",
                path.display(),
                diagnostic.location,
                diagnostic.kind
            )?;
            if let Some(lexeme) = diagnostic.lexeme {
                let lexeme = format!("'{}'", lexeme.escape_ascii());
                write!(writer, " {}", lexeme.bold())?;
            }
            writeln!(writer)
        }
        TokenizeError::OutOfMemory(_) => {
            writeln!(writer, "{label} {}: {err}", path.display())
        }
    }
}
