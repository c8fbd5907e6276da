/*!
Main binary for jsonlex.
*/

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use jsonlex::render::{self, OutputFormat};
use jsonlex::source::SourceFile;
use jsonlex::tokenize;

/// Tokenize a JSON document and list its tokens with their locations.
#[derive(Parser)]
#[command(name = "jlex", version, about, arg_required_else_help = true, long_about = None)]
struct Args {
    #[arg(value_name = "FILE")]
    /// Path to the JSON file to tokenize
    input: PathBuf,
    /// Output format of the token listing
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// When to colorize output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
    /// Display the number of tokens on stderr
    #[arg(long)]
    count: bool,
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

/// Colorization modes for `--color`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Colorize when writing to a terminal
    Auto,
    /// Always colorize
    Always,
    /// Never colorize
    Never,
}

/// Entry point for main binary.
///
/// Loads the input file, tokenizes it and prints either the token listing to
/// STDOUT or the first lexical error to STDERR. Lexical errors exit with
/// status 1.
fn main() -> Result<ExitCode> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    match args.color {
        ColorChoice::Auto => {}
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
    }

    let source = SourceFile::open(&args.input).with_context(|| {
        format!("Failed to load {}", args.input.display())
    })?;

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            render::write_error(&mut io::stderr().lock(), source.path(), &err)
                .context("write error report to stderr")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    render::write_tokens(
        &mut io::stdout().lock(),
        source.path(),
        &tokens,
        args.format,
    )?;

    if args.count {
        writeln!(io::stderr(), "Found tokens: {}", tokens.len())?;
    }

    Ok(ExitCode::SUCCESS)
}
