//! Tokenize command implementation.
//!
//! Prints the token stream of each input file, either as text lines or as
//! JSON. Lexical diagnostics go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use clx_lex::{Lexer, LexerConfig};
use clx_util::{Handler, SourceMap};

use crate::commands::common::{load_sources, render_diagnostics, OutputFormat};
use crate::error::{ClxtError, Result};

/// Arguments for the tokenize command.
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    /// Files to tokenize, in order.
    pub files: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Effective lexer options.
    pub lexer: LexerConfig,
}

/// One file's entry in JSON output.
#[derive(Debug, Serialize)]
struct FileTokens {
    file: String,
    tokens: serde_json::Value,
    errors: Vec<String>,
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
}

impl TokenizeCommand {
    pub fn new(args: TokenizeArgs) -> Self {
        Self { args }
    }

    /// Tokenize every file, writing results to `out`.
    ///
    /// Every file is read before any output is written. Fails after all
    /// files are processed if any of them had lexical errors.
    pub fn run_to(&self, out: &mut impl Write) -> Result<()> {
        let mut sources = SourceMap::new();
        let ids = load_sources(&mut sources, &self.args.files)?;

        let mut reports = Vec::new();
        let mut error_count = 0;
        let mut failed_files = 0;
        let multiple = ids.len() > 1;

        for id in ids {
            let file = sources.get_file(id)?;
            let handler = Handler::new();
            let (tokens, errors) = Lexer::for_file(&file, self.args.lexer)
                .with_handler(&handler)
                .tokens_and_errors();
            debug!(file = file.name(), tokens = tokens.len(), errors = errors.len(), "tokenized");

            let diagnostics = handler.take();
            if !diagnostics.is_empty() {
                eprintln!("{}", render_diagnostics(&diagnostics, &sources));
            }
            if !errors.is_empty() {
                error_count += errors.len();
                failed_files += 1;
            }

            match self.args.format {
                OutputFormat::Text => {
                    if multiple {
                        writeln!(out, "==> {} <==", file.name())?;
                    }
                    for token in tokens.iter().filter(|t| !t.is_eof()) {
                        writeln!(out, "{}", token)?;
                    }
                },
                OutputFormat::Json => reports.push(FileTokens {
                    file: file.name().to_string(),
                    tokens: serde_json::to_value(&tokens)?,
                    errors: errors.iter().map(ToString::to_string).collect(),
                }),
            }
        }

        if self.args.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        }
        out.flush()?;

        if error_count > 0 {
            return Err(ClxtError::Lex {
                errors: error_count,
                files: failed_files,
            });
        }
        Ok(())
    }

    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }
}

/// Run the tokenize command.
pub fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    TokenizeCommand::new(args).run()
}
