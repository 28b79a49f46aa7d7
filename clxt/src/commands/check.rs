//! Check command implementation.
//!
//! Tokenizes files in parallel in lossless mode, prints diagnostics with
//! source snippets, and verifies that the token texts reproduce each file.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use clx_lex::{reconstruct, ErrorPolicy, Lexer, LexerConfig};
use clx_util::{FileId, Handler, SourceMap, Span};

use crate::commands::common::{error_messages, load_sources, render_diagnostics};
use crate::error::{ClxtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to check.
    pub files: Vec<PathBuf>,
    /// What to do after the first error in a file.
    pub policy: ErrorPolicy,
    /// Worker threads.
    pub jobs: usize,
}

/// Outcome of checking a single file.
#[derive(Debug)]
struct FileReport {
    name: String,
    tokens: usize,
    errors: usize,
    /// Where the first lexical error starts.
    first_error: Option<Span>,
    warnings: usize,
    /// Rendered diagnostics, empty when the file is clean.
    rendered: String,
    /// Lossless token texts did not add up to the file.
    mismatch: bool,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Check every file, writing the per-file status lines to `out`.
    pub fn run_to(&self, out: &mut impl Write) -> Result<()> {
        if self.args.jobs == 0 {
            return Err(ClxtError::Validation(error_messages::ZERO_JOBS.to_string()));
        }

        let start_time = Instant::now();
        let mut sources = SourceMap::new();
        let ids = load_sources(&mut sources, &self.args.files)?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.args.jobs)
            .build()
            .map_err(|e| ClxtError::Config(format!("Failed to build thread pool: {}", e)))?;

        let policy = self.args.policy;
        let sources = &sources;
        let results: Vec<Result<FileReport>> = pool.install(|| {
            ids.par_iter()
                .map(|&id| check_file(sources, id, policy))
                .collect()
        });

        let mut error_count = 0;
        let mut warning_count = 0;
        let mut failed_files = 0;
        let mut mismatch = None;

        for report in results {
            let report = report?;
            if !report.rendered.is_empty() {
                eprintln!("{}", report.rendered);
            }

            let status = if report.errors > 0 {
                failed_files += 1;
                match report.first_error.and_then(|span| sources.location(span)) {
                    Some(location) => format!("{} error(s), first at {}", report.errors, location),
                    None => format!("{} error(s)", report.errors),
                }
            } else if report.mismatch {
                mismatch.get_or_insert_with(|| PathBuf::from(&report.name));
                "reconstruction mismatch".to_string()
            } else {
                format!("ok ({} tokens)", report.tokens)
            };
            writeln!(out, "{}: {}", report.name, status)?;

            error_count += report.errors;
            warning_count += report.warnings;
        }

        info!(
            files = self.args.files.len(),
            errors = error_count,
            warnings = warning_count,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "check finished"
        );
        out.flush()?;

        if error_count > 0 {
            return Err(ClxtError::Lex {
                errors: error_count,
                files: failed_files,
            });
        }
        if let Some(path) = mismatch {
            return Err(ClxtError::Reconstruction(path));
        }
        Ok(())
    }

    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }
}

fn check_file(sources: &SourceMap, id: FileId, policy: ErrorPolicy) -> Result<FileReport> {
    let file = sources.get_file(id)?;
    let handler = Handler::new();
    let config = LexerConfig::lossless().with_policy(policy);
    let (tokens, errors) = Lexer::for_file(&file, config)
        .with_handler(&handler)
        .tokens_and_errors();

    // Only a clean run is expected to cover every byte.
    let mismatch = errors.is_empty() && reconstruct(&tokens) != file.content();
    debug!(file = file.name(), tokens = tokens.len(), mismatch, "checked");

    let diagnostics = handler.take();
    Ok(FileReport {
        name: file.name().to_string(),
        tokens: tokens.iter().filter(|t| !t.is_trivia() && !t.is_eof()).count(),
        errors: errors.len(),
        first_error: errors.first().map(|e| e.span),
        warnings: diagnostics.iter().filter(|d| !d.level.is_error()).count(),
        rendered: render_diagnostics(&diagnostics, sources),
        mismatch,
    })
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    CheckCommand::new(args).run()
}
