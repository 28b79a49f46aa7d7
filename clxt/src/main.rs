//! Clxt CLI - Command-line front end for the clx C tokenizer.
//!
//! This is the main entry point for the clxt CLI application.
//! It uses clap for argument parsing and dispatches to the
//! `tokenize` and `check` command handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::{effective_lexer_config, OutputFormat},
    run_check, run_tokenize, CheckArgs, TokenizeArgs,
};
use config::Config;
use error::{ClxtError, Result};

/// Clxt - Tokenize and check C source files
#[derive(Parser, Debug)]
#[command(name = "clxt")]
#[command(author = "Clx Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and check C source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CLXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CLXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CLXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the clxt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of C source files
    ///
    /// Each token is printed as `LL:CC Kind "text"`, or the whole stream as
    /// JSON with `--format json`.
    Tokenize(TokenizeCommand),

    /// Check C source files for lexical errors
    ///
    /// Files are tokenized in parallel; diagnostics are printed with source
    /// snippets and the command fails if any file has errors.
    Check(CheckCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Input files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Also print whitespace and comment tokens
    #[arg(long)]
    trivia: bool,

    /// Keep tokenizing after an error
    #[arg(long)]
    resilient: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Report every error in a file instead of stopping at the first
    #[arg(long)]
    resilient: bool,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long)]
    jobs: Option<usize>,
}

/// Main entry point for the clxt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    execute_command(cli.command, config)?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ClxtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, config),
        Commands::Check(args) => execute_check(args, config),
    }
}

/// Execute the tokenize command.
fn execute_tokenize(args: TokenizeCommand, config: Config) -> Result<()> {
    let tokenize_args = TokenizeArgs {
        files: args.files,
        format: args.format.unwrap_or(config.output.format),
        lexer: effective_lexer_config(config.lexer, args.trivia, args.resilient),
    };
    run_tokenize(tokenize_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    let lexer = effective_lexer_config(config.lexer, false, args.resilient);
    let check_args = CheckArgs {
        files: args.files,
        policy: lexer.policy,
        jobs: args.jobs.unwrap_or(config.jobs),
    };
    run_check(check_args)
}
