//! Command modules for the clxt CLI.
//!
//! Each subcommand lives in its own file with an `Args` struct, a command
//! handler, and a `run_*` entry point.

pub mod common;

pub mod check;
pub mod tokenize;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use tokenize::{run_tokenize, TokenizeArgs};
