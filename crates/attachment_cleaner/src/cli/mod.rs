//! Command-line interface module.
//!
//! This module provides the CLI structure and the run handler for the
//! attachment_cleaner binary.

mod commands;
mod run;

pub use commands::{Cli, OutputFormat};
pub use run::run_cleaner;
