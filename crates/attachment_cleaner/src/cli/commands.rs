//! CLI argument definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Attachment Cleaner - delete stale, unattached uploads from a WordPress media library
///
/// Nothing is deleted unless WPAC_MODE=dangerous.
#[derive(Parser, Debug)]
#[command(name = "attachment_cleaner")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: ./attachment_cleaner.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file to append to (overrides configuration)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Delete at most this many candidates
    #[arg(long)]
    pub limit: Option<usize>,

    /// Summary format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
