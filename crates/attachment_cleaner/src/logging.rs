//! Log file setup.
//!
//! Every run appends to one log file. Lines carry a timestamp and level;
//! ANSI colouring is disabled so the file stays greppable.

use attachment_cleaner_error::{CleanerResult, ConfigError};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Route `tracing` output to `log_file`, appending.
///
/// The level is INFO, or DEBUG when `verbose` is set. `RUST_LOG` overrides
/// both.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a global subscriber is
/// already installed.
pub fn init_logging(log_file: &Path, verbose: bool) -> CleanerResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| {
            ConfigError::new(format!(
                "Failed to open log file {}: {}",
                log_file.display(),
                e
            ))
        })?;

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
