//! Attachment Cleaner - retire stale uploads from a WordPress media library.
//!
//! A run is a linear pipeline executed once:
//!
//! 1. **Fetch** every item of `wp/v2/media`, page by page, stopping at the
//!    first page that is empty or fails validation (at most 20 pages)
//! 2. **Select** the items that are unattached, older than the age
//!    threshold, of the configured MIME type and named like a recurring
//!    bulletin
//! 3. **Delete** each candidate permanently, or only log it in dry-run mode
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use attachment_cleaner::{CleanerConfig, RunOptions, WordPressClient, run};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CleanerConfig::load(None)?;
//!     let client = WordPressClient::new(config.base_url(), config.credentials())?;
//!
//!     let summary = run(&client, &RunOptions::from_config(&config, None)).await?;
//!     println!("{} candidates", summary.candidates());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `attachment_cleaner_error` - Error types
//! - `attachment_cleaner_core` - Media model, collection, retention rules
//! - `attachment_cleaner_wordpress` - API access, fetcher, deleter
//!
//! This crate adds configuration, logging and the pipeline, and re-exports
//! everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod logging;
mod pipeline;

pub use attachment_cleaner_core::*;
pub use attachment_cleaner_error::*;
pub use attachment_cleaner_wordpress::*;

pub use config::CleanerConfig;
pub use logging::init_logging;
pub use pipeline::{RunOptions, RunOptionsBuilder, RunSummary, run};
