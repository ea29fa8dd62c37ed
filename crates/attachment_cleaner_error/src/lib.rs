//! Error types for the attachment cleaner.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Schema validation failures while listing media are deliberately absent
//! from this hierarchy: a page that does not validate marks the end of the
//! listing and is reported as a page outcome, not as an error.
//!
//! # Examples
//!
//! ```
//! use attachment_cleaner_error::{CleanerResult, MediaApiError, MediaApiErrorKind};
//!
//! fn list_page() -> CleanerResult<String> {
//!     Err(MediaApiError::new(MediaApiErrorKind::Transport(
//!         "connection refused".to_string(),
//!     )))?
//! }
//!
//! match list_page() {
//!     Ok(body) => println!("Got: {}", body),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod media_api;

pub use config::ConfigError;
pub use error::{CleanerError, CleanerErrorKind, CleanerResult};
pub use json::JsonError;
pub use media_api::{MediaApiError, MediaApiErrorKind, MediaApiResult};
