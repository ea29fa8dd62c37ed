//! Core data types for the attachment cleaner.
//!
//! This crate holds the media data model as served by the WordPress REST API,
//! the ordered [`MediaItems`] collection, and the retention rules that narrow
//! a listing down to the deletion candidate set.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod media;
mod retention;

pub use collection::MediaItems;
pub use media::{Link, Links, MediaDetails, MediaItem, Rendered};
pub use retention::{RetentionPolicy, RetentionPolicyBuilder, RetentionRule};
