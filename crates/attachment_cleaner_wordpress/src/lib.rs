//! WordPress media API access for the attachment cleaner.
//!
//! The [`MediaApi`] trait is the only seam to the network. [`WordPressClient`]
//! implements it over reqwest, [`InMemoryMediaApi`] implements it over scripted
//! responses. On top of it sit the two pipeline stages that talk to the
//! remote site:
//!
//! - [`MediaFetcher`] pages through `wp/v2/media` until a page fails to
//!   validate or the page bound is reached
//! - [`Deleter`] removes (or, in dry-run mode, only logs) each candidate

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod client;
mod deleter;
mod fetcher;
mod memory;

pub use api::{ApiResponse, MediaApi};
pub use client::{Credentials, WordPressClient};
pub use deleter::{DeleteMode, Deleter, DeletionOutcome, DeletionReport};
pub use fetcher::{DEFAULT_MAX_PAGES, DEFAULT_PER_PAGE, EndOfData, MediaFetcher, PageOutcome};
pub use memory::{ApiCall, InMemoryMediaApi};
