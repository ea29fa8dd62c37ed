//! One cleaning run: fetch, select, delete.

use crate::CleanerConfig;
use attachment_cleaner_core::RetentionPolicy;
use attachment_cleaner_error::CleanerResult;
use attachment_cleaner_wordpress::{
    DEFAULT_MAX_PAGES, DEFAULT_PER_PAGE, DeleteMode, Deleter, DeletionReport, MediaApi,
    MediaFetcher,
};
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{info, instrument};

/// Parameters of a single run.
///
/// `now` fixes the age threshold for the whole run; it defaults to the local
/// clock at build time.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct RunOptions {
    /// Items requested per page
    #[builder(default = "DEFAULT_PER_PAGE")]
    per_page: u32,
    /// Upper bound on page requests
    #[builder(default = "DEFAULT_MAX_PAGES")]
    max_pages: u32,
    /// Which uploads count as stale
    #[builder(default)]
    retention: RetentionPolicy,
    /// Whether deletions are performed
    #[builder(default)]
    mode: DeleteMode,
    /// Cap on the number of candidates handed to the deleter
    #[builder(default)]
    limit: Option<usize>,
    /// Reference time for the age rule
    #[builder(default = "chrono::Local::now().naive_local()")]
    now: NaiveDateTime,
}

impl RunOptions {
    /// Creates a new run options builder.
    pub fn builder() -> RunOptionsBuilder {
        RunOptionsBuilder::default()
    }

    /// Options taken from `config`, evaluated against the current time.
    pub fn from_config(config: &CleanerConfig, limit: Option<usize>) -> Self {
        Self {
            per_page: *config.per_page(),
            max_pages: *config.max_pages(),
            retention: config.retention().clone(),
            mode: config.delete_mode(),
            limit,
            now: chrono::Local::now().naive_local(),
        }
    }
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct RunSummary {
    /// Items listed from the remote collection
    fetched: usize,
    /// Items that passed every retention rule, after any limit
    candidates: usize,
    /// Per-item deletion outcomes
    report: DeletionReport,
}

/// Fetch every media item, narrow to stale candidates, delete them.
///
/// # Errors
///
/// A transport failure while listing ends the run before anything is
/// deleted. A transport failure while deleting ends the run at that item.
/// Rejected deletes are reported in the summary, not as errors.
#[instrument(skip(api, options), fields(mode = %options.mode, limit = ?options.limit))]
pub async fn run<A: MediaApi>(api: &A, options: &RunOptions) -> CleanerResult<RunSummary> {
    let items = MediaFetcher::new(api)
        .with_per_page(options.per_page)
        .with_max_pages(options.max_pages)
        .load_all()
        .await?;
    info!(fetched = items.len(), "Loaded media library");

    let mut candidates = options.retention.candidates(&items, options.now);
    info!(
        candidates = candidates.len(),
        threshold = %options.retention.threshold(options.now),
        "Selected stale attachments"
    );
    if let Some(limit) = options.limit {
        candidates = candidates.limit(limit);
    }

    let report = Deleter::new(api, options.mode).delete_all(&candidates).await?;

    Ok(RunSummary {
        fetched: items.len(),
        candidates: candidates.len(),
        report,
    })
}
