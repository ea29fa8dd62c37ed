//! Removal of deletion candidates, simulated or real.

use crate::{ApiResponse, MediaApi};
use attachment_cleaner_core::{MediaItem, MediaItems};
use attachment_cleaner_error::MediaApiResult;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Whether deletions are performed or only logged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum DeleteMode {
    /// Log each intended deletion, touch nothing.
    #[default]
    #[strum(serialize = "dry-run")]
    DryRun,
    /// Issue an authenticated, permanent DELETE per item.
    #[strum(serialize = "live")]
    Live,
}

impl DeleteMode {
    /// The only flag value that enables live deletion.
    pub const LIVE_TOKEN: &'static str = "dangerous";

    /// Resolve the mode from an operator-supplied flag.
    ///
    /// Anything but [`Self::LIVE_TOKEN`], including no flag at all, stays in
    /// dry-run.
    ///
    /// # Examples
    ///
    /// ```
    /// use attachment_cleaner_wordpress::DeleteMode;
    ///
    /// assert_eq!(DeleteMode::from_flag(Some("dangerous")), DeleteMode::Live);
    /// assert_eq!(DeleteMode::from_flag(Some("live")), DeleteMode::DryRun);
    /// assert_eq!(DeleteMode::from_flag(None), DeleteMode::DryRun);
    /// ```
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(flag) if flag == Self::LIVE_TOKEN => Self::Live,
            _ => Self::DryRun,
        }
    }

    /// Whether this mode leaves the remote site untouched.
    pub fn is_dry_run(self) -> bool {
        self == Self::DryRun
    }
}

/// What happened to one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeletionOutcome {
    /// Dry-run: logged only.
    Simulated {
        /// Media identifier
        id: u64,
        /// Media slug
        slug: String,
    },
    /// Live: the server answered, successfully or not.
    Completed {
        /// Media identifier
        id: u64,
        /// Media slug
        slug: String,
        /// The server's answer
        response: ApiResponse,
    },
}

impl DeletionOutcome {
    /// Identifier of the item this outcome belongs to.
    pub fn id(&self) -> u64 {
        match self {
            Self::Simulated { id, .. } | Self::Completed { id, .. } => *id,
        }
    }

    /// Whether the server answered with a non-success status.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Completed { response, .. } if !response.is_success())
    }
}

/// Outcomes of a batch, in deletion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct DeletionReport {
    /// Mode the batch ran in
    mode: DeleteMode,
    /// One outcome per candidate
    outcomes: Vec<DeletionOutcome>,
}

impl DeletionReport {
    /// Number of deletions only logged.
    pub fn simulated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, DeletionOutcome::Simulated { .. }))
            .count()
    }

    /// Number of deletions the server accepted.
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| {
                matches!(outcome, DeletionOutcome::Completed { response, .. } if response.is_success())
            })
            .count()
    }

    /// Number of deletions the server refused.
    pub fn rejected(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_rejected()).count()
    }
}

/// Deletes media items one at a time in collection order.
///
/// A non-success status is recorded and the batch moves on. A transport
/// failure ends the batch immediately; the items after it are not attempted.
#[derive(Debug)]
pub struct Deleter<'a, A: MediaApi> {
    api: &'a A,
    mode: DeleteMode,
}

impl<'a, A: MediaApi> Deleter<'a, A> {
    /// Create a deleter bound to `api` in the given mode.
    pub fn new(api: &'a A, mode: DeleteMode) -> Self {
        Self { api, mode }
    }

    /// The mode this deleter runs in.
    pub fn mode(&self) -> DeleteMode {
        self.mode
    }

    /// Delete (or simulate deleting) a single item.
    ///
    /// In live mode the status and body are printed for the operator.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained.
    #[instrument(skip(self, item), fields(id = item.id(), slug = %item.slug(), mode = %self.mode))]
    pub async fn delete_one(&self, item: &MediaItem) -> MediaApiResult<DeletionOutcome> {
        let id = *item.id();
        let slug = item.slug().clone();

        match self.mode {
            DeleteMode::DryRun => {
                info!("[DRY RUN] deleting {} {}", id, slug);
                Ok(DeletionOutcome::Simulated { id, slug })
            }
            DeleteMode::Live => {
                info!("deleting {} {}", id, slug);
                let response = self.api.delete_media(id).await?;
                println!("{} {}", response.status(), response.body());
                if !response.is_success() {
                    warn!(status = response.status(), "Server refused deletion");
                }
                Ok(DeletionOutcome::Completed { id, slug, response })
            }
        }
    }

    /// Delete every item in order.
    ///
    /// # Errors
    ///
    /// The first transport failure aborts the remaining batch.
    #[instrument(skip(self, items), fields(count = items.len(), mode = %self.mode))]
    pub async fn delete_all(&self, items: &MediaItems) -> MediaApiResult<DeletionReport> {
        info!("Deleting {} items", items.len());

        let mut outcomes = Vec::with_capacity(items.len());
        for item in items {
            outcomes.push(self.delete_one(item).await?);
        }

        Ok(DeletionReport {
            mode: self.mode,
            outcomes,
        })
    }
}
