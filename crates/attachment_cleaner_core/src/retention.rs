//! Retention rules that select deletion candidates.
//!
//! A candidate is an item for which every rule holds. Rules are pure, so the
//! order they are applied in only changes intermediate sizes, never the
//! final set.

use crate::{MediaItem, MediaItems};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single boolean test over a media item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RetentionRule {
    /// Attached to no post.
    #[display("orphan")]
    Orphan,
    /// Uploaded strictly before the given site-local time.
    #[display("created before {}", _0)]
    CreatedBefore(NaiveDateTime),
    /// MIME type equals the given value exactly.
    #[display("mime type is {}", _0)]
    MimeType(String),
    /// Slug contains at least one of the given substrings.
    #[display("slug contains any of {:?}", _0)]
    SlugContainsAny(Vec<String>),
}

impl RetentionRule {
    /// Whether `item` satisfies this rule.
    pub fn matches(&self, item: &MediaItem) -> bool {
        match self {
            Self::Orphan => item.is_orphan(),
            Self::CreatedBefore(threshold) => item.date() < threshold,
            Self::MimeType(mime_type) => item.mime_type() == mime_type,
            Self::SlugContainsAny(patterns) => patterns
                .iter()
                .any(|pattern| item.slug().contains(pattern.as_str())),
        }
    }

    /// Narrow `items` to those satisfying every rule, one pass per rule.
    #[instrument(skip(items, rules), fields(input = items.len(), rule_count = rules.len()))]
    pub fn apply_all(items: &MediaItems, rules: &[RetentionRule]) -> MediaItems {
        let mut selected = items.clone();
        for rule in rules {
            selected = selected.filter(|item| rule.matches(item));
            debug!(rule = %rule, remaining = selected.len(), "Applied retention rule");
        }
        selected
    }
}

/// Which uploads are stale enough to delete.
///
/// # Examples
///
/// ```
/// use attachment_cleaner_core::{RetentionPolicy, RetentionRule};
///
/// let policy = RetentionPolicy::builder()
///     .max_age_days(7u32)
///     .slug_patterns(vec!["newsletter".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(*policy.max_age_days(), 7);
/// assert_eq!(policy.mime_type(), "application/pdf");
///
/// let now = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
/// let rules = policy.rules(now);
/// assert_eq!(rules.first(), Some(&RetentionRule::Orphan));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default, setter(into))]
pub struct RetentionPolicy {
    /// Minimum age in days before an upload may be removed
    #[serde(default = "default_max_age_days")]
    max_age_days: u32,

    /// MIME type an upload must have
    #[serde(default = "default_mime_type")]
    mime_type: String,

    /// Slug fragments naming the recurring documents to clean up
    #[serde(default = "default_slug_patterns")]
    slug_patterns: Vec<String>,
}

fn default_max_age_days() -> u32 {
    28
}

fn default_mime_type() -> String {
    "application/pdf".to_string()
}

fn default_slug_patterns() -> Vec<String> {
    vec![
        "pew-news".to_string(),
        "priory-diary".to_string(),
        "service-list".to_string(),
    ]
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            max_age_days: default_max_age_days(),
            mime_type: default_mime_type(),
            slug_patterns: default_slug_patterns(),
        }
    }
}

impl RetentionPolicy {
    /// Creates a new retention policy builder.
    pub fn builder() -> RetentionPolicyBuilder {
        RetentionPolicyBuilder::default()
    }

    /// Cut-off time: uploads dated strictly before it are old enough.
    ///
    /// Saturates at [`NaiveDateTime::MIN`] when the age reaches past the
    /// earliest representable date.
    pub fn threshold(&self, now: NaiveDateTime) -> NaiveDateTime {
        now.checked_sub_signed(Duration::days(i64::from(self.max_age_days)))
            .unwrap_or(NaiveDateTime::MIN)
    }

    /// The rule chain, in application order, with the age threshold fixed
    /// from `now` so every item in a run is judged against the same instant.
    pub fn rules(&self, now: NaiveDateTime) -> Vec<RetentionRule> {
        vec![
            RetentionRule::Orphan,
            RetentionRule::CreatedBefore(self.threshold(now)),
            RetentionRule::MimeType(self.mime_type.clone()),
            RetentionRule::SlugContainsAny(self.slug_patterns.clone()),
        ]
    }

    /// The deletion candidates in `items` as of `now`.
    #[instrument(skip(self, items), fields(input = items.len()))]
    pub fn candidates(&self, items: &MediaItems, now: NaiveDateTime) -> MediaItems {
        let candidates = RetentionRule::apply_all(items, &self.rules(now));
        debug!(candidates = candidates.len(), "Selected deletion candidates");
        candidates
    }
}
