//! Scripted, in-process implementation of [`MediaApi`].

use crate::{ApiResponse, MediaApi};
use async_trait::async_trait;
use attachment_cleaner_core::MediaItems;
use attachment_cleaner_error::{JsonError, MediaApiError, MediaApiErrorKind, MediaApiResult};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};

const PAST_LAST_PAGE: &str = r#"{"code":"rest_post_invalid_page_number","message":"The page number requested is larger than the number of pages available.","data":{"status":400}}"#;

/// A call received by [`InMemoryMediaApi`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiCall {
    /// A page listing request.
    List {
        /// Requested page
        page: u32,
        /// Requested page size
        per_page: u32,
    },
    /// A delete request.
    Delete {
        /// Targeted media identifier
        id: u64,
    },
}

/// Media API answering from scripted responses and recording every call.
///
/// Page `n` answers with the `n`-th scripted page; pages past the script
/// answer with the fallback, which defaults to the error object WordPress
/// returns for out-of-range pages. Deletes answer `200` unless scripted.
///
/// # Examples
///
/// ```
/// use attachment_cleaner_wordpress::InMemoryMediaApi;
///
/// let api = InMemoryMediaApi::new()
///     .with_page_body(200, "[]")
///     .failing_delete(42);
/// assert!(api.calls().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryMediaApi {
    pages: Vec<ApiResponse>,
    fallback: Option<ApiResponse>,
    delete_responses: HashMap<u64, ApiResponse>,
    failing_pages: HashSet<u32>,
    failing_deletes: HashSet<u64>,
    calls: Mutex<Vec<ApiCall>>,
}

impl InMemoryMediaApi {
    /// An API with no media.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page serving `items`.
    ///
    /// # Errors
    ///
    /// Returns a [`JsonError`] if `items` cannot be serialized.
    pub fn with_page(self, items: &MediaItems) -> Result<Self, JsonError> {
        let body = serde_json::to_string(items)
            .map_err(|e| JsonError::new(format!("Failed to serialize page: {}", e)))?;
        Ok(self.with_page_body(200, body))
    }

    /// Append a page with an arbitrary status and body.
    pub fn with_page_body(mut self, status: u16, body: impl Into<String>) -> Self {
        self.pages.push(ApiResponse::new(status, body));
        self
    }

    /// Answer every page past the script with `response`.
    pub fn with_fallback(mut self, response: ApiResponse) -> Self {
        self.fallback = Some(response);
        self
    }

    /// Answer deletes of `id` with `response`.
    pub fn with_delete_response(mut self, id: u64, response: ApiResponse) -> Self {
        self.delete_responses.insert(id, response);
        self
    }

    /// Fail listing of `page` with a transport error.
    pub fn failing_page(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    /// Fail deletes of `id` with a transport error.
    pub fn failing_delete(mut self, id: u64) -> Self {
        self.failing_deletes.insert(id);
        self
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Identifiers of every delete received so far, in order.
    pub fn deleted_ids(&self) -> Vec<u64> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::Delete { id } => Some(id),
                ApiCall::List { .. } => None,
            })
            .collect()
    }

    /// Number of page requests received so far.
    pub fn list_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, ApiCall::List { .. }))
            .count()
    }

    fn record(&self, call: ApiCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

#[async_trait]
impl MediaApi for InMemoryMediaApi {
    async fn list_media(&self, page: u32, per_page: u32) -> MediaApiResult<ApiResponse> {
        self.record(ApiCall::List { page, per_page });

        if self.failing_pages.contains(&page) {
            return Err(MediaApiError::new(MediaApiErrorKind::Transport(format!(
                "connection reset while listing page {}",
                page
            ))));
        }

        let scripted = usize::try_from(page)
            .ok()
            .and_then(|page| page.checked_sub(1))
            .and_then(|index| self.pages.get(index));

        Ok(match (scripted, &self.fallback) {
            (Some(response), _) => response.clone(),
            (None, Some(fallback)) => fallback.clone(),
            (None, None) => ApiResponse::new(400, PAST_LAST_PAGE),
        })
    }

    async fn delete_media(&self, id: u64) -> MediaApiResult<ApiResponse> {
        self.record(ApiCall::Delete { id });

        if self.failing_deletes.contains(&id) {
            return Err(MediaApiError::new(MediaApiErrorKind::Transport(format!(
                "connection reset while deleting {}",
                id
            ))));
        }

        Ok(self.delete_responses.get(&id).cloned().unwrap_or_else(|| {
            ApiResponse::new(200, format!(r#"{{"deleted":true,"previous":{{"id":{}}}}}"#, id))
        }))
    }
}
