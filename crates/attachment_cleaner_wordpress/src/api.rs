//! Transport seam between the pipeline and the remote media collection.

use async_trait::async_trait;
use attachment_cleaner_error::MediaApiResult;
use serde::{Deserialize, Serialize};

/// Status and raw body of one API call.
///
/// Bodies are kept as text: listing decides for itself whether a body is a
/// valid page, and delete responses are only surfaced to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ApiResponse {
    /// HTTP status code
    status: u16,
    /// Response body
    body: String,
}

impl ApiResponse {
    /// Build a response from its parts.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Endpoints of the `wp/v2/media` resource the cleaner relies on.
///
/// Implementations return `Err` only when no response was obtained at all.
/// Any HTTP status, including 4xx and 5xx, is a successful call.
#[async_trait]
pub trait MediaApi: Send + Sync {
    /// `GET /wp-json/wp/v2/media?per_page={per_page}&page={page}`, unauthenticated.
    async fn list_media(&self, page: u32, per_page: u32) -> MediaApiResult<ApiResponse>;

    /// `DELETE /wp-json/wp/v2/media/{id}?force=true`, authenticated, bypassing trash.
    async fn delete_media(&self, id: u64) -> MediaApiResult<ApiResponse>;
}
