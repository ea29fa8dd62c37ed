use crate::{ApiResponse, MediaApi};
use async_trait::async_trait;
use attachment_cleaner_error::{MediaApiError, MediaApiErrorKind, MediaApiResult};
use reqwest::{Client, Url};
use tracing::{debug, error, instrument};

const API_PATH: &str = "wp-json/wp/v2";

/// Username and application password used for authenticated calls.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create credentials for HTTP Basic authentication.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The account name.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client for the WordPress REST media endpoints.
///
/// Every call opens its own request and blocks the pipeline until it
/// returns. There is no retry: a transport failure is handed back to the
/// caller as is.
#[derive(Debug, Clone)]
pub struct WordPressClient {
    client: Client,
    api_url: String,
    credentials: Option<Credentials>,
}

impl WordPressClient {
    /// Creates a client for the site at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Site root, e.g. `https://example.org`
    /// * `credentials` - Required for deletes, unused for listing
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL or the HTTP
    /// client cannot be initialized.
    #[instrument(skip(credentials), fields(authenticated = credentials.is_some()))]
    pub fn new(base_url: &str, credentials: Option<Credentials>) -> MediaApiResult<Self> {
        Url::parse(base_url).map_err(|e| {
            MediaApiError::new(MediaApiErrorKind::InvalidUrl(format!("{}: {}", base_url, e)))
        })?;

        let client = Client::builder()
            .user_agent(concat!("attachment_cleaner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                error!(error = ?e, "Failed to build HTTP client");
                MediaApiError::new(MediaApiErrorKind::ClientInit(e.to_string()))
            })?;

        let api_url = format!("{}/{}", base_url.trim_end_matches('/'), API_PATH);
        debug!(api_url = %api_url, "Creating WordPress client");

        Ok(Self {
            client,
            api_url,
            credentials,
        })
    }

    /// Root of the `wp/v2` API this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn into_api_response(response: reqwest::Response) -> MediaApiResult<ApiResponse> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            MediaApiError::new(MediaApiErrorKind::Transport(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;
        Ok(ApiResponse::new(status, body))
    }
}

#[async_trait]
impl MediaApi for WordPressClient {
    #[instrument(skip(self))]
    async fn list_media(&self, page: u32, per_page: u32) -> MediaApiResult<ApiResponse> {
        let url = format!("{}/media", self.api_url);
        debug!(url = %url, "Requesting media page");

        let response = self
            .client
            .get(&url)
            .query(&[("per_page", per_page), ("page", page)])
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Media listing request failed");
                MediaApiError::new(MediaApiErrorKind::Transport(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        Self::into_api_response(response).await
    }

    #[instrument(skip(self))]
    async fn delete_media(&self, id: u64) -> MediaApiResult<ApiResponse> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(|| MediaApiError::new(MediaApiErrorKind::MissingCredentials))?;

        let url = format!("{}/media/{}", self.api_url, id);
        debug!(url = %url, "Deleting media item");

        let response = self
            .client
            .delete(&url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .query(&[("force", "true")])
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, id, "Delete request failed");
                MediaApiError::new(MediaApiErrorKind::Transport(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        Self::into_api_response(response).await
    }
}
