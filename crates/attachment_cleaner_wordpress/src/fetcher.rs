//! Paginated retrieval of the whole media collection.

use crate::MediaApi;
use attachment_cleaner_core::MediaItems;
use attachment_cleaner_error::MediaApiResult;
use tracing::{debug, info, instrument};

/// Items requested per page (the WordPress REST maximum).
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Upper bound on page requests per run, whatever the server returns.
pub const DEFAULT_MAX_PAGES: u32 = 20;

/// Why a page ended the listing.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EndOfData {
    /// The page was a valid, empty array.
    #[display("empty page")]
    Empty,
    /// The body was not an array of media objects.
    #[display("page failed validation: {}", _0)]
    Invalid(String),
}

/// Result of requesting one page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// A valid, non-empty page of items.
    Page(MediaItems),
    /// No further data; stop paginating.
    EndOfData(EndOfData),
}

/// Loads every media item by walking pages in order.
///
/// # Example
///
/// ```no_run
/// use attachment_cleaner_wordpress::{MediaFetcher, WordPressClient};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = WordPressClient::new("https://example.org", None)?;
/// let items = MediaFetcher::new(&client).load_all().await?;
/// println!("{} items", items.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MediaFetcher<'a, A: MediaApi> {
    api: &'a A,
    per_page: u32,
    max_pages: u32,
}

impl<'a, A: MediaApi> MediaFetcher<'a, A> {
    /// Fetcher with the default page size and page bound.
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            per_page: DEFAULT_PER_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Set the page size.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the maximum number of page requests.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Request and validate one page.
    ///
    /// The HTTP status is not consulted: past the last page WordPress answers
    /// with an error object, which simply fails validation.
    ///
    /// # Errors
    ///
    /// Only transport failures are errors.
    #[instrument(skip(self), fields(per_page = self.per_page))]
    pub async fn fetch_page(&self, page: u32) -> MediaApiResult<PageOutcome> {
        let response = self.api.list_media(page, self.per_page).await?;
        debug!(status = response.status(), bytes = response.body().len(), "Received page");

        let outcome = match serde_json::from_str::<MediaItems>(response.body()) {
            Ok(items) if items.is_empty() => PageOutcome::EndOfData(EndOfData::Empty),
            Ok(items) => PageOutcome::Page(items),
            Err(e) => PageOutcome::EndOfData(EndOfData::Invalid(e.to_string())),
        };
        Ok(outcome)
    }

    /// Walk pages from 1 until end of data or the page bound.
    ///
    /// # Errors
    ///
    /// A transport failure on any page aborts the listing.
    #[instrument(skip(self), fields(per_page = self.per_page, max_pages = self.max_pages))]
    pub async fn load_all(&self) -> MediaApiResult<MediaItems> {
        let mut items = MediaItems::default();

        for page in 1..=self.max_pages {
            match self.fetch_page(page).await? {
                PageOutcome::Page(batch) => {
                    info!(page, count = batch.len(), "Loaded media page");
                    items.extend(batch);
                }
                PageOutcome::EndOfData(reason) => {
                    info!(page, reason = %reason, total = items.len(), "Reached end of media listing");
                    return Ok(items);
                }
            }
        }

        info!(
            max_pages = self.max_pages,
            total = items.len(),
            "Stopped media listing at page limit"
        );
        Ok(items)
    }
}
