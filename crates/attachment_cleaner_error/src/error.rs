//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, MediaApiError};

/// Every error the cleaner can surface, discriminated by origin.
///
/// # Examples
///
/// ```
/// use attachment_cleaner_error::{CleanerError, CleanerErrorKind, MediaApiError, MediaApiErrorKind};
///
/// let api_err = MediaApiError::new(MediaApiErrorKind::MissingCredentials);
/// let err: CleanerError = api_err.into();
/// assert!(matches!(err.kind(), CleanerErrorKind::MediaApi(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CleanerErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Remote media API error
    #[from(MediaApiError)]
    MediaApi(MediaApiError),
}

/// Cleaner error with kind discrimination.
///
/// # Examples
///
/// ```
/// use attachment_cleaner_error::{CleanerResult, ConfigError};
///
/// fn might_fail() -> CleanerResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Attachment Cleaner Error: {}", _0)]
pub struct CleanerError(Box<CleanerErrorKind>);

impl CleanerError {
    /// Create a new error from a kind.
    pub fn new(kind: CleanerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CleanerErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CleanerErrorKind
impl<T> From<T> for CleanerError
where
    T: Into<CleanerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for cleaner operations.
pub type CleanerResult<T> = std::result::Result<T, CleanerError>;
