//! Error types for the remote media API.

/// Error kinds for media API operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum MediaApiErrorKind {
    /// The request never produced a response (connection, TLS, timeout, body read).
    #[display("Transport failure: {}", _0)]
    Transport(String),

    /// A delete was attempted without a username and password.
    #[display("Credentials are required for authenticated requests")]
    MissingCredentials,

    /// The configured base URL cannot be joined with an API path.
    #[display("Invalid API URL: {}", _0)]
    InvalidUrl(String),

    /// The HTTP client could not be set up (TLS backend, resolver).
    #[display("HTTP client initialization failed: {}", _0)]
    ClientInit(String),
}

/// Error wrapper with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media API Error: {} at line {} in {}", kind, line, file)]
pub struct MediaApiError {
    /// The error kind
    pub kind: MediaApiErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl MediaApiError {
    /// Create a new MediaApiError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use attachment_cleaner_error::{MediaApiError, MediaApiErrorKind};
    ///
    /// let err = MediaApiError::new(MediaApiErrorKind::MissingCredentials);
    /// assert_eq!(err.kind, MediaApiErrorKind::MissingCredentials);
    /// ```
    #[track_caller]
    pub fn new(kind: MediaApiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the error came from the network rather than from local state.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, MediaApiErrorKind::Transport(_))
    }
}

/// Result type for media API operations.
pub type MediaApiResult<T> = std::result::Result<T, MediaApiError>;
