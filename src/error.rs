use bytes::Bytes;
use thiserror::Error;

/// Result alias used across the crate
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by API calls.
///
/// The client never retries and never interprets remote error bodies; every
/// failure of the single HTTP exchange maps onto one of these variants.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection, DNS or timeout failure
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-2xx status; the raw body is preserved
    #[error("unexpected status {status}: {}", String::from_utf8_lossy(.body))]
    Status { status: u16, body: Bytes },

    /// A payload that was expected to be JSON failed to parse
    #[error("failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// A local file could not be opened or read for upload
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(Box::new(err))
    }
}

impl ApiError {
    /// Transport error from any boxable source, for custom transports
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        ApiError::Transport(Box::new(err))
    }

    /// HTTP status code for [`ApiError::Status`], `None` otherwise
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
