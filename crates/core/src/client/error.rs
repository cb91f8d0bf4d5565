use thiserror::Error;

/// Errors that can occur when talking to the upstream courts API.
///
/// Any of these aborts the aggregation that triggered the call; nothing
/// partial is ever cached on failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Upstream request failed: {0}")]
    RequestFailed(String),
    #[error("Upstream returned status {status}: {url}")]
    UnexpectedStatus { status: u16, url: String },
    #[error("Failed to decode upstream response: {0}")]
    Decode(String),
}

/// Result type for upstream client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
