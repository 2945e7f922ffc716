use thiserror::Error;

/// Failure of a single countries fetch.
///
/// Neither kind is retried. A fetch that fails never yields partial data.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not complete: DNS, connect, TLS, timeout, or a
    /// non-success HTTP status.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not a JSON array of well-formed country objects.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode(_))
    }
}
