//! Provider error types

use thiserror::Error;

/// Errors from the hosted summarization provider.
///
/// All of these are recovered by the pipeline's offline fallback; none
/// reaches the end user as a failure.
#[derive(Error, Debug)]
pub enum LlmError {
    /// API request failed
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Invalid response from API
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {0} seconds")]
    RateLimited(u64),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Parse error
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Sentiment label outside the fixed domain, under the reject policy
    #[error("Sentiment label out of domain: {0}")]
    UnknownLabel(String),

    /// Timeout
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else if err.is_connect() {
            LlmError::ConnectionError(err.to_string())
        } else {
            LlmError::RequestFailed(err.to_string())
        }
    }
}
