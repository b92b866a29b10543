//! Error types for the search client.
//!
//! Only [`SearchError::RateLimitExceeded`] is the product of retrying; every
//! other variant is surfaced to the caller on first occurrence.

use thiserror::Error;

/// Result type for search client operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error types for search client operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Caller input was malformed (for example an empty query)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credentials were missing or the token exchange was rejected
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Every attempt through the retry budget was answered with HTTP 429
    #[error("429 Too Many Requests: rate limit exceeded after {retries} retries")]
    RateLimitExceeded {
        /// The retry budget that was exhausted
        retries: u32,
    },

    /// Any other non-success HTTP response
    #[error("Twitter API error ({status}): {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Network-level failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body could not be decoded
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system failure while exporting results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// Returns true when the failure stems from provider throttling.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SearchError::RateLimitExceeded { .. })
    }

    /// The HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::RateLimitExceeded { .. } => Some(429),
            SearchError::Http { status, .. } => Some(*status),
            SearchError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
