//! # Tweetsearch Library
//!
//! A client for the Twitter/X API v2 recent search endpoint. It authenticates
//! with the OAuth 2.0 client-credentials grant, spaces out requests, retries
//! rate-limited searches and normalizes the response into tweet records sorted
//! by views.
//!
//! ## Features
//!
//! - App-only Bearer Token obtained once per client and cached
//! - Fixed-interval request throttle
//! - Bounded retries on HTTP 429, honouring the provider's reset time
//! - Stable [`TweetRecord`] output with relative timestamps and canonical URLs
//! - Console rendering and JSON export of results
//! - Structured logging
//!
//! ## Configuration
//!
//! The following environment variables are required:
//! - `X_API_KEY`: Twitter API key
//! - `X_API_SECRET`: Twitter API secret
//!
//! Optional: `X_API_BASE_URL`, `X_RATE_LIMIT_WAIT_SECS`,
//! `X_MIN_REQUEST_INTERVAL_MS`, `X_REQUEST_TIMEOUT_SECS`.

pub mod config;
pub mod error;
pub mod export;
pub mod oauth;
pub mod present;
pub mod rate_gate;
pub mod twitter;

// Re-export commonly used types and functions
pub use config::{ClientConfig, Credentials};
pub use error::{Result, SearchError};
pub use export::{export_filename, save_to_json, to_json};
pub use oauth::{build_basic_auth_header, build_bearer_auth_header, TokenProvider};
pub use present::{display_tweets, format_number};
pub use rate_gate::RateGate;
pub use twitter::{
    RateLimitStatus, SearchClient, SearchRequest, SearchResponse, SearchResult, TweetRecord,
};
