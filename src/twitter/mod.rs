//! Twitter/X API integration module.
//!
//! This module contains the recent search client, the payload types it decodes
//! and the normalization that turns them into tweet records.

mod api;
mod models;
mod normalize;
mod search;

// Re-export public API
pub use api::{
    retry_delay, sanitize_for_logging, RateLimitInfo, RateLimitStatus, RATE_LIMIT_LIMIT_HEADER,
    RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER,
};
pub use models::{
    Includes, PublicMetrics, RawTweet, RawUser, SearchResponse, SearchResult,
    TweetRecord,
};
pub use normalize::{format_relative_time, normalize, sort_by_views, tweet_url};
pub use search::{
    clamp_max_results, SearchClient, SearchRequest, DEFAULT_MAX_RESULTS, DEFAULT_MAX_RETRIES,
    MAX_RESULTS, MIN_RESULTS,
};

#[cfg(test)]
pub(crate) use search::build_result;
