//! Payload and result types for the recent search endpoint.
//!
//! The `Raw*` types mirror the provider's JSON. [`TweetRecord`] and
//! [`SearchResult`] are the stable shapes handed to callers and exporters.

use serde::{Deserialize, Serialize};

/// Body of a recent search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Matching tweets; absent when nothing matched
    #[serde(default)]
    pub data: Option<Vec<RawTweet>>,
    /// Expanded objects referenced by the tweets
    #[serde(default)]
    pub includes: Option<Includes>,
}

impl SearchResponse {
    /// Returns true when the response carries no tweets at all.
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().map_or(true, |tweets| tweets.is_empty())
    }
}

/// Expansions included alongside the tweets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Includes {
    #[serde(default)]
    pub users: Vec<RawUser>,
}

/// A tweet as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTweet {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub public_metrics: Option<PublicMetrics>,
}

/// Engagement counters. Any counter may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicMetrics {
    #[serde(default)]
    pub impression_count: Option<u64>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub retweet_count: Option<u64>,
    #[serde(default)]
    pub reply_count: Option<u64>,
}

/// A user record from `includes.users`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
}

/// A normalized tweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetRecord {
    pub id: String,
    pub text: String,
    /// Author display name
    pub author: String,
    /// Author handle, prefixed with `@`
    pub username: String,
    pub verified: bool,
    /// Coarse relative time such as `5m ago`
    pub timestamp: String,
    pub views: u64,
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
    /// Canonical link to the post
    pub url: String,
}

/// Outcome of a search: tweets ordered by views, most viewed first.
///
/// `total_results` always equals `tweets.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub tweets: Vec<TweetRecord>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    pub query: String,
}

impl SearchResult {
    /// Builds a result, deriving `total_results` from the tweet list.
    pub fn new(query: impl Into<String>, tweets: Vec<TweetRecord>) -> Self {
        SearchResult {
            total_results: tweets.len(),
            tweets,
            query: query.into(),
        }
    }

    /// A result with no tweets.
    pub fn empty(query: impl Into<String>) -> Self {
        Self::new(query, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }
}
