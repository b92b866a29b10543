//! Tweet search functionality for Twitter API.
//!
//! This module contains the [`SearchClient`], which runs a recent search with
//! the client's cached Bearer Token, throttles outgoing requests, retries
//! rate-limited attempts and normalizes the response.

use chrono::Utc;
use log::{debug, error, info, warn};
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{Result, SearchError};
use crate::oauth::{build_bearer_auth_header, TokenProvider};
use crate::rate_gate::RateGate;

use super::api::{retry_delay, sanitize_for_logging, RateLimitInfo, RateLimitStatus};
use super::models::{SearchResponse, SearchResult};
use super::normalize::{normalize, sort_by_views};

/// Smallest `max_results` value the search endpoint accepts.
pub const MIN_RESULTS: u32 = 10;
/// Largest `max_results` value the search endpoint accepts.
pub const MAX_RESULTS: u32 = 100;
/// Default number of results requested.
pub const DEFAULT_MAX_RESULTS: u32 = 10;
/// Default number of retries after a 429 response.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

const TWEET_FIELDS: &str = "created_at,public_metrics,author_id";
const USER_FIELDS: &str = "name,username,verified";
const EXPANSIONS: &str = "author_id";

/// Clamps a requested result count into the range the endpoint accepts.
///
/// Values below 10 are raised to 10, values above 100 are lowered to 100.
pub fn clamp_max_results(max_results: u32) -> u32 {
    max_results.clamp(MIN_RESULTS, MAX_RESULTS)
}

/// Parameters of one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// Requested result count, clamped when sent
    pub max_results: u32,
    /// Retries allowed after 429 responses
    pub max_retries: u32,
}

impl SearchRequest {
    /// A request for `query` with default count and retry budget.
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            max_results: DEFAULT_MAX_RESULTS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// The result count actually sent upstream.
    pub fn effective_max_results(&self) -> u32 {
        clamp_max_results(self.max_results)
    }

    /// Rejects blank queries.
    pub fn validate(&self) -> Result<()> {
        if self.query.trim().is_empty() {
            return Err(SearchError::Validation(
                "search query must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Client for the recent search endpoint.
///
/// Owns the cached Bearer Token, the request throttle and the rate-limit
/// headers of the last response. One client serves one caller; every call
/// takes `&mut self` and runs to completion before the next can start.
#[derive(Debug)]
pub struct SearchClient {
    http: Client,
    config: ClientConfig,
    token_provider: TokenProvider,
    rate_gate: RateGate,
    last_rate_limit: Option<RateLimitInfo>,
}

impl SearchClient {
    /// Creates a client from `config`.
    ///
    /// # Returns
    ///
    /// - `Ok(SearchClient)`: The configured client
    /// - `Err(SearchError::Transport)`: If the HTTP client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let token_provider = TokenProvider::new(config.credentials.clone(), config.token_url());
        let rate_gate = RateGate::new(config.min_request_interval);

        Ok(SearchClient {
            http,
            config,
            token_provider,
            rate_gate,
            last_rate_limit: None,
        })
    }

    /// Creates a client configured from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Rate-limit headers from the most recent response, `Unknown` where absent.
    ///
    /// Makes no request.
    pub fn rate_limit_status(&self) -> RateLimitStatus {
        self.last_rate_limit
            .map(RateLimitStatus::from)
            .unwrap_or_else(RateLimitStatus::unknown)
    }

    /// Issues one minimal search and reports the rate-limit headers it returns.
    ///
    /// The probe goes through the throttle like any other request. Its status
    /// code is ignored; only the headers are read.
    pub async fn probe_rate_limit_status(&mut self) -> Result<RateLimitStatus> {
        let auth_header = build_bearer_auth_header(self.token_provider.get_token(&self.http).await?);
        let url = self.search_url("test", MIN_RESULTS);

        info!("Probing rate limit status of the search endpoint");
        self.rate_gate.throttle().await;
        let response = self
            .http
            .get(&url)
            .header("Authorization", auth_header)
            .send()
            .await?;

        let info = RateLimitInfo::from_headers(response.headers());
        debug!("Probe returned status {} with {:?}", response.status(), info);
        self.last_rate_limit = Some(info);
        Ok(RateLimitStatus::from(info))
    }

    /// Searches recent tweets, see [`SearchClient::search`].
    pub async fn search_tweets(
        &mut self,
        query: &str,
        max_results: u32,
        max_retries: u32,
    ) -> Result<SearchResult> {
        let request = SearchRequest::new(query)
            .with_max_results(max_results)
            .with_max_retries(max_retries);
        self.search(&request).await
    }

    /// Searches recent tweets and returns them sorted by views, most viewed first.
    ///
    /// Each attempt waits on the throttle first. A 429 response is retried up to
    /// `request.max_retries` times, sleeping between attempts for the time until
    /// the provider's reset, or `rate_limit_wait * attempt` when no reset is
    /// given. The Bearer Token is fetched once and reused across attempts.
    ///
    /// # Returns
    ///
    /// - `Ok(SearchResult)`: All matching tweets; empty when nothing matched
    /// - `Err(SearchError::Validation)`: If the query is blank
    /// - `Err(SearchError::Auth)`: If the token exchange fails
    /// - `Err(SearchError::RateLimitExceeded)`: If every attempt was rate limited
    /// - `Err(SearchError::Http)`: On any other non-success status, including a
    ///   401 for a cached token the provider no longer accepts
    /// - `Err(SearchError::Transport)`: On network failure
    /// - `Err(SearchError::Parse)`: If a success body cannot be decoded
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tweetsearch::{SearchClient, SearchRequest};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let mut client = SearchClient::from_env().unwrap();
    ///     let request = SearchRequest::new("rust lang").with_max_results(25);
    ///     match client.search(&request).await {
    ///         Ok(result) => println!("Found {} tweets", result.total_results),
    ///         Err(e) => eprintln!("Search failed: {}", e),
    ///     }
    /// }
    /// ```
    pub async fn search(&mut self, request: &SearchRequest) -> Result<SearchResult> {
        request.validate()?;

        let auth_header = build_bearer_auth_header(self.token_provider.get_token(&self.http).await?);
        let url = self.search_url(&request.query, request.effective_max_results());
        debug!("Search URL: {}", url);
        debug!("Request headers: Authorization: Bearer [REDACTED]");

        let mut retry_count: u32 = 0;
        loop {
            self.rate_gate.throttle().await;

            info!("Searching for tweets: '{}'", request.query);
            let response = self
                .http
                .get(&url)
                .header("Authorization", auth_header.as_str())
                .send()
                .await?;

            let status = response.status();
            let rate_limit = RateLimitInfo::from_headers(response.headers());
            self.last_rate_limit = Some(rate_limit);
            info!("Received response with status: {} for search", status);

            if status == StatusCode::TOO_MANY_REQUESTS {
                retry_count += 1;
                if retry_count > request.max_retries {
                    error!(
                        "Rate limit exceeded after {} retries for query '{}'",
                        request.max_retries, request.query
                    );
                    return Err(SearchError::RateLimitExceeded {
                        retries: request.max_retries,
                    });
                }

                let wait = retry_delay(
                    rate_limit.reset,
                    Utc::now().timestamp(),
                    self.config.rate_limit_wait,
                    retry_count,
                );
                warn!(
                    "Rate limit hit! Waiting {}s before retry {}/{}...",
                    wait.as_secs(),
                    retry_count,
                    request.max_retries
                );
                sleep(wait).await;
                continue;
            }

            let response_text = response.text().await?;

            if !status.is_success() {
                error!("Search failed - Status: {}", status);
                debug!(
                    "Error response for search: {}",
                    sanitize_for_logging(&response_text, 200)
                );
                return Err(SearchError::Http {
                    status: status.as_u16(),
                    body: response_text,
                });
            }

            debug!("Search response: {} bytes received", response_text.len());
            let payload: SearchResponse = serde_json::from_str(&response_text)?;
            return Ok(build_result(&request.query, &payload));
        }
    }

    fn search_url(&self, query: &str, max_results: u32) -> String {
        format!(
            "{}?query={}&max_results={}&tweet.fields={}&user.fields={}&expansions={}",
            self.config.search_url(),
            urlencoding::encode(query),
            max_results,
            TWEET_FIELDS,
            USER_FIELDS,
            EXPANSIONS
        )
    }
}

/// Turns a decoded payload into a sorted [`SearchResult`].
pub(crate) fn build_result(query: &str, payload: &SearchResponse) -> SearchResult {
    if payload.is_empty() {
        warn!("No tweets found for query: '{}'", query);
        return SearchResult::empty(query);
    }

    let mut tweets = normalize(payload, Utc::now());
    sort_by_views(&mut tweets);
    info!("Found {} tweets (sorted by views)", tweets.len());
    SearchResult::new(query, tweets)
}

async fn sleep(wait: Duration) {
    if !wait.is_zero() {
        tokio::time::sleep(wait).await;
    }
}
