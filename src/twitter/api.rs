//! Core Twitter API utilities.
//!
//! This module contains the low-level helpers shared by the search client:
//! reading rate-limit headers, computing rate-limit waits and making response
//! text safe to log.

use chrono::{DateTime, TimeZone, Utc};
use reqwest::header::HeaderMap;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Header carrying the request ceiling for the current window.
pub const RATE_LIMIT_LIMIT_HEADER: &str = "x-rate-limit-limit";
/// Header carrying the requests left in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-rate-limit-remaining";
/// Header carrying the window reset time in epoch seconds.
pub const RATE_LIMIT_RESET_HEADER: &str = "x-rate-limit-reset";

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_len`: Maximum number of characters before truncation
///
/// # Returns
///
/// A sanitized string safe for logging
pub fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_len {
        let truncated: String = sanitized.chars().take(max_len).collect();
        format!(
            "{}... [truncated, {} total bytes]",
            truncated,
            text.len()
        )
    } else {
        sanitized
    }
}

/// Rate-limit values read from a response's headers.
///
/// Each field is `None` when the header is absent or unparsable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitInfo {
    pub limit: Option<u64>,
    pub remaining: Option<u64>,
    /// Window reset time, epoch seconds
    pub reset: Option<i64>,
}

impl RateLimitInfo {
    /// Parses rate-limit info from response headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        fn parse<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok())
        }

        RateLimitInfo {
            limit: parse(headers, RATE_LIMIT_LIMIT_HEADER),
            remaining: parse(headers, RATE_LIMIT_REMAINING_HEADER),
            reset: parse(headers, RATE_LIMIT_RESET_HEADER),
        }
    }

    /// The reset time as a UTC timestamp.
    pub fn reset_time(&self) -> Option<DateTime<Utc>> {
        self.reset
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }
}

/// Best-effort view of the search endpoint's rate limit.
///
/// Fields the provider did not report render as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateLimitStatus {
    pub limit: Option<u64>,
    pub remaining: Option<u64>,
    pub reset: Option<i64>,
    #[serde(rename = "resetTime")]
    pub reset_time: Option<DateTime<Utc>>,
}

impl RateLimitStatus {
    /// A status with every field unknown.
    pub fn unknown() -> Self {
        RateLimitStatus {
            limit: None,
            remaining: None,
            reset: None,
            reset_time: None,
        }
    }

    /// True when the window has no requests left.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    /// `limit` for display, `Unknown` when absent.
    pub fn limit_display(&self) -> String {
        display_or_unknown(self.limit)
    }

    /// `remaining` for display, `Unknown` when absent.
    pub fn remaining_display(&self) -> String {
        display_or_unknown(self.remaining)
    }

    /// `reset` for display, `Unknown` when absent.
    pub fn reset_display(&self) -> String {
        display_or_unknown(self.reset)
    }
}

impl From<RateLimitInfo> for RateLimitStatus {
    fn from(info: RateLimitInfo) -> Self {
        RateLimitStatus {
            limit: info.limit,
            remaining: info.remaining,
            reset: info.reset,
            reset_time: info.reset_time(),
        }
    }
}

impl fmt::Display for RateLimitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} (reset: {})",
            self.remaining_display(),
            self.limit_display(),
            self.reset_time
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "Unknown".to_string())
        )
    }
}

fn display_or_unknown<T: fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Computes how long to wait before retrying a rate-limited request.
///
/// With a reset timestamp the wait is the time until reset, but never less
/// than `fallback_wait`. Without one the wait grows linearly with the attempt
/// number: `fallback_wait * retry_count`.
///
/// # Parameters
///
/// - `reset`: Reset time from the response, epoch seconds
/// - `now`: Current time, epoch seconds
/// - `fallback_wait`: Base wait
/// - `retry_count`: 1 for the first retry, 2 for the second, and so on
pub fn retry_delay(
    reset: Option<i64>,
    now: i64,
    fallback_wait: Duration,
    retry_count: u32,
) -> Duration {
    match reset {
        Some(reset) => {
            let until_reset = Duration::from_secs(reset.saturating_sub(now).max(0) as u64);
            until_reset.max(fallback_wait)
        }
        None => fallback_wait.saturating_mul(retry_count),
    }
}
