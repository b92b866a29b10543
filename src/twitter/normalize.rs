//! Response normalization for the recent search endpoint.
//!
//! Maps the provider payload into [`TweetRecord`]s. Everything here is pure:
//! the reference time is passed in, so the same payload and `now` always give
//! the same output.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::models::{RawTweet, RawUser, SearchResponse, TweetRecord};

const UNKNOWN_AUTHOR: &str = "Unknown";
const UNKNOWN_HANDLE: &str = "unknown";
const UNKNOWN_TIMESTAMP: &str = "Unknown";
// Path segment used in post URLs when the author's handle is unknown.
const ANONYMOUS_URL_HANDLE: &str = "i";

/// Formats an ISO-8601 timestamp as a coarse relative time.
///
/// Uses the largest unit of seconds, minutes, hours or days that is at least one,
/// truncating the count. Timestamps later than `now` read as `0s ago`.
///
/// # Returns
///
/// - `"Unknown"` when `created_at` is absent
/// - the input unchanged when it cannot be parsed
/// - otherwise a string such as `"42s ago"`, `"5m ago"`, `"3h ago"` or `"2d ago"`
pub fn format_relative_time(created_at: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = created_at else {
        return UNKNOWN_TIMESTAMP.to_string();
    };

    let created = match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => return raw.to_string(),
    };

    let seconds = (now - created).num_seconds().max(0);
    if seconds < 60 {
        format!("{}s ago", seconds)
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}

/// Canonical URL of a post.
pub fn tweet_url(handle: Option<&str>, tweet_id: &str) -> String {
    format!(
        "https://twitter.com/{}/status/{}",
        handle.unwrap_or(ANONYMOUS_URL_HANDLE),
        tweet_id
    )
}

fn normalize_tweet(tweet: &RawTweet, author: Option<&RawUser>, now: DateTime<Utc>) -> TweetRecord {
    let name = author.and_then(|u| u.name.as_deref());
    let handle = author.and_then(|u| u.username.as_deref());
    let metrics = tweet.public_metrics.clone().unwrap_or_default();

    TweetRecord {
        id: tweet.id.clone(),
        text: tweet.text.clone(),
        author: name.unwrap_or(UNKNOWN_AUTHOR).to_string(),
        username: format!("@{}", handle.unwrap_or(UNKNOWN_HANDLE)),
        verified: author.and_then(|u| u.verified).unwrap_or(false),
        timestamp: format_relative_time(tweet.created_at.as_deref(), now),
        views: metrics.impression_count.unwrap_or(0),
        likes: metrics.like_count.unwrap_or(0),
        retweets: metrics.retweet_count.unwrap_or(0),
        replies: metrics.reply_count.unwrap_or(0),
        url: tweet_url(handle, &tweet.id),
    }
}

/// Maps a raw search payload into tweet records, in provider order.
///
/// Authors are resolved through `includes.users` by `author_id`; a tweet whose
/// author is not included gets the `Unknown` / `@unknown` identity. Missing
/// engagement counters read as zero.
pub fn normalize(payload: &SearchResponse, now: DateTime<Utc>) -> Vec<TweetRecord> {
    let users: HashMap<&str, &RawUser> = payload
        .includes
        .iter()
        .flat_map(|includes| includes.users.iter())
        .map(|user| (user.id.as_str(), user))
        .collect();

    payload
        .data
        .iter()
        .flatten()
        .map(|tweet| {
            let author = tweet
                .author_id
                .as_deref()
                .and_then(|id| users.get(id).copied());
            normalize_tweet(tweet, author, now)
        })
        .collect()
}

/// Sorts tweets by views, most viewed first. Ties keep their input order.
pub fn sort_by_views(tweets: &mut [TweetRecord]) {
    tweets.sort_by(|a, b| b.views.cmp(&a.views));
}
