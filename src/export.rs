//! JSON export of search results.

use chrono::{DateTime, Local};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::twitter::SearchResult;

/// File name for an export of `query` taken at `now`.
///
/// Whitespace and path separators in the query become underscores, so the
/// name always stays inside the target directory.
///
/// # Example
///
/// ```rust
/// use chrono::{Local, TimeZone};
/// use tweetsearch::export_filename;
///
/// let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
/// assert_eq!(
///     export_filename("rust lang", now),
///     "tweets_rust_lang_20240309_140507.json"
/// );
/// ```
pub fn export_filename(query: &str, now: DateTime<Local>) -> String {
    let slug: String = query
        .trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' {
                '_'
            } else {
                c
            }
        })
        .collect();
    format!("tweets_{}_{}.json", slug, now.format("%Y%m%d_%H%M%S"))
}

/// Serializes `result` as indented JSON. Non-ASCII text is written verbatim.
pub fn to_json(result: &SearchResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Writes `result` into `dir` under [`export_filename`] and returns the path.
pub fn save_to_json(result: &SearchResult, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_filename(&result.query, Local::now()));
    fs::write(&path, to_json(result)?)?;
    info!(
        "Saved {} tweets to {}",
        result.total_results,
        path.display()
    );
    Ok(path)
}
