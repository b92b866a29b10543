//! Console rendering of search results.

use std::io::{self, Write};

use crate::twitter::SearchResult;

const RULE_WIDTH: usize = 80;

/// Formats large counts with a `K` or `M` suffix and one decimal.
///
/// # Example
///
/// ```rust
/// use tweetsearch::format_number;
///
/// assert_eq!(format_number(950), "950");
/// assert_eq!(format_number(1_500), "1.5K");
/// assert_eq!(format_number(2_345_678), "2.3M");
/// ```
pub fn format_number(num: u64) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Writes a human-readable listing of `result` to `out`.
pub fn display_tweets<W: Write>(result: &SearchResult, out: &mut W) -> io::Result<()> {
    let heavy_rule = "=".repeat(RULE_WIDTH);
    let light_rule = "-".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "{}", heavy_rule)?;
    writeln!(out, "📊 Search Results for: '{}'", result.query)?;
    writeln!(out, "Total Results: {}", result.total_results)?;
    writeln!(out, "{}", heavy_rule)?;
    writeln!(out)?;

    for (i, tweet) in result.tweets.iter().enumerate() {
        writeln!(out, "Tweet #{}", i + 1)?;
        writeln!(out, "👤 {} {}", tweet.author, tweet.username)?;
        if tweet.verified {
            writeln!(out, "   ✓ Verified")?;
        }
        writeln!(out, "⏰ {}", tweet.timestamp)?;
        writeln!(out)?;
        writeln!(out, "💬 {}", tweet.text)?;
        writeln!(out)?;
        writeln!(out, "📊 Engagement:")?;
        writeln!(out, "   👁️  Views: {}", format_number(tweet.views))?;
        writeln!(out, "   ❤️  Likes: {}", format_number(tweet.likes))?;
        writeln!(out, "   🔁 Retweets: {}", format_number(tweet.retweets))?;
        writeln!(out, "   💭 Replies: {}", format_number(tweet.replies))?;
        writeln!(out, "🔗 {}", tweet.url)?;
        writeln!(out, "{}", light_rule)?;
        writeln!(out)?;
    }

    Ok(())
}
