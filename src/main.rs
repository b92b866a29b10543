//! # Tweetsearch
//!
//! Interactive search tool for the Twitter/X recent search API.
//!
//! ## Environment Variables
//!
//! - `X_API_KEY`, `X_API_SECRET`: required API credentials (may live in a `.env` file)
//! - `RUST_LOG`: log level, e.g. `RUST_LOG=debug`
//!
//! See [`tweetsearch::ClientConfig::from_env`] for the optional tunables.

use log::{error, info};
use std::io::{self, Write};
use std::path::Path;

use tweetsearch::{display_tweets, save_to_json, SearchClient, SearchRequest};

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parses the result count typed by the user; blank or invalid input means 10.
fn parse_max_results(input: &str) -> u32 {
    input
        .parse::<u32>()
        .map(tweetsearch::twitter::clamp_max_results)
        .unwrap_or(tweetsearch::twitter::DEFAULT_MAX_RESULTS)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    println!("\n🐦 Twitter/X Tweet Search Tool");
    println!("{}", "=".repeat(80));

    let mut client = match SearchClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to configure search client: {}", e);
            eprintln!("❌ Error: {}", e);
            return Err(e.into());
        }
    };

    println!("\n📝 Enter your search query:");
    let query = prompt("Query: ")?;
    if query.is_empty() {
        println!("❌ Please enter a search query");
        return Ok(());
    }

    println!("\n📊 Number of tweets to retrieve (10-100):");
    let max_results = parse_max_results(&prompt("Max Results [default=10]: ")?);

    println!(
        "\n🔄 Searching for: '{}' (max {} results)...",
        query, max_results
    );
    let request = SearchRequest::new(query).with_max_results(max_results);

    let result = tokio::select! {
        result = client.search(&request) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Search interrupted by user");
            println!("\n\n⚠️  Search interrupted by user");
            return Ok(());
        }
    };

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            error!("Search failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            return Err(e.into());
        }
    };

    let stdout = io::stdout();
    display_tweets(&result, &mut stdout.lock())?;

    let save = prompt("\n💾 Save results to JSON file? (y/n): ")?;
    if save.eq_ignore_ascii_case("y") {
        let path = save_to_json(&result, Path::new("."))?;
        println!("✅ Results saved to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_max_results;

    #[test]
    fn test_parse_max_results() {
        assert_eq!(parse_max_results(""), 10);
        assert_eq!(parse_max_results("abc"), 10);
        assert_eq!(parse_max_results("5"), 10);
        assert_eq!(parse_max_results("42"), 42);
        assert_eq!(parse_max_results("500"), 100);
    }
}
