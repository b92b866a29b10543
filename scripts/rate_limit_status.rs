//! Twitter Search Rate Limit Utility
//!
//! This script reports how much of the recent search endpoint's rate limit
//! window is left for the configured credentials.

use tweetsearch::SearchClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    println!("⏱️  Twitter Search Rate Limit Status");
    println!("===================================");

    let mut client = SearchClient::from_env()?;

    println!("\n🔍 Checking rate limit status...");
    let status = match client.probe_rate_limit_status().await {
        Ok(status) => status,
        Err(e) => {
            eprintln!("⚠️  Could not fetch rate limit status: {}", e);
            return Err(e.into());
        }
    };

    println!(
        "   Rate Limit: {}/{}",
        status.remaining_display(),
        status.limit_display()
    );
    println!("   Reset (epoch): {}", status.reset_display());
    match status.reset_time {
        Some(reset_time) => println!(
            "   Resets at: {}",
            reset_time.with_timezone(&chrono::Local)
        ),
        None => println!("   Resets at: Unknown"),
    }

    if status.is_exhausted() {
        println!("\n⚠️  No requests left in this window - searches will wait for the reset.");
    }

    Ok(())
}
