//! Fetch snapshot quotes and account numbers.
//!
//! Usage:
//!   SCHWAB_ACCESS_TOKEN=... cargo run --example fetch_quotes -- AAPL SPY

use schwab_rs::SchwabClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let access_token = std::env::var("SCHWAB_ACCESS_TOKEN")
        .map_err(|_| "set SCHWAB_ACCESS_TOKEN to a valid access token")?;

    let symbols: Vec<String> = std::env::args().skip(1).collect();
    let symbols: Vec<&str> = if symbols.is_empty() {
        vec!["AAPL", "SPY"]
    } else {
        symbols.iter().map(|s| s.as_str()).collect()
    };

    let client = SchwabClient::new(access_token)?;

    let numbers = client.accounts().numbers().await?;
    println!("Linked accounts: {}", numbers.len());
    for mapping in &numbers {
        println!("  {} -> {}", mapping.account_number, mapping.hash_value);
    }

    let quotes = client.market_data().quotes(&symbols, Some("quote")).await?;
    for symbol in &symbols {
        match quotes[symbol]["quote"]["lastPrice"].as_f64() {
            Some(last) => println!("{symbol}: {last}"),
            None => println!("{symbol}: no quote"),
        }
    }

    Ok(())
}
