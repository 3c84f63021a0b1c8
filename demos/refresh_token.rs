//! Exchange a refresh token for a fresh access token.
//!
//! Usage:
//!   SCHWAB_APP_KEY=... SCHWAB_APP_SECRET=... SCHWAB_REFRESH_TOKEN=... \
//!     cargo run --example refresh_token
//!
//! Prints the new access token to stdout so it can be captured into an
//! environment variable for the other examples. Nothing is persisted;
//! storing tokens is the caller's job.

use schwab_rs::{auth, ApiHosts};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let app_key = std::env::var("SCHWAB_APP_KEY").map_err(|_| "set SCHWAB_APP_KEY")?;
    let app_secret = std::env::var("SCHWAB_APP_SECRET").map_err(|_| "set SCHWAB_APP_SECRET")?;
    let refresh_token =
        std::env::var("SCHWAB_REFRESH_TOKEN").map_err(|_| "set SCHWAB_REFRESH_TOKEN")?;

    let hosts = ApiHosts::default();
    let tokens =
        auth::refresh_access_token(&hosts.oauth_base_url, &app_key, &app_secret, &refresh_token)
            .await?;

    eprintln!(
        "token type: {}, expires in {}s",
        tokens.token_type, tokens.expires_in
    );
    println!("{}", tokens.access_token);

    Ok(())
}
