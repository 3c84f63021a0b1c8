//! # schwab-rs
//!
//! A Rust client for the Charles Schwab Trader and Market Data APIs.
//!
//! This crate is a thin, stateless wrapper: every method builds one
//! request, attaches the right `Authorization` header, sends it, and
//! returns what the API answered. There is no token storage, no
//! automatic refresh, no retry, and no caching — callers own their
//! credentials and their recovery policy.
//!
//! ## Features
//!
//! - **OAuth helpers**: authorization URL, code exchange, token refresh
//! - **Trader API**: account numbers, accounts, positions, orders,
//!   transactions, user preference
//! - **Market Data API**: quotes, option chains, price history, market
//!   hours, instrument lookup, movers
//! - **Typed requests**: query-parameter structs and closed enums with
//!   the exact vocabulary the API accepts; opaque payloads stay
//!   `serde_json::Value`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use schwab_rs::{auth, SchwabClient};
//!
//! #[tokio::main]
//! async fn main() -> schwab_rs::Result<()> {
//!     // Exchange a refresh token for a fresh access token.
//!     let tokens = auth::refresh_access_token(
//!         "https://api.schwabapi.com/v1",
//!         "app-key",
//!         "app-secret",
//!         "refresh-token",
//!     )
//!     .await?;
//!
//!     let client = SchwabClient::new(tokens.access_token)?;
//!
//!     // Resolve account hashes
//!     let numbers = client.accounts().numbers().await?;
//!     println!("Found {} accounts", numbers.len());
//!
//!     // Snapshot quotes
//!     let quotes = client.market_data().quotes(&["AAPL", "SPY"], None).await?;
//!     println!("{quotes:#}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Placing an order
//!
//! Order payloads are forwarded verbatim; build the JSON the Trader API
//! documents and pass it through:
//!
//! ```rust,no_run
//! use schwab_rs::{AccountHash, SchwabClient};
//! use serde_json::json;
//!
//! # async fn example(client: SchwabClient) -> schwab_rs::Result<()> {
//! let account = AccountHash::new("1CB32A840FAE");
//! let order = json!({
//!     "orderType": "MARKET",
//!     "session": "NORMAL",
//!     "duration": "DAY",
//!     "orderStrategyType": "SINGLE",
//!     "orderLegCollection": [{
//!         "instruction": "BUY",
//!         "quantity": 1,
//!         "instrument": {"symbol": "AAPL", "assetType": "EQUITY"}
//!     }]
//! });
//!
//! let order_id = client.orders().place(&account, &order).await?;
//! println!("placed: {order_id:?}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{AuthScheme, TokenResponse};
pub use client::{ApiHosts, ClientConfig, SchwabClient};
pub use error::{Error, Result};
pub use models::{AccountHash, OrderId, Symbol};

/// Prelude module for convenient imports.
///
/// ```rust
/// use schwab_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{OrdersQuery, TransactionsQuery};
    pub use crate::auth::AuthScheme;
    pub use crate::client::{ApiHosts, ClientConfig, SchwabClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        AccountHash, OrderId, Symbol,
        // Enums
        ContractType, FrequencyType, MarketId, MoverSort, OptionRange, OptionStrategy,
        OptionTypeFilter, OrderStatus, PeriodType, Projection, TransactionType,
        // Requests and documented responses
        AccountNumberMapping, Candle, CandleList, OptionChainQuery, PriceHistoryQuery,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hosts() {
        let hosts = ApiHosts::default();
        assert_eq!(hosts.trader_base_url, "https://api.schwabapi.com/trader/v1");
        assert_eq!(
            hosts.market_data_base_url,
            "https://api.schwabapi.com/marketdata/v1"
        );
    }

    #[test]
    fn test_account_hash_creation() {
        let hash = AccountHash::new("1CB32A840FAE");
        assert_eq!(hash.as_str(), "1CB32A840FAE");
    }

    #[test]
    fn test_client_is_clone() {
        let client = SchwabClient::new("token").unwrap();
        let clone = client.clone();
        assert_eq!(
            clone.config().hosts.trader_base_url,
            client.config().hosts.trader_base_url
        );
    }
}
