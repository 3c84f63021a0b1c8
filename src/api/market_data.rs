//! Quotes and movers from the Market Data API.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::auth::AuthScheme;
use crate::client::ClientInner;
use crate::models::MoverSort;
use crate::{Error, Result};

/// Maximum number of symbols per quote request.
pub const MAX_SYMBOLS_PER_REQUEST: usize = 500;

/// Service for snapshot quotes and market movers.
///
/// Quote responses are keyed by symbol and their shape varies by asset
/// class, so they are returned as raw JSON.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: schwab_rs::SchwabClient) -> schwab_rs::Result<()> {
/// let quotes = client.market_data().quotes(&["AAPL", "SPY"], None).await?;
/// if let Some(last) = quotes["AAPL"]["quote"]["lastPrice"].as_f64() {
///     println!("AAPL last: {last}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct MarketDataService {
    inner: Arc<ClientInner>,
}

impl MarketDataService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get quotes for multiple symbols.
    ///
    /// `fields` narrows the response sections, e.g. `"quote,reference"`;
    /// `None` returns everything.
    pub async fn quotes(&self, symbols: &[&str], fields: Option<&str>) -> Result<Value> {
        if symbols.is_empty() {
            return Err(Error::InvalidInput("No symbols provided".to_string()));
        }
        if symbols.len() > MAX_SYMBOLS_PER_REQUEST {
            return Err(Error::InvalidInput(format!(
                "Too many symbols. Maximum is {}, got {}",
                MAX_SYMBOLS_PER_REQUEST,
                symbols.len()
            )));
        }

        #[derive(Serialize)]
        struct Query {
            symbols: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            fields: Option<String>,
        }

        let query = Query {
            symbols: symbols.join(","),
            fields: fields.map(String::from),
        };

        self.inner
            .get_with_query(
                self.inner.market_data_url("/quotes"),
                &query,
                AuthScheme::Bearer,
            )
            .await
    }

    /// Get a quote for a single symbol.
    pub async fn quote(&self, symbol: &str, fields: Option<&str>) -> Result<Value> {
        let url = self.inner.market_data_url(&format!("/{symbol}/quotes"));
        match fields {
            Some(f) => {
                self.inner
                    .get_with_query(url, &[("fields", f)], AuthScheme::Bearer)
                    .await
            }
            None => self.inner.get(url, AuthScheme::Bearer).await,
        }
    }

    /// Get movers for an index.
    ///
    /// `index_symbol` is one of the index identifiers the API accepts,
    /// e.g. `$DJI`, `$SPX`, `$COMPX`, `NYSE`, `NASDAQ`.
    pub async fn movers(
        &self,
        index_symbol: &str,
        sort: Option<MoverSort>,
        frequency: Option<u32>,
    ) -> Result<Value> {
        #[derive(Serialize)]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            sort: Option<MoverSort>,
            #[serde(skip_serializing_if = "Option::is_none")]
            frequency: Option<u32>,
        }

        let query = Query { sort, frequency };

        self.inner
            .get_with_query(
                self.inner.market_data_url(&format!("/movers/{index_symbol}")),
                &query,
                AuthScheme::Bearer,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ApiHosts, ClientConfig, SchwabClient};

    #[tokio::test]
    async fn test_quotes_rejects_empty_symbol_list() {
        let client = SchwabClient::with_config(
            "t",
            ClientConfig::default().with_hosts(ApiHosts::single_host("http://127.0.0.1:1")),
        )
        .unwrap();

        let err = client.market_data().quotes(&[], None).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_quotes_rejects_oversized_symbol_list() {
        let client = SchwabClient::with_config(
            "t",
            ClientConfig::default().with_hosts(ApiHosts::single_host("http://127.0.0.1:1")),
        )
        .unwrap();

        let symbols: Vec<String> = (0..=MAX_SYMBOLS_PER_REQUEST).map(|i| format!("S{i}")).collect();
        let refs: Vec<&str> = symbols.iter().map(|s| s.as_str()).collect();

        let err = client.market_data().quotes(&refs, None).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
