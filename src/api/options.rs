//! Option chains service.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::AuthScheme;
use crate::client::ClientInner;
use crate::models::OptionChainQuery;
use crate::Result;

/// Service for option chain and expiration data.
///
/// Chain responses nest per-expiration, per-strike contract maps and
/// are returned as raw JSON; the typed surface is the query side.
///
/// # Example
///
/// ```no_run
/// use schwab_rs::models::{ContractType, OptionChainQuery, OptionStrategy};
///
/// # async fn example(client: schwab_rs::SchwabClient) -> schwab_rs::Result<()> {
/// let query = OptionChainQuery::with_defaults(
///     "AAPL",
///     ContractType::Call,
///     true,
///     10,
///     OptionStrategy::Single,
/// );
/// let chain = client.option_chains().get(&query).await?;
/// println!("status: {}", chain["status"]);
/// # Ok(())
/// # }
/// ```
pub struct OptionChainsService {
    inner: Arc<ClientInner>,
}

impl OptionChainsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the option chain for an underlying symbol.
    pub async fn get(&self, query: &OptionChainQuery) -> Result<Value> {
        self.inner
            .get_with_query(
                self.inner.market_data_url("/chains"),
                query,
                AuthScheme::Bearer,
            )
            .await
    }

    /// Get the expiration series for an underlying symbol.
    pub async fn expiration_chain(&self, symbol: &str) -> Result<Value> {
        self.inner
            .get_with_query(
                self.inner.market_data_url("/expirationchain"),
                &[("symbol", symbol)],
                AuthScheme::Bearer,
            )
            .await
    }
}
