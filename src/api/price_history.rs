//! Price history service for candle charts.

use std::sync::Arc;

use crate::auth::AuthScheme;
use crate::client::ClientInner;
use crate::models::{CandleList, PriceHistoryQuery};
use crate::Result;

/// Service for historical price candles.
///
/// # Example
///
/// ```no_run
/// use schwab_rs::models::PriceHistoryQuery;
///
/// # async fn example(client: schwab_rs::SchwabClient) -> schwab_rs::Result<()> {
/// // One year of daily candles ending now
/// let history = client
///     .price_history()
///     .get(&PriceHistoryQuery::with_defaults("AAPL"))
///     .await?;
/// println!("{} candles", history.candles.len());
/// # Ok(())
/// # }
/// ```
pub struct PriceHistoryService {
    inner: Arc<ClientInner>,
}

impl PriceHistoryService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get price history for a symbol.
    pub async fn get(&self, query: &PriceHistoryQuery) -> Result<CandleList> {
        self.inner
            .get_with_query(
                self.inner.market_data_url("/pricehistory"),
                query,
                AuthScheme::Bearer,
            )
            .await
    }
}
