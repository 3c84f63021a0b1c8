//! Market hours service.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::auth::AuthScheme;
use crate::client::ClientInner;
use crate::models::MarketId;
use crate::{Error, Result};

/// Service for market session hours.
///
/// The upstream JavaScript client sent `Basic` auth to these endpoints
/// even though the API documents `Bearer`, so the scheme is an explicit
/// argument here rather than being silently fixed. Pass
/// [`AuthScheme::Bearer`] unless you are reproducing the old behavior.
///
/// # Example
///
/// ```no_run
/// use schwab_rs::auth::AuthScheme;
/// use schwab_rs::models::MarketId;
///
/// # async fn example(client: schwab_rs::SchwabClient) -> schwab_rs::Result<()> {
/// let hours = client
///     .market_hours()
///     .markets(&[MarketId::Equity, MarketId::Option], None, AuthScheme::Bearer)
///     .await?;
/// println!("{hours:#}");
/// # Ok(())
/// # }
/// ```
pub struct MarketHoursService {
    inner: Arc<ClientInner>,
}

#[derive(Serialize)]
struct Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    markets: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
}

impl MarketHoursService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get hours for one or more markets on an optional date.
    ///
    /// `date` defaults to the current trading day when omitted.
    pub async fn markets(
        &self,
        markets: &[MarketId],
        date: Option<NaiveDate>,
        scheme: AuthScheme,
    ) -> Result<Value> {
        if markets.is_empty() {
            return Err(Error::InvalidInput("No markets provided".to_string()));
        }

        let query = Query {
            markets: Some(
                markets
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            date,
        };

        self.inner
            .get_with_query(self.inner.market_data_url("/markets"), &query, scheme)
            .await
    }

    /// Get hours for a single market on an optional date.
    pub async fn market(
        &self,
        market: MarketId,
        date: Option<NaiveDate>,
        scheme: AuthScheme,
    ) -> Result<Value> {
        let query = Query {
            markets: None,
            date,
        };

        self.inner
            .get_with_query(
                self.inner
                    .market_data_url(&format!("/markets/{}", market.as_str())),
                &query,
                scheme,
            )
            .await
    }
}
