//! Instrument lookup service.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::auth::AuthScheme;
use crate::client::ClientInner;
use crate::models::Projection;
use crate::Result;

/// Service for instrument search and reference data.
///
/// Like market hours, the upstream JavaScript client sent `Basic` auth
/// here, so the scheme is an explicit argument. Pass
/// [`AuthScheme::Bearer`] unless you are reproducing the old behavior.
///
/// # Example
///
/// ```no_run
/// use schwab_rs::auth::AuthScheme;
/// use schwab_rs::models::Projection;
///
/// # async fn example(client: schwab_rs::SchwabClient) -> schwab_rs::Result<()> {
/// let found = client
///     .instruments()
///     .lookup("AAPL", Projection::Fundamental, AuthScheme::Bearer)
///     .await?;
/// println!("{found:#}");
/// # Ok(())
/// # }
/// ```
pub struct InstrumentsService {
    inner: Arc<ClientInner>,
}

impl InstrumentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Search instruments by symbol with the given projection.
    pub async fn lookup(
        &self,
        symbol: &str,
        projection: Projection,
        scheme: AuthScheme,
    ) -> Result<Value> {
        #[derive(Serialize)]
        struct Query<'a> {
            symbol: &'a str,
            projection: Projection,
        }

        let query = Query { symbol, projection };

        self.inner
            .get_with_query(self.inner.market_data_url("/instruments"), &query, scheme)
            .await
    }

    /// Get a single instrument by CUSIP.
    pub async fn by_cusip(&self, cusip: &str, scheme: AuthScheme) -> Result<Value> {
        self.inner
            .get(
                self.inner.market_data_url(&format!("/instruments/{cusip}")),
                scheme,
            )
            .await
    }
}
