//! User preference service.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::AuthScheme;
use crate::client::ClientInner;
use crate::Result;

/// Service for user preference data.
///
/// The response includes per-account nicknames and colors plus the
/// streamer connection info the Trader API exposes for this user.
pub struct UserPreferenceService {
    inner: Arc<ClientInner>,
}

impl UserPreferenceService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get preference information for the authenticated user.
    pub async fn get(&self) -> Result<Value> {
        self.inner
            .get(self.inner.trader_url("/userPreference"), AuthScheme::Bearer)
            .await
    }
}
