//! Orders service for order placement and management.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::auth::AuthScheme;
use crate::client::ClientInner;
use crate::models::{AccountHash, OrderId, OrderStatus};
use crate::Result;

/// Service for order operations.
///
/// Order payloads are arbitrary JSON: the Trader API order schema is
/// large and changes without notice, so this service forwards whatever
/// body the caller builds and returns the response untouched.
///
/// # Example
///
/// ```no_run
/// use schwab_rs::AccountHash;
/// use serde_json::json;
///
/// # async fn example(client: schwab_rs::SchwabClient) -> schwab_rs::Result<()> {
/// let account = AccountHash::new("1CB32A840FAE");
///
/// let order = json!({
///     "orderType": "LIMIT",
///     "session": "NORMAL",
///     "duration": "DAY",
///     "orderStrategyType": "SINGLE",
///     "price": "150.00",
///     "orderLegCollection": [{
///         "instruction": "BUY",
///         "quantity": 1,
///         "instrument": {"symbol": "AAPL", "assetType": "EQUITY"}
///     }]
/// });
///
/// if let Some(order_id) = client.orders().place(&account, &order).await? {
///     println!("placed order {order_id}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing orders.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersQuery {
    /// Maximum number of orders to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    /// Only orders entered after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_entered_time: Option<DateTime<Utc>>,
    /// Only orders entered before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_entered_time: Option<DateTime<Utc>>,
    /// Filter by status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List orders for an account with optional filters.
    pub async fn list(
        &self,
        account_hash: &AccountHash,
        query: Option<OrdersQuery>,
    ) -> Result<Value> {
        let url = self
            .inner
            .trader_url(&format!("/accounts/{account_hash}/orders"));
        match query {
            Some(q) => self.inner.get_with_query(url, &q, AuthScheme::Bearer).await,
            None => self.inner.get(url, AuthScheme::Bearer).await,
        }
    }

    /// List orders across every account linked to the user.
    pub async fn list_all_accounts(&self, query: Option<OrdersQuery>) -> Result<Value> {
        let url = self.inner.trader_url("/orders");
        match query {
            Some(q) => self.inner.get_with_query(url, &q, AuthScheme::Bearer).await,
            None => self.inner.get(url, AuthScheme::Bearer).await,
        }
    }

    /// Get a specific order by ID.
    pub async fn get(&self, account_hash: &AccountHash, order_id: &OrderId) -> Result<Value> {
        self.inner
            .get(
                self.inner
                    .trader_url(&format!("/accounts/{account_hash}/orders/{order_id}")),
                AuthScheme::Bearer,
            )
            .await
    }

    /// Place an order.
    ///
    /// On success the API returns no body; the new order's ID is
    /// recovered from the `Location` header when present. The payload is
    /// forwarded exactly as given — no validation, no dry run.
    pub async fn place(&self, account_hash: &AccountHash, order: &Value) -> Result<Option<OrderId>> {
        let location = self
            .inner
            .post_created(
                self.inner
                    .trader_url(&format!("/accounts/{account_hash}/orders")),
                order,
            )
            .await?;

        Ok(location.as_deref().and_then(order_id_from_location))
    }

    /// Cancel an order.
    ///
    /// The order must be in a cancellable state; otherwise the API
    /// rejects the request and the error is surfaced unchanged.
    pub async fn cancel(&self, account_hash: &AccountHash, order_id: &OrderId) -> Result<()> {
        self.inner
            .delete_no_content(
                self.inner
                    .trader_url(&format!("/accounts/{account_hash}/orders/{order_id}")),
            )
            .await
    }
}

/// Extract the order ID from a `Location` header value.
fn order_id_from_location(location: &str) -> Option<OrderId> {
    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(OrderId::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_from_location() {
        let id = order_id_from_location(
            "https://api.schwabapi.com/trader/v1/accounts/HASH/orders/456123789",
        );
        assert_eq!(id, Some(OrderId::new("456123789")));
    }

    #[test]
    fn test_order_id_from_location_trailing_slash() {
        let id = order_id_from_location("/accounts/HASH/orders/42/");
        assert_eq!(id, Some(OrderId::new("42")));
    }

    #[test]
    fn test_orders_query_serialization() {
        let query = OrdersQuery {
            max_results: Some(50),
            status: Some(OrderStatus::Working),
            ..Default::default()
        };

        let value = serde_json::to_value(&query).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["maxResults"], 50);
        assert_eq!(object["status"], "WORKING");
        assert_eq!(object.len(), 2);
    }
}
