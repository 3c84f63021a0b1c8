//! Transactions service for the Trader API.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::auth::AuthScheme;
use crate::client::ClientInner;
use crate::models::{AccountHash, Symbol, TransactionType};
use crate::Result;

/// Service for account transaction history.
///
/// The API requires an explicit date window on every list request, so
/// [`TransactionsQuery`] makes the bounds mandatory.
pub struct TransactionsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing transactions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsQuery {
    /// Window start (required by the API)
    pub start_date: DateTime<Utc>,
    /// Window end (required by the API; at most 1 year after start)
    pub end_date: DateTime<Utc>,
    /// Filter by transaction type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<TransactionType>,
    /// Filter by symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<Symbol>,
}

impl TransactionsQuery {
    /// Create a query covering the given window with no other filters.
    pub fn new(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            start_date,
            end_date,
            types: None,
            symbol: None,
        }
    }

    /// Filter by transaction type.
    pub fn with_types(mut self, types: TransactionType) -> Self {
        self.types = Some(types);
        self
    }

    /// Filter by symbol.
    pub fn with_symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

impl TransactionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List transactions for an account within a date window.
    pub async fn list(
        &self,
        account_hash: &AccountHash,
        query: &TransactionsQuery,
    ) -> Result<Value> {
        self.inner
            .get_with_query(
                self.inner
                    .trader_url(&format!("/accounts/{account_hash}/transactions")),
                query,
                AuthScheme::Bearer,
            )
            .await
    }

    /// Get a single transaction by ID.
    pub async fn get(&self, account_hash: &AccountHash, transaction_id: i64) -> Result<Value> {
        self.inner
            .get(
                self.inner.trader_url(&format!(
                    "/accounts/{account_hash}/transactions/{transaction_id}"
                )),
                AuthScheme::Bearer,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_query_serialization() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap();
        let query = TransactionsQuery::new(start, end)
            .with_types(TransactionType::Trade)
            .with_symbol("AAPL");

        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["types"], "TRADE");
        assert_eq!(value["symbol"], "AAPL");
        assert!(value["startDate"].as_str().unwrap().starts_with("2025-01-01"));
    }
}
