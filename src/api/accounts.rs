//! Accounts service for the Trader API.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::AuthScheme;
use crate::client::ClientInner;
use crate::models::{AccountHash, AccountNumberMapping};
use crate::Result;

/// Service for account-related operations.
///
/// Account-scoped endpoints take an [`AccountHash`], the encrypted
/// identifier from [`AccountsService::numbers`], never a raw account
/// number.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: schwab_rs::SchwabClient) -> schwab_rs::Result<()> {
/// let numbers = client.accounts().numbers().await?;
/// if let Some(mapping) = numbers.first() {
///     let account = client.accounts().get(&mapping.hash_value, true).await?;
///     println!("{account:#}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the account number to account hash mappings for the user.
    pub async fn numbers(&self) -> Result<Vec<AccountNumberMapping>> {
        self.inner
            .get(
                self.inner.trader_url("/accounts/accountNumbers"),
                AuthScheme::Bearer,
            )
            .await
    }

    /// List all accounts, optionally with positions included.
    pub async fn list(&self, include_positions: bool) -> Result<Value> {
        let url = self.inner.trader_url("/accounts");
        if include_positions {
            self.inner
                .get_with_query(url, &[("fields", "positions")], AuthScheme::Bearer)
                .await
        } else {
            self.inner.get(url, AuthScheme::Bearer).await
        }
    }

    /// Get a single account, optionally with positions included.
    pub async fn get(&self, account_hash: &AccountHash, include_positions: bool) -> Result<Value> {
        let url = self.inner.trader_url(&format!("/accounts/{account_hash}"));
        if include_positions {
            self.inner
                .get_with_query(url, &[("fields", "positions")], AuthScheme::Bearer)
                .await
        } else {
            self.inner.get(url, AuthScheme::Bearer).await
        }
    }

    /// Get an account with its positions.
    ///
    /// Convenience wrapper over [`AccountsService::get`].
    pub async fn positions(&self, account_hash: &AccountHash) -> Result<Value> {
        self.get(account_hash, true).await
    }
}
