//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around string identifiers
//! to prevent mixing up different kinds of IDs at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An encrypted account identifier.
///
/// Schwab never exposes raw account numbers in URLs. Instead, the
/// `/accounts/accountNumbers` endpoint returns an opaque hash per
/// account, and all account-scoped endpoints take that hash.
///
/// # Example
///
/// ```
/// use schwab_rs::AccountHash;
///
/// let hash = AccountHash::new("ABC123XYZ");
/// assert_eq!(hash.as_str(), "ABC123XYZ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountHash(String);

impl AccountHash {
    /// Create a new account hash from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the account hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccountHash {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountHash {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A strongly-typed order ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create a new order ID.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the order ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A trading symbol (e.g., "AAPL", "SPY").
///
/// Query builders take `impl Into<Symbol>`, so plain string literals
/// work everywhere a symbol is expected.
///
/// # Example
///
/// ```
/// use schwab_rs::Symbol;
///
/// let symbol = Symbol::new("AAPL");
/// assert_eq!(symbol.as_str(), "AAPL");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_hash() {
        let hash = AccountHash::new("1CB32A840FAE");
        assert_eq!(hash.as_str(), "1CB32A840FAE");
        assert_eq!(hash.to_string(), "1CB32A840FAE");
    }

    #[test]
    fn test_symbol() {
        let symbol: Symbol = "AAPL".into();
        assert_eq!(symbol.as_str(), "AAPL");
    }

    #[test]
    fn test_order_id_transparent_serde() {
        let id = OrderId::new("456123789");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"456123789\"");
    }
}
