//! Account models for the Trader API.

use serde::{Deserialize, Serialize};

use super::AccountHash;

/// A mapping from a plain account number to its encrypted hash.
///
/// Returned by `/accounts/accountNumbers`. The hash is what every
/// account-scoped endpoint expects in its URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountNumberMapping {
    /// The plain account number
    pub account_number: String,
    /// The encrypted identifier to use in URLs
    pub hash_value: AccountHash,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_field_names() {
        let json = r#"{"accountNumber":"123456789","hashValue":"1CB32A840FAE"}"#;
        let mapping: AccountNumberMapping = serde_json::from_str(json).unwrap();
        assert_eq!(mapping.account_number, "123456789");
        assert_eq!(mapping.hash_value.as_str(), "1CB32A840FAE");
    }
}
