//! Query parameters for option chain requests.

use chrono::NaiveDate;
use serde::Serialize;

use super::{ContractType, OptionRange, OptionStrategy, OptionTypeFilter, Symbol};

/// Query parameters for the `/chains` endpoint.
///
/// All fields except `symbol` are optional; unset fields are omitted
/// from the query string entirely, so the server applies its own
/// defaults. Building the same query twice from the same inputs
/// produces an identical request.
///
/// # Example
///
/// ```
/// use schwab_rs::models::{ContractType, OptionChainQuery, OptionStrategy};
///
/// let query = OptionChainQuery::with_defaults(
///     "AAPL",
///     ContractType::Call,
///     true,
///     10,
///     OptionStrategy::Single,
/// );
/// assert_eq!(query.strike_count, Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionChainQuery {
    /// Underlying symbol
    pub symbol: Symbol,
    /// Contract type filter (CALL, PUT, ALL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<ContractType>,
    /// Number of strikes above and below the at-the-money price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_count: Option<u32>,
    /// Whether to include a quote for the underlying in the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_underlying_quote: Option<bool>,
    /// Chain strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<OptionStrategy>,
    /// Strike interval for spread strategy chains
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    /// Exact strike price filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike: Option<f64>,
    /// Strike range filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<OptionRange>,
    /// Only contracts expiring on or after this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    /// Only contracts expiring on or before this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    /// Volatility override, used with [`OptionStrategy::Analytical`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility: Option<f64>,
    /// Underlying price override, used with [`OptionStrategy::Analytical`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlying_price: Option<f64>,
    /// Interest rate override, used with [`OptionStrategy::Analytical`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    /// Days-to-expiration override, used with [`OptionStrategy::Analytical`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_expiration: Option<u32>,
    /// Expiration month filter (e.g. "JAN", or "ALL")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_month: Option<String>,
    /// Standard/non-standard contract filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_type: Option<OptionTypeFilter>,
}

impl OptionChainQuery {
    /// Create a query for a symbol with every filter unset.
    pub fn new(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Create a query with the common near-the-money defaults.
    ///
    /// Beyond the caller-supplied filters this sets `range` to strikes
    /// near the market (`SNK`) and `option_type` to standard contracts
    /// (`S`); every other field is left unset.
    pub fn with_defaults(
        symbol: impl Into<Symbol>,
        contract_type: ContractType,
        include_underlying_quote: bool,
        strike_count: u32,
        strategy: OptionStrategy,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            contract_type: Some(contract_type),
            strike_count: Some(strike_count),
            include_underlying_quote: Some(include_underlying_quote),
            strategy: Some(strategy),
            range: Some(OptionRange::Snk),
            option_type: Some(OptionTypeFilter::Standard),
            ..Default::default()
        }
    }

    /// Restrict the chain to an expiration date window.
    pub fn with_expiration_window(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from_date = Some(from);
        self.to_date = Some(to);
        self
    }

    /// Restrict the chain to a single strike price.
    pub fn with_strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults_field_set() {
        let query = OptionChainQuery::with_defaults(
            "AAPL",
            ContractType::Call,
            true,
            10,
            OptionStrategy::Single,
        );

        let value = serde_json::to_value(&query).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["symbol"], "AAPL");
        assert_eq!(object["contractType"], "CALL");
        assert_eq!(object["strikeCount"], 10);
        assert_eq!(object["includeUnderlyingQuote"], true);
        assert_eq!(object["strategy"], "SINGLE");
        assert_eq!(object["range"], "SNK");
        assert_eq!(object["optionType"], "S");
        // Nothing else sneaks into the request.
        assert_eq!(object.len(), 7);
    }

    #[test]
    fn test_with_defaults_is_deterministic() {
        let build = || {
            OptionChainQuery::with_defaults(
                "SPY",
                ContractType::Put,
                false,
                20,
                OptionStrategy::Vertical,
            )
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_new_omits_all_filters() {
        let query = OptionChainQuery::new("TSLA");
        let value = serde_json::to_value(&query).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["symbol"], "TSLA");
    }

    #[test]
    fn test_symbol_newtype_accepted() {
        let from_newtype = OptionChainQuery::new(Symbol::new("TSLA"));
        let from_str = OptionChainQuery::new("TSLA");
        assert_eq!(from_newtype, from_str);
        assert_eq!(from_newtype.symbol.as_str(), "TSLA");
    }

    #[test]
    fn test_expiration_window() {
        let from = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let query = OptionChainQuery::new("QQQ").with_expiration_window(from, to);

        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["fromDate"], "2025-01-17");
        assert_eq!(value["toDate"], "2025-06-20");
    }
}
