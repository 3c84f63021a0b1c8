//! Enumeration types for the Schwab API.
//!
//! Every enum here is a closed vocabulary with serialized names matching
//! the strings the API accepts. The API documents these as literal
//! strings, never ordinals, so serde renames are the source of truth.

use serde::{Deserialize, Serialize};

/// Option contract type filter for chain requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractType {
    /// Call contracts only
    Call,
    /// Put contracts only
    Put,
    /// Both calls and puts
    #[default]
    All,
}

/// Option chain strategy.
///
/// `Analytical` allows the volatility/underlying-price/interest-rate/
/// days-to-expiration overrides in [`crate::models::OptionChainQuery`]
/// to take effect; all other values return theoretical spread chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptionStrategy {
    /// Standard single-leg chain
    #[default]
    Single,
    /// Single-leg chain with theoretical values from overridden inputs
    Analytical,
    /// Covered call/put spreads
    Covered,
    /// Vertical spreads
    Vertical,
    /// Calendar spreads
    Calendar,
    /// Strangle spreads
    Strangle,
    /// Straddle spreads
    Straddle,
    /// Butterfly spreads
    Butterfly,
    /// Condor spreads
    Condor,
    /// Diagonal spreads
    Diagonal,
    /// Collar spreads
    Collar,
    /// Roll spreads
    Roll,
}

/// Strike range filter for option chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptionRange {
    /// In-the-money strikes
    Itm,
    /// Near-the-money strikes
    Ntm,
    /// Out-of-the-money strikes
    Otm,
    /// Strikes above market
    Sak,
    /// Strikes below market
    Sbk,
    /// Strikes near market
    Snk,
    /// All strikes
    #[default]
    All,
}

/// Standard/non-standard contract filter for option chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OptionTypeFilter {
    /// Standard contracts
    #[serde(rename = "S")]
    Standard,
    /// Non-standard contracts (adjusted for splits, mergers, etc.)
    #[serde(rename = "NS")]
    NonStandard,
    /// All contracts
    #[serde(rename = "ALL")]
    #[default]
    All,
}

/// The unit of the overall chart period for price history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    /// Chart spans days
    #[default]
    Day,
    /// Chart spans months
    Month,
    /// Chart spans years
    Year,
    /// Year to date
    Ytd,
}

/// The unit of a single candle for price history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyType {
    /// Minute candles (only valid with [`PeriodType::Day`])
    Minute,
    /// Daily candles
    #[default]
    Daily,
    /// Weekly candles
    Weekly,
    /// Monthly candles
    Monthly,
}

/// Search mode for instrument lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Projection {
    /// Exact symbol match
    #[default]
    SymbolSearch,
    /// Regex match on symbol
    SymbolRegex,
    /// Substring match on description
    DescSearch,
    /// Regex match on description
    DescRegex,
    /// Combined symbol and description search
    Search,
    /// Fundamental data for an exact symbol
    Fundamental,
}

/// Market identifier for market hours requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketId {
    /// Equity markets
    Equity,
    /// Option markets
    Option,
    /// Bond markets
    Bond,
    /// Futures markets
    Future,
    /// Forex markets
    Forex,
}

impl MarketId {
    /// The query-parameter spelling of this market.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketId::Equity => "equity",
            MarketId::Option => "option",
            MarketId::Bond => "bond",
            MarketId::Future => "future",
            MarketId::Forex => "forex",
        }
    }
}

/// Sort order for mover requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoverSort {
    /// Sort by traded volume
    Volume,
    /// Sort by number of trades
    Trades,
    /// Sort by percent change, gainers first
    PercentChangeUp,
    /// Sort by percent change, losers first
    PercentChangeDown,
}

/// Order status values returned and accepted by the Trader API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Waiting on a parent order
    AwaitingParentOrder,
    /// Waiting on an order condition
    AwaitingCondition,
    /// Waiting on a stop condition
    AwaitingStopCondition,
    /// Held for manual review
    AwaitingManualReview,
    /// Accepted by the system
    Accepted,
    /// Waiting on a one-cancels-other trigger
    AwaitingUrOut,
    /// Waiting for activation
    PendingActivation,
    /// Queued for the next session
    Queued,
    /// Live and working
    Working,
    /// Rejected
    Rejected,
    /// Cancel requested
    PendingCancel,
    /// Cancelled
    Canceled,
    /// Replace requested
    PendingReplace,
    /// Replaced by a newer order
    Replaced,
    /// Completely filled
    Filled,
    /// Expired
    Expired,
    /// Newly created
    New,
    /// Waiting on a release time
    AwaitingReleaseTime,
    /// Waiting on acknowledgement
    PendingAcknowledgement,
    /// Pending recall
    PendingRecall,
    /// Unknown status (forward-compatibility)
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Returns `true` if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Filled
                | OrderStatus::Canceled
                | OrderStatus::Expired
                | OrderStatus::Rejected
                | OrderStatus::Replaced
        )
    }
}

/// Transaction type filter for the transactions endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Trade execution
    #[default]
    Trade,
    /// Receive and deliver
    ReceiveAndDeliver,
    /// Dividend or interest payment
    DividendOrInterest,
    /// ACH deposit
    AchReceipt,
    /// ACH withdrawal
    AchDisbursement,
    /// Cash deposit
    CashReceipt,
    /// Cash withdrawal
    CashDisbursement,
    /// Electronic fund transfer
    ElectronicFund,
    /// Outgoing wire
    WireOut,
    /// Incoming wire
    WireIn,
    /// Journal entry
    Journal,
    /// Memorandum entry
    Memorandum,
    /// Margin call
    MarginCall,
    /// Money market movement
    MoneyMarket,
    /// SMA adjustment
    SmaAdjustment,
}

/// OAuth grant type for the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Exchange an authorization code for tokens
    AuthorizationCode,
    /// Exchange a refresh token for a new access token
    RefreshToken,
}

impl GrantType {
    /// The form-body spelling of this grant type.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::AuthorizationCode => "authorization_code",
            GrantType::RefreshToken => "refresh_token",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string(value).unwrap()
    }

    #[test]
    fn test_contract_type_vocabulary() {
        assert_eq!(to_json(&ContractType::Call), "\"CALL\"");
        assert_eq!(to_json(&ContractType::Put), "\"PUT\"");
        assert_eq!(to_json(&ContractType::All), "\"ALL\"");
    }

    #[test]
    fn test_option_strategy_vocabulary() {
        assert_eq!(to_json(&OptionStrategy::Single), "\"SINGLE\"");
        assert_eq!(to_json(&OptionStrategy::Analytical), "\"ANALYTICAL\"");
        assert_eq!(to_json(&OptionStrategy::Butterfly), "\"BUTTERFLY\"");
    }

    #[test]
    fn test_option_range_and_type_filter() {
        assert_eq!(to_json(&OptionRange::Snk), "\"SNK\"");
        assert_eq!(to_json(&OptionTypeFilter::Standard), "\"S\"");
        assert_eq!(to_json(&OptionTypeFilter::NonStandard), "\"NS\"");
    }

    #[test]
    fn test_price_history_vocabulary() {
        assert_eq!(to_json(&PeriodType::Ytd), "\"ytd\"");
        assert_eq!(to_json(&FrequencyType::Minute), "\"minute\"");
    }

    #[test]
    fn test_projection_vocabulary() {
        assert_eq!(to_json(&Projection::SymbolSearch), "\"symbol-search\"");
        assert_eq!(to_json(&Projection::DescRegex), "\"desc-regex\"");
        assert_eq!(to_json(&Projection::Fundamental), "\"fundamental\"");
    }

    #[test]
    fn test_order_status_roundtrip() {
        let status = OrderStatus::PendingActivation;
        let json = to_json(&status);
        assert_eq!(json, "\"PENDING_ACTIVATION\"");

        let parsed: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, status);
    }

    #[test]
    fn test_order_status_unknown_fallback() {
        let parsed: OrderStatus = serde_json::from_str("\"SOME_FUTURE_STATUS\"").unwrap();
        assert_eq!(parsed, OrderStatus::Unknown);
    }

    #[test]
    fn test_order_status_terminal() {
        assert!(OrderStatus::Filled.is_terminal());
        assert!(OrderStatus::Canceled.is_terminal());
        assert!(!OrderStatus::Working.is_terminal());
    }

    #[test]
    fn test_mover_sort_vocabulary() {
        assert_eq!(to_json(&MoverSort::PercentChangeUp), "\"PERCENT_CHANGE_UP\"");
    }

    #[test]
    fn test_grant_type() {
        assert_eq!(GrantType::AuthorizationCode.as_str(), "authorization_code");
        assert_eq!(to_json(&GrantType::RefreshToken), "\"refresh_token\"");
    }
}
