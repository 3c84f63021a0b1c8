//! Query parameters and response models for price history.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FrequencyType, PeriodType, Symbol};

/// Query parameters for the `/pricehistory` endpoint.
///
/// Start and end dates are epoch milliseconds, matching what the API
/// expects. [`PriceHistoryQuery::with_defaults`] stamps `end_date` with
/// the current time; that stamp is the only non-deterministic input any
/// request builder in this crate produces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistoryQuery {
    /// Symbol to chart
    pub symbol: Symbol,
    /// Unit of the overall chart period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_type: Option<PeriodType>,
    /// Number of period-type units to chart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    /// Unit of a single candle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_type: Option<FrequencyType>,
    /// Number of frequency-type units per candle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
    /// Chart start, epoch milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    /// Chart end, epoch milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<i64>,
    /// Include extended-hours candles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_extended_hours_data: Option<bool>,
    /// Include the previous session close in the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_previous_close: Option<bool>,
}

impl PriceHistoryQuery {
    /// Create a query for a symbol with every parameter unset.
    pub fn new(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Create a query for one year of daily candles ending now.
    ///
    /// `end_date` is stamped with the current epoch milliseconds, so two
    /// calls at different instants produce different requests. Use
    /// [`PriceHistoryQuery::with_date_range`] for reproducible requests.
    pub fn with_defaults(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            period_type: Some(PeriodType::Year),
            period: Some(1),
            frequency_type: Some(FrequencyType::Daily),
            frequency: Some(1),
            end_date: Some(Utc::now().timestamp_millis()),
            ..Default::default()
        }
    }

    /// Set an explicit start/end window in epoch milliseconds.
    pub fn with_date_range(mut self, start_millis: i64, end_millis: i64) -> Self {
        self.start_date = Some(start_millis);
        self.end_date = Some(end_millis);
        self
    }

    /// Set candle frequency.
    pub fn with_frequency(mut self, frequency_type: FrequencyType, frequency: u32) -> Self {
        self.frequency_type = Some(frequency_type);
        self.frequency = Some(frequency);
        self
    }

    /// Include extended-hours candles.
    pub fn with_extended_hours(mut self, extended: bool) -> Self {
        self.need_extended_hours_data = Some(extended);
        self
    }
}

/// A single OHLCV candle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    /// Open price
    pub open: Decimal,
    /// High price
    pub high: Decimal,
    /// Low price
    pub low: Decimal,
    /// Close price
    pub close: Decimal,
    /// Traded volume
    pub volume: i64,
    /// Candle timestamp, epoch milliseconds
    pub datetime: i64,
}

/// Price history response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleList {
    /// Symbol the candles belong to
    pub symbol: Symbol,
    /// Whether the response contains no candles
    #[serde(default)]
    pub empty: bool,
    /// The candles, oldest first
    #[serde(default)]
    pub candles: Vec<Candle>,
    /// Previous session close, when requested
    #[serde(default)]
    pub previous_close: Option<Decimal>,
    /// Previous session close date, epoch milliseconds
    #[serde(default)]
    pub previous_close_date: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults_stamps_end_date() {
        let before = Utc::now().timestamp_millis();
        let query = PriceHistoryQuery::with_defaults("AAPL");
        let after = Utc::now().timestamp_millis();

        let end = query.end_date.expect("end_date should be stamped");
        assert!(end >= before && end <= after);
        assert_eq!(query.period_type, Some(PeriodType::Year));
        assert_eq!(query.frequency_type, Some(FrequencyType::Daily));
        assert!(query.start_date.is_none());
    }

    #[test]
    fn test_explicit_range_is_deterministic() {
        let build = || {
            PriceHistoryQuery::new("SPY")
                .with_date_range(1_700_000_000_000, 1_700_086_400_000)
                .with_frequency(FrequencyType::Minute, 5)
        };
        assert_eq!(build(), build());

        let value = serde_json::to_value(build()).unwrap();
        assert_eq!(value["startDate"], 1_700_000_000_000i64);
        assert_eq!(value["endDate"], 1_700_086_400_000i64);
        assert_eq!(value["frequencyType"], "minute");
        assert_eq!(value["frequency"], 5);
    }

    #[test]
    fn test_candle_list_parses() {
        let json = r#"{
            "symbol": "AAPL",
            "empty": false,
            "candles": [
                {"open": 189.5, "high": 191.2, "low": 188.9, "close": 190.4,
                 "volume": 51230000, "datetime": 1700000000000}
            ],
            "previousClose": 188.01,
            "previousCloseDate": 1699913600000
        }"#;

        let list: CandleList = serde_json::from_str(json).unwrap();
        assert_eq!(list.symbol, Symbol::new("AAPL"));
        assert_eq!(list.candles.len(), 1);
        assert_eq!(list.candles[0].volume, 51_230_000);
        assert!(list.previous_close.is_some());
    }
}
