//! API service modules for Schwab endpoints.
//!
//! Each service provides methods for one theme of the Trader or
//! Market Data API and is obtained from a [`crate::SchwabClient`].

mod accounts;
mod instruments;
mod market_data;
mod market_hours;
mod options;
mod orders;
mod price_history;
mod transactions;
mod user_preference;

pub use accounts::AccountsService;
pub use instruments::InstrumentsService;
pub use market_data::{MarketDataService, MAX_SYMBOLS_PER_REQUEST};
pub use market_hours::MarketHoursService;
pub use options::OptionChainsService;
pub use orders::{OrdersQuery, OrdersService};
pub use price_history::PriceHistoryService;
pub use transactions::{TransactionsQuery, TransactionsService};
pub use user_preference::UserPreferenceService;
