//! Data models for the Schwab API.
//!
//! This module contains the strongly-typed structures used to build
//! requests and parse the documented response shapes:
//!
//! - [`primitives`] - Core newtypes like `AccountHash` and `Symbol`
//! - [`enums`] - Closed vocabularies (contract types, strategies, etc.)
//! - [`account`] - Account number mappings
//! - [`options`] - Option chain query parameters
//! - [`price_history`] - Price history queries and candle responses
//!
//! Endpoints with large, loosely documented response shapes (quotes,
//! chains, market hours, instruments) return `serde_json::Value`.

pub mod account;
pub mod enums;
pub mod options;
pub mod price_history;
pub mod primitives;

// Re-export commonly used types
pub use account::*;
pub use enums::*;
pub use options::*;
pub use price_history::*;
pub use primitives::*;
