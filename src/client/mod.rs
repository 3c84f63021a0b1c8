//! HTTP client and service layer for the Schwab API.
//!
//! This module provides the main entry point [`SchwabClient`] along
//! with its configuration. Base URLs live in [`ApiHosts`] and are
//! injected at construction so tests can target a mock server.
//!
//! # Example
//!
//! ```no_run
//! use schwab_rs::SchwabClient;
//!
//! # async fn example() -> schwab_rs::Result<()> {
//! let client = SchwabClient::new("access-token")?;
//! let numbers = client.accounts().numbers().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ApiHosts, ClientConfig};
pub use http::SchwabClient;
pub(crate) use http::ClientInner;
