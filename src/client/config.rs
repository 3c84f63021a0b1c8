//! Client configuration options.

use std::time::Duration;

/// Base URLs for the three Schwab API surfaces.
///
/// Resolved once at client construction and injected everywhere,
/// so tests can point the whole client at a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiHosts {
    /// Base URL for OAuth endpoints
    pub oauth_base_url: String,
    /// Base URL for the Trader API (accounts, orders, transactions)
    pub trader_base_url: String,
    /// Base URL for the Market Data API (quotes, chains, history)
    pub market_data_base_url: String,
}

impl Default for ApiHosts {
    fn default() -> Self {
        Self {
            oauth_base_url: "https://api.schwabapi.com/v1".to_string(),
            trader_base_url: "https://api.schwabapi.com/trader/v1".to_string(),
            market_data_base_url: "https://api.schwabapi.com/marketdata/v1".to_string(),
        }
    }
}

impl ApiHosts {
    /// Point every API surface at a single base URL.
    ///
    /// Intended for tests against a mock server.
    pub fn single_host(base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        Self {
            oauth_base_url: base.clone(),
            trader_base_url: base.clone(),
            market_data_base_url: base,
        }
    }
}

/// Configuration for the Schwab client.
///
/// # Example
///
/// ```
/// use schwab_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URLs
    pub hosts: ApiHosts,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hosts: ApiHosts::default(),
            timeout: Duration::from_secs(30),
            user_agent: format!("schwab-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API base URLs.
    pub fn with_hosts(mut self, hosts: ApiHosts) -> Self {
        self.hosts = hosts;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hosts() {
        let hosts = ApiHosts::default();
        assert_eq!(hosts.oauth_base_url, "https://api.schwabapi.com/v1");
        assert_eq!(hosts.trader_base_url, "https://api.schwabapi.com/trader/v1");
        assert_eq!(
            hosts.market_data_base_url,
            "https://api.schwabapi.com/marketdata/v1"
        );
    }

    #[test]
    fn test_single_host() {
        let hosts = ApiHosts::single_host("http://127.0.0.1:8080");
        assert_eq!(hosts.oauth_base_url, hosts.trader_base_url);
        assert_eq!(hosts.trader_base_url, hosts.market_data_base_url);
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("schwab-rs/"));
    }
}
