//! HTTP client implementation for the Schwab API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::api::{
    AccountsService, InstrumentsService, MarketDataService, MarketHoursService,
    OptionChainsService, OrdersService, PriceHistoryService, TransactionsService,
    UserPreferenceService,
};
use crate::auth::{basic_authorization, AuthScheme};
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for the Schwab Trader and Market Data APIs.
///
/// The client holds a caller-supplied access token and immutable
/// configuration; it never refreshes, stores, or rotates credentials.
/// Obtain tokens with the [`crate::auth`] helpers and construct a new
/// client (or keep supplying fresh tokens from your own storage) when
/// they expire.
///
/// Cloning is cheap; clones share the same connection pool and may be
/// used concurrently from multiple tasks.
///
/// # Example
///
/// ```no_run
/// use schwab_rs::SchwabClient;
///
/// # async fn example() -> schwab_rs::Result<()> {
/// let client = SchwabClient::new("access-token")?;
///
/// let numbers = client.accounts().numbers().await?;
/// for mapping in &numbers {
///     println!("{} -> {}", mapping.account_number, mapping.hash_value);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SchwabClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) access_token: SecretString,
    pub(crate) app_credentials: Option<AppCredentials>,
    pub(crate) config: ClientConfig,
}

/// App key/secret pair, needed only for requests sent with
/// [`AuthScheme::Basic`].
pub(crate) struct AppCredentials {
    pub(crate) key: String,
    pub(crate) secret: SecretString,
}

impl SchwabClient {
    /// Create a client with an access token and default configuration.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(access_token, ClientConfig::default())
    }

    /// Create a client with an access token and custom configuration.
    pub fn with_config(access_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Self::build(access_token, None, config)
    }

    /// Create a client that can also send Basic-authenticated requests.
    ///
    /// Only needed if you call the market-hours or instrument-lookup
    /// services with [`AuthScheme::Basic`].
    pub fn with_app_credentials(
        access_token: impl Into<String>,
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let credentials = AppCredentials {
            key: app_key.into(),
            secret: SecretString::from(app_secret.into()),
        };
        Self::build(access_token, Some(credentials), config)
    }

    fn build(
        access_token: impl Into<String>,
        app_credentials: Option<AppCredentials>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                access_token: SecretString::from(access_token.into()),
                app_credentials,
                config,
            }),
        })
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the quotes and movers service.
    pub fn market_data(&self) -> MarketDataService {
        MarketDataService::new(self.inner.clone())
    }

    /// Get the price history service.
    pub fn price_history(&self) -> PriceHistoryService {
        PriceHistoryService::new(self.inner.clone())
    }

    /// Get the option chains service.
    pub fn option_chains(&self) -> OptionChainsService {
        OptionChainsService::new(self.inner.clone())
    }

    /// Get the market hours service.
    pub fn market_hours(&self) -> MarketHoursService {
        MarketHoursService::new(self.inner.clone())
    }

    /// Get the instrument lookup service.
    pub fn instruments(&self) -> InstrumentsService {
        InstrumentsService::new(self.inner.clone())
    }

    /// Get the transactions service.
    pub fn transactions(&self) -> TransactionsService {
        TransactionsService::new(self.inner.clone())
    }

    /// Get the user preference service.
    pub fn user_preference(&self) -> UserPreferenceService {
        UserPreferenceService::new(self.inner.clone())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Build a Trader API URL.
    pub(crate) fn trader_url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.hosts.trader_base_url.trim_end_matches('/'),
            path
        )
    }

    /// Build a Market Data API URL.
    pub(crate) fn market_data_url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.hosts.market_data_base_url.trim_end_matches('/'),
            path
        )
    }

    /// Build request headers for the given auth scheme.
    pub(crate) fn build_headers(&self, scheme: AuthScheme) -> Result<HeaderMap> {
        let value = match scheme {
            AuthScheme::Bearer => {
                format!("Bearer {}", self.access_token.expose_secret())
            }
            AuthScheme::Basic => {
                let credentials = self.app_credentials.as_ref().ok_or_else(|| {
                    Error::Config(
                        "Basic auth requires app credentials; \
                         construct the client with with_app_credentials"
                            .to_string(),
                    )
                })?;
                format!(
                    "Basic {}",
                    basic_authorization(&credentials.key, credentials.secret.expose_secret())
                )
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&value)
                .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: String,
        scheme: AuthScheme,
    ) -> Result<T> {
        let headers = self.build_headers(scheme)?;
        tracing::debug!(%url, "GET");

        let response = self.http.get(&url).headers(headers).send().await?;
        self.handle_response(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        url: String,
        query: &Q,
        scheme: AuthScheme,
    ) -> Result<T> {
        let headers = self.build_headers(scheme)?;
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .headers(headers)
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body, returning the `Location`
    /// header of the created resource (if any).
    ///
    /// The Trader API answers order placement with `201 Created`, an
    /// empty body, and a `Location` header pointing at the new order.
    pub(crate) async fn post_created<B: Serialize>(
        &self,
        url: String,
        body: &B,
    ) -> Result<Option<String>> {
        let headers = self.build_headers(AuthScheme::Bearer)?;
        tracing::debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await?;

        if response.status().is_success() {
            let location = response
                .headers()
                .get(reqwest::header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            Ok(location)
        } else {
            Err(self.classify_failure(response).await)
        }
    }

    /// Make a DELETE request expecting an empty success body.
    pub(crate) async fn delete_no_content(&self, url: String) -> Result<()> {
        let headers = self.build_headers(AuthScheme::Bearer)?;
        tracing::debug!(%url, "DELETE");

        let response = self.http.delete(&url).headers(headers).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.classify_failure(response).await)
        }
    }

    /// Handle an API response with a JSON body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(self.classify_failure(response).await)
        }
    }

    /// Classify a non-2xx response. No retry, no recovery; one error out.
    async fn classify_failure(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        let body: serde_json::Value = response.json().await.unwrap_or_default();

        match status {
            401 => Error::Unauthorized {
                message: crate::error::message_from_body(&body)
                    .unwrap_or_else(|| "access token rejected".to_string()),
            },
            404 => Error::NotFound(
                crate::error::message_from_body(&body)
                    .unwrap_or_else(|| "Resource not found".to_string()),
            ),
            429 => Error::RateLimited {
                retry_after_secs: retry_after.unwrap_or(60),
            },
            _ => Error::from_api_response(status, body),
        }
    }
}

impl Clone for SchwabClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for SchwabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchwabClient")
            .field("config", &self.inner.config)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiHosts;

    fn test_client() -> SchwabClient {
        SchwabClient::with_app_credentials(
            "token-123",
            "K",
            "S",
            ClientConfig::default().with_hosts(ApiHosts::single_host("http://127.0.0.1:1")),
        )
        .unwrap()
    }

    #[test]
    fn test_bearer_header_value() {
        let client = test_client();
        let headers = client.inner.build_headers(AuthScheme::Bearer).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer token-123");
    }

    #[test]
    fn test_basic_header_value() {
        let client = test_client();
        let headers = client.inner.build_headers(AuthScheme::Basic).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Basic SzpT");
    }

    #[test]
    fn test_basic_without_app_credentials_is_config_error() {
        let client = SchwabClient::new("token-123").unwrap();
        let err = client.inner.build_headers(AuthScheme::Basic).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_url_joining_ignores_trailing_slash() {
        let client = SchwabClient::with_config(
            "t",
            ClientConfig::default().with_hosts(ApiHosts::single_host("http://host/base/")),
        )
        .unwrap();
        assert_eq!(
            client.inner.trader_url("/accounts/accountNumbers"),
            "http://host/base/accounts/accountNumbers"
        );
        assert_eq!(
            client.inner.market_data_url("/chains"),
            "http://host/base/chains"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", test_client());
        assert!(!debug.contains("token-123"));
        assert!(debug.contains("REDACTED"));
    }
}
