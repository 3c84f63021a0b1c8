//! OAuth helpers for the Schwab API.
//!
//! Schwab uses a three-legged OAuth flow:
//!
//! 1. Send the user to the URL from [`authorize_url`] (or issue the
//!    request yourself with [`authorize`]); after consent the browser is
//!    redirected to your callback with a `code` parameter.
//! 2. Exchange the code for tokens with [`exchange_code`].
//! 3. When the short-lived access token expires (~30 minutes), obtain a
//!    new one with [`refresh_access_token`].
//!
//! These helpers are stateless: tokens are returned to the caller, who
//! is responsible for persisting them and deciding when to refresh.
//! Nothing in this crate stores credentials or schedules refreshes.
//!
//! ```no_run
//! use schwab_rs::auth;
//! use schwab_rs::client::ApiHosts;
//!
//! # async fn example() -> schwab_rs::Result<()> {
//! let hosts = ApiHosts::default();
//! let url = auth::authorize_url(&hosts.oauth_base_url, "app-key", "https://127.0.0.1")?;
//! println!("Visit: {url}");
//!
//! // ...user consents, callback receives ?code=...
//! let tokens = auth::exchange_code(
//!     &hosts.oauth_base_url,
//!     "app-key",
//!     "app-secret",
//!     "the-code",
//!     "https://127.0.0.1",
//! )
//! .await?;
//! println!("access token expires in {}s", tokens.expires_in);
//! # Ok(())
//! # }
//! ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use url::Url;

use crate::models::GrantType;
use crate::{Error, Result};

/// Which `Authorization` header scheme to send with a request.
///
/// Most endpoints expect `Bearer`. The upstream JavaScript client sent
/// `Basic` to the market-hours and instrument-lookup endpoints; those
/// services take the scheme explicitly so that behavior can be
/// reproduced or corrected deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
    /// `Authorization: Bearer <access token>`
    #[default]
    Bearer,
    /// `Authorization: Basic <base64(app_key:app_secret)>`
    Basic,
}

/// Compute the Basic-auth credential for an app key/secret pair.
///
/// Returns exactly the Base64 encoding of `"key:secret"`, without the
/// `Basic ` prefix.
///
/// # Example
///
/// ```
/// assert_eq!(schwab_rs::auth::basic_authorization("K", "S"), "SzpT");
/// ```
pub fn basic_authorization(app_key: &str, app_secret: &str) -> String {
    BASE64.encode(format!("{app_key}:{app_secret}"))
}

/// Build the user-consent URL for the authorization leg of the flow.
///
/// The caller opens this URL in a browser; Schwab redirects to
/// `redirect_uri` with a `code` query parameter on success.
pub fn authorize_url(oauth_base_url: &str, app_key: &str, redirect_uri: &str) -> Result<Url> {
    let mut url = Url::parse(&format!(
        "{}/oauth/authorize",
        oauth_base_url.trim_end_matches('/')
    ))?;
    url.query_pairs_mut()
        .append_pair("client_id", app_key)
        .append_pair("redirect_uri", redirect_uri);
    Ok(url)
}

/// Issue the authorization GET and return the raw response.
///
/// The server answers the consent request with a redirect; redirects
/// are not followed here, so the caller can inspect the status and
/// `Location` header directly. Interactive flows usually want
/// [`authorize_url`] and a browser instead.
pub async fn authorize(
    oauth_base_url: &str,
    app_key: &str,
    redirect_uri: &str,
) -> Result<reqwest::Response> {
    let url = authorize_url(oauth_base_url, app_key, redirect_uri)?;
    tracing::debug!(%url, "GET");

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(client.get(url).send().await?)
}

/// Tokens returned by the `/oauth/token` endpoint.
///
/// The caller owns these: persist the refresh token (valid for seven
/// days) and supply the access token to [`crate::SchwabClient`].
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Short-lived bearer token for API calls
    pub access_token: String,
    /// Long-lived token for obtaining new access tokens
    pub refresh_token: String,
    /// Token type, always `"Bearer"`
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    /// Granted scope
    #[serde(default)]
    pub scope: Option<String>,
    /// OpenID Connect identity token
    #[serde(default)]
    pub id_token: Option<String>,
}

/// Exchange an authorization code for an access/refresh token pair.
///
/// Sends `POST /oauth/token` with a `Basic base64(key:secret)` header
/// and a form-encoded body carrying the grant type, code, and redirect
/// URI. The redirect URI must match the one used in [`authorize_url`].
pub async fn exchange_code(
    oauth_base_url: &str,
    app_key: &str,
    app_secret: &str,
    code: &str,
    redirect_uri: &str,
) -> Result<TokenResponse> {
    let form = [
        ("grant_type", GrantType::AuthorizationCode.as_str()),
        ("code", code),
        ("redirect_uri", redirect_uri),
    ];
    request_token(oauth_base_url, app_key, app_secret, &form).await
}

/// Exchange a refresh token for a new access token.
///
/// The response carries a fresh access token and echoes the refresh
/// token; the caller decides when to call this — there is no automatic
/// refresh anywhere in the crate.
pub async fn refresh_access_token(
    oauth_base_url: &str,
    app_key: &str,
    app_secret: &str,
    refresh_token: &str,
) -> Result<TokenResponse> {
    let form = [
        ("grant_type", GrantType::RefreshToken.as_str()),
        ("refresh_token", refresh_token),
    ];
    request_token(oauth_base_url, app_key, app_secret, &form).await
}

async fn request_token(
    oauth_base_url: &str,
    app_key: &str,
    app_secret: &str,
    form: &[(&str, &str)],
) -> Result<TokenResponse> {
    let url = format!("{}/oauth/token", oauth_base_url.trim_end_matches('/'));
    tracing::debug!(%url, "requesting OAuth tokens");

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .header(
            AUTHORIZATION,
            format!("Basic {}", basic_authorization(app_key, app_secret)),
        )
        .form(form)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        return Err(Error::Authentication(format!(
            "token request failed ({status}): {body}"
        )));
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_authorization_known_value() {
        // base64("K:S")
        assert_eq!(basic_authorization("K", "S"), "SzpT");
    }

    #[test]
    fn test_basic_authorization_realistic_pair() {
        let encoded = basic_authorization("my-app-key", "my-app-secret");
        let decoded = BASE64.decode(encoded).unwrap();
        assert_eq!(decoded, b"my-app-key:my-app-secret");
    }

    #[test]
    fn test_authorize_url_query_parameters() {
        let url = authorize_url(
            "https://api.schwabapi.com/v1",
            "my-key",
            "https://127.0.0.1/callback",
        )
        .unwrap();

        assert_eq!(url.host_str(), Some("api.schwabapi.com"));
        assert_eq!(url.path(), "/v1/oauth/authorize");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("client_id".into(), "my-key".into())));
        assert!(pairs.contains(&("redirect_uri".into(), "https://127.0.0.1/callback".into())));
    }

    #[test]
    fn test_authorize_url_tolerates_trailing_slash() {
        let a = authorize_url("https://api.schwabapi.com/v1", "k", "r").unwrap();
        let b = authorize_url("https://api.schwabapi.com/v1/", "k", "r").unwrap();
        assert_eq!(a, b);
    }
}
