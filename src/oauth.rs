//! OAuth authentication module for Twitter/X API integration.
//!
//! This module contains the header builders for OAuth 2.0 authentication and the
//! [`TokenProvider`], which exchanges the application's key and secret for an
//! app-only Bearer Token using the client-credentials grant.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{debug, error, info};
use reqwest::Client;
use serde::Deserialize;

use crate::config::Credentials;
use crate::error::{Result, SearchError};
use crate::twitter::sanitize_for_logging;

/// Builds the Authorization header for OAuth 2.0 Bearer Token authentication.
///
/// # Format
///
/// ```text
/// Bearer YOUR_BEARER_TOKEN_HERE
/// ```
///
/// # Example
///
/// ```rust
/// use tweetsearch::build_bearer_auth_header;
///
/// let header = build_bearer_auth_header("your_bearer_token");
/// assert_eq!(header, "Bearer your_bearer_token");
/// ```
pub fn build_bearer_auth_header(bearer_token: &str) -> String {
    format!("Bearer {}", bearer_token)
}

/// Builds the Basic Authorization header used by the client-credentials exchange.
///
/// The key and secret are joined with `:` and base64 encoded.
///
/// # Example
///
/// ```rust
/// use tweetsearch::build_basic_auth_header;
///
/// let header = build_basic_auth_header("key", "secret");
/// assert_eq!(header, "Basic a2V5OnNlY3JldA==");
/// ```
pub fn build_basic_auth_header(api_key: &str, api_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{}:{}", api_key, api_secret));
    format!("Basic {}", encoded)
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Exchanges static credentials for a Bearer Token and caches it.
///
/// The token is fetched lazily on the first call to [`TokenProvider::get_token`]
/// and reused for the lifetime of the provider. There is no expiry tracking:
/// if the provider later rejects the token, that surfaces as an error from the
/// request that used it.
pub struct TokenProvider {
    credentials: Credentials,
    token_url: String,
    bearer_token: Option<String>,
}

impl TokenProvider {
    /// Creates a provider that will exchange `credentials` at `token_url`.
    pub fn new(credentials: Credentials, token_url: impl Into<String>) -> Self {
        TokenProvider {
            credentials,
            token_url: token_url.into(),
            bearer_token: None,
        }
    }

    /// Returns the cached Bearer Token, performing the exchange on first use.
    ///
    /// # Returns
    ///
    /// - `Ok(&str)`: The Bearer Token
    /// - `Err(SearchError::Auth)`: If the credentials are blank, the endpoint answers
    ///   with a non-success status, or the reply has no `access_token`
    /// - `Err(SearchError::Transport)`: If the endpoint could not be reached
    pub async fn get_token(&mut self, client: &Client) -> Result<&str> {
        if self.bearer_token.is_none() {
            let token = self.fetch_token(client).await?;
            self.bearer_token = Some(token);
        }

        self.bearer_token
            .as_deref()
            .ok_or_else(|| SearchError::Auth("Bearer token unavailable".to_string()))
    }

    async fn fetch_token(&self, client: &Client) -> Result<String> {
        if self.credentials.is_blank() {
            error!("Cannot request bearer token: API key or secret is empty");
            return Err(SearchError::Auth(
                "API key and secret must both be non-empty".to_string(),
            ));
        }

        info!("Requesting bearer token from {}", self.token_url);
        debug!("Request headers: Authorization: Basic [REDACTED]");

        let auth_header =
            build_basic_auth_header(self.credentials.api_key(), self.credentials.api_secret());

        let response = client
            .post(&self.token_url)
            .header("Authorization", auth_header)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            error!("Bearer token request failed - Status: {}", status);
            debug!(
                "Error response for bearer token request: {}",
                sanitize_for_logging(&response_text, 200)
            );
            return Err(SearchError::Auth(format!(
                "token endpoint returned {}: {}",
                status.as_u16(),
                sanitize_for_logging(&response_text, 200)
            )));
        }

        let token_response: TokenResponse = serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse bearer token response: {}", e);
            SearchError::Auth(format!("malformed token response: {}", e))
        })?;

        match token_response.access_token {
            Some(token) if !token.is_empty() => {
                info!("Bearer token obtained successfully");
                Ok(token)
            }
            _ => {
                error!("Bearer token response did not contain an access_token");
                Err(SearchError::Auth(
                    "No access_token in token response".to_string(),
                ))
            }
        }
    }
}

impl fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenProvider")
            .field("credentials", &self.credentials)
            .field("token_url", &self.token_url)
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
