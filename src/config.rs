//! Configuration module for the search client.
//!
//! This module contains configuration structures and environment variable handling
//! for the Twitter/X API integration.

use log::{debug, error, info, warn};
use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{Result, SearchError};

/// Default origin for both the token and the search endpoints.
pub const DEFAULT_API_BASE_URL: &str = "https://api.twitter.com";

/// Default wait applied when the provider answers 429 without a usable reset header.
pub const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// Default minimum spacing between outgoing requests.
pub const DEFAULT_MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(1000);

/// Masks a secret for logging, keeping at most the first four characters.
pub(crate) fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    if secret.chars().count() > 8 {
        format!("{}...", prefix)
    } else {
        "...".to_string()
    }
}

/// API key and secret used for the client-credentials exchange.
///
/// The pair is immutable once built. `Debug` never prints the secret values.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Creates a credential pair from explicit values.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Credentials {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Loads the credential pair from `X_API_KEY` and `X_API_SECRET`.
    ///
    /// # Returns
    ///
    /// - `Ok(Credentials)`: If both variables are present and non-empty
    /// - `Err(SearchError::Auth)`: If either variable is missing or empty
    pub fn from_env() -> Result<Self> {
        info!("Loading Twitter API credentials from environment variables");

        let api_key = Self::load_required("X_API_KEY")?;
        let api_secret = Self::load_required("X_API_SECRET")?;

        info!("Twitter API credentials loaded successfully");
        Ok(Credentials {
            api_key,
            api_secret,
        })
    }

    fn load_required(name: &str) -> Result<String> {
        match env::var(name) {
            Ok(value) => {
                let value = value.trim().to_string();
                if value.is_empty() {
                    error!("{} is set but empty", name);
                    return Err(SearchError::Auth(format!("{} cannot be empty", name)));
                }
                info!("Found {} environment variable with length: {}", name, value.len());
                debug!("{} (masked): {}", name, mask_secret(&value));
                Ok(value)
            }
            Err(e) => {
                error!("Failed to load {} from environment: {}", name, e);
                Err(SearchError::Auth(format!(
                    "X_API_KEY and X_API_SECRET must be set (missing {})",
                    name
                )))
            }
        }
    }

    /// The API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The API secret.
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Returns true when either half of the pair is blank.
    pub fn is_blank(&self) -> bool {
        self.api_key.trim().is_empty() || self.api_secret.trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Configuration for a [`SearchClient`](crate::SearchClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Credentials exchanged for a bearer token
    pub credentials: Credentials,
    /// Origin for the token and search endpoints, without trailing slash
    pub api_base_url: String,
    /// Fallback wait used when a 429 carries no usable reset time
    pub rate_limit_wait: Duration,
    /// Minimum spacing between outgoing requests
    pub min_request_interval: Duration,
    /// Optional per-request timeout; `None` leaves the transport default
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration with default endpoint and timings.
    pub fn new(credentials: Credentials) -> Self {
        ClientConfig {
            credentials,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            rate_limit_wait: DEFAULT_RATE_LIMIT_WAIT,
            min_request_interval: DEFAULT_MIN_REQUEST_INTERVAL,
            request_timeout: None,
        }
    }

    /// Points both endpoints at a different origin.
    pub fn with_api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the fallback wait applied on rate-limit responses.
    pub fn with_rate_limit_wait(mut self, wait: Duration) -> Self {
        self.rate_limit_wait = wait;
        self
    }

    /// Sets the minimum spacing between outgoing requests.
    pub fn with_min_request_interval(mut self, interval: Duration) -> Self {
        self.min_request_interval = interval;
        self
    }

    /// Sets a per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Creates a new `ClientConfig` by loading credentials and tunables from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `X_API_KEY`: Twitter API key
    /// - `X_API_SECRET`: Twitter API secret
    ///
    /// # Optional Environment Variables
    ///
    /// - `X_API_BASE_URL`: API origin (defaults to `https://api.twitter.com`)
    /// - `X_RATE_LIMIT_WAIT_SECS`: fallback wait on 429 responses (defaults to 60)
    /// - `X_MIN_REQUEST_INTERVAL_MS`: minimum spacing between requests (defaults to 1000)
    /// - `X_REQUEST_TIMEOUT_SECS`: per-request timeout (unset by default)
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tweetsearch::ClientConfig;
    ///
    /// std::env::set_var("X_API_KEY", "your_api_key");
    /// std::env::set_var("X_API_SECRET", "your_api_secret");
    ///
    /// let config = ClientConfig::from_env().unwrap();
    /// assert_eq!(config.api_base_url, "https://api.twitter.com");
    /// ```
    pub fn from_env() -> Result<Self> {
        info!("Loading search client configuration from environment variables");

        let credentials = Credentials::from_env()?;
        let mut config = ClientConfig::new(credentials);

        if let Ok(base_url) = env::var("X_API_BASE_URL") {
            let parsed = url::Url::parse(base_url.trim()).map_err(|e| {
                error!("Invalid X_API_BASE_URL '{}': {}", base_url, e);
                SearchError::Config(format!("invalid X_API_BASE_URL '{}': {}", base_url, e))
            })?;
            info!("Using API base URL: {}", parsed);
            config = config.with_api_base_url(parsed.as_str());
        }

        if let Some(secs) = parse_optional_u64("X_RATE_LIMIT_WAIT_SECS")? {
            config = config.with_rate_limit_wait(Duration::from_secs(secs));
        }

        if let Some(millis) = parse_optional_u64("X_MIN_REQUEST_INTERVAL_MS")? {
            config = config.with_min_request_interval(Duration::from_millis(millis));
        }

        if let Some(secs) = parse_optional_u64("X_REQUEST_TIMEOUT_SECS")? {
            if secs == 0 {
                warn!("X_REQUEST_TIMEOUT_SECS is 0, leaving the transport default in place");
            } else {
                config = config.with_request_timeout(Duration::from_secs(secs));
            }
        }

        debug!(
            "Rate limit wait: {:?}, minimum request interval: {:?}, request timeout: {:?}",
            config.rate_limit_wait, config.min_request_interval, config.request_timeout
        );
        info!("Search client configuration loaded successfully");
        Ok(config)
    }

    /// URL of the client-credentials token endpoint.
    pub fn token_url(&self) -> String {
        format!("{}/oauth2/token", self.api_base_url)
    }

    /// URL of the recent search endpoint.
    pub fn search_url(&self) -> String {
        format!("{}/2/tweets/search/recent", self.api_base_url)
    }
}

fn parse_optional_u64(name: &str) -> Result<Option<u64>> {
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw.trim().parse::<u64>().map(Some).map_err(|e| {
            error!("{} must be a non-negative integer, got '{}'", name, raw);
            SearchError::Config(format!("{} must be a non-negative integer: {}", name, e))
        }),
        Err(_) => Ok(None),
    }
}
