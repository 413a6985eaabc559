//! Remote source configuration

use brewlog_core::errors::{BeerError, Result};
use std::time::Duration;

/// Public endpoint serving one random beer per request
pub const DEFAULT_ENDPOINT: &str = "https://random-data-api.com/api/beer/random_beer";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub endpoint: String,
    /// Upper bound on one request, connect through body
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FetchConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parse the endpoint and reject a zero timeout
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the endpoint is not an http(s) URL or the timeout
    /// is zero.
    pub fn endpoint_url(&self) -> Result<reqwest::Url> {
        if self.timeout.is_zero() {
            return Err(BeerError::InvalidInput {
                reason: "timeout must be greater than zero".to_string(),
            });
        }
        let url = reqwest::Url::parse(&self.endpoint).map_err(|e| BeerError::InvalidInput {
            reason: format!("invalid endpoint '{}': {}", self.endpoint, e),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(BeerError::InvalidInput {
                reason: format!("unsupported endpoint scheme '{}'", other),
            }),
        }
    }
}
