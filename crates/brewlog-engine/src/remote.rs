//! Remote source of random beers
//!
//! `BeerSource` is the seam between the fetch workflow and the network.
//! `HttpBeerSource` is the production implementation; any
//! `Fn() -> Result<Beer>` closure is also a source, which is what tests use.

use brewlog_core::errors::{BeerError, Result};
use brewlog_core::model::Beer;
use reqwest::blocking::Client;

use crate::config::FetchConfig;

/// Supplies one beer per call
pub trait BeerSource {
    /// Fetch one beer
    ///
    /// # Errors
    ///
    /// `Network`/`HttpStatus` when the source cannot be reached or answers
    /// with a non-success status, `MalformedResponse` when the payload does
    /// not carry string `brand`, `name` and `style` fields.
    fn fetch_beer(&self) -> Result<Beer>;

    /// Where beers come from, for logs
    fn describe(&self) -> String {
        "custom".to_string()
    }
}

impl<F> BeerSource for F
where
    F: Fn() -> Result<Beer>,
{
    fn fetch_beer(&self) -> Result<Beer> {
        self()
    }
}

/// Blocking HTTP client for the beer endpoint
///
/// Issues a plain `GET`. No retry, no pagination, no auth.
pub struct HttpBeerSource {
    client: Client,
    endpoint: reqwest::Url,
}

impl HttpBeerSource {
    /// # Errors
    ///
    /// `InvalidInput` for a bad endpoint or timeout, `Network` if the HTTP
    /// client cannot be constructed.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("brewlog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BeerError::Network {
                reason: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client, endpoint })
    }
}

impl BeerSource for HttpBeerSource {
    fn fetch_beer(&self) -> Result<Beer> {
        tracing::debug!(endpoint = %self.endpoint, "requesting random beer");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| BeerError::Network {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BeerError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| BeerError::Network {
            reason: format!("failed to read response body: {}", e),
        })?;
        parse_beer(&body)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

/// Parse a remote payload, keeping only brand/name/style
///
/// # Errors
///
/// `MalformedResponse` when the body is not JSON or misses a field.
pub fn parse_beer(body: &str) -> Result<Beer> {
    Ok(serde_json::from_str(body)?)
}
