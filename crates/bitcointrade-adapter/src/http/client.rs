/*
[INPUT]:  HTTP configuration (base URL, timeouts, API token)
[OUTPUT]: Configured client and the shared request/dispatch routine
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::http::{BitcoinTradeError, Result};

/// Versioned API root for the BitcoinTrade exchange
const API_URL: &str = "https://api.bitcointrade.com.br/v1";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_redirects: 10,
        }
    }
}

/// Main HTTP client for the BitcoinTrade API.
///
/// Holds only the API token, the base URL and the transport configuration;
/// all of it immutable after construction, so `&self` endpoint methods may
/// be called concurrently without interference.
#[derive(Debug, Clone)]
pub struct BitcoinTradeClient {
    api_key: String,
    base_url: String,
    config: ClientConfig,
}

impl BitcoinTradeClient {
    /// Create a new client with default configuration
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(api_key, config, API_URL)
    }

    /// Create a new client against an alternate base URL. Intended for tests
    /// pointing at a mock server.
    pub fn with_config_and_base_url(
        api_key: impl Into<String>,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        Url::parse(base_url)?;
        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            config,
        })
    }

    /// The API token supplied at construction
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Open a fresh transport handle. One handle per call, dropped when the
    /// call returns, so no connections are reused across invocations.
    fn transport(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.config.timeout)
            .redirect(Policy::limited(self.config.max_redirects))
            .http1_only()
            .gzip(true)
            .build()
            .map_err(BitcoinTradeError::transport)
    }

    /// Build an unauthenticated request for an endpoint path (query string
    /// included). Every request carries `Content-Type: application/json`.
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = Url::parse(&format!("{}{}", self.base_url, endpoint))?;
        debug!(%method, %url, "dispatching request");
        Ok(self
            .transport()?
            .request(method, url)
            .header(CONTENT_TYPE, "application/json"))
    }

    /// Build a request carrying the `ApiToken` authorization header
    pub(crate) fn authenticated_request(
        &self,
        method: Method,
        endpoint: &str,
    ) -> Result<RequestBuilder> {
        Ok(self
            .request(method, endpoint)?
            .header(AUTHORIZATION, format!("ApiToken {}", self.api_key)))
    }

    /// Serialize `body` (an empty mapping serializes to `{}`), issue the
    /// request and decode the response body as JSON.
    ///
    /// The HTTP status is never inspected: the exchange reports application
    /// errors inside the JSON envelope and callers interpret it themselves.
    /// A body that is not valid JSON decodes to `Value::Null`.
    pub(crate) async fn send_json<B>(&self, builder: RequestBuilder, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_string(body)?;
        let response = builder
            .body(payload)
            .send()
            .await
            .map_err(BitcoinTradeError::transport)?;
        debug!(status = %response.status(), "response received");

        let text = response.text().await.map_err(BitcoinTradeError::transport)?;
        Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
    }
}
