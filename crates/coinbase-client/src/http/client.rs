/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Authenticated dispatch with envelope decoding and error classification
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing classification rules
*/

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};

use crate::auth::{Authenticator, Credentials};
use crate::http::{CoinbaseError, Result};
use crate::types::ApiResponse;

/// Base URL for the Coinbase API
const API_BASE_URL: &str = "https://coinbase.com";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the Coinbase API.
///
/// Safe for concurrent use: the only shared mutable state is the signer's
/// atomic nonce counter. Each call is one synchronous request/response
/// cycle; retry policy belongs to the caller.
#[derive(Debug)]
pub struct CoinbaseClient {
    http: Client,
    base_url: Url,
    auth: Option<Authenticator>,
}

impl CoinbaseClient {
    /// Create a new client with default configuration and no credentials.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, API_BASE_URL)
    }

    /// Create a new client against an explicit base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            auth: None,
        })
    }

    /// Configure credentials for authenticated requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.auth = Some(Authenticator::from_credentials(credentials));
    }

    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Issue one signed request and return the raw status and body bytes.
    ///
    /// The body is serialized exactly once; the signed bytes are the sent
    /// bytes. Transport faults surface as `Transport` and are not retried.
    async fn dispatch(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<(StatusCode, Vec<u8>)> {
        let url = self.url(endpoint)?;
        let payload = body.unwrap_or_default();

        let auth = self.auth.as_ref().ok_or(CoinbaseError::MissingCredentials)?;
        let signed_target = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };
        let headers = auth.headers(&signed_target, &payload);

        debug!(%method, endpoint, "dispatching API request");

        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        if !payload.is_empty() {
            builder = builder.body(payload);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?.to_vec();
        trace!(status = status.as_u16(), len = bytes.len(), "response received");

        Ok((status, bytes))
    }

    /// Dispatch and decode the polymorphic envelope, classifying business
    /// failures. An envelope carrying `success: false` or error messages is
    /// an `Api` error even when the HTTP status is 200.
    async fn send_envelope(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<ApiResponse> {
        let (status, bytes) = self.dispatch(method, endpoint, body).await?;
        let envelope: ApiResponse = serde_json::from_slice(&bytes)?;

        if envelope.has_error() {
            return Err(CoinbaseError::api(
                envelope.error_messages(),
                Some(status.as_u16()),
            ));
        }
        if !status.is_success() {
            return Err(CoinbaseError::api(Vec::new(), Some(status.as_u16())));
        }

        Ok(envelope)
    }

    pub(crate) async fn get_envelope(&self, endpoint: &str) -> Result<ApiResponse> {
        self.send_envelope(Method::GET, endpoint, None).await
    }

    pub(crate) async fn post_envelope<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse> {
        let body = serde_json::to_string(body)?;
        self.send_envelope(Method::POST, endpoint, Some(body)).await
    }

    pub(crate) async fn post_envelope_empty(&self, endpoint: &str) -> Result<ApiResponse> {
        self.send_envelope(Method::POST, endpoint, None).await
    }

    pub(crate) async fn put_envelope<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse> {
        let body = serde_json::to_string(body)?;
        self.send_envelope(Method::PUT, endpoint, Some(body)).await
    }

    pub(crate) async fn delete_envelope(&self, endpoint: &str) -> Result<ApiResponse> {
        self.send_envelope(Method::DELETE, endpoint, None).await
    }

    /// Dispatch against an endpoint whose body is a bare entity rather than
    /// the envelope (quotes, account balances).
    pub(crate) async fn get_entity<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let (status, bytes) = self.dispatch(Method::GET, endpoint, None).await?;

        if !status.is_success() {
            let messages = serde_json::from_slice::<ApiResponse>(&bytes)
                .map(|envelope| envelope.error_messages())
                .unwrap_or_default();
            return Err(CoinbaseError::api(messages, Some(status.as_u16())));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}
