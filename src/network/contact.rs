//! Contact endpoint client
//!
//! One JSON POST per submission. No retries and no explicit timeout: a hung
//! server is left to reqwest's defaults.
//!
//! The server answers with a JSON object for every status, so the body is
//! decoded before the status is looked at. A body that is not JSON is a
//! transport failure, the same as a refused connection.

use serde_json::Value;
use thiserror::Error;

use crate::config::ContactConfig;
use crate::types::ContactPayload;

/// Fixed path of the contact endpoint
pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Response body is not JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Status and decoded body of a contact endpoint response
#[derive(Debug, Clone, PartialEq)]
pub struct ContactResponse {
    pub status: u16,
    pub body: Value,
}

impl ContactResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// 2xx, the same range `fetch` reports as `ok`
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Sends a contact payload and returns the server's answer
///
/// The handler's only suspension point. Implemented over HTTP by
/// [`HttpTransport`]; tests substitute scripted transports.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn post(&self, payload: &ContactPayload) -> Result<ContactResponse, TransportError>;
}

/// reqwest-backed transport bound to one endpoint URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(config: &ContactConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, config))
    }

    /// Reuse an existing client (connection pool, proxy settings)
    pub fn with_client(client: reqwest::Client, config: &ContactConfig) -> Self {
        Self {
            client,
            url: config.endpoint_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ContactTransport for HttpTransport {
    async fn post(&self, payload: &ContactPayload) -> Result<ContactResponse, TransportError> {
        let body = payload.to_json_bytes().map_err(TransportError::Encode)?;

        #[cfg(feature = "verbose-network")]
        log::debug!("CONTACT TX {}: {}", self.url, String::from_utf8_lossy(&body));

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        #[cfg(feature = "verbose-network")]
        log::debug!("CONTACT RX {}: {}", status, String::from_utf8_lossy(&bytes));

        let body = serde_json::from_slice(&bytes).map_err(TransportError::Decode)?;
        log::debug!("Contact endpoint answered {}", status);

        Ok(ContactResponse::new(status, body))
    }
}
