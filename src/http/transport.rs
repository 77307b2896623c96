//! Transport seam: the one place bytes leave the process.
//!
//! The dispatcher only needs "POST this JSON with these headers, give me the
//! status and body". [`ReqwestTransport`] is the default; tests and hosts with
//! their own HTTP stack implement [`Transport`] directly.

use async_trait::async_trait;

use crate::error::TransportError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A fully prepared POST request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body.
    pub body: String,
}

impl TransportRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code plus the unparsed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Minimal async HTTP client used by the dispatcher.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` as a JSON POST.
    ///
    /// Any HTTP status is a successful transport round trip; only failures to
    /// obtain a response (or read its body) are errors.
    async fn post_json(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

// ─── ReqwestTransport ────────────────────────────────────────────────────────

/// [`Transport`] backed by `reqwest`.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl ReqwestTransport {
    /// Build a transport with the given request timeout.
    pub fn new(timeout: std::time::Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap a preconfigured `reqwest::Client` (proxy, custom TLS, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut req = self
            .client
            .post(&request.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json");

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        let resp = req.body(request.body).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(TransportResponse { status, body })
    }
}
