//! High-level client — `HeyCarClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, configuration, and accessor methods.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::auth::client::Auth;
use crate::auth::Credentials;
use crate::domain::complaint::client::Complaints;
use crate::domain::employee::client::Employees;
use crate::domain::order::client::Orders;
use crate::domain::platform::client::Platform;
use crate::domain::travel::client::Travel;
use crate::error::{RequestResult, SdkError};
use crate::http::transport::DEFAULT_TIMEOUT_SECS;
use crate::http::{HeyCarHttp, Transport};
use crate::network::Environment;
use crate::shared::Params;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::complaint::client::Complaints as ComplaintsClient;
pub use crate::domain::employee::client::Employees as EmployeesClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::platform::client::Platform as PlatformClient;
pub use crate::domain::travel::client::Travel as TravelClient;

/// The primary entry point for the HeyCar SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.orders()`, `client.employees()`, etc.
///
/// Each instance owns its environment; switching with [`set_dev`](Self::set_dev)
/// affects only this instance and its later calls.
#[derive(Debug, Clone)]
pub struct HeyCarClient {
    pub(crate) http: HeyCarHttp,
}

impl HeyCarClient {
    /// Production client with default settings.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self, SdkError> {
        Self::builder(key, secret).build()
    }

    pub fn builder(key: impl Into<String>, secret: impl Into<String>) -> HeyCarClientBuilder {
        HeyCarClientBuilder::new(key, secret)
    }

    // ── Environment ──────────────────────────────────────────────────────

    pub fn set_dev(&mut self, is_dev: bool) -> &mut Self {
        self.http.set_dev(is_dev);
        self
    }

    pub fn is_dev(&self) -> bool {
        self.http.is_dev()
    }

    pub fn environment(&self) -> Environment {
        self.http.environment()
    }

    /// Base URL the next call will use.
    pub fn base_url(&self) -> &'static str {
        self.http.base_url()
    }

    /// Channel key this client signs for.
    pub fn key(&self) -> &str {
        self.http.credentials().key()
    }

    /// The underlying dispatcher.
    pub fn http(&self) -> &HeyCarHttp {
        &self.http
    }

    /// Signed call to an arbitrary path, for endpoints the SDK does not wrap.
    pub async fn call(
        &self,
        path: &str,
        params: Params,
        token: Option<&str>,
    ) -> RequestResult<Value> {
        self.http.call(path, params, token).await
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn platform(&self) -> Platform<'_> {
        Platform { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn complaints(&self) -> Complaints<'_> {
        Complaints { client: self }
    }

    pub fn employees(&self) -> Employees<'_> {
        Employees { client: self }
    }

    pub fn travel(&self) -> Travel<'_> {
        Travel { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Configuration
// ═════════════════════════════════════════════════════════════════════════════

/// Client settings as they appear in a host application's config file.
///
/// ```toml
/// [heycar]
/// key = "channel-key"
/// secret = "channel-secret"
/// is_dev = true
/// timeout_secs = 10
/// ```
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    pub key: String,
    pub secret: String,
    #[serde(default)]
    pub is_dev: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("is_dev", &self.is_dev)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct HeyCarClientBuilder {
    key: String,
    secret: String,
    environment: Environment,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl HeyCarClientBuilder {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
            environment: Environment::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            transport: None,
        }
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self::new(config.key, config.secret)
            .dev(config.is_dev)
            .timeout_secs(config.timeout_secs)
    }

    /// Target the test environment.
    pub fn dev(mut self, is_dev: bool) -> Self {
        self.environment = Environment::from_dev_flag(is_dev);
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Request timeout of the default transport. Ignored when a custom
    /// transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Send requests through `transport` instead of the default reqwest client.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn build(self) -> Result<HeyCarClient, SdkError> {
        if self.key.is_empty() {
            return Err(SdkError::Config("channel key must not be empty".to_string()));
        }
        if self.secret.is_empty() {
            return Err(SdkError::Config("channel secret must not be empty".to_string()));
        }

        let transport = match self.transport {
            Some(t) => t,
            None => default_transport(self.timeout)?,
        };

        Ok(HeyCarClient {
            http: HeyCarHttp::new(
                Credentials::new(self.key, self.secret),
                self.environment,
                transport,
            ),
        })
    }
}

#[cfg(feature = "http")]
fn default_transport(timeout: Duration) -> Result<Arc<dyn Transport>, SdkError> {
    Ok(Arc::new(crate::http::ReqwestTransport::new(timeout)?))
}

#[cfg(not(feature = "http"))]
fn default_transport(_timeout: Duration) -> Result<Arc<dyn Transport>, SdkError> {
    Err(SdkError::Config(
        "no transport configured: enable the `http` feature or call `transport()`".to_string(),
    ))
}

#[cfg(all(test, feature = "http"))]
mod tests {
    use super::*;
    use crate::network::{DEV_URL, PROD_URL};

    #[test]
    fn test_default_is_production() {
        let client = HeyCarClient::new("key", "secret").unwrap();
        assert!(!client.is_dev());
        assert_eq!(client.base_url(), PROD_URL);
        assert_eq!(client.key(), "key");
    }

    #[test]
    fn test_set_dev_switches_base_url() {
        let mut client = HeyCarClient::builder("key", "secret").dev(true).build().unwrap();
        assert_eq!(client.base_url(), DEV_URL);

        client.set_dev(false);
        assert_eq!(client.base_url(), PROD_URL);
        assert_eq!(client.environment(), Environment::Production);
    }

    #[test]
    fn test_clones_do_not_share_environment() {
        let mut dev = HeyCarClient::builder("key", "secret").dev(true).build().unwrap();
        let prod = {
            let mut c = dev.clone();
            c.set_dev(false);
            c
        };
        assert!(dev.is_dev());
        assert!(!prod.is_dev());
        dev.set_dev(false);
        assert!(!dev.is_dev());
    }

    #[test]
    fn test_rejects_empty_credentials() {
        assert!(matches!(
            HeyCarClient::new("", "secret"),
            Err(SdkError::Config(_))
        ));
        assert!(matches!(
            HeyCarClient::new("key", ""),
            Err(SdkError::Config(_))
        ));
    }

    #[test]
    fn test_from_config_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"key": "k", "secret": "s"}"#).unwrap();
        assert!(!config.is_dev);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        let client = HeyCarClientBuilder::from_config(config).build().unwrap();
        assert_eq!(client.base_url(), PROD_URL);
    }

    #[test]
    fn test_from_config_dev() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"key": "k", "secret": "s", "is_dev": true, "timeout_secs": 5}"#,
        )
        .unwrap();
        let client = HeyCarClientBuilder::from_config(config).build().unwrap();
        assert!(client.is_dev());
    }

    #[test]
    fn test_config_debug_redacts_secret() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"key": "k", "secret": "hunter2"}"#).unwrap();
        let out = format!("{config:?}");
        assert!(out.contains("<redacted>"));
        assert!(!out.contains("hunter2"));
    }
}
