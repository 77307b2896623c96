//! Authentication — channel credentials and user tokens.
//!
//! ## Model
//!
//! - **Channel credentials** (`key` + `secret`) are issued to the integrating
//!   party. The key is sent as `channelKey` when requesting a token; the secret
//!   only ever enters the signature and is never sent or logged.
//! - **User tokens** come back from `/login/getToken` for a contact phone. The
//!   SDK does not store them: the caller keeps the token and passes it to every
//!   authorized call, where it travels as the `token` header.

pub mod client;

use std::fmt;

use serde_json::Value;

use crate::shared::Params;
use crate::sign;

// ============================================================================
// Credentials
// ============================================================================

/// Channel key and signing secret. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// The channel key (`channelKey` on the wire).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Sign `params` with this channel's secret.
    pub fn sign(&self, params: &Params) -> String {
        sign::compute_signature(params, &self.secret)
    }

    /// Check a signature produced with this channel's secret.
    pub fn verify(&self, params: &Params, signature: &str) -> bool {
        sign::verify_signature(params, &self.secret, signature)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Token request / response helpers
// ============================================================================

/// Parameters for `/login/getToken`.
pub fn token_params(channel_key: &str, phone: &str, timestamp: i64) -> Params {
    Params::new()
        .with("channelKey", channel_key)
        .with("contactPhone", phone)
        .with("timeStamp", timestamp.to_string())
}

/// Pull the user token out of a `/login/getToken` response body.
///
/// ```text
/// {"code": 200, "data": {"token": "abc"}}  =>  Some("abc")
/// ```
pub fn token_from(response: &Value) -> Option<&str> {
    response.get("data")?.get("token")?.as_str()
}
