//! Auth sub-client — user token acquisition.

use serde_json::Value;

use crate::auth::token_params;
use crate::client::HeyCarClient;
use crate::endpoint;
use crate::error::RequestResult;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a HeyCarClient,
}

impl<'a> Auth<'a> {
    /// Request a user token for `phone`, stamped with the current time.
    ///
    /// Returns the full response envelope; use [`token_from`](crate::auth::token_from)
    /// to read the token out of it.
    pub async fn get_token(&self, phone: &str) -> RequestResult<Value> {
        self.get_token_at(phone, chrono::Utc::now().timestamp()).await
    }

    /// Request a user token with an explicit unix timestamp (seconds).
    pub async fn get_token_at(&self, phone: &str, timestamp: i64) -> RequestResult<Value> {
        let params = token_params(self.client.http.credentials().key(), phone, timestamp);
        self.client
            .http
            .call_endpoint(&endpoint::GET_TOKEN, params, None)
            .await
    }
}
