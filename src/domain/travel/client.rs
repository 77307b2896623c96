//! Business travel sub-client.

use serde_json::Value;

use crate::client::HeyCarClient;
use crate::endpoint;
use crate::error::RequestResult;
use crate::shared::Params;

pub struct Travel<'a> {
    pub(crate) client: &'a HeyCarClient,
}

impl<'a> Travel<'a> {
    /// Submit a business travel form. Form fields are passed through as given.
    pub async fn add_form(&self, token: &str, form: Params) -> RequestResult<Value> {
        self.client
            .http
            .call_endpoint(&endpoint::ADD_BUSINESS_TRAVEL_FORM, form, Some(token))
            .await
    }
}
