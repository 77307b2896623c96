//! Complaints sub-client.

use serde_json::Value;

use crate::client::HeyCarClient;
use crate::domain::complaint::complain_params;
use crate::domain::order::order_params;
use crate::endpoint;
use crate::error::RequestResult;

pub struct Complaints<'a> {
    pub(crate) client: &'a HeyCarClient,
}

impl<'a> Complaints<'a> {
    /// Complaint reasons available for an order.
    pub async fn reasons(&self, token: &str, order_id: &str) -> RequestResult<Value> {
        self.client
            .http
            .call_endpoint(&endpoint::GET_COMPLAIN_REASONS, order_params(order_id), Some(token))
            .await
    }

    /// File a complaint. `reason_id` is one of the ids returned by [`reasons`](Self::reasons).
    pub async fn submit(
        &self,
        token: &str,
        order_id: &str,
        reason_id: i64,
        content: &str,
    ) -> RequestResult<Value> {
        self.client
            .http
            .call_endpoint(
                &endpoint::COMPLAIN,
                complain_params(order_id, reason_id, content),
                Some(token),
            )
            .await
    }
}
