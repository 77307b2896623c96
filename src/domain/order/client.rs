//! Orders sub-client — create, query, cancel, rate.

use serde_json::Value;

use crate::client::HeyCarClient;
use crate::domain::order;
use crate::endpoint::{self, Endpoint};
use crate::error::RequestResult;
use crate::shared::Params;

pub struct Orders<'a> {
    pub(crate) client: &'a HeyCarClient,
}

impl<'a> Orders<'a> {
    async fn send(&self, endpoint: &Endpoint, token: &str, params: Params) -> RequestResult<Value> {
        self.client.http.call_endpoint(endpoint, params, Some(token)).await
    }

    /// Place an order. The order fields are passed through as given.
    pub async fn create(&self, token: &str, order: Params) -> RequestResult<Value> {
        self.send(&endpoint::CREATE_ORDER, token, order).await
    }

    pub async fn get(&self, token: &str, order_id: &str) -> RequestResult<Value> {
        self.send(&endpoint::GET_ORDER, token, order::order_params(order_id))
            .await
    }

    /// Cancel an order, forcing cancellation even after dispatch.
    pub async fn cancel(&self, token: &str, order_id: &str) -> RequestResult<Value> {
        self.send(&endpoint::CANCEL_ORDER, token, order::cancel_params(order_id))
            .await
    }

    /// Record why an order was cancelled.
    pub async fn set_cancel_reason(
        &self,
        token: &str,
        order_id: &str,
        reason: &str,
    ) -> RequestResult<Value> {
        self.send(
            &endpoint::SET_CANCEL_REASON,
            token,
            order::cancel_reason_params(order_id, reason),
        )
        .await
    }

    /// One page of the user's orders, optionally filtered.
    pub async fn list(
        &self,
        token: &str,
        page: u32,
        size: u32,
        filters: Params,
    ) -> RequestResult<Value> {
        self.send(
            &endpoint::GET_ORDER_LIST,
            token,
            order::list_params(page, size, filters),
        )
        .await
    }

    pub async fn driver_location(&self, token: &str, order_id: &str) -> RequestResult<Value> {
        self.send(
            &endpoint::GET_DRIVER_LOCATION,
            token,
            order::order_params(order_id),
        )
        .await
    }

    /// Rate a finished trip. `score` is sent as `level`.
    pub async fn score(
        &self,
        token: &str,
        order_id: &str,
        score: i64,
        comment: &str,
    ) -> RequestResult<Value> {
        self.send(
            &endpoint::SAVE_ORDER_SCORE,
            token,
            order::score_params(order_id, score, comment),
        )
        .await
    }
}
