//! Employees sub-client — add, remove, update company members.

use serde_json::Value;

use crate::client::HeyCarClient;
use crate::domain::employee;
use crate::endpoint;
use crate::error::RequestResult;
use crate::shared::Params;

pub struct Employees<'a> {
    pub(crate) client: &'a HeyCarClient,
}

impl<'a> Employees<'a> {
    pub async fn add(&self, token: &str, member: Params) -> RequestResult<Value> {
        self.client
            .http
            .call_endpoint(&endpoint::ADD_EMPLOYEE, member, Some(token))
            .await
    }

    pub async fn remove(&self, token: &str, user_id: &str, channel_id: &str) -> RequestResult<Value> {
        self.client
            .http
            .call_endpoint(
                &endpoint::REMOVE_EMPLOYEE,
                employee::member_params(user_id, channel_id),
                Some(token),
            )
            .await
    }

    pub async fn update(
        &self,
        token: &str,
        user_id: &str,
        channel_id: &str,
        fields: Params,
    ) -> RequestResult<Value> {
        self.client
            .http
            .call_endpoint(
                &endpoint::UPDATE_EMPLOYEE,
                employee::update_params(user_id, channel_id, fields),
                Some(token),
            )
            .await
    }

    /// Add several members in one call.
    pub async fn add_batch(&self, token: &str, members: Vec<Params>) -> RequestResult<Value> {
        self.client
            .http
            .call_endpoint(
                &endpoint::ADD_EMPLOYEES,
                employee::batch_params(members),
                Some(token),
            )
            .await
    }
}
