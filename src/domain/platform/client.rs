//! Platform sub-client — cities and valuation.

use serde_json::Value;

use crate::client::HeyCarClient;
use crate::domain::platform::ValuationQuery;
use crate::endpoint;
use crate::error::RequestResult;
use crate::shared::Params;

pub struct Platform<'a> {
    pub(crate) client: &'a HeyCarClient,
}

impl<'a> Platform<'a> {
    /// List the cities the service operates in.
    pub async fn city_list(&self, token: &str) -> RequestResult<Value> {
        self.client
            .http
            .call_endpoint(&endpoint::GET_CITY_LIST, Params::new(), Some(token))
            .await
    }

    /// Quote the available products and fares for a trip.
    pub async fn valuation(&self, token: &str, query: ValuationQuery) -> RequestResult<Value> {
        self.client
            .http
            .call_endpoint(&endpoint::GET_VALUATION, query.into_params(), Some(token))
            .await
    }
}
