//! Platform domain — service cities and fare valuation.

pub mod client;

use serde_json::Value;

use crate::shared::Params;

/// A fare valuation request for `/platform/queryProductList`.
///
/// Addresses are forwarded verbatim. The platform expects address objects,
/// which do not take part in the signature.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationQuery {
    pub booking_type: i64,
    pub depart_address: Value,
    pub arrive_address: Value,
    /// Departure time for scheduled bookings; omitted for immediate rides.
    pub use_time: Option<Value>,
}

impl ValuationQuery {
    pub fn new(booking_type: i64, depart_address: impl Into<Value>, arrive_address: impl Into<Value>) -> Self {
        Self {
            booking_type,
            depart_address: depart_address.into(),
            arrive_address: arrive_address.into(),
            use_time: None,
        }
    }

    pub fn use_time(mut self, use_time: impl Into<Value>) -> Self {
        self.use_time = Some(use_time.into());
        self
    }

    pub fn into_params(self) -> Params {
        let mut params = Params::new()
            .with("bookingType", self.booking_type)
            .with("departAddress", self.depart_address)
            .with("arriveAddress", self.arrive_address);
        // a falsy time is the same as no time
        if let Some(t) = self.use_time.filter(|t| !crate::sign::is_falsy(t)) {
            params.insert("useTime", t);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valuation_params() {
        let params = ValuationQuery::new(1, json!({"lat": 31.23, "lng": 121.47}), json!({"lat": 31.15, "lng": 121.80}))
            .into_params();
        assert_eq!(
            Value::from(params),
            json!({
                "bookingType": 1,
                "departAddress": {"lat": 31.23, "lng": 121.47},
                "arriveAddress": {"lat": 31.15, "lng": 121.80}
            })
        );
    }

    #[test]
    fn test_use_time_only_when_set() {
        let with_time = ValuationQuery::new(2, json!({}), json!({}))
            .use_time("2021-04-12 18:30:00")
            .into_params();
        assert_eq!(with_time.get("useTime"), Some(&json!("2021-04-12 18:30:00")));

        let empty_time = ValuationQuery::new(2, json!({}), json!({})).use_time("").into_params();
        assert!(!empty_time.contains_key("useTime"));
    }
}
