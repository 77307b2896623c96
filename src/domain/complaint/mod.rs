//! Complaint domain — complaint reasons and submission.

pub mod client;

use crate::shared::Params;

pub fn complain_params(order_id: &str, reason_id: i64, content: &str) -> Params {
    Params::new()
        .with("orderId", order_id)
        .with("type", reason_id)
        .with("content", content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_reason_id_sent_as_type() {
        assert_eq!(
            Value::from(complain_params("HC123", 4, "driver was late")),
            json!({"orderId": "HC123", "type": 4, "content": "driver was late"})
        );
    }
}
