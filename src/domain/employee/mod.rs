//! Employee domain — company member roster.
//!
//! Member records are passed through untouched; the SDK only adds the
//! identifying `channelId` / `userId` pair where an operation needs it.

pub mod client;

use serde_json::Value;

use crate::shared::Params;

pub fn member_params(user_id: &str, channel_id: &str) -> Params {
    Params::new()
        .with("channelId", channel_id)
        .with("userId", user_id)
}

/// Member update. The identifying pair overrides same-named fields in `fields`.
pub fn update_params(user_id: &str, channel_id: &str, mut fields: Params) -> Params {
    fields.merge(member_params(user_id, channel_id));
    fields
}

/// Batch add wraps the members in an `employees` list.
pub fn batch_params(employees: Vec<Params>) -> Params {
    let list: Vec<Value> = employees.into_iter().map(Value::from).collect();
    Params::new().with("employees", list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_params_identity_wins() {
        let fields = Params::new().with("name", "Li Lei").with("userId", "stale");
        let params = update_params("u-1", "c-1", fields);
        assert_eq!(
            Value::from(params),
            json!({"name": "Li Lei", "userId": "u-1", "channelId": "c-1"})
        );
    }

    #[test]
    fn test_batch_params() {
        let params = batch_params(vec![
            Params::new().with("name", "Li Lei"),
            Params::new().with("name", "Han Meimei"),
        ]);
        assert_eq!(
            Value::from(params),
            json!({"employees": [{"name": "Li Lei"}, {"name": "Han Meimei"}]})
        );
    }
}
