//! Order domain — creation, lookup, cancellation, listing, rating.

pub mod client;

use crate::shared::Params;

/// Parameters addressing a single order.
pub fn order_params(order_id: &str) -> Params {
    Params::new().with("orderId", order_id)
}

/// Forced cancellation of an order.
pub fn cancel_params(order_id: &str) -> Params {
    order_params(order_id).with("force", true)
}

pub fn cancel_reason_params(order_id: &str, reason: &str) -> Params {
    order_params(order_id).with("reason", reason)
}

/// A page of the order list. Paging always overrides same-named filters.
pub fn list_params(page: u32, size: u32, mut filters: Params) -> Params {
    filters.insert("page", page);
    filters.insert("size", size);
    filters
}

/// A rating for a finished trip.
pub fn score_params(order_id: &str, level: i64, comment: &str) -> Params {
    order_params(order_id)
        .with("level", level)
        .with("comment", comment)
}
