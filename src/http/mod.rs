//! HTTP layer — the `HeyCarHttp` dispatcher and its pluggable transport.

pub mod client;
pub mod transport;

pub use client::HeyCarHttp;
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{Transport, TransportRequest, TransportResponse, DEFAULT_TIMEOUT_SECS};
