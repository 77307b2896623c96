//! # HeyCar SDK
//!
//! A Rust client for the HeyCar ride-hailing platform API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Parameters, request signing, environments, endpoint table, errors
//! 2. **HTTP** — `HeyCarHttp` dispatcher over a pluggable `Transport`
//! 3. **Domains** — Per-domain parameter builders and sub-clients
//! 4. **High-Level Client** — `HeyCarClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use heycar_sdk::prelude::*;
//!
//! let client = HeyCarClient::builder("channel-key", "channel-secret")
//!     .dev(true)
//!     .build()?;
//!
//! let resp = client.auth().get_token("13800000000").await?;
//! let token = token_from(&resp).unwrap_or_default();
//!
//! let cities = client.platform().city_list(token).await?;
//! let order = client.orders().get(token, "HC2021041200001").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared types: the request parameter map.
pub mod shared;

/// Request signature computation.
pub mod sign;

/// Unified SDK error types.
pub mod error;

/// Environment selection and base URLs.
pub mod network;

/// Endpoint path table.
pub mod endpoint;

/// Channel credentials and user token helpers.
pub mod auth;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Signed-request dispatcher and transport.
pub mod http;

// ── Layer 3: Domains ─────────────────────────────────────────────────────────

/// Domain modules (vertical slices): parameter builders and sub-clients.
pub mod domain;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `HeyCarClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::Params;

    // Signing
    pub use crate::sign::{compute_signature, verify_signature};

    // Errors
    pub use crate::error::{RequestError, RequestErrorKind, RequestResult, SdkError, TransportError};

    // Network
    pub use crate::network::{Environment, DEV_URL, PROD_URL};

    // Endpoints
    pub use crate::endpoint::Endpoint;

    // Auth
    pub use crate::auth::{token_from, Credentials};

    // Domain request types
    pub use crate::domain::platform::ValuationQuery;

    // HTTP
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
    pub use crate::http::{HeyCarHttp, Transport, TransportRequest, TransportResponse};

    // Client + sub-clients
    pub use crate::client::{
        AuthClient, ClientConfig, ComplaintsClient, EmployeesClient, HeyCarClient,
        HeyCarClientBuilder, OrdersClient, PlatformClient, TravelClient,
    };
}
