//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — parameter builders for the domain's endpoints
//! - `client.rs` — sub-client with one method per remote operation

pub mod complaint;
pub mod employee;
pub mod order;
pub mod platform;
pub mod travel;
