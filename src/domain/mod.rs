//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types with serde derives matching the service wire format
//! - `wire.rs` — Request/response envelope structs (where the slice owns one)
//! - `client.rs` — Sub-client with HTTP methods (where the slice has endpoints)

pub mod extractor;
pub mod features;
pub mod light_curve;
