//! Homebox API client domain.
//!
//! This module owns everything that crosses the wire to the Homebox
//! instance:
//!
//! - `client.rs` - credential resolution, request construction, and
//!   response translation (the one generic request path all tools share)
//! - `models.rs` - typed shapes of the Homebox v1 API
//! - `error.rs` - the client error taxonomy
//!
//! Tools in `domains::tools` compose these pieces; nothing outside this
//! module builds HTTP requests.

mod client;
mod error;
pub mod models;

pub use client::{HomeboxClient, decode_base64, encode_base64, encode_query};
pub use error::ClientError;
