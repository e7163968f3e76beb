//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool translates one MCP call into one Homebox REST request and hands
//! the response back as tool output.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per resource area)
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool listing
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Define params, metadata, and run() in the matching `definitions/` file
//! 2. Export in `definitions/mod.rs`
//! 3. Add route in `router.rs` using `with_route()`
//! 4. List in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
