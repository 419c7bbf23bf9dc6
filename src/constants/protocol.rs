// ABOUTME: MCP protocol constants including version, JSON-RPC, and server identification
// ABOUTME: Provides environment-configurable protocol values with sensible defaults
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Protocol constants for MCP and JSON-RPC

use super::env_vars;
use std::env;

/// Get MCP protocol version from environment or default
#[must_use]
pub fn mcp_protocol_version() -> String {
    env::var(env_vars::MCP_PROTOCOL_VERSION).unwrap_or_else(|_| "2024-11-05".into())
}

/// JSON-RPC version (standard, not configurable)
pub const JSONRPC_VERSION: &str = "2.0";

/// Get server name from environment or default
#[must_use]
pub fn server_name() -> String {
    env::var(env_vars::SERVER_NAME).unwrap_or_else(|_| "Garth - Garmin Connect".into())
}

/// Server version from Cargo.toml
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Guidance sent to clients in the initialize response
pub const SERVER_INSTRUCTIONS: &str = "This server exposes Garmin Connect account data. \
Set the GARTH_TOKEN environment variable to a saved garth session before calling tools. \
Start with `user_profile` or `snapshot` to orient, then use the specialized wellness and \
activity tools for details.";
