// ABOUTME: MCP server module for the Model Context Protocol over stdio
// ABOUTME: Wire schema, request routing, and the stdin/stdout transport loop
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! MCP (Model Context Protocol) server implementation
//!
//! JSON-RPC 2.0 over stdio, one message per line. [`schema`] holds the
//! protocol types, [`protocol`] routes requests to handlers, and
//! [`transport`] owns the stdin read loop and stdout writes.

/// Request routing and method handlers
pub mod protocol;

/// Protocol message and capability types
pub mod schema;

/// Stdio transport loop
pub mod transport;

pub use protocol::ProtocolHandler;
pub use schema::{McpError, McpRequest, McpResponse};
pub use transport::StdioTransport;
