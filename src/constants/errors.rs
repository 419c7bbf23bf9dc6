// ABOUTME: Error code constants for JSON-RPC and MCP protocol errors
// ABOUTME: Defines standard error codes and corresponding error messages
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error codes for JSON-RPC and MCP protocols

/// Parse error (invalid JSON on the wire)
pub const ERROR_PARSE_ERROR: i32 = -32700;

/// Invalid request (not a valid JSON-RPC request object)
pub const ERROR_INVALID_REQUEST: i32 = -32600;

/// Method not found
pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;

/// Invalid parameters
pub const ERROR_INVALID_PARAMS: i32 = -32602;

/// Internal error
pub const ERROR_INTERNAL_ERROR: i32 = -32603;

/// Common error messages
pub const MSG_PARSE_ERROR: &str = "Parse error";
pub const MSG_METHOD_NOT_FOUND: &str = "Method not found";
pub const MSG_INVALID_PARAMS: &str = "Invalid parameters";
pub const MSG_INTERNAL_ERROR: &str = "Internal error";

/// Reply text for tool calls made without a configured session. Sent as a
/// normal text result, not a protocol error, so assistants can relay the
/// fix to the user.
pub const MSG_GARTH_TOKEN_REQUIRED: &str =
    "You must set the GARTH_TOKEN environment variable to use this tool";
