// ABOUTME: Stdio transport for the MCP server, one JSON-RPC message per line
// ABOUTME: Reads requests from stdin and writes responses to stdout
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Stdio transport
//!
//! Stdout carries nothing but JSON-RPC responses; all logging goes to stderr
//! through the tracing subscriber. Lines that are not valid JSON get the
//! standard parse error with a null id.

use crate::constants::errors::{ERROR_PARSE_ERROR, MSG_PARSE_ERROR};
use crate::errors::AppResult;
use crate::logging::truncate_for_log;
use crate::mcp::protocol::ProtocolHandler;
use crate::mcp::schema::{McpRequest, McpResponse};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};

/// Line-oriented JSON-RPC transport over stdin/stdout
pub struct StdioTransport {
    handler: ProtocolHandler,
    truncate_logs: bool,
}

impl StdioTransport {
    /// Create a transport that feeds requests into the given handler
    #[must_use]
    pub const fn new(handler: ProtocolHandler, truncate_logs: bool) -> Self {
        Self {
            handler,
            truncate_logs,
        }
    }

    /// Run the read loop until stdin closes
    ///
    /// # Errors
    ///
    /// Returns an error if reading from stdin fails.
    pub async fn run(&self) -> AppResult<()> {
        info!("MCP stdio transport ready - listening on stdin/stdout");

        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            debug!(
                payload = %truncate_for_log(&line, self.truncate_logs),
                "Received message"
            );

            match serde_json::from_str::<McpRequest>(&line) {
                Ok(request) => {
                    if let Some(response) = self.handler.handle_request(request).await {
                        self.write_response(&response);
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Invalid JSON-RPC message");
                    println!("{}", Self::parse_error_response());
                }
            }
        }

        info!("stdin closed, MCP stdio transport shutting down");
        Ok(())
    }

    fn write_response(&self, response: &McpResponse) {
        match serde_json::to_string(response) {
            Ok(json) => {
                debug!(
                    payload = %truncate_for_log(&json, self.truncate_logs),
                    "Sending response"
                );
                println!("{json}");
            }
            Err(e) => {
                error!(error = %e, "Failed to serialize MCP response");
            }
        }
    }

    /// Standard JSON-RPC parse error; the id is null because the request id
    /// could not be read from the broken line
    fn parse_error_response() -> serde_json::Value {
        serde_json::json!({
            "jsonrpc": "2.0",
            "error": {
                "code": ERROR_PARSE_ERROR,
                "message": MSG_PARSE_ERROR
            },
            "id": null
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_error_response_shape() {
        let response = StdioTransport::parse_error_response();
        assert_eq!(response["jsonrpc"], "2.0");
        assert_eq!(response["error"]["code"], -32700);
        assert_eq!(response["error"]["message"], "Parse error");
        assert!(response["id"].is_null());
    }

    #[test]
    fn test_malformed_line_does_not_deserialize() {
        assert!(serde_json::from_str::<McpRequest>("{not json").is_err());
        assert!(serde_json::from_str::<McpRequest>("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_line_without_method_does_not_deserialize() {
        // Valid JSON but not a request; the read loop answers with the
        // parse error rather than panicking
        assert!(serde_json::from_str::<McpRequest>(r#"{"jsonrpc": "2.0", "id": 1}"#).is_err());
    }
}
