// ABOUTME: MCP protocol message handlers for core protocol operations
// ABOUTME: Routes initialize, ping, tools/list, and tools/call to their handlers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # MCP protocol handlers
//!
//! One [`ProtocolHandler`] per process. Notifications are absorbed without a
//! response, every other message produces exactly one [`McpResponse`].

use crate::constants::{
    errors::{ERROR_INTERNAL_ERROR, ERROR_INVALID_PARAMS, ERROR_INVALID_REQUEST},
    protocol::{self, JSONRPC_VERSION, SERVER_VERSION},
};
use crate::mcp::schema::{InitializeResponse, McpRequest, McpResponse, ToolCall};
use crate::tools::{executor::ToolExecutor, registry};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

/// Routes MCP requests to their handlers
pub struct ProtocolHandler {
    executor: ToolExecutor,
}

impl ProtocolHandler {
    /// Create a handler backed by the given tool executor
    #[must_use]
    pub const fn new(executor: ToolExecutor) -> Self {
        Self { executor }
    }

    /// Handle one incoming message; returns None for notifications
    pub async fn handle_request(&self, request: McpRequest) -> Option<McpResponse> {
        let start = std::time::Instant::now();
        debug!(
            mcp_method = %request.method,
            mcp_id = ?request.id,
            "Processing MCP message"
        );

        if request.is_notification() {
            debug!(mcp_method = %request.method, "Notification absorbed");
            return None;
        }

        // is_notification() guarantees the id is present past this point
        let id = request.id.clone().unwrap_or(Value::Null);
        let response = self.route(&request, id).await;

        debug!(
            mcp_method = %request.method,
            duration_ms = start.elapsed().as_millis(),
            "MCP message processed"
        );
        Some(response)
    }

    async fn route(&self, request: &McpRequest, id: Value) -> McpResponse {
        if request.jsonrpc != JSONRPC_VERSION {
            return McpResponse::error(
                id,
                ERROR_INVALID_REQUEST,
                format!(
                    "Invalid JSON-RPC version: got '{}', expected '{JSONRPC_VERSION}'",
                    request.jsonrpc
                ),
            );
        }

        match request.method.as_str() {
            "initialize" => Self::handle_initialize(id),
            "ping" => McpResponse::success(id, json!({})),
            "tools/list" => Self::handle_tools_list(id),
            "tools/call" => self.handle_tools_call(request, id).await,
            "prompts/list" => McpResponse::success(id, json!({ "prompts": [] })),
            "resources/list" => McpResponse::success(id, json!({ "resources": [] })),
            method => {
                warn!(mcp_method = %method, "Unknown MCP method");
                McpResponse::error(
                    id,
                    crate::constants::errors::ERROR_METHOD_NOT_FOUND,
                    format!("Method not found: {method}"),
                )
            }
        }
    }

    /// Build the initialize response advertising tools over a fixed catalog
    fn handle_initialize(id: Value) -> McpResponse {
        debug!("Handling initialize request");

        let init_response = InitializeResponse::new(
            protocol::mcp_protocol_version(),
            protocol::server_name(),
            SERVER_VERSION.to_owned(),
        );

        match serde_json::to_value(&init_response) {
            Ok(result) => McpResponse::success(id, result),
            Err(e) => {
                error!(error = %e, "Failed to serialize initialize response");
                McpResponse::error(id, ERROR_INTERNAL_ERROR, "Internal error".to_owned())
            }
        }
    }

    /// List every tool. Discovery never requires a session; the token check
    /// happens at call time so assistants can always see what is available.
    fn handle_tools_list(id: Value) -> McpResponse {
        debug!("Handling tools/list request");

        let tools = registry::get_tools();
        McpResponse::success(id, json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, request: &McpRequest, id: Value) -> McpResponse {
        let Some(params) = &request.params else {
            return McpResponse::error(
                id,
                ERROR_INVALID_PARAMS,
                "Missing parameters for tools/call".to_owned(),
            );
        };

        let call: ToolCall = match serde_json::from_value(params.clone()) {
            Ok(call) => call,
            Err(e) => {
                return McpResponse::error(
                    id,
                    ERROR_INVALID_PARAMS,
                    format!("Invalid tool call parameters: {e}"),
                );
            }
        };

        info!(tool = %call.name, "Executing tool call");

        match self.executor.execute(&call).await {
            Ok(tool_response) => match serde_json::to_value(&tool_response) {
                Ok(result) => McpResponse::success(id, result),
                Err(e) => {
                    error!(tool = %call.name, error = %e, "Failed to serialize tool response");
                    McpResponse::error(id, ERROR_INTERNAL_ERROR, "Internal error".to_owned())
                }
            },
            Err(e) => {
                error!(tool = %call.name, error = %e, "Tool execution failed");
                McpResponse::error(id, e.jsonrpc_code(), e.message)
            }
        }
    }
}
