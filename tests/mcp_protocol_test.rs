// ABOUTME: MCP protocol compliance integration tests over the full handler stack
// ABOUTME: Covers initialize, discovery, notifications, error codes, and tool gating
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use garth_mcp_server::constants::errors::{
    ERROR_INVALID_PARAMS, ERROR_INVALID_REQUEST, ERROR_METHOD_NOT_FOUND, MSG_GARTH_TOKEN_REQUIRED,
};
use garth_mcp_server::constants::protocol::SERVER_VERSION;
use garth_mcp_server::mcp::McpResponse;
use garth_mcp_server::tools::registry::ALL_TOOLS;
use serde_json::{json, Value};
use serial_test::serial;

mod common;

async fn send(message: Value) -> Option<McpResponse> {
    common::handler().handle_request(common::request(message)).await
}

async fn send_expecting_response(message: Value) -> McpResponse {
    send(message).await.expect("request with an id gets a response")
}

#[tokio::test]
async fn test_initialize_advertises_fixed_tool_catalog() {
    let response = send_expecting_response(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "test-client", "version": "0.0.1"}
        }
    }))
    .await;

    assert!(response.error.is_none());
    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "Garth - Garmin Connect");
    assert_eq!(result["serverInfo"]["version"], SERVER_VERSION);
    assert_eq!(result["capabilities"]["tools"]["listChanged"], false);

    let instructions = result["instructions"].as_str().unwrap();
    assert!(instructions.contains("GARTH_TOKEN"));
}

#[tokio::test]
async fn test_ping_returns_empty_result() {
    let response =
        send_expecting_response(json!({"jsonrpc": "2.0", "id": 2, "method": "ping"})).await;
    assert_eq!(response.result, Some(json!({})));
    assert!(response.error.is_none());
}

#[tokio::test]
async fn test_tools_list_matches_catalog_order() {
    let response =
        send_expecting_response(json!({"jsonrpc": "2.0", "id": 3, "method": "tools/list"})).await;

    let result = response.result.unwrap();
    let tools = result["tools"].as_array().unwrap();
    assert_eq!(tools.len(), ALL_TOOLS.len());

    let names: Vec<&str> = tools
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ALL_TOOLS);

    for tool in tools {
        assert_eq!(tool["inputSchema"]["type"], "object");
        assert!(
            !tool["description"].as_str().unwrap().is_empty(),
            "{} has no description",
            tool["name"]
        );
    }
}

#[tokio::test]
async fn test_prompts_and_resources_are_empty() {
    let prompts =
        send_expecting_response(json!({"jsonrpc": "2.0", "id": 4, "method": "prompts/list"}))
            .await;
    assert_eq!(prompts.result.unwrap()["prompts"], json!([]));

    let resources =
        send_expecting_response(json!({"jsonrpc": "2.0", "id": 5, "method": "resources/list"}))
            .await;
    assert_eq!(resources.result.unwrap()["resources"], json!([]));
}

#[tokio::test]
async fn test_notifications_get_no_response() {
    assert!(send(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
        .await
        .is_none());
    // No id means notification even for normally answerable methods
    assert!(send(json!({"jsonrpc": "2.0", "method": "ping"})).await.is_none());
}

#[tokio::test]
async fn test_unknown_method_is_method_not_found() {
    let response = send_expecting_response(json!({
        "jsonrpc": "2.0", "id": 6, "method": "bogus/method"
    }))
    .await;

    let error = response.error.unwrap();
    assert_eq!(error.code, ERROR_METHOD_NOT_FOUND);
    assert_eq!(error.message, "Method not found: bogus/method");
}

#[tokio::test]
async fn test_wrong_jsonrpc_version_is_invalid_request() {
    let response =
        send_expecting_response(json!({"jsonrpc": "1.0", "id": 7, "method": "ping"})).await;

    let error = response.error.unwrap();
    assert_eq!(error.code, ERROR_INVALID_REQUEST);
    assert!(error.message.contains("Invalid JSON-RPC version"));
}

#[tokio::test]
async fn test_tools_call_without_params_is_invalid_params() {
    let response =
        send_expecting_response(json!({"jsonrpc": "2.0", "id": 8, "method": "tools/call"})).await;

    let error = response.error.unwrap();
    assert_eq!(error.code, ERROR_INVALID_PARAMS);
    assert!(error.message.contains("Missing parameters"));
}

#[tokio::test]
async fn test_unknown_tool_is_method_not_found() {
    // Tool resolution happens before the session gate, so this needs no token
    let response = send_expecting_response(json!({
        "jsonrpc": "2.0",
        "id": 9,
        "method": "tools/call",
        "params": {"name": "launch_rockets", "arguments": {}}
    }))
    .await;

    let error = response.error.unwrap();
    assert_eq!(error.code, ERROR_METHOD_NOT_FOUND);
    assert_eq!(error.message, "Unknown tool: launch_rockets");
}

#[tokio::test]
#[serial]
async fn test_tool_call_without_token_succeeds_with_instructions() {
    std::env::remove_var("GARTH_TOKEN");

    let response = send_expecting_response(json!({
        "jsonrpc": "2.0",
        "id": 10,
        "method": "tools/call",
        "params": {"name": "user_profile", "arguments": {}}
    }))
    .await;

    assert!(response.error.is_none(), "gating must not be a protocol error");
    let result = response.result.unwrap();
    assert_eq!(result["isError"], false);
    assert_eq!(result["content"][0]["type"], "text");
    assert_eq!(result["content"][0]["text"], MSG_GARTH_TOKEN_REQUIRED);
}

#[tokio::test]
#[serial]
async fn test_every_advertised_tool_reaches_the_session_gate() {
    std::env::remove_var("GARTH_TOKEN");

    // A tool the catalog advertises but the executor does not recognize
    // would answer with an Unknown tool error here instead of the gate text
    for (i, name) in ALL_TOOLS.iter().enumerate() {
        let response = send_expecting_response(json!({
            "jsonrpc": "2.0",
            "id": 100 + i,
            "method": "tools/call",
            "params": {"name": name, "arguments": {}}
        }))
        .await;

        assert!(response.error.is_none(), "{name}");
        let result = response.result.unwrap();
        assert_eq!(result["content"][0]["text"], MSG_GARTH_TOKEN_REQUIRED, "{name}");
    }
}

#[tokio::test]
#[serial]
async fn test_empty_token_is_treated_as_unset() {
    std::env::set_var("GARTH_TOKEN", "   ");

    let response = send_expecting_response(json!({
        "jsonrpc": "2.0",
        "id": 11,
        "method": "tools/call",
        "params": {"name": "daily_steps", "arguments": {"days": 3}}
    }))
    .await;

    let result = response.result.unwrap();
    assert_eq!(result["content"][0]["text"], MSG_GARTH_TOKEN_REQUIRED);

    std::env::remove_var("GARTH_TOKEN");
}

#[tokio::test]
#[serial]
async fn test_malformed_token_is_invalid_params() {
    std::env::set_var("GARTH_TOKEN", "!!! not base64 !!!");

    let response = send_expecting_response(json!({
        "jsonrpc": "2.0",
        "id": 12,
        "method": "tools/call",
        "params": {"name": "daily_steps", "arguments": {"days": 3}}
    }))
    .await;

    let error = response.error.unwrap();
    assert_eq!(error.code, ERROR_INVALID_PARAMS);
    assert!(error.message.contains("base64"), "{}", error.message);

    std::env::remove_var("GARTH_TOKEN");
}

#[tokio::test]
#[serial]
async fn test_argument_validation_rejects_before_any_request() {
    // A decodable token gets these calls past the session gate; every case
    // below must then fail argument validation without touching the network.
    std::env::set_var("GARTH_TOKEN", common::valid_session_token());

    let cases = [
        (
            json!({"name": "daily_steps", "arguments": {"days": 0}}),
            "days must be at least 1",
        ),
        (
            json!({"name": "weekly_stress", "arguments": {"weeks": -2}}),
            "weeks must be at least 1",
        ),
        (
            json!({"name": "nightly_sleep", "arguments": {"end_date": "soon"}}),
            "expected YYYY-MM-DD",
        ),
        (
            json!({"name": "monthly_activity_summary", "arguments": {"year": 2024, "month": 13}}),
            "expected 1 to 12",
        ),
        (
            json!({"name": "snapshot", "arguments": {"to_date": "2024-06-30"}}),
            "from_date is required",
        ),
        (
            json!({"name": "get_activity_splits", "arguments": {}}),
            "activity_id is required",
        ),
        (
            json!({"name": "daily_steps", "arguments": [1, 2, 3]}),
            "JSON object",
        ),
    ];

    for (i, (params, expected)) in cases.iter().enumerate() {
        let response = send_expecting_response(json!({
            "jsonrpc": "2.0",
            "id": 100 + i,
            "method": "tools/call",
            "params": params
        }))
        .await;

        let error = response.error.expect("argument errors are protocol errors");
        assert_eq!(error.code, ERROR_INVALID_PARAMS, "case {i}");
        assert!(
            error.message.contains(expected),
            "case {i}: {} should contain {expected}",
            error.message
        );
    }

    std::env::remove_var("GARTH_TOKEN");
}

#[tokio::test]
async fn test_tools_call_with_malformed_params_is_invalid_params() {
    let response = send_expecting_response(json!({
        "jsonrpc": "2.0", "id": 20, "method": "tools/call", "params": {"no_name": true}
    }))
    .await;

    let error = response.error.unwrap();
    assert_eq!(error.code, ERROR_INVALID_PARAMS);
    assert!(error.message.contains("Invalid tool call parameters"));
}
