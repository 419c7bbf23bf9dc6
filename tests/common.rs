// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, handler construction, and session token fixtures
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
#![allow(missing_docs)]

//! Shared test utilities for `garth_mcp_server`

use garth_mcp_server::config::GarminConfig;
use garth_mcp_server::garmin::{GarminClient, OAuth1Token, OAuth2Token, SessionTokens};
use garth_mcp_server::mcp::{McpRequest, ProtocolHandler};
use garth_mcp_server::tools::ToolExecutor;
use serde_json::Value;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Protocol handler wired exactly like the server binary wires it
pub fn handler() -> ProtocolHandler {
    init_test_logging();
    let config = GarminConfig {
        domain: "garmin.com".to_owned(),
    };
    let client = GarminClient::new(&config).expect("HTTP client construction");
    ProtocolHandler::new(ToolExecutor::new(client))
}

/// Build an `McpRequest` from a raw JSON message
pub fn request(message: Value) -> McpRequest {
    serde_json::from_value(message).expect("valid MCP request JSON")
}

/// A structurally valid session token whose `OAuth2` half is far from expiry.
/// Good enough to pass token decoding; requests signed with it would be
/// rejected upstream, so tests using it must fail before any HTTP call.
pub fn valid_session_token() -> String {
    let tokens = SessionTokens {
        oauth1: OAuth1Token::new("test-oauth1-token", "test-oauth1-secret"),
        oauth2: OAuth2Token {
            scope: "CONNECT_READ CONNECT_WRITE".to_owned(),
            jti: "test-jti".to_owned(),
            token_type: "Bearer".to_owned(),
            access_token: "test-access-token".to_owned(),
            refresh_token: "test-refresh-token".to_owned(),
            expires_in: 3599,
            expires_at: chrono::Utc::now().timestamp() + 86_400,
            refresh_token_expires_in: 7199,
            refresh_token_expires_at: chrono::Utc::now().timestamp() + 172_800,
        },
    };
    tokens.dumps().expect("token pair encodes")
}
