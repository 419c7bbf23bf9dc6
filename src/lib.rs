// ABOUTME: Main library entry point for the Garth MCP server
// ABOUTME: Exposes Garmin Connect account data to AI assistants over the Model Context Protocol
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Crate-level attributes:
// - recursion_limit: Increased from default 128 to 256 for complex derive macros
//   (serde, thiserror) on deeply nested types like protocol responses
// - deny(unsafe_code): this crate has no business touching unsafe
#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # Garth MCP Server
//!
//! A Model Context Protocol (MCP) server exposing Garmin Connect account data
//! to Claude and other protocol-aware clients. The server resumes a Garmin
//! session from the `GARTH_TOKEN` environment variable and serves tools for
//! activities, sleep, stress, HRV, steps, hydration, devices, and more over
//! stdio.
//!
//! ## Features
//!
//! - **Session resumption**: loads saved `OAuth1`/`OAuth2` tokens from `GARTH_TOKEN`
//! - **Transparent refresh**: expired `OAuth2` access tokens are re-minted from
//!   the stored `OAuth1` token, no re-login required
//! - **MCP protocol**: standard stdio interface for Claude and other AI assistants
//! - **27 tools**: profile, statistics, wellness ranges, activities, devices,
//!   gear, and consolidated snapshots
//!
//! ## Quick Start
//!
//! 1. Log in once with a garth-compatible client and export the session as
//!    `GARTH_TOKEN`
//! 2. Start the server with `garth-mcp-server`
//! 3. Connect from Claude Desktop or any MCP client speaking stdio
//!
//! ## Architecture
//!
//! - **garmin**: session tokens, `OAuth1` signing, token exchange, Connect API client
//! - **mcp**: protocol schema, request routing, stdio transport
//! - **tools**: tool schemas and the executor mapping tool calls to Connect endpoints
//! - **config**: environment-driven runtime configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use garth_mcp_server::config::environment::ServerConfig;
//! use garth_mcp_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Garth MCP Server for domain: {}", config.garmin.domain);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration management
pub mod config;

/// Protocol, endpoint, and tool name constants
pub mod constants;

/// Unified error handling system
pub mod errors;

/// Garmin Connect session and API client
pub mod garmin;

/// Logging configuration and structured logging setup
pub mod logging;

/// Model Context Protocol server implementation
pub mod mcp;

/// MCP tool schemas and execution
pub mod tools;
