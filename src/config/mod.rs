// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Handles environment-derived runtime options for the MCP server and Garmin client
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration module for the Garth MCP server
//!
//! - **Environment**: server configuration from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{GarminConfig, ServerConfig};
