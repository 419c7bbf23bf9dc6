// ABOUTME: Server binary speaking MCP over stdio for Garmin Connect data access
// ABOUTME: Wires configuration, logging, the Garmin client, and the transport
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Garth MCP Server Binary
//!
//! Starts the stdio MCP server. The JSON-RPC stream owns stdout; all
//! diagnostics go to stderr. Session credentials come from `GARTH_TOKEN`,
//! produced by any garth-compatible login flow.

use anyhow::Result;
use clap::Parser;
use garth_mcp_server::{
    config::ServerConfig,
    garmin::GarminClient,
    logging::{LogFormat, LoggingConfig},
    mcp::{ProtocolHandler, StdioTransport},
    tools::{registry, ToolExecutor},
};
use tracing::info;

#[derive(Parser)]
#[command(name = "garth-mcp-server")]
#[command(about = "Garmin Connect data for AI assistants over the Model Context Protocol")]
pub struct Args {
    /// Override the log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Override the log format (pretty, compact, json)
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // MCP launchers sometimes pass arguments this binary does not know;
    // fall back to environment-driven defaults rather than dying at startup
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Continuing with environment configuration");
            Args {
                log_level: None,
                log_format: None,
            }
        }
    };

    let mut logging_config = LoggingConfig::from_env();
    if let Some(level) = args.log_level {
        logging_config.level = level;
    }
    if let Some(format) = args.log_format {
        logging_config.format = match format.as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };
    }
    logging_config.init()?;

    let config = ServerConfig::from_env()?;
    let client = GarminClient::new(&config.garmin)?;
    let executor = ToolExecutor::new(client);
    let handler = ProtocolHandler::new(executor);
    let transport = StdioTransport::new(handler, logging_config.truncate_mcp_logs);

    info!(
        server.name = %config.protocol.server_name,
        server.version = %config.protocol.server_version,
        protocol.version = %config.protocol.mcp_version,
        tool_count = registry::ALL_TOOLS.len(),
        "Garth MCP server ready"
    );

    tokio::select! {
        result = transport.run() => {
            result?;
            info!("stdin closed, shutting down");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received interrupt signal, shutting down");
        }
    }

    Ok(())
}
