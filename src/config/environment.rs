// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration management

use crate::constants::{endpoints, env_config, env_vars, protocol};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Full tracing output
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Garmin Connect client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarminConfig {
    /// Garmin domain the Connect API host is derived from
    /// (`garmin.com`, or `garmin.cn` for mainland China accounts)
    pub domain: String,
}

impl GarminConfig {
    /// Connect API base URL for the configured domain
    #[must_use]
    pub fn connectapi_base(&self) -> String {
        endpoints::connectapi_base(&self.domain)
    }
}

/// MCP protocol configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// MCP protocol version
    pub mcp_version: String,
    /// Server name reported in the initialize response
    pub server_name: String,
    /// Server version (from Cargo.toml)
    pub server_version: String,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Garmin client configuration
    pub garmin: GarminConfig,
    /// Protocol configuration
    pub protocol: ProtocolConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `GARMIN_DOMAIN` is set to something that is not a
    /// bare domain name.
    pub fn from_env() -> Result<Self> {
        let domain = env_config::garmin_domain();
        if domain.contains('/') || domain.contains("://") {
            bail!(
                "{} must be a bare domain like 'garmin.com', got '{domain}'",
                env_vars::GARMIN_DOMAIN
            );
        }

        let config = Self {
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            garmin: GarminConfig { domain },
            protocol: ProtocolConfig {
                mcp_version: protocol::mcp_protocol_version(),
                server_name: protocol::server_name(),
                server_version: protocol::SERVER_VERSION.to_owned(),
            },
        };

        info!(
            garmin.domain = %config.garmin.domain,
            protocol.version = %config.protocol.mcp_version,
            session.configured = env::var(env_vars::GARTH_TOKEN).is_ok(),
            "Configuration loaded from environment"
        );

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            garmin: GarminConfig {
                domain: endpoints::DEFAULT_GARMIN_DOMAIN.into(),
            },
            protocol: ProtocolConfig {
                mcp_version: protocol::mcp_protocol_version(),
                server_name: protocol::server_name(),
                server_version: protocol::SERVER_VERSION.to_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    }

    #[test]
    fn test_log_level_display_round_trip() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ] {
            assert_eq!(LogLevel::from_str_or_default(&level.to_string()), level);
        }
    }

    #[test]
    fn test_default_config_uses_garmin_com() {
        let config = ServerConfig::default();
        assert_eq!(config.garmin.domain, "garmin.com");
        assert_eq!(
            config.garmin.connectapi_base(),
            "https://connectapi.garmin.com"
        );
    }
}
