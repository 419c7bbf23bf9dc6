// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups protocol, error, endpoint, and tool name constants by domain
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constants module
//!
//! Application constants organized by domain rather than a single large file.

use std::env;

// Domain-specific modules
pub mod endpoints;
pub mod errors;
pub mod protocol;
pub mod tools;

/// Environment variable names
pub mod env_vars {
    /// Base64 session token pair produced by a garth-compatible login
    pub const GARTH_TOKEN: &str = "GARTH_TOKEN";
    /// Garmin domain override (`garmin.cn` for mainland China accounts)
    pub const GARMIN_DOMAIN: &str = "GARMIN_DOMAIN";
    /// Log level override when `RUST_LOG` is not set
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Log output format: pretty, compact, or json
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// MCP protocol revision override
    pub const MCP_PROTOCOL_VERSION: &str = "MCP_PROTOCOL_VERSION";
    /// Server name override in the initialize response
    pub const SERVER_NAME: &str = "SERVER_NAME";
}

/// Environment-based configuration
pub mod env_config {
    use super::{env, env_vars};

    /// Get the Garmin domain from environment or default
    #[must_use]
    pub fn garmin_domain() -> String {
        env::var(env_vars::GARMIN_DOMAIN)
            .ok()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| super::endpoints::DEFAULT_GARMIN_DOMAIN.into())
    }

    /// Get the session token from environment, treating empty as unset
    #[must_use]
    pub fn garth_token() -> Option<String> {
        env::var(env_vars::GARTH_TOKEN)
            .ok()
            .filter(|t| !t.trim().is_empty())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var(env_vars::LOG_LEVEL).unwrap_or_else(|_| "info".into())
    }
}

/// Field names for tool call arguments
pub mod json_fields {
    /// Inclusive end date of a lookback window
    pub const END_DATE: &str = "end_date";
    /// Number of days in a lookback window
    pub const DAYS: &str = "days";
    /// Number of weeks in a lookback window
    pub const WEEKS: &str = "weeks";
    /// Number of nights in a lookback window
    pub const NIGHTS: &str = "nights";
    /// Include the detailed sleep movement timeline
    pub const SLEEP_MOVEMENT: &str = "sleep_movement";
    /// Single date field
    pub const DATE: &str = "date";
    /// Pagination start index
    pub const START: &str = "start";
    /// Pagination page size
    pub const LIMIT: &str = "limit";
    /// Garmin Connect activity ID
    pub const ACTIVITY_ID: &str = "activity_id";
    /// Garmin Connect device ID
    pub const DEVICE_ID: &str = "device_id";
    /// Calendar month (1-12)
    pub const MONTH: &str = "month";
    /// Four-digit year
    pub const YEAR: &str = "year";
    /// Range start date
    pub const FROM_DATE: &str = "from_date";
    /// Range end date
    pub const TO_DATE: &str = "to_date";
}

/// Request handling limits
pub mod limits {
    /// Default page size for activity listings
    pub const DEFAULT_ACTIVITIES_LIMIT: u32 = 20;
    /// HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Maximum retries for rate-limited Connect API calls
    pub const MAX_RETRIES: u32 = 3;
    /// Base backoff between retries in milliseconds
    pub const RETRY_BACKOFF_MS: u64 = 1000;
}
