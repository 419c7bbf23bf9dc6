// ABOUTME: Tool layer mapping MCP tool calls onto Garmin Connect endpoints
// ABOUTME: Catalog, argument handling, and per-domain tool implementations
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! MCP tool layer
//!
//! [`registry`] advertises the catalog, [`executor`] gates and dispatches
//! calls, and the domain modules do the actual Connect API work. Tool
//! results are raw Connect API JSON except where a tool post-processes
//! (profile merging, activity scrubbing, sleep filtering).

/// Activity listing, detail, and calendar tools
pub mod activities;

/// Date parsing and lookback window helpers
pub mod dates;

/// Session gating and tool dispatch
pub mod executor;

/// Single-day health metrics and device tools
pub mod health;

/// Profile, statistics, and gear tools
pub mod profile;

/// Tool catalog advertised through `tools/list`
pub mod registry;

/// Wellness range tools (steps, sleep, stress, HRV, body battery)
pub mod wellness;

pub use executor::ToolExecutor;
