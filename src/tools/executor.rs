// ABOUTME: Tool call executor gating on session configuration and dispatching by name
// ABOUTME: Parses typed arguments and wraps results in MCP content blocks
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tool call execution
//!
//! Dispatch order: unknown tools are rejected before anything else, then the
//! session gate runs. A missing `GARTH_TOKEN` is not a protocol error; the
//! call succeeds with instructional text so the model can relay it.

use crate::constants::errors::MSG_GARTH_TOKEN_REQUIRED;
use crate::constants::{env_config, json_fields, limits, tools};
use crate::errors::{AppError, AppResult};
use crate::garmin::GarminClient;
use crate::mcp::schema::{Content, ToolCall, ToolResponse};
use crate::tools::{activities, dates, health, profile, registry, wellness};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::debug;

/// Executes tool calls against the Garmin Connect API
pub struct ToolExecutor {
    client: GarminClient,
}

impl ToolExecutor {
    /// Create an executor backed by the given client
    #[must_use]
    pub const fn new(client: GarminClient) -> Self {
        Self { client }
    }

    /// Execute a tool call end to end
    ///
    /// # Errors
    ///
    /// Returns an error when the tool is not advertised, its arguments are
    /// invalid, or the Connect API call fails. A missing session token is
    /// not an error; see the module docs.
    pub async fn execute(&self, call: &ToolCall) -> AppResult<ToolResponse> {
        if !registry::is_known_tool(&call.name) {
            return Err(AppError::unknown_tool(&call.name));
        }
        if env_config::garth_token().is_none() {
            debug!(tool = %call.name, "Tool call without a configured session token");
            return Ok(ToolResponse::text(MSG_GARTH_TOKEN_REQUIRED.to_owned()));
        }

        let args = parse_arguments(call.arguments.as_ref())
            .map_err(|e| e.with_tool(&call.name))?;
        let value = self
            .dispatch(&call.name, &args)
            .await
            .map_err(|e| e.with_tool(&call.name))?;
        wrap_result(value)
    }

    async fn dispatch(&self, name: &str, args: &Map<String, Value>) -> AppResult<Value> {
        let client = &self.client;
        match name {
            tools::USER_PROFILE => profile::user_profile(client).await,
            tools::USER_PROFILE_STATISTICS => profile::user_profile_statistics(client).await,
            tools::GET_GEAR => profile::get_gear(client).await,

            tools::WEEKLY_INTENSITY_MINUTES => {
                let (end, weeks) = window_args(args, json_fields::WEEKS)?;
                wellness::weekly_intensity_minutes(client, end, weeks).await
            }
            tools::DAILY_INTENSITY_MINUTES => {
                let (end, days) = window_args(args, json_fields::DAYS)?;
                wellness::daily_intensity_minutes(client, end, days).await
            }
            tools::DAILY_BODY_BATTERY => {
                let (end, days) = window_args(args, json_fields::DAYS)?;
                wellness::daily_body_battery(client, end, days).await
            }
            tools::DAILY_HYDRATION => {
                let (end, days) = window_args(args, json_fields::DAYS)?;
                wellness::daily_hydration(client, end, days).await
            }
            tools::DAILY_STEPS => {
                let (end, days) = window_args(args, json_fields::DAYS)?;
                wellness::daily_steps(client, end, days).await
            }
            tools::WEEKLY_STEPS => {
                let (end, weeks) = window_args(args, json_fields::WEEKS)?;
                wellness::weekly_steps(client, end, weeks).await
            }
            tools::DAILY_HRV => {
                let (end, days) = window_args(args, json_fields::DAYS)?;
                wellness::daily_hrv(client, end, days).await
            }
            tools::HRV_DATA => {
                let (end, days) = window_args(args, json_fields::DAYS)?;
                wellness::hrv_data(client, end, days).await
            }
            tools::DAILY_SLEEP => {
                let (end, days) = window_args(args, json_fields::DAYS)?;
                wellness::daily_sleep(client, end, days).await
            }
            tools::NIGHTLY_SLEEP => {
                let (end, nights) = window_args(args, json_fields::NIGHTS)?;
                let movement = args
                    .get(json_fields::SLEEP_MOVEMENT)
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                wellness::nightly_sleep(client, end, nights, movement).await
            }
            tools::DAILY_STRESS => {
                let (end, days) = window_args(args, json_fields::DAYS)?;
                wellness::daily_stress(client, end, days).await
            }
            tools::WEEKLY_STRESS => {
                let (end, weeks) = window_args(args, json_fields::WEEKS)?;
                wellness::weekly_stress(client, end, weeks).await
            }

            tools::GET_ACTIVITIES => {
                let start = pagination_arg(args, json_fields::START, 0)?;
                let limit =
                    pagination_arg(args, json_fields::LIMIT, limits::DEFAULT_ACTIVITIES_LIMIT)?;
                activities::get_activities(client, start, limit).await
            }
            tools::GET_ACTIVITIES_BY_DATE => {
                let date = required_date(args, json_fields::DATE)?;
                activities::get_activities_by_date(client, date).await
            }
            tools::GET_ACTIVITY_DETAILS => {
                let id = required_id(args, json_fields::ACTIVITY_ID)?;
                activities::get_activity_details(client, &id).await
            }
            tools::GET_ACTIVITY_SPLITS => {
                let id = required_id(args, json_fields::ACTIVITY_ID)?;
                activities::get_activity_splits(client, &id).await
            }
            tools::GET_ACTIVITY_WEATHER => {
                let id = required_id(args, json_fields::ACTIVITY_ID)?;
                activities::get_activity_weather(client, &id).await
            }
            tools::MONTHLY_ACTIVITY_SUMMARY => {
                let year = i32::try_from(required_i64(args, json_fields::YEAR)?)
                    .map_err(|_| AppError::invalid_input("year is out of range"))?;
                let month = u32::try_from(required_i64(args, json_fields::MONTH)?)
                    .map_err(|_| AppError::invalid_input("Invalid month: expected 1 to 12"))?;
                activities::monthly_activity_summary(client, year, month).await
            }
            tools::SNAPSHOT => {
                let from_date = required_date(args, json_fields::FROM_DATE)?;
                let to_date = required_date(args, json_fields::TO_DATE)?;
                activities::snapshot(client, from_date, to_date).await
            }

            tools::GET_RESPIRATION_DATA => {
                let date = required_date(args, json_fields::DATE)?;
                health::get_respiration_data(client, date).await
            }
            tools::GET_SPO2_DATA => {
                let date = required_date(args, json_fields::DATE)?;
                health::get_spo2_data(client, date).await
            }
            tools::GET_BLOOD_PRESSURE => {
                let date = required_date(args, json_fields::DATE)?;
                health::get_blood_pressure(client, date).await
            }
            tools::GET_DEVICES => health::get_devices(client).await,
            tools::GET_DEVICE_SETTINGS => {
                let id = required_id(args, json_fields::DEVICE_ID)?;
                health::get_device_settings(client, &id).await
            }

            other => Err(AppError::unknown_tool(other)),
        }
    }
}

/// Tool results are serialized JSON text; object results are mirrored in
/// `structuredContent` for clients that consume it
fn wrap_result(value: Value) -> AppResult<ToolResponse> {
    let text = serde_json::to_string(&value)?;
    let structured_content = value.is_object().then_some(value);
    Ok(ToolResponse {
        content: vec![Content::Text { text }],
        is_error: false,
        structured_content,
    })
}

fn parse_arguments(arguments: Option<&Value>) -> AppResult<Map<String, Value>> {
    match arguments {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(_) => Err(AppError::invalid_input(
            "Tool arguments must be a JSON object",
        )),
    }
}

fn optional_str<'a>(args: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    args.get(field).and_then(Value::as_str)
}

fn required_str<'a>(args: &'a Map<String, Value>, field: &str) -> AppResult<&'a str> {
    optional_str(args, field)
        .ok_or_else(|| AppError::invalid_input(format!("{field} is required")))
}

fn required_date(args: &Map<String, Value>, field: &str) -> AppResult<NaiveDate> {
    dates::parse_iso_date(required_str(args, field)?)
}

fn required_i64(args: &Map<String, Value>, field: &str) -> AppResult<i64> {
    args.get(field)
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::invalid_input(format!("{field} is required")))
}

/// Activity and device IDs arrive as strings from most clients but some
/// send the raw numeric ID
fn required_id(args: &Map<String, Value>, field: &str) -> AppResult<String> {
    match args.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(AppError::invalid_input(format!("{field} is required"))),
    }
}

/// End date plus window length shared by every lookback tool
fn window_args(args: &Map<String, Value>, count_field: &str) -> AppResult<(NaiveDate, u32)> {
    let end = dates::end_date_or_today(optional_str(args, json_fields::END_DATE))?;
    let count = match args.get(count_field) {
        None | Some(Value::Null) => 1,
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .filter(|&v| v >= 1)
            .ok_or_else(|| {
                AppError::invalid_input(format!("{count_field} must be at least 1"))
            })?,
    };
    Ok((end, count))
}

fn pagination_arg(args: &Map<String, Value>, field: &str, default: u32) -> AppResult<u32> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| {
                AppError::invalid_input(format!("{field} must be a non-negative integer"))
            }),
    }
}
