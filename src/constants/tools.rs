// ABOUTME: MCP tool identifier constants to eliminate hardcoded tool names
// ABOUTME: Provides centralized tool name constants organized by functional groups
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! MCP tool identifier constants

/// Profile and account tools
pub const USER_PROFILE: &str = "user_profile";
pub const USER_PROFILE_STATISTICS: &str = "user_profile_statistics";
pub const GET_GEAR: &str = "get_gear";

/// Wellness range tools keyed on an end date plus a day/week/night count
pub const WEEKLY_INTENSITY_MINUTES: &str = "weekly_intensity_minutes";
pub const DAILY_INTENSITY_MINUTES: &str = "daily_intensity_minutes";
pub const DAILY_BODY_BATTERY: &str = "daily_body_battery";
pub const DAILY_HYDRATION: &str = "daily_hydration";
pub const DAILY_STEPS: &str = "daily_steps";
pub const WEEKLY_STEPS: &str = "weekly_steps";
pub const DAILY_HRV: &str = "daily_hrv";
pub const HRV_DATA: &str = "hrv_data";
pub const DAILY_SLEEP: &str = "daily_sleep";
pub const NIGHTLY_SLEEP: &str = "nightly_sleep";
pub const DAILY_STRESS: &str = "daily_stress";
pub const WEEKLY_STRESS: &str = "weekly_stress";

/// Activity tools
pub const GET_ACTIVITIES: &str = "get_activities";
pub const GET_ACTIVITIES_BY_DATE: &str = "get_activities_by_date";
pub const GET_ACTIVITY_DETAILS: &str = "get_activity_details";
pub const GET_ACTIVITY_SPLITS: &str = "get_activity_splits";
pub const GET_ACTIVITY_WEATHER: &str = "get_activity_weather";
pub const MONTHLY_ACTIVITY_SUMMARY: &str = "monthly_activity_summary";
pub const SNAPSHOT: &str = "snapshot";

/// Single-day health tools
pub const GET_RESPIRATION_DATA: &str = "get_respiration_data";
pub const GET_SPO2_DATA: &str = "get_spo2_data";
pub const GET_BLOOD_PRESSURE: &str = "get_blood_pressure";

/// Device tools
pub const GET_DEVICES: &str = "get_devices";
pub const GET_DEVICE_SETTINGS: &str = "get_device_settings";
