// ABOUTME: Tool catalog with schemas for all Garmin Connect tools
// ABOUTME: Builds the 27 tool definitions advertised through tools/list
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tool catalog
//!
//! One schema per tool, in a stable order. Window tools share the
//! `end_date` + count convention; single-day tools take a required `date`.

use crate::constants::{json_fields, tools};
use crate::mcp::schema::{JsonSchema, PropertySchema, ToolSchema};
use std::collections::HashMap;

/// Every tool name the server answers to, in catalog order
pub const ALL_TOOLS: [&str; 27] = [
    tools::USER_PROFILE,
    tools::USER_PROFILE_STATISTICS,
    tools::WEEKLY_INTENSITY_MINUTES,
    tools::DAILY_BODY_BATTERY,
    tools::DAILY_HYDRATION,
    tools::DAILY_STEPS,
    tools::WEEKLY_STEPS,
    tools::DAILY_HRV,
    tools::HRV_DATA,
    tools::DAILY_SLEEP,
    tools::GET_ACTIVITIES,
    tools::GET_ACTIVITIES_BY_DATE,
    tools::GET_ACTIVITY_DETAILS,
    tools::GET_ACTIVITY_SPLITS,
    tools::GET_ACTIVITY_WEATHER,
    tools::GET_RESPIRATION_DATA,
    tools::GET_SPO2_DATA,
    tools::GET_BLOOD_PRESSURE,
    tools::GET_DEVICES,
    tools::GET_DEVICE_SETTINGS,
    tools::GET_GEAR,
    tools::NIGHTLY_SLEEP,
    tools::DAILY_STRESS,
    tools::WEEKLY_STRESS,
    tools::DAILY_INTENSITY_MINUTES,
    tools::MONTHLY_ACTIVITY_SUMMARY,
    tools::SNAPSHOT,
];

/// Whether a tool name is in the catalog
#[must_use]
pub fn is_known_tool(name: &str) -> bool {
    ALL_TOOLS.contains(&name)
}

/// Get all available tool schemas in catalog order
#[must_use]
pub fn get_tools() -> Vec<ToolSchema> {
    vec![
        create_user_profile_tool(),
        create_user_profile_statistics_tool(),
        window_tool(
            tools::WEEKLY_INTENSITY_MINUTES,
            "Weekly intensity minutes summary over a lookback window.",
            json_fields::WEEKS,
            "Number of weeks ending at end_date. Default 1.",
        ),
        window_tool(
            tools::DAILY_BODY_BATTERY,
            "Daily Body Battery and stress streams for a date range. Some samples may be modeled estimates rather than measured values.",
            json_fields::DAYS,
            "Number of days ending at end_date. Default 1.",
        ),
        window_tool(
            tools::DAILY_HYDRATION,
            "Daily hydration totals per day.",
            json_fields::DAYS,
            "Number of days ending at end_date. Default 1.",
        ),
        window_tool(
            tools::DAILY_STEPS,
            "Daily step counts per day.",
            json_fields::DAYS,
            "Number of days ending at end_date. Default 1.",
        ),
        window_tool(
            tools::WEEKLY_STEPS,
            "Total step counts aggregated by week.",
            json_fields::WEEKS,
            "Number of weeks ending at end_date. Default 1.",
        ),
        window_tool(
            tools::DAILY_HRV,
            "Daily HRV summaries including last-night averages and baseline windows.",
            json_fields::DAYS,
            "Number of days ending at end_date. Default 1.",
        ),
        window_tool(
            tools::HRV_DATA,
            "Detailed HRV readings for each day, more granular than daily_hrv.",
            json_fields::DAYS,
            "Number of days ending at end_date. Default 1.",
        ),
        window_tool(
            tools::DAILY_SLEEP,
            "Daily sleep summaries per day (duration, efficiency, scores).",
            json_fields::DAYS,
            "Number of days ending at end_date. Default 1.",
        ),
        create_get_activities_tool(),
        single_date_tool(
            tools::GET_ACTIVITIES_BY_DATE,
            "Daily activity summary chart data for a specific date.",
        ),
        activity_id_tool(
            tools::GET_ACTIVITY_DETAILS,
            "Detailed information for a specific activity: metadata, distance, duration, and summary statistics.",
        ),
        activity_id_tool(
            tools::GET_ACTIVITY_SPLITS,
            "Lap and split data for a specific activity.",
        ),
        activity_id_tool(
            tools::GET_ACTIVITY_WEATHER,
            "Weather snapshot associated with an activity.",
        ),
        single_date_tool(
            tools::GET_RESPIRATION_DATA,
            "Respiration (breaths per minute) timeline for a day.",
        ),
        single_date_tool(
            tools::GET_SPO2_DATA,
            "Pulse oximetry (SpO2) acclimation data for a day.",
        ),
        single_date_tool(
            tools::GET_BLOOD_PRESSURE,
            "Blood pressure readings for a given day.",
        ),
        no_params_tool(
            tools::GET_DEVICES,
            "List devices registered to the user's account.",
        ),
        create_get_device_settings_tool(),
        no_params_tool(
            tools::GET_GEAR,
            "List gear (shoes, equipment) linked to the user's profile.",
        ),
        create_nightly_sleep_tool(),
        window_tool(
            tools::DAILY_STRESS,
            "Daily stress timeline and summary statistics per day.",
            json_fields::DAYS,
            "Number of days ending at end_date. Default 1.",
        ),
        window_tool(
            tools::WEEKLY_STRESS,
            "Weekly stress aggregates over a lookback window.",
            json_fields::WEEKS,
            "Number of weeks ending at end_date. Default 1.",
        ),
        window_tool(
            tools::DAILY_INTENSITY_MINUTES,
            "Daily intensity minutes (moderate and vigorous) per day.",
            json_fields::DAYS,
            "Number of days ending at end_date. Default 1.",
        ),
        create_monthly_activity_summary_tool(),
        create_snapshot_tool(),
    ]
}

fn string_prop(description: &str) -> PropertySchema {
    PropertySchema {
        property_type: "string".into(),
        description: Some(description.into()),
    }
}

fn number_prop(description: &str) -> PropertySchema {
    PropertySchema {
        property_type: "number".into(),
        description: Some(description.into()),
    }
}

fn boolean_prop(description: &str) -> PropertySchema {
    PropertySchema {
        property_type: "boolean".into(),
        description: Some(description.into()),
    }
}

fn object_schema(
    properties: HashMap<String, PropertySchema>,
    required: Vec<String>,
) -> JsonSchema {
    JsonSchema {
        schema_type: "object".into(),
        properties: Some(properties),
        required: Some(required),
    }
}

/// Tool with no arguments
fn no_params_tool(name: &str, description: &str) -> ToolSchema {
    ToolSchema {
        name: name.into(),
        description: description.into(),
        input_schema: object_schema(HashMap::new(), vec![]),
    }
}

/// Lookback window tool: optional `end_date` plus a count argument
fn window_tool(name: &str, description: &str, count_field: &str, count_doc: &str) -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        json_fields::END_DATE.to_owned(),
        string_prop("End date YYYY-MM-DD, inclusive. Defaults to today."),
    );
    properties.insert(count_field.to_owned(), number_prop(count_doc));

    ToolSchema {
        name: name.into(),
        description: description.into(),
        input_schema: object_schema(properties, vec![]),
    }
}

/// Tool keyed on one required `date`
fn single_date_tool(name: &str, description: &str) -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        json_fields::DATE.to_owned(),
        string_prop("Date YYYY-MM-DD."),
    );

    ToolSchema {
        name: name.into(),
        description: description.into(),
        input_schema: object_schema(properties, vec![json_fields::DATE.to_owned()]),
    }
}

/// Tool keyed on one required `activity_id`
fn activity_id_tool(name: &str, description: &str) -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        json_fields::ACTIVITY_ID.to_owned(),
        string_prop("Garmin Connect activity ID."),
    );

    ToolSchema {
        name: name.into(),
        description: description.into(),
        input_schema: object_schema(properties, vec![json_fields::ACTIVITY_ID.to_owned()]),
    }
}

fn create_user_profile_tool() -> ToolSchema {
    no_params_tool(
        tools::USER_PROFILE,
        "Retrieve the authenticated user's Garmin Connect profile: identity, physiology, and unit preferences merged from the social profile and user settings.",
    )
}

fn create_user_profile_statistics_tool() -> ToolSchema {
    no_params_tool(
        tools::USER_PROFILE_STATISTICS,
        "Aggregate activity statistics: current-year and last-12-months totals plus lifetime steps, distance, and calories. Distances gain km conversions and durations gain hour conversions where large enough.",
    )
}

fn create_get_activities_tool() -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        json_fields::START.to_owned(),
        number_prop("Zero-based index to start from. Default 0."),
    );
    properties.insert(
        json_fields::LIMIT.to_owned(),
        number_prop("Maximum number of activities to return. Default 20."),
    );

    ToolSchema {
        name: tools::GET_ACTIVITIES.into(),
        description: "List recent activities from Garmin Connect. Use start and limit to paginate: (0,20), (20,20), and so on. Owner and role fields are removed for brevity.".into(),
        input_schema: object_schema(properties, vec![]),
    }
}

fn create_get_device_settings_tool() -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        json_fields::DEVICE_ID.to_owned(),
        string_prop("Device ID from Garmin Connect."),
    );

    ToolSchema {
        name: tools::GET_DEVICE_SETTINGS.into(),
        description: "Settings for a specific registered device.".into(),
        input_schema: object_schema(properties, vec![json_fields::DEVICE_ID.to_owned()]),
    }
}

fn create_nightly_sleep_tool() -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        json_fields::END_DATE.to_owned(),
        string_prop("End date YYYY-MM-DD, inclusive. Defaults to today."),
    );
    properties.insert(
        json_fields::NIGHTS.to_owned(),
        number_prop("Number of nights ending at end_date. Default 1."),
    );
    properties.insert(
        json_fields::SLEEP_MOVEMENT.to_owned(),
        boolean_prop("Include the detailed movement timeline. Large for multi-night ranges."),
    );

    ToolSchema {
        name: tools::NIGHTLY_SLEEP.into(),
        description: "Nightly sleep stats and stages, optionally including the movement timeline."
            .into(),
        input_schema: object_schema(properties, vec![]),
    }
}

fn create_monthly_activity_summary_tool() -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        json_fields::MONTH.to_owned(),
        number_prop("Calendar month, 1-12."),
    );
    properties.insert(json_fields::YEAR.to_owned(), number_prop("Four-digit year."));

    ToolSchema {
        name: tools::MONTHLY_ACTIVITY_SUMMARY.into(),
        description: "Monthly activity calendar summary for a given month and year.".into(),
        input_schema: object_schema(
            properties,
            vec![json_fields::MONTH.to_owned(), json_fields::YEAR.to_owned()],
        ),
    }
}

fn create_snapshot_tool() -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        json_fields::FROM_DATE.to_owned(),
        string_prop("Range start date YYYY-MM-DD."),
    );
    properties.insert(
        json_fields::TO_DATE.to_owned(),
        string_prop("Range end date YYYY-MM-DD."),
    );

    ToolSchema {
        name: tools::SNAPSHOT.into(),
        description: "Consolidated snapshot across steps, stress, sleep, and more for a date range. A good starting point before reaching for the specialized tools.".into(),
        input_schema: object_schema(
            properties,
            vec![
                json_fields::FROM_DATE.to_owned(),
                json_fields::TO_DATE.to_owned(),
            ],
        ),
    }
}
