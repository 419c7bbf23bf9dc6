// ABOUTME: Activity tools: search, per-activity detail, calendar and snapshot
// ABOUTME: Wraps activitylist-service, activity-service, and mobile-gateway
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Activity tools
//!
//! `get_activities` paginates the activity search index and scrubs owner
//! identity fields from each record. The per-activity tools take the
//! `activityId` values the search returns.

use crate::errors::{AppError, AppResult};
use crate::garmin::GarminClient;
use chrono::NaiveDate;
use serde_json::Value;

/// Owner identity and role fields stripped from search results
const STRIPPED_ACTIVITY_KEYS: [&str; 5] = [
    "userRoles",
    "ownerDisplayName",
    "ownerProfileImageUrlSmall",
    "ownerProfileImageUrlMedium",
    "ownerProfileImageUrlLarge",
];

/// Paginated activity search, newest first
///
/// # Errors
///
/// Returns an error when the Connect API call fails or the search does not
/// return a list.
pub async fn get_activities(client: &GarminClient, start: u32, limit: u32) -> AppResult<Value> {
    let activities = client
        .connectapi_with_query(
            "activitylist-service/activities/search/activities",
            &[("start", start.to_string()), ("limit", limit.to_string())],
        )
        .await?;

    let Value::Array(activities) = activities else {
        return Err(AppError::external_service(
            "Garmin Connect",
            "activity search did not return a list",
        ));
    };
    Ok(Value::Array(
        activities.into_iter().map(strip_owner_fields).collect(),
    ))
}

/// Daily activity summary chart for one date
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn get_activities_by_date(client: &GarminClient, date: NaiveDate) -> AppResult<Value> {
    client
        .connectapi(&format!(
            "wellness-service/wellness/dailySummaryChart/?date={date}"
        ))
        .await
}

/// Full detail record for one activity
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn get_activity_details(client: &GarminClient, activity_id: &str) -> AppResult<Value> {
    client
        .connectapi(&format!("activity-service/activity/{activity_id}"))
        .await
}

/// Lap and split breakdown for one activity
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn get_activity_splits(client: &GarminClient, activity_id: &str) -> AppResult<Value> {
    client
        .connectapi(&format!("activity-service/activity/{activity_id}/splits"))
        .await
}

/// Weather conditions recorded for one activity
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn get_activity_weather(client: &GarminClient, activity_id: &str) -> AppResult<Value> {
    client
        .connectapi(&format!("activity-service/activity/{activity_id}/weather"))
        .await
}

/// Calendar month of activities and wellness events
///
/// # Errors
///
/// Returns an error when the month is outside 1 to 12 or the Connect API
/// call fails.
pub async fn monthly_activity_summary(
    client: &GarminClient,
    year: i32,
    month: u32,
) -> AppResult<Value> {
    if !(1..=12).contains(&month) {
        return Err(AppError::invalid_input(format!(
            "Invalid month {month}: expected 1 to 12"
        )));
    }
    client
        .connectapi(&format!("mobile-gateway/calendar/year/{year}/month/{month}"))
        .await
}

/// Cross-domain snapshot over an inclusive date range
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn snapshot(
    client: &GarminClient,
    from_date: NaiveDate,
    to_date: NaiveDate,
) -> AppResult<Value> {
    client
        .connectapi(&format!(
            "mobile-gateway/snapshot/detail/v2/{from_date}/{to_date}"
        ))
        .await
}

fn strip_owner_fields(activity: Value) -> Value {
    match activity {
        Value::Object(mut map) => {
            for key in STRIPPED_ACTIVITY_KEYS {
                map.remove(key);
            }
            Value::Object(map)
        }
        other => other,
    }
}
