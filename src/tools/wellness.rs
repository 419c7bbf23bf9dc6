// ABOUTME: Wellness range tools: steps, sleep, stress, HRV, hydration, battery
// ABOUTME: Fetches daily and weekly stats windows ending at an inclusive date
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Wellness range tools
//!
//! Daily tools hit `{start}/{end}` stats endpoints; weekly tools hit
//! `{end}/{weeks}` endpoints. Per-day tools (`daily_body_battery`,
//! `hrv_data`, `nightly_sleep`) fan out one request per date, oldest first,
//! and skip days without data.

use crate::errors::AppResult;
use crate::garmin::models::UserProfile;
use crate::garmin::GarminClient;
use crate::tools::dates;
use chrono::NaiveDate;
use serde_json::Value;

/// Weekly intensity minutes, one record per week
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn weekly_intensity_minutes(
    client: &GarminClient,
    end: NaiveDate,
    weeks: u32,
) -> AppResult<Value> {
    client
        .connectapi(&format!("usersummary-service/stats/im/weekly/{end}/{weeks}"))
        .await
}

/// Daily intensity minutes per day in the window
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn daily_intensity_minutes(
    client: &GarminClient,
    end: NaiveDate,
    days: u32,
) -> AppResult<Value> {
    let start = dates::range_start(end, days);
    client
        .connectapi(&format!("usersummary-service/stats/im/daily/{start}/{end}"))
        .await
}

/// Body Battery and stress streams, one response body per day with data
///
/// # Errors
///
/// Returns an error when any Connect API call in the window fails.
pub async fn daily_body_battery(
    client: &GarminClient,
    end: NaiveDate,
    days: u32,
) -> AppResult<Value> {
    let mut collected = Vec::new();
    for date in dates::iter_range(end, days) {
        let body = client
            .connectapi(&format!("wellness-service/wellness/dailyStress/{date}"))
            .await?;
        if !body.is_null() {
            collected.push(body);
        }
    }
    Ok(Value::Array(collected))
}

/// Daily hydration totals per day in the window
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn daily_hydration(client: &GarminClient, end: NaiveDate, days: u32) -> AppResult<Value> {
    let start = dates::range_start(end, days);
    client
        .connectapi(&format!(
            "usersummary-service/stats/hydration/daily/{start}/{end}"
        ))
        .await
}

/// Daily step counts per day in the window
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn daily_steps(client: &GarminClient, end: NaiveDate, days: u32) -> AppResult<Value> {
    let start = dates::range_start(end, days);
    client
        .connectapi(&format!(
            "usersummary-service/stats/steps/daily/{start}/{end}"
        ))
        .await
}

/// Step counts aggregated by week
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn weekly_steps(client: &GarminClient, end: NaiveDate, weeks: u32) -> AppResult<Value> {
    client
        .connectapi(&format!(
            "usersummary-service/stats/steps/weekly/{end}/{weeks}"
        ))
        .await
}

/// Daily HRV summaries for the window
///
/// The endpoint wraps the per-day records in an `hrvSummaries` envelope;
/// only the records are returned.
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn daily_hrv(client: &GarminClient, end: NaiveDate, days: u32) -> AppResult<Value> {
    let start = dates::range_start(end, days);
    let body = client
        .connectapi(&format!("hrv-service/hrv/daily/{start}/{end}"))
        .await?;
    Ok(unwrap_hrv_summaries(body))
}

/// Detailed HRV readings, one response body per day with data
///
/// # Errors
///
/// Returns an error when any Connect API call in the window fails.
pub async fn hrv_data(client: &GarminClient, end: NaiveDate, days: u32) -> AppResult<Value> {
    let mut collected = Vec::new();
    for date in dates::iter_range(end, days) {
        let body = client
            .connectapi(&format!("hrv-service/hrv/{date}"))
            .await?;
        if !body.is_null() {
            collected.push(body);
        }
    }
    Ok(Value::Array(collected))
}

/// Daily sleep summaries per day in the window
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn daily_sleep(client: &GarminClient, end: NaiveDate, days: u32) -> AppResult<Value> {
    let start = dates::range_start(end, days);
    client
        .connectapi(&format!(
            "wellness-service/stats/sleep/daily/{start}/{end}"
        ))
        .await
}

/// Nightly sleep details, one record per night that has sleep data
///
/// Nights whose `dailySleepDTO.id` is null never had sleep recorded and are
/// skipped. The movement timeline is withheld unless requested; it dwarfs
/// the rest of the payload.
///
/// # Errors
///
/// Returns an error when the profile lookup or any Connect API call fails.
pub async fn nightly_sleep(
    client: &GarminClient,
    end: NaiveDate,
    nights: u32,
    include_movement: bool,
) -> AppResult<Value> {
    let profile = UserProfile::get(client).await?;
    let display_name = &profile.display_name;

    let mut collected = Vec::new();
    for date in dates::iter_range(end, nights) {
        let body = client
            .connectapi(&format!(
                "wellness-service/wellness/dailySleepData/{display_name}?date={date}&nonSleepBufferMinutes=60"
            ))
            .await?;
        if let Some(night) = extract_night(body, include_movement) {
            collected.push(night);
        }
    }
    Ok(Value::Array(collected))
}

/// Daily stress timeline and summary per day in the window
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn daily_stress(client: &GarminClient, end: NaiveDate, days: u32) -> AppResult<Value> {
    let start = dates::range_start(end, days);
    client
        .connectapi(&format!(
            "usersummary-service/stats/stress/daily/{start}/{end}"
        ))
        .await
}

/// Weekly stress aggregates
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn weekly_stress(client: &GarminClient, end: NaiveDate, weeks: u32) -> AppResult<Value> {
    client
        .connectapi(&format!(
            "usersummary-service/stats/stress/weekly/{end}/{weeks}"
        ))
        .await
}

fn unwrap_hrv_summaries(body: Value) -> Value {
    match body {
        Value::Object(mut map) => map.remove("hrvSummaries").unwrap_or(Value::Null),
        other => other,
    }
}

/// Reduce a nightly sleep response to its DTO (and optionally movement),
/// or None when the night has no recorded sleep
fn extract_night(body: Value, include_movement: bool) -> Option<Value> {
    let Value::Object(mut map) = body else {
        return None;
    };
    let dto = map.remove("dailySleepDTO")?;
    if dto.get("id").is_none_or(Value::is_null) {
        return None;
    }

    let mut night = serde_json::Map::new();
    night.insert("dailySleepDTO".to_owned(), dto);
    if include_movement {
        if let Some(movement) = map.remove("sleepMovement") {
            night.insert("sleepMovement".to_owned(), movement);
        }
    }
    Some(Value::Object(night))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_hrv_summaries_from_envelope() {
        let body = json!({
            "userProfilePk": 2591602,
            "hrvSummaries": [{"calendarDate": "2024-01-01", "lastNightAvg": 52}]
        });
        let summaries = unwrap_hrv_summaries(body);
        assert_eq!(summaries[0]["lastNightAvg"], 52);
    }

    #[test]
    fn test_unwrap_hrv_summaries_passes_arrays_through() {
        let body = json!([{"calendarDate": "2024-01-01"}]);
        assert_eq!(unwrap_hrv_summaries(body.clone()), body);
    }

    #[test]
    fn test_unwrap_hrv_summaries_missing_key_is_null() {
        assert!(unwrap_hrv_summaries(json!({"userProfilePk": 1})).is_null());
    }

    #[test]
    fn test_extract_night_keeps_dto_and_drops_movement_by_default() {
        let body = json!({
            "dailySleepDTO": {"id": 171901841, "sleepTimeSeconds": 25200},
            "sleepMovement": [{"startGMT": "2024-01-01T00:00:00.0"}],
            "wellnessEpochSPO2DataDTOList": []
        });
        let night = extract_night(body, false).unwrap();
        assert_eq!(night["dailySleepDTO"]["id"], 171901841);
        assert!(night.get("sleepMovement").is_none());
        assert!(night.get("wellnessEpochSPO2DataDTOList").is_none());
    }

    #[test]
    fn test_extract_night_includes_movement_on_request() {
        let body = json!({
            "dailySleepDTO": {"id": 171901841},
            "sleepMovement": [{"startGMT": "2024-01-01T00:00:00.0"}]
        });
        let night = extract_night(body, true).unwrap();
        assert_eq!(night["sleepMovement"][0]["startGMT"], "2024-01-01T00:00:00.0");
    }

    #[test]
    fn test_extract_night_skips_unrecorded_nights() {
        let no_sleep = json!({"dailySleepDTO": {"id": null}});
        assert!(extract_night(no_sleep, false).is_none());

        let missing_dto = json!({"sleepMovement": []});
        assert!(extract_night(missing_dto, false).is_none());

        assert!(extract_night(Value::Null, false).is_none());
    }
}
