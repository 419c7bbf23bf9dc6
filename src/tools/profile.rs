// ABOUTME: Profile tools: merged user profile, aggregate statistics, and gear
// ABOUTME: Combines social profile and user settings into agent-friendly JSON
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Profile and account tools
//!
//! `user_profile` flattens the social profile and user settings into one
//! snake_case object. `user_profile_statistics` aggregates current-year,
//! last-12-months, and lifetime totals, adding km and hour conversions.

use crate::errors::{AppError, AppResult};
use crate::garmin::models::{UserData, UserProfile, UserSettings};
use crate::garmin::GarminClient;
use serde_json::{json, Value};
use tracing::warn;

/// Merged profile and settings for the authenticated user
///
/// # Errors
///
/// Returns an error when either profile endpoint fails or the session is
/// unusable.
pub async fn user_profile(client: &GarminClient) -> AppResult<Value> {
    let profile = UserProfile::get(client).await?;
    let settings = UserSettings::get(client).await?;
    Ok(merge_profile(&profile, &settings.user_data))
}

/// Aggregate activity statistics for the authenticated user
///
/// Current-year totals, last-12-months totals, and lifetime totals. The
/// lifetime endpoint rejects some accounts with 403; that failure degrades
/// to an empty object rather than failing the whole tool.
///
/// # Errors
///
/// Returns an error when the statistics endpoints fail or respond with an
/// unexpected shape.
pub async fn user_profile_statistics(client: &GarminClient) -> AppResult<Value> {
    let profile = UserProfile::get(client).await?;
    let display_name = &profile.display_name;

    let data = client
        .connectapi(&format!("userstats-service/statistics/{display_name}"))
        .await?;
    let activities = activity_totals(&data)?;

    let prev_data = client
        .connectapi(&format!(
            "userstats-service/statistics/previousDays/{display_name}"
        ))
        .await?;
    let last_12_months = activity_totals(&prev_data)?;

    let lifetime = match client
        .connectapi(&format!(
            "usersummary-service/stats/connectLifetimeTotals/{display_name}"
        ))
        .await
    {
        Ok(totals) => lifetime_totals(&totals),
        Err(e) => {
            // Some accounts get a 403 from this endpoint when addressed by
            // display name; degrade instead of failing the whole call
            warn!(error = %e, "Lifetime totals unavailable, continuing without them");
            json!({})
        }
    };

    Ok(json!({
        "lifetime_totals": {
            "activities": activities,
            "lifetime_totals": lifetime,
        },
        "last_12_months": last_12_months,
    }))
}

/// Gear linked to the user's profile
///
/// # Errors
///
/// Returns an error when the profile or gear endpoint fails.
pub async fn get_gear(client: &GarminClient) -> AppResult<Value> {
    let profile = UserProfile::get(client).await?;
    client
        .connectapi(&format!(
            "gear-service/gear/filterGear?userProfilePk={}",
            profile.profile_id
        ))
        .await
}

/// Flatten profile identity and settings into the merged tool result
fn merge_profile(profile: &UserProfile, user_data: &UserData) -> Value {
    json!({
        "id": profile.id,
        "profile_id": profile.profile_id,
        "display_name": profile.display_name,
        "full_name": profile.full_name,
        "user_name": profile.user_name,
        "user_profile_full_name": profile.user_profile_full_name,
        "favorite_activity_types": profile.favorite_activity_types,
        "gender": user_data.gender,
        "weight": user_data.weight,
        "height": user_data.height,
        "birth_date": user_data.birth_date,
        "measurement_system": user_data.measurement_system,
        "activity_level": user_data.activity_level,
        "handedness": user_data.handedness,
        "power_format": user_data.power_format,
        "heart_rate_format": user_data.heart_rate_format,
        "first_day_of_week": user_data.first_day_of_week,
        "vo_2_max_running": user_data.vo_2_max_running,
        "vo_2_max_cycling": user_data.vo_2_max_cycling,
        "lactate_threshold_speed": user_data.lactate_threshold_speed,
        "lactate_threshold_heart_rate": user_data.lactate_threshold_heart_rate,
        "dive_number": user_data.dive_number,
        "intensity_minutes_calc_method": user_data.intensity_minutes_calc_method,
        "moderate_intensity_minutes_hr_zone": user_data.moderate_intensity_minutes_hr_zone,
        "vigorous_intensity_minutes_hr_zone": user_data.vigorous_intensity_minutes_hr_zone,
    })
}

/// Snake_case activity totals from a statistics response, with km added for
/// distances of at least 1000 m and hours for durations of at least 3600 s
fn activity_totals(data: &Value) -> AppResult<Value> {
    let metrics = data
        .get("userMetrics")
        .and_then(|m| m.get(0))
        .ok_or_else(|| {
            AppError::external_service(
                "Garmin Connect",
                "statistics response missing userMetrics",
            )
        })?;

    let mut totals = serde_json::Map::new();
    for (snake, camel) in [
        ("total_activities", "totalActivities"),
        ("total_distance", "totalDistance"),
        ("total_duration", "totalDuration"),
        ("total_calories", "totalCalories"),
        ("total_elevation_gain", "totalElevationGain"),
    ] {
        totals.insert(
            snake.to_owned(),
            metrics.get(camel).cloned().unwrap_or(Value::Null),
        );
    }

    if let Some(distance) = metrics.get("totalDistance").and_then(Value::as_f64) {
        if distance >= 1000.0 {
            totals.insert("total_distance_km".to_owned(), json!(round2(distance / 1000.0)));
        }
    }
    if let Some(duration) = metrics.get("totalDuration").and_then(Value::as_f64) {
        if duration >= 3600.0 {
            totals.insert(
                "total_duration_hours".to_owned(),
                json!(round2(duration / 3600.0)),
            );
        }
    }

    Ok(Value::Object(totals))
}

/// Snake_case lifetime totals; km conversions here are unconditional
fn lifetime_totals(totals: &Value) -> Value {
    json!({
        "total_distance": totals.get("totalDistance").cloned().unwrap_or(Value::Null),
        "total_distance_km": totals
            .get("totalDistance")
            .and_then(Value::as_f64)
            .map(|d| round2(d / 1000.0)),
        "total_steps": totals.get("totalSteps").cloned().unwrap_or(Value::Null),
        "total_calories": totals.get("totalCalories").cloned().unwrap_or(Value::Null),
        "total_goals_met_in_days": totals
            .get("totalGoalsMetInDays")
            .cloned()
            .unwrap_or(Value::Null),
        "total_active_days": totals.get("totalActiveDays").cloned().unwrap_or(Value::Null),
        "total_wellness_distance": totals
            .get("totalWellnessDistance")
            .cloned()
            .unwrap_or(Value::Null),
        "total_wellness_distance_km": totals
            .get("totalWellnessDistance")
            .and_then(Value::as_f64)
            .map(|d| round2(d / 1000.0)),
        "total_step_calories": totals
            .get("totalStepCalories")
            .cloned()
            .unwrap_or(Value::Null),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn sample_profile() -> UserProfile {
        serde_json::from_value(json!({
            "id": 3154645,
            "profileId": 2591602,
            "displayName": "73240e81-6e4d-43fc-8af8-c8f6c51b3b8f",
            "fullName": "Test User",
            "userName": "testuser",
            "userProfileFullName": "Test User",
            "favoriteActivityTypes": ["running"]
        }))
        .unwrap()
    }

    fn sample_user_data() -> UserData {
        serde_json::from_value(json!({
            "gender": "MALE",
            "weight": 60000.0,
            "height": 162.0,
            "birthDate": "1984-10-17",
            "measurementSystem": "metric",
            "activityLevel": 6,
            "handedness": "RIGHT",
            "vo2MaxRunning": 48.0,
            "intensityMinutesCalcMethod": "AUTO"
        }))
        .unwrap()
    }

    #[test]
    fn test_merge_profile_emits_flat_snake_case() {
        let merged = merge_profile(&sample_profile(), &sample_user_data());

        assert_eq!(merged["profile_id"], 2591602);
        assert_eq!(merged["display_name"], "73240e81-6e4d-43fc-8af8-c8f6c51b3b8f");
        assert_eq!(merged["gender"], "MALE");
        assert_eq!(merged["birth_date"], "1984-10-17");
        assert_eq!(merged["vo_2_max_running"], 48.0);
        // Fields the settings payload never carried come through as null
        assert!(merged["dive_number"].is_null());
        assert_eq!(merged.as_object().unwrap().len(), 25);
    }

    #[test]
    fn test_activity_totals_adds_conversions_over_thresholds() {
        let data = json!({
            "userMetrics": [{
                "totalActivities": 124,
                "totalDistance": 1_250_000.0,
                "totalDuration": 72000.0,
                "totalCalories": 85000,
                "totalElevationGain": 45000
            }]
        });
        let totals = activity_totals(&data).unwrap();

        assert_eq!(totals["total_activities"], 124);
        assert_eq!(totals["total_distance_km"], json!(1250.0));
        assert_eq!(totals["total_duration_hours"], json!(20.0));
    }

    #[test]
    fn test_activity_totals_skips_conversions_under_thresholds() {
        let data = json!({
            "userMetrics": [{
                "totalActivities": 2,
                "totalDistance": 900.0,
                "totalDuration": 1800.0,
                "totalCalories": 150,
                "totalElevationGain": 10
            }]
        });
        let totals = activity_totals(&data).unwrap();

        assert!(totals.get("total_distance_km").is_none());
        assert!(totals.get("total_duration_hours").is_none());
        assert_eq!(totals["total_distance"], json!(900.0));
    }

    #[test]
    fn test_activity_totals_tolerates_null_metrics() {
        let data = json!({
            "userMetrics": [{
                "totalActivities": 0,
                "totalDistance": null,
                "totalDuration": null,
                "totalCalories": null,
                "totalElevationGain": null
            }]
        });
        let totals = activity_totals(&data).unwrap();

        assert!(totals["total_distance"].is_null());
        assert!(totals.get("total_distance_km").is_none());
    }

    #[test]
    fn test_activity_totals_requires_user_metrics() {
        let error = activity_totals(&json!({"userMetrics": []})).unwrap_err();
        assert!(error.message.contains("userMetrics"));
        assert!(activity_totals(&json!({})).is_err());
    }

    #[test]
    fn test_lifetime_totals_converts_unconditionally() {
        let totals = lifetime_totals(&json!({
            "totalDistance": 5_432_100.0,
            "totalSteps": 54_730_927_u64,
            "totalCalories": 1_250_000,
            "totalGoalsMetInDays": 234,
            "totalActiveDays": 456,
            "totalWellnessDistance": 1_234_000.0,
            "totalStepCalories": 890_000
        }));

        assert_eq!(totals["total_distance_km"], json!(5432.1));
        assert_eq!(totals["total_wellness_distance_km"], json!(1234.0));
        assert_eq!(totals["total_steps"], json!(54_730_927_u64));
    }

    #[test]
    fn test_round2() {
        assert!((round2(1234.5678) - 1234.57).abs() < 1e-9);
        assert!((round2(20.0) - 20.0).abs() < 1e-9);
    }
}
