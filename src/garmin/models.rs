// ABOUTME: Typed models for the Garmin user profile and user settings endpoints
// ABOUTME: Deserializes camelCase Connect API payloads into snake_case Rust structs
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Profile models
//!
//! Only the two profile endpoints get typed models; every other Connect API
//! payload flows through as untyped JSON. Fields beyond what the tools read
//! are ignored on deserialization, and everything Garmin may omit is
//! optional.

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::garmin::client::GarminClient;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

/// Social profile for the authenticated user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Internal account ID
    pub id: i64,
    /// Profile key used by gear and statistics endpoints
    pub profile_id: i64,
    /// Display name, the URL-safe identifier statistics endpoints key on
    pub display_name: String,
    /// Full name as shown on the profile
    pub full_name: Option<String>,
    /// Login user name
    pub user_name: Option<String>,
    /// Profile page display variant of the full name
    pub user_profile_full_name: Option<String>,
    /// Favorite activity type keys
    pub favorite_activity_types: Option<Vec<String>>,
}

impl UserProfile {
    /// Fetch the social profile.
    ///
    /// # Errors
    ///
    /// Returns the underlying request error, or a serialization error when
    /// the response does not carry the expected profile fields.
    pub async fn get(client: &GarminClient) -> AppResult<Self> {
        let value = client.connectapi("userprofile-service/socialProfile").await?;
        serde_json::from_value(value).map_err(|e| {
            AppError::new(
                ErrorCode::SerializationError,
                "social profile response did not match the expected shape",
            )
            .with_source(e)
        })
    }
}

/// Account settings wrapper; the interesting content is in `user_data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Settings record ID
    pub id: Option<i64>,
    /// Biometric and formatting preferences
    pub user_data: UserData,
}

impl UserSettings {
    /// Fetch the user settings.
    ///
    /// # Errors
    ///
    /// Returns the underlying request error, or a serialization error when
    /// the response does not carry a `userData` object.
    pub async fn get(client: &GarminClient) -> AppResult<Self> {
        let value = client
            .connectapi("userprofile-service/userprofile/user-settings")
            .await?;
        serde_json::from_value(value).map_err(|e| {
            AppError::new(
                ErrorCode::SerializationError,
                "user settings response did not match the expected shape",
            )
            .with_source(e)
        })
    }
}

/// Biometrics, thresholds, and display preferences from user settings.
///
/// Format descriptors (`power_format`, `heart_rate_format`,
/// `first_day_of_week`) are nested objects the tools pass through untouched,
/// so they stay untyped.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// Reported gender
    pub gender: Option<String>,
    /// Weight in grams
    pub weight: Option<f64>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Birth date
    pub birth_date: Option<NaiveDate>,
    /// `metric` or `statute_us`
    pub measurement_system: Option<String>,
    /// Self-reported activity level
    pub activity_level: Option<i64>,
    /// Handedness
    pub handedness: Option<String>,
    /// Power display format descriptor
    pub power_format: Option<Value>,
    /// Heart rate display format descriptor
    pub heart_rate_format: Option<Value>,
    /// First day of week descriptor
    pub first_day_of_week: Option<Value>,
    /// Running VO2 max
    pub vo_2_max_running: Option<f64>,
    /// Cycling VO2 max
    pub vo_2_max_cycling: Option<f64>,
    /// Lactate threshold speed in meters per second
    pub lactate_threshold_speed: Option<f64>,
    /// Lactate threshold heart rate in bpm
    pub lactate_threshold_heart_rate: Option<f64>,
    /// Dive counter
    pub dive_number: Option<i64>,
    /// Intensity minutes calculation method key
    pub intensity_minutes_calc_method: Option<String>,
    /// Moderate intensity HR zone boundary
    pub moderate_intensity_minutes_hr_zone: Option<i64>,
    /// Vigorous intensity HR zone boundary
    pub vigorous_intensity_minutes_hr_zone: Option<i64>,
}
