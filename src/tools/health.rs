// ABOUTME: Health and device tools: respiration, SpO2, blood pressure, devices
// ABOUTME: Single-request lookups keyed by date or device id
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Health metric and device tools

use crate::errors::AppResult;
use crate::garmin::GarminClient;
use chrono::NaiveDate;
use serde_json::Value;

/// Respiration rate readings for one day
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn get_respiration_data(client: &GarminClient, date: NaiveDate) -> AppResult<Value> {
    client
        .connectapi(&format!(
            "wellness-service/wellness/daily/respiration/{date}"
        ))
        .await
}

/// Pulse oximetry acclimation readings for one day
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn get_spo2_data(client: &GarminClient, date: NaiveDate) -> AppResult<Value> {
    client
        .connectapi(&format!(
            "wellness-service/wellness/daily/spo2acclimation/{date}"
        ))
        .await
}

/// Blood pressure measurements for one day
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn get_blood_pressure(client: &GarminClient, date: NaiveDate) -> AppResult<Value> {
    client
        .connectapi(&format!("bloodpressure-service/bloodpressure/dayview/{date}"))
        .await
}

/// All devices registered to the account
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn get_devices(client: &GarminClient) -> AppResult<Value> {
    client
        .connectapi("device-service/deviceregistration/devices")
        .await
}

/// Settings for one registered device
///
/// # Errors
///
/// Returns an error when the Connect API call fails.
pub async fn get_device_settings(client: &GarminClient, device_id: &str) -> AppResult<Value> {
    client
        .connectapi(&format!(
            "device-service/deviceservice/device-info/settings/{device_id}"
        ))
        .await
}
