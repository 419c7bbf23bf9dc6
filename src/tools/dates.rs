// ABOUTME: Date argument parsing and lookback window arithmetic for tools
// ABOUTME: ISO date validation, end date defaulting, and oldest-first ranges
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Date helpers for tool arguments
//!
//! Range tools take an inclusive `end_date` plus a count of days, weeks, or
//! nights. The window runs backwards from the end date; iteration order is
//! oldest-first so multi-day results read chronologically.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, Local, NaiveDate};

/// Parse an ISO `YYYY-MM-DD` date argument
///
/// # Errors
///
/// Returns an invalid-input error when the value is not a valid ISO date.
pub fn parse_iso_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::invalid_input(format!("Invalid date '{value}': expected YYYY-MM-DD")))
}

/// Resolve an optional end date argument, defaulting to today (local time)
///
/// # Errors
///
/// Returns an invalid-input error when a provided value is not a valid date.
pub fn end_date_or_today(value: Option<&str>) -> AppResult<NaiveDate> {
    match value {
        Some(raw) => parse_iso_date(raw),
        None => Ok(Local::now().date_naive()),
    }
}

/// First day of a window of `count` days ending at `end` inclusive
#[must_use]
pub fn range_start(end: NaiveDate, count: u32) -> NaiveDate {
    end - Duration::days(i64::from(count.saturating_sub(1)))
}

/// Every day of the window, oldest first
#[must_use]
pub fn iter_range(end: NaiveDate, count: u32) -> Vec<NaiveDate> {
    let start = range_start(end, count);
    start.iter_days().take(count as usize).collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn date(value: &str) -> NaiveDate {
        parse_iso_date(value).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(date("2024-01-07").to_string(), "2024-01-07");
        assert!(parse_iso_date("01/07/2024").is_err());
        assert!(parse_iso_date("2024-13-01").is_err());
        assert!(parse_iso_date("yesterday").is_err());
    }

    #[test]
    fn test_end_date_defaults_to_today() {
        let today = Local::now().date_naive();
        assert_eq!(end_date_or_today(None).unwrap(), today);
        assert_eq!(
            end_date_or_today(Some("2024-06-15")).unwrap(),
            date("2024-06-15")
        );
    }

    #[test]
    fn test_range_start_is_inclusive_of_end() {
        assert_eq!(range_start(date("2024-01-07"), 1), date("2024-01-07"));
        assert_eq!(range_start(date("2024-01-07"), 7), date("2024-01-01"));
    }

    #[test]
    fn test_range_start_crosses_month_and_year() {
        assert_eq!(range_start(date("2024-03-01"), 2), date("2024-02-29"));
        assert_eq!(range_start(date("2024-01-01"), 2), date("2023-12-31"));
    }

    #[test]
    fn test_iter_range_is_oldest_first() {
        let days = iter_range(date("2024-01-03"), 3);
        assert_eq!(
            days,
            vec![date("2024-01-01"), date("2024-01-02"), date("2024-01-03")]
        );
    }

    #[test]
    fn test_iter_range_single_day() {
        assert_eq!(iter_range(date("2024-01-03"), 1), vec![date("2024-01-03")]);
    }
}
