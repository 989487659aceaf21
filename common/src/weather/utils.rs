// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Small formatting helpers for turning raw weather data into display strings.

use chrono::{DateTime, NaiveTime};
use chrono_tz::Tz;

/// Millimeters of mercury per hectopascal.
pub const PRESSURE_UNITS: f64 = 0.750062;

/// Rendered by [`time_string`] when the timestamp does not denote a valid instant.
pub const INVALID_DATE: &str = "Invalid Date";

/// Time zone all timestamps are displayed in. Reykjavik stays on UTC+0 all year.
const DISPLAY_TIME_ZONE: Tz = chrono_tz::Atlantic::Reykjavik;

/// Time-of-day pattern of the `ru-RU` locale.
const RU_TIME_FORMAT: &str = "%H:%M:%S";

/// Largest distance from the epoch, in milliseconds, that is still a valid date.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Returns `text` with its first character upper-cased and the rest unchanged.
///
/// An absent or empty text yields an empty string.
pub fn capitalize_first_letter(text: Option<&str>) -> String {
    let mut chars = text.unwrap_or_default().chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// Converts a pressure in hPa to mmHg, rounded to the nearest whole number.
///
/// Ties round toward positive infinity, so `-2.5` becomes `-2`. NaN and
/// infinities are passed through.
pub fn pressure_mm(hpa: f64) -> f64 {
    round_half_up(hpa * PRESSURE_UNITS)
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Formats a Unix timestamp in seconds as `HH:MM:SS` in Reykjavik time.
///
/// Returns [`INVALID_DATE`] for non-finite or out of range timestamps.
pub fn time_string(seconds: f64) -> String {
    let millis = (seconds * 1000.0).trunc();
    if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
        return INVALID_DATE.to_string();
    }

    let millis = millis as i64;
    match DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc
            .with_timezone(&DISPLAY_TIME_ZONE)
            .format(RU_TIME_FORMAT)
            .to_string(),
        // Past the years chrono can represent. The zone is plain UTC out there,
        // so only the time of day is needed.
        None => far_time_of_day(millis)
            .map(|time| time.format(RU_TIME_FORMAT).to_string())
            .unwrap_or_else(|| INVALID_DATE.to_string()),
    }
}

fn far_time_of_day(millis: i64) -> Option<NaiveTime> {
    let seconds = millis.rem_euclid(MILLIS_PER_DAY) / 1000;
    NaiveTime::from_num_seconds_from_midnight_opt(u32::try_from(seconds).ok()?, 0)
}

#[test]
fn test_capitalize_first_letter() {
    assert_eq!(capitalize_first_letter(None), "");
    assert_eq!(capitalize_first_letter(Some("")), "");
    assert_eq!(capitalize_first_letter(Some("reykjavik")), "Reykjavik");
    assert_eq!(capitalize_first_letter(Some("É")), "É");
    assert_eq!(capitalize_first_letter(Some("ясно")), "Ясно");
    assert_eq!(capitalize_first_letter(Some("x")), "X");
    assert_eq!(capitalize_first_letter(Some(" leading space")), " leading space");
}

#[test]
fn test_capitalize_first_letter_is_idempotent() {
    for text in ["", "a", "clear sky", "Небольшой дождь", "ßtraße", "ǆungla", "42 km"] {
        let once = capitalize_first_letter(Some(text));
        assert_eq!(capitalize_first_letter(Some(&once)), once);
    }
}

#[test]
fn test_pressure_mm() {
    assert_eq!(pressure_mm(1000.0), 750.0);
    assert_eq!(pressure_mm(1013.25), 760.0);
    assert_eq!(pressure_mm(0.0), 0.0);
    assert_eq!(pressure_mm(-1000.0), -750.0);
    assert_eq!(pressure_mm(2.5 / PRESSURE_UNITS), 3.0);
}

#[test]
fn test_pressure_mm_passes_through_non_finite() {
    assert!(pressure_mm(f64::NAN).is_nan());
    assert_eq!(pressure_mm(f64::INFINITY), f64::INFINITY);
    assert_eq!(pressure_mm(f64::NEG_INFINITY), f64::NEG_INFINITY);
}

#[test]
fn test_round_half_up() {
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!(round_half_up(0.49999999999999994), 0.0);
    assert_eq!(round_half_up(-0.6), -1.0);
}

#[test]
fn test_time_string() {
    assert_eq!(time_string(0.0), "00:00:00");
    assert_eq!(time_string(1.0), "00:00:01");
    assert_eq!(time_string(86_399.0), "23:59:59");
    assert_eq!(time_string(-1.0), "23:59:59");
    // 2023-07-01T12:34:56Z, Reykjavik has no summer time.
    assert_eq!(time_string(1_688_214_896.0), "12:34:56");
    assert_eq!(time_string(0.9999), "00:00:00");
}

#[test]
fn test_time_string_advances_with_seconds() {
    assert_eq!(time_string(3_600.0), "01:00:00");
    assert_eq!(time_string(3_601.0), "01:00:01");
}

#[test]
fn test_time_string_invalid() {
    assert_eq!(time_string(f64::NAN), INVALID_DATE);
    assert_eq!(time_string(f64::INFINITY), INVALID_DATE);
    assert_eq!(time_string(8.64e12 + 1.0), INVALID_DATE);
    assert_eq!(time_string(1e11), "09:46:40");
}

#[test]
fn test_time_string_beyond_chrono_range() {
    assert_eq!(time_string(8.2e12), "09:46:40");
    assert_eq!(time_string(8.3e12), "19:33:20");
    assert_eq!(time_string(-8.3e12), "04:26:40");
    assert_eq!(time_string(8.64e12), "00:00:00");
}
