//! Allow-list checks for enumerated string parameters.
//!
//! Runs before any request is built, so a value the API would reject or
//! misread never costs a round trip.

use crate::Error;

/// Candle intervals accepted by the technical indicator endpoint.
pub const TIME_DELTA_VALUES: &[&str] = &["1min", "5min", "15min", "30min", "1hour", "4hour", "daily"];

/// Indicator types accepted by the technical indicator endpoint. Casing is the API's own.
pub const STATISTICS_TYPE_VALUES: &[&str] = &[
    "SMA",
    "EMA",
    "WMA",
    "DEMA",
    "TEMA",
    "williams",
    "RSI",
    "ADX",
    "standardDeviation",
];

fn check_allowed<'a>(
    field: &'static str,
    value: &'a str,
    allowed: &'static [&'static str],
) -> Result<&'a str, Error> {
    if allowed.contains(&value) {
        Ok(value)
    } else {
        tracing::error!("Invalid {} value: {}", field, value);
        Err(Error::Validation {
            field,
            value: value.to_string(),
            allowed,
        })
    }
}

/// Validate a candle interval (e.g. `daily`, `1hour`). Matching is exact.
pub fn validate_time_delta(value: &str) -> Result<&str, Error> {
    check_allowed("time_delta", value, TIME_DELTA_VALUES)
}

/// Validate an indicator type (e.g. `SMA`, `williams`). Matching is exact.
pub fn validate_statistics_type(value: &str) -> Result<&str, Error> {
    check_allowed("statistics_type", value, STATISTICS_TYPE_VALUES)
}
