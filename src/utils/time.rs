//! Time utilities: parsing timestamps and minute durations, truncating to
//! whole seconds, formatting elapsed time as HH:MM:SS.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, Local, NaiveDateTime, Timelike};

/// Storage and input format for timestamps.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT)
        .map_err(|_| AppError::InvalidDate(s.trim().to_string()))
}

/// Blank input means "not provided".
pub fn parse_optional_datetime(s: &str) -> AppResult<Option<NaiveDateTime>> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        parse_datetime(s).map(Some)
    }
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Parse a duration expressed in whole minutes. Blank input → `None`.
pub fn parse_minutes(s: &str) -> AppResult<Option<Duration>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    let mins: u32 = s
        .parse()
        .map_err(|_| AppError::InvalidDuration(s.to_string()))?;
    Ok(Some(Duration::minutes(i64::from(mins))))
}

/// Drop the sub-second part of a timestamp.
pub fn truncate_seconds(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// Current local wall-clock time, second precision.
pub fn now() -> NaiveDateTime {
    truncate_seconds(Local::now().naive_local())
}

/// Zero-padded `HH:MM:SS` for a number of whole seconds.
/// Hours are not wrapped at 24; negative values get a leading '-'.
pub fn format_hms(total_secs: i64) -> String {
    let sign = if total_secs < 0 { "-" } else { "" };
    let s = total_secs.abs();
    let hours = s / 3600;
    let minutes = (s % 3600) / 60;
    let seconds = s % 60;
    format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
}

pub fn format_duration(d: Duration) -> String {
    format_hms(d.num_seconds())
}
