//! Time utilities: parsing HH:MM / HH:MM:SS, hour formatting, rounding.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime, Timelike};

/// Parse a 24-hour clock value, seconds optional.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    input.map(|s| parse_required_time(s)).transpose()
}

/// Current local time truncated to the minute.
pub fn now_minute() -> NaiveTime {
    let now = Local::now().time();
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now)
}

/// Storage form (`HH:MM:SS`).
pub fn format_time(t: &NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Display form (`HH:MM`, seconds shown only when present).
pub fn display_time(t: &NaiveTime) -> String {
    if t.second() == 0 {
        t.format("%H:%M").to_string()
    } else {
        t.format("%H:%M:%S").to_string()
    }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn format_hours(h: f64) -> String {
    format!("{:.2}", h)
}
