//! Time utilities: parsing HH:MM, duration formatting, clock overrides.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, NaiveTime, TimeZone};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Short countdown format used for the next-reminder badge:
/// "2h 15m" when at least an hour away, "45m" otherwise.
pub fn format_minutes_until(mins: i64) -> String {
    let m = mins.max(0);
    if m >= 60 {
        format!("{}h {}m", m / 60, m % 60)
    } else {
        format!("{}m", m)
    }
}

/// Resolve "now", honoring the hidden `--now` override used by tests.
/// The override is a naive local instant: "YYYY-MM-DD HH:MM".
pub fn resolve_now(override_str: Option<&String>) -> AppResult<DateTime<Local>> {
    match override_str {
        None => Ok(Local::now()),
        Some(s) => {
            let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
                .map_err(|_| AppError::InvalidTime(s.to_string()))?;
            Local
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| AppError::InvalidTime(s.to_string()))
        }
    }
}
