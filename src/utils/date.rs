//! Date utilities: local midnights and parsing of the `--at` override.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// First existing local instant of `date`.
///
/// Midnight can fall into a DST gap in a few zones; in that case the first
/// valid hour of the day is used.
pub fn local_midnight(date: NaiveDate) -> AppResult<DateTime<Local>> {
    for hour in 0..4 {
        let naive = date.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN));
        if let Some(dt) = Local.from_local_datetime(&naive).earliest() {
            return Ok(dt);
        }
    }
    Err(AppError::InvalidDate(date.to_string()))
}

/// Parse "YYYY-MM-DD HH:MM" (or "YYYY-MM-DDTHH:MM") as a local instant.
pub fn parse_local_datetime(s: &str) -> AppResult<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// Resolve the evaluation instant: the override if given, the clock otherwise.
pub fn resolve_now(at: Option<&str>) -> AppResult<DateTime<Local>> {
    match at {
        Some(s) => parse_local_datetime(s),
        None => Ok(Local::now()),
    }
}
