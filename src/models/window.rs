use crate::errors::{AppError, AppResult};
use crate::utils::date::local_midnight;
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

/// How the query window is derived from "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    /// Local calendar day: midnight to 23:59:59.
    #[default]
    Day,
    /// The next 24 hours starting at now.
    Rolling,
}

/// Inclusive time interval handed to the event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl DayWindow {
    pub fn for_mode(mode: WindowMode, now: DateTime<Local>) -> AppResult<Self> {
        match mode {
            WindowMode::Day => Self::calendar_day(now),
            WindowMode::Rolling => Ok(Self::rolling(now)),
        }
    }

    /// `[00:00:00, 23:59:59]` of the local day containing `now`.
    pub fn calendar_day(now: DateTime<Local>) -> AppResult<Self> {
        let today = now.date_naive();
        let tomorrow = today
            .succ_opt()
            .ok_or_else(|| AppError::InvalidDate(today.to_string()))?;

        let start = local_midnight(today)?;
        let end = local_midnight(tomorrow)? - Duration::seconds(1);

        Ok(Self { start, end })
    }

    pub fn rolling(now: DateTime<Local>) -> Self {
        Self {
            start: now,
            end: now + Duration::days(1),
        }
    }

    pub fn contains(&self, t: &DateTime<Local>) -> bool {
        *t >= self.start && *t <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn calendar_day_spans_midnight_to_last_second() {
        let now = Local.with_ymd_and_hms(2025, 6, 4, 14, 30, 0).unwrap();
        let w = DayWindow::calendar_day(now).unwrap();

        assert_eq!(w.start.date_naive(), now.date_naive());
        assert_eq!((w.start.hour(), w.start.minute()), (0, 0));
        assert_eq!(w.end.date_naive(), now.date_naive());
        assert_eq!(
            (w.end.hour(), w.end.minute(), w.end.second()),
            (23, 59, 59)
        );
        assert!(w.contains(&now));
    }

    #[test]
    fn rolling_window_starts_now() {
        let now = Local.with_ymd_and_hms(2025, 6, 4, 22, 0, 0).unwrap();
        let w = DayWindow::for_mode(WindowMode::Rolling, now).unwrap();

        assert_eq!(w.start, now);
        assert_eq!(w.end - w.start, Duration::hours(24));
    }
}
