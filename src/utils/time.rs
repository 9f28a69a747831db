//! Short time-of-day formatting used by labels and menu entries.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Turns an instant into the short local time shown to the user.
pub trait TimeFormatter {
    fn short_time(&self, t: &DateTime<Local>) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeStyle {
    /// "9:00 AM"
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// "09:00"
    #[serde(rename = "24h")]
    TwentyFourHour,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShortTime {
    pub style: TimeStyle,
}

impl ShortTime {
    pub fn new(style: TimeStyle) -> Self {
        Self { style }
    }
}

impl TimeFormatter for ShortTime {
    fn short_time(&self, t: &DateTime<Local>) -> String {
        match self.style {
            TimeStyle::TwelveHour => t.format("%-I:%M %p").to_string(),
            TimeStyle::TwentyFourHour => t.format("%H:%M").to_string(),
        }
    }
}
