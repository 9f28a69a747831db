use chrono::{DateTime, Local};
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "No title";
pub const DEFAULT_LOCATION: &str = "No location";

/// One calendar occurrence as returned by an event source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub title: Option<String>,
    pub location: Option<String>,
}

impl CalendarEvent {
    pub fn new(
        start: DateTime<Local>,
        end: DateTime<Local>,
        title: Option<String>,
        location: Option<String>,
    ) -> Self {
        Self {
            start,
            end,
            title: non_blank(title),
            location: non_blank(location),
        }
    }

    /// Title, or "No title" when the source has none.
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Location, or "No location" when the source has none.
    pub fn location_or_default(&self) -> &str {
        self.location.as_deref().unwrap_or(DEFAULT_LOCATION)
    }

    /// An event is upcoming while its end lies strictly after `now`.
    pub fn is_upcoming(&self, now: &DateTime<Local>) -> bool {
        self.end > *now
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
