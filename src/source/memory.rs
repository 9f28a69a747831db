use super::EventSource;
use crate::errors::AppResult;
use crate::models::access::AccessResult;
use crate::models::calendar_event::CalendarEvent;
use chrono::{DateTime, Local};

/// Fixed list of `(calendar, event)` pairs kept in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    access: AccessResult,
    events: Vec<(String, CalendarEvent)>,
}

impl MemorySource {
    pub fn new(events: Vec<(String, CalendarEvent)>) -> Self {
        Self {
            access: AccessResult::Granted,
            events,
        }
    }

    pub fn with_access(mut self, access: AccessResult) -> Self {
        self.access = access;
        self
    }
}

impl EventSource for MemorySource {
    fn request_access(&self) -> AccessResult {
        self.access
    }

    fn query_events(
        &self,
        start: &DateTime<Local>,
        end: &DateTime<Local>,
        calendars: &[String],
    ) -> AppResult<Vec<CalendarEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|(cal, _)| calendars.is_empty() || calendars.contains(cal))
            .filter(|(_, ev)| ev.start <= *end && (ev.end > *start || ev.start >= *start))
            .map(|(_, ev)| ev.clone())
            .collect())
    }
}
