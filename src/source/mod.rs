//! Event query service: where today's events come from.

mod access;
mod memory;
mod sqlite;

pub use access::check_store_access;
pub use memory::MemorySource;
pub use sqlite::SqliteEventSource;

use crate::errors::AppResult;
use crate::models::access::AccessResult;
use crate::models::calendar_event::CalendarEvent;
use chrono::{DateTime, Local};

/// Read-only calendar backend.
pub trait EventSource {
    /// Ask once, at startup, whether the calendar data may be read.
    fn request_access(&self) -> AccessResult;

    /// Events overlapping `[start, end]` from the given calendars
    /// (ids or titles; empty means all).
    fn query_events(
        &self,
        start: &DateTime<Local>,
        end: &DateTime<Local>,
        calendars: &[String],
    ) -> AppResult<Vec<CalendarEvent>>;
}
