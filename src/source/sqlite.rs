use super::EventSource;
use super::access::check_store_access;
use crate::db::pool::DbPool;
use crate::db::queries::{load_calendars, load_events_in_window};
use crate::errors::AppResult;
use crate::models::access::AccessResult;
use crate::models::calendar::CalendarInfo;
use crate::models::calendar_event::CalendarEvent;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Calendar store on disk. A fresh read-only connection is opened per query,
/// so edits made by other programs show up on the next tick.
#[derive(Debug, Clone)]
pub struct SqliteEventSource {
    path: PathBuf,
}

impl SqliteEventSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list_calendars(&self) -> AppResult<Vec<CalendarInfo>> {
        let pool = DbPool::open_read_only(&self.path)?;
        load_calendars(&pool.conn)
    }
}

impl EventSource for SqliteEventSource {
    fn request_access(&self) -> AccessResult {
        check_store_access(&self.path)
    }

    fn query_events(
        &self,
        start: &DateTime<Local>,
        end: &DateTime<Local>,
        calendars: &[String],
    ) -> AppResult<Vec<CalendarEvent>> {
        let pool = DbPool::open_read_only(&self.path)?;
        let events = load_events_in_window(&pool.conn, start, end, calendars)?;
        log::debug!(
            "queried {} event(s) between {} and {} from {}",
            events.len(),
            start.to_rfc3339(),
            end.to_rfc3339(),
            self.path.display()
        );
        Ok(events)
    }
}
