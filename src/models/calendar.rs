use serde::Serialize;

/// A calendar available in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarInfo {
    pub id: String,
    pub title: String,
    pub event_count: i64,
}
