use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, Result};

/// Create the calendar store tables if they are missing. Never touches rows.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS calendars (
            id     TEXT PRIMARY KEY,
            title  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            calendar_id  TEXT NOT NULL REFERENCES calendars(id),
            title        TEXT,
            location     TEXT,
            start_ts     INTEGER NOT NULL,
            end_ts       INTEGER NOT NULL,
            CHECK (end_ts >= start_ts)
        );

        CREATE INDEX IF NOT EXISTS idx_events_start ON events(start_ts);
        CREATE INDEX IF NOT EXISTS idx_events_calendar ON events(calendar_id);
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// True when both `calendars` and `events` exist.
pub fn has_calendar_schema(conn: &Connection) -> Result<bool> {
    Ok(table_exists(conn, "calendars")? && table_exists(conn, "events")?)
}
