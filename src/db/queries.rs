use crate::errors::AppError;
use crate::errors::AppResult;
use crate::models::calendar::CalendarInfo;
use crate::models::calendar_event::CalendarEvent;
use chrono::{DateTime, Local};
use rusqlite::types::Value;
use rusqlite::{Connection, Result, Row};

/// Events overlapping `[start, end]`, ordered by start.
///
/// `calendars` filters by calendar id or title; an empty slice selects all.
/// Zero-length events count as overlapping when their instant is inside the window.
pub fn load_events_in_window(
    conn: &Connection,
    start: &DateTime<Local>,
    end: &DateTime<Local>,
    calendars: &[String],
) -> AppResult<Vec<CalendarEvent>> {
    let mut sql = String::from(
        "SELECT e.title, e.location, e.start_ts, e.end_ts
         FROM events e
         JOIN calendars c ON c.id = e.calendar_id
         WHERE e.start_ts <= ?
           AND (e.end_ts > ? OR e.start_ts >= ?)",
    );

    let mut params: Vec<Value> = vec![
        Value::Integer(end.timestamp()),
        Value::Integer(start.timestamp()),
        Value::Integer(start.timestamp()),
    ];

    if !calendars.is_empty() {
        let placeholders = vec!["?"; calendars.len()].join(",");
        sql.push_str(&format!(
            " AND (c.id IN ({0}) OR c.title IN ({0}))",
            placeholders
        ));
        for _ in 0..2 {
            params.extend(calendars.iter().cloned().map(Value::Text));
        }
    }

    sql.push_str(" ORDER BY e.start_ts ASC, e.id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params), map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_event_row(row: &Row) -> Result<CalendarEvent> {
    let start = ts_to_local(row.get("start_ts")?)?;
    let end = ts_to_local(row.get("end_ts")?)?;

    Ok(CalendarEvent::new(
        start,
        end,
        row.get("title")?,
        row.get("location")?,
    ))
}

fn ts_to_local(ts: i64) -> Result<DateTime<Local>> {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.with_timezone(&Local))
        .ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Integer,
                Box::new(AppError::InvalidTime(format!("timestamp out of range: {}", ts))),
            )
        })
}

pub fn load_calendars(conn: &Connection) -> AppResult<Vec<CalendarInfo>> {
    let mut stmt = conn.prepare(
        "SELECT c.id, c.title, COUNT(e.id)
         FROM calendars c
         LEFT JOIN events e ON e.calendar_id = c.id
         GROUP BY c.id, c.title
         ORDER BY c.title ASC, c.id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(CalendarInfo {
            id: row.get(0)?,
            title: row.get(1)?,
            event_count: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
