#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Local, NaiveDate, TimeZone};
use rusqlite::{Connection, params};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DAY: &str = "2025-03-12";

/// Binary under test, isolated from the user's real config directory.
pub fn qc(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("quickcal");
    cmd.env("QUICKCAL_HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Fresh, empty config directory inside the system temp dir
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("quickcal_{}_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Path of a calendar store inside `home` (not created)
pub fn store_path(home: &str) -> String {
    PathBuf::from(home)
        .join("calendar.sqlite")
        .to_string_lossy()
        .to_string()
}

/// Local unix timestamp of `DAY` at `hh:mm`
pub fn ts(hh: u32, mm: u32) -> i64 {
    let date = NaiveDate::parse_from_str(DAY, "%Y-%m-%d").unwrap();
    let naive = date.and_hms_opt(hh, mm, 0).unwrap();
    Local
        .from_local_datetime(&naive)
        .earliest()
        .expect("valid local time")
        .timestamp()
}

pub fn at(hh: u32, mm: u32) -> String {
    format!("{} {:02}:{:02}", DAY, hh, mm)
}

/// Create the schema with two calendars and no events
pub fn init_store(db_path: &str) -> Connection {
    let conn = Connection::open(db_path).expect("open db");
    quickcal::db::schema::init_db(&conn).expect("init db");
    conn.execute_batch(
        "INSERT INTO calendars (id, title) VALUES ('work', 'Work'), ('home', 'Family');",
    )
    .expect("seed calendars");
    conn
}

pub fn add_event(
    conn: &Connection,
    calendar: &str,
    title: Option<&str>,
    location: Option<&str>,
    start: i64,
    end: i64,
) {
    conn.execute(
        "INSERT INTO events (calendar_id, title, location, start_ts, end_ts)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![calendar, title, location, start, end],
    )
    .expect("insert event");
}

/// Standup 9:00-9:30 (work) and Review 11:00-11:30 @ Room A (work)
pub fn seed_standard_day(db_path: &str) {
    let conn = init_store(db_path);
    add_event(&conn, "work", Some("Standup"), None, ts(9, 0), ts(9, 30));
    add_event(&conn, "work", Some("Review"), Some("Room A"), ts(11, 0), ts(11, 30));
}
