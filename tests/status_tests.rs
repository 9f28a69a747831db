use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_event, at, init_store, qc, seed_standard_day, setup_home, store_path, ts};

#[test]
fn test_status_shows_next_event() {
    let home = setup_home("status_next");
    let db = store_path(&home);
    seed_standard_day(&db);

    qc(&home)
        .args(["--db", &db, "--at", &at(10, 0), "status"])
        .assert()
        .success()
        .stdout("11:00 AM - 11:30 AM: Review\n");
}

#[test]
fn test_status_before_first_event() {
    let home = setup_home("status_early");
    let db = store_path(&home);
    seed_standard_day(&db);

    qc(&home)
        .args(["--db", &db, "--at", &at(7, 45), "status"])
        .assert()
        .success()
        .stdout("9:00 AM - 9:30 AM: Standup\n");
}

#[test]
fn test_status_empty_day() {
    let home = setup_home("status_empty");
    let db = store_path(&home);
    init_store(&db);

    qc(&home)
        .args(["--db", &db, "--at", &at(10, 0), "status"])
        .assert()
        .success()
        .stdout("No events today\n");
}

#[test]
fn test_status_all_done() {
    let home = setup_home("status_done");
    let db = store_path(&home);
    seed_standard_day(&db);

    qc(&home)
        .args(["--db", &db, "--at", &at(18, 0), "status"])
        .assert()
        .success()
        .stdout("All events done for today\n");
}

#[test]
fn test_status_ignores_other_days() {
    let home = setup_home("status_other_day");
    let db = store_path(&home);
    let conn = init_store(&db);
    // same wall-clock, one day later
    add_event(
        &conn,
        "work",
        Some("Tomorrow"),
        None,
        ts(11, 0) + 86_400,
        ts(12, 0) + 86_400,
    );

    qc(&home)
        .args(["--db", &db, "--at", &at(10, 0), "status"])
        .assert()
        .success()
        .stdout("No events today\n");
}

#[test]
fn test_status_truncates_long_title() {
    let home = setup_home("status_truncate");
    let db = store_path(&home);
    let conn = init_store(&db);
    add_event(
        &conn,
        "work",
        Some("Quarterly planning with finance"),
        None,
        ts(14, 0),
        ts(15, 0),
    );

    qc(&home)
        .args(["--db", &db, "--at", &at(10, 0), "status"])
        .assert()
        .success()
        .stdout("2:00 PM - 3:00 PM: Quarterly planning w…\n");
}

#[test]
fn test_status_untitled_event() {
    let home = setup_home("status_untitled");
    let db = store_path(&home);
    let conn = init_store(&db);
    add_event(&conn, "home", None, None, ts(16, 0), ts(16, 30));

    qc(&home)
        .args(["--db", &db, "--at", &at(10, 0), "status"])
        .assert()
        .success()
        .stdout("4:00 PM - 4:30 PM: No title\n");
}

#[test]
fn test_status_json() {
    let home = setup_home("status_json");
    let db = store_path(&home);
    seed_standard_day(&db);

    let output = qc(&home)
        .args(["--db", &db, "--at", &at(10, 0), "status", "--json"])
        .output()
        .expect("run status --json");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(v["status_label"], "11:00 AM - 11:30 AM: Review");
    let entries = v["menu_entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["text"], "11:00 AM: Review @ Room A");
}

#[test]
fn test_status_missing_store_asks_for_access() {
    let home = setup_home("status_missing");
    let db = store_path(&home);

    qc(&home)
        .args(["--db", &db, "--at", &at(10, 0), "status"])
        .assert()
        .success()
        .stdout("Enable Access in System Settings\n")
        .stderr(contains("quickcal init"));
}

#[test]
fn test_status_foreign_file_is_access_error() {
    let home = setup_home("status_foreign");
    let db = store_path(&home);
    std::fs::write(&db, "this is a plain text file, not a calendar store at all").unwrap();

    qc(&home)
        .args(["--db", &db, "--at", &at(10, 0), "status"])
        .assert()
        .success()
        .stdout("Access Error\n");
}

#[test]
fn test_status_rejects_bad_at() {
    let home = setup_home("status_bad_at");
    let db = store_path(&home);
    init_store(&db);

    qc(&home)
        .args(["--db", &db, "--at", "noon", "status"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: noon"));
}

#[test]
fn test_status_respects_config_file() {
    let home = setup_home("status_config");
    let db = store_path(&home);
    let conn = init_store(&db);
    add_event(&conn, "work", Some("Review"), None, ts(11, 0), ts(11, 30));
    add_event(&conn, "home", Some("Dentist"), None, ts(10, 30), ts(11, 0));

    std::fs::write(
        std::path::Path::new(&home).join("quickcal.conf"),
        format!("database: {}\ncalendars: [Work]\ntime_format: 24h\n", db),
    )
    .unwrap();

    qc(&home)
        .args(["--at", &at(10, 0), "status"])
        .assert()
        .success()
        .stdout("11:00 - 11:30: Review\n")
        .stdout(contains("Dentist").not());
}
