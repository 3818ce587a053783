mod common;
use common::{Sandbox, data_lines};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_init_creates_config_and_data_file() {
    let sb = Sandbox::new();

    sb.cmd().arg("init").assert().success();

    assert!(sb.conf().exists());
    assert_eq!(
        data_lines(&sb.data()),
        vec!["ID,Date,Heure Début,Heure Fin,Pause (min),Durée (h)"]
    );

    // second run keeps existing files
    sb.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("(kept)"));
}

#[test]
fn test_add_full_day_stores_computed_duration() {
    let sb = Sandbox::new();

    sb.cmd()
        .args([
            "add",
            "2025-03-03",
            "--in",
            "08:00",
            "--out",
            "17:00",
            "--break",
            "60",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("= 8.00 h"));

    let lines = data_lines(&sb.data());
    assert_eq!(lines[1], "1,2025-03-03,08:00:00,17:00:00,60,8.00");
}

#[test]
fn test_add_overnight_session() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["add", "2025-03-03", "--in", "23:00", "--out", "01:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= 2.00 h"));
}

#[test]
fn test_add_rejects_malformed_time() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["add", "2025-03-03", "--in", "8h", "--out", "17:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));

    assert!(!sb.data().exists());
}

#[test]
fn test_add_rejects_date_with_trailing_digits() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["add", "2025-03-041", "--in", "08:00", "--out", "17:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));

    assert!(!sb.data().exists());
}

#[test]
fn test_add_uses_configured_default_break() {
    let sb = Sandbox::new();
    fs::write(sb.conf(), "default_break: 30\n").unwrap();

    sb.cmd()
        .args(["add", "2025-03-03", "--in", "08:00", "--out", "17:00"])
        .assert()
        .success();

    assert_eq!(data_lines(&sb.data())[1], "1,2025-03-03,08:00:00,17:00:00,30,8.50");
}

#[test]
fn test_drop_then_pick_closes_session() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["drop", "--date", "2025-05-12", "--at", "08:15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drop-off #1"));

    assert_eq!(data_lines(&sb.data())[1], "1,2025-05-12,08:15:00,,0,");

    sb.cmd()
        .args(["pick", "--at", "17:45", "--break", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= 9.00 h"));

    assert_eq!(
        data_lines(&sb.data())[1],
        "1,2025-05-12,08:15:00,17:45:00,30,9.00"
    );
}

#[test]
fn test_second_drop_is_refused_while_open() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["drop", "--date", "2025-05-12", "--at", "08:15"])
        .assert()
        .success();

    sb.cmd()
        .args(["drop", "--date", "2025-05-12", "--at", "09:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("still open"));

    assert_eq!(data_lines(&sb.data()).len(), 2);
}

#[test]
fn test_pick_without_open_session_only_warns() {
    let sb = Sandbox::new().with_sample_data();
    let before = sb.read_data();

    sb.cmd()
        .args(["pick", "--at", "17:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No open session"));

    assert_eq!(sb.read_data(), before);
}

#[test]
fn test_pick_clamps_long_break_to_zero() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["drop", "--date", "2025-05-12", "--at", "09:00"])
        .assert()
        .success();

    sb.cmd()
        .args(["pick", "--at", "09:30", "--break", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= 0.00 h"));
}

#[test]
fn test_del_by_id() {
    let sb = Sandbox::new().with_sample_data();

    sb.cmd()
        .args(["del", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session #2 of 2025-03-04 has been deleted"));

    let ids: Vec<String> = data_lines(&sb.data())
        .iter()
        .skip(1)
        .map(|l| l.split(',').next().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["1", "3"]);

    // new ids continue after the maximum
    sb.cmd()
        .args(["add", "2025-04-02", "--in", "08:00", "--out", "09:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added #4"));
}

#[test]
fn test_del_cancelled_without_confirmation() {
    let sb = Sandbox::new().with_sample_data();
    let before = sb.read_data();

    sb.cmd()
        .args(["del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled"));

    assert_eq!(sb.read_data(), before);
}

#[test]
fn test_del_unknown_id_fails() {
    let sb = Sandbox::new().with_sample_data();

    sb.cmd()
        .args(["del", "99", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No record with id 99"));
}
