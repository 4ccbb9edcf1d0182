#![forbid(unsafe_code)]
#![cfg(feature = "serde")]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("brigada-cli").unwrap()
}

#[test]
fn shift_on_reference_monday() {
    cli()
        .args(["--lang", "en", "shift", "--date", "2026-01-05", "--supervisor", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tono · Monday, 5 January 2026"))
        .stdout(predicate::str::contains("Morning"))
        .stdout(predicate::str::contains("06:00 – 14:00"));
}

#[test]
fn shift_by_name_in_ukrainian() {
    cli()
        .args(["shift", "--date", "2026-01-05", "--supervisor", "boris"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Нічна"));
}

#[test]
fn weekend_prints_rest_hint() {
    cli()
        .args(["--lang", "en", "shift", "--date", "2026-01-11", "--supervisor", "Stano"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day off"))
        .stdout(predicate::str::contains("Have a good rest"));
}

#[test]
fn unknown_supervisor_index_fails() {
    cli()
        .args(["shift", "--date", "2026-01-05", "--supervisor", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown supervisor index 5"));
}

#[test]
fn invalid_date_fails() {
    cli()
        .args(["shift", "--date", "05/01/2026", "--supervisor", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn day_lists_three_supervisors() {
    cli()
        .args(["--lang", "en", "day", "--date", "2026-01-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tono"))
        .stdout(predicate::str::contains("Boris"))
        .stdout(predicate::str::contains("Stano"));
}

#[test]
fn range_exports_csv_and_json() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("week.csv");
    let json = dir.path().join("week.json");
    cli()
        .args([
            "--lang",
            "en",
            "range",
            "--from",
            "2026-01-05",
            "--to",
            "2026-01-11",
            "--supervisor",
            "1",
        ])
        .arg("--out-csv")
        .arg(&csv)
        .arg("--out-json")
        .arg(&json)
        .assert()
        .success();

    let text = fs::read_to_string(&csv).unwrap();
    assert_eq!(text.lines().count(), 8);
    assert!(text.contains("2026-01-05,Mo,Boris,Night,22:00 – 06:00,#FF5722"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0]["date"], "2026-01-05");
    assert_eq!(entries[0]["supervisor"], "Boris");
    assert_eq!(entries[0]["assignment"]["name"], "Night");
    assert_eq!(entries[6]["assignment"]["name"], "Day off");
}

#[test]
fn whoami_matches_host_user() {
    let dir = tempdir().unwrap();
    let init = dir.path().join("init.json");
    fs::write(&init, r#"{"user":{"first_name":"Boris","language_code":"en"}}"#).unwrap();
    cli()
        .args(["whoami", "--date", "2026-01-05", "--init-data"])
        .arg(&init)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi, Boris! You are on Boris's shift"))
        .stdout(predicate::str::contains("Night"));
}

#[test]
fn explicit_lang_wins_over_missing_host_language() {
    let dir = tempdir().unwrap();
    let init = dir.path().join("init.json");
    fs::write(&init, r#"{"user":{"first_name":"Boris"}}"#).unwrap();
    cli()
        .args(["--lang", "en", "whoami", "--date", "2026-01-05", "--init-data"])
        .arg(&init)
        .assert()
        .success()
        .stdout(predicate::str::contains("Shift schedule"))
        .stdout(predicate::str::contains("Hi, Boris!"))
        .stdout(predicate::str::contains("Night"));
}

#[test]
fn whoami_without_lang_follows_host() {
    let dir = tempdir().unwrap();
    let init = dir.path().join("init.json");
    fs::write(&init, r#"{"user":{"first_name":"Boris"}}"#).unwrap();
    cli()
        .args(["whoami", "--date", "2026-01-05", "--init-data"])
        .arg(&init)
        .assert()
        .success()
        .stdout(predicate::str::contains("Привіт, Boris!"));
}

#[test]
fn remind_writes_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("reminder.txt");
    cli()
        .args(["remind", "--supervisor", "0", "--today", "2026-01-10", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-01-12"));
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("Нагадування про зміну"));
    assert!(text.contains("Нічна"));
}

#[test]
fn remind_without_working_day_exits_2() {
    let dir = tempdir().unwrap();
    cli()
        .args([
            "remind",
            "--supervisor",
            "0",
            "--today",
            "2026-01-10",
            "--horizon",
            "1",
            "--out",
        ])
        .arg(dir.path().join("none.txt"))
        .assert()
        .code(2);
}

#[test]
fn init_config_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rotation.json");
    cli().args(["init-config", "--out"]).arg(&path).assert().success();
    assert!(path.exists());

    cli()
        .arg("--config")
        .arg(&path)
        .args(["shift", "--date", "2026-01-07", "--supervisor", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Денна"));

    cli()
        .args(["init-config", "--out"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite"));
}
