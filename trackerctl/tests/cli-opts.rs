use std::io::Write;

use assert_cmd::Command;
use tempfile::{NamedTempFile, TempDir};

const BIN: &str = "trackerctl";

/// Run with an empty `$HOME` so no real configuration file is picked up.
///
fn trackerctl(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_empty_args() {
    let home = TempDir::new().unwrap();
    trackerctl(&home).assert().failure();
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    trackerctl(&home).arg("-h").assert().success();
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(trackerctl(&home).arg("version"));

    assert!(out.starts_with("trackerctl/"));
    assert!(out.contains("tracker-engine/"));
}

#[test]
fn test_invalid_subcommand() {
    let home = TempDir::new().unwrap();
    trackerctl(&home).arg("blah").assert().failure();
}

#[test]
fn test_status_default() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(trackerctl(&home).arg("status"));

    assert!(out.contains("Motorbike Security System"));
    assert!(out.contains("System Armed"));
    assert!(out.contains("51.505000, -0.090000"));
}

#[test]
fn test_status_alert_json() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(trackerctl(&home).args(["status", "--alert", "--json"]));

    assert!(out.contains("\"alert\":\"alert\""));
    assert!(out.contains("\"color\":\"red\""));
    assert!(out.contains("Disable Alert Mode"));
}

#[test]
fn test_missing_config_file() {
    let home = TempDir::new().unwrap();
    trackerctl(&home)
        .args(["-c", "/nonexistent/tracker.hcl", "status"])
        .assert()
        .failure();
}

#[test]
fn test_config_file() {
    let home = TempDir::new().unwrap();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "version = 1\ntracker {{\n  latitude = 48.85\n  longitude = 2.35\n}}").unwrap();

    let out = stdout_of(
        trackerctl(&home)
            .arg("-c")
            .arg(file.path())
            .arg("status"),
    );
    assert!(out.contains("48.850000, 2.350000"));

    let out = stdout_of(trackerctl(&home).arg("-c").arg(file.path()).arg("config"));
    assert!(out.contains(&file.path().display().to_string()));
}

#[test]
fn test_bad_config_version() {
    let home = TempDir::new().unwrap();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "version = 99").unwrap();

    trackerctl(&home)
        .arg("-c")
        .arg(file.path())
        .arg("status")
        .assert()
        .failure();
}

#[test]
fn test_config_defaults() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(trackerctl(&home).arg("config"));

    assert!(out.contains("built-in defaults"));
}

#[test]
fn test_map() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(trackerctl(&home).arg("map"));

    assert!(out.contains("13/4093/2724"));
    assert!(out.contains("Your motorbike is here!"));
}

#[test]
fn test_run_ticks() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(
        trackerctl(&home)
            .args(["run", "--ticks", "2", "--interval", "10ms", "--json", "--seed", "1"])
            .write_stdin(""),
    );

    let updates: Vec<u64> = out
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["updates"].as_u64().unwrap())
        .collect();
    assert_eq!(Some(&0), updates.first());
    assert!(updates.last().is_some_and(|&n| n >= 2));
}

#[test]
fn test_run_quit() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(
        trackerctl(&home)
            .args(["run", "--interval", "1h"])
            .write_stdin("q\n"),
    );

    assert!(out.contains("System Armed"));
    assert!(out.contains("q to quit"));
}

#[test]
fn test_run_toggle() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(
        trackerctl(&home)
            .args(["run", "--json", "--interval", "1h"])
            .write_stdin("\nq\n"),
    );

    let lines: Vec<_> = out.lines().collect();
    assert_eq!(2, lines.len());
    assert!(lines[0].contains("\"alert\":\"safe\""));
    assert!(lines[1].contains("\"alert\":\"alert\""));
    assert!(lines[1].contains("\"updates\":0"));
}

#[test]
fn test_run_toggle_twice() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(
        trackerctl(&home)
            .args(["run", "--json", "--interval", "1h", "--alert"])
            .write_stdin("\n\nq\n"),
    );

    let alerts: Vec<_> = out
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["alert"].clone())
        .collect();
    assert_eq!(vec!["alert", "safe", "alert"], alerts);
}

#[test]
fn test_run_zero_ticks() {
    let home = TempDir::new().unwrap();
    trackerctl(&home)
        .args(["run", "--ticks", "0"])
        .write_stdin("q\n")
        .assert()
        .failure();
}

#[test]
fn test_huge_jitter_config() {
    let home = TempDir::new().unwrap();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "version = 1\ntracker {{\n  jitter = 1e308\n}}").unwrap();

    trackerctl(&home)
        .arg("-c")
        .arg(file.path())
        .args(["run", "--ticks", "1", "--interval", "10ms"])
        .write_stdin("")
        .assert()
        .failure();
}

#[test]
fn test_run_bad_interval() {
    let home = TempDir::new().unwrap();
    trackerctl(&home)
        .args(["run", "--interval", "0s"])
        .write_stdin("q\n")
        .assert()
        .failure();
}

#[test]
fn test_completion() {
    let home = TempDir::new().unwrap();
    trackerctl(&home).args(["completion", "bash"]).assert().success();
}
