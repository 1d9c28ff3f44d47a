//! Integration tests for the `slots` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the compute and mock
//! subcommands through the actual binary, including stdin/stdout piping,
//! file I/O, policy overrides and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Monday 2026-03-16, before work hours.
const NOW: &str = "2026-03-16T07:00:00Z";

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn request_json() -> String {
    std::fs::read_to_string(fixture("request.json")).expect("request.json fixture must exist")
}

fn slots() -> Command {
    Command::cargo_bin("slots").unwrap()
}

/// Run `slots compute` with extra args and return the parsed window list.
fn compute(args: &[&str]) -> Vec<Value> {
    let output = slots()
        .args(["compute", "--now", NOW])
        .args(args)
        .write_stdin(request_json())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout must be JSON");
    value.as_array().expect("stdout must be an array").clone()
}

fn starts(windows: &[Value]) -> Vec<&str> {
    windows.iter().map(|w| w["start"].as_str().unwrap()).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// compute
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn compute_stdin_to_stdout() {
    let windows = compute(&[]);
    assert_eq!(
        starts(&windows),
        vec![
            "2026-03-16T12:00:00Z",
            "2026-03-16T12:30:00Z",
            "2026-03-16T13:00:00Z"
        ]
    );
    assert_eq!(windows[0]["end"], "2026-03-16T13:00:00Z");
}

#[test]
fn compute_file_to_file() {
    let output_path = std::env::temp_dir().join("slots-test-compute-output.json");
    let _ = std::fs::remove_file(&output_path);

    slots()
        .args(["compute", "--now", NOW, "-i"])
        .arg(fixture("request.json"))
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    let value: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn compute_with_explicit_range_adds_free_day() {
    let windows = compute(&["--start-date", "2026-03-16", "--end-date", "2026-03-17"]);
    // 3 on Monday, 15 one-hour starts in a fully free Tuesday.
    assert_eq!(windows.len(), 18);
    assert_eq!(windows[3]["start"], "2026-03-17T09:00:00Z");
    assert_eq!(windows[17]["start"], "2026-03-17T16:00:00Z");
}

#[test]
fn compute_with_policy_file() {
    let windows = compute(&["--policy", &fixture("policy.json")]);
    assert_eq!(starts(&windows), vec!["2026-03-16T12:00:00Z"]);
}

#[test]
fn work_hours_flag_overrides_policy() {
    let windows = compute(&["--policy", &fixture("policy.json"), "--work-hours", "9-12"]);
    assert!(windows.is_empty(), "participant 1 is busy all morning");
}

#[test]
fn min_notice_trims_early_slots() {
    let output = slots()
        .args([
            "compute",
            "--now",
            "2026-03-16T08:00:00Z",
            "--min-notice-hours",
            "5",
        ])
        .write_stdin(request_json())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let windows: Vec<Value> = serde_json::from_slice(&output).unwrap();
    assert_eq!(starts(&windows), vec!["2026-03-16T13:00:00Z"]);
}

#[test]
fn empty_result_is_success() {
    slots()
        .args(["compute", "--now", NOW, "--work-hours", "9-12"])
        .write_stdin(request_json())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"));
}

// ─────────────────────────────────────────────────────────────────────────────
// compute errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn inverted_range_fails() {
    slots()
        .args([
            "compute",
            "--now",
            NOW,
            "--start-date",
            "2026-03-17",
            "--end-date",
            "2026-03-16",
        ])
        .write_stdin(request_json())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));
}

#[test]
fn start_date_requires_end_date() {
    slots()
        .args(["compute", "--start-date", "2026-03-17"])
        .write_stdin(request_json())
        .assert()
        .failure();
}

#[test]
fn missing_participant_fails() {
    slots()
        .args(["compute", "--now", NOW, "-i"])
        .arg(fixture("missing_participant.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing busy data for participant 9"));
}

#[test]
fn malformed_timestamp_fails() {
    let input = r#"{
        "participants": [{"participantId": 1, "busy": [{"start": "soon", "end": "later"}]}],
        "selection": [1],
        "duration": 30
    }"#;
    slots()
        .args(["compute", "--now", NOW])
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed timestamp: soon"));
}

#[test]
fn zero_duration_fails() {
    let input = r#"{"participants": [], "selection": [], "duration": 0}"#;
    slots()
        .args(["compute", "--now", NOW])
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}

#[test]
fn invalid_json_fails() {
    slots()
        .arg("compute")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse availability request"));
}

#[test]
fn invalid_work_hours_fail() {
    slots()
        .args(["compute", "--now", NOW, "--work-hours", "17-9"])
        .write_stdin(request_json())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid work window"));

    slots()
        .args(["compute", "--now", NOW, "--work-hours", "nine"])
        .write_stdin(request_json())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected START-END"));
}

#[test]
fn nonexistent_input_file_fails() {
    slots()
        .args(["compute", "-i", "/nonexistent/request.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// mock
// ─────────────────────────────────────────────────────────────────────────────

fn mock(seed: &str) -> Value {
    let output = slots()
        .args([
            "mock",
            "--ids",
            "1,2,3",
            "--seed",
            seed,
            "--start-date",
            "2026-03-16",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn mock_generates_request_shape() {
    let request = mock("7");
    assert_eq!(request["selection"], serde_json::json!([1, 2, 3]));
    assert_eq!(request["duration"], 60);

    let participants = request["participants"].as_array().unwrap();
    assert_eq!(participants.len(), 3);
    for participant in participants {
        let name = participant["name"].as_str().expect("every mock participant is named");
        assert_eq!(name.split(' ').count(), 2, "first and last name: {name}");

        let busy = participant["busy"].as_array().unwrap();
        assert!((3..=6).contains(&busy.len()));
        for block in busy {
            let start = block["start"].as_str().unwrap();
            let end = block["end"].as_str().unwrap();
            assert!(start.ends_with('Z') && end.ends_with('Z'));
            assert!(start < end, "{start} < {end}");
            assert!(&start[..10] >= "2026-03-16");
            assert!(&start[..10] <= "2026-03-18");
            assert!(&end[11..] <= "17:00:00Z", "clipped at five: {end}");
        }
    }
}

#[test]
fn mock_is_reproducible_with_seed() {
    assert_eq!(mock("42"), mock("42"));
}

#[test]
fn mock_output_feeds_compute() {
    let request = slots()
        .args(["mock", "--ids", "1,2", "--seed", "3", "--start-date", "2026-03-16"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    slots()
        .args(["compute", "--now", "2026-03-16T00:00:00Z"])
        .write_stdin(request)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn mock_requires_ids() {
    slots().arg("mock").assert().failure();
}

#[test]
fn mock_rejects_zero_days() {
    slots()
        .args(["mock", "--ids", "1", "--days", "0"])
        .assert()
        .failure();
}
