//! Runs the `assess_profile` binary and checks its output and exit codes.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const PROFILE: &str = r#"{
    "age": 54, "sex": "male", "chestPainType": "atypical",
    "restingBloodPressure": 132, "fastingBloodPressure": 118,
    "cholesterol": 228, "maxHeartRate": 158, "thalassemia": "normal",
    "hasDiabetes": false, "isSmoker": true, "isObese": false
}"#;

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_assess_profile"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn assess_profile");

    // A usage error can exit before reading; a broken pipe is fine then.
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }

    child.wait_with_output().expect("wait for assess_profile")
}

#[test]
fn valid_profile_on_stdin() {
    let output = run(&[], PROFILE);
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON output");
    assert_eq!(json["riskScore"], 11);
    assert_eq!(json["riskLevel"], "Moderate");
}

#[test]
fn valid_profile_from_file() {
    let path = std::env::temp_dir().join(format!("heartcheck-profile-{}.json", std::process::id()));
    std::fs::write(&path, PROFILE).expect("write profile");

    let output = run(&["--input", path.to_str().expect("utf8 path")], "");
    let _ = std::fs::remove_file(&path);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("\"riskScore\": 11"));
}

#[test]
fn help_exits_cleanly() {
    let output = run(&["--help"], "");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage: assess_profile"));
}

#[test]
fn unknown_argument_is_a_usage_error() {
    let output = run(&["--verbose"], PROFILE);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn input_flag_without_path_is_a_usage_error() {
    let output = run(&["--input"], PROFILE);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_file_is_unreadable_input() {
    let output = run(&["--input", "/nonexistent/heartcheck/profile.json"], "");
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot read input"));
}

#[test]
fn malformed_json_is_rejected() {
    let output = run(&[], "{\"age\": 54,");
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid health profile"));
}

#[test]
fn unknown_enum_tag_is_rejected() {
    let output = run(&[], &PROFILE.replace("\"atypical\"", "\"sharp\""));
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn empty_input_is_rejected() {
    let output = run(&[], "  \n");
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("empty input"));
}
