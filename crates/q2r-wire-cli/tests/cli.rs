use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("q2r-wire"))
}

fn f64_bytes(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn write_frame(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("write frame");
    path
}

fn stdout_lines(output: &std::process::Output) -> Vec<Value> {
    String::from_utf8(output.stdout.clone())
        .expect("utf8 stdout")
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect()
}

#[test]
fn help_lists_subcommands() {
    cmd().arg("decode").arg("--help").assert().success();
    cmd()
        .arg("channels")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("routing table"));
}

#[test]
fn channels_table_lists_known_channels() {
    cmd()
        .arg("channels")
        .assert()
        .success()
        .stdout(
            contains("q2r_right_hand_twist")
                .and(contains("dice_twist"))
                .and(contains("q2r_left_hand_haptic_feedback"))
                .and(contains("pose_sample")),
        );
}

#[test]
fn channels_json_reports_min_lengths() {
    let assert = cmd()
        .arg("channels")
        .arg("--json")
        .arg("--pose-offset")
        .arg("0")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let routes: Value = serde_json::from_str(&stdout).expect("valid json");
    let routes = routes.as_array().expect("array");
    assert_eq!(routes.len(), 10);

    let pose = routes
        .iter()
        .find(|route| route["channel"] == "q2r_left_hand_pose")
        .expect("pose route");
    assert_eq!(pose["kind"], "pose_sample");
    assert_eq!(pose["min_frame_len"], 56);
}

#[test]
fn decode_motion_frame_to_json() {
    let temp = TempDir::new().expect("tempdir");
    let frame = write_frame(
        temp.path(),
        "twist.bin",
        &f64_bytes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
    );

    let assert = cmd()
        .arg("decode")
        .arg("--channel")
        .arg("q2r_twist")
        .arg(&frame)
        .assert()
        .success();
    let lines = stdout_lines(assert.get_output());
    assert_eq!(lines.len(), 1);
    let record = &lines[0]["record"];
    assert_eq!(record["kind"], "motion");
    assert_eq!(record["linear"]["x"], 1.0);
    assert_eq!(record["angular"]["z"], 6.0);
    assert!(lines[0]["input"].as_str().unwrap().ends_with("twist.bin"));
}

#[test]
fn decode_glob_emits_one_line_per_frame() {
    let temp = TempDir::new().expect("tempdir");
    write_frame(temp.path(), "haptic-1.bin", &f64_bytes(&[440.0, 0.8]));
    write_frame(temp.path(), "haptic-2.bin", &f64_bytes(&[220.0, 0.1]));
    let pattern = temp.path().join("haptic-*.bin");

    let assert = cmd()
        .arg("decode")
        .arg("-c")
        .arg("q2r_right_hand_haptic_feedback")
        .arg(pattern.to_string_lossy().to_string())
        .assert()
        .success();
    let lines = stdout_lines(assert.get_output());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["record"]["frequency"], 440.0);
    assert_eq!(lines[1]["record"]["frequency"], 220.0);
}

#[test]
fn decode_reads_stdin() {
    let mut frame = vec![1u8, 0];
    for value in [0.5f32, -0.5, 1.0, 0.0] {
        frame.extend_from_slice(&value.to_le_bytes());
    }

    let assert = cmd()
        .arg("decode")
        .arg("--channel")
        .arg("q2r_left_hand_inputs")
        .arg("-")
        .write_stdin(frame)
        .assert()
        .success();
    let lines = stdout_lines(assert.get_output());
    let record = &lines[0]["record"];
    assert_eq!(lines[0]["input"], "-");
    assert_eq!(record["kind"], "input_state");
    assert_eq!(record["button_upper"], true);
    assert_eq!(record["axis_vertical"], -0.5);
}

#[test]
fn decode_pose_with_custom_offset() {
    let temp = TempDir::new().expect("tempdir");
    let frame = write_frame(
        temp.path(),
        "pose.bin",
        &f64_bytes(&[0.1, 0.2, 0.3, 0.0, 0.0, 0.0, 1.0]),
    );

    let assert = cmd()
        .arg("decode")
        .arg("--channel")
        .arg("q2r_right_hand_pose")
        .arg("--pose-offset")
        .arg("0")
        .arg(&frame)
        .assert()
        .success();
    let lines = stdout_lines(assert.get_output());
    let record = &lines[0]["record"];
    assert_eq!(record["frame_id"], "base_link");
    assert_eq!(record["orientation"]["w"], 1.0);
    assert!(record["stamp"]["sec"].as_i64().unwrap() > 0);
}

#[test]
fn truncated_frame_reports_and_continues() {
    let temp = TempDir::new().expect("tempdir");
    let short = write_frame(temp.path(), "a-short.bin", &[0u8; 15]);
    let good = write_frame(temp.path(), "b-good.bin", &f64_bytes(&[440.0, 0.8]));

    let assert = cmd()
        .arg("decode")
        .arg("--channel")
        .arg("q2r_left_hand_haptic_feedback")
        .arg(&short)
        .arg(&good)
        .assert()
        .code(1)
        .stderr(contains("truncated haptic_command frame: need 16 bytes, got 15"));
    let lines = stdout_lines(assert.get_output());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["record"]["amplitude"], 0.8);
}

#[test]
fn strict_stops_at_first_failure() {
    let temp = TempDir::new().expect("tempdir");
    let short = write_frame(temp.path(), "short.bin", &[0u8; 47]);

    cmd()
        .arg("decode")
        .arg("--channel")
        .arg("dice_twist")
        .arg("--strict")
        .arg(&short)
        .assert()
        .code(2)
        .stderr(contains("error:").and(contains("hint: motion frames need at least 48 bytes")));
}

#[test]
fn unknown_channel_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let frame = write_frame(temp.path(), "frame.bin", &[]);

    cmd()
        .arg("decode")
        .arg("--channel")
        .arg("unknown_channel_xyz")
        .arg(&frame)
        .assert()
        .code(2)
        .stderr(contains("unknown channel 'unknown_channel_xyz'").and(contains("hint:")));
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.bin");

    cmd()
        .arg("decode")
        .arg("--channel")
        .arg("q2r_twist")
        .arg(missing)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn version_prints_binary_name() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("q2r-wire"));
}
