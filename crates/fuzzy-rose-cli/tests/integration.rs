//! Integration tests for fuzzy-rose CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const SAMPLE_ROSE: &str = "\
name: sample
resolution: 10
params:
  - [10, 30, 35, 90]
  - [20, 25, 60, 70]
  - [5, 40, 45, 80]
";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fuzzy-rose"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fuzzy-rose"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

/// Write the sample rose into a fresh temp dir.
fn sample_file(dir: &TempDir) -> String {
    let path = dir.path().join("rose.yaml");
    fs::write(&path, SAMPLE_ROSE).unwrap();
    path.to_str().unwrap().to_string()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn help_lists_commands() {
    let output = run(&["help"]);
    assert!(output.status.success());
    let text = stderr(&output);
    for cmd in ["render", "profile", "pulse", "random", "view", "hit"] {
        assert!(text.contains(cmd), "help should mention '{}'", cmd);
    }
}

#[test]
fn unknown_command_fails() {
    let output = run(&["bloom"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown command"));
}

#[test]
fn profile_prints_samples() {
    let output = run(&["profile", "1", "2", "3", "4", "-r", "3"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "1\n2.5\n4\n2.5\n1\n");
}

#[test]
fn profile_json() {
    let output = run(&["profile", "1", "2", "3", "4", "-r", "3", "--json"]);
    assert!(output.status.success());
    let samples: Vec<f64> = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(samples, vec![1.0, 2.5, 4.0, 2.5, 1.0]);
}

#[test]
fn profile_zero_span_fails() {
    let output = run(&["profile", "0", "1", "1", "0"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Error:"));
}

#[test]
fn profile_accepts_negative_breakpoints() {
    let output = run(&["profile", "-4", "-2", "2", "4", "-r", "2"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).lines().count(), 3);
}

#[test]
fn render_svg_in_draw_order() {
    let dir = TempDir::new().unwrap();
    let rose = sample_file(&dir);

    let output = run(&["render", &rose]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let svg = stdout(&output);
    assert!(svg.starts_with("<?xml"));
    assert_eq!(svg.matches("<path").count(), 9);

    // max, profile, min for each petal in turn
    let classes: Vec<&str> = svg
        .split("class=\"")
        .skip(1)
        .map(|rest| &rest[..rest.find('"').unwrap()])
        .collect();
    assert_eq!(
        classes,
        ["max", "profile", "min", "max", "profile", "min", "max", "profile", "min"]
    );
}

#[test]
fn render_to_file_with_tick() {
    let dir = TempDir::new().unwrap();
    let rose = sample_file(&dir);
    let out = dir.path().join("rose.svg");

    let output = run(&["render", &rose, "-o", out.to_str().unwrap(), "--tick", "0"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<g id=\"rose\" opacity=\"1\""));
}

#[test]
fn render_json() {
    let dir = TempDir::new().unwrap();
    let rose = sample_file(&dir);

    let output = run(&["render", &rose, "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["name"], "sample");
    assert_eq!(value["petals"], 3);
    assert_eq!(value["shapes"].as_array().unwrap().len(), 9);
    assert_eq!(value["shapes"][0]["fill"], "#ff0000");
}

#[test]
fn render_short_row_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "params:\n  - [1, 2, 3, 4]\n  - [1, 2, 3]\n").unwrap();

    let output = run(&["render", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("row 1"), "stderr: {}", stderr(&output));
}

#[test]
fn render_png() {
    let dir = TempDir::new().unwrap();
    let rose = sample_file(&dir);
    let png = dir.path().join("rose.png");

    let output = run(&["render", &rose, "-o", "-", "--png", png.to_str().unwrap(), "--png-scale", "0.5"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let bytes = fs::read(&png).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn render_reads_stdin() {
    let output = run_with_stdin(&["render", "-"], SAMPLE_ROSE);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).matches("<path").count(), 9);
}

#[test]
fn render_json_file_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rose.json");
    fs::write(&path, r#"{"resolution": 4, "params": [[1, 2, 3, 4]]}"#).unwrap();

    let output = run(&["render", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    // A single petal is a full circle, split into two half arcs.
    let svg = stdout(&output);
    assert_eq!(svg.matches("<path").count(), 3);
}

#[test]
fn pulse_table() {
    let output = run(&["pulse", "-n", "3"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "0\t1.000000");
    assert!(lines[2].starts_with("2\t0.99"));
}

#[test]
fn random_is_seeded_and_renderable() {
    let first = run(&["random", "-n", "6", "--seed", "42"]);
    let second = run(&["random", "-n", "6", "--seed", "42"]);
    assert!(first.status.success(), "stderr: {}", stderr(&first));
    assert_eq!(stdout(&first), stdout(&second));

    let output = run_with_stdin(&["render", "-"], &stdout(&first));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).matches("<path").count(), 18);
}

#[test]
fn hit_reports_petal() {
    let dir = TempDir::new().unwrap();
    let rose = sample_file(&dir);

    // Straight up and a little right: first sector.
    let output = run(&["hit", &rose, "1", "-20"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "0\n");

    // Far outside every petal.
    let output = run(&["hit", &rose, "500", "500"]);
    assert_eq!(stdout(&output), "none\n");

    // Canvas pixels just above center land in the first sector.
    let output = run(&["hit", &rose, "201", "150", "--canvas"]);
    assert_eq!(stdout(&output), "0\n");
}
