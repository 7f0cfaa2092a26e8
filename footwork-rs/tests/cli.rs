//! CLI integration tests
//!
//! These run the real `footwork` binary against sequence files written into
//! temporary directories.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const WALK: &str = "\
playback:
  fps: 10
  frames_per_segment: 4
  pause_frames: 2
steps:
  - R: 1200
    F: 90
  - L: 1200
    F: 90
";

fn footwork() -> Command {
    let mut cmd = Command::cargo_bin("footwork").unwrap();
    cmd.env_remove("FOOTWORK_FPS")
        .env_remove("FOOTWORK_FRAMES_PER_SEGMENT")
        .env_remove("FOOTWORK_PAUSE_FRAMES");
    cmd
}

fn write_sequence(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn render_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    let file = write_sequence(dir.path(), "walk.yml", WALK);

    let output = footwork().arg("render").arg(&file).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    // Header, two segments of four frames, two hold frames
    assert_eq!(lines.len(), 1 + 2 * 4 + 2);
    assert!(lines[0].starts_with("frame,left_x,left_y"));
    assert!(lines[1].starts_with("0,-0.5,0,0.5,0,"));
    assert!(lines[10].starts_with("9,-0.5,2,-0.5,1,"));
}

#[test]
fn render_json_by_output_extension() {
    let dir = TempDir::new().unwrap();
    let file = write_sequence(dir.path(), "walk.yml", WALK);
    let out = dir.path().join("frames.json");

    footwork()
        .arg("render")
        .arg(&file)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 10 frames"));

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["fps"], 10);
    assert_eq!(value["frame_count"], 10);
    assert_eq!(value["frames"][3]["right"], serde_json::json!([-0.5, 1.0]));
}

#[test]
fn command_line_overrides_file_settings() {
    let dir = TempDir::new().unwrap();
    let file = write_sequence(dir.path(), "walk.yml", WALK);

    let output = footwork()
        .args(["render", "--frames-per-segment", "3", "--pause-frames", "0"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 1 + 6);
}

#[test]
fn environment_overrides_file_settings() {
    let dir = TempDir::new().unwrap();
    let file = write_sequence(dir.path(), "walk.yml", WALK);

    footwork()
        .env("FOOTWORK_PAUSE_FRAMES", "5")
        .arg("info")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total frames"))
        .stdout(predicate::str::contains("13"));
}

#[test]
fn info_reports_skipped_steps() {
    let dir = TempDir::new().unwrap();
    let file = write_sequence(
        dir.path(),
        "noisy.yml",
        "- R: 1200\n  F: 90\n- L: 1245\n  F: 90\n",
    );

    footwork()
        .arg("info")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped steps"))
        .stdout(predicate::str::contains("Waypoints"));
}

#[test]
fn waypoints_table_lists_every_stance() {
    let dir = TempDir::new().unwrap();
    let file = write_sequence(dir.path(), "walk.yml", WALK);

    footwork()
        .arg("waypoints")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("(-0.50, 2.00)"))
        .stdout(predicate::str::contains("90.0°"));
}

#[test]
fn validate_warns_on_unknown_code() {
    let dir = TempDir::new().unwrap();
    let file = write_sequence(dir.path(), "noisy.yml", "- L: 1500\n  F: 0\n");

    footwork()
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown direction code 1500"))
        .stdout(predicate::str::contains("1 warning(s)"));
}

#[test]
fn invalid_step_fails_with_index() {
    let dir = TempDir::new().unwrap();
    let file = write_sequence(
        dir.path(),
        "broken.yml",
        "- R: 1200\n  F: 90\n- L: 600\n  R: 600\n  F: 90\n",
    );

    footwork()
        .arg("validate")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("index 1"));
}

#[test]
fn missing_file_fails() {
    footwork()
        .args(["render", "does-not-exist.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load sequence file"));
}

#[test]
fn zero_fps_is_rejected() {
    let dir = TempDir::new().unwrap();
    let file = write_sequence(dir.path(), "walk.yml", WALK);

    footwork()
        .args(["render", "--fps", "0"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid playback configuration"));
}

#[test]
fn batch_renders_every_match() {
    let dir = TempDir::new().unwrap();
    write_sequence(dir.path(), "one.yml", WALK);
    write_sequence(dir.path(), "two.yml", "- L: 300\n  F: 0\n");
    let out_dir = dir.path().join("frames");
    let pattern = dir.path().join("*.yml");

    footwork()
        .arg("batch")
        .arg(pattern.to_string_lossy().as_ref())
        .arg("--out-dir")
        .arg(&out_dir)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 2 of 2 sequences"));

    assert!(out_dir.join("one.json").is_file());
    assert!(out_dir.join("two.json").is_file());
}

#[test]
fn batch_without_matches_fails() {
    let dir = TempDir::new().unwrap();
    let pattern = dir.path().join("*.yml");

    footwork()
        .arg("batch")
        .arg(pattern.to_string_lossy().as_ref())
        .arg("--out-dir")
        .arg(dir.path().join("frames"))
        .assert()
        .failure();
}

#[test]
fn completions_are_generated() {
    footwork()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("footwork"));
}

#[test]
fn start_stance_seeds_waypoints() {
    let dir = TempDir::new().unwrap();
    let file = write_sequence(
        dir.path(),
        "horse.yml",
        "start: horse\nsteps:\n  - R: 1200\n    F: 90\n",
    );

    footwork()
        .arg("waypoints")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("(-0.75, 0.00)"))
        .stdout(predicate::str::contains("(-0.75, 1.00)"));

    footwork()
        .arg("info")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("horse"));
}

#[test]
fn validate_warns_on_out_of_range_code() {
    let dir = TempDir::new().unwrap();
    let file = write_sequence(
        dir.path(),
        "odd.yml",
        "- R: 70000\n  F: 90\n- L: 1200.0\n  F: 90\n",
    );

    footwork()
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown direction code 70000"))
        .stdout(predicate::str::contains("unknown direction code 1200.0"))
        .stdout(predicate::str::contains("2 warning(s)"));
}
