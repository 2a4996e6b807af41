//! Integration tests for the command-line interface

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{config_path, qrcast, write_payload};

// ============================================================================
// frames
// ============================================================================

#[test]
fn frames_splits_file_into_balanced_chunks() {
    let dir = TempDir::new().unwrap();
    let payload = write_payload(dir.path(), "data.txt", "x".repeat(1200));

    let output = qrcast(&dir)
        .args(["frames", "--max-chunk-size", "500"])
        .arg(&payload)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let frames: Vec<&str> = stdout.lines().collect();
    assert_eq!(frames.len(), 3);
    for (i, frame) in frames.iter().enumerate() {
        assert!(frame.starts_with(&format!("{}:3:", i)));
        let (_, content) = frame.split_once('/').unwrap();
        assert_eq!(content.len(), 400);
    }
}

#[test]
fn frames_reads_stdin() {
    let dir = TempDir::new().unwrap();

    qrcast(&dir)
        .arg("frames")
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("0:1:5D41402ABC4B2A76B9719D911017C592/hello\n");
}

#[test]
fn frames_dash_means_stdin() {
    let dir = TempDir::new().unwrap();

    qrcast(&dir)
        .args(["frames", "-"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("/hello\n"));
}

#[test]
fn frames_keeps_delimiters_in_content() {
    let dir = TempDir::new().unwrap();

    qrcast(&dir)
        .args(["frames", "-c", "100"])
        .write_stdin("a:b/c:d")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("/a:b/c:d\n"));
}

#[test]
fn frames_output_snapshot() {
    let dir = TempDir::new().unwrap();
    let output = qrcast(&dir)
        .args(["frames", "-c", "4"])
        .write_stdin("abcdefghij")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    insta::with_settings!({filters => vec![(r"[0-9A-F]{32}", "[MD5]")]}, {
        insta::assert_snapshot!(stdout, @r"
        0:3:[MD5]/abcd
        1:3:[MD5]/efgh
        2:3:[MD5]/ij
        ");
    });
}

#[test]
fn frames_json_report() {
    let dir = TempDir::new().unwrap();
    let output = qrcast(&dir)
        .args(["frames", "--json", "-c", "3"])
        .write_stdin("abcdefg")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["chunk_size"], 3);
    assert_eq!(json["frames"].as_array().unwrap().len(), 3);
    assert_eq!(json["checksum"].as_str().unwrap().len(), 32);
}

#[test]
fn frames_uses_config_file_chunk_size() {
    let dir = TempDir::new().unwrap();
    std::fs::write(config_path(&dir), "[transfer]\nmax_chunk_size = 2\n").unwrap();

    qrcast(&dir)
        .arg("frames")
        .write_stdin("abcdef")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0:3:"));
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn empty_payload_is_rejected() {
    let dir = TempDir::new().unwrap();

    qrcast(&dir)
        .arg("frames")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Payload is empty"));
}

#[test]
fn zero_chunk_size_is_rejected() {
    let dir = TempDir::new().unwrap();

    qrcast(&dir)
        .args(["frames", "--max-chunk-size", "0"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();

    qrcast(&dir)
        .args(["frames", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("does-not-exist.txt"));
}

#[test]
fn binary_payload_is_rejected() {
    let dir = TempDir::new().unwrap();
    let payload = write_payload(dir.path(), "blob.bin", [0x61, 0xff, 0xfe]);

    qrcast(&dir)
        .arg("frames")
        .arg(&payload)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn oversized_frame_is_rejected_before_display() {
    let dir = TempDir::new().unwrap();

    qrcast(&dir)
        .args(["frames", "-c", "4000", "--ecl", "H"])
        .write_stdin("x".repeat(4000))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not fit"));
}

#[test]
fn invalid_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(config_path(&dir), "[playback]\nspeeds_ms = []\n").unwrap();

    qrcast(&dir)
        .arg("frames")
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one delay"));
}

#[test]
fn unknown_error_correction_level_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    qrcast(&dir)
        .args(["frames", "--ecl", "X"])
        .assert()
        .code(2);
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_honors_env_override() {
    let dir = TempDir::new().unwrap();

    qrcast(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(
            dir.path().to_string_lossy().as_ref(),
        ));
}

#[test]
fn config_migrate_yes_creates_default_file() {
    let dir = TempDir::new().unwrap();

    qrcast(&dir)
        .args(["config", "migrate", "--yes"])
        .assert()
        .success();

    let written = std::fs::read_to_string(config_path(&dir)).unwrap();
    let config = qrcast::Config::from_toml(&written).unwrap();
    assert_eq!(config, qrcast::Config::default());
}

#[test]
fn config_migrate_without_tty_changes_nothing() {
    let dir = TempDir::new().unwrap();

    qrcast(&dir)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made"));

    assert!(!config_path(&dir).exists());
}

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();

    qrcast(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_chunk_size = 580"))
        .stdout(predicate::str::contains("[playback]"));
}

// ============================================================================
// Misc
// ============================================================================

#[test]
fn completions_mention_subcommands() {
    let dir = TempDir::new().unwrap();

    qrcast(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("qrcast"))
        .stdout(predicate::str::contains("frames"));
}

#[test]
fn log_file_receives_logs() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("qrcast.log");

    qrcast(&dir)
        .args(["frames", "--log-level", "info", "--log-file"])
        .arg(&log)
        .write_stdin("hello")
        .assert()
        .success()
        .stderr("");

    let contents = std::fs::read_to_string(log).unwrap();
    assert!(contents.contains("payload framed"));
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();

    qrcast(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("frames"))
        .stdout(predicate::str::contains("config"));
}
