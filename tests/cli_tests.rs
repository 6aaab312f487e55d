//! CLI integration tests

use std::process::Command;

use tempfile::tempdir;

fn sound_labeler_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sound-labeler"))
}

#[test]
fn help_output() {
    let output = sound_labeler_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BASENAME"));
    assert!(stdout.contains("--input-dir"));
    assert!(stdout.contains("--label-dir"));
    assert!(stdout.contains("--sil-lev"));
    assert!(stdout.contains("--sil-dur"));
    assert!(stdout.contains("--export-timeout"));
}

#[test]
fn version_output() {
    let output = sound_labeler_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sound-labeler"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_basename_is_usage_error() {
    let output = sound_labeler_bin()
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("BASENAME") || stderr.contains("required"),
        "Expected usage error about BASENAME, got: {}",
        stderr
    );
}

#[test]
fn config_path_command() {
    let output = sound_labeler_bin()
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sound-labeler"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let output = sound_labeler_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn config_get_unknown_key() {
    let output = sound_labeler_bin()
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid keys"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_threshold() {
    let dir = tempdir().unwrap();
    let output = sound_labeler_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "set", "sil_lev", "quiet"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("integer") || stderr.contains("Invalid"),
        "Expected error about non-integer value, got: {}",
        stderr
    );
}

#[test]
fn config_init_creates_file() {
    let dir = tempdir().unwrap();
    let output = sound_labeler_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(dir.path().join("sound-labeler/config.toml").exists());
}

#[cfg(unix)]
#[test]
fn missing_pipes_fail_before_any_command() {
    // An empty TMPDIR guarantees neither pipe exists
    let dir = tempdir().unwrap();
    let output = sound_labeler_bin()
        .env("TMPDIR", dir.path())
        .env("HOME", dir.path()) // Keep the user's config out of the run
        .env("XDG_CONFIG_HOME", dir.path())
        .arg("sample1")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist") && stderr.contains("mod-script-pipe"),
        "Expected missing-pipe diagnostic, got: {}",
        stderr
    );
}
