//! CLI integration tests

use std::process::Command;

use tempfile::TempDir;

/// Binary with config isolated to a fresh directory and no API credentials
fn relay_scribe_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_relay-scribe"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("ASSEMBLYAI_API_KEY")
        .env_remove("ASSEMBLYAI_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    let output = relay_scribe_bin(&home)
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("transcription"));
    assert!(stdout.contains("--initial-delay"));
    assert!(stdout.contains("--poll-interval"));
    assert!(stdout.contains("--deadline"));
    assert!(stdout.contains("--content-type"));
    assert!(stdout.contains("--output"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    let output = relay_scribe_bin(&home)
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("relay-scribe"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    let output = relay_scribe_bin(&home)
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("relay-scribe"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let home = TempDir::new().unwrap();
    let output = relay_scribe_bin(&home)
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
fn config_set_then_get() {
    let home = TempDir::new().unwrap();

    let output = relay_scribe_bin(&home)
        .args(["config", "set", "poll_interval", "5s"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let output = relay_scribe_bin(&home)
        .args(["config", "get", "poll_interval"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "5s");
}

#[test]
fn config_list_masks_api_key() {
    let home = TempDir::new().unwrap();

    let output = relay_scribe_bin(&home)
        .args(["config", "set", "api_key", "abcdefghijklmnop"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let output = relay_scribe_bin(&home)
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("abcd...mnop"));
    assert!(!stdout.contains("abcdefghijklmnop"));
    assert!(stdout.contains("deadline"));
    assert!(stdout.contains("(not set)"));
}

#[test]
fn config_init_twice_fails() {
    let home = TempDir::new().unwrap();

    let first = relay_scribe_bin(&home)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(first.status.success());

    let second = relay_scribe_bin(&home)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(!second.status.success());
}

#[test]
fn invalid_deadline_error() {
    let home = TempDir::new().unwrap();
    let output = relay_scribe_bin(&home)
        .args(["--deadline", "invalid", "talk.wav"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("deadline"),
        "Expected error about invalid deadline, got: {}",
        stderr
    );
}

#[test]
fn missing_file_argument_is_usage_error() {
    let home = TempDir::new().unwrap();
    let output = relay_scribe_bin(&home)
        .env("ASSEMBLYAI_API_KEY", "test-key")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No audio file"), "got: {}", stderr);
}
