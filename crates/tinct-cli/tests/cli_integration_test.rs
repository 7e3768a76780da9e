//! CLI Integration Tests (Blackbox)
//!
//! These tests drive the `tinct` binary through its command-line interface
//! and check what reaches stdout.
//!
//! What these tests protect:
//! - Help and version output are available
//! - Plain output reproduces the input byte for byte
//! - Token dump output classifies streamed input
//! - Configuration errors produce a failing exit code

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn tinct() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tinct"));
    cmd.env_remove("RUST_LOG").env_remove("NO_COLOR");
    cmd
}

/// Run tinct with `args`, feeding `stdin` to it
fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = tinct()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn tinct");
    // the child may exit before reading (e.g. on a config error)
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().expect("Failed to wait for tinct")
}

// =============================================================================
// Test: --help and --version
// =============================================================================

#[test]
fn test_help_flag_produces_output() {
    let output = tinct().arg("--help").output().expect("Failed to execute tinct --help");

    assert!(output.status.success(), "tinct --help should exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--dump-tokens"));
    assert!(stdout.contains("--chunk-size"));
}

#[test]
fn test_version_flag() {
    let output = tinct().arg("--version").output().expect("Failed to execute tinct --version");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("tinct"));
}

#[test]
fn test_unknown_flag_fails() {
    let output = tinct().arg("--definitely-not-a-flag").output().unwrap();
    assert!(!output.status.success());
}

// =============================================================================
// Test: streaming output
// =============================================================================

#[test]
fn test_plain_output_matches_input() {
    let input = "Call `run()` here:\n```py\nfor i in range(3):\n    print(i)\n```\n";
    let output = run_with_stdin(&["--no-color", "--chunk-size", "2"], input);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), input);
}

#[test]
fn test_colored_output_contains_escapes() {
    let output = run_with_stdin(&["--chunk-size", "5"], "```python\ndef f(x):\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\x1b["));
    assert!(stdout.contains("def"));
}

#[test]
fn test_dump_tokens_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("reply.md");
    std::fs::write(&input_path, "```python\nimport os\nos.getcwd()\n```\n").unwrap();

    let output = tinct()
        .args(["--dump-tokens", "--chunk-size", "1"])
        .arg(&input_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"{"text":"import","format":{"kind":"keyword"}}"#));
    assert!(stdout.contains(r#"{"text":"getcwd","format":{"kind":"function"}}"#));
    assert!(stdout.contains(r#"{"text":"os","format":{"kind":"identifier"}}"#));
}

#[test]
fn test_missing_input_file_fails() {
    let output = tinct().arg("/nonexistent/path/to/reply.md").output().unwrap();
    assert!(!output.status.success());
}

// =============================================================================
// Test: configuration
// =============================================================================

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("tinct.toml");
    std::fs::write(&config_path, "[palette]\nkeyword = \"nope\"\n").unwrap();

    let output = run_with_stdin(&["--config", config_path.to_str().unwrap()], "x");
    assert!(!output.status.success());
}

#[test]
fn test_write_default_config_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config_arg = config_path.to_str().unwrap();

    let output = tinct().args(["--write-default-config", config_arg]).output().unwrap();
    assert!(output.status.success());
    assert!(config_path.exists());

    let output = run_with_stdin(&["--config", config_arg, "--no-color"], "hello (world)");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hello (world)");
}

#[test]
fn test_write_default_config_without_path_uses_home() {
    let home = TempDir::new().unwrap();

    let output = tinct()
        .env("HOME", home.path())
        .arg("--write-default-config")
        .output()
        .unwrap();

    assert!(output.status.success());
    let written = home.path().join(".config").join("tinct").join("config.toml");
    assert!(written.exists(), "expected {} to be written", written.display());
    assert!(String::from_utf8_lossy(&output.stdout).contains("config.toml"));
}
