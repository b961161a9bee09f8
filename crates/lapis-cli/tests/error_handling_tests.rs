//! Tests for error handling, suggestions and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lapis(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lapis").unwrap();
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_closed_input_is_cancelled() {
    let temp = TempDir::new().unwrap();
    lapis(&temp)
        .write_stdin("orders\n2.0.0\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Operation cancelled"))
        .stderr(predicate::str::contains("No files were written"));

    assert!(!temp.path().join("src").exists());
}

#[test]
fn test_empty_stdin_is_cancelled() {
    let temp = TempDir::new().unwrap();
    lapis(&temp).write_stdin("").assert().code(2);
}

#[test]
fn test_bad_ttl_reasked_until_valid() {
    let temp = TempDir::new().unwrap();
    lapis(&temp)
        .write_stdin("weather\n\n\n\n\ny\n-5\nsoon\n45\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid cache TTL '-5'"))
        .stdout(predicate::str::contains("Invalid cache TTL 'soon'"));

    let stub = std::fs::read_to_string(temp.path().join("src/apis/weather/index.ts")).unwrap();
    assert!(stub.contains("ttlSeconds: 45"));
}

#[test]
fn test_missing_config_file_exit_code() {
    let temp = TempDir::new().unwrap();
    lapis(&temp)
        .args(["--config", "nope.toml"])
        .write_stdin("")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_configured_method_exit_code() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".lapis.toml"), "[defaults]\nmethod = \"TRACE\"\n").unwrap();

    lapis(&temp)
        .write_stdin("orders\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("defaults.method"))
        .stderr(predicate::str::contains("lapis init --force"));
}

#[test]
fn test_write_failure_exit_code() {
    let temp = TempDir::new().unwrap();
    // A file where the `src` directory should be.
    std::fs::write(temp.path().join("src"), "blocker").unwrap();

    lapis(&temp)
        .write_stdin("orders\n\n\n\n\n\n\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Filesystem error"));
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let temp = TempDir::new().unwrap();
    lapis(&temp).args(["-q", "-v"]).assert().code(2);
}

#[test]
fn test_unknown_subcommand() {
    let temp = TempDir::new().unwrap();
    lapis(&temp)
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("frobnicate"));
}
