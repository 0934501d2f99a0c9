use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_help() {
    cargo::cargo_bin_cmd!("glock")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--second"))
        .stdout(predicate::str::contains("--meridiem"))
        .stdout(predicate::str::contains("--color"))
        .stdout(predicate::str::contains("Press q, Esc or Ctrl-C to quit."));
}

#[test]
fn test_short_help() {
    cargo::cargo_bin_cmd!("glock")
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("A digital clock in your terminal"));
}

#[test]
fn test_config_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("glock.toml");

    cargo::cargo_bin_cmd!("glock")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[display]"));
    assert!(content.contains("color = \"green\""));
}

#[test]
fn test_config_init_twice_keeps_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("glock.toml");
    fs::write(&config_path, "[display]\nseconds = true\n").unwrap();

    cargo::cargo_bin_cmd!("glock")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(&config_path).unwrap(),
        "[display]\nseconds = true\n"
    );
}

#[test]
fn test_not_a_terminal_exits_with_error() {
    // stdout is captured by the test harness, so terminal setup must fail.
    cargo::cargo_bin_cmd!("glock")
        .arg("--second")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Terminal error"));
}

#[test]
fn test_unknown_color_is_not_a_startup_error() {
    cargo::cargo_bin_cmd!("glock")
        .args(["--color", "tomato"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Terminal error"))
        .stderr(predicate::str::contains("Configuration error").not());
}

#[test]
fn test_missing_config_file() {
    cargo::cargo_bin_cmd!("glock")
        .args(["--config", "/nonexistent/glock.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Run 'glock config init'"));
}

#[test]
fn test_malformed_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("glock.toml");
    fs::write(&config_path, "[display]\nmeridiem = 12\n").unwrap();

    cargo::cargo_bin_cmd!("glock")
        .args(["--config", config_path.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML parsing error"));
}

#[test]
fn test_valid_config_reaches_terminal_setup() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("glock.toml");

    cargo::cargo_bin_cmd!("glock")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success();

    cargo::cargo_bin_cmd!("glock")
        .args(["--config", config_path.to_str().unwrap(), "-m"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Terminal error"));
}

#[test]
fn test_subcommand_rejects_clock_flags() {
    cargo::cargo_bin_cmd!("glock")
        .args(["--second", "config", "init"])
        .assert()
        .failure();
}
