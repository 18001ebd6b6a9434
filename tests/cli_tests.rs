//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn toastd_bin() -> Command {
    let mut cmd = Command::cargo_bin("toastd").expect("binary builds");
    // Keep host configuration out of the picture
    cmd.env_remove("TOASTD_HOST")
        .env_remove("TOASTD_PORT")
        .env_remove("TOASTD_WORKERS")
        .env_remove("TOASTD_APP_NAME");
    cmd
}

#[test]
fn help_output() {
    toastd_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--host")
                .and(predicate::str::contains("--port"))
                .and(predicate::str::contains("--workers"))
                .and(predicate::str::contains("send"))
                .and(predicate::str::contains("config")),
        );
}

#[test]
fn version_output() {
    toastd_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("toastd")
                .and(predicate::str::contains(env!("CARGO_PKG_VERSION"))),
        );
}

#[test]
fn config_path_command() {
    toastd_bin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("toastd").and(predicate::str::contains("config.toml")));
}

#[test]
fn config_help() {
    toastd_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("set"))
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("list"))
                .and(predicate::str::contains("path")),
        );
}

#[test]
fn config_set_rejects_unknown_key() {
    toastd_bin()
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_rejects_invalid_port() {
    toastd_bin()
        .args(["config", "set", "port", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("port"));
}

#[test]
fn config_get_rejects_unknown_key() {
    toastd_bin()
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn send_rejects_invalid_level() {
    toastd_bin()
        .args(["send", "Test", "Hello", "--level", "critical"])
        .assert()
        .failure();
}

#[test]
fn send_against_dead_relay_fails() {
    // Port 1 is never serving; connect is refused immediately
    toastd_bin()
        .args(["--host", "127.0.0.1", "--port", "1", "send", "Test", "Hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to reach relay"));
}
