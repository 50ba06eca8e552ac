use assert_cmd::prelude::*;
use predicates::str::contains;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn cli_prints_usage_without_arguments() {
    let mut cmd = Command::cargo_bin("raylib-lua").expect("binary exists");
    cmd.assert()
        .failure()
        .stderr(contains("Usage: raylib-lua <script.lua>"));
}

#[test]
fn cli_reports_missing_script_before_binding() {
    let mut cmd = Command::cargo_bin("raylib-lua").expect("binary exists");
    cmd.arg("/nonexistent/game.lua");
    cmd.assert()
        .failure()
        .stderr(contains("could not read script /nonexistent/game.lua"));
}

#[test]
fn cli_reads_the_script_then_reports_a_bind_failure() {
    let mut script = NamedTempFile::new().expect("temp script");
    script
        .write_all(b"rl.initWindow(640, 480, 'never reached')\n")
        .expect("write script");

    let mut cmd = Command::cargo_bin("raylib-lua").expect("binary exists");
    cmd.arg(script.path())
        .arg("--library")
        .arg("/nonexistent/libraylib.so");
    cmd.assert()
        .failure()
        .stderr(contains("failed to bind the raylib library"));
}

#[test]
fn cli_rejects_unknown_flags() {
    let mut cmd = Command::cargo_bin("raylib-lua").expect("binary exists");
    cmd.arg("game.lua").arg("--frobnicate");
    cmd.assert()
        .failure()
        .stderr(contains("Unknown argument: --frobnicate"));
}

#[test]
fn cli_requires_a_path_after_library_flag() {
    let mut cmd = Command::cargo_bin("raylib-lua").expect("binary exists");
    cmd.arg("game.lua").arg("--library");
    cmd.assert()
        .failure()
        .stderr(contains("--library requires a path"));
}
