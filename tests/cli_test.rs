// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn hook(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("conventional-commit-hook").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn message_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("COMMIT_EDITMSG");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_conventional_message_passes() {
    let dir = TempDir::new().unwrap();
    let input = message_file(&dir, "feat: add login flow");

    hook(&dir)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_type_fails_with_diagnostic() {
    let dir = TempDir::new().unwrap();
    let input = message_file(&dir, "update readme");

    hook(&dir)
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Your commit message is incorrect"));
}

#[test]
fn test_scoped_message_passes() {
    let dir = TempDir::new().unwrap();
    let input = message_file(&dir, "fix(parser): handle trailing comma");

    hook(&dir).arg(&input).assert().success();
}

#[test]
fn test_unknown_type_fails() {
    let dir = TempDir::new().unwrap();
    let input = message_file(&dir, "feature: something");

    hook(&dir).arg(&input).assert().code(1);
}

#[test]
fn test_custom_types_replace_defaults() {
    let dir = TempDir::new().unwrap();
    let input = message_file(&dir, "hotfix: patch prod issue");
    hook(&dir).arg("hotfix").arg(&input).assert().success();

    let input = message_file(&dir, "feat: add login flow");
    hook(&dir).arg("hotfix").arg(&input).assert().code(1);
}

#[test]
fn test_git_message_with_body_passes() {
    let dir = TempDir::new().unwrap();
    let input = message_file(
        &dir,
        "refactor(cli): split dispatch\n\nMoves config loading out of run.\n",
    );

    hook(&dir).arg(&input).assert().success();
}

#[test]
fn test_missing_input_argument_exits_one() {
    let dir = TempDir::new().unwrap();

    hook(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("INPUT"));
}

#[test]
fn test_unreadable_input_exits_one() {
    let dir = TempDir::new().unwrap();

    hook(&dir)
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read commit message"));
}

#[test]
fn test_stray_config_file_is_ignored() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".conventional-commits.toml"),
        "types = [\"ops\"]\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("conventional-commits.toml"), "types = feat\n").unwrap();
    let nested = dir.path().join("sub");
    std::fs::create_dir(&nested).unwrap();
    let input = message_file(&dir, "feat: add login flow");

    Command::cargo_bin("conventional-commit-hook")
        .unwrap()
        .current_dir(&nested)
        .arg(&input)
        .assert()
        .success();
}

#[test]
fn test_types_from_explicit_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("hook.toml");
    std::fs::write(&config, "types = [\"ops\"]\n").unwrap();

    let input = message_file(&dir, "ops: rotate keys");
    hook(&dir).arg("--config").arg(&config).arg(&input).assert().success();

    let input = message_file(&dir, "feat: add login flow");
    hook(&dir).arg("--config").arg(&config).arg(&input).assert().code(1);

    // Command-line types win over the file
    hook(&dir)
        .arg("--config")
        .arg(&config)
        .arg("feat")
        .arg(&input)
        .assert()
        .success();
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();
    let input = message_file(&dir, "feat: add login flow");

    hook(&dir)
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_invalid_utf8_input_exits_one() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("COMMIT_EDITMSG");
    std::fs::write(&input, b"feat: caf\xe9").unwrap();

    hook(&dir)
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("valid UTF-8"));
}

#[test]
fn test_scope_with_breaking_marker_passes() {
    let dir = TempDir::new().unwrap();
    let input = message_file(&dir, "feat(api)!: drop v1 endpoints");

    hook(&dir).arg(&input).assert().success();
}

#[test]
fn test_help_exits_zero() {
    let dir = TempDir::new().unwrap();

    hook(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Conventional Commits"));
}

#[test]
fn test_version_exits_zero() {
    let dir = TempDir::new().unwrap();

    hook(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_types_and_flags_after_input() {
    let dir = TempDir::new().unwrap();
    let input = message_file(&dir, "ops: rotate keys");

    hook(&dir)
        .arg("hotfix")
        .arg("ops")
        .arg(&input)
        .arg("--debug")
        .assert()
        .success();
}

#[test]
fn test_json_output_on_failure() {
    let dir = TempDir::new().unwrap();
    let input = message_file(&dir, "update readme");

    hook(&dir)
        .args(["--format", "json"])
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"valid\": false"))
        .stderr(predicate::str::contains("Your commit message is incorrect"));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let input = message_file(&dir, "docs: explain hooks");

    hook(&dir)
        .args(["--format", "json"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"));
}
