//! Integration tests for the hookset CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Git repository with a config file
fn project(config_name: &str, config: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    git2::Repository::init(temp_dir.path()).unwrap();
    fs::write(temp_dir.path().join(config_name), config).unwrap();
    temp_dir
}

fn hookset(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hookset").unwrap();
    cmd.current_dir(dir)
        .env_remove("DYNO")
        .env_remove("HOOKSET_NO_CI")
        .env_remove("HOOKSET_CI_ONLY")
        .env_remove("HOOKSET_PRESERVE_UNUSED")
        .env_remove("HOOKSET_PROJECT_PATH")
        .env_remove("HOOKSET_RUNNER")
        .env_remove("RUST_LOG");
    cmd
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().unwrap();
    hookset(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("declarative git hooks"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().unwrap();
    hookset(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hookset"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let temp_dir = TempDir::new().unwrap();
    hookset(temp_dir.path())
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_config_show_json() {
    let project = project(
        "hookset.yaml",
        "hooks:\n  pre-commit:\n    command: cargo fmt --check\n",
    );

    let assert = hookset(project.path())
        .args(["config", "show", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["hooks"]["pre-commit"]["command"], "cargo fmt --check");
    assert_eq!(value["hooks"]["pre-commit"]["noCi"], true);
    assert_eq!(value["ciOnly"], false);
}

#[test]
fn test_empty_config_shows_defaults() {
    let project = project("hookset.json", "{}");

    let assert = hookset(project.path())
        .args(["config", "show"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["noCi"], true);
    assert_eq!(value["ciOnly"], false);
    assert_eq!(value["preserveUnused"], false);
    assert_eq!(value["hooks"], serde_json::json!({}));
}

#[test]
fn test_flags_override_config_file() {
    let project = project("hookset.toml", "noCi = false\n");

    hookset(project.path())
        .args(["--no-ci", "--ci-only", "config", "show", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("noCi: true"))
        .stdout(predicate::str::contains("ciOnly: true"));
}

#[test]
fn test_validate_reports_unknown_hook() {
    let project = project(
        "hookset.yaml",
        "hooks:\n  pre-commit:\n    command: make\n  not-a-real-hook:\n    command: make\n",
    );

    hookset(project.path())
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-a-real-hook"));
}

#[test]
fn test_validate_accepts_known_hooks() {
    let project = project(
        "hookset.yaml",
        "hooks:\n  pre-commit:\n    command: make\n  pre-push:\n    command: make test\n",
    );

    hookset(project.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_ambiguous_hook_fails() {
    let project = project(
        ".hooksetrc",
        r#"{"hooks": {"pre-commit": {"command": "make", "file": "lint.ts"}}}"#,
    );

    hookset(project.path())
        .args(["hooks", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only one of `file` or `command`"));
}

#[test]
fn test_hooks_list_shows_discovered_script() {
    let project = project("hookset.yaml", "hooks:\n  pre-push:\n");
    fs::create_dir_all(project.path().join("scripts/hooks")).unwrap();
    fs::write(project.path().join("scripts/hooks/pre-push.ts"), "").unwrap();

    hookset(project.path())
        .args(["hooks", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pre-push.ts"));
}

#[test]
fn test_hooks_resolve_undeclared() {
    let project = project("hookset.yaml", "");

    hookset(project.path())
        .args(["hooks", "resolve", "pre-commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not configured"));
}

#[test]
fn test_skips_on_heroku() {
    let project = project(
        "hookset.yaml",
        "hooks:\n  pre-commit:\n    command: make\n    file: x.ts\n",
    );

    hookset(project.path())
        .env("DYNO", "web.1")
        .env("HOME", "/app")
        .args(["hooks", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped setting hooks on Heroku"));
}
