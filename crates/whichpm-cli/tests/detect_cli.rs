//! Integration tests for `whichpm detect`.
//!
//! These tests lay out project fixtures in temp directories and verify the
//! resolved answer and the `--json` output contract.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn cargo_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.args(["run", "-p", "whichpm-cli", "--bin", "whichpm", "--"]);
    cmd
}

fn write_manifest(dir: &Path, json: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("package.json"), json).unwrap();
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn detects_npm_from_lock_file() {
    let dir = tempdir().unwrap();
    write_manifest(dir.path(), "{}");
    fs::write(dir.path().join("package-lock.json"), "{}").unwrap();

    let output = cargo_bin()
        .args(["--cwd", dir.path().to_str().unwrap(), "detect"])
        .output()
        .expect("failed to run whichpm");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "npm");
}

#[test]
fn default_command_is_detect() {
    let dir = tempdir().unwrap();
    write_manifest(dir.path(), "{}");
    fs::write(dir.path().join("yarn.lock"), "").unwrap();

    let output = cargo_bin()
        .args(["--cwd", dir.path().to_str().unwrap()])
        .output()
        .expect("failed to run whichpm");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "yarn");
}

#[test]
fn undetermined_without_signals_or_preference() {
    let dir = tempdir().unwrap();

    let output = cargo_bin()
        .args(["--cwd", dir.path().to_str().unwrap(), "detect"])
        .output()
        .expect("failed to run whichpm");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "undetermined");
}

#[test]
fn preference_breaks_the_maximal_fallback() {
    let dir = tempdir().unwrap();

    let output = cargo_bin()
        .args([
            "--cwd",
            dir.path().to_str().unwrap(),
            "detect",
            "--prefer",
            "pnpm,yarn",
        ])
        .output()
        .expect("failed to run whichpm");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "pnpm");
}

#[test]
fn yarn_workspace_member_resolves_through_root() {
    let dir = tempdir().unwrap();
    write_manifest(
        dir.path(),
        r#"{"private": true, "workspaces": {"packages": ["pkgs/*"]}}"#,
    );
    let member = dir.path().join("pkgs").join("a");
    write_manifest(&member, "{}");

    let output = cargo_bin()
        .args(["--json", "--cwd", member.to_str().unwrap(), "detect"])
        .output()
        .expect("failed to run whichpm");

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(parsed["ok"], true);
    assert_eq!(parsed["packageManager"], "yarn");
}

#[test]
fn manager_field_wins_among_candidates() {
    let dir = tempdir().unwrap();
    write_manifest(
        dir.path(),
        r#"{"private": true, "workspaces": ["pkgs/*"], "packageManager": "npm@10.2.0"}"#,
    );

    let output = cargo_bin()
        .args([
            "--cwd",
            dir.path().to_str().unwrap(),
            "detect",
            "--prefer",
            "yarn",
        ])
        .output()
        .expect("failed to run whichpm");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "npm");
}

#[test]
fn ignore_manager_field_flag() {
    let dir = tempdir().unwrap();
    write_manifest(
        dir.path(),
        r#"{"private": true, "workspaces": ["pkgs/*"], "packageManager": "npm@10.2.0"}"#,
    );

    let output = cargo_bin()
        .args([
            "--cwd",
            dir.path().to_str().unwrap(),
            "detect",
            "--prefer",
            "yarn",
            "--ignore-manager-field",
        ])
        .output()
        .expect("failed to run whichpm");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "yarn");
}

#[test]
fn ambiguous_lock_files_fail_with_sorted_kinds() {
    let dir = tempdir().unwrap();
    write_manifest(dir.path(), "{}");
    fs::write(dir.path().join("yarn.lock"), "").unwrap();
    fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();
    fs::write(dir.path().join("package-lock.json"), "{}").unwrap();

    let output = cargo_bin()
        .args(["--cwd", dir.path().to_str().unwrap(), "detect"])
        .output()
        .expect("failed to run whichpm");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("npm, pnpm, yarn"), "stderr was: {stderr}");
}

#[test]
fn ambiguous_lock_files_json_error_envelope() {
    let dir = tempdir().unwrap();
    write_manifest(dir.path(), "{}");
    fs::write(dir.path().join("yarn.lock"), "").unwrap();
    fs::write(dir.path().join("package-lock.json"), "{}").unwrap();

    let output = cargo_bin()
        .args(["--json", "--cwd", dir.path().to_str().unwrap(), "detect"])
        .output()
        .expect("failed to run whichpm");

    assert!(!output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(parsed["ok"], false);
    assert_eq!(parsed["error"]["code"], "AMBIGUOUS_LOCK_FILES");
    assert!(parsed["error"]["message"]
        .as_str()
        .unwrap()
        .contains("npm, yarn"));
}
