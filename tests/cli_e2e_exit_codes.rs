//! End-to-end tests for CLI exit codes.
//!
//! These tests verify that the CLI returns the correct exit codes according
//! to the standard conventions:
//!
//! - Exit code 0: Success
//! - Exit code 1: General error (missing manifest, invalid rows, failed rows)
//! - Exit code 2: Invalid command-line usage (handled by clap)

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

const HEADER: &str = "name,repo_type,repo_format,proxy_url,blob_store";

/// Exit code 0 is returned for successful operations.
#[test]
fn test_exit_code_success() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child("repos.csv");

    manifest
        .write_str(&format!(
            "{HEADER}\nmy-maven-central,proxy,maven,https://repo1.maven.org/maven2,default\n"
        ))
        .unwrap();

    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.current_dir(temp.path())
        .arg("validate")
        .arg(manifest.path())
        .assert()
        .code(0);
}

/// Exit code 0 is returned for --help.
#[test]
fn test_exit_code_help() {
    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.arg("--help").assert().code(0);
}

/// Exit code 0 is returned for --version.
#[test]
fn test_exit_code_version() {
    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.arg("--version").assert().code(0);
}

/// Exit code 1 is returned for a missing manifest file.
#[test]
fn test_exit_code_error_manifest_not_found() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.current_dir(temp.path())
        .arg("validate")
        .arg("nonexistent.csv")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Manifest file not found"));
}

/// Exit code 1 is returned when the manifest header is missing columns.
#[test]
fn test_exit_code_error_missing_columns() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child("repos.csv");

    manifest
        .write_str("name,repo_type,repo_format,proxy_url\n")
        .unwrap();

    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.current_dir(temp.path())
        .arg("validate")
        .arg(manifest.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing required columns"));
}

/// Exit code 1 is returned when any row is invalid.
#[test]
fn test_exit_code_error_invalid_row() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child("repos.csv");

    manifest
        .write_str(&format!(
            "{HEADER}\ninternal-releases,hosted,maven,https://repo1.maven.org/maven2,default\n"
        ))
        .unwrap();

    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.current_dir(temp.path())
        .arg("validate")
        .arg(manifest.path())
        .assert()
        .code(1);
}

/// Exit code 2 is returned for unknown command-line flags (handled by clap).
#[test]
fn test_exit_code_usage_unknown_flag() {
    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.arg("--unknown-flag-that-does-not-exist")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"));
}

/// Exit code 2 is returned for unknown subcommand.
#[test]
fn test_exit_code_usage_unknown_subcommand() {
    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.arg("unknown-subcommand-xyz")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"));
}

/// Exit code 2 is returned when required arguments are missing.
#[test]
fn test_exit_code_usage_missing_required_arg() {
    let mut cmd = cargo_bin_cmd!("nexus-provision");

    // The 'completions' command requires a SHELL argument
    cmd.arg("completions")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("required"));
}

/// Exit code 2 is returned for invalid argument values.
#[test]
fn test_exit_code_usage_invalid_arg_value() {
    let mut cmd = cargo_bin_cmd!("nexus-provision");

    // 'completions' requires a valid shell name
    cmd.arg("completions")
        .arg("invalid-shell-name")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

/// Exit code 2 is returned when --verbose and --quiet are used together.
#[test]
fn test_exit_code_usage_verbose_quiet_conflict() {
    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.arg("--verbose")
        .arg("--quiet")
        .arg("formats")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

/// Subcommand help returns exit code 0.
#[test]
fn test_exit_code_subcommand_help() {
    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.arg("provision").arg("--help").assert().code(0);
}

/// --verbose flag appears in help output.
#[test]
fn test_verbose_flag_in_help() {
    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("--verbose"));
}

/// --quiet flag appears in help output.
#[test]
fn test_quiet_flag_in_help() {
    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("--quiet"));
}

/// Global --quiet flag works with subcommands.
#[test]
fn test_quiet_flag_works_with_subcommand() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child("repos.csv");

    manifest
        .write_str(&format!(
            "{HEADER}\nr,proxy,npm,https://registry.npmjs.org,default\n"
        ))
        .unwrap();

    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.current_dir(temp.path())
        .arg("--quiet")
        .arg("validate")
        .arg(manifest.path())
        .assert()
        .code(0);
}
