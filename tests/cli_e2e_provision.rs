//! End-to-end tests for the `provision` subcommand.
//!
//! These tests never assume a repository manager is running. Network-facing
//! behavior is pinned by pointing the tool at an unreachable address and
//! asserting the per-row failure isolation and exit status; everything else
//! stays on offline paths (empty manifests, credential sourcing).

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

const HEADER: &str = "name,repo_type,repo_format,proxy_url,blob_store";

/// Nothing is listening on this address; connections fail immediately.
const UNREACHABLE: &str = "http://127.0.0.1:9";

/// An empty manifest (header only) succeeds without needing credentials.
#[test]
fn test_provision_empty_manifest_is_a_noop() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child("repos.csv");
    manifest.write_str(&format!("{HEADER}\n")).unwrap();

    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.arg("provision")
        .arg(manifest.path())
        .env_remove("NEXUS_BASE_URL")
        .env_remove("NEXUS_PASSWORD")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("nothing to do"));
}

/// Without a password, a non-interactive run refuses with a hint instead
/// of hanging on a prompt.
#[test]
fn test_provision_without_password_refuses_non_interactively() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child("repos.csv");
    manifest
        .write_str(&format!(
            "{HEADER}\nr,proxy,npm,https://registry.npmjs.org,default\n"
        ))
        .unwrap();

    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.arg("provision")
        .arg(manifest.path())
        .arg("--base-url")
        .arg(UNREACHABLE)
        .env_remove("NEXUS_PASSWORD")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No password or token available"))
        .stderr(predicate::str::contains("NEXUS_PASSWORD"));
}

/// When the manager is unreachable, every row fails on the existence probe,
/// later rows are still attempted, and the exit status is non-zero.
#[test]
fn test_provision_unreachable_manager_fails_each_row() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child("repos.csv");
    manifest
        .write_str(&format!(
            "{HEADER}\n\
             first,proxy,npm,https://registry.npmjs.org,default\n\
             second,proxy,maven,https://repo1.maven.org/maven2,default\n"
        ))
        .unwrap();

    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.arg("provision")
        .arg(manifest.path())
        .arg("--base-url")
        .arg(UNREACHABLE)
        .arg("--dry-run")
        .env("NEXUS_PASSWORD", "secret")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("existence check failed for 'first'"))
        .stdout(predicate::str::contains("existence check failed for 'second'"))
        .stdout(predicate::str::is_match(r"Failed:\s+2").unwrap())
        .stderr(predicate::str::contains("2 of 2 row(s) failed"));
}

/// The consecutive-failure limit aborts a systemically failing run early.
#[test]
fn test_provision_consecutive_failure_limit_aborts() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child("repos.csv");
    manifest
        .write_str(&format!(
            "{HEADER}\n\
             a,proxy,npm,https://registry.npmjs.org,default\n\
             b,proxy,npm,https://registry.npmjs.org,default\n\
             c,proxy,npm,https://registry.npmjs.org,default\n"
        ))
        .unwrap();

    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.arg("provision")
        .arg(manifest.path())
        .arg("--base-url")
        .arg(UNREACHABLE)
        .arg("--max-consecutive-failures")
        .arg("2")
        .env("NEXUS_PASSWORD", "secret")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 row(s) not attempted"))
        .stderr(predicate::str::contains("2 of 2 row(s) failed"));
}

/// An invalid base URL is rejected before any row is processed.
#[test]
fn test_provision_invalid_base_url() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child("repos.csv");
    manifest
        .write_str(&format!(
            "{HEADER}\nr,proxy,npm,https://registry.npmjs.org,default\n"
        ))
        .unwrap();

    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.arg("provision")
        .arg(manifest.path())
        .arg("--base-url")
        .arg("not a url")
        .env("NEXUS_PASSWORD", "secret")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid base URL"));
}

/// Rows that never reach the network (unknown format, wrong repo_type)
/// fail with their own reasons even when the manager is unreachable.
#[test]
fn test_provision_offline_rows_fail_with_row_reasons() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child("repos.csv");
    manifest
        .write_str(&format!(
            "{HEADER}\n\
             conda-forge,proxy,conda,https://conda.anaconda.org,default\n\
             internal,hosted,npm,https://registry.npmjs.org,default\n"
        ))
        .unwrap();

    let mut cmd = cargo_bin_cmd!("nexus-provision");

    cmd.arg("provision")
        .arg(manifest.path())
        .arg("--base-url")
        .arg(UNREACHABLE)
        .env("NEXUS_PASSWORD", "secret")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("unsupported repo_format 'conda'"))
        .stdout(predicate::str::contains("only 'proxy' repositories are handled"));
}
