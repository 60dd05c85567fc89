//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks a CSV
//! manifest without contacting the repository manager.
//!
//! ## Functionality
//!
//! - **Structural validation**: Parses every row and reports missing or
//!   empty fields, unsupported `repo_type` values, and malformed upstream
//!   URLs.
//! - **Format resolution**: Resolves every `repo_format` alias and reports
//!   unknown aliases with did-you-mean hints.
//! - **Payload construction**: Builds the create request for every valid
//!   row, confirming which endpoint the provision run would target.
//!
//! This command is a safe, offline operation that performs no network
//! traffic and does not modify anything.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use nexus_provision::api;
use nexus_provision::formats;
use nexus_provision::manifest;
use nexus_provision::output::{emoji, row_tag, OutputConfig};
use nexus_provision::payload;
use nexus_provision::suggestions;

/// Validate a CSV manifest without contacting the repository manager
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the CSV manifest (name,repo_type,repo_format,proxy_url,blob_store)
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,
}

/// Execute the `validate` command.
///
/// Reports per-row problems and exits non-zero when any row is invalid, so
/// manifests can be linted in CI before a provisioning run.
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);

    println!(
        "{} Validating manifest: {}",
        emoji(&out, "🔍", "[SCAN]"),
        args.manifest.display()
    );

    if !args.manifest.exists() {
        return Err(suggestions::manifest_not_found(&args.manifest));
    }

    let rows = manifest::from_file(&args.manifest)?;
    println!(
        "{} Manifest parsed successfully ({} row(s))",
        emoji(&out, "✅", "[OK]"),
        rows.len()
    );

    let mut invalid = 0usize;

    println!("\n{} Checking rows...", emoji(&out, "🔍", "[SCAN]"));
    for row in &rows {
        let descriptor = match &row.descriptor {
            Ok(descriptor) => descriptor,
            Err(e) => {
                println!("{} {} {}", row_tag(row.line), emoji(&out, "❌", "[ERR]"), e);
                invalid += 1;
                continue;
            }
        };

        match formats::resolve(&descriptor.repo_format) {
            Ok(format) => {
                let request = payload::build(descriptor, format);
                println!(
                    "{} {} {} ({}) -> POST {}",
                    row_tag(row.line),
                    emoji(&out, "✅", "[OK]"),
                    request.name,
                    format,
                    api::proxy_create_path(format)
                );
            }
            Err(e) => {
                println!(
                    "{} {} {}: {}",
                    row_tag(row.line),
                    emoji(&out, "❌", "[ERR]"),
                    descriptor.name,
                    e
                );
                invalid += 1;
            }
        }
    }

    println!("\n{} Manifest Summary:", emoji(&out, "📊", "[INFO]"));
    println!("   Total rows: {}", rows.len());
    println!("   Valid:      {}", rows.len() - invalid);
    println!("   Invalid:    {}", invalid);

    if invalid > 0 {
        anyhow::bail!("manifest validation failed: {} invalid row(s)", invalid);
    }

    println!(
        "\n{} Manifest is valid",
        emoji(&out, "✅", "[OK]")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "name,repo_type,repo_format,proxy_url,blob_store";

    fn write_manifest(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("repos.csv");
        fs::write(&path, format!("{HEADER}\n{body}")).unwrap();
        path
    }

    #[test]
    fn test_execute_missing_manifest() {
        let result = execute(
            ValidateArgs {
                manifest: PathBuf::from("/nonexistent/repos.csv"),
            },
            "never",
        );
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Manifest file not found"));
    }

    #[test]
    fn test_execute_valid_manifest() {
        let dir = TempDir::new().unwrap();
        let manifest = write_manifest(
            &dir,
            "my-maven-central,proxy,maven,https://repo1.maven.org/maven2,default\n",
        );

        let result = execute(ValidateArgs { manifest }, "never");
        assert!(result.is_ok());
    }

    #[test]
    fn test_execute_invalid_row_fails() {
        let dir = TempDir::new().unwrap();
        let manifest = write_manifest(
            &dir,
            "bad,hosted,maven,https://repo1.maven.org/maven2,default\n\
             good,proxy,npm,https://registry.npmjs.org,default\n",
        );

        let result = execute(ValidateArgs { manifest }, "never");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("1 invalid row"));
    }

    #[test]
    fn test_execute_unknown_format_fails() {
        let dir = TempDir::new().unwrap();
        let manifest = write_manifest(
            &dir,
            "conda-forge,proxy,conda,https://conda.anaconda.org,default\n",
        );

        let result = execute(ValidateArgs { manifest }, "never");
        assert!(result.is_err());
    }
}
