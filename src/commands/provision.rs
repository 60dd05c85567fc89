//! Provision command implementation
//!
//! The provision command executes the full pipeline for each manifest row:
//! 1. Parse and validate the row
//! 2. Resolve the format alias to its canonical identifier
//! 3. Probe the manager for an existing repository with that name
//! 4. Create the proxy repository (or render the request in dry-run mode)
//!
//! Failures are row-scoped: one bad row never blocks the rest of the batch.
//! The exit status reflects whether any row failed.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use url::Url;

use nexus_provision::api::{Credentials, HttpRepositoryApi};
use nexus_provision::defaults;
use nexus_provision::manifest;
use nexus_provision::output::{emoji, OutputConfig};
use nexus_provision::report::{self, ConsoleReporter};
use nexus_provision::run::{self, ProvisionOptions};
use nexus_provision::suggestions;

/// Arguments for the provision command
#[derive(Args, Debug)]
pub struct ProvisionArgs {
    /// Path to the CSV manifest (name,repo_type,repo_format,proxy_url,blob_store)
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Base URL of the repository manager
    #[arg(long, value_name = "URL", env = defaults::BASE_URL_ENV, default_value = defaults::BASE_URL)]
    pub base_url: String,

    /// Username for the management API
    #[arg(short, long, value_name = "USER", env = defaults::USERNAME_ENV, default_value = defaults::USERNAME)]
    pub username: String,

    /// Password or token (prompted interactively when omitted)
    #[arg(short, long, env = defaults::PASSWORD_ENV, hide_env_values = true)]
    pub password: Option<String>,

    /// Disable TLS certificate verification (useful for self-signed)
    #[arg(long)]
    pub insecure: bool,

    /// Show the requests that would be sent without creating anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = defaults::REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Abort the run after this many consecutive failed rows
    #[arg(long, value_name = "N")]
    pub max_consecutive_failures: Option<u32>,
}

/// Execute the provision command
pub fn execute(args: ProvisionArgs, color_flag: &str, quiet: bool) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let start_time = Instant::now();

    if !args.manifest.exists() {
        return Err(suggestions::manifest_not_found(&args.manifest));
    }

    let base_url = Url::parse(&args.base_url)
        .with_context(|| format!("invalid base URL: {}", args.base_url))?;

    if !quiet {
        println!(
            "{} Provisioning proxy repositories from {}",
            emoji(&out, "🚀", "[RUN]"),
            args.manifest.display()
        );
        println!();

        if args.dry_run {
            println!(
                "{} DRY RUN MODE - No repositories will be created",
                emoji(&out, "🔎", "[DRY]")
            );
            println!();
        }
    }

    let rows = manifest::from_file(&args.manifest)?;
    if rows.is_empty() {
        if !quiet {
            println!("Manifest contains no rows; nothing to do.");
        }
        return Ok(());
    }
    log::debug!("parsed {} manifest row(s)", rows.len());

    let password = match args.password {
        Some(password) => password,
        None => prompt_password()?,
    };

    let api = HttpRepositoryApi::new(
        base_url,
        Credentials {
            username: args.username,
            password,
        },
        args.insecure,
        Duration::from_secs(args.timeout),
    )?;

    let options = ProvisionOptions {
        dry_run: args.dry_run,
        max_consecutive_failures: args.max_consecutive_failures,
        throttle: defaults::CREATE_THROTTLE,
    };
    let mut reporter = ConsoleReporter::new(out.clone(), quiet);
    let summary = run::execute_batch(&rows, &api, &options, &mut reporter);

    if !quiet {
        report::print_summary(&summary, &out);
        println!(
            "\n{} Finished in {:.2}s",
            emoji(&out, "✅", "[OK]"),
            start_time.elapsed().as_secs_f64()
        );
    }

    if summary.has_failures() {
        anyhow::bail!("{} of {} row(s) failed", summary.failed(), summary.len());
    }
    Ok(())
}

/// Ask for the password interactively. Refuses with a hint-bearing error
/// when no terminal is attached, rather than hanging on a closed stdin.
fn prompt_password() -> Result<String> {
    if !console::user_attended() {
        return Err(suggestions::password_unavailable());
    }
    dialoguer::Password::new()
        .with_prompt("Nexus password/token")
        .interact()
        .map_err(|_| suggestions::password_unavailable())
}
