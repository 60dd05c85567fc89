//! # Run Reporting
//!
//! Per-row outcome reporting and the dry-run request preview, behind the
//! [`Reporter`] trait so the orchestrator stays free of printing concerns
//! and tests can run silently.
//!
//! The dry-run preview renders the exact endpoint and JSON body the create
//! call would send -- the body comes from the same pure builder the real
//! call uses, so the preview is a trustworthy rendition of the request.

use crate::output::{emoji, row_tag, OutputConfig};
use crate::payload::ProxyRepositoryRequest;
use crate::run::{Outcome, RowOutcome, RunSummary};

/// Receives run events as they happen.
pub trait Reporter {
    /// One row finished with this outcome.
    fn row(&mut self, outcome: &RowOutcome);

    /// Dry-run mode rendered the request that would have been sent.
    fn dry_run_request(&mut self, endpoint: &str, request: &ProxyRepositoryRequest);

    /// The run stopped early; `remaining` rows were never attempted.
    fn aborted(&mut self, remaining: usize);
}

/// Console reporter: one line per row, plus the abort notice and dry-run
/// previews.
pub struct ConsoleReporter {
    out: OutputConfig,
    quiet: bool,
}

impl ConsoleReporter {
    /// `quiet` suppresses everything except failures.
    pub fn new(out: OutputConfig, quiet: bool) -> Self {
        Self { out, quiet }
    }
}

impl Reporter for ConsoleReporter {
    fn row(&mut self, row: &RowOutcome) {
        let tag = row_tag(row.line);
        match &row.outcome {
            Outcome::Created => {
                if !self.quiet {
                    println!(
                        "{} {} Created -> {}",
                        tag,
                        emoji(&self.out, "✅", "[OK]"),
                        row.name
                    );
                }
            }
            Outcome::SkippedExisting => {
                if !self.quiet {
                    println!(
                        "{} {} Exists -> {} (skipping)",
                        tag,
                        emoji(&self.out, "⏭️", "[SKIP]"),
                        row.name
                    );
                }
            }
            Outcome::SkippedDryRun => {
                if !self.quiet {
                    println!(
                        "{} {} Dry-run -> {} (no create call issued)",
                        tag,
                        emoji(&self.out, "🔎", "[DRY]"),
                        row.name
                    );
                }
            }
            Outcome::Failed { reason } => {
                let name = if row.name.is_empty() {
                    "<unnamed>"
                } else {
                    row.name.as_str()
                };
                println!(
                    "{} {} Failed -> {}: {}",
                    tag,
                    emoji(&self.out, "❌", "[ERR]"),
                    name,
                    reason
                );
            }
        }
    }

    fn dry_run_request(&mut self, endpoint: &str, request: &ProxyRepositoryRequest) {
        if self.quiet {
            return;
        }
        let body = match serde_json::to_string_pretty(request) {
            Ok(body) => body,
            Err(e) => format!("<body could not be rendered: {}>", e),
        };
        println!(
            "{} would POST {} with payload:\n{}",
            emoji(&self.out, "🔎", "[DRY]"),
            endpoint,
            body
        );
    }

    fn aborted(&mut self, remaining: usize) {
        println!(
            "{} Aborting after repeated consecutive failures; {} row(s) not attempted",
            emoji(&self.out, "⚠️", "[WARN]"),
            remaining
        );
    }
}

/// Reporter that swallows everything. Used by tests and embedders that only
/// want the returned `RunSummary`.
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn row(&mut self, _outcome: &RowOutcome) {}
    fn dry_run_request(&mut self, _endpoint: &str, _request: &ProxyRepositoryRequest) {}
    fn aborted(&mut self, _remaining: usize) {}
}

/// Print the final summary block with per-outcome counts.
pub fn print_summary(summary: &RunSummary, out: &OutputConfig) {
    println!("\n{} Provisioning Summary:", emoji(out, "📊", "[INFO]"));
    println!("   Rows processed:   {}", summary.len());
    println!("   Created:          {}", summary.created());
    println!("   Skipped existing: {}", summary.skipped_existing());
    if summary.skipped_dry_run() > 0 {
        println!("   Dry-run only:     {}", summary.skipped_dry_run());
    }
    println!("   Failed:           {}", summary.failed());
    if summary.was_aborted() {
        println!(
            "   {} Run aborted early on the consecutive-failure limit",
            emoji(out, "⚠️", "[WARN]")
        );
    }
}
