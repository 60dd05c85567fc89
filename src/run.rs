//! # Execution Orchestrator
//!
//! Drives each manifest row through format resolution, the existence probe,
//! and the create-or-skip decision, and aggregates the per-row outcomes into
//! a [`RunSummary`].
//!
//! The central invariant is *row isolation*: every failure while processing
//! one row is captured as that row's `Failed` outcome and never prevents
//! subsequent rows from being attempted. Row-scoped errors are values here,
//! not propagated results -- `execute_batch` itself cannot fail.
//!
//! Re-running a batch is safe: rows whose repository already exists come
//! back as `SkippedExisting` without any mutating call.

use std::time::Duration;

use crate::api::RepositoryApi;
use crate::defaults;
use crate::formats;
use crate::manifest::ManifestRow;
use crate::payload;
use crate::report::Reporter;

/// The outcome of one manifest row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The repository was created.
    Created,
    /// A repository with this name already exists; nothing was sent.
    SkippedExisting,
    /// Dry-run mode: the request was rendered but not sent.
    SkippedDryRun,
    /// The row failed; the reason is preserved for the report.
    Failed { reason: String },
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

/// One row's outcome, tagged with its manifest position for reporting.
#[derive(Debug, Clone)]
pub struct RowOutcome {
    /// Manifest line the row was read from.
    pub line: u64,
    /// Repository name; may be empty for rows too malformed to carry one.
    pub name: String,
    pub outcome: Outcome,
}

/// Aggregated result of a provisioning run.
///
/// Outcomes appear in manifest order. The summary is only complete once
/// `execute_batch` returns; no row's outcome depends on another's.
#[derive(Debug, Default)]
pub struct RunSummary {
    outcomes: Vec<RowOutcome>,
    aborted: bool,
}

impl RunSummary {
    pub fn outcomes(&self) -> &[RowOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Created))
    }

    pub fn skipped_existing(&self) -> usize {
        self.count(|o| matches!(o, Outcome::SkippedExisting))
    }

    pub fn skipped_dry_run(&self) -> usize {
        self.count(|o| matches!(o, Outcome::SkippedDryRun))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| o.is_failed())
    }

    /// Whether any row failed; drives the process exit status.
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|r| r.outcome.is_failed())
    }

    /// Whether the run stopped early on the consecutive-failure limit.
    pub fn was_aborted(&self) -> bool {
        self.aborted
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|r| predicate(&r.outcome))
            .count()
    }

    fn record(&mut self, outcome: RowOutcome) {
        self.outcomes.push(outcome);
    }
}

/// Options controlling a provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionOptions {
    /// Render requests without sending the mutating create call.
    pub dry_run: bool,
    /// Abort the run after this many consecutive failed rows. `None`
    /// disables the heuristic; already-completed rows keep their outcomes.
    pub max_consecutive_failures: Option<u32>,
    /// Pause after each create attempt, to stay gentle on the server.
    pub throttle: Duration,
}

impl Default for ProvisionOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            max_consecutive_failures: None,
            throttle: defaults::CREATE_THROTTLE,
        }
    }
}

/// Process every manifest row in order and aggregate the outcomes.
///
/// Rows are independent units of work: a failure in one is recorded and the
/// next row is attempted. The reporter sees each outcome as it completes,
/// so operators watch progress row by row.
pub fn execute_batch(
    rows: &[ManifestRow],
    api: &dyn RepositoryApi,
    options: &ProvisionOptions,
    reporter: &mut dyn Reporter,
) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut consecutive_failures: u32 = 0;

    for (index, row) in rows.iter().enumerate() {
        let outcome = process_row(row, api, options, reporter);

        if outcome.is_failed() {
            consecutive_failures += 1;
        } else {
            consecutive_failures = 0;
        }

        let row_outcome = RowOutcome {
            line: row.line,
            name: row.name.clone(),
            outcome,
        };
        reporter.row(&row_outcome);
        summary.record(row_outcome);

        if let Some(limit) = options.max_consecutive_failures {
            if limit > 0 && consecutive_failures >= limit {
                let remaining = rows.len() - index - 1;
                if remaining > 0 {
                    summary.aborted = true;
                    reporter.aborted(remaining);
                }
                break;
            }
        }
    }

    summary
}

/// Run one row through the pipeline. Every early return is an outcome, not
/// an error: this is where row isolation is enforced.
fn process_row(
    row: &ManifestRow,
    api: &dyn RepositoryApi,
    options: &ProvisionOptions,
    reporter: &mut dyn Reporter,
) -> Outcome {
    let descriptor = match &row.descriptor {
        Ok(descriptor) => descriptor,
        Err(e) => {
            return Outcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    let format = match formats::resolve(&descriptor.repo_format) {
        Ok(format) => format,
        Err(e) => {
            return Outcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    let exists = match api.repository_exists(&descriptor.name) {
        Ok(exists) => exists,
        Err(e) => {
            return Outcome::Failed {
                reason: e.to_string(),
            }
        }
    };
    if exists {
        return Outcome::SkippedExisting;
    }

    let request = payload::build(descriptor, format);

    if options.dry_run {
        reporter.dry_run_request(&api.create_endpoint(format), &request);
        return Outcome::SkippedDryRun;
    }

    let result = api.create_proxy_repository(format, &request);
    if !options.throttle.is_zero() {
        std::thread::sleep(options.throttle);
    }

    match result {
        Ok(()) => Outcome::Created,
        Err(e) => Outcome::Failed {
            reason: e.to_string(),
        },
    }
}
