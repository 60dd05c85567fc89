//! # Manifest Parsing
//!
//! This module defines the data structures that represent the CSV manifest
//! of repositories to provision, as well as the logic for parsing it.
//!
//! ## Key Components
//!
//! - **`RepositoryDescriptor`**: one fully validated manifest row -- the
//!   repository name, raw format alias, upstream URL, and blob store name.
//!   Immutable once produced.
//!
//! - **`ManifestRow`**: the fail-soft wrapper the orchestrator consumes. A
//!   structurally invalid row is carried as an `Err` inside its row rather
//!   than aborting the parse, so one bad row never blocks the rest of the
//!   batch.
//!
//! ## Parsing
//!
//! `from_file` / `from_reader` are the entry points. Two scopes of failure:
//!
//! 1. **File-level**: an unreadable file or a header missing required
//!    columns fails the whole run before any row is processed.
//! 2. **Row-level**: missing or empty fields, a `repo_type` other than
//!    `proxy`, or a malformed upstream URL fail that row only.
//!
//! Fields are whitespace-trimmed and the header tolerates a UTF-8 BOM.
//! Input order is preserved so processing order matches the manifest.

use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

/// The required manifest header columns, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 5] =
    ["name", "repo_type", "repo_format", "proxy_url", "blob_store"];

/// The only repository type this engine provisions.
const PROXY_TYPE: &str = "proxy";

/// One validated manifest row, ready for format resolution and payload
/// construction.
#[derive(Debug, Clone)]
pub struct RepositoryDescriptor {
    /// Repository name; the unique key in the target system.
    pub name: String,
    /// Raw user-supplied format alias, resolved later by `formats::resolve`.
    pub repo_format: String,
    /// Absolute URL of the upstream source to proxy.
    pub proxy_url: Url,
    /// Name of a pre-existing blob store in the target system.
    pub blob_store: String,
}

/// One manifest row as read, valid or not.
///
/// `line` is the line number in the manifest file (the header is line 1).
/// `name` is best-effort for reporting and may be empty when the row is too
/// malformed to carry one.
#[derive(Debug)]
pub struct ManifestRow {
    pub line: u64,
    pub name: String,
    pub descriptor: Result<RepositoryDescriptor>,
}

/// Raw CSV record, before validation. Missing fields deserialize to empty
/// strings so validation can name them precisely.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    repo_type: String,
    #[serde(default)]
    repo_format: String,
    #[serde(default)]
    proxy_url: String,
    #[serde(default)]
    blob_store: String,
}

/// Parse a manifest file into rows, preserving input order.
pub fn from_file(path: &Path) -> Result<Vec<ManifestRow>> {
    let file = File::open(path)?;
    from_reader(file)
}

/// Parse manifest CSV from any reader, preserving input order.
pub fn from_reader<R: io::Read>(reader: R) -> Result<Vec<ManifestRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    // Normalize the header once: strip a UTF-8 BOM and stray whitespace so
    // both the column check and per-row deserialization see clean names.
    let headers: csv::StringRecord = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect::<Vec<_>>()
        .into();
    check_required_columns(&headers)?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                let line = e
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(rows.len() as u64 + 2);
                rows.push(ManifestRow {
                    line,
                    name: String::new(),
                    descriptor: Err(Error::InvalidRow {
                        line,
                        message: format!("unreadable record: {}", e),
                    }),
                });
                continue;
            }
        };

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRecord = match record.deserialize(Some(&headers)) {
            Ok(raw) => raw,
            Err(e) => {
                rows.push(ManifestRow {
                    line,
                    name: String::new(),
                    descriptor: Err(Error::InvalidRow {
                        line,
                        message: format!("malformed record: {}", e),
                    }),
                });
                continue;
            }
        };

        let name = raw.name.clone();
        let descriptor = validate_record(raw, line);
        rows.push(ManifestRow {
            line,
            name,
            descriptor,
        });
    }

    Ok(rows)
}

/// Verify the header carries every required column.
///
/// A missing column is a file-level error: the original batch would
/// misassign every row, so nothing is processed.
fn check_required_columns(headers: &csv::StringRecord) -> Result<()> {
    let present: BTreeSet<&str> = headers.iter().collect();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !present.contains(c))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::Manifest {
            message: format!("missing required columns: {}", missing.join(", ")),
            hint: Some(format!(
                "expected header: {}",
                REQUIRED_COLUMNS.join(",")
            )),
        })
    }
}

/// Validate one raw record into a descriptor.
fn validate_record(raw: RawRecord, line: u64) -> Result<RepositoryDescriptor> {
    let mut empty: Vec<&str> = Vec::new();
    if raw.name.is_empty() {
        empty.push("name");
    }
    if raw.repo_type.is_empty() {
        empty.push("repo_type");
    }
    if raw.repo_format.is_empty() {
        empty.push("repo_format");
    }
    if raw.proxy_url.is_empty() {
        empty.push("proxy_url");
    }
    if raw.blob_store.is_empty() {
        empty.push("blob_store");
    }
    if !empty.is_empty() {
        return Err(Error::InvalidRow {
            line,
            message: format!("missing or empty fields: {}", empty.join(", ")),
        });
    }

    if !raw.repo_type.eq_ignore_ascii_case(PROXY_TYPE) {
        return Err(Error::InvalidRow {
            line,
            message: format!(
                "repo_type is '{}'; only '{}' repositories are handled",
                raw.repo_type, PROXY_TYPE
            ),
        });
    }

    let proxy_url = Url::parse(&raw.proxy_url).map_err(|e| Error::InvalidRow {
        line,
        message: format!("proxy_url '{}' is not an absolute URL: {}", raw.proxy_url, e),
    })?;
    if proxy_url.cannot_be_a_base() {
        return Err(Error::InvalidRow {
            line,
            message: format!("proxy_url '{}' is not an absolute URL", raw.proxy_url),
        });
    }

    Ok(RepositoryDescriptor {
        name: raw.name,
        repo_format: raw.repo_format,
        proxy_url,
        blob_store: raw.blob_store,
    })
}
