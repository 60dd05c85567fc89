//! # Nexus Provision Library
//!
//! This library provides the core functionality for bulk-provisioning proxy
//! repositories in a Nexus-style repository manager. It is designed to be
//! used by the `nexus-provision` command-line tool but can also be embedded
//! in other applications that provision repositories programmatically.
//!
//! ## Quick Example
//!
//! ```
//! use nexus_provision::{formats, manifest, payload};
//!
//! let manifest_csv = "\
//! name,repo_type,repo_format,proxy_url,blob_store
//! my-maven-central,proxy,maven,https://repo1.maven.org/maven2,default";
//!
//! let rows = manifest::from_reader(manifest_csv.as_bytes()).unwrap();
//! let descriptor = rows[0].descriptor.as_ref().unwrap();
//!
//! // "maven" and "maven2" are aliases for the same canonical format
//! let format = formats::resolve(&descriptor.repo_format).unwrap();
//! assert_eq!(format.as_str(), "maven2");
//!
//! let request = payload::build(descriptor, format);
//! assert_eq!(request.storage.blob_store_name, "default");
//! ```
//!
//! ## Core Concepts
//!
//! The library is built around a few key concepts:
//!
//! - **Manifest (`manifest`)**: Parses the CSV manifest into one
//!   `RepositoryDescriptor` per row, carrying invalid rows as row-scoped
//!   errors instead of aborting the batch.
//! - **Format Resolution (`formats`)**: Maps user-supplied format aliases
//!   (e.g. `python`, `golang`) to the canonical identifiers the management
//!   API expects, via a fixed additive lookup table.
//! - **Payload Construction (`payload`)**: Pure construction of the
//!   camelCase request body, including the format-specific sections the API
//!   requires.
//! - **Management API (`api`)**: The `RepositoryApi` trait abstracts the
//!   existence probe and create call; `HttpRepositoryApi` implements them
//!   over blocking HTTP.
//! - **Orchestration (`run`)**: Sequences probe -> build -> create-or-skip
//!   for each row with isolated failure handling, aggregating a
//!   `RunSummary`.
//! - **Reporting (`report`)**: Per-row outcome lines, dry-run request
//!   previews, and the final summary.
//!
//! ## Execution Flow
//!
//! `run::execute_batch` drives each manifest row, in input order:
//!
//! 1. An invalid row records a `Failed` outcome.
//! 2. The format alias is resolved; unknown aliases fail the row.
//! 3. The existence probe runs; an existing name is `SkippedExisting` and a
//!    probe error fails the row (never treated as "absent").
//! 4. In dry-run mode the request is rendered and the row is
//!    `SkippedDryRun`; otherwise the create call yields `Created` or
//!    `Failed`.
//!
//! No failure in one row ever prevents the next row from being attempted;
//! the exit status of the CLI reflects whether any row failed.

pub mod api;
pub mod defaults;
pub mod error;
pub mod formats;
pub mod manifest;
pub mod output;
pub mod payload;
pub mod report;
pub mod run;
pub mod suggestions;

#[cfg(test)]
mod formats_proptest;
