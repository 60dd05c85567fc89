//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `nexus-provision` application. It uses the `thiserror` library to create a
//! comprehensive `Error` enum that covers all anticipated failure modes,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures and ensure
//!   type safety.
//!
//! Four variants are *row-scoped* and recovered by the orchestrator rather
//! than propagated: `InvalidRow`, `UnknownFormat`, `ExistenceCheck`, and
//! `CreateRequest`. They terminate processing of a single manifest row only;
//! the remaining rows in the batch are still attempted.

use thiserror::Error;

/// Main error type for nexus-provision operations
#[derive(Error, Debug)]
pub enum Error {
    /// A manifest row is structurally invalid (missing or empty fields,
    /// unsupported `repo_type`, malformed proxy URL).
    ///
    /// Row-scoped: recorded as a `Failed` outcome for that row.
    #[error("invalid row {line}: {message}")]
    InvalidRow { line: u64, message: String },

    /// A `repo_format` alias does not map to any canonical format.
    ///
    /// Row-scoped. The optional hint carries a did-you-mean suggestion and
    /// the list of supported aliases.
    #[error("unsupported repo_format '{alias}'{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    UnknownFormat {
        alias: String,
        /// Optional hint naming a similar known alias
        hint: Option<String>,
    },

    /// The existence probe for a repository failed with a network error or
    /// an unexpected status code.
    ///
    /// Row-scoped. Probe failures are never treated as "does not exist" --
    /// that could trigger a duplicate-creation attempt downstream.
    #[error("existence check failed for '{name}': {message}")]
    ExistenceCheck { name: String, message: String },

    /// The create call for a repository returned a non-success response or
    /// failed at the transport level.
    ///
    /// Row-scoped. Includes the surfaced status and response body.
    #[error("create request failed for '{name}': {message}")]
    CreateRequest { name: String, message: String },

    /// A file-level problem with the manifest (unreadable file, missing
    /// required header columns). Unlike row-scoped errors, this aborts the
    /// whole run before any row is processed.
    #[error("manifest error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Manifest {
        message: String,
        /// Optional hint for how to fix the manifest
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV parsing error, wrapped from `csv::Error`.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// An HTTP transport error, wrapped from `reqwest::Error`.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error is scoped to a single manifest row.
    ///
    /// Row-scoped errors are recorded as `Failed` outcomes and never abort
    /// the batch.
    pub fn is_row_scoped(&self) -> bool {
        matches!(
            self,
            Error::InvalidRow { .. }
                | Error::UnknownFormat { .. }
                | Error::ExistenceCheck { .. }
                | Error::CreateRequest { .. }
        )
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
