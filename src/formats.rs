//! # Format Resolution
//!
//! Maps user-supplied package format aliases to the canonical format
//! identifiers understood by the repository manager. Users write whatever
//! name is natural to them (`python`, `golang`, `rust`); the management API
//! wants exactly one identifier per ecosystem.
//!
//! The alias table is a fixed lookup mapping rather than branching logic:
//! adding a new alias is a one-line change to [`ALIASES`] and touches no
//! other component.

use std::fmt;

use crate::error::{Error, Result};
use crate::suggestions;

/// A canonical package format identifier, as the repository manager knows it.
///
/// This is a closed set: every alias accepted by [`resolve`] maps to exactly
/// one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalFormat {
    Maven2,
    Npm,
    Pypi,
    Nuget,
    Docker,
    Raw,
    Rubygems,
    Yum,
    Helm,
    Go,
    Cargo,
}

impl CanonicalFormat {
    /// Every canonical format, in display order.
    pub const ALL: [CanonicalFormat; 11] = [
        CanonicalFormat::Maven2,
        CanonicalFormat::Npm,
        CanonicalFormat::Pypi,
        CanonicalFormat::Nuget,
        CanonicalFormat::Docker,
        CanonicalFormat::Raw,
        CanonicalFormat::Rubygems,
        CanonicalFormat::Yum,
        CanonicalFormat::Helm,
        CanonicalFormat::Go,
        CanonicalFormat::Cargo,
    ];

    /// The format identifier as reported by the repository manager
    /// (e.g. in repository listings).
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalFormat::Maven2 => "maven2",
            CanonicalFormat::Npm => "npm",
            CanonicalFormat::Pypi => "pypi",
            CanonicalFormat::Nuget => "nuget",
            CanonicalFormat::Docker => "docker",
            CanonicalFormat::Raw => "raw",
            CanonicalFormat::Rubygems => "rubygems",
            CanonicalFormat::Yum => "yum",
            CanonicalFormat::Helm => "helm",
            CanonicalFormat::Go => "go",
            CanonicalFormat::Cargo => "cargo",
        }
    }

    /// The path segment used in the repository-creation REST endpoint.
    ///
    /// The manager identifies the Maven format as `maven2` but routes its
    /// create endpoint under `/repositories/maven/proxy`; every other format
    /// uses the same word in both places.
    pub fn endpoint_segment(&self) -> &'static str {
        match self {
            CanonicalFormat::Maven2 => "maven",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for CanonicalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed alias table: user-facing name to canonical format, many-to-one.
///
/// Lookup is case-insensitive (aliases here are lowercase). New aliases are
/// additive entries; nothing else needs to change.
pub const ALIASES: &[(&str, CanonicalFormat)] = &[
    ("maven", CanonicalFormat::Maven2),
    ("maven2", CanonicalFormat::Maven2),
    ("npm", CanonicalFormat::Npm),
    ("pypi", CanonicalFormat::Pypi),
    ("python", CanonicalFormat::Pypi),
    ("nuget", CanonicalFormat::Nuget),
    ("docker", CanonicalFormat::Docker),
    ("raw", CanonicalFormat::Raw),
    ("rubygems", CanonicalFormat::Rubygems),
    ("gem", CanonicalFormat::Rubygems),
    ("yum", CanonicalFormat::Yum),
    ("rpm", CanonicalFormat::Yum),
    ("helm", CanonicalFormat::Helm),
    ("go", CanonicalFormat::Go),
    ("golang", CanonicalFormat::Go),
    ("cargo", CanonicalFormat::Cargo),
    ("rust", CanonicalFormat::Cargo),
];

/// Resolve a user-supplied format alias to its canonical format.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Unknown
/// aliases yield [`Error::UnknownFormat`] carrying a did-you-mean hint and
/// the supported-alias list; the error is row-scoped and must not abort the
/// batch.
pub fn resolve(alias: &str) -> Result<CanonicalFormat> {
    let key = alias.trim().to_lowercase();
    ALIASES
        .iter()
        .find(|(a, _)| *a == key)
        .map(|(_, format)| *format)
        .ok_or_else(|| Error::UnknownFormat {
            alias: alias.to_string(),
            hint: Some(suggestions::unknown_format_hint(&key, &known_aliases())),
        })
}

/// All known aliases, sorted, for help text and hints.
pub fn known_aliases() -> Vec<&'static str> {
    let mut aliases: Vec<&'static str> = ALIASES.iter().map(|(a, _)| *a).collect();
    aliases.sort_unstable();
    aliases
}
