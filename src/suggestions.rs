//! # Error Suggestions
//!
//! Helper functions for generating helpful error messages with hints.
//! Following CLI recommendations, errors should tell users what went wrong
//! AND how to fix it.

use std::path::Path;

/// Generate an error for when the manifest file is not found.
///
/// Includes hints about the expected manifest shape.
pub fn manifest_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Manifest file not found: {path}\n\n\
         hint: Pass the path to a CSV manifest as the first argument\n\
         hint: Expected header: name,repo_type,repo_format,proxy_url,blob_store",
        path = path.display()
    )
}

/// Generate an error for when no password is available and the terminal is
/// not interactive.
pub fn password_unavailable() -> anyhow::Error {
    anyhow::anyhow!(
        "No password or token available\n\n\
         hint: Set the NEXUS_PASSWORD environment variable\n\
         hint: Or pass --password (visible in process listings; prefer the env var)\n\
         hint: Or run from an interactive terminal to be prompted"
    )
}

/// Build the did-you-mean hint for an unknown format alias.
///
/// Returns a hint naming the closest known alias (when one is within edit
/// distance 2) followed by the full list of supported aliases.
pub fn unknown_format_hint(alias: &str, supported: &[&str]) -> String {
    let did_you_mean = find_similar(alias, supported)
        .map(|s| format!("did you mean '{s}'? "))
        .unwrap_or_default();

    format!(
        "{did_you_mean}supported formats: {}",
        supported.join(", ")
    )
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
pub fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0usize; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}
