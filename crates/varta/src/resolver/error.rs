//! Error types for table resolution.

use thiserror::Error;

/// An error that occurred while resolving a compiled table.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Table traversal reached a node lacking both the exact key and `"*"`.
    #[error("no entry for '{key}' at level {level}, available: {}", available.join(", "))]
    MalformedTable {
        key: String,
        level: usize,
        available: Vec<String>,
        suggestions: Vec<String>,
    },

    /// A token has no argument value.
    #[error("missing argument for token '{name}'")]
    MissingArgument { name: String },

    /// A token's argument has the wrong value kind.
    #[error("argument for token '{name}' must be {expected}")]
    WrongArgumentType { name: String, expected: &'static str },

    /// A pronoun token was resolved for an empty list of people.
    #[error("cannot resolve pronoun '{name}' for zero people")]
    NoPeople { name: String },

    /// Two tokens registered a substitution under the same name.
    #[error("substitution for token '{name}' registered more than once")]
    DuplicateToken { name: String },

    /// Resolution by bare hash found no translation store entry.
    #[error("no pattern for hash '{hash}' in locale '{locale}'")]
    UnknownHash { locale: String, hash: String },
}

/// Compute "did you mean" suggestions for a failed key lookup.
///
/// Returns up to three candidates from `available`, most similar first.
pub fn compute_suggestions(input: &str, available: &[String]) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = available
        .iter()
        .map(|candidate| (strsim::jaro_winkler(input, candidate), candidate))
        .filter(|(score, _)| *score >= 0.7)
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().take(3).map(|(_, candidate)| candidate.clone()).collect()
}
