//! Interest normalization: free text + pre-selected picks → canonical interest list.

use std::collections::HashSet;

use crate::errors::AppError;

/// Splits comma-separated free text into trimmed, lowercase, non-empty tokens.
pub fn normalize_items(text: &str) -> Vec<String> {
    text.split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Merges pre-selected interests with free-text ones.
///
/// Pre-selected entries come first. Both sides are trimmed and lowercased, and the
/// result is deduplicated keeping the first occurrence, so feeding the output back
/// in (as either argument) returns it unchanged.
pub fn normalize(text: &str, preselected: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    preselected
        .iter()
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .chain(normalize_items(text))
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Like [`normalize`], but an empty result is an error: nothing downstream runs on it.
pub fn require_interests(text: &str, preselected: &[String]) -> Result<Vec<String>, AppError> {
    let interests = normalize(text, preselected);
    if interests.is_empty() {
        return Err(AppError::NoInterests);
    }
    Ok(interests)
}
