use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single job profile from the catalog. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub name: String,
    /// Stored sorted so display order never depends on load order.
    pub tags: BTreeSet<String>,
    pub description: String,
}

impl JobRecord {
    pub fn new(name: &str, tags: &[&str], description: &str) -> Self {
        Self {
            name: name.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: description.to_string(),
        }
    }

    /// Tags shared with the given interests, in interest order.
    pub fn matched_interests<'a>(&self, interests: &'a [String]) -> Vec<&'a str> {
        interests
            .iter()
            .filter(|i| self.tags.contains(i.as_str()))
            .map(String::as_str)
            .collect()
    }
}
