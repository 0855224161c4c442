//! Job catalog: immutable table of job records, loaded once at startup.
//!
//! Records live in a single `Vec` (catalog order is the ranking tie-break) with a
//! name → index map for lookups. Nothing mutates a catalog after `Catalog::new`.

pub mod defaults;
pub mod handlers;

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::job::JobRecord;

/// On-disk catalog layout. Interest lists fall back to the built-in ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub jobs: Vec<JobRecord>,
    #[serde(default)]
    pub suggested_interests: Option<Vec<String>>,
    #[serde(default)]
    pub default_selection: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    jobs: Vec<JobRecord>,
    by_name: HashMap<String, usize>,
    suggested_interests: Vec<String>,
    default_selection: Vec<String>,
}

impl Catalog {
    /// Validates and indexes `jobs`. Tags are trimmed and lowercased so they
    /// compare against normalized interests.
    pub fn new(
        jobs: Vec<JobRecord>,
        suggested_interests: Vec<String>,
        default_selection: Vec<String>,
    ) -> Result<Self, AppError> {
        let mut by_name = HashMap::with_capacity(jobs.len());
        let mut records = Vec::with_capacity(jobs.len());

        for (index, job) in jobs.into_iter().enumerate() {
            let name = job.name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::Catalog(format!("job #{index} has an empty name")));
            }
            if by_name.insert(name.clone(), index).is_some() {
                return Err(AppError::Catalog(format!("duplicate job name '{name}'")));
            }

            let tags: BTreeSet<String> = job
                .tags
                .iter()
                .map(|t| t.trim().to_lowercase())
                .collect();
            if tags.is_empty() || tags.iter().any(String::is_empty) {
                return Err(AppError::Catalog(format!(
                    "job '{name}' needs at least one non-empty tag"
                )));
            }

            records.push(JobRecord {
                name,
                tags,
                description: job.description,
            });
        }

        Ok(Self {
            jobs: records,
            by_name,
            suggested_interests,
            default_selection,
        })
    }

    pub fn builtin() -> Result<Self, AppError> {
        Self::new(
            defaults::builtin_jobs(),
            to_owned(defaults::SUGGESTED_INTERESTS),
            to_owned(defaults::DEFAULT_SELECTION),
        )
    }

    /// Reads a JSON catalog file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid catalog JSON in {}", path.display()))?;

        let catalog = Self::new(
            file.jobs,
            file.suggested_interests
                .unwrap_or_else(|| to_owned(defaults::SUGGESTED_INTERESTS)),
            file.default_selection
                .unwrap_or_else(|| to_owned(defaults::DEFAULT_SELECTION)),
        )?;

        info!(
            "Loaded {} jobs from catalog file {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// File catalog when a path is configured, built-in otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()?),
        }
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn get(&self, name: &str) -> Option<&JobRecord> {
        self.by_name.get(name).map(|&i| &self.jobs[i])
    }

    pub fn suggested_interests(&self) -> &[String] {
        &self.suggested_interests
    }

    pub fn default_selection(&self) -> &[String] {
        &self.default_selection
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
