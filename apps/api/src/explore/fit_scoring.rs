//! Fit Scoring: pluggable, trait-based scorer measuring a job's tags against the
//! user's interests.
//!
//! Default: `OverlapFitScorer` (precision/coverage blend with an anti-obsession penalty).
//!
//! `AppState` holds an `Arc<dyn FitScorer>`, built at startup from `Config::scoring`.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::session::ObsessionWeights;

// ────────────────────────────────────────────────────────────────────────────
// Parameters
// ────────────────────────────────────────────────────────────────────────────

/// Tunable scoring constants. Defaults reproduce the reference ranking exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringParams {
    /// Weight of |overlap| / |job tags|.
    pub precision_weight: f64,
    /// Weight of |overlap| / |user interests|.
    pub coverage_weight: f64,
    /// Score removed per unit of weight above `neutral_weight`, per overlapping interest.
    pub penalty_rate: f64,
    pub neutral_weight: f64,
    pub min_weight: f64,
    pub max_weight: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            precision_weight: 0.6,
            coverage_weight: 0.4,
            penalty_rate: 0.05,
            neutral_weight: 1.0,
            min_weight: 1.0,
            max_weight: 3.0,
        }
    }
}

impl ScoringParams {
    /// Every constant must be finite and non-negative, with
    /// `min_weight <= neutral_weight <= max_weight`. Anything else can push a
    /// score outside [0, 1] or turn the penalty into a bonus.
    pub fn validate(&self) -> Result<(), String> {
        let constants = [
            ("precision_weight", self.precision_weight),
            ("coverage_weight", self.coverage_weight),
            ("penalty_rate", self.penalty_rate),
            ("neutral_weight", self.neutral_weight),
            ("min_weight", self.min_weight),
            ("max_weight", self.max_weight),
        ];
        for (name, value) in constants {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a finite number >= 0, got {value}"));
            }
        }
        if !(self.min_weight <= self.neutral_weight && self.neutral_weight <= self.max_weight) {
            return Err(format!(
                "weights must satisfy min <= neutral <= max, got {} / {} / {}",
                self.min_weight, self.neutral_weight, self.max_weight
            ));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The fit scorer trait. Implement this to swap backends without touching the
/// ranker or the handlers.
///
/// Implementations must return a value in [0, 1], and exactly 0.0 when the
/// interests and tags share nothing.
pub trait FitScorer: Send + Sync {
    fn score(
        &self,
        interests: &[String],
        job_tags: &BTreeSet<String>,
        weights: &ObsessionWeights,
    ) -> f64;

    fn params(&self) -> &ScoringParams;

    /// Label reported back to callers, for transparency.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// OverlapFitScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Algorithm:
/// 1. overlap = interests ∩ tags; empty → 0.0
/// 2. coverage = |overlap| / max(1, |interests|)
/// 3. precision = |overlap| / max(1, |tags|)
/// 4. base = precision_weight × precision + coverage_weight × coverage
/// 5. penalty = Σ over overlap of (w − neutral) × penalty_rate, for w > neutral
/// 6. max(0, base − penalty)
#[derive(Debug, Clone, Default)]
pub struct OverlapFitScorer {
    pub params: ScoringParams,
}

impl OverlapFitScorer {
    pub fn new(params: ScoringParams) -> Self {
        Self { params }
    }
}

impl FitScorer for OverlapFitScorer {
    fn score(
        &self,
        interests: &[String],
        job_tags: &BTreeSet<String>,
        weights: &ObsessionWeights,
    ) -> f64 {
        compute_overlap_fit(interests, job_tags, weights, &self.params)
    }

    fn params(&self) -> &ScoringParams {
        &self.params
    }

    fn backend(&self) -> &'static str {
        "overlap"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores with the default parameters.
pub fn score(interests: &[String], job_tags: &BTreeSet<String>, weights: &ObsessionWeights) -> f64 {
    compute_overlap_fit(interests, job_tags, weights, &ScoringParams::default())
}

pub fn compute_overlap_fit(
    interests: &[String],
    job_tags: &BTreeSet<String>,
    weights: &ObsessionWeights,
    params: &ScoringParams,
) -> f64 {
    let user_set: HashSet<&str> = interests.iter().map(String::as_str).collect();
    // Walk the sorted tags so the penalty sum is order-stable across runs.
    let overlap: Vec<&str> = job_tags
        .iter()
        .map(String::as_str)
        .filter(|t| user_set.contains(t))
        .collect();

    if overlap.is_empty() {
        return 0.0;
    }

    let matched = overlap.len() as f64;
    let coverage = matched / user_set.len().max(1) as f64;
    let precision = matched / job_tags.len().max(1) as f64;
    let base = params.precision_weight * precision + params.coverage_weight * coverage;

    let penalty: f64 = overlap
        .iter()
        .map(|t| weights.get(*t).copied().unwrap_or(params.neutral_weight))
        .filter(|w| *w > params.neutral_weight)
        .map(|w| (w - params.neutral_weight) * params.penalty_rate)
        .sum();

    (base - penalty).clamp(0.0, 1.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
