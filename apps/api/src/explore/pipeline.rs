//! Exploration pipeline: one full recomputation pass over a session.
//!
//! Flow: normalize → weight rebuild → combinations → rank → hybrid suggestions → graph.
//! An empty interest set stops the pass before any combination or scoring work.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::AppError;
use crate::explore::combinations::{combination_count, format_combination, CombinationIter};
use crate::explore::fit_scoring::FitScorer;
use crate::explore::graph::{build_graph, InterestGraph};
use crate::explore::hybrid::hybrid_suggestions;
use crate::explore::normalize::require_interests;
use crate::explore::ranking::{rank, top_ranked, RankedJob};
use crate::explore::weights::build_weights;
use crate::models::session::SessionState;

pub const NO_MATCH_MESSAGE: &str =
    "Nessuna corrispondenza trovata. Prova ad aggiungere altri interessi.";

#[derive(Debug, Clone, Serialize)]
pub struct CombinationSummary {
    pub total: u64,
    /// First `Config::combination_preview` combinations, rendered as `a + b`.
    pub preview: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplorationReport {
    pub interests: Vec<String>,
    /// Effective weight per active interest, sorted by interest.
    pub weights: BTreeMap<String, f64>,
    pub combinations: CombinationSummary,
    /// Top `Config::top_k` matches.
    pub ranking: Vec<RankedJob>,
    /// Matches before top-K truncation.
    pub total_matches: usize,
    pub suggestions: Vec<String>,
    pub graph: InterestGraph,
    pub message: Option<String>,
    pub scorer_backend: String,
}

/// Rejects interest sets whose combination space is past the supported size.
pub fn ensure_within_limit(interests: &[String], max: usize) -> Result<(), AppError> {
    if interests.len() > max {
        return Err(AppError::TooManyInterests {
            count: interests.len(),
            max,
        });
    }
    Ok(())
}

pub fn explore(
    session: &SessionState,
    catalog: &Catalog,
    scorer: &dyn FitScorer,
    config: &Config,
) -> Result<ExplorationReport, AppError> {
    let interests = require_interests(&session.custom_text, session.preselected())?;
    ensure_within_limit(&interests, config.max_interests)?;

    let weights = build_weights(&interests, &session.weights, scorer.params())?;
    debug!(?weights, "Rebuilt obsession weights");

    let combinations = CombinationSummary {
        total: combination_count(interests.len()),
        preview: CombinationIter::new(&interests)
            .take(config.combination_preview)
            .map(|combo| {
                let owned: Vec<String> = combo.into_iter().cloned().collect();
                format_combination(&owned)
            })
            .collect(),
    };

    let scored = rank(catalog.jobs(), &interests, &weights, scorer);
    let ranking = top_ranked(&scored, &interests, config.top_k);

    let suggestions = if scored.is_empty() {
        Vec::new()
    } else {
        let names: Vec<&str> = scored.iter().map(|s| s.job.name.as_str()).collect();
        hybrid_suggestions(&names)
    };

    let graph = build_graph(&interests, &scored);
    let message = scored.is_empty().then(|| NO_MATCH_MESSAGE.to_string());

    info!(
        interests = interests.len(),
        combinations = combinations.total,
        matches = scored.len(),
        "Exploration pass complete"
    );

    Ok(ExplorationReport {
        total_matches: scored.len(),
        weights: weights.into_iter().collect(),
        interests,
        combinations,
        ranking,
        suggestions,
        graph,
        message,
        scorer_backend: scorer.backend().to_string(),
    })
}
