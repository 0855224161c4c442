//! Axum route handlers for the Exploration API.

use std::collections::BTreeSet;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::explore::combinations::{combination_page, CombinationPage};
use crate::explore::hybrid::hybrid_suggestions;
use crate::explore::normalize::{normalize, require_interests};
use crate::explore::pipeline::{ensure_within_limit, explore, ExplorationReport};
use crate::explore::ranking::{rank, top_ranked, RankedJob};
use crate::explore::weights::build_weights;
use crate::models::session::{ObsessionWeights, SessionState};
use crate::state::AppState;

/// Largest page the combination endpoint returns in one call.
const MAX_PAGE_SIZE: usize = 1000;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub preselected: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub interests: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CombinationsRequest {
    pub interests: Vec<String>,
    #[serde(default)]
    pub offset: usize,
    pub limit: Option<usize>,
    pub containing: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub interests: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub weights: ObsessionWeights,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: f64,
    pub scorer_backend: String,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub interests: Vec<String>,
    #[serde(default)]
    pub weights: ObsessionWeights,
    pub top_k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub ranking: Vec<RankedJob>,
    pub total_matches: usize,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    #[serde(default)]
    pub top_jobs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interests/normalize
///
/// An empty result is returned as-is; callers decide whether to stop.
pub async fn handle_normalize(
    Json(request): Json<NormalizeRequest>,
) -> Result<Json<NormalizeResponse>, AppError> {
    let interests = normalize(&request.text, &request.preselected);
    Ok(Json(NormalizeResponse { interests }))
}

/// POST /api/v1/combinations
///
/// Pages through the 2^N - 1 combinations in their stable order.
pub async fn handle_combinations(
    State(state): State<AppState>,
    Json(request): Json<CombinationsRequest>,
) -> Result<Json<CombinationPage>, AppError> {
    let interests = require_interests("", &request.interests)?;
    ensure_within_limit(&interests, state.config.max_interests)?;

    let limit = request.limit.unwrap_or(state.config.combination_preview);
    if limit > MAX_PAGE_SIZE {
        return Err(AppError::Validation(format!(
            "limit must be at most {MAX_PAGE_SIZE}, got {limit}"
        )));
    }
    let containing = request.containing.map(|c| c.trim().to_lowercase());
    let offset = request.offset;

    // Deep offsets walk up to ~1M combinations; keep that off the async executor.
    let page = tokio::task::spawn_blocking(move || {
        combination_page(&interests, offset, limit, containing.as_deref())
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(page))
}

/// POST /api/v1/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let interests = require_interests("", &request.interests)?;
    let tags: BTreeSet<String> = request
        .tags
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();
    if tags.is_empty() {
        return Err(AppError::Validation("tags cannot be empty".to_string()));
    }

    let scorer = state.fit_scorer.as_ref();
    let weights = build_weights(&interests, &request.weights, scorer.params())?;

    Ok(Json(ScoreResponse {
        score: scorer.score(&interests, &tags, &weights),
        scorer_backend: scorer.backend().to_string(),
    }))
}

/// POST /api/v1/rank
///
/// Ranks the whole catalog; `top_k` (default from config) only trims the response.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let interests = require_interests("", &request.interests)?;
    let scorer = state.fit_scorer.as_ref();
    let weights = build_weights(&interests, &request.weights, scorer.params())?;

    let scored = rank(state.catalog.jobs(), &interests, &weights, scorer);
    let top_k = request.top_k.unwrap_or(state.config.top_k);

    Ok(Json(RankResponse {
        ranking: top_ranked(&scored, &interests, top_k),
        total_matches: scored.len(),
    }))
}

/// POST /api/v1/suggestions
pub async fn handle_suggestions(
    Json(request): Json<SuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    Ok(Json(SuggestionsResponse {
        suggestions: hybrid_suggestions(&request.top_jobs),
    }))
}

/// POST /api/v1/explore
///
/// Full pass over the submitted session: normalize → combine → rank → suggest → graph.
pub async fn handle_explore(
    State(state): State<AppState>,
    Json(session): Json<SessionState>,
) -> Result<Json<ExplorationReport>, AppError> {
    let report = explore(
        &session,
        &state.catalog,
        state.fit_scorer.as_ref(),
        &state.config,
    )?;
    Ok(Json(report))
}
