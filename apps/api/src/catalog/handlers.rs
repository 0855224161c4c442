use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::state::AppState;

#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobRecord>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct InterestListResponse {
    pub suggested: Vec<String>,
    pub default_selection: Vec<String>,
}

/// GET /api/v1/catalog/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<JobListResponse> {
    let jobs = state.catalog.jobs().to_vec();
    Json(JobListResponse {
        total: jobs.len(),
        jobs,
    })
}

/// GET /api/v1/catalog/jobs/:name
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<JobRecord>, AppError> {
    state
        .catalog
        .get(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job '{name}' not found")))
}

/// GET /api/v1/catalog/interests
pub async fn handle_list_interests(State(state): State<AppState>) -> Json<InterestListResponse> {
    Json(InterestListResponse {
        suggested: state.catalog.suggested_interests().to_vec(),
        default_selection: state.catalog.default_selection().to_vec(),
    })
}
