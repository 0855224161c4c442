use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::explore::fit_scoring::{FitScorer, OverlapFitScorer};

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup; per-user state arrives in each request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Config,
    /// Pluggable fit scorer. Default: OverlapFitScorer built from `Config::scoring`.
    pub fit_scorer: Arc<dyn FitScorer>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        let fit_scorer = Arc::new(OverlapFitScorer::new(config.scoring));
        Self {
            catalog: Arc::new(catalog),
            config,
            fit_scorer,
        }
    }
}
