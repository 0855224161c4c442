use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use explorer::catalog::Catalog;
use explorer::config::Config;
use explorer::routes::build_router;
use explorer::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Explorer v{}", env!("CARGO_PKG_VERSION"));

    // Catalog is read once; nothing mutates it afterwards.
    let catalog = Catalog::load(config.catalog_path.as_deref())?;
    info!("Job catalog ready ({} jobs)", catalog.len());
    info!(
        "Scoring: precision {} / coverage {} / penalty {} per weight unit, max {} interests",
        config.scoring.precision_weight,
        config.scoring.coverage_weight,
        config.scoring.penalty_rate,
        config.max_interests
    );

    let state = AppState::new(catalog, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
