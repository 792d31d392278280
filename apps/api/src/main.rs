mod config;
mod errors;
mod ingest;
mod model;
mod routes;
mod screening;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ingest::PdfTextExtractor;
use crate::model::{LogisticRegression, SelectionModel};
use crate::routes::build_router;
use crate::screening::analysis::Screener;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Screener v{}", env!("CARGO_PKG_VERSION"));

    // Train the selection model once; it is read-only afterwards
    let model: Option<Arc<dyn SelectionModel>> = if config.enable_prediction {
        let model = LogisticRegression::trained_default();
        info!(
            weights = ?model.weights,
            intercept = model.intercept,
            "Selection model trained"
        );
        Some(Arc::new(model))
    } else {
        info!("Selection model disabled");
        None
    };

    let screener = Screener::new(config.skill_catalog.clone(), &config.job_description, model);
    info!(skills = screener.catalog().len(), "Skill catalog loaded");

    // Build app state
    let state = AppState {
        config: config.clone(),
        screener: Arc::new(screener),
        extractor: Arc::new(PdfTextExtractor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
