use std::sync::Arc;

use crate::config::Config;
use crate::ingest::TextExtractor;
use crate::screening::analysis::Screener;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Catalog, job description and optional selection model.
    pub screener: Arc<Screener>,
    /// Pluggable text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
