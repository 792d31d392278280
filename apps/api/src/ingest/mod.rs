//! Document ingestion — turning an uploaded file into plain text.
//!
//! Extraction sits behind the `TextExtractor` trait so the orchestrator can be
//! driven by a fake in tests. `AppState` holds an `Arc<dyn TextExtractor>`.

pub mod pdf;
pub mod upload;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub use pdf::PdfTextExtractor;
pub use upload::{validate_upload, UploadedFile};

#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("document is unreadable: {0}")]
    Unreadable(String),

    #[error("text extractor crashed: {0}")]
    Crashed(String),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, document: Bytes) -> Result<String, IngestionError>;
}
