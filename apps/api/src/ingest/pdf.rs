use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::ingest::{IngestionError, TextExtractor};

/// Extracts text from PDF bytes with `pdf-extract`.
/// Parsing is CPU-bound and runs on the blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, document: Bytes) -> Result<String, IngestionError> {
        let size = document.len();
        let result = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&document).map_err(|e| e.to_string())
        })
        .await;

        match result {
            Ok(Ok(text)) => {
                debug!(bytes = size, chars = text.len(), "PDF text extracted");
                Ok(text)
            }
            Ok(Err(detail)) => Err(IngestionError::Unreadable(detail)),
            // pdf-extract panics on some malformed documents
            Err(e) if e.is_panic() => Err(IngestionError::Crashed("PDF parser panicked".into())),
            Err(e) => Err(IngestionError::Crashed(e.to_string())),
        }
    }
}
