//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};

use crate::errors::AppError;
use crate::ingest::UploadedFile;
use crate::screening::analysis::{screen_upload, AnalysisResult};
use crate::state::AppState;

/// Multipart field the resume is expected in.
pub const RESUME_FIELD: &str = "resume";

const UPLOAD_FORM: &str = r#"<!doctype html>
<html>
  <head><title>Resume Screener</title></head>
  <body>
    <h1>Resume Screener</h1>
    <form action="/analyze" method="post" enctype="multipart/form-data">
      <input type="file" name="resume" accept="application/pdf,.pdf" required>
      <button type="submit">Analyze</button>
    </form>
  </body>
</html>
"#;

/// GET /
pub async fn handle_index() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

/// POST /analyze
///
/// Accepts a multipart form with the resume PDF in the `resume` field and
/// returns the full analysis. Other fields are ignored.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(String::from);
        let bytes = field.bytes().await?;
        upload = Some(UploadedFile {
            file_name,
            content_type,
            bytes,
        });
        break;
    }

    let result = screen_upload(&state.screener, state.extractor.as_ref(), upload).await?;
    Ok(Json(result))
}
