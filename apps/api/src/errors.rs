use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every way a screening request can end without an analysis.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`;
/// the rendered body is the error result shown to the user.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No resume file was uploaded")]
    MissingInput,

    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    #[error("Could not extract text: {0}")]
    IngestionFailure(String),

    #[error("Extracted text is empty")]
    EmptyExtractedText,

    #[error("Malformed upload: {0}")]
    Upload(#[from] MultipartError),

    #[error("Unexpected failure: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingInput => "MISSING_INPUT",
            AppError::InvalidFileType(_) => "INVALID_FILE_TYPE",
            AppError::IngestionFailure(_) => "INGESTION_FAILURE",
            AppError::EmptyExtractedText => "EMPTY_EXTRACTED_TEXT",
            AppError::Upload(_) => "MALFORMED_UPLOAD",
            AppError::Unexpected(_) => "UNEXPECTED_FAILURE",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingInput | AppError::InvalidFileType(_) => StatusCode::BAD_REQUEST,
            AppError::IngestionFailure(_) | AppError::EmptyExtractedText => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Upload(e) => e.status(),
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MissingInput => "Please upload a resume file.".to_string(),
            AppError::InvalidFileType(reason) => {
                format!("Only PDF resumes are supported ({reason}).")
            }
            AppError::IngestionFailure(_) => {
                "The uploaded PDF could not be read. It may be corrupt or password protected."
                    .to_string()
            }
            AppError::EmptyExtractedText => {
                "No readable text was found in the uploaded resume.".to_string()
            }
            AppError::Upload(_) => "The upload could not be read. Please try again.".to_string(),
            AppError::Unexpected(_) => {
                "Sorry, something went wrong while analyzing your resume.".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::IngestionFailure(detail) => tracing::warn!("Ingestion failure: {detail}"),
            AppError::Upload(e) => tracing::warn!("Malformed upload: {e}"),
            AppError::Unexpected(e) => tracing::error!("Unexpected failure: {e:?}"),
            _ => {}
        }

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.user_message()
            }
        }));

        (self.status(), body).into_response()
    }
}
