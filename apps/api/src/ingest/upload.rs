use bytes::Bytes;

use crate::errors::AppError;

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A single file part taken from the upload form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Rejects absent, empty, or non-PDF uploads before any parsing happens.
/// A `.pdf` name or an `application/pdf` content type is enough to pass.
pub fn validate_upload(upload: Option<UploadedFile>) -> Result<UploadedFile, AppError> {
    let upload = upload.ok_or(AppError::MissingInput)?;

    if upload.file_name.trim().is_empty() {
        return Err(AppError::MissingInput);
    }
    if upload.bytes.is_empty() {
        return Err(AppError::InvalidFileType("the uploaded file is empty".into()));
    }

    let has_pdf_extension = upload.file_name.to_lowercase().ends_with(".pdf");
    let has_pdf_content_type = upload
        .content_type
        .as_deref()
        .map(|ct| ct.eq_ignore_ascii_case(PDF_CONTENT_TYPE))
        .unwrap_or(false);

    if !has_pdf_extension && !has_pdf_content_type {
        return Err(AppError::InvalidFileType(format!(
            "'{}' is not a PDF",
            upload.file_name
        )));
    }

    Ok(upload)
}
