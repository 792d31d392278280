//! Analysis orchestration — one uploaded resume in, one `AnalysisResult` out.
//!
//! 1. validate the upload (presence, PDF type)
//! 2. extract text through the `TextExtractor` collaborator
//! 3. run the pure scoring pipeline on the lowercased text
//!
//! Every failure is an `AppError` returned early; nothing is shared between
//! requests except the read-only `Screener`.

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::ingest::{validate_upload, IngestionError, TextExtractor, UploadedFile};
use crate::model::{SelectionModel, PLACEHOLDER_EXPERIENCE_LEVEL};
use crate::screening::ats::{round2, score_breakdown, AtsFeedback, ScoreBreakdown};
use crate::screening::catalog::SkillCatalog;
use crate::screening::readiness::career_readiness;
use crate::screening::recommendations::recommend_courses;
use crate::screening::skills::{extract_skills, missing_skills, ResumeText};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub readiness_percent: u32,
    pub match_percent: f64,
    /// `None` when the selection model is disabled.
    pub prediction_percent: Option<f64>,
    pub ats_score: f64,
    pub ats_feedback: String,
    pub feedback_band: AtsFeedback,
    pub breakdown: ScoreBreakdown,
    pub word_count: usize,
    pub recommendations: BTreeMap<String, String>,
}

/// Everything a screening needs that is fixed at startup.
pub struct Screener {
    catalog: SkillCatalog,
    job_description: String,
    model: Option<Arc<dyn SelectionModel>>,
}

impl Screener {
    pub fn new(
        catalog: SkillCatalog,
        job_description: &str,
        model: Option<Arc<dyn SelectionModel>>,
    ) -> Self {
        Self {
            catalog,
            job_description: job_description.to_lowercase(),
            model,
        }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Runs the scoring pipeline on already-extracted text. Pure apart from
    /// the generated id and timestamp.
    pub fn analyze_text(&self, raw_text: &str) -> AnalysisResult {
        let text = ResumeText::new(raw_text);

        let skills = extract_skills(&text, &self.catalog);
        let missing = missing_skills(&self.catalog, &skills);

        let breakdown = score_breakdown(&text, &skills, &self.job_description, &self.catalog);
        let feedback = AtsFeedback::for_score(breakdown.total);

        let prediction_percent = self.model.as_ref().map(|model| {
            let p = model.predict_probability(skills.len(), PLACEHOLDER_EXPERIENCE_LEVEL);
            round2(p * 100.0)
        });

        AnalysisResult {
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            readiness_percent: career_readiness(&skills),
            match_percent: self.match_percent(&skills),
            prediction_percent,
            ats_score: breakdown.total,
            ats_feedback: feedback.message().to_string(),
            feedback_band: feedback,
            word_count: text.word_count(),
            recommendations: recommend_courses(&missing),
            missing_skills: missing,
            skills,
            breakdown,
        }
    }

    /// Share of the catalog found in the resume, as a percentage.
    fn match_percent(&self, skills: &[String]) -> f64 {
        if self.catalog.is_empty() {
            return 0.0;
        }
        round2(skills.len() as f64 / self.catalog.len() as f64 * 100.0)
    }
}

/// Full request flow: validate → extract → analyze.
pub async fn screen_upload(
    screener: &Screener,
    extractor: &dyn TextExtractor,
    upload: Option<UploadedFile>,
) -> Result<AnalysisResult, AppError> {
    let upload = validate_upload(upload).inspect_err(|e| warn!("Rejected upload: {e}"))?;
    let file_name = upload.file_name.clone();

    let raw_text = extractor
        .extract_text(upload.bytes)
        .await
        .map_err(|e| match e {
            IngestionError::Unreadable(detail) => AppError::IngestionFailure(detail),
            IngestionError::Crashed(detail) => AppError::Unexpected(anyhow!(detail)),
        })?;

    if raw_text.trim().is_empty() {
        warn!(file = %file_name, "No text extracted from upload");
        return Err(AppError::EmptyExtractedText);
    }

    let result = screener.analyze_text(&raw_text);
    info!(
        analysis_id = %result.analysis_id,
        file = %file_name,
        skills = result.skills.len(),
        ats_score = result.ats_score,
        band = ?result.feedback_band,
        "Resume analyzed"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;

    use crate::model::LogisticRegression;

    const JD: &str = "python machine learning flask sql data science";
    const REFERENCE_RESUME: &str =
        "I have experience with python and sql project experience machine learning";

    /// Ignores the document bytes and returns a canned outcome.
    enum FakeExtractor {
        Text(&'static str),
        Unreadable,
        Crashed,
    }

    #[async_trait]
    impl TextExtractor for FakeExtractor {
        async fn extract_text(&self, _document: Bytes) -> Result<String, IngestionError> {
            match self {
                FakeExtractor::Text(text) => Ok(text.to_string()),
                FakeExtractor::Unreadable => Err(IngestionError::Unreadable("bad xref".into())),
                FakeExtractor::Crashed => Err(IngestionError::Crashed("panicked".into())),
            }
        }
    }

    fn screener() -> Screener {
        Screener::new(
            SkillCatalog::default(),
            JD,
            Some(Arc::new(LogisticRegression::trained_default())),
        )
    }

    fn pdf_upload() -> Option<UploadedFile> {
        Some(UploadedFile {
            file_name: "resume.pdf".to_string(),
            content_type: Some("application/pdf".to_string()),
            bytes: Bytes::from_static(b"%PDF-1.4 stub"),
        })
    }

    #[test]
    fn test_reference_resume_end_to_end() {
        let result = screener().analyze_text(REFERENCE_RESUME);

        assert_eq!(result.skills, vec!["python", "machine learning", "sql"]);
        assert_eq!(result.readiness_percent, 30);
        assert_eq!(result.match_percent, 30.0);
        assert_eq!(result.breakdown.skills_section, 10);
        assert_eq!(result.breakdown.experience, 14);
        assert_eq!(result.breakdown.length, 5);
        assert_eq!(result.ats_score, 41.0);
        assert_eq!(result.feedback_band, AtsFeedback::NeedsImprovement);
        assert_eq!(result.ats_feedback, AtsFeedback::NeedsImprovement.message());
        assert_eq!(result.word_count, 12);
    }

    #[test]
    fn test_recommendations_cover_exactly_the_missing_skills() {
        let result = screener().analyze_text(REFERENCE_RESUME);

        assert_eq!(result.missing_skills.len(), 7);
        assert_eq!(result.recommendations.len(), 7);
        for skill in &result.skills {
            assert!(!result.recommendations.contains_key(skill));
        }
        assert_eq!(
            result.recommendations["c++"],
            "Take a professional certification course in C++"
        );
    }

    #[test]
    fn test_prediction_present_and_bounded() {
        let result = screener().analyze_text(REFERENCE_RESUME);
        let prediction = result.prediction_percent.unwrap();
        assert!((0.0..=100.0).contains(&prediction));
    }

    #[test]
    fn test_prediction_absent_without_model() {
        let screener = Screener::new(SkillCatalog::default(), JD, None);
        let result = screener.analyze_text(REFERENCE_RESUME);
        assert!(result.prediction_percent.is_none());
        assert_eq!(result.ats_score, 41.0);
    }

    #[test]
    fn test_job_description_matched_case_insensitively() {
        let screener = Screener::new(SkillCatalog::default(), &JD.to_uppercase(), None);
        let result = screener.analyze_text(REFERENCE_RESUME);
        assert_eq!(result.breakdown.keyword_match, 12.0);
    }

    #[test]
    fn test_empty_catalog_does_not_divide_by_zero() {
        let catalog = SkillCatalog::new(Vec::<String>::new()).unwrap();
        let screener = Screener::new(catalog, JD, None);
        let result = screener.analyze_text(REFERENCE_RESUME);
        assert_eq!(result.match_percent, 0.0);
        assert_eq!(result.breakdown.keyword_match, 0.0);
        assert!(result.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_screen_upload_success() {
        let extractor = FakeExtractor::Text(REFERENCE_RESUME);
        let result = screen_upload(&screener(), &extractor, pdf_upload())
            .await
            .unwrap();
        assert_eq!(result.ats_score, 41.0);
    }

    #[tokio::test]
    async fn test_screen_upload_lowercases_extracted_text() {
        let extractor = FakeExtractor::Text("PYTHON and SQL");
        let result = screen_upload(&screener(), &extractor, pdf_upload())
            .await
            .unwrap();
        assert_eq!(result.skills, vec!["python", "sql"]);
    }

    #[tokio::test]
    async fn test_screen_upload_missing_file() {
        let extractor = FakeExtractor::Text(REFERENCE_RESUME);
        let err = screen_upload(&screener(), &extractor, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingInput));
    }

    #[tokio::test]
    async fn test_screen_upload_non_pdf() {
        let extractor = FakeExtractor::Text(REFERENCE_RESUME);
        let upload = Some(UploadedFile {
            file_name: "resume.txt".to_string(),
            content_type: Some("text/plain".to_string()),
            bytes: Bytes::from_static(b"python"),
        });
        let err = screen_upload(&screener(), &extractor, upload)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidFileType(_)));
    }

    #[tokio::test]
    async fn test_screen_upload_blank_text() {
        let extractor = FakeExtractor::Text("  \n\t ");
        let err = screen_upload(&screener(), &extractor, pdf_upload())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyExtractedText));
    }

    #[tokio::test]
    async fn test_screen_upload_unreadable_document() {
        let extractor = FakeExtractor::Unreadable;
        let err = screen_upload(&screener(), &extractor, pdf_upload())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::IngestionFailure(_)));
    }

    #[tokio::test]
    async fn test_screen_upload_crashed_extractor() {
        let extractor = FakeExtractor::Crashed;
        let err = screen_upload(&screener(), &extractor, pdf_upload())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unexpected(_)));
    }
}
