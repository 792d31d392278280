//! ATS scorer — sums the sub-scores into a 0–100 total and labels it.

use serde::{Deserialize, Serialize};

use crate::screening::catalog::SkillCatalog;
use crate::screening::components::{
    experience_score, keyword_match_score, length_score, skills_section_score,
};
use crate::screening::skills::ResumeText;

/// Per-component scores plus their rounded sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword_match: f64,
    pub skills_section: u32,
    pub experience: u32,
    pub length: u32,
    pub total: f64,
}

/// Feedback band for a total ATS score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtsFeedback {
    HighlyFriendly,
    ModeratelyFriendly,
    NeedsImprovement,
}

impl AtsFeedback {
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            AtsFeedback::HighlyFriendly
        } else if score >= 60.0 {
            AtsFeedback::ModeratelyFriendly
        } else {
            AtsFeedback::NeedsImprovement
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AtsFeedback::HighlyFriendly => "Your resume is highly ATS-friendly.",
            AtsFeedback::ModeratelyFriendly => {
                "Your resume is moderately ATS-friendly. Add more role-specific keywords."
            }
            AtsFeedback::NeedsImprovement => "Your resume needs improvement to pass ATS filters.",
        }
    }
}

/// Scores every component and sums them, rounded to two decimals.
pub fn score_breakdown(
    text: &ResumeText,
    skills: &[String],
    job_description: &str,
    catalog: &SkillCatalog,
) -> ScoreBreakdown {
    let keyword_match = keyword_match_score(text, job_description, catalog);
    let skills_section = skills_section_score(skills);
    let experience = experience_score(text);
    let length = length_score(text);

    let total = round2(keyword_match + f64::from(skills_section + experience + length));

    ScoreBreakdown {
        keyword_match: round2(keyword_match),
        skills_section,
        experience,
        length,
        total,
    }
}

/// Total ATS score in `[0, 100]`.
#[allow(dead_code)]
pub fn calculate_total(
    text: &ResumeText,
    skills: &[String],
    job_description: &str,
    catalog: &SkillCatalog,
) -> f64 {
    score_breakdown(text, skills, job_description, catalog).total
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
