//! The four independent ATS sub-scores.
//!
//! | component      | range              |
//! |----------------|--------------------|
//! | keyword match  | 0 – 40 (continuous)|
//! | skills section | 5, 10, 18, 25      |
//! | experience     | 0, 7, 14, 20       |
//! | length         | 5, 10, 15          |
//!
//! Maxima sum to 100, so the combined score never leaves 0 – 100.

use crate::screening::catalog::SkillCatalog;
use crate::screening::skills::ResumeText;

pub const KEYWORD_MATCH_MAX: f64 = 40.0;
pub const EXPERIENCE_MAX: u32 = 20;
const EXPERIENCE_POINTS_PER_KEYWORD: u32 = 7;
const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "internship", "project"];

/// Share of the catalog that appears in both the resume and the job description, scaled to 40.
pub fn keyword_match_score(text: &ResumeText, job_description: &str, catalog: &SkillCatalog) -> f64 {
    if catalog.is_empty() {
        return 0.0;
    }
    let matched = catalog
        .iter()
        .filter(|kw| text.mentions(kw) && job_description.contains(*kw))
        .count();
    (matched as f64 / catalog.len() as f64) * KEYWORD_MATCH_MAX
}

/// Tiered on the number of extracted skills: ≥8 → 25, ≥5 → 18, ≥3 → 10, otherwise 5.
pub fn skills_section_score(skills: &[String]) -> u32 {
    match skills.len() {
        n if n >= 8 => 25,
        n if n >= 5 => 18,
        n if n >= 3 => 10,
        _ => 5,
    }
}

/// 7 points per distinct experience keyword present, capped at 20.
/// Repeats of the same keyword count once.
pub fn experience_score(text: &ResumeText) -> u32 {
    let present = EXPERIENCE_KEYWORDS
        .iter()
        .filter(|kw| text.mentions(kw))
        .count() as u32;
    (present * EXPERIENCE_POINTS_PER_KEYWORD).min(EXPERIENCE_MAX)
}

/// 300–700 words → 15, otherwise 200–900 → 10, otherwise 5.
pub fn length_score(text: &ResumeText) -> u32 {
    length_score_for(text.word_count())
}

fn length_score_for(words: usize) -> u32 {
    // narrower band first: 200–900 contains 300–700
    if (300..=700).contains(&words) {
        15
    } else if (200..=900).contains(&words) {
        10
    } else {
        5
    }
}
