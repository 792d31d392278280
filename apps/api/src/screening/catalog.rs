//! Skill catalog — the fixed vocabulary every resume is matched against.

use serde::Serialize;
use thiserror::Error;

/// Skills recognised when no `SKILL_CATALOG` override is configured.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "machine learning",
    "data science",
    "sql",
    "html",
    "css",
    "javascript",
    "flask",
];

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Skill catalog contains an empty entry at position {0}")]
    EmptyEntry(usize),

    #[error("Skill catalog lists '{0}' more than once")]
    Duplicate(String),
}

/// Ordered, duplicate-free list of lowercase skill names.
/// Built once at startup and shared read-only across requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

impl SkillCatalog {
    /// Normalizes (trim + lowercase) and validates the given skills, keeping their order.
    pub fn new<I, S>(skills: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for (position, raw) in skills.into_iter().enumerate() {
            let skill = raw.as_ref().trim().to_lowercase();
            if skill.is_empty() {
                return Err(CatalogError::EmptyEntry(position));
            }
            if normalized.contains(&skill) {
                return Err(CatalogError::Duplicate(skill));
            }
            normalized.push(skill);
        }
        Ok(Self { skills: normalized })
    }

    /// Parses a comma-separated list such as `"rust, go, sql"`.
    pub fn parse_list(list: &str) -> Result<Self, CatalogError> {
        Self::new(list.split(','))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self {
            skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
