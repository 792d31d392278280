//! Skill extraction — which catalog skills a resume mentions.

use crate::screening::catalog::SkillCatalog;

/// Resume text normalized to lowercase. All matching in this crate is
/// case-insensitive because it only ever sees text through this type.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeText(String);

impl ResumeText {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// Plain substring containment. No word boundaries: "java" is found in "javascript".
    pub fn mentions(&self, term: &str) -> bool {
        self.0.contains(term)
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }
}

/// Returns the catalog skills mentioned in `text`, in catalog order.
pub fn extract_skills(text: &ResumeText, catalog: &SkillCatalog) -> Vec<String> {
    catalog
        .iter()
        .filter(|skill| text.mentions(skill))
        .map(String::from)
        .collect()
}

/// Catalog skills absent from `extracted`, in catalog order.
pub fn missing_skills(catalog: &SkillCatalog, extracted: &[String]) -> Vec<String> {
    catalog
        .iter()
        .filter(|skill| !extracted.iter().any(|e| e == skill))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(text: &str) -> Vec<String> {
        extract_skills(&ResumeText::new(text), &SkillCatalog::default())
    }

    #[test]
    fn test_skills_follow_catalog_order() {
        let found = skills("SQL first, then Machine Learning, then Python");
        assert_eq!(found, vec!["python", "machine learning", "sql"]);
    }

    #[test]
    fn test_empty_text_yields_no_skills() {
        assert!(skills("").is_empty());
    }

    #[test]
    fn test_substring_policy_matches_inside_longer_words() {
        // "java" is contained in "javascript"
        let found = skills("built dashboards in javascript");
        assert_eq!(found, vec!["java", "javascript"]);
    }

    #[test]
    fn test_cpp_matches_inside_objective_cpp() {
        let found = skills("objective-c++ bridge");
        assert_eq!(found, vec!["c++"]);
    }

    #[test]
    fn test_extracted_is_subset_of_catalog() {
        let catalog = SkillCatalog::parse_list("rust,go,kafka").unwrap();
        let text = ResumeText::new("rust and kafka and python and go-lang");
        let found = extract_skills(&text, &catalog);
        assert!(found.iter().all(|s| catalog.iter().any(|c| c == s)));
        assert_eq!(found, vec!["rust", "go", "kafka"]);
    }

    #[test]
    fn test_missing_and_extracted_partition_catalog() {
        let catalog = SkillCatalog::default();
        for text in ["", "python sql", "html css javascript flask java", "everything c++"] {
            let extracted = extract_skills(&ResumeText::new(text), &catalog);
            let missing = missing_skills(&catalog, &extracted);
            assert_eq!(extracted.len() + missing.len(), catalog.len(), "text: {text}");
            assert!(missing.iter().all(|m| !extracted.contains(m)));
            assert!(catalog
                .iter()
                .all(|s| extracted.iter().any(|e| e == s) || missing.iter().any(|m| m == s)));
        }
    }

    #[test]
    fn test_word_count_splits_on_any_whitespace() {
        let text = ResumeText::new("  one\ttwo\n\nthree   four ");
        assert_eq!(text.word_count(), 4);
    }

    #[test]
    fn test_resume_text_is_lowercased() {
        let text = ResumeText::new("PyThOn and Machine LEARNING");
        assert!(text.mentions("python"));
        assert!(text.mentions("machine learning"));
        assert!(!text.mentions("PyThOn"));
    }
}
