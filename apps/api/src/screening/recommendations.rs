//! Course recommendations for skills the resume does not mention.

use std::collections::BTreeMap;

/// One advisory string per missing skill, keyed by the skill.
pub fn recommend_courses(missing_skills: &[String]) -> BTreeMap<String, String> {
    missing_skills
        .iter()
        .map(|skill| {
            (
                skill.clone(),
                format!(
                    "Take a professional certification course in {}",
                    title_case(skill)
                ),
            )
        })
        .collect()
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_alphabetic = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
        } else {
            out.push(c);
        }
        previous_alphabetic = c.is_alphabetic();
    }
    out
}
