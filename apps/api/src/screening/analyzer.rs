//! Resume Analyzer — turns one document's raw text into a structured
//! `ParsedResume`: detected skills, years of experience, and education lines.
//!
//! All extraction is deterministic and lexical. Absence of a signal is a
//! valid result (empty skills, `Unspecified` experience), never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::screening::taxonomy::{title_case, SkillTaxonomy};

/// Experience patterns in fixed priority order. The first pattern that
/// matches the lowercased text wins; later patterns are never consulted.
static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+)\+?\s*years?\s*of?\s*experience",
        r"experience:\s*(\d+)\+?\s*years?",
        r"(\d+)\+?\s*years?\s*in\s*the\s*field",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("experience pattern is a valid regex"))
    .collect()
});

/// Lines containing any of these keywords count as education entries.
const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "university",
    "college",
    "diploma",
    "certification",
    "certificate",
];

const MAX_EDUCATION_LINES: usize = 3;

/// Years of experience claimed by a resume, or `Unspecified` when no
/// experience pattern matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceFact {
    Years(u32),
    Unspecified,
}

impl std::fmt::Display for ExperienceFact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperienceFact::Years(n) => write!(f, "{n} years"),
            ExperienceFact::Unspecified => write!(f, "Experience not specified"),
        }
    }
}

/// Structured view of one resume, immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub filename: String,
    pub raw_text: String,
    /// Title-cased canonical skills, deduplicated, in taxonomy order.
    pub skills: Vec<String>,
    pub experience: ExperienceFact,
    /// Up to 3 education lines, in original document order.
    pub education: Vec<String>,
    pub text_length: usize,
    pub word_count: usize,
}

/// Analyzes one document's raw text. Total over any text input; the caller
/// is responsible for not invoking this on upstream extraction failures.
pub fn analyze(filename: &str, raw_text: &str, taxonomy: &SkillTaxonomy) -> ParsedResume {
    ParsedResume {
        filename: filename.to_string(),
        raw_text: raw_text.to_string(),
        skills: extract_skills(raw_text, taxonomy),
        experience: extract_experience(raw_text),
        education: extract_education(raw_text),
        text_length: raw_text.chars().count(),
        word_count: raw_text.split_whitespace().count(),
    }
}

/// Tests every canonical phrase for case-insensitive substring containment.
/// Substring semantics are intentional: "java" also hits inside "javascript".
fn extract_skills(raw_text: &str, taxonomy: &SkillTaxonomy) -> Vec<String> {
    let text_lower = raw_text.to_lowercase();
    let mut found = Vec::new();
    for phrase in taxonomy.all_skills() {
        if text_lower.contains(phrase) {
            let display = title_case(phrase);
            if !found.contains(&display) {
                found.push(display);
            }
        }
    }
    found
}

/// First-match-wins over `EXPERIENCE_PATTERNS`. A matching pattern whose
/// capture fails to parse as a number degrades to `Unspecified`.
fn extract_experience(raw_text: &str) -> ExperienceFact {
    let text_lower = raw_text.to_lowercase();
    for pattern in EXPERIENCE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&text_lower) {
            return caps
                .get(1)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .map(ExperienceFact::Years)
                .unwrap_or(ExperienceFact::Unspecified);
        }
    }
    ExperienceFact::Unspecified
}

/// Collects lines mentioning an education keyword, trimmed, in original
/// order, truncated to the first `MAX_EDUCATION_LINES`.
fn extract_education(raw_text: &str) -> Vec<String> {
    raw_text
        .lines()
        .filter(|line| {
            let line_lower = line.to_lowercase();
            EDUCATION_KEYWORDS.iter().any(|kw| line_lower.contains(kw))
        })
        .map(|line| line.trim().to_string())
        .take(MAX_EDUCATION_LINES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> SkillTaxonomy {
        SkillTaxonomy::new()
    }

    #[test]
    fn test_skill_extraction_title_cases_and_dedups() {
        let resume = analyze(
            "a.pdf",
            "Python developer. python, PYTHON, and React on AWS.",
            &taxonomy(),
        );
        assert!(resume.skills.contains(&"Python".to_string()));
        assert!(resume.skills.contains(&"React".to_string()));
        assert!(resume.skills.contains(&"Aws".to_string()));
        assert_eq!(
            resume.skills.iter().filter(|s| *s == "Python").count(),
            1,
            "skills must be deduplicated"
        );
    }

    #[test]
    fn test_skill_extraction_substring_semantics() {
        // "java" is a substring of "javascript"; both phrases hit.
        let resume = analyze("a.pdf", "Expert in JavaScript.", &taxonomy());
        assert!(resume.skills.contains(&"Java".to_string()));
        assert!(resume.skills.contains(&"Javascript".to_string()));
    }

    #[test]
    fn test_skills_follow_taxonomy_order() {
        let resume = analyze("a.pdf", "sql before python in text, Python and SQL", &taxonomy());
        let python = resume.skills.iter().position(|s| s == "Python").unwrap();
        let sql = resume.skills.iter().position(|s| s == "Sql").unwrap();
        assert!(python < sql, "taxonomy order wins over document order");
    }

    #[test]
    fn test_experience_years_of_experience_pattern() {
        assert_eq!(
            extract_experience("I have 5 years of experience in backend work"),
            ExperienceFact::Years(5)
        );
    }

    #[test]
    fn test_experience_colon_pattern() {
        assert_eq!(
            extract_experience("Experience: 7+ years"),
            ExperienceFact::Years(7)
        );
    }

    #[test]
    fn test_experience_in_the_field_pattern() {
        assert_eq!(
            extract_experience("over 3 years in the field"),
            ExperienceFact::Years(3)
        );
    }

    #[test]
    fn test_experience_first_pattern_wins() {
        // Both pattern 1 and pattern 3 are present; pattern 1 is consulted first.
        let text = "10 years in the field, 2 years of experience with Rust";
        assert_eq!(extract_experience(text), ExperienceFact::Years(2));
    }

    #[test]
    fn test_experience_absent_is_unspecified() {
        assert_eq!(
            extract_experience("seasoned engineer, many seasons"),
            ExperienceFact::Unspecified
        );
    }

    #[test]
    fn test_experience_overflowing_number_degrades_to_unspecified() {
        let text = "99999999999999999999 years of experience";
        assert_eq!(extract_experience(text), ExperienceFact::Unspecified);
    }

    #[test]
    fn test_education_lines_in_order_trimmed() {
        let text = "Jane Doe\n  Bachelor of Science, MIT  \nwork stuff\nMaster of Arts\n";
        let education = extract_education(text);
        assert_eq!(
            education,
            vec!["Bachelor of Science, MIT".to_string(), "Master of Arts".to_string()]
        );
    }

    #[test]
    fn test_education_truncated_to_three_lines() {
        let text = "phd one\nuniversity two\ncollege three\ndiploma four";
        assert_eq!(extract_education(text).len(), 3);
    }

    #[test]
    fn test_analyze_counts_chars_and_words() {
        let resume = analyze("a.pdf", "one two three", &taxonomy());
        assert_eq!(resume.text_length, 13);
        assert_eq!(resume.word_count, 3);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let text = "Python dev, 5 years of experience, Bachelor degree";
        let first = analyze("a.pdf", text, &taxonomy());
        let second = analyze("a.pdf", text, &taxonomy());
        assert_eq!(first.skills, second.skills);
        assert_eq!(first.experience, second.experience);
        assert_eq!(first.education, second.education);
    }

    #[test]
    fn test_no_signal_is_valid_not_error() {
        // Text chosen to dodge even the short phrases ("r", "go", "ai").
        let resume = analyze("blank.pdf", "nothing of note", &taxonomy());
        assert!(resume.skills.is_empty());
        assert_eq!(resume.experience, ExperienceFact::Unspecified);
        assert!(resume.education.is_empty());
    }

    #[test]
    fn test_experience_fact_display() {
        assert_eq!(ExperienceFact::Years(5).to_string(), "5 years");
        assert_eq!(
            ExperienceFact::Unspecified.to_string(),
            "Experience not specified"
        );
    }
}
