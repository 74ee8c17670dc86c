//! Job Requirement Extractor — maps a free-text job description onto the
//! skill taxonomy, producing the per-category required-skill lists that the
//! scorer consumes.

use serde::{Deserialize, Serialize};

use crate::screening::taxonomy::{title_case, SkillTaxonomy};

/// Small fixed list used when the taxonomy pass finds nothing at all, so
/// that every job description yields at least one comparable category when
/// possible.
const FALLBACK_BASIC_SKILLS: &[&str] = &[
    "python", "java", "javascript", "html", "css", "sql", "react", "node.js",
];

const GENERAL_SKILLS_CATEGORY: &str = "general_skills";

/// One category of required skills. `skills` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredCategory {
    pub category: String,
    pub skills: Vec<String>,
}

/// Required skills per category, in taxonomy order. Categories with zero
/// matched skills are omitted; an empty map is a valid result and scores
/// every candidate's skill_score as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirements {
    pub categories: Vec<RequiredCategory>,
}

// Contract accessors; the scorer walks `categories` directly.
#[allow(dead_code)]
impl JobRequirements {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.skills.as_slice())
    }
}

/// Extracts required skills from a job description. Per taxonomy category,
/// every canonical skill contained (case-insensitively) in the text is
/// required, title-cased, in taxonomy order. Falls back to a synthetic
/// `general_skills` category when the taxonomy pass comes up empty.
pub fn extract_job_skills(job_text: &str, taxonomy: &SkillTaxonomy) -> JobRequirements {
    let job_lower = job_text.to_lowercase();

    let mut categories = Vec::new();
    for category in taxonomy.categories() {
        let found: Vec<String> = category
            .skills
            .iter()
            .filter(|skill| job_lower.contains(*skill))
            .map(|skill| title_case(skill))
            .collect();
        if !found.is_empty() {
            categories.push(RequiredCategory {
                category: category.name.to_string(),
                skills: found,
            });
        }
    }

    if categories.is_empty() {
        let basic_found: Vec<String> = FALLBACK_BASIC_SKILLS
            .iter()
            .filter(|skill| job_lower.contains(*skill))
            .map(|skill| title_case(skill))
            .collect();
        if !basic_found.is_empty() {
            categories.push(RequiredCategory {
                category: GENERAL_SKILLS_CATEGORY.to_string(),
                skills: basic_found,
            });
        }
    }

    JobRequirements { categories }
}
