//! Report building — the flat, presentation-ready views of a screening run.
//!
//! The comparison rows carry every column of the exported table so that no
//! downstream display or CSV code ever needs to touch raw resume text. The
//! score explanation is the structured counterpart of the original debug
//! view: which skills were required, which matched, and the bonus inputs.

use serde::{Deserialize, Serialize};

use crate::screening::analyzer::ParsedResume;
use crate::screening::job_requirements::JobRequirements;
use crate::screening::ranking::RankedCandidate;
use crate::screening::scoring::{category_match_score, skills_diversity_bonus};
use crate::screening::taxonomy::SkillTaxonomy;

/// One row of the candidate comparison table, in rank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub rank: usize,
    pub filename: String,
    pub overall_score: f64,
    pub skill_score: f64,
    pub experience_bonus: u32,
    pub education_bonus: u32,
    pub skills_diversity_bonus: u32,
    pub skills_count: usize,
    /// Display string, e.g. "5 years" or "Experience not specified".
    pub experience: String,
    /// First education line, or "Not specified".
    pub education: String,
}

/// Builds one comparison row per ranked candidate, in rank order.
pub fn build_comparison_rows(ranking: &[RankedCandidate]) -> Vec<ComparisonRow> {
    ranking
        .iter()
        .map(|candidate| ComparisonRow {
            rank: candidate.rank,
            filename: candidate.resume.filename.clone(),
            overall_score: candidate.score.overall_score,
            skill_score: candidate.score.skill_score,
            experience_bonus: candidate.score.experience_bonus,
            education_bonus: candidate.score.education_bonus,
            skills_diversity_bonus: candidate.score.skills_diversity_bonus,
            skills_count: candidate.resume.skills.len(),
            experience: candidate.resume.experience.to_string(),
            education: candidate
                .resume
                .education
                .first()
                .cloned()
                .unwrap_or_else(|| "Not specified".to_string()),
        })
        .collect()
}

/// Per-category detail of a score explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryExplanation {
    pub category: String,
    pub required_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub score: f64,
}

/// Structured answer to "why did this candidate score what they scored".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreExplanation {
    pub filename: String,
    pub resume_skills: Vec<String>,
    pub skills_count: usize,
    pub experience: String,
    pub education: Vec<String>,
    pub categories: Vec<CategoryExplanation>,
    pub skills_diversity_bonus: u32,
}

/// Explains the per-category matching for one resume against the job's
/// requirements. Pure derivation; recomputing it never changes the score.
pub fn explain_score(
    resume: &ParsedResume,
    requirements: &JobRequirements,
    taxonomy: &SkillTaxonomy,
) -> ScoreExplanation {
    let resume_lower: Vec<String> = resume.skills.iter().map(|s| s.to_lowercase()).collect();

    let categories = requirements
        .categories
        .iter()
        .map(|required| CategoryExplanation {
            category: required.category.clone(),
            required_skills: required.skills.clone(),
            matched_skills: required
                .skills
                .iter()
                .filter(|skill| resume_lower.contains(&skill.to_lowercase()))
                .cloned()
                .collect(),
            score: category_match_score(&resume.skills, &required.skills),
        })
        .collect();

    ScoreExplanation {
        filename: resume.filename.clone(),
        resume_skills: resume.skills.clone(),
        skills_count: resume.skills.len(),
        experience: resume.experience.to_string(),
        education: resume.education.clone(),
        categories,
        skills_diversity_bonus: skills_diversity_bonus(&resume.skills, taxonomy),
    }
}
