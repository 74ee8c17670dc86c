//! Scorer — category-weighted match scoring plus the three additive bonuses.
//!
//! Every bonus is independently capped before summation and the overall
//! score is clamped to 100 even when the raw sum exceeds it. All functions
//! here are total over structured input; missing signal degrades the score
//! toward zero instead of failing.

use serde::{Deserialize, Serialize};

use crate::screening::analyzer::{ExperienceFact, ParsedResume};
use crate::screening::job_requirements::JobRequirements;
use crate::screening::taxonomy::SkillTaxonomy;

/// Match score for one required-skill category, 0.0 – 100.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: f64,
}

/// Full score decomposition for one candidate. Recomputed whole whenever
/// inputs change, never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Mean of the per-category match scores, 0.0 – 100.0.
    pub skill_score: f64,
    /// 0, 5, 8, 12 or 15 points depending on claimed years.
    pub experience_bonus: u32,
    /// 0, 2, 4, 7 or 10 points depending on highest first-matched degree.
    pub education_bonus: u32,
    /// min(10, 2 × taxonomy categories represented in the resume).
    pub skills_diversity_bonus: u32,
    pub category_scores: Vec<CategoryScore>,
    /// min(100, skill_score + bonuses), rounded to 2 decimals.
    pub overall_score: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scores one category's required skills against a resume's skill set.
///
/// match_percentage + skill-count bonus (min(5, 0.5·|R|)) + coverage bonus
/// (min(10, 20·matches/|J|)), capped at 100 and rounded to 2 decimals.
/// Empty requirements or an empty resume skill set score 0.0.
pub fn category_match_score(resume_skills: &[String], required_skills: &[String]) -> f64 {
    if required_skills.is_empty() || resume_skills.is_empty() {
        return 0.0;
    }

    let resume_lower: Vec<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();
    let matches = required_skills
        .iter()
        .filter(|skill| resume_lower.contains(&skill.to_lowercase()))
        .count();

    let required_count = required_skills.len() as f64;
    let match_percentage = matches as f64 / required_count * 100.0;
    let skill_count_bonus = (resume_skills.len() as f64 * 0.5).min(5.0);
    let coverage_bonus = (matches as f64 / required_count * 20.0).min(10.0);

    round2((match_percentage + skill_count_bonus + coverage_bonus).min(100.0))
}

/// Experience bonus tiers, highest threshold first.
pub fn experience_bonus(experience: ExperienceFact) -> u32 {
    match experience {
        ExperienceFact::Years(years) if years >= 8 => 15,
        ExperienceFact::Years(years) if years >= 5 => 12,
        ExperienceFact::Years(years) if years >= 3 => 8,
        ExperienceFact::Years(years) if years >= 1 => 5,
        _ => 0,
    }
}

/// Education bonus: the first line containing any degree keyword decides,
/// scanning lines in order (first match wins, not highest degree overall).
pub fn education_bonus(education_lines: &[String]) -> u32 {
    for line in education_lines {
        let line_lower = line.to_lowercase();
        if ["phd", "doctorate"].iter().any(|kw| line_lower.contains(kw)) {
            return 10;
        }
        if ["master", "mba", "ms"].iter().any(|kw| line_lower.contains(kw)) {
            return 7;
        }
        if ["bachelor", "b.tech", "b.e", "bs"].iter().any(|kw| line_lower.contains(kw)) {
            return 4;
        }
        if ["diploma", "associate"].iter().any(|kw| line_lower.contains(kw)) {
            return 2;
        }
    }
    0
}

/// Rewards breadth: how many taxonomy categories contribute at least one
/// skill to the resume, 2 points each, capped at 10.
pub fn skills_diversity_bonus(resume_skills: &[String], taxonomy: &SkillTaxonomy) -> u32 {
    if resume_skills.is_empty() {
        return 0;
    }
    let resume_lower: Vec<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();
    let categories_covered = taxonomy
        .categories()
        .iter()
        .filter(|category| {
            category
                .skills
                .iter()
                .any(|skill| resume_lower.contains(&skill.to_string()))
        })
        .count() as u32;
    (categories_covered * 2).min(10)
}

/// Computes the full `ScoreBreakdown` for one candidate against the job's
/// required-skills map.
pub fn score(
    resume: &ParsedResume,
    requirements: &JobRequirements,
    taxonomy: &SkillTaxonomy,
) -> ScoreBreakdown {
    let category_scores: Vec<CategoryScore> = requirements
        .categories
        .iter()
        .map(|required| CategoryScore {
            category: required.category.clone(),
            score: category_match_score(&resume.skills, &required.skills),
        })
        .collect();

    let skill_score = if category_scores.is_empty() {
        0.0
    } else {
        let total: f64 = category_scores.iter().map(|c| c.score).sum();
        round2(total / category_scores.len() as f64)
    };

    let experience_bonus = experience_bonus(resume.experience);
    let education_bonus = education_bonus(&resume.education);
    let skills_diversity_bonus = skills_diversity_bonus(&resume.skills, taxonomy);

    let raw_total = skill_score
        + f64::from(experience_bonus)
        + f64::from(education_bonus)
        + f64::from(skills_diversity_bonus);

    ScoreBreakdown {
        skill_score,
        experience_bonus,
        education_bonus,
        skills_diversity_bonus,
        category_scores,
        overall_score: round2(raw_total.min(100.0)),
    }
}
