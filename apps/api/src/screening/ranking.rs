//! Ranker — the single synchronization point of the pipeline. Scores every
//! valid candidate against the job's requirements, sorts, and assigns dense
//! 1-based ranks.
//!
//! Tie-break: candidates with equal overall scores keep their original input
//! order (the sort is stable and uses no secondary key). This is the
//! documented deterministic tie-break for reproducible rankings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::screening::analyzer::{analyze, ParsedResume};
use crate::screening::extraction::{resolve_text, DocumentInput, FailureKind};
use crate::screening::job_requirements::{extract_job_skills, JobRequirements};
use crate::screening::report::{build_comparison_rows, ComparisonRow};
use crate::screening::scoring::{score, ScoreBreakdown};
use crate::screening::taxonomy::SkillTaxonomy;

/// One scored candidate with its assigned rank (1-based, dense).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub rank: usize,
    pub resume: ParsedResume,
    pub score: ScoreBreakdown,
}

/// A document excluded from ranking because of an upstream failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub filename: String,
    pub kind: FailureKind,
    pub reason: String,
}

/// The top candidate of a non-empty ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub filename: String,
    pub overall_score: f64,
}

/// Explicit result object for one screening run. Callers hold on to this
/// for any later display step; the core keeps no state between batches.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub job_requirements: JobRequirements,
    pub ranking: Vec<RankedCandidate>,
    pub comparison: Vec<ComparisonRow>,
    pub skipped: Vec<SkippedDocument>,
    pub recommended: Option<Recommendation>,
}

/// Ranks a batch of documents against a job description.
///
/// Failed documents are collected in `skipped` and never abort the batch; a
/// batch with zero valid candidates yields an empty ranking, not an error.
pub fn rank_candidates(
    documents: &[DocumentInput],
    job_text: &str,
    taxonomy: &SkillTaxonomy,
) -> ScreeningReport {
    let job_requirements = extract_job_skills(job_text, taxonomy);

    let mut candidates: Vec<(ParsedResume, ScoreBreakdown)> = Vec::new();
    let mut skipped = Vec::new();

    for document in documents {
        match resolve_text(document) {
            Ok(text) => {
                let resume = analyze(&document.filename, text, taxonomy);
                let breakdown = score(&resume, &job_requirements, taxonomy);
                candidates.push((resume, breakdown));
            }
            Err(failure) => {
                tracing::debug!(
                    filename = %document.filename,
                    reason = %failure.reason,
                    "skipping document"
                );
                skipped.push(SkippedDocument {
                    filename: document.filename.clone(),
                    kind: failure.kind,
                    reason: failure.reason,
                });
            }
        }
    }

    // Stable sort: equal scores keep input order, which is the tie-break.
    candidates.sort_by(|a, b| b.1.overall_score.total_cmp(&a.1.overall_score));

    let ranking: Vec<RankedCandidate> = candidates
        .into_iter()
        .enumerate()
        .map(|(index, (resume, breakdown))| RankedCandidate {
            rank: index + 1,
            resume,
            score: breakdown,
        })
        .collect();

    let comparison = build_comparison_rows(&ranking);
    let recommended = ranking.first().map(|top| Recommendation {
        filename: top.resume.filename.clone(),
        overall_score: top.score.overall_score,
    });

    tracing::info!(
        ranked = ranking.len(),
        skipped = skipped.len(),
        categories = job_requirements.categories.len(),
        "screening batch complete"
    );

    ScreeningReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        job_requirements,
        ranking,
        comparison,
        skipped,
        recommended,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::extraction::DocumentFailure;

    fn taxonomy() -> SkillTaxonomy {
        SkillTaxonomy::new()
    }

    fn text_doc(filename: &str, raw_text: &str) -> DocumentInput {
        DocumentInput {
            filename: filename.to_string(),
            raw_text: Some(raw_text.to_string()),
            error: None,
        }
    }

    fn failed_doc(filename: &str, failure: DocumentFailure) -> DocumentInput {
        DocumentInput {
            filename: filename.to_string(),
            raw_text: None,
            error: Some(failure),
        }
    }

    const JOB: &str = "We need Python, React, and AWS";

    #[test]
    fn test_ranking_is_descending_with_dense_ranks() {
        let documents = vec![
            text_doc("weak.pdf", "some Python"),
            text_doc("strong.pdf", "Python React AWS Docker, 9 years of experience, PhD degree"),
            text_doc("middle.pdf", "Python and React, 2 years of experience"),
        ];
        let report = rank_candidates(&documents, JOB, &taxonomy());

        assert_eq!(report.ranking.len(), 3);
        for pair in report.ranking.windows(2) {
            assert!(pair[0].score.overall_score >= pair[1].score.overall_score);
        }
        let ranks: Vec<usize> = report.ranking.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(report.ranking[0].resume.filename, "strong.pdf");
    }

    #[test]
    fn test_tie_break_preserves_input_order() {
        // Identical text scores identically; input order must decide.
        let documents = vec![
            text_doc("first.pdf", "Python developer"),
            text_doc("second.pdf", "Python developer"),
            text_doc("third.pdf", "Python developer"),
        ];
        let report = rank_candidates(&documents, JOB, &taxonomy());
        let names: Vec<&str> = report
            .ranking
            .iter()
            .map(|c| c.resume.filename.as_str())
            .collect();
        assert_eq!(names, vec!["first.pdf", "second.pdf", "third.pdf"]);
    }

    #[test]
    fn test_failed_documents_are_skipped_not_fatal() {
        let documents = vec![
            failed_doc(
                "bad.odt",
                DocumentFailure::unsupported_format("Unsupported file format: .odt"),
            ),
            text_doc("good.pdf", "Python"),
            text_doc("blank.pdf", "   "),
        ];
        let report = rank_candidates(&documents, JOB, &taxonomy());

        assert_eq!(report.ranking.len(), 1);
        assert_eq!(report.ranking[0].resume.filename, "good.pdf");
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].kind, FailureKind::UnsupportedFormat);
        assert_eq!(report.skipped[1].kind, FailureKind::ExtractionFailure);
    }

    #[test]
    fn test_empty_batch_yields_empty_report() {
        let report = rank_candidates(&[], JOB, &taxonomy());
        assert!(report.ranking.is_empty());
        assert!(report.comparison.is_empty());
        assert!(report.skipped.is_empty());
        assert!(report.recommended.is_none());
    }

    #[test]
    fn test_all_failed_batch_yields_empty_ranking() {
        let documents = vec![failed_doc(
            "bad.pdf",
            DocumentFailure::extraction_failure("could not extract text from file"),
        )];
        let report = rank_candidates(&documents, JOB, &taxonomy());
        assert!(report.ranking.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert!(report.recommended.is_none());
    }

    #[test]
    fn test_empty_job_description_scores_everyone_zero_skill_score() {
        let documents = vec![
            text_doc("a.pdf", "Python React AWS Docker"),
            text_doc("b.pdf", "nothing at all"),
        ];
        let report = rank_candidates(&documents, "", &taxonomy());
        assert!(report.job_requirements.is_empty());
        for candidate in &report.ranking {
            assert_eq!(candidate.score.skill_score, 0.0);
        }
    }

    #[test]
    fn test_recommendation_is_top_candidate() {
        let documents = vec![
            text_doc("low.pdf", "nothing"),
            text_doc("high.pdf", "Python React AWS, 8 years of experience"),
        ];
        let report = rank_candidates(&documents, JOB, &taxonomy());
        let recommended = report.recommended.unwrap();
        assert_eq!(recommended.filename, "high.pdf");
        assert_eq!(
            recommended.overall_score,
            report.ranking[0].score.overall_score
        );
    }

    #[test]
    fn test_comparison_rows_follow_rank_order() {
        let documents = vec![
            text_doc("weak.pdf", "some Python"),
            text_doc("strong.pdf", "Python React AWS, 9 years of experience"),
        ];
        let report = rank_candidates(&documents, JOB, &taxonomy());
        assert_eq!(report.comparison.len(), 2);
        assert_eq!(report.comparison[0].rank, 1);
        assert_eq!(report.comparison[0].filename, "strong.pdf");
        assert_eq!(report.comparison[1].rank, 2);
    }
}
