use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::screening::analyzer::{analyze, ParsedResume};
use crate::screening::extraction::{usable_text, DocumentInput};
use crate::screening::job_requirements::{extract_job_skills, JobRequirements};
use crate::screening::ranking::{rank_candidates, ScreeningReport};
use crate::screening::report::{explain_score, ScoreExplanation};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub filename: String,
    #[serde(default)]
    pub raw_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JobRequest {
    pub job_text: String,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub job_text: String,
    pub documents: Vec<DocumentInput>,
}

#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub filename: String,
    #[serde(default)]
    pub raw_text: Option<String>,
    pub job_text: String,
}

/// POST /api/v1/screening/resume
///
/// Analyzes a single document. Unlike the batch endpoint, a document with no
/// usable text is a 422 here; there is no batch to degrade into.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ParsedResume>, AppError> {
    require_filename(&req.filename)?;
    let text = require_text(&req.filename, req.raw_text.as_deref())?;
    Ok(Json(analyze(&req.filename, text, &state.taxonomy)))
}

/// POST /api/v1/screening/job
pub async fn handle_extract_job_skills(
    State(state): State<AppState>,
    Json(req): Json<JobRequest>,
) -> Result<Json<JobRequirements>, AppError> {
    Ok(Json(extract_job_skills(&req.job_text, &state.taxonomy)))
}

/// POST /api/v1/screening/rank
///
/// Ranks a whole batch. Per-document failures land in `skipped`; an empty or
/// all-failed batch returns an empty ranking, not an error.
pub async fn handle_rank_candidates(
    State(state): State<AppState>,
    Json(req): Json<RankRequest>,
) -> Result<Json<ScreeningReport>, AppError> {
    // A missing filename is a caller contract violation, not a per-document
    // extraction failure; it is signaled immediately rather than skipped.
    for document in &req.documents {
        require_filename(&document.filename)?;
    }
    tracing::info!(documents = req.documents.len(), "ranking batch");
    Ok(Json(rank_candidates(
        &req.documents,
        &req.job_text,
        &state.taxonomy,
    )))
}

/// POST /api/v1/screening/explain
pub async fn handle_explain_score(
    State(state): State<AppState>,
    Json(req): Json<ExplainRequest>,
) -> Result<Json<ScoreExplanation>, AppError> {
    require_filename(&req.filename)?;
    let text = require_text(&req.filename, req.raw_text.as_deref())?;
    let resume = analyze(&req.filename, text, &state.taxonomy);
    let requirements = extract_job_skills(&req.job_text, &state.taxonomy);
    Ok(Json(explain_score(&resume, &requirements, &state.taxonomy)))
}

fn require_filename(filename: &str) -> Result<(), AppError> {
    if filename.trim().is_empty() {
        return Err(AppError::Validation(
            "filename must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn require_text<'a>(filename: &str, raw_text: Option<&'a str>) -> Result<&'a str, AppError> {
    usable_text(raw_text)
        .map_err(|failure| AppError::UnprocessableEntity(format!("{filename}: {}", failure.reason)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_filename_rejects_blank() {
        assert!(matches!(
            require_filename(""),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            require_filename("   "),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_require_filename_accepts_name() {
        assert!(require_filename("resume.pdf").is_ok());
    }

    #[test]
    fn test_require_text_maps_to_unprocessable() {
        assert!(matches!(
            require_text("a.pdf", None),
            Err(AppError::UnprocessableEntity(_))
        ));
        assert_eq!(require_text("a.pdf", Some("Python")).unwrap(), "Python");
    }
}
