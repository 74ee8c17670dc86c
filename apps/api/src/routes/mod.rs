pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route(
            "/api/v1/screening/resume",
            post(handlers::handle_analyze_resume),
        )
        .route(
            "/api/v1/screening/job",
            post(handlers::handle_extract_job_skills),
        )
        .route(
            "/api/v1/screening/rank",
            post(handlers::handle_rank_candidates),
        )
        .route(
            "/api/v1/screening/explain",
            post(handlers::handle_explain_score),
        )
        .with_state(state)
}
