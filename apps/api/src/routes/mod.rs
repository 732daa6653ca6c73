pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interview API
        .route(
            "/api/v1/interviews/questions",
            post(interview::handle_select_questions),
        )
        .route("/api/v1/interviews/score", post(interview::handle_score))
        .route("/api/v1/interviews/submit", post(interview::handle_submit))
        // Match API
        .route("/api/v1/match", post(matching::handle_match))
        .route(
            "/api/v1/match/candidate",
            post(matching::handle_candidate_match),
        )
        .route("/api/v1/match/jobs", post(matching::handle_rank_jobs))
        .route(
            "/api/v1/profile/analysis",
            post(matching::handle_profile_analysis),
        )
        .with_state(state)
}
