//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::backend::schema::InterviewCreate;
use crate::errors::AppError;
use crate::interview::questions::{question_bank, Role};
use crate::models::question::Question;
use crate::scoring::answers::{score_answers, ScoreResult};
use crate::session::SessionContext;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub role: Role,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub questions: Vec<Question>,
    /// `null` entries are unanswered questions.
    pub answers: Vec<Option<String>>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub job_id: String,
    pub application_id: String,
    pub questions: Vec<Question>,
    pub answers: Vec<Option<String>>,
    #[serde(default)]
    pub time_taken_secs: u32,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub result: ScoreResult,
    pub persisted: bool,
    pub scored_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interviews/questions
///
/// Picks the role's bank from the job title and draws questions with the
/// configured selector.
pub async fn handle_select_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionsRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let count = request.count.unwrap_or(state.config.question_count);
    if count == 0 {
        return Err(AppError::Validation("count must be at least 1".to_string()));
    }

    let role = Role::from_job_title(request.job_title.as_deref());
    let questions = state.question_selector.select(question_bank(role), count);

    Ok(Json(QuestionsResponse { role, questions }))
}

/// POST /api/v1/interviews/score
///
/// Scores answers without persisting anything. Used for previews and by
/// callers that persist on their own.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    let answers = fill_blanks(request.answers);
    let result = score_answers(&request.questions, &answers, &state.config.tier_table)?;
    Ok(Json(result))
}

/// POST /api/v1/interviews/submit
///
/// Scores the signed-in candidate's answers and forwards the result to the
/// job-board backend when one is configured. A backend failure is returned
/// to the caller; the score is never silently dropped.
pub async fn handle_submit(
    State(state): State<AppState>,
    session: SessionContext,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let candidate_email = session.require_candidate()?.to_string();
    if request.job_id.trim().is_empty() || request.application_id.trim().is_empty() {
        return Err(AppError::Validation(
            "job_id and application_id are required".to_string(),
        ));
    }

    let answers = fill_blanks(request.answers);
    let result = score_answers(&request.questions, &answers, &state.config.tier_table)?;

    info!(
        candidate = %candidate_email,
        application_id = %request.application_id,
        percentage = result.percentage,
        performance = result.performance.label(),
        "Interview scored"
    );

    let persisted = match &state.interview_sink {
        Some(sink) => {
            let body = InterviewCreate::from_result(
                candidate_email,
                request.job_id,
                request.application_id,
                &request.questions,
                &answers,
                &result,
                request.time_taken_secs,
            );
            let saved = sink.save_interview(&body).await?;
            if saved.success {
                info!("Interview forwarded to backend: {}", saved.message);
            } else {
                warn!("Backend accepted interview without success flag: {}", saved.message);
            }
            true
        }
        None => {
            warn!("BACKEND_URL not configured; interview result not persisted");
            false
        }
    };

    Ok(Json(SubmitResponse {
        result,
        persisted,
        scored_at: Utc::now(),
    }))
}

fn fill_blanks(answers: Vec<Option<String>>) -> Vec<String> {
    answers.into_iter().map(Option::unwrap_or_default).collect()
}
