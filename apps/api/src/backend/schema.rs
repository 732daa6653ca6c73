//! Wire schemas for the job-board backend. Parsed at the boundary so handlers
//! never read loosely-shaped JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::question::{Question, QuestionType};
use crate::scoring::answers::ScoreResult;

/// One answered question as the backend stores it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnswerRecord {
    pub question: String,
    pub answer: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

/// Body of `POST /interviews/save`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterviewCreate {
    pub candidate_email: String,
    pub job_id: String,
    pub application_id: String,
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub performance: String,
    pub answers: Vec<AnswerRecord>,
    pub time_taken: u32,
}

impl InterviewCreate {
    pub fn from_result(
        candidate_email: String,
        job_id: String,
        application_id: String,
        questions: &[Question],
        answers: &[String],
        result: &ScoreResult,
        time_taken: u32,
    ) -> Self {
        let answers = questions
            .iter()
            .zip(answers)
            .map(|(q, a)| AnswerRecord {
                question: q.text.clone(),
                answer: a.clone(),
                question_type: q.question_type,
            })
            .collect();

        Self {
            candidate_email,
            job_id,
            application_id,
            score: f64::from(result.total_score),
            max_score: result.max_possible_score,
            percentage: result.percentage,
            performance: result.performance.label().to_string(),
            answers,
            time_taken,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveInterviewResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// Stored record echoed back by the backend; shape is backend-owned.
    #[serde(default)]
    pub interview: Option<Value>,
}
