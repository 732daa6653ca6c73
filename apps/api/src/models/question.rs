use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Coding,
    Conceptual,
    Behavioral,
    Practical,
    ProblemSolving,
    Management,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One interview question. `question_type`, `difficulty` and `time_limit_secs`
/// are display metadata only; scoring reads `max_score` and `expected_keywords`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: u32,
    #[serde(alias = "question")]
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    #[serde(alias = "maxScore")]
    pub max_score: f64,
    #[serde(alias = "expectedKeywords", default)]
    pub expected_keywords: Vec<String>,
    #[serde(alias = "timeLimit", default, skip_serializing_if = "Option::is_none")]
    pub time_limit_secs: Option<u32>,
}
