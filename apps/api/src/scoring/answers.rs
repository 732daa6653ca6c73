//! Answer scoring — turns free-text interview answers into a score and tier.
//!
//! Per answered question (blank answers score 0):
//! 1. base credit    = min(max_score × 0.3, chars / 20)
//! 2. keyword credit = max_score × 0.7 / keyword_count for each keyword present
//! 3. structure      = + max_score × 0.1 when splitting on '.' yields > 2 parts
//! 4. clamp to max_score
//!
//! The percentage is taken from the unrounded total and reported to two
//! decimals; the tier is read from that reported value so label and number agree.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::question::Question;
use crate::scoring::tiers::{Performance, TierTable};
use crate::scoring::ScoringError;

const BASE_WEIGHT: f64 = 0.3;
const KEYWORD_WEIGHT: f64 = 0.7;
const STRUCTURE_WEIGHT: f64 = 0.1;
const CHARS_PER_POINT: f64 = 20.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreResult {
    pub total_score: u32,
    pub max_possible_score: f64,
    pub percentage: f64,
    pub performance: Performance,
    pub feedback: String,
    pub questions_attempted: usize,
    /// Clamped, unrounded score per question, in question order.
    pub question_scores: Vec<f64>,
}

/// Scores `answers` against `questions` position by position.
///
/// Fails with `InvalidInput` when the lengths differ or any question carries a
/// non-positive or non-finite `max_score`.
pub fn score_answers<S: AsRef<str>>(
    questions: &[Question],
    answers: &[S],
    tiers: &TierTable,
) -> Result<ScoreResult, ScoringError> {
    if questions.len() != answers.len() {
        return Err(ScoringError::InvalidInput(format!(
            "expected {} answers, got {}",
            questions.len(),
            answers.len()
        )));
    }
    if let Some(q) = questions
        .iter()
        .find(|q| !q.max_score.is_finite() || q.max_score <= 0.0)
    {
        return Err(ScoringError::InvalidInput(format!(
            "question {} has invalid max_score {}",
            q.id, q.max_score
        )));
    }

    let mut total = 0.0_f64;
    let mut max_possible = 0.0_f64;
    let mut attempted = 0;
    let mut question_scores = Vec::with_capacity(questions.len());

    for (question, answer) in questions.iter().zip(answers) {
        let answer: &str = answer.as_ref();
        max_possible += question.max_score;

        let score = score_single(question, answer);
        if !answer.trim().is_empty() {
            attempted += 1;
        }
        total += score;
        question_scores.push(score);
    }

    let percentage = if max_possible > 0.0 {
        round_to_hundredths(total / max_possible * 100.0)
    } else {
        0.0
    };
    let performance = tiers.classify(percentage);

    debug!(
        total,
        max_possible,
        percentage,
        performance = performance.label(),
        "scored interview answers"
    );

    // Rounding may not lift the total past a fractional maximum (2.5 → 3).
    let total_score = total.round().min(max_possible.floor()) as u32;

    Ok(ScoreResult {
        total_score,
        max_possible_score: max_possible,
        percentage,
        performance,
        feedback: performance.feedback().to_string(),
        questions_attempted: attempted,
        question_scores,
    })
}

/// Clamped score for one answer. Blank answers score 0.
fn score_single(question: &Question, answer: &str) -> f64 {
    if answer.trim().is_empty() {
        return 0.0;
    }
    let max = question.max_score;

    let length = answer.chars().count() as f64;
    let mut raw = (max * BASE_WEIGHT).min(length / CHARS_PER_POINT);

    let keyword_count = question.expected_keywords.len();
    if keyword_count > 0 {
        let per_keyword = max * KEYWORD_WEIGHT / keyword_count as f64;
        let answer_lower = answer.to_lowercase();
        let hits = question
            .expected_keywords
            .iter()
            .filter(|k| answer_lower.contains(&k.to_lowercase()))
            .count();
        raw += per_keyword * hits as f64;
    }

    if answer.split('.').count() > 2 {
        raw += max * STRUCTURE_WEIGHT;
    }

    raw.min(max)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{Difficulty, QuestionType};

    fn make_question(id: u32, max_score: f64, keywords: &[&str]) -> Question {
        Question {
            id,
            text: format!("Question {id}"),
            question_type: QuestionType::Conceptual,
            difficulty: Difficulty::Medium,
            max_score,
            expected_keywords: keywords.iter().map(|k| k.to_string()).collect(),
            time_limit_secs: None,
        }
    }

    #[test]
    fn test_scope_and_hoisting_answer_scores_excellent() {
        let questions = vec![make_question(1, 10.0, &["scope", "hoisting"])];
        let answers = ["Scope and hoisting determine variable visibility."];

        let result = score_answers(&questions, &answers, &TierTable::WEIGHTED).unwrap();

        // 49 chars → base 2.45; both keywords → 7.0; one sentence → no bonus
        assert!((result.question_scores[0] - 9.45).abs() < 1e-9);
        assert_eq!(result.total_score, 9);
        assert_eq!(result.max_possible_score, 10.0);
        assert!((result.percentage - 94.5).abs() < 1e-9, "got {}", result.percentage);
        assert_eq!(result.performance, Performance::Excellent);
        assert_eq!(result.questions_attempted, 1);
    }

    #[test]
    fn test_all_blank_answers_score_zero() {
        let questions = vec![
            make_question(1, 10.0, &["scope"]),
            make_question(2, 15.0, &["closure"]),
        ];
        let answers = ["", "   \n\t"];

        let result = score_answers(&questions, &answers, &TierTable::WEIGHTED).unwrap();
        assert_eq!(result.total_score, 0);
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.max_possible_score, 25.0);
        assert_eq!(result.questions_attempted, 0);
        assert_eq!(result.performance, Performance::NeedsImprovement);
    }

    #[test]
    fn test_length_mismatch_is_invalid_input() {
        let questions = vec![make_question(1, 10.0, &["scope"])];
        let answers: [&str; 0] = [];
        let err = score_answers(&questions, &answers, &TierTable::WEIGHTED).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidInput(_)));
    }

    #[test]
    fn test_non_positive_max_score_is_invalid_input() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let questions = vec![make_question(7, bad, &[])];
            let err = score_answers(&questions, &["answer"], &TierTable::WEIGHTED).unwrap_err();
            assert!(matches!(err, ScoringError::InvalidInput(_)), "max_score {bad}");
        }
    }

    #[test]
    fn test_empty_question_set_has_zero_percentage() {
        let answers: [&str; 0] = [];
        let result = score_answers(&[], &answers, &TierTable::WEIGHTED).unwrap();
        assert_eq!(result.max_possible_score, 0.0);
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.total_score, 0);
    }

    #[test]
    fn test_base_credit_saturates_at_thirty_percent() {
        let questions = vec![make_question(1, 10.0, &["kubernetes"])];
        let long_answer = "x".repeat(2_000);
        let result = score_answers(&questions, &[long_answer], &TierTable::WEIGHTED).unwrap();
        assert!((result.question_scores[0] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive_substring() {
        let questions = vec![make_question(1, 10.0, &["DOM", "diffing"])];
        // "virtualdom" contains "dom"; "Diffing" matches "diffing"
        let answer = "VirtualDOM Diffing";
        let result = score_answers(&questions, &[answer], &TierTable::WEIGHTED).unwrap();
        let expected = (answer.len() as f64 / 20.0) + 7.0;
        assert!((result.question_scores[0] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_structure_bonus_needs_more_than_two_segments() {
        let questions = vec![make_question(1, 20.0, &[])];

        // "a. b" splits into two parts, "a. b." into three
        let two_sentences = "First point. Second point";
        let three_sentences = "First point. Second point.";
        let r2 = score_answers(&questions, &[two_sentences], &TierTable::WEIGHTED).unwrap();
        let r3 = score_answers(&questions, &[three_sentences], &TierTable::WEIGHTED).unwrap();

        let base2 = two_sentences.len() as f64 / 20.0;
        let base3 = three_sentences.len() as f64 / 20.0;
        assert!((r2.question_scores[0] - base2).abs() < 1e-9);
        assert!((r3.question_scores[0] - (base3 + 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_per_question_score_clamped_to_max() {
        let questions = vec![make_question(1, 10.0, &["rest", "http"])];
        let answer = "REST is stateless. It uses HTTP verbs. Resources have URIs. Status codes matter.";
        let result = score_answers(&questions, &[answer], &TierTable::WEIGHTED).unwrap();
        // 3.0 base + 7.0 keywords + 1.0 structure = 11.0 → clamped
        assert_eq!(result.question_scores[0], 10.0);
        assert_eq!(result.total_score, 10);
        assert_eq!(result.percentage, 100.0);
    }

    #[test]
    fn test_total_never_exceeds_max_possible() {
        let questions = vec![
            make_question(1, 10.0, &["a", "b"]),
            make_question(2, 15.0, &["c"]),
            make_question(3, 20.0, &["d", "e", "f"]),
        ];
        let answers = [
            "a b. a b. a b. a b.".repeat(20),
            "c. c. c.".to_string(),
            String::new(),
        ];
        let result = score_answers(&questions, &answers, &TierTable::WEIGHTED).unwrap();
        assert!(result.total_score as f64 <= result.max_possible_score);
        assert!(result.percentage >= 0.0 && result.percentage <= 100.0);
        assert_eq!(result.questions_attempted, 2);
    }

    #[test]
    fn test_rounded_total_stays_within_fractional_max() {
        let questions = vec![make_question(1, 2.5, &["scope"])];
        let answers = ["scope scope scope scope scope. a. b."];

        let result = score_answers(&questions, &answers, &TierTable::WEIGHTED).unwrap();
        assert_eq!(result.question_scores[0], 2.5);
        assert_eq!(result.percentage, 100.0);
        assert_eq!(result.total_score, 2);
        assert!(result.total_score as f64 <= result.max_possible_score);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let questions = vec![
            make_question(1, 10.0, &["scope", "hoisting", "block"]),
            make_question(2, 15.0, &["lexical", "closure"]),
        ];
        let answers = [
            "let is block scoped. var is hoisting-prone.",
            "A closure captures its lexical environment.",
        ];
        let first = score_answers(&questions, &answers, &TierTable::WEIGHTED).unwrap();
        let second = score_answers(&questions, &answers, &TierTable::WEIGHTED).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tier_table_changes_label_only() {
        let questions = vec![make_question(1, 10.0, &["alpha", "beta"])];
        // 1 of 2 keywords → 3.5, plus base 0.75 (15 chars) → 42.5%
        let answer = "alpha only here";
        let weighted = score_answers(&questions, &[answer], &TierTable::WEIGHTED).unwrap();
        let legacy = score_answers(&questions, &[answer], &TierTable::LEGACY).unwrap();
        assert_eq!(weighted.percentage, legacy.percentage);
        assert_eq!(weighted.performance, Performance::NeedsImprovement);
        assert_eq!(legacy.performance, Performance::Average);
    }

    #[test]
    fn test_feedback_follows_performance() {
        let questions = vec![make_question(1, 10.0, &[])];
        let result = score_answers(&questions, &[""], &TierTable::WEIGHTED).unwrap();
        assert_eq!(result.feedback, Performance::NeedsImprovement.feedback());
    }
}
