//! Question bank and selection.
//!
//! The bank is static and keyed by a coarse role derived from the job title.
//! Selection is a pluggable strategy carried in `AppState` as
//! `Arc<dyn QuestionSelector>`; the scorer never depends on it, so scoring
//! stays deterministic whichever questions were drawn.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::models::question::{Difficulty, Question, QuestionType};

pub const DEFAULT_QUESTION_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Developer,
    Designer,
    Manager,
}

impl Role {
    /// design/ui/ux → Designer, then manager/lead/director → Manager,
    /// anything else (including a missing title) → Developer.
    pub fn from_job_title(title: Option<&str>) -> Self {
        let title = title.unwrap_or_default().to_lowercase();
        if ["design", "ui", "ux"].iter().any(|k| title.contains(*k)) {
            Role::Designer
        } else if ["manager", "lead", "director"]
            .iter()
            .any(|k| title.contains(*k))
        {
            Role::Manager
        } else {
            Role::Developer
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Selection strategy
// ────────────────────────────────────────────────────────────────────────────

pub trait QuestionSelector: Send + Sync {
    fn select(&self, bank: Vec<Question>, count: usize) -> Vec<Question>;
}

/// Shuffle-and-take-N. With a seed the draw is reproducible across calls.
pub struct ShuffleSelector {
    pub seed: Option<u64>,
}

impl QuestionSelector for ShuffleSelector {
    fn select(&self, mut bank: Vec<Question>, count: usize) -> Vec<Question> {
        match self.seed {
            Some(seed) => bank.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => bank.shuffle(&mut rand::thread_rng()),
        }
        bank.truncate(count);
        bank
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static bank
// ────────────────────────────────────────────────────────────────────────────

struct BankEntry {
    id: u32,
    text: &'static str,
    question_type: QuestionType,
    difficulty: Difficulty,
    max_score: f64,
    keywords: &'static [&'static str],
    time_limit_secs: u32,
}

const DEVELOPER_BANK: &[BankEntry] = &[
    BankEntry {
        id: 1,
        text: "What is the difference between let, const, and var in JavaScript?",
        question_type: QuestionType::Coding,
        difficulty: Difficulty::Easy,
        max_score: 10.0,
        keywords: &["scope", "hoisting", "block", "reassign", "function"],
        time_limit_secs: 180,
    },
    BankEntry {
        id: 2,
        text: "Explain the concept of closures in JavaScript with an example.",
        question_type: QuestionType::Coding,
        difficulty: Difficulty::Medium,
        max_score: 15.0,
        keywords: &["scope", "function", "lexical", "environment", "memory"],
        time_limit_secs: 240,
    },
    BankEntry {
        id: 3,
        text: "What is the Virtual DOM in React and how does it improve performance?",
        question_type: QuestionType::Conceptual,
        difficulty: Difficulty::Medium,
        max_score: 15.0,
        keywords: &["virtual", "dom", "reconciliation", "diffing", "performance", "batch"],
        time_limit_secs: 240,
    },
    BankEntry {
        id: 4,
        text: "Write a function to reverse a string in JavaScript.",
        question_type: QuestionType::Coding,
        difficulty: Difficulty::Easy,
        max_score: 10.0,
        keywords: &["reverse", "string", "split", "join", "algorithm"],
        time_limit_secs: 180,
    },
    BankEntry {
        id: 5,
        text: "Explain RESTful API principles and best practices.",
        question_type: QuestionType::Conceptual,
        difficulty: Difficulty::Medium,
        max_score: 15.0,
        keywords: &["rest", "stateless", "resource", "http", "methods", "status", "codes"],
        time_limit_secs: 300,
    },
];

const DESIGNER_BANK: &[BankEntry] = &[
    BankEntry {
        id: 1,
        text: "Explain the difference between UI and UX design.",
        question_type: QuestionType::Conceptual,
        difficulty: Difficulty::Easy,
        max_score: 10.0,
        keywords: &["interface", "experience", "user", "interaction", "visual", "usability"],
        time_limit_secs: 240,
    },
    BankEntry {
        id: 2,
        text: "What tools do you use for prototyping and why?",
        question_type: QuestionType::Practical,
        difficulty: Difficulty::Medium,
        max_score: 15.0,
        keywords: &["figma", "sketch", "adobe", "xd", "prototype", "collaboration", "feedback"],
        time_limit_secs: 300,
    },
    BankEntry {
        id: 3,
        text: "What is responsive design and why is it important?",
        question_type: QuestionType::Conceptual,
        difficulty: Difficulty::Easy,
        max_score: 10.0,
        keywords: &["responsive", "mobile", "desktop", "adapt", "layout", "breakpoints"],
        time_limit_secs: 240,
    },
];

const MANAGER_BANK: &[BankEntry] = &[
    BankEntry {
        id: 1,
        text: "How do you handle conflicts between team members?",
        question_type: QuestionType::Behavioral,
        difficulty: Difficulty::Medium,
        max_score: 15.0,
        keywords: &["conflict", "resolution", "communication", "mediation", "understanding", "solution"],
        time_limit_secs: 300,
    },
    BankEntry {
        id: 2,
        text: "Describe your approach to project planning and execution.",
        question_type: QuestionType::Management,
        difficulty: Difficulty::Hard,
        max_score: 20.0,
        keywords: &["agile", "scrum", "planning", "timeline", "resources", "risk", "management"],
        time_limit_secs: 360,
    },
];

/// Full question bank for a role, in bank order.
pub fn question_bank(role: Role) -> Vec<Question> {
    let entries = match role {
        Role::Developer => DEVELOPER_BANK,
        Role::Designer => DESIGNER_BANK,
        Role::Manager => MANAGER_BANK,
    };
    entries
        .iter()
        .map(|e| Question {
            id: e.id,
            text: e.text.to_string(),
            question_type: e.question_type,
            difficulty: e.difficulty,
            max_score: e.max_score,
            expected_keywords: e.keywords.iter().map(|k| k.to_string()).collect(),
            time_limit_secs: Some(e.time_limit_secs),
        })
        .collect()
}
