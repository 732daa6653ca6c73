// Mock interviews: question selection, answer scoring and submission.
// Scoring itself lives in crate::scoring::answers.

pub mod handlers;
pub mod questions;
