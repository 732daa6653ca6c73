// Scoring cores: interview answer scoring, skill matching, profile analysis.
// Everything here is synchronous and pure; handlers call it inline.

pub mod answers;
pub mod matching;
pub mod profile;
pub mod tiers;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
