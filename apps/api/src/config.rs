use anyhow::{Context, Result};

use crate::interview::questions::DEFAULT_QUESTION_COUNT;
use crate::scoring::tiers::TierTable;

/// Application configuration loaded from environment variables.
/// Only the optional knobs below exist; every one has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Job-board backend base URL. Unset → submissions are scored but not forwarded.
    pub backend_url: Option<String>,
    pub tier_table: TierTable,
    pub question_count: usize,
    /// Fixed seed for question selection (reproducible interviews in demos/tests).
    pub question_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let tier_table = match optional_env("PERFORMANCE_TIERS") {
            Some(v) => v.parse::<TierTable>().context(
                "PERFORMANCE_TIERS must be 'weighted', 'legacy' or 'excellent/good/average'",
            )?,
            None => TierTable::default(),
        };

        let question_count = match optional_env("INTERVIEW_QUESTION_COUNT") {
            Some(v) => v
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .context("INTERVIEW_QUESTION_COUNT must be a positive integer")?,
            None => DEFAULT_QUESTION_COUNT,
        };

        let question_seed = optional_env("QUESTION_SEED")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("QUESTION_SEED must be an unsigned integer")?;

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            backend_url: optional_env("BACKEND_URL"),
            tier_table,
            question_count,
            question_seed,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            backend_url: None,
            tier_table: TierTable::default(),
            question_count: DEFAULT_QUESTION_COUNT,
            question_seed: None,
        }
    }
}

/// Reads `key`, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
