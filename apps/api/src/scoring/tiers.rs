//! Performance tiers — maps an interview percentage to a qualitative label.
//!
//! Two threshold tables exist: the weighted table (85/70/50), which pairs with
//! proportional keyword credit, and the legacy table (80/60/40). The active
//! table is chosen once at startup from `PERFORMANCE_TIERS`, which also
//! accepts a custom "excellent/good/average" triple such as `90/75/55`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scoring::ScoringError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Performance {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Performance {
    pub fn label(&self) -> &'static str {
        match self {
            Performance::Excellent => "Excellent",
            Performance::Good => "Good",
            Performance::Average => "Average",
            Performance::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn feedback(&self) -> &'static str {
        match self {
            Performance::Excellent => {
                "Outstanding performance! You demonstrate deep understanding of the concepts."
            }
            Performance::Good => {
                "Solid performance. You show good understanding with room for improvement in some areas."
            }
            Performance::Average => {
                "Decent attempt. Consider reviewing some key concepts and practicing more."
            }
            Performance::NeedsImprovement => {
                "You may need to strengthen your fundamentals and gain more practical experience."
            }
        }
    }
}

/// Lower bounds (inclusive, in percent) for each tier above Needs Improvement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TierTable {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
}

impl TierTable {
    pub const WEIGHTED: TierTable = TierTable {
        excellent: 85.0,
        good: 70.0,
        average: 50.0,
    };

    pub const LEGACY: TierTable = TierTable {
        excellent: 80.0,
        good: 60.0,
        average: 40.0,
    };

    /// Builds a custom table. Thresholds must be strictly descending within 0–100.
    pub fn new(excellent: f64, good: f64, average: f64) -> Result<Self, ScoringError> {
        let table = TierTable {
            excellent,
            good,
            average,
        };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        let ordered = self.excellent <= 100.0
            && self.excellent > self.good
            && self.good > self.average
            && self.average >= 0.0;
        if !ordered {
            return Err(ScoringError::InvalidInput(format!(
                "tier thresholds must satisfy 100 >= excellent > good > average >= 0, got {}/{}/{}",
                self.excellent, self.good, self.average
            )));
        }
        Ok(())
    }

    pub fn classify(&self, percentage: f64) -> Performance {
        match percentage {
            p if p >= self.excellent => Performance::Excellent,
            p if p >= self.good => Performance::Good,
            p if p >= self.average => Performance::Average,
            _ => Performance::NeedsImprovement,
        }
    }
}

impl Default for TierTable {
    fn default() -> Self {
        TierTable::WEIGHTED
    }
}

impl FromStr for TierTable {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weighted" => Ok(TierTable::WEIGHTED),
            "legacy" => Ok(TierTable::LEGACY),
            other => {
                let bounds: Vec<f64> = other
                    .split('/')
                    .map(|part| part.trim().parse::<f64>())
                    .collect::<Result<_, _>>()
                    .map_err(|_| unknown_table(other))?;
                match bounds.as_slice() {
                    [excellent, good, average] => TierTable::new(*excellent, *good, *average),
                    _ => Err(unknown_table(other)),
                }
            }
        }
    }
}

fn unknown_table(value: &str) -> ScoringError {
    ScoringError::InvalidInput(format!(
        "unknown tier table '{value}' (expected 'weighted', 'legacy' or 'excellent/good/average')"
    ))
}
