use super::color::Color;
use super::formulas::ScoreSet;
use super::metrics::UnitStats;
use serde::{Deserialize, Serialize};

/// Everything computed for one scored unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitScore {
    pub stats: UnitStats,

    // Absent when the unit has no words to score.
    pub scores: Option<ScoreSet>,
    pub aggregate_age: Option<f64>,
    pub color: Option<Color>,
}

impl UnitScore {
    pub fn is_scored(&self) -> bool {
        self.scores.is_some()
    }

    pub fn hue(&self) -> Option<f64> {
        self.color.map(|c| c.hue)
    }
}
