use serde::{Deserialize, Serialize};

use super::{LaneDensity, LaneDirection};

/// Timing recommendation for the next signal cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalPhase {
    pub priority_lane: LaneDirection,
    /// Clamped to the configured green range and rounded to one decimal.
    pub green_duration_seconds: f64,
    pub yellow_duration_seconds: f64,
    pub all_red_duration_seconds: f64,
    /// One entry per input lane, in input order.
    pub density_scores: Vec<LaneDensity>,
    pub reasoning: String,
}

impl SignalPhase {
    /// Sum of every lane's density score.
    pub fn total_density(&self) -> f64 {
        self.density_scores.iter().map(|d| d.density_score).sum()
    }

    /// Full cycle length for the priority phase: green + yellow + all-red.
    pub fn cycle_seconds(&self) -> f64 {
        self.green_duration_seconds + self.yellow_duration_seconds + self.all_red_duration_seconds
    }
}
