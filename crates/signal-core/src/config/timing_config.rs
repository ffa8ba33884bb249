//! Signal timing configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Duration bounds for the timing engine. Unset fields fall back to the
/// compiled constants.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    /// Shortest allowed green (seconds). Default: 15.
    pub min_green_secs: Option<f64>,
    /// Longest allowed green (seconds). Default: 90.
    pub max_green_secs: Option<f64>,
    /// Fixed yellow interval (seconds). Default: 3.
    pub yellow_secs: Option<f64>,
    /// Fixed all-red clearance (seconds). Default: 2.
    pub all_red_secs: Option<f64>,
}

impl TimingConfig {
    pub fn effective_min_green(&self) -> f64 {
        self.min_green_secs.unwrap_or(constants::MIN_GREEN_SECS)
    }

    pub fn effective_max_green(&self) -> f64 {
        self.max_green_secs.unwrap_or(constants::MAX_GREEN_SECS)
    }

    pub fn effective_yellow(&self) -> f64 {
        self.yellow_secs.unwrap_or(constants::YELLOW_SECS)
    }

    pub fn effective_all_red(&self) -> f64 {
        self.all_red_secs.unwrap_or(constants::ALL_RED_SECS)
    }
}
