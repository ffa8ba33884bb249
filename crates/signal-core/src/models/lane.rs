use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::VehicleCounts;

/// Approach direction of a lane at a four-way intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaneDirection {
    North,
    South,
    East,
    West,
}

impl LaneDirection {
    /// Canonical cardinal order used when a full lane set is built:
    /// North, East, South, West.
    pub const CARDINAL_ORDER: [LaneDirection; 4] =
        [Self::North, Self::East, Self::South, Self::West];

    /// Directional index exposed by the simplified API (0=North .. 3=West).
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }
}

impl fmt::Display for LaneDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lane's observation as handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneInput {
    pub direction: LaneDirection,
    pub vehicles: VehicleCounts,
    /// When the counts were observed, if the source reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Free-form origin tag, e.g. "camera", "iot", "manual", "defaulted".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl LaneInput {
    pub fn new(direction: LaneDirection, vehicles: VehicleCounts) -> Self {
        Self {
            direction,
            vehicles,
            timestamp: None,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// A lane with no vehicles, used to fill directions a caller left out.
    pub fn empty(direction: LaneDirection, source: impl Into<String>) -> Self {
        Self::new(direction, VehicleCounts::default()).with_source(source)
    }
}

/// Density derived from one lane's counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneDensity {
    pub direction: LaneDirection,
    /// Weighted-equivalent vehicle units. Always >= 0.
    pub density_score: f64,
    pub vehicle_counts: VehicleCounts,
}
