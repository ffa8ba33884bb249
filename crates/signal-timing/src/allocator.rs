use signal_core::config::TimingConfig;
use signal_core::constants;
use signal_core::errors::{TimingError, TimingResult};
use signal_core::models::{LaneDensity, LaneInput, SignalPhase};

use crate::density;

/// Resolved phase durations the allocator works with (seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTiming {
    pub min_green: f64,
    pub max_green: f64,
    pub yellow: f64,
    pub all_red: f64,
}

impl PhaseTiming {
    /// Seconds between the shortest and longest green.
    pub fn available_range(&self) -> f64 {
        self.max_green - self.min_green
    }
}

impl Default for PhaseTiming {
    fn default() -> Self {
        Self {
            min_green: constants::MIN_GREEN_SECS,
            max_green: constants::MAX_GREEN_SECS,
            yellow: constants::YELLOW_SECS,
            all_red: constants::ALL_RED_SECS,
        }
    }
}

impl From<&TimingConfig> for PhaseTiming {
    fn from(config: &TimingConfig) -> Self {
        Self {
            min_green: config.effective_min_green(),
            max_green: config.effective_max_green(),
            yellow: config.effective_yellow(),
            all_red: config.effective_all_red(),
        }
    }
}

/// Compute the next phase with the compiled default durations.
pub fn compute_signal_timing(lanes: &[LaneInput]) -> TimingResult<SignalPhase> {
    allocate(lanes, &PhaseTiming::default())
}

/// Pick the densest lane and give it a green proportional to its share.
///
/// ```text
/// share = priority / total          (0.25 when total == 0)
/// green = min + (max − min) × share,  clamped to [min, max], 1 decimal
/// ```
///
/// Ties go to the earliest lane in input order.
pub fn allocate(lanes: &[LaneInput], timing: &PhaseTiming) -> TimingResult<SignalPhase> {
    if lanes.is_empty() {
        return Err(TimingError::InvalidInput {
            reason: "no lane data provided".to_string(),
        });
    }

    let densities: Vec<LaneDensity> = lanes.iter().map(density::lane_density).collect();

    let mut priority = &densities[0];
    for candidate in &densities[1..] {
        // Strict comparison keeps the first lane on ties.
        if candidate.density_score > priority.density_score {
            priority = candidate;
        }
    }

    let total_density: f64 = densities.iter().map(|d| d.density_score).sum();
    let priority_share = if total_density > 0.0 {
        priority.density_score / total_density
    } else {
        constants::ZERO_DENSITY_SHARE
    };

    let green = timing.min_green + timing.available_range() * priority_share;
    let green = green.max(timing.min_green).min(timing.max_green);

    let reasoning = format!(
        "Lane {} has highest density ({:.1} weighted units, {:.0}% of total). \
         Allocated {:.0}s green (range: {}-{}s).",
        priority.direction,
        priority.density_score,
        priority_share * 100.0,
        green,
        timing.min_green,
        timing.max_green,
    );

    tracing::debug!(
        lanes = densities.len(),
        priority = %priority.direction,
        total_density,
        priority_share,
        green,
        "allocated green time"
    );

    Ok(SignalPhase {
        priority_lane: priority.direction,
        green_duration_seconds: round_tenths(green),
        yellow_duration_seconds: timing.yellow,
        all_red_duration_seconds: timing.all_red,
        density_scores: densities,
        reasoning,
    })
}

/// Round to one decimal, ties to even on the exact binary value.
fn round_tenths(value: f64) -> f64 {
    let scaled = value * 10.0;
    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 {
        // Residual of the product tells a real tie from one produced by rounding.
        let residual = value.mul_add(10.0, -scaled);
        if residual > 0.0 {
            scaled.ceil()
        } else if residual < 0.0 {
            scaled.floor()
        } else {
            scaled.round_ties_even()
        }
    } else {
        scaled.round()
    };
    rounded / 10.0
}
