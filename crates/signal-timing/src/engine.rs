use signal_core::config::TimingConfig;
use signal_core::errors::TimingResult;
use signal_core::models::{LaneInput, SignalPhase};
use signal_core::traits::SignalTimer;

use crate::allocator::{self, PhaseTiming};

/// Stateless timing engine. Safe to share across concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct SignalTimingEngine {
    timing: PhaseTiming,
}

impl SignalTimingEngine {
    /// Create an engine with the compiled default durations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from (already validated) timing config.
    pub fn from_config(config: &TimingConfig) -> Self {
        Self {
            timing: PhaseTiming::from(config),
        }
    }

    pub fn timing(&self) -> &PhaseTiming {
        &self.timing
    }
}

impl SignalTimer for SignalTimingEngine {
    fn compute(&self, lanes: &[LaneInput]) -> TimingResult<SignalPhase> {
        allocator::allocate(lanes, &self.timing)
    }
}
