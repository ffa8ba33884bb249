use crate::errors::TimingResult;
use crate::models::{LaneInput, SignalPhase};

/// Green-time recommendation for one intersection.
pub trait SignalTimer: Send + Sync {
    /// Compute the next phase from lanes in caller order.
    /// Fails with `TimingError::InvalidInput` when `lanes` is empty.
    fn compute(&self, lanes: &[LaneInput]) -> TimingResult<SignalPhase>;
}
