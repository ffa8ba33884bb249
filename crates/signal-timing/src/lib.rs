//! # signal-timing
//!
//! Green-time allocation for a single intersection.
//! A lane's vehicle counts become a weighted density score; the densest lane
//! gets priority and a green duration proportional to its share of the
//! total, bounded by the configured range.

pub mod allocator;
pub mod density;
pub mod engine;

pub use allocator::{compute_signal_timing, PhaseTiming};
pub use density::{density_score, lane_density, VEHICLE_WEIGHTS};
pub use engine::SignalTimingEngine;
