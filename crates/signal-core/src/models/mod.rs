//! Request-scoped value types shared by the engine and the transport.

pub mod lane;
pub mod signal_phase;
pub mod vehicle;

pub use lane::{LaneDensity, LaneDirection, LaneInput};
pub use signal_phase::SignalPhase;
pub use vehicle::{VehicleCategory, VehicleCounts};
