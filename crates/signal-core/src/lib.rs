//! # signal-core
//!
//! Foundation crate for the signal timing workspace.
//! Defines the data model, traits, errors, config, tracing, and constants.
//! The engine and transport crates both depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SignalConfig;
pub use errors::{SignalErrorCode, TimingError, TimingResult};
pub use models::{
    LaneDensity, LaneDirection, LaneInput, SignalPhase, VehicleCategory, VehicleCounts,
};
pub use traits::SignalTimer;
