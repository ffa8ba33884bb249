//! Error handling for the signal timing workspace.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod timing_error;

pub use config_error::ConfigError;
pub use error_code::SignalErrorCode;
pub use timing_error::{TimingError, TimingResult};
