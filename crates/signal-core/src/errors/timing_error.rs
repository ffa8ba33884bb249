use super::error_code::{self, SignalErrorCode};

/// Errors raised by the timing engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimingError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl SignalErrorCode for TimingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
        }
    }
}

pub type TimingResult<T> = Result<T, TimingError>;
