/// Error types for the date range library
use thiserror::Error;

/// Main error type for date range operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The day step was zero or negative
    #[error("Invalid argument: step must be positive, got {step}")]
    InvalidArgument { step: i64 },
}

/// Type alias for Results using RangeError
pub type Result<T> = std::result::Result<T, RangeError>;
