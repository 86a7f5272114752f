//! Error types for Stylegate
//!
//! Centralized error handling using thiserror.
//!
//! Individual checker-process failures are not errors: they are recorded
//! as outcomes and aggregated into the verdict. Errors here cover batch
//! aborts and internal faults only.

use thiserror::Error;

/// All error types that can occur in Stylegate
#[derive(Debug, Error)]
pub enum GateError {
    /// The batch was cancelled before every invocation completed
    #[error("Batch cancelled before completion")]
    Cancelled,

    /// The batch exceeded its wall-clock timeout
    #[error("Batch timed out after {secs}s")]
    TimedOut {
        /// Configured timeout in seconds
        secs: u64,
    },

    /// Internal scheduling fault (worker panic, lost outcome slot)
    #[error("Runner error: {0}")]
    Runner(String),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GateError {
    /// True for batch aborts that must not be reported as a verdict.
    pub fn is_abort(&self) -> bool {
        matches!(self, GateError::Cancelled | GateError::TimedOut { .. })
    }
}

/// Result type alias for Stylegate operations
pub type Result<T> = std::result::Result<T, GateError>;
