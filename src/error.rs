use thiserror::Error;

/// Failure outcomes of building a balloon or running an ascent.
///
/// Each kind maps to its own process exit status so callers can tell a bad
/// argument from a numerical blow-up without parsing the message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("balloon construction failed: {0}")]
    ConstructionFailure(String),

    #[error("integration failed at t={time:.1} s: {reason}")]
    IntegrationFailure { time: f64, reason: String },
}

impl SimError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        SimError::InvalidInput(msg.into())
    }

    /// Process exit status: 1 input, 2 construction, 3 integration.
    pub fn exit_code(&self) -> u8 {
        match self {
            SimError::InvalidInput(_) => 1,
            SimError::ConstructionFailure(_) => 2,
            SimError::IntegrationFailure { .. } => 3,
        }
    }
}

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64, SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::invalid(format!("{name} must be positive, got {value}")))
    }
}

/// Reject anything that is not a finite, non-negative number.
pub(crate) fn require_non_negative(name: &str, value: f64) -> Result<f64, SimError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SimError::invalid(format!("{name} must be non-negative, got {value}")))
    }
}
