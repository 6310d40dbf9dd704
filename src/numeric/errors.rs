// ============================================================================
// Calculation Errors
// Error types for arithmetic and dispatch operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during calculation.
///
/// Errors are never caught or recovered inside this crate; they propagate
/// directly to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Attempted division with a zero divisor (integer 0 or float 0.0)
    DivisionByZero,
    /// Operation token is not in the recognized set.
    ///
    /// The token is preserved verbatim; lookup is case-sensitive, so
    /// `"Add"` is as unknown as `"power"`.
    UnknownOperation { token: String },
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "Cannot divide by zero"),
            CalcError::UnknownOperation { token } => {
                let valid = crate::domain::Operation::ALL.map(|op| op.token());
                write!(
                    f,
                    "Unknown operation: {}. Valid operations are: {}",
                    token,
                    valid.join(", ")
                )
            },
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for calculation operations
pub type CalcResult<T> = Result<T, CalcError>;
