// ============================================================================
// Operation Domain Model
// Closed enumeration of the recognized arithmetic operations
// ============================================================================

use crate::numeric::{CalcError, CalcResult, Value};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four recognized arithmetic operations.
///
/// A closed enumeration rather than a runtime string-keyed map: the match in
/// [`Operation::apply`] is exhaustive, so adding a variant without wiring it
/// up is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in their fixed order.
    ///
    /// This order is a contract: the `UnknownOperation` error message
    /// enumerates valid tokens in exactly this order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The string token identifying this operation.
    #[inline]
    pub const fn token(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Apply this operation to two values.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for `Divide` with a zero divisor; the other
    /// three operations are total.
    #[inline]
    pub fn apply(self, a: Value, b: Value) -> CalcResult<Value> {
        match self {
            Operation::Add => Ok(a + b),
            Operation::Subtract => Ok(a - b),
            Operation::Multiply => Ok(a * b),
            Operation::Divide => a.checked_div(b),
        }
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// Parse an operation token.
    ///
    /// Matching is exact and case-sensitive; `"Add"`, `""` and `"power"`
    /// all fail with `UnknownOperation`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            _ => Err(CalcError::UnknownOperation {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
