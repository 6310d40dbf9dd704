// ============================================================================
// Arithmetic Primitives
// The four pure binary operations
// ============================================================================

use crate::numeric::{CalcResult, Value};

/// Add two numbers.
///
/// Integer operands give an integer sum; any float operand gives a float.
///
/// # Example
/// ```
/// use calc_engine::prelude::*;
///
/// assert_eq!(add(2, 3), Value::Int(5));
/// assert_eq!(add(5, 2.5), Value::Float(7.5));
/// ```
#[inline]
pub fn add(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    a.into() + b.into()
}

/// Subtract the second number from the first.
#[inline]
pub fn subtract(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    a.into() - b.into()
}

/// Multiply two numbers.
#[inline]
pub fn multiply(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    a.into() * b.into()
}

/// Divide the first number by the second.
///
/// The quotient is always float-typed, even when both operands are integers
/// and evenly divisible: `divide(6, 3)` is `Float(2.0)`, not `Int(2)`.
///
/// # Errors
/// Returns `DivisionByZero` when `b` is numerically zero.
///
/// # Example
/// ```
/// use calc_engine::prelude::*;
///
/// assert_eq!(divide(6, 3).unwrap(), Value::Float(2.0));
/// assert_eq!(divide(5, 0).unwrap_err(), CalcError::DivisionByZero);
/// ```
#[inline]
pub fn divide(a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<Value> {
    a.into().checked_div(b.into())
}

// ============================================================================
// Tests
// ============================================================================
