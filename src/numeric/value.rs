// ============================================================================
// Numeric Value
// Tagged int/float value with the standard promotion rule
// ============================================================================

use super::errors::{CalcError, CalcResult};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A transient numeric value: either an integer or a floating-point number.
///
/// Arithmetic follows the standard promotion rule:
/// - `Int ⊕ Int → Int` for addition, subtraction and multiplication
/// - any `Float` operand widens the other operand, giving a `Float` result
/// - division always produces a `Float`, even for evenly divisible integers
///
/// Integer arithmetic wraps on overflow (host i64 semantics, no detection);
/// float arithmetic is plain IEEE 754 f64 with no custom rounding.
///
/// # Example
/// ```
/// use calc_engine::numeric::Value;
///
/// let sum = Value::Int(2) + Value::Int(3);
/// assert_eq!(sum, Value::Int(5));
///
/// let quotient = Value::Int(6).checked_div(Value::Int(3)).unwrap();
/// assert_eq!(quotient, Value::Float(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    /// Integer zero
    pub const ZERO: Self = Value::Int(0);

    /// Integer one
    pub const ONE: Self = Value::Int(1);

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if the value is numerically zero.
    ///
    /// `Int(0)`, `Float(0.0)` and `Float(-0.0)` all count as zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Value::Int(i) => i == 0,
            Value::Float(f) => f == 0.0,
        }
    }

    /// Check if the value carries the integer variant.
    #[inline]
    pub const fn is_int(self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if the value carries the float variant.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Widen to f64, regardless of variant.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(i) => i as f64,
            Value::Float(f) => f,
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Division under the promotion rule: the result is always `Float`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `rhs` is numerically zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> CalcResult<Self> {
        if rhs.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        Ok(Value::Float(self.as_f64() / rhs.as_f64()))
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Add for Value {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_add(b)),
            (a, b) => Value::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Sub for Value {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_sub(b)),
            (a, b) => Value::Float(a.as_f64() - b.as_f64()),
        }
    }
}

impl Mul for Value {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_mul(b)),
            (a, b) => Value::Float(a.as_f64() * b.as_f64()),
        }
    }
}

impl Neg for Value {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        match self {
            Value::Int(i) => Value::Int(i.wrapping_neg()),
            Value::Float(f) => Value::Float(-f),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i64> for Value {
    #[inline]
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl Default for Value {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_arithmetic_stays_int() {
        assert_eq!(Value::Int(2) + Value::Int(3), Value::Int(5));
        assert_eq!(Value::Int(2) - Value::Int(3), Value::Int(-1));
        assert_eq!(Value::Int(2) * Value::Int(3), Value::Int(6));
    }

    #[test]
    fn test_float_operand_promotes() {
        assert_eq!(Value::Int(5) + Value::Float(2.5), Value::Float(7.5));
        assert_eq!(Value::Float(2.5) + Value::Int(5), Value::Float(7.5));
        assert_eq!(Value::Float(5.5) - Value::Float(2.5), Value::Float(3.0));
        assert_eq!(Value::Float(1.5) * Value::Int(2), Value::Float(3.0));
    }

    #[test]
    fn test_division_always_float() {
        let q = Value::Int(6).checked_div(Value::Int(3)).unwrap();
        assert!(q.is_float());
        assert_eq!(q, Value::Float(2.0));

        let q = Value::Int(7).checked_div(Value::Int(2)).unwrap();
        assert_eq!(q, Value::Float(3.5));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Value::Int(5).checked_div(Value::Int(0)),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Value::Int(5).checked_div(Value::Float(0.0)),
            Err(CalcError::DivisionByZero)
        );
        // Negative zero counts as zero
        assert_eq!(
            Value::Int(5).checked_div(Value::Float(-0.0)),
            Err(CalcError::DivisionByZero)
        );
        // Zero numerator does not help
        assert_eq!(
            Value::Int(0).checked_div(Value::Int(0)),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_is_zero() {
        assert!(Value::Int(0).is_zero());
        assert!(Value::Float(0.0).is_zero());
        assert!(Value::Float(-0.0).is_zero());
        assert!(!Value::Int(1).is_zero());
        assert!(!Value::Float(0.001).is_zero());
    }

    #[test]
    fn test_int_overflow_wraps() {
        assert_eq!(
            Value::Int(i64::MAX) + Value::Int(1),
            Value::Int(i64::MIN)
        );
        assert_eq!(
            Value::Int(i64::MIN) - Value::Int(1),
            Value::Int(i64::MAX)
        );
    }

    #[test]
    fn test_negation() {
        assert_eq!(-Value::Int(5), Value::Int(-5));
        assert_eq!(-Value::Float(2.5), Value::Float(-2.5));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(5i64), Value::Int(5));
        assert_eq!(Value::from(5i32), Value::Int(5));
        assert_eq!(Value::from(2.5f64), Value::Float(2.5));
        assert_eq!(Value::default(), Value::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Float(2.0).to_string(), "2");
    }

    #[test]
    fn test_variant_identity_is_observable() {
        // Int(2) and Float(2.0) are numerically equal but distinct values
        assert_ne!(Value::Int(2), Value::Float(2.0));
        assert_eq!(Value::Int(2).as_f64(), Value::Float(2.0).as_f64());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let int = Value::Int(42);
        let json = serde_json::to_string(&int).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&json).unwrap(), int);

        let float = Value::Float(2.5);
        let json = serde_json::to_string(&float).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&json).unwrap(), float);
    }
}
