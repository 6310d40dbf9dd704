// ============================================================================
// Operation Dispatcher
// Maps an operation token to its primitive and invokes it
// ============================================================================

use crate::domain::Operation;
use crate::numeric::{CalcResult, Value};

/// Perform a calculation selected by operation token.
///
/// The token must be exactly one of `"add"`, `"subtract"`, `"multiply"`,
/// `"divide"` (case-sensitive). The primitive's result is returned
/// unchanged, including a propagated `DivisionByZero` from divide.
///
/// Stateless: repeated calls with the same arguments always return the same
/// result, in any interleaving with other operations.
///
/// # Errors
/// - `UnknownOperation` if the token is not recognized; the error message
///   enumerates the valid tokens in order.
/// - `DivisionByZero` for `"divide"` with a zero divisor.
///
/// # Example
/// ```
/// use calc_engine::prelude::*;
///
/// assert_eq!(calculate("add", 2, 3).unwrap(), Value::Int(5));
/// assert_eq!(calculate("divide", 6, 3).unwrap(), Value::Float(2.0));
/// assert!(calculate("power", 2, 3).is_err());
/// ```
pub fn calculate(operation: &str, a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<Value> {
    let op: Operation = operation.parse()?;
    tracing::trace!(operation = op.token(), "dispatching calculation");
    op.apply(a.into(), b.into())
}

// ============================================================================
// Tests
// ============================================================================
