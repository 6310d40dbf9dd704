// ============================================================================
// Numeric Module
// Value model and error types for arithmetic operations
// ============================================================================
//
// This module provides:
// - Value: tagged int/float numeric value with the standard promotion rule
// - CalcError: error types for arithmetic and dispatch operations
//
// Design principles:
// - Pure values, no shared state
// - Fallible operations return Result (no panics)
// - Host-platform numeric semantics (wrapping i64, IEEE 754 f64)

mod errors;
mod value;

pub use errors::{CalcError, CalcResult};
pub use value::Value;
