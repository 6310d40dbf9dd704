// ============================================================================
// Calc Engine Library
// Minimal arithmetic dispatch with a closed operation set and typed errors
// ============================================================================

//! # Calc Engine
//!
//! A minimal arithmetic dispatch library: four pure binary operations
//! (addition, subtraction, multiplication, division) and a single dispatcher
//! that selects one by name.
//!
//! ## Features
//!
//! - **Closed operation set** dispatched by exhaustive match, not a runtime
//!   string-keyed map
//! - **Int/float promotion**: integer operands stay integral for add,
//!   subtract and multiply; division always yields a float
//! - **Typed errors** for division by zero and unknown operation tokens
//! - **Stateless and pure**: safe to call from any number of threads
//!
//! ## Example
//!
//! ```rust
//! use calc_engine::prelude::*;
//!
//! // Direct primitive calls
//! assert_eq!(add(2, 3), Value::Int(5));
//! assert_eq!(divide(6, 3).unwrap(), Value::Float(2.0));
//!
//! // Dispatch by operation token
//! assert_eq!(calculate("multiply", -5, -3).unwrap(), Value::Int(15));
//!
//! // Unknown tokens are rejected with the valid set in the message
//! let err = calculate("power", 2, 3).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Unknown operation: power. Valid operations are: add, subtract, multiply, divide"
//! );
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::Operation;
    pub use crate::engine::{add, calculate, divide, multiply, subtract};
    pub use crate::numeric::{CalcError, CalcResult, Value};
}
