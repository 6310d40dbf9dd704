// ============================================================================
// Engine Module
// Arithmetic primitives and the operation dispatcher
// ============================================================================

mod dispatcher;
mod primitives;

pub use dispatcher::calculate;
pub use primitives::{add, divide, multiply, subtract};
