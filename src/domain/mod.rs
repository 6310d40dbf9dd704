// ============================================================================
// Domain Models Module
// Contains the core domain value objects
// ============================================================================

pub mod operation;

pub use operation::Operation;
