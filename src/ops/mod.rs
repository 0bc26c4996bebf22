// ============================================================================
// Operations Module
// Operation vocabulary and error types for number dispatch
// ============================================================================
//
// This module provides:
// - Constant: named constants every number type can materialize
// - UnaryOp / BinaryOp / ComponentOp: closed operation enumerations
// - AlgebraError: error types for dispatch failures
//
// Design principles:
// - Operation tags are pure data; they never carry state
// - All dispatch failures are typed errors, never panics or silent no-ops

mod errors;
mod operation;

pub use errors::{AlgebraError, AlgebraResult};
pub use operation::{BinaryOp, ComponentOp, Constant, Operation, UnaryOp};
