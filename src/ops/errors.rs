// ============================================================================
// Algebra Errors
// Error types for operation dispatch and value construction
// ============================================================================

use super::operation::Operation;
use std::fmt;

/// Errors that can occur when dispatching operations or constructing values.
///
/// No operation is retried or recovered internally; every failure is
/// reported synchronously to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgebraError {
    /// The operation tag is not implemented by this number type
    UnsupportedOperation(Operation),
    /// Indexed or sequenced component access beyond the type's arity
    OutOfRange,
    /// Attempted construction of a strict scalar from an infinite or NaN value
    NonFiniteValue,
    /// Attempted mutation of a fixed-arity component view
    ReadOnlyComponents,
}

impl AlgebraError {
    /// Builds an unsupported-operation error, logging the rejected tag.
    #[cold]
    pub(crate) fn unsupported(operation: impl Into<Operation>) -> Self {
        let operation = operation.into();
        tracing::debug!(?operation, "operation not supported by number type");
        AlgebraError::UnsupportedOperation(operation)
    }
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraError::UnsupportedOperation(op) => {
                write!(f, "operation {:?} is not supported by this number type", op)
            },
            AlgebraError::OutOfRange => {
                write!(f, "component index out of range")
            },
            AlgebraError::NonFiniteValue => {
                write!(f, "value is not finite: strict real numbers reject infinities and NaN")
            },
            AlgebraError::ReadOnlyComponents => {
                write!(f, "component views of number values are read-only")
            },
        }
    }
}

impl std::error::Error for AlgebraError {}

/// Result type alias for algebra operations
pub type AlgebraResult<T> = Result<T, AlgebraError>;
