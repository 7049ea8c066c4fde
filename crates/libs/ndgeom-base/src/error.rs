//! Error type for ndgeom.

use crate::constraint::ConstraintViolation;

/// Errors raised by operations on points and vectors.
#[derive(Debug, thiserror::Error)]
pub enum GeomError {
    /// A constraint rejected the coordinates; passed through untouched.
    #[error(transparent)]
    ConstraintViolation(#[from] ConstraintViolation),

    /// The operation is not defined between the given operands.
    #[error("Invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// The operation is not available on the given operand kind.
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    /// The operand has the wrong kind.
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Kind the operation accepts.
        expected: &'static str,
        /// Kind that was given.
        actual: &'static str,
    },

    /// Both operands must have exactly the same dimension.
    #[error("Dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Dimension of the left operand.
        left: usize,
        /// Dimension of the right operand.
        right: usize,
    },

    /// The null vector has no direction to compare.
    #[error("Null vector can't be compared for {0}")]
    ZeroVector(&'static str),

    /// A parameter is outside of its domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for ndgeom operations.
pub type Result<T> = std::result::Result<T, GeomError>;

impl GeomError {
    /// Returns true if the error was raised by a constraint.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, GeomError::ConstraintViolation(_))
    }
}
