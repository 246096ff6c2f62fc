// ============================================================================
// Numeric Errors
// Error types for Q64.61 fixed-point operations
// ============================================================================

use std::fmt;

/// Errors that can occur during fixed-point operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Encoded or decoded magnitude exceeds the 64-bit integer budget
    OutOfRange,
    /// Arithmetic result exceeds the 64-bit integer budget
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Input lies outside the mathematical domain of the operation
    DomainError,
    /// Input string or value is invalid
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::OutOfRange => {
                write!(f, "out of range: magnitude exceeds 64 integer bits")
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum magnitude")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::DomainError => {
                write!(f, "domain error: argument outside the function's domain")
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
