//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgebraError {
    /// Error that occurs when a polynomial is constructed from an empty coefficient sequence.
    #[error("A polynomial requires at least one coefficient, the constant term.")]
    EmptyCoefficients,
    /// Error that occurs when the divisor of a polynomial division is the zero polynomial.
    #[error("Division by the zero polynomial is undefined.")]
    ZeroDivisor,
}
