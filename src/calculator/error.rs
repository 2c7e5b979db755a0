//! Failure reasons for expression evaluation.
//!
//! None of these leave the command set: every command collapses them into
//! one of the two display markers.

use thiserror::Error;

/// Marker shown when an expression cannot be parsed or reduced.
pub const ERROR_MARKER: &str = "Error";

/// Marker shown when sqrt/log get an argument outside their domain.
pub const INVALID_INPUT_MARKER: &str = "Invalid Input";

/// Why an expression failed to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Two operators in a row, or an operator with nothing before it.
    #[error("operator '{0}' has no operand before it")]
    EmptyOperand(char),

    /// The expression ends with an operator.
    #[error("expression ends with operator '{0}'")]
    TrailingOperator(char),

    /// A numeric run or character that is not a number.
    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    /// Division by zero or overflow.
    #[error("result is not a finite number")]
    NonFinite,
}

/// Returns true if the buffer shows an error marker anywhere, including a
/// marker with an operator typed after it (`Error+`).
pub fn shows_marker(buffer: &str) -> bool {
    buffer.contains(ERROR_MARKER) || buffer.contains(INVALID_INPUT_MARKER)
}
