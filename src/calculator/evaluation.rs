//! Expression evaluation.
//!
//! Reduces the display buffer strictly left to right in double precision.
//! Evaluation is split in two phases: [`Evaluation::prepare`] computes the
//! outcome without touching any state, and [`Evaluation::commit`] records the
//! left operand in the history and writes the result back to the buffer.

use tracing::debug;

use super::detection::{Operator, Token, is_operator, tokenize};
use super::error::{ERROR_MARKER, EvalError};
use super::history::History;

/// Result of evaluating a buffer.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The buffer reduced to a finite number.
    Value(f64),
    /// The buffer could not be reduced.
    Failed(EvalError),
    /// Nothing to evaluate; the buffer is left as it is.
    Unchanged,
}

/// A prepared, not yet committed evaluation of a buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    left_operand: String,
    outcome: Outcome,
}

impl Evaluation {
    /// Compute the outcome for a buffer. Has no side effects.
    pub fn prepare(buffer: &str) -> Self {
        let left_operand = buffer
            .split(is_operator)
            .next()
            .unwrap_or_default()
            .to_string();

        let outcome = if buffer.is_empty() {
            Outcome::Unchanged
        } else {
            match reduce(buffer) {
                Ok(value) => Outcome::Value(value),
                Err(e) => Outcome::Failed(e),
            }
        };

        Self {
            left_operand,
            outcome,
        }
    }

    /// The first operand of the buffer, as it will be recorded in history.
    pub fn left_operand(&self) -> &str {
        &self.left_operand
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Check if this evaluation produced a number.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Value(_))
    }

    /// The text the buffer will show after commit, or `None` if the buffer
    /// stays as it is.
    pub fn display(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Value(value) => Some(format_number(*value)),
            Outcome::Failed(_) => Some(ERROR_MARKER.to_string()),
            Outcome::Unchanged => None,
        }
    }

    /// Record the left operand and write the outcome to the buffer.
    pub fn commit(self, buffer: &mut String, history: &mut History) {
        if let Outcome::Failed(e) = &self.outcome {
            debug!(expression = %buffer, error = %e, "evaluation failed");
        }

        if history.records(self.is_success()) {
            history.push(self.left_operand.as_str());
        }

        if let Some(shown) = self.display() {
            debug!(expression = %buffer, result = %shown, "evaluated");
            *buffer = shown;
        }
    }
}

/// Reduce an expression left to right, one operator pair at a time.
///
/// A leading `-` is read as the sign of the first operand. There is no
/// operator precedence: `2+3*4` is `20`.
pub fn reduce(expression: &str) -> Result<f64, EvalError> {
    let mut tokens = tokenize(expression).into_iter();

    let mut first = tokens.next();
    let negative = matches!(first, Some(Token::Operator(Operator::Subtract)));
    if negative {
        first = tokens.next();
    }

    let mut acc = match first {
        Some(Token::Number(run)) => parse_number(run)?,
        Some(Token::Operator(op)) => return Err(EvalError::EmptyOperand(op.symbol())),
        None if negative => return Err(EvalError::TrailingOperator('-')),
        None => return Err(EvalError::InvalidNumber(String::new())),
    };
    if negative {
        acc = -acc;
    }

    while let Some(token) = tokens.next() {
        let op = match token {
            Token::Operator(op) => op,
            // tokenize never yields two numbers in a row
            Token::Number(run) => return Err(EvalError::InvalidNumber(run.to_string())),
        };

        let rhs = match tokens.next() {
            Some(Token::Number(run)) => parse_number(run)?,
            Some(Token::Operator(next)) => return Err(EvalError::EmptyOperand(next.symbol())),
            None => return Err(EvalError::TrailingOperator(op.symbol())),
        };

        acc = op.apply(acc, rhs);
    }

    if !acc.is_finite() {
        return Err(EvalError::NonFinite);
    }

    Ok(acc)
}

/// Parse a numeric run. Only digits and decimal points are accepted, so
/// text such as `inf`, `NaN` or `1e5` is rejected.
pub fn parse_number(run: &str) -> Result<f64, EvalError> {
    let well_formed = run.chars().any(|c| c.is_ascii_digit())
        && run.chars().all(|c| c.is_ascii_digit() || c == '.');

    if !well_formed {
        return Err(EvalError::InvalidNumber(run.to_string()));
    }

    run.parse::<f64>()
        .map_err(|_| EvalError::InvalidNumber(run.to_string()))
}

/// Format a number the way the display shows it: the shortest text that
/// reads back to the same value, with no exponent and no negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
