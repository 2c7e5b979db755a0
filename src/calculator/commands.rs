//! The calculator's command set.
//!
//! Each command rewrites the display buffer in place. Failures never
//! propagate: they show up as `"Error"` or `"Invalid Input"` in the buffer.

use tracing::debug;

use super::detection::{current_run, is_operator, should_reduce};
use super::error::{ERROR_MARKER, INVALID_INPUT_MARKER};
use super::evaluation::{Evaluation, format_number};
use super::history::History;

/// Append a typed character to the buffer.
///
/// Rules, in order:
/// 1. `.` is accepted only after a digit, and only if the current numeric
///    run has no decimal point yet.
/// 2. An operator typed right after another operator replaces it (when the
///    buffer is longer than one character).
/// 3. Any other digit or operator is appended.
///
/// After an append, if the buffer now holds `a op b op`, the pending
/// `a op b` is evaluated first and the new operator is put back after the
/// result, so `2+3+` becomes `5+`. Characters that are neither digits,
/// operators nor `.` are ignored.
pub fn apply_character(buffer: &mut String, history: &mut History, ch: char) {
    if ch == '.' {
        let after_digit = buffer.chars().last().is_some_and(|c| c.is_ascii_digit());
        if !after_digit || current_run(buffer).contains('.') {
            debug!(buffer = %buffer, "decimal point rejected");
            return;
        }
    } else if is_operator(ch) {
        let last_is_operator = buffer.chars().last().is_some_and(is_operator);
        if buffer.chars().count() > 1 && last_is_operator {
            buffer.pop();
            buffer.push(ch);
            return;
        }
    } else if !ch.is_ascii_digit() {
        debug!(?ch, "ignoring character");
        return;
    }

    buffer.push(ch);

    if should_reduce(buffer) {
        buffer.pop();
        evaluate(buffer, history);
        buffer.push(ch);
    }
}

/// Remove the last character, if any.
pub fn delete_last(buffer: &mut String) {
    buffer.pop();
}

/// Evaluate the whole buffer, recording its left operand in `history`.
pub fn evaluate(buffer: &mut String, history: &mut History) {
    Evaluation::prepare(buffer).commit(buffer, history);
}

/// Restore the left operand of the most recent evaluation.
pub fn clear_entry(buffer: &mut String, history: &mut History) {
    if history.last().is_some_and(|entry| !entry.is_empty())
        && let Some(entry) = history.pop()
    {
        *buffer = entry;
    }
}

/// Empty the buffer.
pub fn clear_output(buffer: &mut String) {
    buffer.clear();
}

/// Replace the buffer with its square root.
pub fn square_root(buffer: &mut String) {
    apply_function(buffer, |value| (value >= 0.0).then(|| value.sqrt()));
}

/// Replace the buffer with its base-10 logarithm.
pub fn log10(buffer: &mut String) {
    apply_function(buffer, |value| (value > 0.0).then(|| value.log10()));
}

/// Parse the buffer as a number and apply `f`. `None` from `f` means the
/// argument is outside the function's domain.
fn apply_function(buffer: &mut String, f: impl Fn(f64) -> Option<f64>) {
    let Some(value) = buffer.parse::<f64>().ok().filter(|v| v.is_finite()) else {
        debug!(buffer = %buffer, "not a number");
        *buffer = ERROR_MARKER.to_string();
        return;
    };

    *buffer = match f(value) {
        Some(result) if result.is_finite() => format_number(result),
        Some(_) => ERROR_MARKER.to_string(),
        None => INVALID_INPUT_MARKER.to_string(),
    };
}
