//! Incremental calculator engine.
//!
//! This module provides functionality to:
//! - Tokenize the display buffer and detect completed sub-expressions
//! - Evaluate expressions left to right in two phases (prepare, commit)
//! - Apply the command set (append, delete, evaluate, clear, clear entry,
//!   square root, log) to a display buffer and its history
//! - Copy results to the clipboard

mod clipboard;
mod commands;
mod detection;
mod error;
mod evaluation;
mod history;

pub use clipboard::copy_to_clipboard;
pub use commands::{
    apply_character, clear_entry, clear_output, delete_last, evaluate, log10, square_root,
};
pub use detection::{Operator, Token, is_operator, should_reduce, tokenize};
pub use error::{ERROR_MARKER, EvalError, INVALID_INPUT_MARKER, shows_marker};
pub use evaluation::{Evaluation, Outcome, format_number, reduce};
pub use history::{History, RecordPolicy};
