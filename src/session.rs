//! Calculator session: the state a front end keeps between input events.
//!
//! A session owns the display buffer and the evaluation history, maps each
//! input event to exactly one command, and wipes a visible error marker
//! before new input is applied.

use serde::Serialize;
use tracing::debug;

use crate::calculator::{self, History, RecordPolicy, is_operator, shows_marker};
use crate::config::Settings;

/// An input event, from the keyboard or from a labeled button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A digit, operator or `.`; anything else is ignored by the engine.
    Char(char),
    /// Backspace or the delete button.
    Delete,
    /// Enter or the `=` button.
    Evaluate,
    /// The `C` button.
    Clear,
    /// The `CE` button.
    ClearEntry,
    /// The `√` button.
    SquareRoot,
    /// The `log` button.
    Log,
}

impl Key {
    /// Map a button label to a key.
    ///
    /// Any single character that is not a named button is routed as a
    /// character. Returns `None` for unknown multi-character labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "=" => Some(Self::Evaluate),
            "C" => Some(Self::Clear),
            "CE" => Some(Self::ClearEntry),
            "⌫" => Some(Self::Delete),
            "√" | "sqrt" => Some(Self::SquareRoot),
            "log" => Some(Self::Log),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Self::Char(c)),
                    _ => None,
                }
            }
        }
    }

    /// Map typed keyboard text to a key.
    ///
    /// Only digits, operators, backspace and enter are accepted from the
    /// keyboard.
    pub fn from_keyboard(c: char) -> Option<Self> {
        match c {
            '\u{8}' => Some(Self::Delete),
            '\r' => Some(Self::Evaluate),
            c if c.is_ascii_digit() || is_operator(c) => Some(Self::Char(c)),
            _ => None,
        }
    }
}

/// Serializable view of a session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// What the display shows.
    pub display: String,
    /// Left operands available to clear-entry, oldest first.
    pub history: History,
    /// Whether the display shows an error marker.
    pub is_error: bool,
}

#[derive(Clone, Debug)]
pub struct Session {
    buffer: String,
    history: History,
    clear_markers: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            buffer: String::new(),
            history: History::new(),
            clear_markers: true,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: &Settings) -> Self {
        let policy = if settings.record_failed_evaluations {
            RecordPolicy::Always
        } else {
            RecordPolicy::SuccessOnly
        };

        Self {
            buffer: String::new(),
            history: History::with_policy(policy),
            clear_markers: settings.clear_markers_on_input,
        }
    }

    pub fn display(&self) -> &str {
        &self.buffer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Apply one input event.
    ///
    /// The function keys (`√`, `log`) act on a visible marker instead of
    /// clearing it, so the display stays `Error`.
    pub fn press(&mut self, key: Key) {
        let is_function = matches!(key, Key::SquareRoot | Key::Log);
        if self.clear_markers && !is_function && shows_marker(&self.buffer) {
            debug!(display = %self.buffer, "clearing error marker");
            calculator::clear_output(&mut self.buffer);
        }

        match key {
            Key::Char(c) => calculator::apply_character(&mut self.buffer, &mut self.history, c),
            Key::Delete => calculator::delete_last(&mut self.buffer),
            Key::Evaluate => calculator::evaluate(&mut self.buffer, &mut self.history),
            Key::Clear => calculator::clear_output(&mut self.buffer),
            Key::ClearEntry => calculator::clear_entry(&mut self.buffer, &mut self.history),
            Key::SquareRoot => self.apply_function(calculator::square_root),
            Key::Log => self.apply_function(calculator::log10),
        }

        debug!(?key, display = %self.buffer, "key applied");
    }

    /// Evaluate, then apply a function to the result. A marker is passed
    /// through without evaluating, so its text never lands in the history.
    fn apply_function(&mut self, function: fn(&mut String)) {
        if self.buffer.is_empty() {
            return;
        }
        if !shows_marker(&self.buffer) {
            calculator::evaluate(&mut self.buffer, &mut self.history);
        }
        function(&mut self.buffer);
    }

    /// Apply typed keyboard text, one character at a time. Characters the
    /// keyboard does not accept are skipped.
    pub fn type_text(&mut self, text: &str) {
        for key in text.chars().filter_map(Key::from_keyboard) {
            self.press(key);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.buffer.clone(),
            history: self.history.clone(),
            is_error: shows_marker(&self.buffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Key::from_label("="), Some(Key::Evaluate));
        assert_eq!(Key::from_label("C"), Some(Key::Clear));
        assert_eq!(Key::from_label("CE"), Some(Key::ClearEntry));
        assert_eq!(Key::from_label("⌫"), Some(Key::Delete));
        assert_eq!(Key::from_label("√"), Some(Key::SquareRoot));
        assert_eq!(Key::from_label("log"), Some(Key::Log));
        assert_eq!(Key::from_label("7"), Some(Key::Char('7')));
        assert_eq!(Key::from_label("."), Some(Key::Char('.')));
        assert_eq!(Key::from_label("sin"), None);
        assert_eq!(Key::from_label(""), None);
    }

    #[test]
    fn test_keyboard_filter() {
        assert_eq!(Key::from_keyboard('5'), Some(Key::Char('5')));
        assert_eq!(Key::from_keyboard('/'), Some(Key::Char('/')));
        assert_eq!(Key::from_keyboard('\u{8}'), Some(Key::Delete));
        assert_eq!(Key::from_keyboard('\r'), Some(Key::Evaluate));
        assert_eq!(Key::from_keyboard('.'), None);
        assert_eq!(Key::from_keyboard('a'), None);
    }

    #[test]
    fn test_typing_and_enter() {
        let mut session = Session::new();
        session.type_text("12+30\r");
        assert_eq!(session.display(), "42");
        assert_eq!(session.history().last(), Some("12"));
    }

    #[test]
    fn test_marker_cleared_before_next_key() {
        let mut session = Session::new();
        session.type_text("2+\r");
        assert_eq!(session.display(), "Error");

        session.press(Key::Char('7'));
        assert_eq!(session.display(), "7");
    }

    #[test]
    fn test_invalid_input_cleared_before_next_key() {
        let mut session = Session::new();
        session.type_text("0");
        session.press(Key::Log);
        assert_eq!(session.display(), "Invalid Input");

        session.press(Key::Char('7'));
        assert_eq!(session.display(), "7");
    }

    #[test]
    fn test_function_keys_keep_marker() {
        let mut session = Session::new();
        session.type_text("8/0\r");
        session.press(Key::SquareRoot);
        assert_eq!(session.display(), "Error");

        session.press(Key::Log);
        assert_eq!(session.display(), "Error");
        assert_eq!(session.history().entries(), ["8".to_string()]);
    }

    #[test]
    fn test_marker_kept_when_disabled() {
        let settings = Settings {
            clear_markers_on_input: false,
            ..Settings::default()
        };
        let mut session = Session::with_settings(&settings);
        session.type_text("2+\r7");
        assert_eq!(session.display(), "Error7");
    }

    #[test]
    fn test_clear_entry_after_error() {
        let mut session = Session::new();
        session.type_text("2+\r");
        session.press(Key::ClearEntry);
        assert_eq!(session.display(), "2");
    }

    #[test]
    fn test_failed_evaluations_not_recorded() {
        let settings = Settings {
            record_failed_evaluations: false,
            ..Settings::default()
        };
        let mut session = Session::with_settings(&settings);
        session.type_text("2+\r");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_functions_evaluate_first() {
        let mut session = Session::new();
        session.type_text("9*4");
        session.press(Key::SquareRoot);
        assert_eq!(session.display(), "6");

        session.press(Key::Clear);
        session.type_text("2-6");
        session.press(Key::SquareRoot);
        assert_eq!(session.display(), "Invalid Input");
    }

    #[test]
    fn test_functions_on_empty_display_do_nothing() {
        let mut session = Session::new();
        session.press(Key::SquareRoot);
        session.press(Key::Log);
        assert_eq!(session.display(), "");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_snapshot() {
        let mut session = Session::new();
        session.type_text("2+3+");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.display, "5+");
        assert!(!snapshot.is_error);
        assert_eq!(
            serde_json::to_string(&snapshot).unwrap(),
            r#"{"display":"5+","history":["2"],"is_error":false}"#
        );
    }
}
