//! Left-operand history backing the clear-entry command.

use serde::Serialize;

/// Which committed evaluations leave their left operand behind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordPolicy {
    /// Every committed evaluation, including ones that ended in `Error`.
    #[default]
    Always,
    /// Only evaluations that produced a number.
    SuccessOnly,
}

/// Stack of left operands captured by committed evaluations.
///
/// Entries are never empty; `push` drops empty candidates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<String>,
    #[serde(skip)]
    policy: RecordPolicy,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RecordPolicy) -> Self {
        Self {
            entries: Vec::new(),
            policy,
        }
    }

    /// Whether an evaluation with the given success should be recorded.
    pub fn records(&self, succeeded: bool) -> bool {
        succeeded || self.policy == RecordPolicy::Always
    }

    /// Record a left operand. Empty operands (an expression starting with a
    /// sign) are not recorded.
    pub fn push(&mut self, operand: impl Into<String>) {
        let operand = operand.into();
        if operand.is_empty() {
            return;
        }
        self.entries.push(operand);
    }

    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop()
    }

    /// The most recently recorded operand.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl<S: Into<String>> FromIterator<S> for History {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut history = Self::new();
        for entry in iter {
            history.push(entry);
        }
        history
    }
}
