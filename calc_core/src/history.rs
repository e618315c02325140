//! # Calculation History
//!
//! Successful evaluations are recorded as `(expression, result)` pairs of
//! display strings. The list is bounded: once full, recording a new entry
//! drops the oldest one. Entries are stored oldest first; front-ends that
//! show the most recent first use [`History::iter_recent`].

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Default number of entries kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// A single evaluated expression and its formatted result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Display text before evaluation
    pub expression: String,
    /// Display text after evaluation
    pub result: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        HistoryEntry {
            expression: expression.into(),
            result: result.into(),
        }
    }

    /// `expression = result`
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Bounded, insertion-ordered list of history entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        History::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// History holding at most `capacity` entries (minimum one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        History {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, dropping the oldest when full
    pub fn push(&mut self, entry: HistoryEntry) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Record an evaluation
    pub fn record(&mut self, expression: impl Into<String>, result: impl Into<String>) {
        self.push(HistoryEntry::new(expression, result));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entries most recent first
    pub fn iter_recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Entry by position in the most-recent-first view
    pub fn recent(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.iter().rev().nth(index)
    }

    /// The latest entry
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }
}
