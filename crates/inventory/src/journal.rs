//! Per-run journal of stock additions.
//!
//! The journal is owned by the caller and passed to each operation. It is not
//! persisted.

use chrono::{DateTime, Utc};

use stockroom_events::Event;

/// A timestamped journal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.at, self.message)
    }
}

/// Ordered, append-only list of [`LogEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<LogEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, at: DateTime<Utc>, message: impl Into<String>) -> &LogEntry {
        self.entries.push(LogEntry {
            at,
            message: message.into(),
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Record `message` at the time `event` occurred.
    pub fn record_event<E: Event>(&mut self, event: &E, message: impl Into<String>) -> &LogEntry {
        self.record(event.occurred_at(), message)
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Journal {
    type Item = &'a LogEntry;
    type IntoIter = core::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
