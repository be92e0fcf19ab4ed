//! Bounded, arrival-ordered store of rendered entries.
//!
//! # Design
//! - Append at the back so iteration order is arrival order.
//! - Evict from the front once the cap is reached; a long-lived stream must
//!   not grow the page without bound.

use std::collections::VecDeque;

use crate::core::entry::LogEntry;

/// Default number of lines retained by the console.
pub const DEFAULT_MAX_LINES: usize = 600;

/// Arrival-ordered entries with a fixed cap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    max_lines: usize,
    received: u64,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINES)
    }
}

impl LogBuffer {
    /// Empty buffer keeping at most `max_lines` entries (never fewer than one).
    #[must_use]
    pub fn new(max_lines: usize) -> Self {
        let max_lines = max_lines.max(1);
        Self {
            entries: VecDeque::with_capacity(max_lines.min(DEFAULT_MAX_LINES)),
            max_lines,
            received: 0,
        }
    }

    /// Append an entry, returning how many old entries were evicted.
    pub fn push(&mut self, entry: LogEntry) -> usize {
        self.entries.push_back(entry);
        self.received = self.received.wrapping_add(1);
        let mut evicted = 0;
        while self.entries.len() > self.max_lines {
            self.entries.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Most recently appended entry.
    #[must_use]
    pub fn newest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been retained yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ever appended, including evicted ones.
    #[must_use]
    pub const fn received(&self) -> u64 {
        self.received
    }

    /// Retention cap.
    #[must_use]
    pub const fn max_lines(&self) -> usize {
        self.max_lines
    }
}
