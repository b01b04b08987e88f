use std::collections::VecDeque;
use std::fmt::Write;

use serde::Serialize;

/// Number of searches remembered by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// A single completed route search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHistoryEntry {
    pub from: String,
    pub to: String,
}

/// Bounded record of recent searches. The oldest entry is evicted once the
/// capacity is exceeded.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    capacity: usize,
    entries: VecDeque<SearchHistoryEntry>,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl SearchHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record(&mut self, from: impl Into<String>, to: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(SearchHistoryEntry {
            from: from.into(),
            to: to.into(),
        });
    }

    /// Entries from the most recent search to the oldest.
    pub fn iter(&self) -> impl Iterator<Item = &SearchHistoryEntry> + '_ {
        self.entries.iter()
    }

    /// Render the history as shown after a route in the interactive session.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Search History (Last {} searches):",
            self.capacity
        );
        for entry in self.iter() {
            let _ = writeln!(buffer, "From: {} To: {}", entry.from, entry.to);
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixth_search_evicts_the_oldest() {
        let mut history = SearchHistory::default();
        for i in 1..=6 {
            history.record(format!("from_{i}"), format!("to_{i}"));
        }

        let froms: Vec<_> = history.iter().map(|entry| entry.from.as_str()).collect();
        assert_eq!(
            froms,
            vec!["from_6", "from_5", "from_4", "from_3", "from_2"]
        );
        assert_eq!(history.len(), 5);
    }

    #[test]
    fn zero_capacity_history_stays_empty() {
        let mut history = SearchHistory::with_capacity(0);
        history.record("a", "b");
        assert!(history.is_empty());
    }

    #[test]
    fn render_lists_most_recent_first() {
        let mut history = SearchHistory::default();
        history.record("main_gate", "library");
        history.record("library", "canteen");

        assert_eq!(
            history.render(),
            "Search History (Last 5 searches):\n\
             From: library To: canteen\n\
             From: main_gate To: library\n"
        );
    }
}
