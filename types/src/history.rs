//! Calculation history tape.
//!
//! A fixed-capacity FIFO of completed calculations. The tape survives
//! `clear()` on the calculator and is only emptied by its own clear
//! operation. It is not persisted across sessions.

/// Maximum number of entries kept on the tape; the oldest is evicted first.
pub const HISTORY_CAPACITY: usize = 10;

/// One completed calculation: the expression text and its formatted result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
}

/// Bounded history of completed calculations, oldest-first in storage.
#[derive(Debug, Default, Clone)]
pub struct Tape {
    entries: Vec<HistoryEntry>,
}

impl Tape {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest when over capacity.
    pub fn push(&mut self, expression: String, result: String) {
        self.entries.push(HistoryEntry { expression, result });
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.remove(0);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries newest-first, the order the history panel displays them.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Entries oldest-first (storage order).
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> (String, String) {
        (format!("{n} + {n}"), format!("{}", n * 2))
    }

    #[test]
    fn capacity_is_enforced_fifo() {
        let mut tape = Tape::new();
        for n in 0..15 {
            let (expr, result) = entry(n);
            tape.push(expr, result);
        }
        assert_eq!(tape.len(), HISTORY_CAPACITY);
        // Oldest surviving entry is n = 5.
        assert_eq!(tape.iter().next().unwrap().expression, "5 + 5");
        // Newest-first iteration starts at n = 14.
        assert_eq!(tape.iter_newest_first().next().unwrap().expression, "14 + 14");
    }

    #[test]
    fn clear_empties_the_tape() {
        let mut tape = Tape::new();
        tape.push("1 + 1".into(), "2".into());
        tape.clear();
        assert!(tape.is_empty());
    }
}
