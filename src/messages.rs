//! Bounded log of status lines shown to the player.

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::options::DEFAULT_MESSAGE_CAPACITY;

/// Keeps the most recent status lines, dropping the oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    /// Creates an empty log holding at most `capacity` lines.
    ///
    /// Storage grows on demand, so a very large cap costs nothing up front.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity.min(DEFAULT_MESSAGE_CAPACITY)),
            capacity,
        }
    }

    /// Appends a line, evicting the oldest once the log is full.
    pub fn push(&mut self, line: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Iterates over the lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Returns the number of lines held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the maximum number of lines held.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
