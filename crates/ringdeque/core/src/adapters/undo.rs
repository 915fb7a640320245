// Dotlanth
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Bounded undo history
//!
//! Keeps at most `limit` entries. Pushing onto a full history evicts the
//! oldest entry from the other end of the ring buffer.

use crate::buffer::RingBuffer;
use crate::error::{BufferError, BufferResult};
use tracing::trace;

/// Default number of entries retained by an [`UndoStack`]
pub const DEFAULT_UNDO_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct UndoStack<T> {
    history: RingBuffer<T>,
    limit: usize,
}

impl<T> UndoStack<T> {
    pub fn new() -> Self {
        Self {
            history: RingBuffer::new(),
            limit: DEFAULT_UNDO_LIMIT,
        }
    }

    /// Create a history retaining at most `limit` entries
    pub fn with_limit(limit: usize) -> BufferResult<Self> {
        if limit == 0 {
            return Err(BufferError::InvalidConfig("undo limit must be at least 1".to_string()));
        }
        Ok(Self {
            history: RingBuffer::new(),
            limit,
        })
    }

    /// Record a new entry, returning the evicted oldest entry if the history was full
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.history.size() == self.limit { self.history.pop_front().ok() } else { None };
        if evicted.is_some() {
            trace!(limit = self.limit, "undo history full, evicted oldest entry");
        }
        self.history.push_back(value);
        evicted
    }

    /// Remove and return the most recent entry
    pub fn undo(&mut self) -> BufferResult<T> {
        self.history.pop_back()
    }

    pub fn peek(&self) -> BufferResult<&T> {
        self.history.peek_back()
    }

    pub fn size(&self) -> usize {
        self.history.size()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Entries from oldest to newest
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.history.snapshot()
    }
}

impl<T> Default for UndoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_returns_newest_first() {
        let mut history = UndoStack::new();
        history.push("type a");
        history.push("type b");

        assert_eq!(*history.peek().unwrap(), "type b");
        assert_eq!(history.undo().unwrap(), "type b");
        assert_eq!(history.undo().unwrap(), "type a");
        assert!(matches!(history.undo(), Err(BufferError::Underflow)));
    }

    #[test]
    fn test_full_history_evicts_oldest() {
        let mut history = UndoStack::with_limit(3).unwrap();
        assert_eq!(history.push(22), None);
        assert_eq!(history.push(33), None);
        assert_eq!(history.push(44), None);
        assert_eq!(history.push(55), Some(22));
        assert_eq!(history.push(66), Some(33));

        assert_eq!(history.size(), 3);
        assert_eq!(history.snapshot(), vec![44, 55, 66]);
    }

    #[test]
    fn test_default_limit() {
        let mut history = UndoStack::default();
        for i in 0..150 {
            history.push(i);
        }
        assert_eq!(history.limit(), DEFAULT_UNDO_LIMIT);
        assert_eq!(history.size(), DEFAULT_UNDO_LIMIT);
        assert_eq!(history.snapshot().first(), Some(&50));
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(matches!(UndoStack::<u8>::with_limit(0), Err(BufferError::InvalidConfig(_))));
    }
}
