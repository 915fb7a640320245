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

//! Double-Ended Resizable Circular Buffer
//!
//! A single owned slot array addressed circularly. Logical position `i`
//! (counted from the front) lives at physical slot `(front + i) % capacity`.
//!
//! - Inserting into a full buffer doubles the capacity first.
//! - Removing down to a quarter of the capacity halves it afterwards,
//!   never going below the configured floor.
//! - Every resize copies the live elements in logical order to slots
//!   `0..len` and resets `front` to 0.

use crate::config::{BufferConfig, MIN_GROWTH_CAPACITY};
use crate::error::{BufferError, BufferResult};
use tracing::{debug, trace};

/// Growable double-ended queue over a circular slot array
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Slot storage, its length is the capacity. Vacant slots hold `None`.
    slots: Vec<Option<T>>,
    /// Physical index of the front element, meaningless while empty
    front: usize,
    /// Number of occupied slots
    len: usize,
    /// Sizing policy
    config: BufferConfig,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer that allocates on first insert
    pub fn new() -> Self {
        Self::from_config(BufferConfig::default())
    }

    /// Create an empty buffer with `capacity` preallocated slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_config(BufferConfig::default().with_initial_capacity(capacity))
    }

    /// Create an empty buffer with a custom sizing policy
    pub fn with_config(config: BufferConfig) -> BufferResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: BufferConfig) -> Self {
        Self {
            slots: allocate(config.initial_capacity),
            front: 0,
            len: 0,
            config,
        }
    }

    /// Insert a value as the new front element
    pub fn push_front(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let capacity = self.capacity();
        self.front = (self.front + capacity - 1) % capacity;
        self.slots[self.front] = Some(value);
        self.len += 1;
    }

    /// Insert a value as the new rear element
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let rear = self.physical(self.len);
        self.slots[rear] = Some(value);
        self.len += 1;
    }

    /// Remove and return the front element
    pub fn pop_front(&mut self) -> BufferResult<T> {
        if self.len == 0 {
            trace!("pop_front on empty ring buffer");
            return Err(BufferError::Underflow);
        }
        let value = self.slots[self.front].take().ok_or(BufferError::Underflow)?;
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Remove and return the rear element
    pub fn pop_back(&mut self) -> BufferResult<T> {
        if self.len == 0 {
            trace!("pop_back on empty ring buffer");
            return Err(BufferError::Underflow);
        }
        let rear = self.physical(self.len - 1);
        let value = self.slots[rear].take().ok_or(BufferError::Underflow)?;
        self.len -= 1;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Peek at the front element without removing it
    pub fn peek_front(&self) -> BufferResult<&T> {
        if self.len == 0 {
            trace!("peek_front on empty ring buffer");
            return Err(BufferError::EmptyAccess);
        }
        self.slots[self.front].as_ref().ok_or(BufferError::EmptyAccess)
    }

    /// Peek at the rear element without removing it
    pub fn peek_back(&self) -> BufferResult<&T> {
        if self.len == 0 {
            trace!("peek_back on empty ring buffer");
            return Err(BufferError::EmptyAccess);
        }
        self.slots[self.physical(self.len - 1)].as_ref().ok_or(BufferError::EmptyAccess)
    }

    /// Peek at the element at a logical position (0 = front)
    pub fn peek_at(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    /// Number of stored elements
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn config(&self) -> &BufferConfig {
        &self.config
    }

    /// Drop every element, keeping the current allocation
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.front = 0;
        self.len = 0;
    }

    /// Get a copy of the contents in front-to-rear order
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        (0..self.len).filter_map(|i| self.peek_at(i).cloned()).collect()
    }

    /// Map a logical position to its slot. Requires a non-zero capacity.
    fn physical(&self, logical: usize) -> usize {
        (self.front + logical) % self.capacity()
    }

    fn grow(&mut self) {
        let capacity = self.capacity();
        let target = if capacity == 0 { MIN_GROWTH_CAPACITY.max(self.config.floor()) } else { capacity * 2 };
        debug!(from = capacity, to = target, len = self.len, "growing ring buffer");
        self.relocate(target);
    }

    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if self.len != capacity / 4 {
            return;
        }
        let target = (capacity / 2).max(self.config.floor());
        if target < capacity {
            debug!(from = capacity, to = target, len = self.len, "shrinking ring buffer");
            self.relocate(target);
        }
    }

    /// Move the live elements into a fresh allocation, front first at slot 0
    fn relocate(&mut self, capacity: usize) {
        let mut slots = allocate(capacity);
        for (i, slot) in slots.iter_mut().take(self.len).enumerate() {
            let source = self.physical(i);
            *slot = self.slots[source].take();
        }
        self.slots = slots;
        self.front = 0;
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn allocate<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}
