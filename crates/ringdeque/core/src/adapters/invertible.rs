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

//! Stack that can be inverted in constant time
//!
//! Elements live in a [`RingBuffer`]. The `flipped` bit decides which end is
//! the top, so inverting the stack never touches the elements.

use crate::buffer::RingBuffer;
use crate::error::BufferResult;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct InvertibleStack<T> {
    buffer: RingBuffer<T>,
    flipped: bool,
}

impl<T> InvertibleStack<T> {
    pub fn new() -> Self {
        Self {
            buffer: RingBuffer::new(),
            flipped: false,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: RingBuffer::with_capacity(capacity),
            flipped: false,
        }
    }

    /// Push a value onto the top of the stack
    pub fn push(&mut self, value: T) {
        if self.flipped {
            self.buffer.push_front(value);
        } else {
            self.buffer.push_back(value);
        }
    }

    /// Pop the top value
    pub fn pop(&mut self) -> BufferResult<T> {
        if self.flipped { self.buffer.pop_front() } else { self.buffer.pop_back() }
    }

    /// Peek at the top value without removing it
    pub fn peek(&self) -> BufferResult<&T> {
        if self.flipped { self.buffer.peek_front() } else { self.buffer.peek_back() }
    }

    /// Invert the stack: the bottom element becomes the top
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
        trace!(flipped = self.flipped, size = self.buffer.size(), "stack flipped");
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn size(&self) -> usize {
        self.buffer.size()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Move every element onto `other`, bottom first, so the relative order
    /// is preserved on the destination. Returns the number of moved elements.
    pub fn transfer_to(&mut self, other: &mut InvertibleStack<T>) -> usize {
        let mut moved = 0;
        while let Ok(value) = self.pop_bottom() {
            other.push(value);
            moved += 1;
        }
        moved
    }

    /// Contents from bottom to top
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut items = self.buffer.snapshot();
        if self.flipped {
            items.reverse();
        }
        items
    }

    fn pop_bottom(&mut self) -> BufferResult<T> {
        if self.flipped { self.buffer.pop_back() } else { self.buffer.pop_front() }
    }
}

impl<T> Default for InvertibleStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
