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

//! Ring buffer sizing configuration

use crate::error::{BufferError, BufferResult};
use serde::{Deserialize, Serialize};

/// Capacity used for the first allocation of a buffer created with zero slots
pub const MIN_GROWTH_CAPACITY: usize = 2;

/// Smallest capacity a buffer may shrink to unless configured otherwise
pub const DEFAULT_MIN_CAPACITY: usize = 1;

/// Sizing policy for a [`RingBuffer`](crate::RingBuffer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Slots allocated up front. Zero defers allocation to the first insert.
    pub initial_capacity: usize,
    /// Shrinking never goes below this many slots
    pub min_capacity: usize,
}

impl BufferConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_min_capacity(mut self, min_capacity: usize) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    /// Shrink floor, never lower than a single slot
    pub fn floor(&self) -> usize {
        self.min_capacity.max(1)
    }

    /// Check that the initial allocation respects the shrink floor
    pub fn validate(&self) -> BufferResult<()> {
        if self.initial_capacity != 0 && self.initial_capacity < self.floor() {
            return Err(BufferError::InvalidConfig(format!(
                "initial capacity {} is below minimum capacity {}",
                self.initial_capacity,
                self.floor()
            )));
        }
        Ok(())
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            min_capacity: DEFAULT_MIN_CAPACITY,
        }
    }
}
