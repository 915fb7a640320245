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

//! Ringdeque Core
//!
//! A resizable circular buffer with amortized O(1) insertion and removal at
//! both ends, plus the stack containers built on top of it.
//!
//! ```rust
//! use ringdeque_core::RingBuffer;
//!
//! let mut buffer = RingBuffer::new();
//! buffer.push_back(10);
//! buffer.push_back(20);
//! buffer.push_front(5);
//!
//! assert_eq!(buffer.snapshot(), vec![5, 10, 20]);
//! assert_eq!(buffer.pop_back().unwrap(), 20);
//! ```

pub mod adapters;
pub mod buffer;
pub mod config;
pub mod error;

pub use adapters::{InvertibleStack, UndoStack};
pub use buffer::RingBuffer;
pub use config::BufferConfig;
pub use error::{BufferError, BufferResult};
