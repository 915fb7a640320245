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

use thiserror::Error;

/// Errors reported by the ring buffer and the containers built on it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("Buffer underflow - attempted to remove from an empty buffer")]
    Underflow,

    #[error("Empty access - attempted to peek into an empty buffer")]
    EmptyAccess,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Type alias for buffer operation results
pub type BufferResult<T> = Result<T, BufferError>;
