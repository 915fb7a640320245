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

use ringdeque_core::BufferError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Failed to read script {path}: {source}")]
    ScriptRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("Line {line}: command '{command}' expects an integer argument")]
    MissingArgument { line: usize, command: String },

    #[error("Line {line}: invalid integer '{value}'")]
    InvalidArgument { line: usize, value: String },

    #[error("Line {line}: unexpected argument '{value}' for '{command}'")]
    UnexpectedArgument { line: usize, command: String, value: String },

    #[error("Line {line}: {source}")]
    Buffer {
        line: usize,
        #[source]
        source: BufferError,
    },

    #[error("Buffer error: {0}")]
    Config(#[from] BufferError),
}

pub type ToolResult<T> = Result<T, ToolError>;
