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

//! Replay command for running operation scripts against a ring buffer
//!
//! A script holds one command per line:
//!
//! ```text
//! # comment
//! push_back 10
//! push_front 5
//! peek_front
//! pop_back
//! size
//! clear
//! ```

use crate::error::{ToolError, ToolResult};
use clap::Args;
use ringdeque_core::{BufferConfig, RingBuffer};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Arguments for the replay command
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Path to the operation script
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Slots allocated before the first operation
    #[arg(long, default_value = "0")]
    pub initial_capacity: usize,

    /// Capacity the buffer never shrinks below
    #[arg(long, default_value = "1")]
    pub min_capacity: usize,

    /// Abort on the first failed operation
    #[arg(long)]
    pub strict: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl ReplayArgs {
    pub fn buffer_config(&self) -> BufferConfig {
        BufferConfig::new().with_initial_capacity(self.initial_capacity).with_min_capacity(self.min_capacity)
    }
}

/// A single script command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PushFront(i64),
    PushBack(i64),
    PopFront,
    PopBack,
    PeekFront,
    PeekBack,
    Size,
    Clear,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PushFront(v) => write!(f, "push_front {}", v),
            Command::PushBack(v) => write!(f, "push_back {}", v),
            Command::PopFront => write!(f, "pop_front"),
            Command::PopBack => write!(f, "pop_back"),
            Command::PeekFront => write!(f, "peek_front"),
            Command::PeekBack => write!(f, "peek_back"),
            Command::Size => write!(f, "size"),
            Command::Clear => write!(f, "clear"),
        }
    }
}

/// A parsed command with its 1-based source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Done,
    Value { value: i64 },
    Error { message: String },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => write!(f, "ok"),
            Outcome::Value { value } => write!(f, "{}", value),
            Outcome::Error { message } => write!(f, "error: {}", message),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub line: usize,
    pub command: String,
    pub outcome: Outcome,
}

/// Everything observed while replaying a script
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<StepRecord>,
    pub contents: Vec<i64>,
    pub size: usize,
    pub capacity: usize,
    pub errors: usize,
}

/// Parse a script into commands, skipping blank lines and `#` comments
pub fn parse_script(source: &str) -> ToolResult<Vec<ScriptLine>> {
    let mut lines = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let mut parts = text.split_whitespace();
        let name = parts.next().unwrap_or("");
        let argument = parts.next();
        if let Some(extra) = parts.next() {
            return Err(ToolError::UnexpectedArgument {
                line,
                command: name.to_string(),
                value: extra.to_string(),
            });
        }

        let command = match name {
            "push_front" => Command::PushFront(parse_value(line, name, argument)?),
            "push_back" => Command::PushBack(parse_value(line, name, argument)?),
            "pop_front" => Command::PopFront,
            "pop_back" => Command::PopBack,
            "peek_front" => Command::PeekFront,
            "peek_back" => Command::PeekBack,
            "size" => Command::Size,
            "clear" => Command::Clear,
            _ => {
                return Err(ToolError::UnknownCommand {
                    line,
                    command: name.to_string(),
                });
            }
        };

        if !matches!(command, Command::PushFront(_) | Command::PushBack(_)) {
            if let Some(value) = argument {
                return Err(ToolError::UnexpectedArgument {
                    line,
                    command: name.to_string(),
                    value: value.to_string(),
                });
            }
        }

        lines.push(ScriptLine { line, command });
    }

    Ok(lines)
}

fn parse_value(line: usize, command: &str, argument: Option<&str>) -> ToolResult<i64> {
    let value = argument.ok_or_else(|| ToolError::MissingArgument {
        line,
        command: command.to_string(),
    })?;
    value.parse().map_err(|_| ToolError::InvalidArgument {
        line,
        value: value.to_string(),
    })
}

/// Execute parsed commands against a fresh buffer
pub fn replay(script: &[ScriptLine], config: BufferConfig, strict: bool) -> ToolResult<ReplayReport> {
    let mut buffer = RingBuffer::with_config(config)?;
    let mut steps = Vec::with_capacity(script.len());
    let mut errors = 0;

    for entry in script {
        let result = match entry.command {
            Command::PushFront(v) => {
                buffer.push_front(v);
                Ok(Outcome::Done)
            }
            Command::PushBack(v) => {
                buffer.push_back(v);
                Ok(Outcome::Done)
            }
            Command::PopFront => buffer.pop_front().map(|value| Outcome::Value { value }),
            Command::PopBack => buffer.pop_back().map(|value| Outcome::Value { value }),
            Command::PeekFront => buffer.peek_front().map(|&value| Outcome::Value { value }),
            Command::PeekBack => buffer.peek_back().map(|&value| Outcome::Value { value }),
            Command::Size => Ok(Outcome::Value { value: buffer.size() as i64 }),
            Command::Clear => {
                buffer.clear();
                Ok(Outcome::Done)
            }
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(source) if strict => return Err(ToolError::Buffer { line: entry.line, source }),
            Err(source) => {
                warn!(line = entry.line, command = %entry.command, "operation failed: {}", source);
                errors += 1;
                Outcome::Error { message: source.to_string() }
            }
        };

        debug!(line = entry.line, command = %entry.command, size = buffer.size(), capacity = buffer.capacity(), "step executed");
        steps.push(StepRecord {
            line: entry.line,
            command: entry.command.to_string(),
            outcome,
        });
    }

    Ok(ReplayReport {
        steps,
        contents: buffer.snapshot(),
        size: buffer.size(),
        capacity: buffer.capacity(),
        errors,
    })
}

/// Execute the replay command
pub fn run_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&args.script).map_err(|source| ToolError::ScriptRead {
        path: args.script.clone(),
        source,
    })?;
    let script = parse_script(&source)?;
    info!("Replaying {} commands from {}", script.len(), args.script.display());

    let report = replay(&script, args.buffer_config(), args.strict)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for step in &report.steps {
        println!("[line {}] {} -> {}", step.line, step.command, step.outcome);
    }
    println!("Final contents: {:?}", report.contents);
    println!("Size: {}", report.size);
    println!("Capacity: {}", report.capacity);
    println!("Errors: {}", report.errors);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_script_skips_comments_and_blanks() {
        let script = parse_script("# setup\n\npush_back 10  # rear\npop_front\n").unwrap();
        assert_eq!(
            script,
            vec![
                ScriptLine {
                    line: 3,
                    command: Command::PushBack(10)
                },
                ScriptLine {
                    line: 4,
                    command: Command::PopFront
                },
            ]
        );
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        assert!(matches!(parse_script("size\nrotate"), Err(ToolError::UnknownCommand { line: 2, .. })));
        assert!(matches!(parse_script("push_front"), Err(ToolError::MissingArgument { line: 1, .. })));
        assert!(matches!(parse_script("\npush_back ten"), Err(ToolError::InvalidArgument { line: 2, .. })));
        assert!(matches!(parse_script("pop_back 3"), Err(ToolError::UnexpectedArgument { line: 1, .. })));
        assert!(matches!(parse_script("push_back 1 2"), Err(ToolError::UnexpectedArgument { line: 1, .. })));
    }

    #[test]
    fn test_replay_reference_scenario() {
        let script = parse_script("push_back 10\npush_back 20\npush_front 5\npeek_front\npeek_back\nsize").unwrap();
        let report = replay(&script, BufferConfig::new().with_initial_capacity(5), false).unwrap();

        assert_eq!(report.contents, vec![5, 10, 20]);
        assert_eq!(report.steps[3].outcome, Outcome::Value { value: 5 });
        assert_eq!(report.steps[4].outcome, Outcome::Value { value: 20 });
        assert_eq!(report.steps[5].outcome, Outcome::Value { value: 3 });
        assert_eq!(report.capacity, 5);
        assert_eq!(report.errors, 0);
    }

    #[test]
    fn test_replay_records_errors() {
        let script = parse_script("pop_front\npush_back 1\npeek_back\nclear\npeek_front").unwrap();
        let report = replay(&script, BufferConfig::default(), false).unwrap();

        assert_eq!(report.errors, 2);
        assert!(matches!(report.steps[0].outcome, Outcome::Error { .. }));
        assert!(matches!(report.steps[4].outcome, Outcome::Error { .. }));
        assert!(report.contents.is_empty());
    }

    #[test]
    fn test_replay_strict_aborts() {
        let script = parse_script("push_back 1\npop_back\npop_back").unwrap();
        let result = replay(&script, BufferConfig::default(), true);
        assert!(matches!(result, Err(ToolError::Buffer { line: 3, .. })));
    }

    #[test]
    fn test_replay_rejects_invalid_config() {
        let config = BufferConfig::new().with_initial_capacity(2).with_min_capacity(8);
        assert!(matches!(replay(&[], config, false), Err(ToolError::Config(_))));
    }

    #[test]
    fn test_run_replay_from_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("ops.txt");
        fs::write(&file_path, "push_back 1\npush_back 2\npop_front\n").unwrap();

        let args = ReplayArgs {
            script: file_path,
            initial_capacity: 2,
            min_capacity: 1,
            strict: true,
            json: true,
        };
        assert!(run_replay(args).is_ok());
    }

    #[test]
    fn test_run_replay_missing_file() {
        let args = ReplayArgs {
            script: PathBuf::from("/nonexistent/ops.txt"),
            initial_capacity: 0,
            min_capacity: 1,
            strict: false,
            json: false,
        };
        assert!(run_replay(args).is_err());
    }
}
