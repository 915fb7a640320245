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

//! Demo command showing mixed front and rear insertion

use clap::Args;
use ringdeque_core::{BufferResult, RingBuffer};

/// Arguments for the demo command
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Initial buffer capacity
    #[arg(long, default_value = "5")]
    pub capacity: usize,
}

/// Values observed by the demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSummary {
    pub size: usize,
    pub front: i64,
    pub rear: i64,
    pub capacity: usize,
}

/// Enqueue 10 and 20 at the rear, then 5 at the front
pub fn demo_scenario(capacity: usize) -> BufferResult<DemoSummary> {
    let mut buffer = RingBuffer::with_capacity(capacity);
    buffer.push_back(10);
    buffer.push_back(20);
    buffer.push_front(5);

    Ok(DemoSummary {
        size: buffer.size(),
        front: *buffer.peek_front()?,
        rear: *buffer.peek_back()?,
        capacity: buffer.capacity(),
    })
}

/// Execute the demo command
pub fn run_demo(args: DemoArgs) -> anyhow::Result<()> {
    let summary = demo_scenario(args.capacity)?;

    println!("Queue size: {}", summary.size);
    println!("Front element: {}", summary.front);
    println!("Rear element: {}", summary.rear);
    println!("Capacity: {}", summary.capacity);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scenario() {
        let summary = demo_scenario(5).unwrap();
        assert_eq!(
            summary,
            DemoSummary {
                size: 3,
                front: 5,
                rear: 20,
                capacity: 5
            }
        );
    }

    #[test]
    fn test_demo_scenario_grows_from_zero() {
        let summary = demo_scenario(0).unwrap();
        assert_eq!(summary.size, 3);
        assert_eq!(summary.capacity, 4);
    }
}
