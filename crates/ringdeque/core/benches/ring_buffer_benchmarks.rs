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

//! Ring buffer benchmarks
//!
//! Measures amortized push/pop cost at both ends, including the resize
//! cycles triggered by filling and draining the buffer.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ringdeque_core::RingBuffer;
use std::collections::VecDeque;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Fill through the rear and drain through the front
fn bench_queue_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_cycle");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ring_buffer", size), &size, |b, &size| {
            b.iter(|| {
                let mut buffer = RingBuffer::new();
                for i in 0..size {
                    buffer.push_back(black_box(i));
                }
                while let Ok(value) = buffer.pop_front() {
                    black_box(value);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("vec_deque", size), &size, |b, &size| {
            b.iter(|| {
                let mut deque = VecDeque::new();
                for i in 0..size {
                    deque.push_back(black_box(i));
                }
                while let Some(value) = deque.pop_front() {
                    black_box(value);
                }
            })
        });
    }

    group.finish();
}

/// Alternate insertion ends so the front wraps around the slot array
fn bench_alternating_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("alternating_ends");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut buffer = RingBuffer::with_capacity(16);
                for i in 0..size {
                    if i % 2 == 0 {
                        buffer.push_front(black_box(i));
                    } else {
                        buffer.push_back(black_box(i));
                    }
                }
                while let Ok(value) = buffer.pop_back() {
                    black_box(value);
                }
            })
        });
    }

    group.finish();
}

criterion_group!(ring_buffer_benches, bench_queue_cycle, bench_alternating_ends);
criterion_main!(ring_buffer_benches);
