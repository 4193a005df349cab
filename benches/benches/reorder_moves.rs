// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_drag::DragInput;
use understory_reorder::ReorderList;
use understory_reorder::moves::move_element;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

fn gen_pairs(len: usize, count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| (rng.below(len), rng.below(len + 1)))
        .collect()
}

fn bench_move_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_element");
    for &len in &[16_usize, 256, 4096] {
        let pairs = gen_pairs(len, 256, 0x5eed_0000 + len as u64);
        group.throughput(Throughput::Elements(pairs.len() as u64));
        group.bench_function(format!("random_{len}"), |b| {
            b.iter_batched(
                || (0..len as u32).collect::<Vec<_>>(),
                |mut v| {
                    for &(drag, drop) in &pairs {
                        black_box(move_element(&mut v, drag, drop));
                    }
                    v
                },
                BatchSize::SmallInput,
            );
        });
        // Worst case: first to last, rotating the whole list.
        group.bench_function(format!("front_to_back_{len}"), |b| {
            b.iter_batched(
                || (0..len as u32).collect::<Vec<_>>(),
                |mut v| {
                    for _ in 0..pairs.len() {
                        black_box(move_element(&mut v, 0, len));
                    }
                    v
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_drag_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder_list");
    let len = 256_usize;
    let pairs = gen_pairs(len, 256, 42);
    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function("drag_enter_drop", |b| {
        b.iter_batched(
            || ReorderList::new((0..len as u32).collect()),
            |mut list| {
                for &(drag, drop) in &pairs {
                    list.handle(DragInput::StartDragging(drag));
                    list.handle(DragInput::EnterDroppable(drop));
                    black_box(list.handle(DragInput::StopDragging));
                }
                list
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_move_element, bench_drag_sequence);
criterion_main!(benches);
