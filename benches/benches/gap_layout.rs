// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_drag::DragInput;
use understory_reorder::{GapLayout, Orientation, ReorderList, divider_rects};

fn gen_rows(n: usize, h: f64, spacing: f64) -> Vec<Rect> {
    (0..n)
        .map(|i| {
            let y = i as f64 * (h + spacing);
            Rect::new(0.0, y, 240.0, y + h)
        })
        .collect()
}

fn bench_divider_rects(c: &mut Criterion) {
    let mut group = c.benchmark_group("divider_rects");
    for &n in &[64_usize, 1024] {
        let rows = gen_rows(n, 24.0, 4.0);
        group.throughput(Throughput::Elements(n as u64 + 1));
        group.bench_function(format!("vertical_{n}"), |b| {
            b.iter(|| black_box(divider_rects(Orientation::Vertical, 8.0, &rows)));
        });
    }
    group.finish();
}

fn bench_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("gap_layout");
    let n = 1024_usize;
    let rows = gen_rows(n, 24.0, 4.0);
    let mut list = ReorderList::new((0..n).collect::<Vec<_>>());
    list.handle(DragInput::StartDragging(n / 2));

    group.bench_function("build_1024", |b| {
        b.iter(|| black_box(GapLayout::new(&list, &rows)));
    });

    let layout = GapLayout::new(&list, &rows);
    let probes: Vec<Point> = (0..256)
        .map(|i| Point::new(120.0, i as f64 * 111.0))
        .collect();
    group.throughput(Throughput::Elements(probes.len() as u64));
    group.bench_function("hit_1024", |b| {
        b.iter(|| {
            for &pt in &probes {
                black_box(layout.hit(pt));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_divider_rects, bench_hit);
criterion_main!(benches);
