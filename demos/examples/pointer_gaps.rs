// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a horizontal list from raw pointer positions.
//!
//! The host lays out element rectangles, asks for divider hit areas, and
//! converts pointer moves into droppable enter/leave inputs.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example pointer_gaps`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_drag::DragInput;
use understory_reorder::{GapHover, GapLayout, Orientation, ReorderConfig, ReorderList};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ReorderConfig::default()
        .with_orientation(Orientation::Horizontal)
        .with_divider_size(12.0);
    let mut list = ReorderList::with_config(vec!['a', 'b', 'c', 'd'], config);

    // Four 50x30 tiles with 10 units between them.
    let tiles: Vec<Rect> = (0..list.len())
        .map(|i| {
            let x = i as f64 * 60.0;
            Rect::new(x, 0.0, x + 50.0, 30.0)
        })
        .collect();

    list.handle(DragInput::StartDragging(0));
    let layout = GapLayout::new(&list, &tiles);
    println!("== Active dividers ==");
    for (gap, rect) in layout.gaps() {
        println!("  gap {gap}: {rect:?}");
    }

    let mut hover = GapHover::new();
    for x in [20.0, 56.0, 115.0, 176.0] {
        let hit = layout.hit(Point::new(x, 15.0));
        for input in hover.update(&list, hit) {
            list.handle(input);
        }
        println!("  pointer x={x}: over gap {:?}", hover.current());
    }

    list.handle(DragInput::StopDragging);
    println!("== Result ==\n  {:?}", list.elements());
    assert_eq!(list.elements(), ['b', 'c', 'a', 'd']);
}
