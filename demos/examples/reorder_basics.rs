// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder a list by dragging an element onto a gap.
//!
//! Renders the slot walk as text before, during, and after the drag.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example reorder_basics`

use tracing_subscriber::EnvFilter;
use understory_drag::{DragEvent, DragInput, PointerKind};
use understory_reorder::{ReorderList, Slot};

fn render(list: &ReorderList<&str>) -> String {
    list.view(|slot| match slot {
        Slot::Gap { index, hovered, .. } => {
            if hovered {
                format!("[=={index}==]")
            } else {
                format!("[--{index}--]")
            }
        }
        Slot::Element {
            element, dragged, ..
        } => {
            if dragged {
                format!("({element})")
            } else {
                (*element).to_string()
            }
        }
    })
    .join(" ")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut list = ReorderList::new(vec!["These", "are", "draggable"]);
    println!("== Idle ==\n  {}", render(&list));

    // The view wires the element's pointer-down handler and forwards it.
    let down = list.draggable(0).input(PointerKind::Down).unwrap();
    list.handle(down);
    println!("== Dragging ==\n  {}", render(&list));

    let enter = list.droppable(2).input(PointerKind::Enter).unwrap();
    list.handle(enter);
    println!("== Over gap 2 ==\n  {}", render(&list));

    let update = list.handle(DragInput::StopDragging);
    println!("== Dropped ==\n  {}", render(&list));

    assert_eq!(update.event, Some(DragEvent::SuccessfulDrop(0, 2)));
    assert_eq!(list.elements(), ["are", "These", "draggable"]);
}
