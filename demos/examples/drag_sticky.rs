// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky drop hover versus plain drop hover.
//!
//! The same input sequence, where the leave for a drop target arrives before
//! the release, fails without sticky mode and succeeds with it.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example drag_sticky`

use tracing_subscriber::EnvFilter;
use understory_drag::{DragConfig, DragEvent, DragInput, DragState, ReleaseSource};

#[derive(Debug, Default)]
struct Window {
    listening: bool,
}

impl ReleaseSource for Window {
    fn subscribe(&mut self) {
        tracing::info!("listening for pointer release");
        self.listening = true;
    }
    fn unsubscribe(&mut self) {
        tracing::info!("stopped listening for pointer release");
        self.listening = false;
    }
}

fn run(config: DragConfig) -> Option<DragEvent<char, u32>> {
    let mut window = Window::default();
    let mut state: DragState<char, u32> = DragState::new();
    let inputs = [
        DragInput::EnterDraggable('a'),
        DragInput::StartDragging('a'),
        DragInput::EnterDroppable(2),
        DragInput::LeaveDroppable(2),
        DragInput::StopDragging,
    ];
    let mut last = None;
    for input in inputs {
        let update = state.update(input, &config);
        update.apply_release(&mut window);
        if update.event.is_some() {
            last = update.event;
        }
    }
    assert!(!window.listening);
    last
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let plain = run(DragConfig::new());
    println!("== Plain ==\n  {:?}", plain);
    let sticky = run(DragConfig::new().with_sticky(true));
    println!("== Sticky ==\n  {:?}", sticky);

    assert_eq!(plain, Some(DragEvent::FailedDrop('a')));
    assert_eq!(sticky, Some(DragEvent::SuccessfulDrop('a', 2)));
}
