// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Drag: a headless, `no_std` drag-and-drop state machine.
//!
//! ## Overview
//!
//! This crate tracks the pointer side of drag and drop: which item is hovered
//! while idle, which item is being dragged, and which drop target is hovered
//! during a drag. When the pointer is released it derives a single high-level
//! [`DragEvent`]: a successful drop onto the hovered target, or a failed drop.
//!
//! It does not hit test, render, or own any data. The host delivers discrete
//! [`DragInput`] values (usually from its own enter/leave/down handlers) and
//! reacts to the returned [`Update`].
//!
//! ## Pieces
//!
//! - [`state`]: [`DragState`], its inputs and derived events, and [`DragConfig`].
//! - [`bindings`]: per-element handler bundles ([`Bindings`]) that tell the view
//!   layer which pointer handlers to wire, and translate their events back into inputs.
//! - [`release`]: the global pointer-release listener contract. A drag ends on
//!   release anywhere, so hosts subscribe while dragging and unsubscribe afterwards.
//!
//! ## Robustness
//!
//! [`DragState::update`] is total. Inputs that make no sense for the current
//! state are ignored rather than reported:
//!
//! - starting a drag while already dragging,
//! - a leave for an id other than the hovered one (stale or out-of-order delivery),
//! - releasing while not dragging.
//!
//! With [`DragConfig::sticky`], leaving a hovered drop target keeps it hovered,
//! so a release that lands just outside the target still counts.
//!
//! ## Example
//!
//! ```
//! use understory_drag::{DragConfig, DragEvent, DragInput, DragState};
//!
//! let config = DragConfig::default().with_sticky(true);
//! let mut state: DragState<&str, u32> = DragState::new();
//!
//! state.update(DragInput::EnterDraggable("a"), &config);
//! assert!(state.is_hovering_draggable_id(&"a"));
//!
//! state.update(DragInput::StartDragging("a"), &config);
//! state.update(DragInput::EnterDroppable(2), &config);
//! state.update(DragInput::LeaveDroppable(2), &config);
//!
//! let update = state.update(DragInput::StopDragging, &config);
//! assert_eq!(update.event, Some(DragEvent::SuccessfulDrop("a", 2)));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `trace`/`debug` events for inputs, ignored inputs, and derived drag events.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

pub mod bindings;
pub mod release;
pub mod state;

pub use bindings::{Bindings, Handlers, PointerKind, Target};
pub use release::{ReleaseListener, ReleaseSource};
pub use state::{DragConfig, DragEvent, DragInput, DragState, Update};
