// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Reorder: headless drag-and-drop list reordering.
//!
//! ## Overview
//!
//! [`ReorderList`] owns an ordered sequence of elements and an
//! [`understory_drag::DragState`] that tracks the pointer. Element indices are
//! the drag ids; gap indices are the drop ids. When a drag ends over a gap, the
//! dragged element is moved there.
//!
//! This crate does not render. A view layer walks [`ReorderList::slots`] (or
//! calls [`ReorderList::view`] with an element-rendering callback), attaches the
//! handler bundle of each slot, and feeds the resulting inputs back through
//! [`ReorderList::handle`] or [`ReorderList::update`].
//!
//! ## Gaps
//!
//! Between every pair of adjacent elements, and before the first and after the
//! last, there is a gap. Gap `g` is the position an element dropped there
//! would be inserted before; gap `len` is the end of the list.
//!
//! The gaps directly before and after the dragged element would leave the
//! order unchanged. They are not offered as drop targets, but a drop onto
//! them (for example from a stale event) is still handled and simply changes
//! nothing.
//!
//! ## Moves
//!
//! [`moves::move_element`] is the underlying algorithm. It is total: a missing
//! source index or an out-of-range gap leaves the list untouched.
//!
//! ## Geometry
//!
//! [`layout`] computes Kurbo divider rectangles from element rectangles laid
//! out by the host, along the configured [`Orientation`], and can drive the
//! drag state from raw pointer positions.
//!
//! ## Example
//!
//! ```
//! use understory_drag::{DragEvent, DragInput};
//! use understory_reorder::ReorderList;
//!
//! let mut list = ReorderList::new(vec!["These", "are", "draggable"]);
//!
//! list.handle(DragInput::StartDragging(0));
//! list.handle(DragInput::EnterDroppable(2));
//! let update = list.handle(DragInput::StopDragging);
//!
//! assert_eq!(update.event, Some(DragEvent::SuccessfulDrop(0, 2)));
//! assert_eq!(list.elements(), ["are", "These", "draggable"]);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: emit `tracing` events for drops, here and in `understory_drag`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod layout;
pub mod list;
pub mod moves;
pub mod view;

pub use layout::{GapHover, GapLayout, divider_rects};
pub use list::{ReorderList, ReorderMsg};
pub use view::{Orientation, ReorderConfig, Slot};
