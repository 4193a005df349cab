// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Divider geometry for drop gaps.
//!
//! ## Overview
//!
//! This module does not lay out elements. The host measures and places them
//! however it likes, then passes their rectangles here to get the hit area of
//! each gap's divider.
//!
//! A divider is `divider_size` thick along the main axis, centered on the
//! boundary it represents:
//!
//! - gap `0` on the leading edge of the first element,
//! - gap `i` halfway between element `i - 1`'s trailing edge and element `i`'s leading edge,
//! - gap `n` on the trailing edge of the last element.
//!
//! Across the main axis it spans the adjacent element(s).
//!
//! For hosts that only deliver pointer positions (no per-element enter/leave),
//! [`GapLayout::hit`] finds the gap under a point and [`GapHover`] turns
//! successive hits into the `LeaveDroppable`/`EnterDroppable` inputs the drag
//! state expects. The hover is scoped to a single drag: it resets whenever the
//! list is idle, so the first hit of the next drag always produces an enter.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_drag::DragInput;
//! use understory_reorder::ReorderList;
//! use understory_reorder::layout::{GapHover, GapLayout};
//!
//! let rows = [
//!     Rect::new(0.0, 0.0, 100.0, 20.0),
//!     Rect::new(0.0, 20.0, 100.0, 40.0),
//!     Rect::new(0.0, 40.0, 100.0, 60.0),
//! ];
//! let mut list = ReorderList::new(vec!["a", "b", "c"]);
//! list.handle(DragInput::StartDragging(0));
//!
//! let layout = GapLayout::new(&list, &rows);
//! let mut hover = GapHover::new();
//! for input in hover.update(&list, layout.hit(Point::new(50.0, 41.0))) {
//!     list.handle(input);
//! }
//! list.handle(DragInput::StopDragging);
//! assert_eq!(list.elements(), ["b", "a", "c"]);
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use understory_drag::DragInput;

use crate::list::ReorderList;
use crate::view::Orientation;

impl Orientation {
    /// Extent of `r` along the main axis, as `(start, end)`.
    pub fn main_range(self, r: Rect) -> (f64, f64) {
        match self {
            Self::Horizontal => (r.x0, r.x1),
            Self::Vertical => (r.y0, r.y1),
        }
    }

    /// Extent of `r` across the main axis, as `(start, end)`.
    pub fn cross_range(self, r: Rect) -> (f64, f64) {
        match self {
            Self::Horizontal => (r.y0, r.y1),
            Self::Vertical => (r.x0, r.x1),
        }
    }

    /// Build a rectangle from main-axis and cross-axis ranges.
    pub fn rect(self, main: (f64, f64), cross: (f64, f64)) -> Rect {
        match self {
            Self::Horizontal => Rect::new(main.0, cross.0, main.1, cross.1),
            Self::Vertical => Rect::new(cross.0, main.0, cross.1, main.1),
        }
    }
}

/// Divider rectangles for every gap `0..=items.len()`.
///
/// `items` are the element rectangles in list order. Returns an empty vector
/// when `items` is empty.
pub fn divider_rects(orientation: Orientation, divider_size: f64, items: &[Rect]) -> Vec<Rect> {
    let half = divider_size.max(0.0) * 0.5;
    let mut out = Vec::with_capacity(items.len() + 1);
    for gap in 0..=items.len() {
        let before = gap.checked_sub(1).and_then(|i| items.get(i)).copied();
        let after = items.get(gap).copied();
        let (center, cross) = match (before, after) {
            (Some(b), Some(a)) => {
                let (_, b_end) = orientation.main_range(b);
                let (a_start, _) = orientation.main_range(a);
                let (b0, b1) = orientation.cross_range(b);
                let (a0, a1) = orientation.cross_range(a);
                ((b_end + a_start) * 0.5, (b0.min(a0), b1.max(a1)))
            }
            (Some(b), None) => (orientation.main_range(b).1, orientation.cross_range(b)),
            (None, Some(a)) => (orientation.main_range(a).0, orientation.cross_range(a)),
            (None, None) => continue,
        };
        out.push(orientation.rect((center - half, center + half), cross));
    }
    out
}

/// Divider hit areas for the gaps that are currently drop targets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GapLayout {
    gaps: Vec<(usize, Rect)>,
}

impl GapLayout {
    /// Compute dividers for the active gaps of `list`.
    ///
    /// Uses the list's orientation and divider size. `items` should hold one
    /// rectangle per element; gaps beyond the provided rectangles are skipped.
    pub fn new<T>(list: &ReorderList<T>, items: &[Rect]) -> Self {
        let config = list.config();
        let gaps = divider_rects(config.orientation, config.divider_size, items)
            .into_iter()
            .enumerate()
            .filter(|(gap, _)| list.is_gap_active(*gap))
            .collect();
        Self { gaps }
    }

    /// Active gaps and their divider rectangles, ascending by gap.
    pub fn gaps(&self) -> &[(usize, Rect)] {
        &self.gaps
    }

    /// Divider rectangle of `gap`, if it is active.
    pub fn rect(&self, gap: usize) -> Option<Rect> {
        self.gaps.iter().find(|(g, _)| *g == gap).map(|(_, r)| *r)
    }

    /// Gap whose divider contains `pt`.
    ///
    /// When dividers overlap (large divider size, tight spacing), the later gap wins.
    pub fn hit(&self, pt: Point) -> Option<usize> {
        self.gaps
            .iter()
            .rev()
            .find(|(_, r)| r.contains(pt))
            .map(|(g, _)| *g)
    }
}

/// Tracks the hovered gap and derives droppable enter/leave inputs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GapHover {
    current: Option<usize>,
}

impl GapHover {
    /// Nothing hovered.
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Currently hovered gap.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Move the hover to `hit` and return the inputs for the transition.
    ///
    /// The leave for the old gap comes before the enter for the new one.
    /// Returns no inputs if the hovered gap did not change.
    ///
    /// While `list` is not dragging there are no drop targets: the hover is
    /// reset and no inputs are returned.
    pub fn update<T>(
        &mut self,
        list: &ReorderList<T>,
        hit: Option<usize>,
    ) -> Vec<DragInput<usize, usize>> {
        let mut out = Vec::new();
        if !list.drag_state().is_dragging() {
            self.current = None;
            return out;
        }
        if hit == self.current {
            return out;
        }
        if let Some(old) = self.current {
            out.push(DragInput::LeaveDroppable(old));
        }
        if let Some(new) = hit {
            out.push(DragInput::EnterDroppable(new));
        }
        self.current = hit;
        out
    }

    /// Forget the hovered gap, returning its leave input if there was one.
    pub fn clear(&mut self) -> Option<DragInput<usize, usize>> {
        self.current.take().map(DragInput::LeaveDroppable)
    }
}
