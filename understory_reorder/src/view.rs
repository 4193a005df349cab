// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View contract: configuration and the slot walk.
//!
//! A reorderable list renders as alternating gaps and elements:
//!
//! ```text
//! gap 0, element 0, gap 1, element 1, ..., element n-1, gap n
//! ```
//!
//! Gaps are drop targets, so they only appear during a drag, and the two gaps
//! touching the dragged element are left out. [`ReorderList::slots`] yields
//! that sequence as [`Slot`] values carrying the handler bundle and styling
//! predicates for each entry; [`ReorderList::view`] maps it through your
//! element-rendering callback.
//!
//! ```
//! use understory_drag::DragInput;
//! use understory_reorder::{ReorderList, Slot};
//!
//! let mut list = ReorderList::new(vec!["a", "b", "c"]);
//! list.handle(DragInput::StartDragging(0));
//!
//! let rendered = list.view(|slot| match slot {
//!     Slot::Gap { index, .. } => format!("|{index}|"),
//!     Slot::Element { element, dragged: true, .. } => format!("({element})"),
//!     Slot::Element { element, .. } => (*element).to_string(),
//! });
//! assert_eq!(rendered, ["(a)", "b", "|2|", "c", "|3|"]);
//! ```

use alloc::vec::Vec;

use understory_drag::{Bindings, DragConfig};

use crate::list::ReorderList;

/// Main axis of the list.
///
/// Elements are laid out along the main axis; dividers cross it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Elements left to right; dividers are vertical bars.
    Horizontal,
    /// Elements top to bottom; dividers are horizontal bars.
    #[default]
    Vertical,
}

/// Configuration for a [`ReorderList`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReorderConfig {
    /// Drag behavior, including sticky drop hover.
    pub drag: DragConfig,
    /// Main axis of the list.
    pub orientation: Orientation,
    /// Thickness of a divider's hit area along the main axis.
    pub divider_size: f64,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            drag: DragConfig::new(),
            orientation: Orientation::Vertical,
            divider_size: 8.0,
        }
    }
}

impl ReorderConfig {
    /// Set sticky drop hover.
    #[must_use]
    pub fn with_sticky(mut self, sticky: bool) -> Self {
        self.drag = self.drag.with_sticky(sticky);
        self
    }

    /// Set the main axis.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the divider hit-area thickness. Negative values are treated as zero.
    #[must_use]
    pub fn with_divider_size(mut self, size: f64) -> Self {
        self.divider_size = size.max(0.0);
        self
    }
}

/// One entry of the view walk.
#[derive(Debug)]
pub enum Slot<'a, T> {
    /// An active drop gap.
    Gap {
        /// Gap index: the position an element dropped here would be inserted before.
        index: usize,
        /// Handlers to attach to the divider.
        bindings: Bindings<usize, usize>,
        /// True if the pointer is over this gap.
        hovered: bool,
    },
    /// An element.
    Element {
        /// Position of the element.
        index: usize,
        /// The element itself.
        element: &'a T,
        /// Handlers to attach to the element.
        bindings: Bindings<usize, usize>,
        /// True if this is the element being dragged.
        dragged: bool,
        /// True if idle and the pointer is over this element.
        hovered: bool,
    },
}

impl<T> Slot<'_, T> {
    /// Index of the gap or element.
    pub fn index(&self) -> usize {
        match self {
            Self::Gap { index, .. } | Self::Element { index, .. } => *index,
        }
    }

    /// Handlers to attach for this slot.
    pub fn bindings(&self) -> &Bindings<usize, usize> {
        match self {
            Self::Gap { bindings, .. } | Self::Element { bindings, .. } => bindings,
        }
    }
}

impl<T> ReorderList<T> {
    /// Gaps and elements in visual order.
    pub fn slots(&self) -> impl Iterator<Item = Slot<'_, T>> + '_ {
        (0..=self.len()).flat_map(move |i| {
            let gap = self.is_gap_active(i).then(|| Slot::Gap {
                index: i,
                bindings: self.droppable(i),
                hovered: self.drag_state().is_hovering_droppable_id(&i),
            });
            let element = self.elements().get(i).map(|element| Slot::Element {
                index: i,
                element,
                bindings: self.draggable(i),
                dragged: self.drag_state().is_dragging_id(&i),
                hovered: self.drag_state().is_hovering_draggable_id(&i),
            });
            gap.into_iter().chain(element)
        })
    }

    /// Render every slot with `render` and collect the results.
    pub fn view<R>(&self, render: impl FnMut(Slot<'_, T>) -> R) -> Vec<R> {
        self.slots().map(render).collect()
    }
}
