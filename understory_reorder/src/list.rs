// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reorderable list: elements plus drag state.
//!
//! ## Identity
//!
//! Element indices are the drag ids and gap indices are the drop ids. This
//! keeps the contract simple, but indices are positions, not identities: if
//! the element list changes length between a drag start and its drop (for
//! example through a [`ReorderMsg::Other`] reducer that inserts or removes
//! elements mid-drag), the drop applies to whatever sits at those positions
//! when the release arrives. Hosts that mutate the list during a drag should
//! end the drag first with [`DragInput::StopDragging`].

use alloc::vec::Vec;

use understory_drag::{Bindings, DragEvent, DragInput, DragState, Handlers, Update};

use crate::moves::{is_effective_drop, move_element};
use crate::view::ReorderConfig;

/// Messages accepted by [`ReorderList::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReorderMsg<M> {
    /// Pointer interaction, routed to the drag state.
    Drag(DragInput<usize, usize>),
    /// Application message, routed to the caller's reducer.
    Other(M),
}

impl<M> From<DragInput<usize, usize>> for ReorderMsg<M> {
    fn from(input: DragInput<usize, usize>) -> Self {
        Self::Drag(input)
    }
}

/// An ordered list of elements that can be rearranged by drag and drop.
///
/// The list owns its elements. Their order changes only when a drag ends in a
/// [`DragEvent::SuccessfulDrop`], or when the caller's reducer changes them
/// in response to a [`ReorderMsg::Other`].
#[derive(Clone, Debug)]
pub struct ReorderList<T> {
    elements: Vec<T>,
    drag: DragState<usize, usize>,
    config: ReorderConfig,
}

impl<T> Default for ReorderList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> FromIterator<T> for ReorderList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> ReorderList<T> {
    /// Wrap `elements` with the default configuration and no drag in progress.
    pub fn new(elements: Vec<T>) -> Self {
        Self::with_config(elements, ReorderConfig::default())
    }

    /// Wrap `elements` with an explicit configuration.
    pub fn with_config(elements: Vec<T>, config: ReorderConfig) -> Self {
        Self {
            elements,
            drag: DragState::new(),
            config,
        }
    }

    /// Elements in their current order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Consume the list and return its elements.
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Current drag state.
    pub fn drag_state(&self) -> &DragState<usize, usize> {
        &self.drag
    }

    /// Current configuration.
    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next input.
    pub fn set_config(&mut self, config: ReorderConfig) {
        self.config = config;
    }

    /// Route a message and apply any resulting move.
    ///
    /// [`ReorderMsg::Other`] is handed to `other` together with the elements.
    /// [`ReorderMsg::Drag`] goes through [`handle`](Self::handle).
    ///
    /// Returns the drag update so the host can apply the pointer-release
    /// listener change and observe the derived event.
    pub fn update<M, F>(&mut self, msg: ReorderMsg<M>, other: F) -> Update<usize, usize>
    where
        F: FnOnce(&mut Vec<T>, M),
    {
        match msg {
            ReorderMsg::Drag(input) => self.handle(input),
            ReorderMsg::Other(m) => {
                other(&mut self.elements, m);
                Update::default()
            }
        }
    }

    /// Feed one pointer interaction to the drag state.
    ///
    /// On a successful drop the dragged element is moved to the dropped gap.
    pub fn handle(&mut self, input: DragInput<usize, usize>) -> Update<usize, usize> {
        let update = self.drag.update(input, &self.config.drag);
        if let Some(DragEvent::SuccessfulDrop(drag, drop)) = update.event {
            let _changed = self.move_element(drag, drop);
            #[cfg(feature = "tracing")]
            tracing::debug!(drag, drop, changed = _changed, "reorder drop");
        }
        update
    }

    /// Move the element at `drag` to gap `drop`.
    ///
    /// See [`moves::move_element`](crate::moves::move_element) for the index
    /// semantics. Out-of-range indices leave the list unchanged.
    pub fn move_element(&mut self, drag: usize, drop: usize) -> bool {
        move_element(&mut self.elements, drag, drop)
    }

    /// True if gap `gap` is currently a drop target.
    ///
    /// Gaps are droppable only during a drag, and never directly before or
    /// after the dragged element since dropping there changes nothing.
    pub fn is_gap_active(&self, gap: usize) -> bool {
        match self.drag.dragged() {
            Some(&drag) => is_effective_drop(self.len(), drag, gap),
            None => false,
        }
    }

    /// Active gaps in ascending order.
    pub fn gaps(&self) -> impl Iterator<Item = usize> + '_ {
        (0..=self.len()).filter(move |&g| self.is_gap_active(g))
    }

    /// Handler bundle for the element at `index`.
    pub fn draggable(&self, index: usize) -> Bindings<usize, usize> {
        self.drag.draggable(index)
    }

    /// Handler bundle for gap `gap`. Empty for inactive gaps.
    pub fn droppable(&self, gap: usize) -> Bindings<usize, usize> {
        let bindings = self.drag.droppable(gap);
        if self.is_gap_active(gap) {
            bindings
        } else {
            bindings.masked(Handlers::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use understory_drag::{DragConfig, ReleaseListener};

    fn words() -> ReorderList<&'static str> {
        ReorderList::new(vec!["These", "are", "draggable"])
    }

    #[test]
    fn drop_after_second_element() {
        let mut list = words();
        list.handle(DragInput::StartDragging(0));
        list.handle(DragInput::EnterDroppable(2));
        let u = list.handle(DragInput::StopDragging);
        assert_eq!(u.event, Some(DragEvent::SuccessfulDrop(0, 2)));
        assert_eq!(u.release, Some(ReleaseListener::Unsubscribe));
        assert_eq!(list.elements(), ["are", "These", "draggable"]);
        assert!(!list.drag_state().is_dragging());
    }

    #[test]
    fn failed_drop_keeps_order() {
        let mut list = words();
        list.handle(DragInput::StartDragging(1));
        list.handle(DragInput::EnterDroppable(3));
        list.handle(DragInput::LeaveDroppable(3));
        let u = list.handle(DragInput::StopDragging);
        assert_eq!(u.event, Some(DragEvent::FailedDrop(1)));
        assert_eq!(list.elements(), ["These", "are", "draggable"]);
    }

    #[test]
    fn sticky_config_reaches_state() {
        let mut list = ReorderList::with_config(
            vec![1, 2, 3],
            ReorderConfig::default().with_sticky(true),
        );
        list.handle(DragInput::StartDragging(2));
        list.handle(DragInput::EnterDroppable(0));
        list.handle(DragInput::LeaveDroppable(0));
        list.handle(DragInput::StopDragging);
        assert_eq!(list.elements(), [3, 1, 2]);
        assert_eq!(list.config().drag, DragConfig::new().with_sticky(true));
    }

    // A stale drop onto a suppressed gap is still handled safely.
    #[test]
    fn drop_on_suppressed_gap_is_noop() {
        let mut list = words();
        list.handle(DragInput::StartDragging(1));
        list.handle(DragInput::EnterDroppable(2));
        let u = list.handle(DragInput::StopDragging);
        assert_eq!(u.event, Some(DragEvent::SuccessfulDrop(1, 2)));
        assert_eq!(list.elements(), ["These", "are", "draggable"]);
    }

    #[test]
    fn other_messages_reach_reducer() {
        let mut list = words();
        let u = list.update(ReorderMsg::Other("more"), |els, m| els.push(m));
        assert!(u.is_empty());
        assert_eq!(list.len(), 4);

        list.update(ReorderMsg::<()>::Drag(DragInput::StartDragging(3)), |_, ()| {});
        list.update(DragInput::EnterDroppable(0).into(), |_, ()| {});
        list.update(DragInput::StopDragging.into(), |_, ()| {});
        assert_eq!(list.elements(), ["more", "These", "are", "draggable"]);
    }

    #[test]
    fn gaps_suppressed_around_dragged_element() {
        let mut list = ReorderList::new(vec!['a', 'b', 'c', 'd']);
        assert_eq!(list.gaps().count(), 0);
        list.handle(DragInput::StartDragging(1));
        assert_eq!(list.gaps().collect::<Vec<_>>(), vec![0, 3, 4]);
        assert!(!list.is_gap_active(5));
        assert!(list.droppable(1).is_empty());
        assert!(!list.droppable(3).is_empty());
        assert!(list.draggable(0).is_empty());
    }

    #[test]
    fn from_iter_and_into_elements() {
        let list: ReorderList<u32> = (0..4).collect();
        assert_eq!(list.len(), 4);
        assert!(!list.is_empty());
        assert_eq!(list.into_elements(), vec![0, 1, 2, 3]);
        assert!(ReorderList::<u32>::default().is_empty());
    }
}
