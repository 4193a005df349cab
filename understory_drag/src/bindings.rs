// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handler bundles for draggable and droppable elements.
//!
//! The view layer asks the state which pointer handlers to attach to each
//! element with [`DragState::draggable`] and [`DragState::droppable`].
//! A bundle is empty when the element cannot currently take part: draggable
//! elements stop listening while a drag is in progress, and droppable elements
//! only listen during a drag.
//!
//! When a wired pointer event fires, [`Bindings::input`] turns it into the
//! [`DragInput`] to feed back into [`DragState::update`].
//!
//! ```
//! use understory_drag::bindings::{Handlers, PointerKind};
//! use understory_drag::state::{DragConfig, DragInput, DragState};
//!
//! let config = DragConfig::default();
//! let mut s: DragState<&str, usize> = DragState::new();
//!
//! let item = s.draggable("apple");
//! assert_eq!(item.handlers(), Handlers::ENTER | Handlers::LEAVE | Handlers::DOWN);
//! assert!(s.droppable(0).is_empty());
//!
//! let input = item.input(PointerKind::Down).unwrap();
//! assert_eq!(input, DragInput::StartDragging("apple"));
//! s.update(input, &config);
//!
//! assert!(s.draggable("apple").is_empty());
//! assert_eq!(s.droppable(0).handlers(), Handlers::ENTER | Handlers::LEAVE);
//! ```

use crate::state::{DragInput, DragState};

bitflags::bitflags! {
    /// Pointer handlers an element should wire up.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Handlers: u8 {
        /// Pointer enters the element.
        const ENTER = 0b0000_0001;
        /// Pointer leaves the element.
        const LEAVE = 0b0000_0010;
        /// Pointer button goes down on the element.
        const DOWN  = 0b0000_0100;
    }
}

/// Raw pointer event kinds delivered by the view layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Pointer entered the element.
    Enter,
    /// Pointer left the element.
    Leave,
    /// Pointer button went down on the element.
    Down,
}

impl PointerKind {
    /// The handler flag that must be wired for this kind to be delivered.
    pub const fn handler(self) -> Handlers {
        match self {
            Self::Enter => Handlers::ENTER,
            Self::Leave => Handlers::LEAVE,
            Self::Down => Handlers::DOWN,
        }
    }
}

/// The element a [`Bindings`] bundle belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target<D, P> {
    /// A draggable item.
    Draggable(D),
    /// A drop target.
    Droppable(P),
}

/// Handlers to attach to one element, and the mapping from their pointer
/// events to [`DragInput`] values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bindings<D, P> {
    target: Target<D, P>,
    handlers: Handlers,
}

impl<D, P> Bindings<D, P> {
    /// Element this bundle belongs to.
    pub fn target(&self) -> &Target<D, P> {
        &self.target
    }

    /// Handlers to attach.
    pub fn handlers(&self) -> Handlers {
        self.handlers
    }

    /// True if nothing should be attached.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Keep only the handlers also present in `mask`.
    ///
    /// Surfaces that know more than the drag state (for example which drop
    /// targets would be no-ops) use this to switch handlers off.
    #[must_use]
    pub fn masked(mut self, mask: Handlers) -> Self {
        self.handlers &= mask;
        self
    }
}

impl<D: Clone, P: Clone> Bindings<D, P> {
    /// Translate a pointer event on this element into an interaction input.
    ///
    /// Returns `None` when the corresponding handler is not part of this
    /// bundle, for example a pointer-down on a drop target.
    pub fn input(&self, kind: PointerKind) -> Option<DragInput<D, P>> {
        if !self.handlers.contains(kind.handler()) {
            return None;
        }
        Some(match (&self.target, kind) {
            (Target::Draggable(d), PointerKind::Enter) => DragInput::EnterDraggable(d.clone()),
            (Target::Draggable(d), PointerKind::Leave) => DragInput::LeaveDraggable(d.clone()),
            (Target::Draggable(d), PointerKind::Down) => DragInput::StartDragging(d.clone()),
            (Target::Droppable(p), PointerKind::Enter) => DragInput::EnterDroppable(p.clone()),
            (Target::Droppable(p), PointerKind::Leave) => DragInput::LeaveDroppable(p.clone()),
            (Target::Droppable(_), PointerKind::Down) => return None,
        })
    }
}

impl<D, P> DragState<D, P> {
    /// Handlers for a draggable element.
    ///
    /// Enter, leave, and pointer-down while idle; empty while dragging.
    pub fn draggable(&self, id: D) -> Bindings<D, P> {
        let handlers = if self.is_dragging() {
            Handlers::empty()
        } else {
            Handlers::ENTER | Handlers::LEAVE | Handlers::DOWN
        };
        Bindings {
            target: Target::Draggable(id),
            handlers,
        }
    }

    /// Handlers for a droppable element.
    ///
    /// Enter and leave while dragging; empty while idle.
    pub fn droppable(&self, id: P) -> Bindings<D, P> {
        let handlers = if self.is_dragging() {
            Handlers::ENTER | Handlers::LEAVE
        } else {
            Handlers::empty()
        };
        Bindings {
            target: Target::Droppable(id),
            handlers,
        }
    }
}
