// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state machine: hover, drag, and drop tracking.
//!
//! ## Overview
//!
//! [`DragState`] is always in exactly one of two variants:
//!
//! - [`DragState::NotDragging`]: idle, with at most one hovered draggable.
//! - [`DragState::Dragging`]: one item is being dragged, with at most one hovered droppable.
//!
//! Feed it [`DragInput`] values with [`DragState::update`].
//! Each call returns an [`Update`] carrying the derived [`DragEvent`] (if any) and the
//! [`ReleaseListener`] change (if any) the host should apply.
//!
//! ## Minimal example
//!
//! ```
//! use understory_drag::state::{DragConfig, DragEvent, DragInput, DragState};
//!
//! let config = DragConfig::default();
//! let mut s: DragState<u32, u32> = DragState::new();
//!
//! let started = s.update(DragInput::StartDragging(1), &config);
//! assert_eq!(started.event, Some(DragEvent::StartedDrag(1)));
//!
//! s.update(DragInput::EnterDroppable(7), &config);
//! let dropped = s.update(DragInput::StopDragging, &config);
//! assert_eq!(dropped.event, Some(DragEvent::SuccessfulDrop(1, 7)));
//! assert!(!s.is_dragging());
//! ```

use core::fmt::Debug;
use core::mem;

use crate::release::ReleaseListener;

/// Interaction state for one drag-and-drop surface.
///
/// `D` identifies draggable items and `P` identifies drop targets. The two
/// may be the same type; they are kept apart because a surface often drags
/// items onto something other than items (for example insertion gaps).
///
/// The idle hover and the drag fields live in different variants, so a state
/// can never carry a dragged id and an idle hover at the same time.
///
/// Queries only need `PartialEq` ids. [`DragState::update`] additionally
/// requires `Debug` on both id types, with or without the `tracing` feature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragState<D, P> {
    /// Nothing is being dragged.
    NotDragging {
        /// Draggable item currently under the pointer.
        hover: Option<D>,
    },
    /// An item is being dragged.
    Dragging {
        /// The item being dragged.
        drag: D,
        /// Drop target currently under the pointer.
        hover: Option<P>,
    },
}

impl<D, P> Default for DragState<D, P> {
    fn default() -> Self {
        Self::NotDragging { hover: None }
    }
}

/// Inbound interaction events.
///
/// These are delivered one at a time by the host, usually from the handlers
/// described by [`Bindings`](crate::bindings::Bindings).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragInput<D, P> {
    /// Pointer entered a draggable item.
    EnterDraggable(D),
    /// Pointer left a draggable item.
    LeaveDraggable(D),
    /// Pointer entered a drop target.
    EnterDroppable(P),
    /// Pointer left a drop target.
    LeaveDroppable(P),
    /// Pointer went down on a draggable item.
    StartDragging(D),
    /// Pointer was released anywhere.
    StopDragging,
}

/// High-level events derived from a transition.
///
/// Produced only by [`DragState::update`]; never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragEvent<D, P> {
    /// A drag started on the given item.
    StartedDrag(D),
    /// The dragged item was released over a drop target.
    SuccessfulDrop(D, P),
    /// The dragged item was released with no drop target hovered.
    FailedDrop(D),
}

impl<D, P> DragEvent<D, P> {
    /// The dragged item this event refers to.
    pub fn drag_id(&self) -> &D {
        match self {
            Self::StartedDrag(d) | Self::SuccessfulDrop(d, _) | Self::FailedDrop(d) => d,
        }
    }
}

/// Drag behavior configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DragConfig {
    /// Keep the hovered drop target after the pointer leaves it.
    ///
    /// When set, a release still counts as a successful drop onto the last
    /// drop target entered, even if a leave for that target arrived first.
    /// This absorbs out-of-order enter/leave delivery near element edges.
    /// Entering another drop target still replaces the hover.
    pub sticky: bool,
}

impl DragConfig {
    /// Default configuration: not sticky.
    pub const fn new() -> Self {
        Self { sticky: false }
    }

    /// Set sticky drop hover.
    #[must_use]
    pub const fn with_sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }
}

/// Result of a single [`DragState::update`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Update<D, P> {
    /// Derived drag event, if the transition produced one.
    pub event: Option<DragEvent<D, P>>,
    /// Change to the global pointer-release listener, if the transition
    /// entered or left [`DragState::Dragging`].
    pub release: Option<ReleaseListener>,
}

impl<D, P> Default for Update<D, P> {
    fn default() -> Self {
        Self {
            event: None,
            release: None,
        }
    }
}

impl<D, P> Update<D, P> {
    /// True if the transition produced neither an event nor a listener change.
    pub fn is_empty(&self) -> bool {
        self.event.is_none() && self.release.is_none()
    }
}

impl<D, P> DragState<D, P> {
    /// Create an idle state with nothing hovered.
    pub const fn new() -> Self {
        Self::NotDragging { hover: None }
    }

    /// True while an item is being dragged.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The item being dragged, if any.
    pub fn dragged(&self) -> Option<&D> {
        match self {
            Self::Dragging { drag, .. } => Some(drag),
            Self::NotDragging { .. } => None,
        }
    }

    /// The hovered draggable item. Always `None` while dragging.
    pub fn hovered_draggable(&self) -> Option<&D> {
        match self {
            Self::NotDragging { hover } => hover.as_ref(),
            Self::Dragging { .. } => None,
        }
    }

    /// The hovered drop target. Always `None` while idle.
    pub fn hovered_droppable(&self) -> Option<&P> {
        match self {
            Self::Dragging { hover, .. } => hover.as_ref(),
            Self::NotDragging { .. } => None,
        }
    }

    /// True while dragging and the global pointer-release listener is needed.
    pub fn wants_pointer_release(&self) -> bool {
        self.is_dragging()
    }
}

impl<D: PartialEq, P: PartialEq> DragState<D, P> {
    /// True if `id` is the item being dragged.
    pub fn is_dragging_id(&self, id: &D) -> bool {
        self.dragged() == Some(id)
    }

    /// True if idle and `id` is the hovered draggable item.
    pub fn is_hovering_draggable_id(&self, id: &D) -> bool {
        self.hovered_draggable() == Some(id)
    }

    /// True if dragging and `id` is the hovered drop target.
    pub fn is_hovering_droppable_id(&self, id: &P) -> bool {
        self.hovered_droppable() == Some(id)
    }
}

impl<D: Clone + PartialEq + Debug, P: PartialEq + Debug> DragState<D, P> {
    /// Apply one input and return the derived event and listener change.
    ///
    /// This is total: inputs that do not apply to the current variant (for
    /// example a drop-target enter while idle, a start while already dragging,
    /// or a leave for an id that is not the hovered one) leave the state
    /// unchanged and return an empty [`Update`].
    ///
    /// Ids must be `Debug` so transitions can be logged under the `tracing`
    /// feature.
    pub fn update(&mut self, input: DragInput<D, P>, config: &DragConfig) -> Update<D, P> {
        #[cfg(feature = "tracing")]
        tracing::trace!(?input, state = ?self, "drag input");

        match input {
            DragInput::EnterDraggable(id) => {
                if let Self::NotDragging { hover } = self {
                    *hover = Some(id);
                } else {
                    Self::ignored("enter draggable while dragging");
                }
                Update::default()
            }
            DragInput::LeaveDraggable(id) => {
                match self {
                    Self::NotDragging { hover } if hover.as_ref() == Some(&id) => *hover = None,
                    _ => Self::ignored("stale draggable leave"),
                }
                Update::default()
            }
            DragInput::EnterDroppable(id) => {
                if let Self::Dragging { hover, .. } = self {
                    *hover = Some(id);
                } else {
                    Self::ignored("enter droppable while idle");
                }
                Update::default()
            }
            DragInput::LeaveDroppable(id) => {
                match self {
                    Self::Dragging { hover, .. } if !config.sticky && hover.as_ref() == Some(&id) => {
                        *hover = None;
                    }
                    _ => Self::ignored("droppable leave kept"),
                }
                Update::default()
            }
            DragInput::StartDragging(id) => {
                if self.is_dragging() {
                    Self::ignored("start while dragging");
                    return Update::default();
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(drag = ?id, "started drag");
                *self = Self::Dragging {
                    drag: id.clone(),
                    hover: None,
                };
                Update {
                    event: Some(DragEvent::StartedDrag(id)),
                    release: Some(ReleaseListener::Subscribe),
                }
            }
            DragInput::StopDragging => match mem::take(self) {
                Self::NotDragging { .. } => Update::default(),
                Self::Dragging { drag, hover } => {
                    let event = match hover {
                        Some(drop) => {
                            #[cfg(feature = "tracing")]
                            tracing::debug!(?drag, ?drop, "successful drop");
                            DragEvent::SuccessfulDrop(drag, drop)
                        }
                        None => {
                            #[cfg(feature = "tracing")]
                            tracing::debug!(?drag, "failed drop");
                            DragEvent::FailedDrop(drag)
                        }
                    };
                    Update {
                        event: Some(event),
                        release: Some(ReleaseListener::Unsubscribe),
                    }
                }
            },
        }
    }

    #[inline]
    fn ignored(_reason: &'static str) {
        #[cfg(feature = "tracing")]
        tracing::trace!(reason = _reason, "drag input ignored");
    }
}
