// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the drag state machine.
//!
//! 1. Any input sequence is accepted without panicking.
//! 2. Each update leaves exactly one consistent variant behind.
//! 3. Drop events pair with the preceding start, one per drag.
//! 4. The release listener is subscribed exactly while dragging.
//! 5. Handler bundles follow the variant.

use proptest::prelude::*;
use understory_drag::{
    DragConfig, DragEvent, DragInput, DragState, Handlers, ReleaseListener,
};

fn input_strategy() -> impl Strategy<Value = DragInput<u8, u8>> {
    prop_oneof![
        (0u8..6).prop_map(DragInput::EnterDraggable),
        (0u8..6).prop_map(DragInput::LeaveDraggable),
        (0u8..6).prop_map(DragInput::EnterDroppable),
        (0u8..6).prop_map(DragInput::LeaveDroppable),
        (0u8..6).prop_map(DragInput::StartDragging),
        Just(DragInput::StopDragging),
    ]
}

fn inputs() -> impl Strategy<Value = Vec<DragInput<u8, u8>>> {
    prop::collection::vec(input_strategy(), 0..64)
}

proptest! {
    #[test]
    fn variant_fields_stay_exclusive(seq in inputs(), sticky in any::<bool>()) {
        let config = DragConfig::new().with_sticky(sticky);
        let mut s: DragState<u8, u8> = DragState::new();
        for i in seq {
            s.update(i, &config);
            if s.is_dragging() {
                prop_assert!(s.hovered_draggable().is_none());
                prop_assert!(s.dragged().is_some());
            } else {
                prop_assert!(s.dragged().is_none());
                prop_assert!(s.hovered_droppable().is_none());
            }
        }
    }

    #[test]
    fn drops_follow_starts(seq in inputs(), sticky in any::<bool>()) {
        let config = DragConfig::new().with_sticky(sticky);
        let mut s: DragState<u8, u8> = DragState::new();
        let mut active: Option<u8> = None;
        for i in seq {
            let was_hover = s.hovered_droppable().copied();
            let u = s.update(i, &config);
            match u.event {
                Some(DragEvent::StartedDrag(d)) => {
                    prop_assert!(active.is_none());
                    active = Some(d);
                }
                Some(DragEvent::SuccessfulDrop(d, p)) => {
                    prop_assert_eq!(active.take(), Some(d));
                    prop_assert_eq!(was_hover, Some(p));
                }
                Some(DragEvent::FailedDrop(d)) => {
                    prop_assert_eq!(active.take(), Some(d));
                    prop_assert_eq!(was_hover, None);
                }
                None => {}
            }
            prop_assert_eq!(s.dragged().copied(), active);
        }
    }

    #[test]
    fn release_listener_balanced(seq in inputs()) {
        let config = DragConfig::new();
        let mut s: DragState<u8, u8> = DragState::new();
        let mut subscribed = false;
        for i in seq {
            match s.update(i, &config).release {
                Some(ReleaseListener::Subscribe) => {
                    prop_assert!(!subscribed);
                    subscribed = true;
                }
                Some(ReleaseListener::Unsubscribe) => {
                    prop_assert!(subscribed);
                    subscribed = false;
                }
                None => {}
            }
            prop_assert_eq!(subscribed, s.wants_pointer_release());
        }
    }

    #[test]
    fn bindings_follow_variant(seq in inputs(), id in 0u8..6) {
        let config = DragConfig::new();
        let mut s: DragState<u8, u8> = DragState::new();
        for i in seq {
            s.update(i, &config);
            let drag = s.draggable(id);
            let drop = s.droppable(id);
            if s.is_dragging() {
                prop_assert!(drag.is_empty());
                prop_assert_eq!(drop.handlers(), Handlers::ENTER | Handlers::LEAVE);
            } else {
                prop_assert_eq!(drag.handlers(), Handlers::all());
                prop_assert!(drop.is_empty());
            }
        }
    }

    // Sticky mode only ever keeps more hover than non-sticky mode.
    #[test]
    fn sticky_never_loses_a_drop(seq in inputs()) {
        let plain = DragConfig::new();
        let sticky = DragConfig::new().with_sticky(true);
        let mut a: DragState<u8, u8> = DragState::new();
        let mut b: DragState<u8, u8> = DragState::new();
        for i in seq {
            let ea = a.update(i, &plain).event;
            let eb = b.update(i, &sticky).event;
            if let Some(DragEvent::SuccessfulDrop(..)) = ea {
                prop_assert!(matches!(eb, Some(DragEvent::SuccessfulDrop(..))));
            }
        }
    }
}
