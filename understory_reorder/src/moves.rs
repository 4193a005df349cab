// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index-based move algorithm.
//!
//! A move takes an element index `drag` and a gap index `drop`. Gap `g` is the
//! insertion point before the element currently at `g`; gap `len` is the end
//! of the list. Both indices refer to the list *before* the move.
//!
//! ```
//! use understory_reorder::moves::move_element;
//!
//! let mut v = ["a", "b", "c"];
//! assert!(move_element(&mut v, 0, 2));
//! assert_eq!(v, ["b", "a", "c"]);
//!
//! // Gap `len` appends.
//! let mut v = ["a", "b", "c"];
//! assert!(move_element(&mut v, 0, 3));
//! assert_eq!(v, ["b", "c", "a"]);
//! ```

/// Move the element at `drag` to the gap `drop`.
///
/// - `drop == drag` and `drop == drag + 1` are the gaps on either side of the
///   element itself, so they leave the order unchanged.
/// - Dragging upwards (`drag > drop`) places the element at `drop`.
/// - Dragging downwards (`drag < drop`) places the element just before the
///   element that was at `drop`, which after removal is index `drop - 1`.
///   `drop == len` appends.
///
/// Out-of-range indices (`drag >= len` or `drop > len`) leave the slice
/// untouched. Returns `true` if the order changed.
pub fn move_element<T>(items: &mut [T], drag: usize, drop: usize) -> bool {
    let len = items.len();
    if drag >= len || drop > len || drag == drop || drag + 1 == drop {
        return false;
    }
    if drag > drop {
        // Removing a later index does not shift `drop`.
        items[drop..=drag].rotate_right(1);
    } else {
        // Everything between the old slot and the gap shifts back by one.
        items[drag..drop].rotate_left(1);
    }
    true
}

/// Index the dragged element occupies after [`move_element`].
///
/// Returns `None` for out-of-range input, and `Some(drag)` for the no-op gaps.
pub fn landing_index(len: usize, drag: usize, drop: usize) -> Option<usize> {
    if drag >= len || drop > len {
        return None;
    }
    Some(if drop > drag + 1 {
        drop - 1
    } else if drop < drag {
        drop
    } else {
        drag
    })
}

/// True if dropping element `drag` onto gap `drop` would change the order.
///
/// The gaps directly before and after the dragged element are no-ops; views
/// should not offer them as drop targets.
pub fn is_effective_drop(len: usize, drag: usize, drop: usize) -> bool {
    drag < len && drop <= len && drop != drag && drop != drag + 1
}
