// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global pointer-release subscription.
//!
//! A drag must end when the pointer is released anywhere, not only over a
//! drop target. Hosts listen for that release globally, but only while a drag
//! is in progress.
//!
//! [`DragState::update`](crate::state::DragState::update) reports when that
//! listener should be attached or detached through [`Update::release`](crate::state::Update::release).
//! Implement [`ReleaseSource`] for your toolkit's listener and call
//! [`ReleaseListener::apply`], then feed each release back as
//! [`DragInput::StopDragging`](crate::state::DragInput::StopDragging).
//!
//! ```
//! use understory_drag::release::ReleaseSource;
//! use understory_drag::state::{DragConfig, DragInput, DragState};
//!
//! #[derive(Default)]
//! struct Window {
//!     listening: bool,
//! }
//!
//! impl ReleaseSource for Window {
//!     fn subscribe(&mut self) {
//!         self.listening = true;
//!     }
//!     fn unsubscribe(&mut self) {
//!         self.listening = false;
//!     }
//! }
//!
//! let config = DragConfig::default();
//! let mut window = Window::default();
//! let mut state: DragState<u32, u32> = DragState::new();
//!
//! let u = state.update(DragInput::StartDragging(0), &config);
//! u.apply_release(&mut window);
//! assert!(window.listening);
//!
//! let u = state.update(DragInput::StopDragging, &config);
//! u.apply_release(&mut window);
//! assert!(!window.listening);
//! ```

use crate::state::Update;

/// Change to the global pointer-release listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReleaseListener {
    /// A drag started; start listening for pointer release.
    Subscribe,
    /// A drag ended; stop listening.
    Unsubscribe,
}

/// Host-side pointer-release listener.
pub trait ReleaseSource {
    /// Begin delivering pointer-release notifications.
    fn subscribe(&mut self);
    /// Stop delivering pointer-release notifications.
    fn unsubscribe(&mut self);
}

impl ReleaseListener {
    /// Apply this change to `source`.
    pub fn apply<S: ReleaseSource + ?Sized>(self, source: &mut S) {
        match self {
            Self::Subscribe => source.subscribe(),
            Self::Unsubscribe => source.unsubscribe(),
        }
    }
}

impl<D, P> Update<D, P> {
    /// Apply the listener change carried by this update, if any.
    pub fn apply_release<S: ReleaseSource + ?Sized>(&self, source: &mut S) {
        if let Some(change) = self.release {
            change.apply(source);
        }
    }
}
