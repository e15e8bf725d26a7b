// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle of the outside-touch subscription.
//!
//! While a combobox menu is open on a touch device, the host listens for
//! touches anywhere in the document so that a touch outside the control can
//! close the menu. The listener must exist exactly while the menu is open and
//! must be released when the control is torn down.
//!
//! [`OutsideTouch`] holds only whether the listener is attached; the host
//! performs the actual attach or detach when asked.

/// A change the host should make to its outside-touch listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Subscription {
    /// Start observing touches outside the control.
    Attach,
    /// Stop observing.
    Detach,
}

/// Tracks whether the outside-touch listener is attached.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OutsideTouch {
    attached: bool,
}

impl OutsideTouch {
    /// Create a detached tracker.
    pub const fn new() -> Self {
        Self { attached: false }
    }

    /// Bring the listener in line with the menu's open state.
    ///
    /// Returns the change to apply, or `None` when the listener is already in
    /// the right state.
    pub fn sync(&mut self, open: bool) -> Option<Subscription> {
        if open == self.attached {
            return None;
        }
        self.attached = open;
        Some(if open {
            Subscription::Attach
        } else {
            Subscription::Detach
        })
    }

    /// Release the listener on teardown, if attached.
    pub fn release(&mut self) -> Option<Subscription> {
        self.sync(false)
    }

    /// Whether the listener is currently attached.
    pub const fn is_attached(&self) -> bool {
        self.attached
    }
}
