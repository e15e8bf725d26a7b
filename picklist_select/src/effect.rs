// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outbound effects.
//!
//! Handling an event never calls back into the host. Instead it returns a
//! [`Response`]: the side effects the host should carry out, in order, plus
//! the [`EventFlags`] to apply to the native event that triggered them.

use alloc::vec::Vec;

use picklist_event_state::outside::Subscription;
use picklist_model::ExternalValue;
use smallvec::SmallVec;

bitflags::bitflags! {
    /// What to do with the native event after handling.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventFlags: u8 {
        /// Do not deliver the event to enclosing handlers.
        const STOP_PROPAGATION = 0b0000_0001;
        /// Suppress the event's default action.
        const PREVENT_DEFAULT  = 0b0000_0010;
    }
}

/// A side effect requested by the control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect<O> {
    /// The value changed; carries the new external representation.
    Change(ExternalValue<O>),
    /// The menu opened.
    Opened,
    /// The menu closed.
    Closed,
    /// Attach or detach the outside-touch listener.
    OutsideTouch(Subscription),
    /// Move keyboard focus to the text input.
    FocusInput,
    /// Take keyboard focus away from the text input.
    BlurInput,
    /// The control gained focus.
    Focused,
    /// The control lost focus.
    Blurred,
    /// A selected value was clicked.
    ValueClicked(O),
    /// The menu was scrolled to its bottom.
    MenuScrolledToBottom,
}

/// Result of handling one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response<O> {
    /// Effects in the order they occurred.
    pub effects: SmallVec<[Effect<O>; 4]>,
    /// Flags for the native event.
    pub flags: EventFlags,
}

impl<O> Default for Response<O> {
    fn default() -> Self {
        Self {
            effects: SmallVec::new(),
            flags: EventFlags::empty(),
        }
    }
}

impl<O> Response<O> {
    /// An empty response.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, effect: Effect<O>) {
        self.effects.push(effect);
    }

    pub(crate) fn stop_propagation(&mut self) {
        self.flags |= EventFlags::STOP_PROPAGATION;
    }

    pub(crate) fn prevent_default(&mut self) {
        self.flags |= EventFlags::PREVENT_DEFAULT;
    }

    /// Whether enclosing handlers should not see the event.
    pub fn is_propagation_stopped(&self) -> bool {
        self.flags.contains(EventFlags::STOP_PROPAGATION)
    }

    /// Whether the event's default action should be suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.flags.contains(EventFlags::PREVENT_DEFAULT)
    }

    /// Whether nothing happened.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.flags.is_empty()
    }

    /// Values reported by [`Effect::Change`], in order.
    pub fn changes(&self) -> impl Iterator<Item = &ExternalValue<O>> {
        self.effects.iter().filter_map(|e| match e {
            Effect::Change(value) => Some(value),
            _ => None,
        })
    }

    /// Whether `effect` was requested.
    pub fn contains(&self, effect: &Effect<O>) -> bool
    where
        O: PartialEq,
    {
        self.effects.contains(effect)
    }

    /// Take the effects, leaving the response empty.
    pub fn drain(&mut self) -> Vec<Effect<O>> {
        self.effects.drain(..).collect()
    }
}
