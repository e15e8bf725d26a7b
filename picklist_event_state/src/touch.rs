// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition for touch input.
//!
//! A touch is a tap when it ends without having moved. Any move between start
//! and end marks the touch as dragging (the user is scrolling the page or the
//! menu), and its end is suppressed.
//!
//! ```
//! use picklist_event_state::touch::{TapResult, TapState};
//!
//! let mut state: TapState<u32> = TapState::new();
//!
//! state.on_start(None, 7);
//! assert_eq!(state.on_move(None), Some(7));
//! // Only the first move reports the transition.
//! assert_eq!(state.on_move(None), None);
//! assert_eq!(state.on_end(None), TapResult::Suppressed(Some(7)));
//! ```
//!
//! Each touch identifier is tracked independently, so a second finger does
//! not affect the first:
//! ```
//! # use picklist_event_state::touch::{TapResult, TapState, TouchId};
//! let mut state: TapState<u32> = TapState::new();
//! let one = TouchId::new(1).unwrap();
//! let two = TouchId::new(2).unwrap();
//!
//! state.on_start(Some(one), 10);
//! state.on_start(Some(two), 20);
//! state.on_move(Some(two));
//!
//! assert_eq!(state.on_end(Some(one)), TapResult::Tap(10));
//! assert_eq!(state.on_end(Some(two)), TapResult::Suppressed(Some(20)));
//! ```

use alloc::collections::BTreeMap;
use core::num::NonZeroU64;

/// Touch identifier for tracking concurrent touches.
pub type TouchId = NonZeroU64;

const PRIMARY: TouchId = NonZeroU64::MIN;

/// Tap-versus-drag state machine.
#[derive(Clone, Debug)]
pub struct TapState<K> {
    touches: BTreeMap<TouchId, Touch<K>>,
}

/// State for an active touch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Touch<K> {
    /// Target the touch started on
    pub target: K,
    /// True once the touch has moved
    pub dragging: bool,
}

/// Result of a touch end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TapResult<K> {
    /// The touch was a tap on the specified target
    Tap(K),
    /// The touch was a drag, or there was no active touch. Contains the start
    /// target when there was one.
    Suppressed(Option<K>),
}

impl<K: Clone> TapState<K> {
    /// Create an empty state.
    pub fn new() -> Self {
        Self {
            touches: BTreeMap::new(),
        }
    }

    /// Record a touch start on `target`.
    ///
    /// `touch` defaults to the primary touch when `None`. Restarting a touch
    /// that is still active resets its dragging flag.
    pub fn on_start(&mut self, touch: Option<TouchId>, target: K) {
        self.touches.insert(
            touch.unwrap_or(PRIMARY),
            Touch {
                target,
                dragging: false,
            },
        );
    }

    /// Record a touch move.
    ///
    /// Returns `Some(target)` when this move newly marks the touch as
    /// dragging, `None` otherwise.
    pub fn on_move(&mut self, touch: Option<TouchId>) -> Option<K> {
        let active = self.touches.get_mut(&touch.unwrap_or(PRIMARY))?;
        if active.dragging {
            return None;
        }
        active.dragging = true;
        Some(active.target.clone())
    }

    /// Process a touch end and decide whether it was a tap.
    pub fn on_end(&mut self, touch: Option<TouchId>) -> TapResult<K> {
        match self.touches.remove(&touch.unwrap_or(PRIMARY)) {
            Some(Touch {
                target,
                dragging: false,
            }) => TapResult::Tap(target),
            Some(Touch { target, .. }) => TapResult::Suppressed(Some(target)),
            None => TapResult::Suppressed(None),
        }
    }

    /// Forget a touch without producing a result.
    ///
    /// Returns `true` if a touch was active.
    pub fn cancel(&mut self, touch: Option<TouchId>) -> bool {
        self.touches.remove(&touch.unwrap_or(PRIMARY)).is_some()
    }

    /// Forget all touches.
    pub fn clear(&mut self) {
        self.touches.clear();
    }
}

impl<K: Clone> Default for TapState<K> {
    fn default() -> Self {
        Self::new()
    }
}
