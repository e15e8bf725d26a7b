// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picklist Event State: small pointer and touch state machines for combobox
//! controls.
//!
//! A combobox sees raw touch start/move/end notifications and has to decide
//! which of them are taps. It also needs to know when a touch lands outside the
//! control while its menu is open. Neither concern depends on layout or hit
//! testing, so both are modeled here as plain state:
//!
//! - [`touch::TapState`] tells taps from drags. A touch that moves before it
//!   ends is a scroll or drag and never activates its target.
//! - [`outside::OutsideTouch`] tracks the document-level subscription that
//!   observes touches outside the control, and reports when the host should
//!   attach or detach it.
//!
//! ## Minimal example
//!
//! ```rust
//! use picklist_event_state::outside::{OutsideTouch, Subscription};
//! use picklist_event_state::touch::{TapResult, TapState};
//!
//! let mut taps: TapState<&str> = TapState::new();
//! taps.on_start(None, "control");
//! assert_eq!(taps.on_end(None), TapResult::Tap("control"));
//!
//! let mut outside = OutsideTouch::new();
//! assert_eq!(outside.sync(true), Some(Subscription::Attach));
//! assert_eq!(outside.sync(true), None);
//! assert_eq!(outside.sync(false), Some(Subscription::Detach));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod outside;
pub mod touch;
