// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picklist Select: a headless combobox.
//!
//! [`Select`] is the interaction state machine behind a searchable dropdown
//! that picks one or many options. It owns no DOM, widget tree, or event loop:
//!
//! - The host translates native input into [`Event`]s (pointer presses
//!   resolved to a zone of the control, touches, focus changes, text changes,
//!   key presses, menu scrolls).
//! - [`Select::handle`] applies one event and returns a [`Response`]: the
//!   [`Effect`]s to carry out (report a value change, focus the input, attach
//!   the outside-touch listener, ...) and the [`EventFlags`] for the native
//!   event.
//! - [`Select::render`] walks a [`View`] snapshot through a host
//!   [`Renderer`].
//!
//! The caller owns the options and the value, and passes both in with every
//! event through [`Props`]. The control proposes value changes and adopts
//! whatever value the next props carry.
//!
//! Option records, value normalization, and filtering come from
//! [`picklist_model`]; list traversal comes from [`picklist_focus`]; touch and
//! outside-touch bookkeeping from [`picklist_event_state`].
//!
//! ## Minimal example
//!
//! ```rust
//! use picklist_model::{Choice, ChoiceAccessor, ExternalValue};
//! use picklist_select::{Effect, Event, Key, Props, Select, SelectConfig};
//!
//! let options = vec![Choice::new(1, "Apple"), Choice::new(2, "Banana"), Choice::new(3, "Cherry")];
//! let mut value = ExternalValue::Absent;
//!
//! let config = SelectConfig { simple_value: true, ..SelectConfig::default() };
//! let mut select = Select::new(config, ChoiceAccessor).unwrap();
//! select.mount(Props::new(&options, &value));
//!
//! // The user focuses the input, types "b", moves down, and hits Enter.
//! for event in [Event::InputFocus, Event::input("b"), Event::key(Key::ArrowDown)] {
//!     select.handle(Props::new(&options, &value), event);
//! }
//! let response = select.handle(Props::new(&options, &value), Event::key(Key::Enter));
//!
//! // Only "Banana" matched, so it is committed; the host stores the new value.
//! for effect in response.effects {
//!     if let Effect::Change(next) = effect {
//!         value = next;
//!     }
//! }
//! assert_eq!(value, ExternalValue::key(2));
//! assert!(!select.state().is_open);
//! ```
//!
//! ## Logging
//!
//! State transitions are reported through [`tracing`]: menu toggles and value
//! changes at `debug`, option recomputation and focus moves at `trace`.
//! Install any subscriber in the host to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod effect;
pub mod event;
pub mod render;
mod select;
pub mod state;

pub use config::{ConfigError, SelectConfig};
pub use effect::{Effect, EventFlags, Response};
pub use event::{
    Event, Key, KeyEvent, Modifiers, PointerButton, PointerTarget, ScrollMetrics, TouchZone,
};
pub use render::{Rendered, Renderer, View};
pub use select::{InputTransform, Props, Select};
pub use state::InteractionState;
