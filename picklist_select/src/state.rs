// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction state record.

use alloc::string::String;

/// Interaction state of one control.
///
/// Open/closed and focused/unfocused are orthogonal: a control can be closed
/// but focused, or open while the input does not have focus (during a pointer
/// interaction with the menu).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractionState<O> {
    /// The menu is open. See [`View::is_open`](crate::View::is_open) for the
    /// flag a renderer should honor.
    pub is_open: bool,
    /// The text input has focus.
    pub is_focused: bool,
    /// Focused appearance without input focus, kept after a single-value
    /// commit closes the menu.
    pub is_pseudo_focused: bool,
    /// Current search text.
    pub input_value: String,
    /// Keyboard-focused option. Always a member of the visible options.
    pub focused_option: Option<O>,
    /// A value (or, after typing, search text) is present.
    pub has_value: bool,
    /// The value is required and still missing.
    pub required: bool,
}

impl<O> Default for InteractionState<O> {
    fn default() -> Self {
        Self {
            is_open: false,
            is_focused: false,
            is_pseudo_focused: false,
            input_value: String::new(),
            focused_option: None,
            has_value: false,
            required: false,
        }
    }
}
