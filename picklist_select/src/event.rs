// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inbound events.
//!
//! The host translates its native input into [`Event`]s and feeds them to
//! [`Select::handle`](crate::Select::handle) one at a time, in arrival order.
//! Pointer events name the innermost zone of the control that was hit; a zone
//! that does not handle a press passes it on to the control body the way an
//! unhandled DOM event bubbles.

use alloc::string::String;

use picklist_event_state::touch::TouchId;

/// Pointer button of a press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (usually left) button.
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Middle button.
    Auxiliary,
    /// Any other button.
    Other(u8),
}

/// The zone of the control a pointer press landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerTarget<O> {
    /// The control body outside any more specific zone.
    Control,
    /// The text input itself. Native focus handling takes care of it.
    Input,
    /// The dropdown arrow.
    Arrow,
    /// The open menu, outside any option row (for example its scrollbar).
    Menu,
    /// An option row in the menu.
    Option(O),
    /// The label of a selected value.
    Value(O),
    /// The remove affordance of a selected value.
    RemoveValue(O),
    /// The clear affordance.
    Clear,
}

/// The zone of the control a touch started on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TouchZone<O> {
    /// The control body.
    Control,
    /// The clear affordance.
    Clear,
    /// An option row in the menu.
    Option(O),
}

/// Keys the control reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Backspace.
    Backspace,
    /// Tab.
    Tab,
    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Forward delete.
    Delete,
    /// Anything else; left to the text input.
    Other,
}

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command.
        const META  = 0b0000_1000;
    }
}

/// A key press on the control.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key.
    pub key: Key,
    /// Modifiers held.
    pub modifiers: Modifiers,
    /// The host already handled this press (for example in its own key hook)
    /// and the control must ignore it.
    pub default_prevented: bool,
}

impl KeyEvent {
    /// A press of `key` without modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
            default_prevented: false,
        }
    }

    /// Builder-style modifier assignment.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Mark the press as already handled by the host.
    pub fn prevented(mut self) -> Self {
        self.default_prevented = true;
        self
    }

    /// Whether shift is held.
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// Scroll position of the menu.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top.
    pub scroll_top: f64,
    /// Full height of the scrolled content.
    pub scroll_height: f64,
    /// Height of the visible part of the menu.
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Whether the content overflows and is scrolled all the way down.
    pub fn at_bottom(&self) -> bool {
        self.scroll_height > self.client_height
            && self.scroll_top >= self.scroll_height - self.client_height
    }
}

/// One inbound event.
#[derive(Clone, Debug, PartialEq)]
pub enum Event<O> {
    /// A pointer button went down.
    PointerDown {
        /// Innermost zone hit.
        target: PointerTarget<O>,
        /// Button pressed.
        button: PointerButton,
    },
    /// A touch started on the control.
    TouchStart {
        /// Zone touched.
        zone: TouchZone<O>,
        /// Touch identifier; `None` for the primary touch.
        touch: Option<TouchId>,
    },
    /// A touch moved.
    TouchMove {
        /// Touch identifier; `None` for the primary touch.
        touch: Option<TouchId>,
    },
    /// A touch ended.
    TouchEnd {
        /// Touch identifier; `None` for the primary touch.
        touch: Option<TouchId>,
    },
    /// The platform aborted a touch (for example to start a scroll). The
    /// touch ends without acting.
    TouchCancel {
        /// Touch identifier; `None` for the primary touch.
        touch: Option<TouchId>,
    },
    /// A touch started outside the control. Delivered by the outside-touch
    /// listener while it is attached.
    TouchOutside,
    /// The text input gained focus.
    InputFocus,
    /// The text input lost focus.
    InputBlur,
    /// The text in the input changed.
    InputChange(String),
    /// A key was pressed while the control had focus.
    Key(KeyEvent),
    /// The pointer entered or moved over an option row.
    OptionHover(O),
    /// The menu scrolled.
    MenuScroll(ScrollMetrics),
}

impl<O> Event<O> {
    /// A primary-button press on `target`.
    pub fn press(target: PointerTarget<O>) -> Self {
        Self::PointerDown {
            target,
            button: PointerButton::Primary,
        }
    }

    /// A key press without modifiers.
    pub fn key(key: Key) -> Self {
        Self::Key(KeyEvent::new(key))
    }

    /// A text change.
    pub fn input(text: impl Into<String>) -> Self {
        Self::InputChange(text.into())
    }
}
