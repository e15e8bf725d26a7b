// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render snapshots.
//!
//! The control draws nothing itself. [`View`] is a borrowed snapshot of what
//! should be on screen, and [`render`] walks it through a host-supplied
//! [`Renderer`] that turns each part into the host's own node type.
//!
//! ```
//! use picklist_model::{Choice, ChoiceAccessor, ExternalValue};
//! use picklist_select::render::{
//!     ArrowSnapshot, ClearSnapshot, MenuContent, MenuSnapshot, RowSnapshot,
//! };
//! use picklist_select::{Event, Key, Props, Renderer, Select, SelectConfig};
//!
//! struct Text;
//!
//! impl Renderer<Choice> for Text {
//!     type Output = String;
//!
//!     fn row(&mut self, row: &RowSnapshot<'_, Choice>) -> String {
//!         let marker = if row.is_focused { ">" } else { " " };
//!         format!("{marker}{}", row.label)
//!     }
//!
//!     fn arrow(&mut self, arrow: ArrowSnapshot) -> String {
//!         if arrow.is_open { "^".into() } else { "v".into() }
//!     }
//!
//!     fn clear(&mut self, clear: ClearSnapshot<'_>) -> String {
//!         clear.title.into()
//!     }
//!
//!     fn menu(&mut self, menu: MenuSnapshot<'_, String>) -> String {
//!         match menu.content {
//!             MenuContent::Rows(rows) => rows.join("\n"),
//!             MenuContent::NoResults(text) => text.into(),
//!         }
//!     }
//! }
//!
//! let options = vec![Choice::new(1, "One"), Choice::new(2, "Two")];
//! let value = ExternalValue::Absent;
//! let props = Props::new(&options, &value);
//! let mut select = Select::new(SelectConfig::default(), ChoiceAccessor).unwrap();
//! select.handle(props, Event::key(Key::ArrowDown));
//!
//! let rendered = select.render(&mut Text);
//! assert_eq!(rendered.menu.as_deref(), Some(">One\n Two"));
//! assert_eq!(rendered.arrow.as_deref(), Some("^"));
//! assert_eq!(rendered.clear, None);
//! ```

use alloc::borrow::Cow;
use alloc::vec::Vec;

use picklist_model::Accessor;

use crate::config::SelectConfig;
use crate::state::InteractionState;

/// Borrowed snapshot of a control for rendering.
#[derive(Debug)]
pub struct View<'a, O> {
    /// The interaction state.
    pub state: &'a InteractionState<O>,
    /// Whether the menu is shown. Unlike
    /// [`InteractionState::is_open`], this is `false` for a multi-value
    /// control that has nothing left to offer.
    pub is_open: bool,
    /// Options eligible for display, in order.
    pub visible: &'a [O],
    /// The selected options, in order.
    pub selected: &'a [O],
    /// The configuration.
    pub config: &'a SelectConfig,
}

impl<O> Clone for View<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for View<'_, O> {}

impl<O> View<'_, O> {
    /// Whether the placeholder text should be shown.
    pub fn shows_placeholder(&self) -> bool {
        self.selected.is_empty() && self.state.input_value.is_empty()
    }

    /// Whether the clear affordance should be shown.
    pub fn is_clearable(&self) -> bool {
        self.config.clearable && !self.selected.is_empty() && !self.config.disabled
    }
}

/// One option row.
#[derive(Debug)]
pub struct RowSnapshot<'a, O> {
    /// The option.
    pub option: &'a O,
    /// Display label.
    pub label: Cow<'a, str>,
    /// Position among the visible options.
    pub index: usize,
    /// The option is the current value. Only ever set in single mode; a
    /// multi-value control does not list its selected options.
    pub is_selected: bool,
    /// The option has keyboard focus.
    pub is_focused: bool,
    /// The option is disabled.
    pub is_disabled: bool,
}

/// The dropdown arrow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrowSnapshot {
    /// Whether the menu is shown.
    pub is_open: bool,
}

/// The clear affordance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClearSnapshot<'a> {
    /// Title for the affordance.
    pub title: &'a str,
}

/// What the menu lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuContent<'a, T> {
    /// Rendered rows, in order.
    Rows(Vec<T>),
    /// Nothing matched; carries the placeholder text.
    NoResults(&'a str),
}

/// The open menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuSnapshot<'a, T> {
    /// Rows or the no-results placeholder.
    pub content: MenuContent<'a, T>,
    /// Index of the focused row, for scrolling it into view.
    pub focused_index: Option<usize>,
}

/// Turns snapshots into host nodes.
pub trait Renderer<O> {
    /// The host's node type.
    type Output;

    /// Render one option row.
    fn row(&mut self, row: &RowSnapshot<'_, O>) -> Self::Output;

    /// Render the dropdown arrow.
    fn arrow(&mut self, arrow: ArrowSnapshot) -> Self::Output;

    /// Render the clear affordance.
    fn clear(&mut self, clear: ClearSnapshot<'_>) -> Self::Output;

    /// Wrap the rendered rows into a menu.
    fn menu(&mut self, menu: MenuSnapshot<'_, Self::Output>) -> Self::Output;
}

/// Output of [`render`]; each part is `None` when it is not shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered<T> {
    /// The menu.
    pub menu: Option<T>,
    /// The dropdown arrow.
    pub arrow: Option<T>,
    /// The clear affordance.
    pub clear: Option<T>,
}

/// Render `view` with `renderer`.
///
/// The menu is rendered only while [`View::is_open`] holds, and is omitted
/// entirely when nothing matches and there is no no-results text.
pub fn render<O, A, R>(view: &View<'_, O>, accessor: &A, renderer: &mut R) -> Rendered<R::Output>
where
    O: PartialEq,
    A: Accessor<O> + ?Sized,
    R: Renderer<O> + ?Sized,
{
    let menu = if view.is_open {
        render_menu(view, accessor, renderer)
    } else {
        None
    };
    let arrow = (!view.config.hide_arrow).then(|| {
        renderer.arrow(ArrowSnapshot {
            is_open: view.is_open,
        })
    });
    let clear = view.is_clearable().then(|| {
        renderer.clear(ClearSnapshot {
            title: view.config.clear_title(),
        })
    });
    Rendered { menu, arrow, clear }
}

fn render_menu<O, A, R>(view: &View<'_, O>, accessor: &A, renderer: &mut R) -> Option<R::Output>
where
    O: PartialEq,
    A: Accessor<O> + ?Sized,
    R: Renderer<O> + ?Sized,
{
    let focused = view.state.focused_option.as_ref();
    let mut focused_index = None;

    let content = if view.visible.is_empty() {
        MenuContent::NoResults(view.config.no_results_text.as_deref()?)
    } else {
        let rows = view
            .visible
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let is_focused = focused.is_some_and(|f| accessor.same(option, f));
                if is_focused {
                    focused_index = Some(index);
                }
                let is_selected =
                    !view.config.multi && view.selected.iter().any(|s| accessor.same(s, option));
                renderer.row(&RowSnapshot {
                    option,
                    label: accessor.label(option),
                    index,
                    is_selected,
                    is_focused,
                    is_disabled: accessor.disabled(option),
                })
            })
            .collect();
        MenuContent::Rows(rows)
    };

    Some(renderer.menu(MenuSnapshot {
        content,
        focused_index,
    }))
}
