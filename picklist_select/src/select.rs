// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction state machine.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use picklist_event_state::outside::OutsideTouch;
use picklist_event_state::touch::{TapResult, TapState, TouchId};
use picklist_focus::{FocusEntry, FocusPolicy, FocusSpace, ListPolicy, Navigation};
use picklist_model::{
    Accessor, CustomFilter, ExternalValue, FilterConfig, FilterStrategy, OptionPredicate, commit,
    filter, pop, remove, reset, to_external, to_internal,
};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::{ConfigError, SelectConfig};
use crate::effect::{Effect, Response};
use crate::event::{Event, Key, KeyEvent, PointerButton, PointerTarget, TouchZone};
use crate::render::{Rendered, Renderer, View, render};
use crate::state::InteractionState;

/// What the caller owns: the option list and the current value.
///
/// Both are supplied again with every event, so they may change freely between
/// events (for example when results arrive asynchronously).
#[derive(Debug)]
pub struct Props<'a, O> {
    /// All options, in display order.
    pub options: &'a [O],
    /// The current value.
    pub value: &'a ExternalValue<O>,
}

impl<O> Clone for Props<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for Props<'_, O> {}

impl<'a, O> Props<'a, O> {
    /// Bundle the caller's options and value.
    pub fn new(options: &'a [O], value: &'a ExternalValue<O>) -> Self {
        Self { options, value }
    }
}

/// Hook run on every search-text change. A `Some` return replaces the text
/// that is stored.
pub type InputTransform = dyn FnMut(&str) -> Option<String>;

enum InstalledFilter<O> {
    Default,
    Predicate(Box<OptionPredicate<O>>),
    Custom(Box<CustomFilter<O>>),
}

impl<O> InstalledFilter<O> {
    fn name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Predicate(_) => "Predicate",
            Self::Custom(_) => "Custom",
        }
    }
}

/// A headless combobox.
///
/// `Select` owns the [`InteractionState`] and everything needed to react to
/// events: the pending-open flag set by a body press, the touch tracker, and
/// the outside-touch listener guard. The caller owns the options and the
/// value and passes them in through [`Props`].
///
/// Each call to [`handle`](Self::handle) processes one [`Event`] and returns a
/// [`Response`] listing the effects to carry out. A value change is reported
/// with [`Effect::Change`]; the control does not assume the caller accepts
/// it, and uses whatever value the next [`Props`] carry.
///
/// ```
/// use picklist_model::{Choice, ChoiceAccessor, ExternalValue};
/// use picklist_select::{Effect, Event, Key, Props, Select, SelectConfig};
///
/// let options = vec![Choice::new(1, "One"), Choice::new(2, "Two")];
/// let value = ExternalValue::Absent;
/// let props = Props::new(&options, &value);
///
/// let mut select = Select::new(SelectConfig::default(), ChoiceAccessor).unwrap();
/// select.mount(props);
///
/// // Down on a closed control opens the menu and focuses the first option.
/// let response = select.handle(props, Event::key(Key::ArrowDown));
/// assert!(response.contains(&Effect::Opened));
/// assert_eq!(select.state().focused_option, Some(options[0].clone()));
/// ```
pub struct Select<O, A> {
    config: SelectConfig,
    accessor: A,
    state: InteractionState<O>,
    selected: Vec<O>,
    visible: Vec<O>,
    focus_hint: Option<O>,
    open_after_focus: bool,
    taps: TapState<TouchZone<O>>,
    outside: OutsideTouch,
    filter: InstalledFilter<O>,
    input_transform: Option<Box<InputTransform>>,
    reset_value: Option<ExternalValue<O>>,
}

impl<O: fmt::Debug, A: fmt::Debug> fmt::Debug for Select<O, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("config", &self.config)
            .field("accessor", &self.accessor)
            .field("state", &self.state)
            .field("selected", &self.selected)
            .field("visible", &self.visible)
            .field("focus_hint", &self.focus_hint)
            .field("open_after_focus", &self.open_after_focus)
            .field("taps", &self.taps)
            .field("outside", &self.outside)
            .field("filter", &self.filter.name())
            .field("input_transform", &self.input_transform.is_some())
            .field("reset_value", &self.reset_value)
            .finish()
    }
}

impl<O, A> Select<O, A>
where
    O: Clone + PartialEq,
    A: Accessor<O>,
{
    /// Create a control.
    ///
    /// Fails when the configuration does not validate.
    pub fn new(config: SelectConfig, accessor: A) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            accessor,
            state: InteractionState::default(),
            selected: Vec::new(),
            visible: Vec::new(),
            focus_hint: None,
            open_after_focus: false,
            taps: TapState::new(),
            outside: OutsideTouch::new(),
            filter: InstalledFilter::Default,
            input_transform: None,
            reset_value: None,
        })
    }

    /// Replace the whole filter pipeline. The function receives the options,
    /// the search text, the options to exclude, and the matching settings.
    pub fn with_filter(
        mut self,
        filter: impl Fn(&[O], &str, &[O], &FilterConfig) -> Vec<O> + 'static,
    ) -> Self {
        self.filter = InstalledFilter::Custom(Box::new(filter));
        self
    }

    /// Decide per option whether it matches, instead of the built-in text
    /// match. Selected options are still excluded first. The predicate gets
    /// the search text after case folding.
    pub fn with_option_filter(mut self, predicate: impl Fn(&O, &str) -> bool + 'static) -> Self {
        self.filter = InstalledFilter::Predicate(Box::new(predicate));
        self
    }

    /// Install a hook run on every search-text change; see [`InputTransform`].
    pub fn with_input_transform(
        mut self,
        transform: impl FnMut(&str) -> Option<String> + 'static,
    ) -> Self {
        self.input_transform = Some(Box::new(transform));
        self
    }

    /// Value reported when the control is cleared. Defaults to an empty list
    /// in multi mode and to no value in single mode.
    pub fn with_reset_value(mut self, value: ExternalValue<O>) -> Self {
        self.reset_value = Some(value);
        self
    }

    /// The configuration.
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// The accessor.
    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    /// The interaction state.
    pub fn state(&self) -> &InteractionState<O> {
        &self.state
    }

    /// Options currently eligible for display and keyboard focus.
    pub fn visible_options(&self) -> &[O] {
        &self.visible
    }

    /// The selected options, in order.
    pub fn selected(&self) -> &[O] {
        &self.selected
    }

    /// Whether the menu should be shown.
    ///
    /// A multi-value control with nothing left to offer and no search text
    /// renders closed even while [`InteractionState::is_open`] is set.
    pub fn is_open(&self) -> bool {
        self.state.is_open
            && !(self.config.multi
                && self.visible.is_empty()
                && !self.selected.is_empty()
                && self.state.input_value.is_empty())
    }

    /// Read-only snapshot for rendering.
    pub fn view(&self) -> View<'_, O> {
        View {
            state: &self.state,
            is_open: self.is_open(),
            visible: &self.visible,
            selected: &self.selected,
            config: &self.config,
        }
    }

    /// Render the current state with `renderer`.
    pub fn render<R>(&self, renderer: &mut R) -> Rendered<R::Output>
    where
        R: Renderer<O> + ?Sized,
    {
        render(&self.view(), &self.accessor, renderer)
    }

    /// First sight of the caller's props. Requests input focus when
    /// `autofocus` is set.
    pub fn mount(&mut self, props: Props<'_, O>) -> Response<O> {
        self.receive(props);
        let mut out = Response::new();
        if self.config.autofocus && !self.config.disabled {
            out.push(Effect::FocusInput);
        }
        out
    }

    /// Take in new props outside of any event.
    pub fn receive(&mut self, props: Props<'_, O>) {
        self.sync_value(props);
        self.refresh(props.options);
    }

    /// Replace the configuration.
    ///
    /// Toggling `disabled` drops focus and closes the menu.
    pub fn set_config(
        &mut self,
        config: SelectConfig,
        props: Props<'_, O>,
    ) -> Result<Response<O>, ConfigError> {
        config.validate()?;
        let toggled = config.disabled != self.config.disabled;
        self.config = config;
        let mut out = Response::new();
        self.sync_value(props);
        if toggled {
            debug!(disabled = self.config.disabled, "disabled toggled");
            self.state.is_focused = false;
            self.close_menu(&mut out);
        }
        self.refresh(props.options);
        Ok(out)
    }

    /// Release everything held on behalf of the host. Detaches the
    /// outside-touch listener if it is attached.
    pub fn teardown(&mut self) -> Response<O> {
        let mut out = Response::new();
        self.taps.clear();
        self.open_after_focus = false;
        if let Some(change) = self.outside.release() {
            out.push(Effect::OutsideTouch(change));
        }
        out
    }

    /// Process one event.
    pub fn handle(&mut self, props: Props<'_, O>, event: Event<O>) -> Response<O> {
        let mut out = Response::new();
        self.sync_value(props);
        self.refresh(props.options);

        match event {
            Event::PointerDown { target, button } => {
                self.on_pointer_down(props, target, button, &mut out);
            }
            Event::TouchStart { zone, touch } => self.taps.on_start(touch, zone),
            Event::TouchMove { touch } => {
                if self.taps.on_move(touch).is_some() {
                    trace!("touch became a drag");
                }
            }
            Event::TouchEnd { touch } => self.on_touch_end(props, touch, &mut out),
            Event::TouchCancel { touch } => {
                if self.taps.cancel(touch) {
                    trace!("touch cancelled");
                }
            }
            Event::TouchOutside => {
                if self.outside.is_attached() {
                    self.close_menu(&mut out);
                }
            }
            Event::InputFocus => self.on_input_focus(&mut out),
            Event::InputBlur => self.on_input_blur(&mut out),
            Event::InputChange(text) => self.on_input_change(text, &mut out),
            Event::Key(key) => self.on_key(props, key, &mut out),
            Event::OptionHover(option) => self.on_option_hover(&option),
            Event::MenuScroll(metrics) => {
                if metrics.at_bottom() {
                    out.push(Effect::MenuScrolledToBottom);
                }
            }
        }

        self.refresh(props.options);
        out
    }

    fn sync_value(&mut self, props: Props<'_, O>) {
        let selected = to_internal(
            props.value,
            props.options,
            &self.accessor,
            &self.config.value_mode(),
        );
        // Typed text drives `has_value` until the value itself moves.
        if selected != self.selected {
            self.state.has_value = props.value.is_valid();
            self.selected = selected;
        }
        if self.config.required {
            self.state.required = !props.value.is_valid();
        }
    }

    fn strategy(&self) -> FilterStrategy<'_, O> {
        if !self.config.filter_options {
            return FilterStrategy::Disabled;
        }
        match &self.filter {
            InstalledFilter::Default => FilterStrategy::Default,
            InstalledFilter::Predicate(predicate) => FilterStrategy::Predicate(predicate.as_ref()),
            InstalledFilter::Custom(custom) => FilterStrategy::Custom(custom.as_ref()),
        }
    }

    /// Recompute the visible options and re-derive the focused one.
    fn refresh(&mut self, options: &[O]) {
        let excluded: &[O] = if self.config.multi { &self.selected } else { &[] };
        let visible = filter(
            options,
            &self.state.input_value,
            excluded,
            &self.config.filter_config(),
            &self.accessor,
            self.strategy(),
        );
        self.visible = visible;
        self.state.focused_option = self.derive_focus();
        trace!(visible = self.visible.len(), "options recomputed");
    }

    /// The requested focus (or else the first selected option) if it is still
    /// visible and enabled, otherwise the first enabled visible option.
    fn derive_focus(&self) -> Option<O> {
        let accessor = &self.accessor;
        let preferred = self
            .focus_hint
            .as_ref()
            .or_else(|| self.selected.first())
            .filter(|p| !accessor.disabled(p));
        if let Some(preferred) = preferred {
            if let Some(found) = self.visible.iter().find(|o| accessor.same(o, preferred)) {
                return Some(found.clone());
            }
        }
        self.visible.iter().find(|o| !accessor.disabled(o)).cloned()
    }

    fn focus_option(&mut self, option: O) {
        self.focus_hint = Some(option.clone());
        self.state.focused_option = Some(option);
    }

    fn set_open(&mut self, open: bool, out: &mut Response<O>) {
        if self.state.is_open == open {
            return;
        }
        self.state.is_open = open;
        out.push(if open { Effect::Opened } else { Effect::Closed });
        if let Some(change) = self.outside.sync(open) {
            out.push(Effect::OutsideTouch(change));
        }
        debug!(open, "menu toggled");
    }

    fn close_menu(&mut self, out: &mut Response<O>) {
        self.state.is_pseudo_focused = self.state.is_focused && !self.config.multi;
        self.set_open(false, out);
        if self.config.on_close_resets_input {
            self.state.input_value.clear();
        }
    }

    /// Report `external` as the new value and adopt it.
    fn set_value(
        &mut self,
        props: Props<'_, O>,
        external: ExternalValue<O>,
        out: &mut Response<O>,
    ) {
        if self.config.auto_blur {
            out.push(Effect::BlurInput);
        }
        if self.config.required {
            self.state.required = !external.is_valid();
        }
        self.state.has_value = external.is_valid();
        self.selected = to_internal(
            &external,
            props.options,
            &self.accessor,
            &self.config.value_mode(),
        );
        out.push(Effect::Change(external));
    }

    fn set_selection(&mut self, props: Props<'_, O>, selection: &[O], out: &mut Response<O>) {
        let external = to_external(selection, &self.accessor, &self.config.value_mode());
        self.set_value(props, external, out);
    }

    fn select_value(&mut self, props: Props<'_, O>, option: O, out: &mut Response<O>) {
        if self.accessor.disabled(&option) {
            return;
        }
        debug!(label = %self.accessor.label(&option), "value committed");
        if self.config.multi {
            // The text clears before the value grows; adjacent focus is taken
            // from the list as it stands in between.
            self.state.input_value.clear();
            self.refresh(props.options);
            let adjacent = self.adjacent_after_commit(&option);
            let selection = commit(&self.selected, option, true);
            self.set_selection(props, &selection, out);
            self.focus_hint = adjacent;
        } else {
            self.set_open(false, out);
            self.state.input_value.clear();
            self.state.is_pseudo_focused = self.state.is_focused;
            let selection = commit(&self.selected, option, false);
            self.set_selection(props, &selection, out);
        }
    }

    /// Option to focus after `committed` joins a multi value: the next enabled
    /// visible option, or the previous one when `committed` was the last.
    fn adjacent_after_commit(&self, committed: &O) -> Option<O> {
        let enabled: SmallVec<[&O; 16]> = self
            .visible
            .iter()
            .filter(|o| !self.accessor.disabled(o))
            .collect();
        let adjacent = match enabled.iter().position(|o| self.accessor.same(o, committed)) {
            Some(i) if i + 1 == enabled.len() => i.checked_sub(1).map(|p| enabled[p]),
            Some(i) => Some(enabled[i + 1]),
            None => enabled.first().copied(),
        };
        adjacent.cloned()
    }

    fn select_focused(&mut self, props: Props<'_, O>, out: &mut Response<O>) {
        if let Some(option) = self.state.focused_option.clone() {
            self.select_value(props, option, out);
        }
    }

    fn pop_value(&mut self, props: Props<'_, O>, out: &mut Response<O>) {
        if let Some(selection) = pop(&self.selected, &self.accessor) {
            debug!(remaining = selection.len(), "last value removed");
            self.set_selection(props, &selection, out);
        }
    }

    fn remove_value(&mut self, props: Props<'_, O>, option: &O, out: &mut Response<O>) {
        debug!(label = %self.accessor.label(option), "value removed");
        let selection = remove(&self.selected, option, &self.accessor);
        self.set_selection(props, &selection, out);
        out.push(Effect::FocusInput);
    }

    fn clear_value(&mut self, props: Props<'_, O>, out: &mut Response<O>) {
        out.stop_propagation();
        out.prevent_default();
        let external = reset(
            self.reset_value.as_ref(),
            &self.accessor,
            &self.config.value_mode(),
        );
        debug!("value cleared");
        self.set_value(props, external, out);
        self.set_open(false, out);
        self.state.input_value.clear();
        out.push(Effect::FocusInput);
    }

    fn focus_entries(&self) -> SmallVec<[FocusEntry<usize>; 16]> {
        self.visible
            .iter()
            .enumerate()
            .map(|(id, o)| FocusEntry {
                id,
                enabled: !self.accessor.disabled(o),
            })
            .collect()
    }

    fn focus_adjacent(
        &mut self,
        props: Props<'_, O>,
        direction: Navigation,
        out: &mut Response<O>,
    ) {
        let policy = ListPolicy::with_page_size(self.config.page_size);

        if !self.state.is_open {
            self.set_open(true, out);
            self.state.input_value.clear();
            self.refresh(props.options);
            let entries = self.focus_entries();
            if let Some(index) = policy.seed(direction, &FocusSpace { nodes: &entries }) {
                let option = self.visible[index].clone();
                self.focus_option(option);
            }
            return;
        }

        let entries = self.focus_entries();
        let origin = self
            .state
            .focused_option
            .as_ref()
            .and_then(|f| self.visible.iter().position(|o| self.accessor.same(o, f)));
        if let Some(index) = policy.next(origin, direction, &FocusSpace { nodes: &entries }) {
            trace!(?direction, index, "focus moved");
            let option = self.visible[index].clone();
            self.focus_option(option);
        }
    }

    /// A press on the control body.
    fn press_control(&mut self, out: &mut Response<O>) {
        if self.config.disabled {
            return;
        }
        out.stop_propagation();
        out.prevent_default();

        if !self.config.searchable {
            out.push(Effect::FocusInput);
            let open = !self.state.is_open;
            self.set_open(open, out);
            return;
        }

        if self.state.is_focused {
            out.push(Effect::FocusInput);
            self.state.input_value.clear();
            self.set_open(true, out);
            self.state.is_pseudo_focused = false;
        } else {
            // Opening waits for the focus event the host reports next.
            self.open_after_focus = true;
            out.push(Effect::FocusInput);
        }
    }

    fn on_pointer_down(
        &mut self,
        props: Props<'_, O>,
        target: PointerTarget<O>,
        button: PointerButton,
        out: &mut Response<O>,
    ) {
        if button != PointerButton::Primary || self.config.disabled {
            return;
        }
        match target {
            PointerTarget::Input => {}
            PointerTarget::Control => self.press_control(out),
            PointerTarget::Value(value) => {
                if self.config.report_value_clicks && (self.config.multi || !self.is_open()) {
                    out.stop_propagation();
                    out.push(Effect::ValueClicked(value));
                } else {
                    self.press_control(out);
                }
            }
            PointerTarget::RemoveValue(value) => {
                if self.accessor.clearable_value(&value) == Some(false) {
                    return;
                }
                out.stop_propagation();
                out.prevent_default();
                self.remove_value(props, &value, out);
            }
            PointerTarget::Arrow => {
                if self.state.is_open {
                    out.stop_propagation();
                    out.prevent_default();
                    self.close_menu(out);
                } else {
                    self.press_control(out);
                }
            }
            PointerTarget::Menu => {
                out.stop_propagation();
                out.prevent_default();
                self.open_after_focus = true;
                out.push(Effect::FocusInput);
            }
            PointerTarget::Option(option) => {
                out.stop_propagation();
                out.prevent_default();
                self.select_value(props, option, out);
            }
            PointerTarget::Clear => self.clear_value(props, out),
        }
    }

    fn on_touch_end(&mut self, props: Props<'_, O>, touch: Option<TouchId>, out: &mut Response<O>) {
        match self.taps.on_end(touch) {
            TapResult::Tap(_) if self.config.disabled => {}
            TapResult::Tap(TouchZone::Control) => self.press_control(out),
            TapResult::Tap(TouchZone::Clear) => self.clear_value(props, out),
            TapResult::Tap(TouchZone::Option(option)) => {
                out.stop_propagation();
                out.prevent_default();
                self.select_value(props, option, out);
            }
            TapResult::Suppressed(_) => trace!("touch ended as a drag"),
        }
    }

    fn on_input_focus(&mut self, out: &mut Response<O>) {
        if self.config.disabled {
            return;
        }
        let open = self.state.is_open || self.open_after_focus || self.config.open_on_focus;
        out.push(Effect::Focused);
        self.state.is_focused = true;
        self.set_open(open, out);
        self.open_after_focus = false;
    }

    fn on_input_blur(&mut self, out: &mut Response<O>) {
        out.push(Effect::Blurred);
        self.state.is_focused = false;
        self.set_open(false, out);
        self.state.is_pseudo_focused = false;
        if self.config.on_blur_resets_input {
            self.state.input_value.clear();
        }
    }

    fn on_input_change(&mut self, text: String, out: &mut Response<O>) {
        if self.config.disabled {
            return;
        }
        let replaced = if text == self.state.input_value {
            None
        } else {
            self.input_transform
                .as_mut()
                .and_then(|transform| transform(&text))
        };
        let text = replaced.unwrap_or(text);
        self.state.has_value = !text.is_empty();
        self.state.input_value = text;
        self.set_open(true, out);
        self.state.is_pseudo_focused = false;
    }

    fn on_key(&mut self, props: Props<'_, O>, key: KeyEvent, out: &mut Response<O>) {
        if self.config.disabled || key.default_prevented {
            return;
        }
        let direction = match key.key {
            Key::Backspace | Key::Delete => {
                let removes = if key.key == Key::Backspace {
                    self.config.backspace_removes
                } else {
                    self.config.delete_removes
                };
                if removes && self.state.input_value.is_empty() {
                    out.prevent_default();
                    self.pop_value(props, out);
                }
                return;
            }
            Key::Tab => {
                if !key.shift() && self.state.is_open && self.config.tab_selects_value {
                    self.select_focused(props, out);
                }
                return;
            }
            Key::Enter => {
                if !self.state.is_open {
                    return;
                }
                out.stop_propagation();
                self.select_focused(props, out);
                out.prevent_default();
                return;
            }
            Key::Escape => {
                if self.state.is_open {
                    self.close_menu(out);
                    out.stop_propagation();
                } else if self.config.clearable && self.config.escape_clears_value {
                    self.clear_value(props, out);
                }
                out.prevent_default();
                return;
            }
            Key::ArrowUp => Navigation::Prev,
            Key::ArrowDown => Navigation::Next,
            Key::PageUp => Navigation::PageUp,
            Key::PageDown => Navigation::PageDown,
            Key::Home | Key::End if key.shift() => return,
            Key::Home => Navigation::Start,
            Key::End => Navigation::End,
            Key::Other => return,
        };
        self.focus_adjacent(props, direction, out);
        out.prevent_default();
    }

    fn on_option_hover(&mut self, option: &O) {
        if self.accessor.disabled(option) {
            return;
        }
        if let Some(found) = self.visible.iter().find(|o| self.accessor.same(o, option)) {
            let found = found.clone();
            self.focus_option(found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::EventFlags;
    use crate::event::{Modifiers, ScrollMetrics};
    use alloc::vec;
    use picklist_event_state::outside::Subscription;
    use picklist_model::{Choice, ChoiceAccessor};

    fn abc() -> Vec<Choice> {
        vec![Choice::new(1, "A"), Choice::new(2, "B"), Choice::new(3, "C")]
    }

    /// Drives a control the way a host that accepts every change would.
    struct Host {
        select: Select<Choice, ChoiceAccessor>,
        options: Vec<Choice>,
        value: ExternalValue<Choice>,
    }

    impl Host {
        fn new(config: SelectConfig, value: ExternalValue<Choice>) -> Self {
            Self::with(Select::new(config, ChoiceAccessor).unwrap(), value)
        }

        fn with(mut select: Select<Choice, ChoiceAccessor>, value: ExternalValue<Choice>) -> Self {
            let options = abc();
            select.mount(Props::new(&options, &value));
            Self {
                select,
                options,
                value,
            }
        }

        fn send(&mut self, event: Event<Choice>) -> Response<Choice> {
            let response = self
                .select
                .handle(Props::new(&self.options, &self.value), event);
            if let Some(value) = response.changes().last() {
                self.value = value.clone();
                self.select.receive(Props::new(&self.options, &self.value));
            }
            response
        }

        fn key(&mut self, key: Key) -> Response<Choice> {
            self.send(Event::key(key))
        }

        /// Focus the input through a body press, which opens the menu.
        fn open(&mut self) {
            self.send(Event::press(PointerTarget::Control));
            self.send(Event::InputFocus);
            assert!(self.state().is_open, "menu did not open");
        }

        fn state(&self) -> &InteractionState<Choice> {
            self.select.state()
        }

        fn focused(&self) -> Option<&str> {
            self.state().focused_option.as_ref().map(|o| o.label.as_str())
        }
    }

    fn multi() -> SelectConfig {
        SelectConfig {
            multi: true,
            ..SelectConfig::default()
        }
    }

    #[test]
    fn typing_then_down_and_enter_commits_the_focused_option() {
        let mut host = Host::new(
            SelectConfig {
                simple_value: true,
                ..SelectConfig::default()
            },
            ExternalValue::Absent,
        );
        host.send(Event::InputFocus);
        host.send(Event::input("b"));
        assert_eq!(host.select.visible_options(), &host.options[1..2]);

        host.key(Key::ArrowDown);
        assert_eq!(host.focused(), Some("B"));

        let response = host.key(Key::Enter);
        assert_eq!(
            response.changes().collect::<Vec<_>>(),
            [&ExternalValue::<Choice>::key(2)]
        );
        assert_eq!(
            response.flags,
            EventFlags::STOP_PROPAGATION | EventFlags::PREVENT_DEFAULT
        );
        assert!(!host.state().is_open);
        assert!(host.state().is_pseudo_focused);
        assert!(host.state().input_value.is_empty());
    }

    #[test]
    fn enter_while_closed_is_a_no_op() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.send(Event::InputFocus);
        let response = host.key(Key::Enter);
        assert!(response.is_empty());
        assert_eq!(host.value, ExternalValue::Absent);
    }

    #[test]
    fn multi_commit_focuses_the_next_visible_option() {
        let options = abc();
        let mut host = Host::new(multi(), ExternalValue::records([options[0].clone()]));
        host.send(Event::InputFocus);
        host.key(Key::ArrowDown);
        assert_eq!(host.select.visible_options(), &options[1..]);
        assert_eq!(host.focused(), Some("B"));

        let response = host.key(Key::Enter);
        assert_eq!(
            response.changes().collect::<Vec<_>>(),
            [&ExternalValue::records([options[0].clone(), options[1].clone()])]
        );
        assert!(host.state().is_open);
        assert_eq!(host.focused(), Some("C"));
        assert_eq!(host.select.visible_options(), &options[2..]);
    }

    #[test]
    fn multi_commit_of_the_last_option_focuses_the_previous_one() {
        let options = abc();
        let mut host = Host::new(multi(), ExternalValue::Absent);
        host.send(Event::InputFocus);
        // End on a closed menu opens it on the last option.
        host.key(Key::End);
        assert_eq!(host.focused(), Some("C"));

        host.key(Key::Enter);
        assert_eq!(host.value, ExternalValue::records([options[2].clone()]));
        assert_eq!(host.focused(), Some("B"));
    }

    #[test]
    fn multi_commit_clears_search_text_and_stays_open() {
        let mut host = Host::new(multi(), ExternalValue::Absent);
        host.open();
        host.send(Event::input("a"));
        assert_eq!(host.focused(), Some("A"));
        host.key(Key::Enter);
        assert!(host.state().input_value.is_empty());
        assert!(host.state().is_open);
        // Adjacent focus was taken from the cleared, not yet extended, list.
        assert_eq!(host.focused(), Some("B"));
    }

    #[test]
    fn backspace_pops_the_last_value() {
        let options = abc();
        let mut host = Host::new(
            multi(),
            ExternalValue::records([options[0].clone(), options[1].clone()]),
        );
        let response = host.key(Key::Backspace);
        assert_eq!(host.value, ExternalValue::records([options[0].clone()]));
        assert!(response.is_default_prevented());

        // Not while there is search text.
        host.send(Event::input("c"));
        assert!(host.key(Key::Backspace).is_empty());
        assert_eq!(host.value, ExternalValue::records([options[0].clone()]));
    }

    #[test]
    fn pinned_values_survive_backspace_and_delete() {
        let pinned = Choice::new(9, "Pinned").with_clearable_value(false);
        let mut host = Host::new(multi(), ExternalValue::records([pinned.clone()]));
        let response = host.key(Key::Backspace);
        assert_eq!(response.changes().count(), 0);
        assert!(response.is_default_prevented());
        host.key(Key::Delete);
        assert_eq!(host.value, ExternalValue::records([pinned]));
    }

    #[test]
    fn delete_respects_its_own_flag() {
        let options = abc();
        let mut host = Host::new(
            SelectConfig {
                delete_removes: false,
                ..multi()
            },
            ExternalValue::records([options[0].clone()]),
        );
        assert!(host.key(Key::Delete).is_empty());
        assert_eq!(host.key(Key::Backspace).changes().count(), 1);
    }

    #[test]
    fn escape_on_closed_menu_clears_to_the_reset_value() {
        let mut single = Host::new(SelectConfig::default(), ExternalValue::Absent);
        let response = single.key(Key::Escape);
        assert_eq!(
            response.changes().collect::<Vec<_>>(),
            [&ExternalValue::<Choice>::Absent]
        );
        assert!(response.is_propagation_stopped());
        assert!(response.contains(&Effect::FocusInput));

        let options = abc();
        let mut many = Host::new(multi(), ExternalValue::records([options[1].clone()]));
        many.key(Key::Escape);
        assert_eq!(many.value, ExternalValue::Many(Vec::new()));

        let select = Select::new(SelectConfig::default(), ChoiceAccessor)
            .unwrap()
            .with_reset_value(ExternalValue::key(""));
        let mut custom = Host::with(select, ExternalValue::key(1));
        custom.key(Key::Escape);
        assert_eq!(custom.value, ExternalValue::key(""));
    }

    #[test]
    fn escape_closes_an_open_menu_before_clearing() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::key(2));
        host.open();
        let response = host.key(Key::Escape);
        assert!(response.contains(&Effect::Closed));
        assert_eq!(response.changes().count(), 0);
        assert!(response.is_propagation_stopped());
        assert_eq!(host.value, ExternalValue::key(2));

        let unclearable = SelectConfig {
            clearable: false,
            ..SelectConfig::default()
        };
        let mut host = Host::new(unclearable, ExternalValue::key(2));
        let response = host.key(Key::Escape);
        assert_eq!(response.flags, EventFlags::PREVENT_DEFAULT);
        assert_eq!(host.value, ExternalValue::key(2));
    }

    #[test]
    fn closed_navigation_opens_and_seeds_without_moving() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.send(Event::InputFocus);
        let response = host.key(Key::ArrowUp);
        assert!(response.contains(&Effect::Opened));
        assert!(response.is_default_prevented());
        assert_eq!(host.focused(), Some("C"));

        host.key(Key::ArrowUp);
        assert_eq!(host.focused(), Some("B"));
        host.key(Key::ArrowDown);
        host.key(Key::ArrowDown);
        assert_eq!(host.focused(), Some("A"));
    }

    #[test]
    fn paging_and_home_end() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.open();
        assert_eq!(host.focused(), Some("A"));
        host.key(Key::PageDown);
        assert_eq!(host.focused(), Some("C"));
        host.key(Key::PageUp);
        assert_eq!(host.focused(), Some("A"));
        host.key(Key::End);
        assert_eq!(host.focused(), Some("C"));

        let shifted = host.send(Event::Key(
            KeyEvent::new(Key::Home).with_modifiers(Modifiers::SHIFT),
        ));
        assert!(shifted.is_empty());
        assert_eq!(host.focused(), Some("C"));
        host.key(Key::Home);
        assert_eq!(host.focused(), Some("A"));
    }

    #[test]
    fn tab_commits_only_while_open_and_unshifted() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.send(Event::InputFocus);
        assert!(host.key(Key::Tab).is_empty());

        host.open();
        let shift_tab = host.send(Event::Key(
            KeyEvent::new(Key::Tab).with_modifiers(Modifiers::SHIFT),
        ));
        assert_eq!(shift_tab.changes().count(), 0);

        let tab = host.key(Key::Tab);
        assert_eq!(tab.changes().count(), 1);
        // Tab keeps its native behavior.
        assert!(tab.flags.is_empty());
    }

    #[test]
    fn host_handled_keys_are_ignored() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.open();
        let response = host.send(Event::Key(KeyEvent::new(Key::Enter).prevented()));
        assert!(response.is_empty());
        assert!(host.state().is_open);
    }

    #[test]
    fn body_press_defers_opening_until_focus() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        let press = host.send(Event::press(PointerTarget::Control));
        assert!(press.contains(&Effect::FocusInput));
        assert!(!host.state().is_open);

        let focus = host.send(Event::InputFocus);
        assert!(focus.contains(&Effect::Focused));
        assert!(focus.contains(&Effect::Opened));

        // The pending open is consumed once.
        host.send(Event::InputBlur);
        let refocus = host.send(Event::InputFocus);
        assert!(!refocus.contains(&Effect::Opened));
    }

    #[test]
    fn body_press_while_focused_opens_and_drops_pseudo_focus() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.open();
        host.key(Key::Enter);
        assert!(host.state().is_pseudo_focused);
        assert!(!host.state().is_open);

        host.send(Event::press(PointerTarget::Control));
        assert!(host.state().is_open);
        assert!(!host.state().is_pseudo_focused);
    }

    #[test]
    fn non_searchable_press_toggles() {
        let mut host = Host::new(
            SelectConfig {
                searchable: false,
                ..SelectConfig::default()
            },
            ExternalValue::Absent,
        );
        let first = host.send(Event::press(PointerTarget::Control));
        assert!(first.contains(&Effect::Opened));
        let second = host.send(Event::press(PointerTarget::Control));
        assert!(second.contains(&Effect::Closed));
    }

    #[test]
    fn open_on_focus() {
        let mut host = Host::new(
            SelectConfig {
                open_on_focus: true,
                ..SelectConfig::default()
            },
            ExternalValue::Absent,
        );
        assert!(host.send(Event::InputFocus).contains(&Effect::Opened));
    }

    #[test]
    fn arrow_closes_when_open_and_bubbles_when_closed() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.open();
        let close = host.send(Event::press(PointerTarget::Arrow));
        assert!(close.contains(&Effect::Closed));
        assert!(close.is_propagation_stopped());

        let reopen = host.send(Event::press(PointerTarget::Arrow));
        assert!(reopen.contains(&Effect::Opened));
    }

    #[test]
    fn menu_press_refocuses_without_closing() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.open();
        let response = host.send(Event::press(PointerTarget::Menu));
        assert!(response.contains(&Effect::FocusInput));
        assert!(!response.contains(&Effect::Closed));
        assert!(host.state().is_open);
    }

    #[test]
    fn non_primary_presses_are_ignored() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        let response = host.send(Event::PointerDown {
            target: PointerTarget::Control,
            button: PointerButton::Secondary,
        });
        assert!(response.is_empty());
    }

    #[test]
    fn option_press_and_hover() {
        let options = abc();
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.open();
        host.send(Event::OptionHover(options[2].clone()));
        assert_eq!(host.focused(), Some("C"));

        let response = host.send(Event::press(PointerTarget::Option(options[1].clone())));
        assert!(response.is_propagation_stopped());
        assert_eq!(host.value, ExternalValue::record(options[1].clone()));
    }

    #[test]
    fn disabled_options_cannot_be_focused_or_committed() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.options[0] = Choice::new(1, "A").disabled();
        host.open();
        assert_eq!(host.focused(), Some("B"));

        let disabled = host.options[0].clone();
        host.send(Event::OptionHover(disabled.clone()));
        assert_eq!(host.focused(), Some("B"));
        let response = host.send(Event::press(PointerTarget::Option(disabled)));
        assert_eq!(response.changes().count(), 0);
        assert!(host.state().is_open);

        host.key(Key::ArrowUp);
        assert_eq!(host.focused(), Some("C"));
    }

    #[test]
    fn focus_is_rederived_when_options_change() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.open();
        host.key(Key::ArrowDown);
        assert_eq!(host.focused(), Some("B"));

        host.options.remove(1);
        host.select
            .receive(Props::new(&host.options, &host.value));
        assert_eq!(host.focused(), Some("A"));

        host.options.clear();
        host.select
            .receive(Props::new(&host.options, &host.value));
        assert_eq!(host.focused(), None);
        // Navigating an empty list changes nothing.
        let response = host.key(Key::ArrowDown);
        assert_eq!(response.flags, EventFlags::PREVENT_DEFAULT);
        assert_eq!(host.focused(), None);
    }

    #[test]
    fn opening_focuses_the_selected_option() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::key(3));
        host.open();
        assert_eq!(host.focused(), Some("C"));
    }

    #[test]
    fn remove_value_affordance() {
        let options = abc();
        let mut host = Host::new(
            multi(),
            ExternalValue::records([options[0].clone(), options[1].clone()]),
        );
        let response = host.send(Event::press(PointerTarget::RemoveValue(options[0].clone())));
        assert_eq!(host.value, ExternalValue::records([options[1].clone()]));
        assert!(response.contains(&Effect::FocusInput));

        let pinned = Choice::new(9, "Pinned").with_clearable_value(false);
        host.value = ExternalValue::records([pinned.clone()]);
        let response = host.send(Event::press(PointerTarget::RemoveValue(pinned)));
        assert!(response.is_empty());
    }

    #[test]
    fn clear_press_resets_closes_and_refocuses() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::key(1));
        host.open();
        host.send(Event::input("x"));
        let response = host.send(Event::press(PointerTarget::Clear));
        assert_eq!(host.value, ExternalValue::Absent);
        assert!(response.contains(&Effect::Closed));
        assert!(response.contains(&Effect::FocusInput));
        assert!(host.state().input_value.is_empty());
    }

    #[test]
    fn outside_touch_listener_follows_the_menu() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.send(Event::press(PointerTarget::Control));
        let opened = host.send(Event::InputFocus);
        assert!(opened.contains(&Effect::OutsideTouch(Subscription::Attach)));

        let closed = host.send(Event::TouchOutside);
        assert!(closed.contains(&Effect::Closed));
        assert!(closed.contains(&Effect::OutsideTouch(Subscription::Detach)));
        // A stray notification after detaching does nothing.
        assert!(host.send(Event::TouchOutside).is_empty());

        host.key(Key::ArrowDown);
        let teardown = host.select.teardown();
        assert_eq!(
            teardown.effects.as_slice(),
            [Effect::<Choice>::OutsideTouch(Subscription::Detach)]
        );
        assert!(host.select.teardown().is_empty());
    }

    #[test]
    fn touch_taps_act_and_drags_do_not() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::key(1));
        host.send(Event::TouchStart {
            zone: TouchZone::Control,
            touch: None,
        });
        host.send(Event::TouchMove { touch: None });
        assert!(host.send(Event::TouchEnd { touch: None }).is_empty());

        host.send(Event::TouchStart {
            zone: TouchZone::Control,
            touch: None,
        });
        let tap = host.send(Event::TouchEnd { touch: None });
        assert!(tap.contains(&Effect::FocusInput));

        host.send(Event::TouchStart {
            zone: TouchZone::Clear,
            touch: None,
        });
        host.send(Event::TouchEnd { touch: None });
        assert_eq!(host.value, ExternalValue::Absent);
    }

    #[test]
    fn typed_text_keeps_has_value_across_events() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.send(Event::InputFocus);
        host.send(Event::input("b"));
        assert!(host.state().has_value);

        host.key(Key::ArrowDown);
        assert!(host.state().has_value, "typed text was overwritten");

        host.send(Event::input(""));
        assert!(!host.state().has_value);

        host.value = ExternalValue::key(2);
        host.key(Key::ArrowDown);
        assert!(host.state().has_value);
    }

    #[test]
    fn cancelled_touch_does_not_tap() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::key(1));
        host.send(Event::TouchStart {
            zone: TouchZone::Clear,
            touch: None,
        });
        assert!(host.send(Event::TouchCancel { touch: None }).is_empty());
        assert!(host.send(Event::TouchEnd { touch: None }).is_empty());
        assert_eq!(host.value, ExternalValue::key(1));
    }

    #[test]
    fn disabled_toggle_drops_focus_and_closes() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.open();
        let disabled = SelectConfig {
            disabled: true,
            ..SelectConfig::default()
        };
        let response = host
            .select
            .set_config(disabled, Props::new(&host.options, &host.value))
            .unwrap();
        assert!(response.contains(&Effect::Closed));
        assert!(!host.state().is_focused);

        assert!(host.send(Event::press(PointerTarget::Control)).is_empty());
        assert!(host.key(Key::ArrowDown).is_empty());
        assert!(host.send(Event::InputFocus).is_empty());
    }

    #[test]
    fn set_config_rejects_invalid_settings() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        let zero = SelectConfig {
            page_size: 0,
            ..SelectConfig::default()
        };
        let result = host
            .select
            .set_config(zero, Props::new(&host.options, &host.value));
        assert_eq!(result.err(), Some(ConfigError::ZeroPageSize));
        assert_eq!(host.select.config().page_size, 5);
    }

    #[test]
    fn blur_closes_and_resets_search_text() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        host.open();
        host.send(Event::input("b"));
        let response = host.send(Event::InputBlur);
        assert!(response.contains(&Effect::Blurred));
        assert!(!host.state().is_open);
        assert!(!host.state().is_focused);
        assert!(host.state().input_value.is_empty());
        assert_eq!(host.select.visible_options().len(), 3);
    }

    #[test]
    fn close_keeps_search_text_when_configured() {
        let mut host = Host::new(
            SelectConfig {
                on_close_resets_input: false,
                ..SelectConfig::default()
            },
            ExternalValue::Absent,
        );
        host.open();
        host.send(Event::input("b"));
        host.key(Key::Escape);
        assert!(!host.state().is_open);
        assert_eq!(host.state().input_value, "b");
        assert!(host.state().is_pseudo_focused);
    }

    #[test]
    fn input_transform_replaces_text() {
        let select = Select::new(SelectConfig::default(), ChoiceAccessor)
            .unwrap()
            .with_input_transform(|text| Some(text.to_uppercase()));
        let mut host = Host::with(select, ExternalValue::Absent);
        let response = host.send(Event::input("c"));
        assert!(response.contains(&Effect::Opened));
        assert_eq!(host.state().input_value, "C");
        assert_eq!(host.focused(), Some("C"));
        assert!(host.state().has_value);
    }

    #[test]
    fn installed_filters() {
        let options = abc();
        let reversed = Select::new(SelectConfig::default(), ChoiceAccessor)
            .unwrap()
            .with_filter(|all: &[Choice], _: &str, _: &[Choice], _: &FilterConfig| {
                all.iter().rev().cloned().collect()
            });
        let mut host = Host::with(reversed, ExternalValue::Absent);
        host.send(Event::input("zzz"));
        assert_eq!(host.select.visible_options()[0], options[2]);

        let even = Select::new(SelectConfig::default(), ChoiceAccessor)
            .unwrap()
            .with_option_filter(|o: &Choice, _: &str| o.label != "B");
        let mut host = Host::with(even, ExternalValue::Absent);
        host.send(Event::input("zzz"));
        assert_eq!(host.select.visible_options(), [options[0].clone(), options[2].clone()]);

        let unfiltered = SelectConfig {
            filter_options: false,
            ..SelectConfig::default()
        };
        let mut host = Host::new(unfiltered, ExternalValue::Absent);
        host.send(Event::input("zzz"));
        assert_eq!(host.select.visible_options(), options.as_slice());
    }

    #[test]
    fn required_and_auto_blur() {
        let config = SelectConfig {
            required: true,
            auto_blur: true,
            ..SelectConfig::default()
        };
        let mut host = Host::new(config, ExternalValue::Absent);
        assert!(host.state().required);
        host.open();
        let response = host.key(Key::Enter);
        assert!(response.contains(&Effect::BlurInput));
        assert!(!host.state().required);
        assert!(host.state().has_value);
    }

    #[test]
    fn exhausted_multi_menu_renders_closed() {
        let options = abc();
        let mut host = Host::new(multi(), ExternalValue::records(options.clone()));
        host.open();
        assert!(host.state().is_open);
        assert!(!host.select.is_open());

        host.send(Event::input("q"));
        assert!(host.select.is_open());
    }

    #[test]
    fn value_clicks_are_reported_when_enabled() {
        let options = abc();
        let mut host = Host::new(
            SelectConfig {
                report_value_clicks: true,
                ..SelectConfig::default()
            },
            ExternalValue::key(1),
        );
        let response = host.send(Event::press(PointerTarget::Value(options[0].clone())));
        assert!(response.contains(&Effect::ValueClicked(options[0].clone())));
        assert!(!host.state().is_open);

        // Without reporting, the press reaches the control body.
        let mut host = Host::new(SelectConfig::default(), ExternalValue::key(1));
        let response = host.send(Event::press(PointerTarget::Value(options[0].clone())));
        assert!(response.contains(&Effect::FocusInput));
    }

    #[test]
    fn menu_scroll_reports_the_bottom() {
        let mut host = Host::new(SelectConfig::default(), ExternalValue::Absent);
        let bottom = ScrollMetrics {
            scroll_top: 200.0,
            scroll_height: 300.0,
            client_height: 100.0,
        };
        let response = host.send(Event::MenuScroll(bottom));
        assert_eq!(
            response.effects.as_slice(),
            [Effect::<Choice>::MenuScrolledToBottom]
        );
        let middle = ScrollMetrics {
            scroll_top: 50.0,
            ..bottom
        };
        assert!(host.send(Event::MenuScroll(middle)).is_empty());
    }

    #[test]
    fn autofocus_on_mount() {
        let options = abc();
        let value = ExternalValue::Absent;
        let mut select = Select::new(
            SelectConfig {
                autofocus: true,
                ..SelectConfig::default()
            },
            ChoiceAccessor,
        )
        .unwrap();
        let response = select.mount(Props::new(&options, &value));
        assert_eq!(response.effects.as_slice(), [Effect::<Choice>::FocusInput]);
    }
}
