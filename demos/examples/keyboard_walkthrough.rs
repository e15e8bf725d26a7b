// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard-driven single select, rendered as text.
//!
//! This example shows how to:
//! - load a partial `SelectConfig` from JSON (unset fields keep defaults),
//! - drive `Select` with focus, typing, and navigation keys,
//! - act as a controlled host that stores every reported value,
//! - render the menu through a `Renderer`.
//!
//! Run:
//! - `cargo run -p picklist_demos --example keyboard_walkthrough`
//! - `RUST_LOG=picklist_select=trace cargo run -p picklist_demos --example keyboard_walkthrough`

use picklist_model::{Choice, ChoiceAccessor, ExternalValue};
use picklist_select::render::{
    ArrowSnapshot, ClearSnapshot, MenuContent, MenuSnapshot, RowSnapshot,
};
use picklist_select::{Effect, Event, Key, Props, Renderer, Select, SelectConfig};
use tracing_subscriber::EnvFilter;

/// Draws one line per row, marking focus and selection.
struct TextRenderer;

impl Renderer<Choice> for TextRenderer {
    type Output = String;

    fn row(&mut self, row: &RowSnapshot<'_, Choice>) -> String {
        let focus = if row.is_focused { '>' } else { ' ' };
        let check = if row.is_selected { '*' } else { ' ' };
        let note = if row.is_disabled { " (unavailable)" } else { "" };
        format!("  {focus}{check} {}{note}", row.label)
    }

    fn arrow(&mut self, arrow: ArrowSnapshot) -> String {
        let glyph = if arrow.is_open { "[^]" } else { "[v]" };
        glyph.to_string()
    }

    fn clear(&mut self, clear: ClearSnapshot<'_>) -> String {
        format!("[x {}]", clear.title)
    }

    fn menu(&mut self, menu: MenuSnapshot<'_, String>) -> String {
        match menu.content {
            MenuContent::Rows(rows) => rows.join("\n"),
            MenuContent::NoResults(text) => format!("  ({text})"),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("picklist_select=debug")),
        )
        .init();

    let config: SelectConfig = serde_json::from_str(
        r#"{ "simpleValue": true, "pageSize": 2, "placeholder": "Pick a fruit..." }"#,
    )
    .expect("valid config");

    let options = vec![
        Choice::new("apple", "Apple"),
        Choice::new("banana", "Banana"),
        Choice::new("cherry", "Cherry").disabled(),
        Choice::new("date", "Date"),
        Choice::new("elderberry", "Elderberry"),
    ];
    let mut value = ExternalValue::Absent;

    let mut select = Select::new(config, ChoiceAccessor).expect("config validates");
    select.mount(Props::new(&options, &value));

    let script = [
        ("focus", Event::InputFocus),
        ("Down (opens)", Event::key(Key::ArrowDown)),
        ("PageDown", Event::key(Key::PageDown)),
        ("Down (skips Cherry)", Event::key(Key::ArrowDown)),
        ("type \"an\"", Event::input("an")),
        ("Enter", Event::key(Key::Enter)),
        ("Up (reopens)", Event::key(Key::ArrowUp)),
        ("type \"zz\"", Event::input("zz")),
        ("Escape (closes)", Event::key(Key::Escape)),
        ("Escape (clears)", Event::key(Key::Escape)),
    ];

    for (label, event) in script {
        let response = select.handle(Props::new(&options, &value), event);
        println!("== {label}");
        for effect in &response.effects {
            println!("   effect: {effect:?}");
            if let Effect::Change(next) = effect {
                value = next.clone();
            }
        }
        select.receive(Props::new(&options, &value));

        let view = select.view();
        let shown = if view.shows_placeholder() {
            select.config().placeholder.clone()
        } else if !view.state.input_value.is_empty() {
            view.state.input_value.clone()
        } else {
            serde_json::to_string(&value).expect("value serializes")
        };
        let rendered = select.render(&mut TextRenderer);
        println!(
            "   [{shown}] {} {}",
            rendered.clear.unwrap_or_default(),
            rendered.arrow.unwrap_or_default()
        );
        if let Some(menu) = rendered.menu {
            println!("{menu}");
        }
    }
}
