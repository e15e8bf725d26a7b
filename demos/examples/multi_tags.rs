// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-value tag picker over records loaded from JSON.
//!
//! Options are `FieldRecord`s read with a `KeyedAccessor`, so the label and
//! value fields are chosen at runtime. The value is reported as a
//! delimiter-joined string of ids, the way a form field would store it.
//!
//! Covers pointer commits, removing a chip, a pinned tag that survives
//! Backspace, a drag that does not count as a tap, and the outside-touch
//! listener.
//!
//! Run:
//! - `cargo run -p picklist_demos --example multi_tags`

use picklist_model::{ExternalValue, FieldRecord, KeyedAccessor};
use picklist_select::{Event, Key, PointerTarget, Props, Select, SelectConfig, TouchZone};
use tracing_subscriber::EnvFilter;

const TAGS: &str = r#"[
    { "id": "rust", "name": "Rust", "clearableValue": false },
    { "id": "go", "name": "Go" },
    { "id": "zig", "name": "Zig" },
    { "id": "cobol", "name": "COBOL", "disabled": true }
]"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options: Vec<FieldRecord> = serde_json::from_str(TAGS).expect("valid tags");
    let config = SelectConfig {
        multi: true,
        simple_value: true,
        delimiter: "|".into(),
        ..SelectConfig::default()
    };
    let mut select =
        Select::new(config, KeyedAccessor::new("name", "id")).expect("config validates");

    // The pinned tag starts selected.
    let mut value = ExternalValue::key("rust");
    select.mount(Props::new(&options, &value));

    let zig = options[2].clone();
    let go = options[1].clone();
    let script = [
        ("press control", Event::press(PointerTarget::Control)),
        ("focus", Event::InputFocus),
        ("press Zig", Event::press(PointerTarget::Option(zig.clone()))),
        (
            "drag over Go",
            Event::TouchStart {
                zone: TouchZone::Option(go.clone()),
                touch: None,
            },
        ),
        ("drag moves", Event::TouchMove { touch: None }),
        ("drag ends", Event::TouchEnd { touch: None }),
        (
            "tap Go",
            Event::TouchStart {
                zone: TouchZone::Option(go),
                touch: None,
            },
        ),
        ("tap ends", Event::TouchEnd { touch: None }),
        ("remove Zig", Event::press(PointerTarget::RemoveValue(zig))),
        ("Backspace", Event::key(Key::Backspace)),
        ("Backspace (pinned)", Event::key(Key::Backspace)),
        ("touch outside", Event::TouchOutside),
    ];

    for (label, event) in script {
        let response = select.handle(Props::new(&options, &value), event);
        if let Some(next) = response.changes().last() {
            value = next.clone();
        }
        select.receive(Props::new(&options, &value));
        println!(
            "{label:<20} value={} open={} effects={:?}",
            serde_json::to_string(&value).expect("value serializes"),
            select.is_open(),
            response.effects,
        );
    }

    let teardown = select.teardown();
    println!("teardown effects={:?}", teardown.effects);
}
