// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picklist Model: option records, value normalization, and filtering for
//! headless combobox controls.
//!
//! This crate holds the pure data side of a combobox:
//!
//! - **Options** are caller-owned records of any type `O`. An [`Accessor`]
//!   reads their label, value, `disabled` flag, and `clearable_value` flag.
//!   [`Choice`] + [`ChoiceAccessor`] cover the common case; [`FieldRecord`] +
//!   [`KeyedAccessor`] cover records whose field names are only known at
//!   runtime.
//! - **Values** are owned by the caller as an [`ExternalValue`]: a key, a
//!   delimiter-joined string, a list of keys or records, or nothing.
//!   [`to_internal`] expands it into the ordered selection and [`to_external`]
//!   reduces a selection back (optionally to bare value fields).
//! - **Filtering** via [`filter`] derives the visible options from the search
//!   text, hiding excluded (already selected) options.
//!
//! The interaction state machine that drives these lives in
//! `picklist_select`; keyboard traversal lives in `picklist_focus`.
//!
//! ## Minimal example
//!
//! ```rust
//! use picklist_model::{
//!     Choice, ChoiceAccessor, ExternalValue, FilterConfig, FilterStrategy, ValueMode, filter,
//!     to_external, to_internal,
//! };
//!
//! let options = vec![Choice::new(1, "One"), Choice::new(2, "Two"), Choice::new(3, "Three")];
//! let mode = ValueMode { multi: true, ..ValueMode::default() };
//!
//! // The caller holds `[1]`; the dropdown hides it.
//! let selected = to_internal(&ExternalValue::keys([1]), &options, &ChoiceAccessor, &mode);
//! let visible = filter(
//!     &options,
//!     "t",
//!     &selected,
//!     &FilterConfig::default(),
//!     &ChoiceAccessor,
//!     FilterStrategy::Default,
//! );
//! assert_eq!(visible, vec![options[1].clone(), options[2].clone()]);
//!
//! // Reduce back with simple values for a form field.
//! let simple = ValueMode { simple_value: true, ..mode };
//! assert_eq!(to_external(&visible, &ChoiceAccessor, &simple), ExternalValue::key("2,3"));
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`Scalar`], [`Choice`],
//!   [`FieldRecord`], [`ExternalValue`], [`MatchPos`], and [`MatchProp`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod filter;
mod types;
mod value;

pub use filter::{
    CustomFilter, FilterConfig, FilterStrategy, MatchPos, MatchProp, OptionPredicate, filter,
};
pub use types::{Accessor, Choice, ChoiceAccessor, FieldRecord, KeyedAccessor, Scalar};
pub use value::{
    ExternalValue, ValueItem, ValueMode, commit, pop, remove, reset, to_external, to_internal,
};
