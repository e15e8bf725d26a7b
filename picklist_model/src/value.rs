// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value normalization between the caller's representation and an ordered
//! sequence of selected options.
//!
//! The caller owns the selected value and may express it as a bare key, a
//! delimiter-joined string (multi mode only), a list of keys or records, or
//! nothing at all. [`to_internal`] expands any of these into the selected
//! options, in order, and [`to_external`] reduces a selection back.
//!
//! ```
//! use picklist_model::{Choice, ChoiceAccessor, ExternalValue, ValueMode, to_internal};
//!
//! let options = [Choice::new("a", "A"), Choice::new("b", "B"), Choice::new("c", "C")];
//! let mode = ValueMode { multi: true, delimiter: ",", simple_value: false };
//!
//! let selected = to_internal(&ExternalValue::key("c,a,zz"), &options, &ChoiceAccessor, &mode);
//! // Unknown keys are dropped; order follows the external value.
//! assert_eq!(selected, vec![options[2].clone(), options[0].clone()]);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{Accessor, Scalar};

/// One entry of an external value: a key matched against option values, or a
/// record passed through as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum ValueItem<O> {
    /// Matched against the option value field.
    Key(Scalar),
    /// An option record.
    Record(O),
}

/// The caller-facing value of a control.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum ExternalValue<O> {
    /// No value.
    Absent,
    /// A single key or record. In multi mode a string key is split on the
    /// configured delimiter.
    One(ValueItem<O>),
    /// A list of keys and/or records.
    Many(Vec<ValueItem<O>>),
}

impl<O> Default for ExternalValue<O> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<O> ExternalValue<O> {
    /// A single key.
    pub fn key(key: impl Into<Scalar>) -> Self {
        Self::One(ValueItem::Key(key.into()))
    }

    /// A list of keys.
    pub fn keys<K: Into<Scalar>>(keys: impl IntoIterator<Item = K>) -> Self {
        Self::Many(keys.into_iter().map(|k| ValueItem::Key(k.into())).collect())
    }

    /// A single record.
    pub fn record(record: O) -> Self {
        Self::One(ValueItem::Record(record))
    }

    /// A list of records.
    pub fn records(records: impl IntoIterator<Item = O>) -> Self {
        Self::Many(records.into_iter().map(ValueItem::Record).collect())
    }

    /// Whether this value counts as present.
    ///
    /// Absent values, the empty string, and empty lists are not.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Absent => false,
            Self::One(ValueItem::Key(k)) => !k.is_empty_str(),
            Self::One(ValueItem::Record(_)) => true,
            Self::Many(items) => !items.is_empty(),
        }
    }
}

/// How a control shapes its value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ValueMode<'a> {
    /// Multi-value control.
    pub multi: bool,
    /// Separator for delimiter-joined values.
    pub delimiter: &'a str,
    /// Reduce emitted values to their value fields.
    pub simple_value: bool,
}

impl Default for ValueMode<'_> {
    fn default() -> Self {
        Self {
            multi: false,
            delimiter: ",",
            simple_value: false,
        }
    }
}

/// Expand an external value into the ordered sequence of selected options.
///
/// Keys resolve by linear search over `options` on the value field; keys with
/// no match are dropped. Pieces of a delimiter-joined string match on the
/// textual form of the value field. Records pass through unchanged.
pub fn to_internal<O, A>(
    external: &ExternalValue<O>,
    options: &[O],
    accessor: &A,
    mode: &ValueMode<'_>,
) -> Vec<O>
where
    O: Clone,
    A: Accessor<O> + ?Sized,
{
    let mut out = Vec::new();
    match external {
        ExternalValue::Absent => {}
        ExternalValue::One(ValueItem::Key(Scalar::Str(joined))) if mode.multi => {
            for piece in joined.split(mode.delimiter) {
                if let Some(option) = options.iter().find(|o| {
                    accessor
                        .value(o)
                        .is_some_and(|v| v.text().as_ref() == piece)
                }) {
                    out.push(option.clone());
                }
            }
        }
        ExternalValue::One(item) => out.extend(expand(item, options, accessor)),
        ExternalValue::Many(items) => {
            let items = if mode.multi { &items[..] } else { &items[..items.len().min(1)] };
            out.extend(items.iter().filter_map(|i| expand(i, options, accessor)));
        }
    }
    out
}

fn expand<O, A>(item: &ValueItem<O>, options: &[O], accessor: &A) -> Option<O>
where
    O: Clone,
    A: Accessor<O> + ?Sized,
{
    match item {
        ValueItem::Record(record) => Some(record.clone()),
        ValueItem::Key(key) => options
            .iter()
            .find(|o| accessor.value(o) == Some(key))
            .cloned(),
    }
}

/// Reduce a selection to the external representation.
///
/// With `simple_value` each option is reduced to its value field: joined by
/// the delimiter in multi mode, bare in single mode. Otherwise the records are
/// returned unchanged.
pub fn to_external<O, A>(internal: &[O], accessor: &A, mode: &ValueMode<'_>) -> ExternalValue<O>
where
    O: Clone,
    A: Accessor<O> + ?Sized,
{
    match (mode.multi, mode.simple_value) {
        (true, true) => {
            let mut joined = String::new();
            for (i, option) in internal.iter().enumerate() {
                if i > 0 {
                    joined.push_str(mode.delimiter);
                }
                if let Some(v) = accessor.value(option) {
                    joined.push_str(&v.text());
                }
            }
            ExternalValue::key(joined)
        }
        (true, false) => ExternalValue::records(internal.iter().cloned()),
        (false, true) => match internal.first().and_then(|o| accessor.value(o)) {
            Some(v) => ExternalValue::key(v.clone()),
            None => ExternalValue::Absent,
        },
        (false, false) => match internal.first() {
            Some(o) => ExternalValue::record(o.clone()),
            None => ExternalValue::Absent,
        },
    }
}

/// Selection after committing `candidate`: replaces the value in single mode,
/// appends in multi mode.
pub fn commit<O: Clone>(current: &[O], candidate: O, multi: bool) -> Vec<O> {
    if !multi {
        return alloc::vec![candidate];
    }
    let mut next = Vec::with_capacity(current.len() + 1);
    next.extend_from_slice(current);
    next.push(candidate);
    next
}

/// Selection after removing the last option, or `None` when there is nothing
/// to remove or the last option is pinned (`clearable_value == Some(false)`).
pub fn pop<O, A>(current: &[O], accessor: &A) -> Option<Vec<O>>
where
    O: Clone,
    A: Accessor<O> + ?Sized,
{
    let (last, rest) = current.split_last()?;
    if accessor.clearable_value(last) == Some(false) {
        return None;
    }
    Some(rest.to_vec())
}

/// Selection without `option`.
pub fn remove<O, A>(current: &[O], option: &O, accessor: &A) -> Vec<O>
where
    O: Clone + PartialEq,
    A: Accessor<O> + ?Sized,
{
    current
        .iter()
        .filter(|o| !accessor.same(o, option))
        .cloned()
        .collect()
}

/// Value assigned when the control is cleared.
///
/// Returns `configured` when set, otherwise the reduction of an empty
/// selection (an empty list in multi mode, absent in single mode).
pub fn reset<O, A>(
    configured: Option<&ExternalValue<O>>,
    accessor: &A,
    mode: &ValueMode<'_>,
) -> ExternalValue<O>
where
    O: Clone,
    A: Accessor<O> + ?Sized,
{
    match configured {
        Some(value) => value.clone(),
        None => to_external(&[], accessor, mode),
    }
}
