// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option records and the accessors that read them.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};

use hashbrown::HashMap;

/// A scalar option value or external value key.
///
/// Equality is typed: `Scalar::Str("1")` never equals `Scalar::Int(1)`. Use
/// [`Scalar::text`] when a textual comparison is wanted (filtering, joining
/// with a delimiter).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Scalar {
    /// A boolean value.
    Bool(bool),
    /// An integer value.
    Int(i64),
    /// A string value.
    Str(String),
}

impl Scalar {
    /// Textual form used for substring matching and delimiter joining.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s.as_str()),
            Self::Int(i) => Cow::Owned(i.to_string()),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
        }
    }

    /// Returns `true` for the empty string.
    pub fn is_empty_str(&self) -> bool {
        matches!(self, Self::Str(s) if s.is_empty())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Reads the label, value, and flags of an option record.
///
/// An accessor is configured once per control instance and replaces
/// field-name lookups on every access. Two option references are considered
/// the same option when they compare equal or when their value fields are
/// equal (see [`Accessor::same`]).
pub trait Accessor<O> {
    /// Display label of `option`; also a filter match target.
    fn label<'a>(&self, option: &'a O) -> Cow<'a, str>;

    /// Value field of `option`, if it has one.
    fn value<'a>(&self, option: &'a O) -> Option<&'a Scalar>;

    /// Whether `option` is listed but unreachable by keyboard focus and
    /// cannot be committed.
    fn disabled(&self, _option: &O) -> bool {
        false
    }

    /// Explicit removability flag of a selected option.
    ///
    /// `Some(false)` pins the option: it cannot be removed by backspace,
    /// delete, or a value chip's remove affordance. `None` means unset.
    fn clearable_value(&self, _option: &O) -> Option<bool> {
        None
    }

    /// Whether `a` and `b` refer to the same option.
    fn same(&self, a: &O, b: &O) -> bool
    where
        O: PartialEq,
    {
        if a == b {
            return true;
        }
        match (self.value(a), self.value(b)) {
            (Some(va), Some(vb)) => va == vb,
            _ => false,
        }
    }
}

/// A plain option record with fixed fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Choice {
    /// Display label.
    pub label: String,
    /// Value field.
    pub value: Scalar,
    /// Listed but not focusable or selectable.
    #[cfg_attr(feature = "serde", serde(default))]
    pub disabled: bool,
    /// `Some(false)` pins the option once selected.
    #[cfg_attr(feature = "serde", serde(default))]
    pub clearable_value: Option<bool>,
}

impl Choice {
    /// Create an enabled, removable option.
    pub fn new(value: impl Into<Scalar>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
            clearable_value: None,
        }
    }

    /// Mark this option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the explicit removability flag.
    pub fn with_clearable_value(mut self, clearable: bool) -> Self {
        self.clearable_value = Some(clearable);
        self
    }
}

/// [`Accessor`] for [`Choice`] records.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChoiceAccessor;

impl Accessor<Choice> for ChoiceAccessor {
    fn label<'a>(&self, option: &'a Choice) -> Cow<'a, str> {
        Cow::Borrowed(option.label.as_str())
    }

    fn value<'a>(&self, option: &'a Choice) -> Option<&'a Scalar> {
        Some(&option.value)
    }

    fn disabled(&self, option: &Choice) -> bool {
        option.disabled
    }

    fn clearable_value(&self, option: &Choice) -> Option<bool> {
        option.clearable_value
    }
}

/// An option record made of named fields, typically loaded from data.
///
/// Pair with a [`KeyedAccessor`] naming the label and value fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct FieldRecord {
    fields: HashMap<String, Scalar>,
}

impl FieldRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        self.fields.insert(key.into(), value.into())
    }

    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.fields.get(key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for FieldRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// [`Accessor`] for [`FieldRecord`]s with configurable label and value keys.
///
/// The `disabled` and `clearableValue` flags are read from boolean fields of
/// those names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyedAccessor {
    /// Field holding the display label.
    pub label_key: String,
    /// Field holding the value.
    pub value_key: String,
}

impl KeyedAccessor {
    /// Create an accessor reading the given fields.
    pub fn new(label_key: impl Into<String>, value_key: impl Into<String>) -> Self {
        Self {
            label_key: label_key.into(),
            value_key: value_key.into(),
        }
    }
}

impl Default for KeyedAccessor {
    fn default() -> Self {
        Self::new("label", "value")
    }
}

impl Accessor<FieldRecord> for KeyedAccessor {
    fn label<'a>(&self, option: &'a FieldRecord) -> Cow<'a, str> {
        option
            .get(&self.label_key)
            .map(Scalar::text)
            .unwrap_or(Cow::Borrowed(""))
    }

    fn value<'a>(&self, option: &'a FieldRecord) -> Option<&'a Scalar> {
        option.get(&self.value_key)
    }

    fn disabled(&self, option: &FieldRecord) -> bool {
        matches!(option.get("disabled"), Some(Scalar::Bool(true)))
    }

    fn clearable_value(&self, option: &FieldRecord) -> Option<bool> {
        match option.get("clearableValue") {
            Some(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }
}
