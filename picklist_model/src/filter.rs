// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text filtering of the option list.
//!
//! [`filter`] produces the visible options for the current search text. It is
//! a stable filter: the result is always the input order restricted to the
//! matches. Options listed in `excluded` (compared on the value field) never
//! appear, which is how a multi-value control hides what is already selected.
//!
//! ```
//! use picklist_model::{Choice, ChoiceAccessor, FilterConfig, FilterStrategy, filter};
//!
//! let options = [Choice::new(1, "Apple"), Choice::new(2, "Banana"), Choice::new(3, "Cherry")];
//! let visible = filter(
//!     &options,
//!     "an",
//!     &[],
//!     &FilterConfig::default(),
//!     &ChoiceAccessor,
//!     FilterStrategy::Default,
//! );
//! assert_eq!(visible, vec![options[1].clone()]);
//! ```

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;

use crate::types::{Accessor, Scalar};

/// Where in the candidate text the search text must match.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MatchPos {
    /// Anywhere (substring).
    #[default]
    Any,
    /// At the start (prefix).
    Start,
}

/// Which option field the search text is matched against.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MatchProp {
    /// Label or value.
    #[default]
    Any,
    /// Label only.
    Label,
    /// Value only.
    Value,
}

/// Settings of the default matching algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FilterConfig {
    /// Compare case-insensitively.
    pub ignore_case: bool,
    /// Prefix or substring match.
    pub match_pos: MatchPos,
    /// Fields to match.
    pub match_prop: MatchProp,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            ignore_case: true,
            match_pos: MatchPos::Any,
            match_prop: MatchProp::Any,
        }
    }
}

/// Signature of a full replacement for the filter pipeline.
pub type CustomFilter<O> = dyn Fn(&[O], &str, &[O], &FilterConfig) -> Vec<O>;

/// Signature of a per-option match predicate. Receives the search text after
/// case folding.
pub type OptionPredicate<O> = dyn Fn(&O, &str) -> bool;

/// How the visible options are derived.
pub enum FilterStrategy<'a, O> {
    /// No filtering; every option is visible.
    Disabled,
    /// The built-in algorithm driven by [`FilterConfig`].
    Default,
    /// Exclusion as usual, then `predicate` decides instead of text matching.
    Predicate(&'a OptionPredicate<O>),
    /// Delegate entirely, with the same arguments [`filter`] receives.
    Custom(&'a CustomFilter<O>),
}

impl<O> Clone for FilterStrategy<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for FilterStrategy<'_, O> {}

impl<O> fmt::Debug for FilterStrategy<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Disabled => "Disabled",
            Self::Default => "Default",
            Self::Predicate(_) => "Predicate",
            Self::Custom(_) => "Custom",
        })
    }
}

/// Compute the visible options for `search`.
///
/// - [`FilterStrategy::Disabled`] returns `options` unchanged.
/// - [`FilterStrategy::Custom`] delegates with the same arguments.
/// - Otherwise options whose value appears in `excluded` are dropped, then the
///   predicate (if any) or the default text match decides. Empty search text
///   matches every remaining option.
pub fn filter<O, A>(
    options: &[O],
    search: &str,
    excluded: &[O],
    config: &FilterConfig,
    accessor: &A,
    strategy: FilterStrategy<'_, O>,
) -> Vec<O>
where
    O: Clone + PartialEq,
    A: Accessor<O> + ?Sized,
{
    match strategy {
        FilterStrategy::Disabled => return options.to_vec(),
        FilterStrategy::Custom(custom) => return custom(options, search, excluded, config),
        FilterStrategy::Default | FilterStrategy::Predicate(_) => {}
    }

    let needle: Cow<'_, str> = if config.ignore_case {
        Cow::Owned(search.to_lowercase())
    } else {
        Cow::Borrowed(search)
    };
    let excluded_values: HashSet<&Scalar> =
        excluded.iter().filter_map(|e| accessor.value(e)).collect();

    options
        .iter()
        .filter(|option| {
            let is_excluded = match accessor.value(option) {
                Some(v) => excluded_values.contains(v),
                None => excluded.iter().any(|e| e == *option),
            };
            if is_excluded {
                return false;
            }
            if let FilterStrategy::Predicate(predicate) = strategy {
                return predicate(*option, &needle);
            }
            if needle.is_empty() {
                return true;
            }
            text_matches(*option, &needle, config, accessor)
        })
        .cloned()
        .collect()
}

fn text_matches<O, A>(option: &O, needle: &str, config: &FilterConfig, accessor: &A) -> bool
where
    A: Accessor<O> + ?Sized,
{
    let test = |haystack: Cow<'_, str>| {
        let haystack = if config.ignore_case {
            Cow::Owned(haystack.to_lowercase())
        } else {
            haystack
        };
        match config.match_pos {
            MatchPos::Start => haystack.starts_with(needle),
            MatchPos::Any => haystack.contains(needle),
        }
    };

    let value_hit = config.match_prop != MatchProp::Label
        && test(accessor.value(option).map(Scalar::text).unwrap_or_default());
    value_hit || (config.match_prop != MatchProp::Value && test(accessor.label(option)))
}
