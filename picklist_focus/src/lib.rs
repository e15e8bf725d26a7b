// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picklist Focus: keyboard focus traversal over option lists.
//!
//! This crate models list navigation as a combination of:
//! - **Navigation intents** ([`Navigation`]) such as [`Navigation::Next`],
//!   [`Navigation::PageDown`], or [`Navigation::End`].
//! - A **snapshot of candidates** ([`FocusEntry`] / [`FocusSpace`]) listing the
//!   visible options in display order and whether each can take focus.
//! - Pluggable **policies** ([`FocusPolicy`]) that select the next focused
//!   entry given an origin, an intent, and the candidates.
//!
//! Disabled entries stay in the space (they are still displayed) but are never
//! selected by a policy. Indices and paging are computed over the enabled
//! entries only.
//!
//! ## Minimal example
//!
//! ```rust
//! use picklist_focus::{FocusEntry, FocusPolicy, FocusSpace, ListPolicy, Navigation};
//!
//! let entries = [
//!     FocusEntry { id: 'a', enabled: true },
//!     FocusEntry { id: 'b', enabled: false },
//!     FocusEntry { id: 'c', enabled: true },
//! ];
//! let space = FocusSpace { nodes: &entries };
//! let policy = ListPolicy::default();
//!
//! // Down skips the disabled entry…
//! assert_eq!(policy.next(Some('a'), Navigation::Next, &space), Some('c'));
//! // …and wraps back to the first one.
//! assert_eq!(policy.next(Some('c'), Navigation::Next, &space), Some('a'));
//! // Without an origin, Up lands on the last enabled entry.
//! assert_eq!(policy.next(None, Navigation::Prev, &space), Some('c'));
//! ```
//!
//! The core types are generic over the entry identifier `K`, so callers can use
//! any small, copyable handle (for example an index into their visible option
//! list).
//!
//! [`ListPolicy`] wraps around by default. Set [`ListPolicy::wrap`] to
//! [`WrapMode::Never`] for lists where stepping past either end should leave
//! focus where it is. `picklist_select` always wraps; this mode is for hosts
//! that drive the policy directly.
//!
//! ```rust
//! use picklist_focus::{FocusEntry, FocusPolicy, FocusSpace, ListPolicy, Navigation, WrapMode};
//!
//! let entries = [FocusEntry { id: 0, enabled: true }, FocusEntry { id: 1, enabled: true }];
//! let space = FocusSpace { nodes: &entries };
//! let policy = ListPolicy { wrap: WrapMode::Never, ..ListPolicy::default() };
//! assert_eq!(policy.next(Some(1), Navigation::Next, &space), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use smallvec::SmallVec;

/// Direction of list navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Move to the next entry (Down).
    Next,
    /// Move to the previous entry (Up).
    Prev,
    /// Move back by a page (Page Up).
    PageUp,
    /// Move forward by a page (Page Down).
    PageDown,
    /// Move to the first entry (Home).
    Start,
    /// Move to the last entry (End).
    End,
}

impl Navigation {
    /// Whether this intent moves toward the end of the list.
    ///
    /// Used to seed focus when the list is first shown: forward intents land
    /// on the first entry, backward intents on the last.
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Next | Self::PageDown | Self::Start)
    }
}

/// A single candidate within a [`FocusSpace`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FocusEntry<K> {
    /// Identifier for this entry.
    pub id: K,
    /// Whether this entry can take focus.
    pub enabled: bool,
}

/// A read-only view of the candidates, in display order.
#[derive(Clone, Debug)]
pub struct FocusSpace<'a, K> {
    /// Displayed entries, including disabled ones.
    pub nodes: &'a [FocusEntry<K>],
}

impl<K: Copy> FocusSpace<'_, K> {
    /// First enabled entry, if any.
    pub fn first_enabled(&self) -> Option<K> {
        self.nodes.iter().find(|e| e.enabled).map(|e| e.id)
    }

    /// Last enabled entry, if any.
    pub fn last_enabled(&self) -> Option<K> {
        self.nodes.iter().rev().find(|e| e.enabled).map(|e| e.id)
    }
}

/// Wrap mode configuration for linear traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Do not wrap; stepping past either end yields no candidate.
    Never,
    /// Stepping past the last entry lands on the first and vice versa.
    Wrap,
}

/// Trait for list traversal policies.
///
/// A policy receives a navigation intent, the currently focused entry (if
/// any), and a read-only view of candidates, and returns the entry to focus
/// next. `None` means "no focus change".
pub trait FocusPolicy<K>
where
    K: Copy + Eq,
{
    /// Compute the next focus target.
    fn next(&self, origin: Option<K>, direction: Navigation, space: &FocusSpace<'_, K>)
    -> Option<K>;
}

/// Default policy for option lists.
///
/// Over the enabled entries, with `i` the origin's position or `-1` when the
/// origin is absent:
///
/// | intent | result |
/// |---|---|
/// | `Next` | `i + 1`, wrapping to the first entry; first entry when `i == -1` |
/// | `Prev` | `i - 1`, wrapping to the last entry; last entry when `i == -1` |
/// | `Start` / `End` | first / last entry |
/// | `PageUp` | `max(0, i - page_size)` |
/// | `PageDown` | `min(len - 1, i + page_size)` |
///
/// A computed position of `-1` falls back to the first entry; an empty space
/// yields `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ListPolicy {
    /// Wrap behavior for `Next`/`Prev`.
    pub wrap: WrapMode,
    /// Number of entries moved by `PageUp`/`PageDown`.
    pub page_size: usize,
}

impl Default for ListPolicy {
    fn default() -> Self {
        Self {
            wrap: WrapMode::Wrap,
            page_size: 5,
        }
    }
}

impl ListPolicy {
    /// Policy with the given page size and wraparound.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Entry to focus when the list is first shown by a navigation key.
    ///
    /// Forward intents seed the first enabled entry, backward intents the
    /// last. The key that shows the list never also moves within it.
    pub fn seed<K: Copy>(&self, direction: Navigation, space: &FocusSpace<'_, K>) -> Option<K> {
        if direction.is_forward() {
            space.first_enabled()
        } else {
            space.last_enabled()
        }
    }
}

impl<K> FocusPolicy<K> for ListPolicy
where
    K: Copy + Eq,
{
    fn next(
        &self,
        origin: Option<K>,
        direction: Navigation,
        space: &FocusSpace<'_, K>,
    ) -> Option<K> {
        let nodes = space.nodes;
        let enabled: SmallVec<[usize; 16]> = nodes
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.enabled.then_some(i))
            .collect();
        if enabled.is_empty() {
            return None;
        }

        let origin_pos = origin.and_then(|o| enabled.iter().position(|&i| nodes[i].id == o));
        let pos = step(origin_pos, enabled.len(), direction, self)?;
        Some(nodes[enabled[pos]].id)
    }
}

fn step(
    origin: Option<usize>,
    len: usize,
    direction: Navigation,
    policy: &ListPolicy,
) -> Option<usize> {
    let last = len - 1;
    let wraps = policy.wrap == WrapMode::Wrap;
    let page = policy.page_size;

    let target = match direction {
        Navigation::Next => match origin {
            Some(p) if p < last => p + 1,
            Some(_) if wraps => 0,
            Some(_) => return None,
            None => 0,
        },
        Navigation::Prev => match origin {
            Some(p) if p > 0 => p - 1,
            Some(_) if wraps => last,
            Some(_) => return None,
            None => last,
        },
        Navigation::Start => 0,
        Navigation::End => last,
        // A missing origin sits just before the first entry.
        Navigation::PageUp => origin.map_or(0, |p| p.saturating_sub(page)),
        Navigation::PageDown => origin
            .map_or(page.saturating_sub(1), |p| p.saturating_add(page))
            .min(last),
    };

    Some(target)
}
