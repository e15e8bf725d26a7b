// Copyright 2026 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control configuration.
//!
//! [`SelectConfig`] is plain data: every field is public and the [`Default`]
//! impl carries the stock behavior. With `#[serde(default)]` a host can load a
//! partial configuration from any serde format and get the defaults for the
//! rest:
//!
//! ```
//! use picklist_select::config::SelectConfig;
//!
//! let config = SelectConfig {
//!     multi: true,
//!     page_size: 10,
//!     ..SelectConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! assert_eq!(config.value_mode().delimiter, ",");
//! ```
//!
//! Behavior that cannot be expressed as data (custom filters, input
//! transforms, a reset value holding records) is installed on the
//! [`Select`](crate::Select) with builder methods.

use alloc::string::String;

use picklist_model::{FilterConfig, MatchPos, MatchProp, ValueMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration of a [`Select`](crate::Select).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectConfig {
    /// Allow selecting more than one option.
    pub multi: bool,
    /// Separator of delimiter-joined values.
    pub delimiter: String,
    /// Where the search text must occur.
    pub match_pos: MatchPos,
    /// Which fields the search text is matched against.
    pub match_prop: MatchProp,
    /// Match case-insensitively.
    pub ignore_case: bool,
    /// Filter the options by the search text. When `false` every option is
    /// listed and any installed filter is ignored.
    pub filter_options: bool,
    /// Report values as bare value fields instead of records.
    pub simple_value: bool,
    /// Track whether the value is still missing.
    pub required: bool,
    /// Options moved by Page Up / Page Down.
    pub page_size: usize,
    /// Offer a clear affordance and let Escape clear the value.
    pub clearable: bool,
    /// Accept typed search text. A non-searchable control toggles its menu on
    /// press instead.
    pub searchable: bool,
    /// Ignore all interaction.
    pub disabled: bool,
    /// Open the menu whenever the input gains focus.
    pub open_on_focus: bool,
    /// Tab commits the focused option while the menu is open.
    pub tab_selects_value: bool,
    /// Escape clears the value when the menu is already closed.
    pub escape_clears_value: bool,
    /// Backspace with empty search text removes the last value.
    pub backspace_removes: bool,
    /// Delete with empty search text removes the last value.
    pub delete_removes: bool,
    /// Clear the search text when the input loses focus.
    pub on_blur_resets_input: bool,
    /// Clear the search text when the menu closes.
    pub on_close_resets_input: bool,
    /// Ask the host to blur the input after every value change.
    pub auto_blur: bool,
    /// Ask the host to focus the input when the control is mounted.
    pub autofocus: bool,
    /// Report presses on a selected value instead of treating them as presses
    /// on the control.
    pub report_value_clicks: bool,
    /// Placeholder shown in the menu when nothing matches. `None` renders no
    /// menu at all in that case.
    pub no_results_text: Option<String>,
    /// Shown when there is no value and no search text.
    pub placeholder: String,
    /// Title of the clear affordance in single mode.
    pub clear_value_text: String,
    /// Title of the clear affordance in multi mode.
    pub clear_all_text: String,
    /// Do not render the dropdown arrow.
    pub hide_arrow: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            multi: false,
            delimiter: ",".into(),
            match_pos: MatchPos::Any,
            match_prop: MatchProp::Any,
            ignore_case: true,
            filter_options: true,
            simple_value: false,
            required: false,
            page_size: 5,
            clearable: true,
            searchable: true,
            disabled: false,
            open_on_focus: false,
            tab_selects_value: true,
            escape_clears_value: true,
            backspace_removes: true,
            delete_removes: true,
            on_blur_resets_input: true,
            on_close_resets_input: true,
            auto_blur: false,
            autofocus: false,
            report_value_clicks: false,
            no_results_text: Some("No results found".into()),
            placeholder: "Select...".into(),
            clear_value_text: "Clear value".into(),
            clear_all_text: "Clear all".into(),
            hide_arrow: false,
        }
    }
}

/// A configuration that cannot drive a control.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Delimiter-joined values cannot be split on an empty string.
    #[error("delimiter must not be empty")]
    EmptyDelimiter,
    /// Paging needs a positive page size.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

impl SelectConfig {
    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }

    /// Settings of the default matching algorithm.
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            ignore_case: self.ignore_case,
            match_pos: self.match_pos,
            match_prop: self.match_prop,
        }
    }

    /// How values are shaped for this control.
    pub fn value_mode(&self) -> ValueMode<'_> {
        ValueMode {
            multi: self.multi,
            delimiter: &self.delimiter,
            simple_value: self.simple_value,
        }
    }

    /// Title of the clear affordance for the current mode.
    pub fn clear_title(&self) -> &str {
        if self.multi {
            &self.clear_all_text
        } else {
            &self.clear_value_text
        }
    }
}
