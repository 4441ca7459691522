//! Pick list configuration.

use serde::{Deserialize, Serialize};

use crate::filter::MatchMode;
use crate::item::{Equality, ListRole};

/// Options that shape a pick list's behaviour.
///
/// Deserializes from camelCase keys, with every key optional.
///
/// # Example
///
/// ```ignore
/// let config = PickListConfig::new()
///     .data_key("id")
///     .filter_by("name,brand")
///     .filter_match_mode(MatchMode::StartsWith);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickListConfig {
    /// Field that identifies an item. Structural equality when unset.
    pub data_key: Option<String>,

    /// Tab order hint for the two lists.
    pub tab_index: i32,

    /// Comma-separated fields to filter on. Unset or empty disables filtering.
    pub filter_by: Option<String>,

    pub filter_match_mode: MatchMode,

    /// BCP-47 tag used to lower-case filter text.
    pub filter_locale: Option<String>,

    pub show_source_filter: bool,
    pub show_target_filter: bool,

    /// Show the reorder buttons next to the source list.
    pub show_source_controls: bool,
    /// Show the reorder buttons next to the target list.
    pub show_target_controls: bool,

    /// A plain click replaces the selection; ctrl/meta click toggles.
    pub meta_key_selection: bool,
}

impl Default for PickListConfig {
    fn default() -> Self {
        Self {
            data_key: None,
            tab_index: 0,
            filter_by: None,
            filter_match_mode: MatchMode::Contains,
            filter_locale: None,
            show_source_filter: true,
            show_target_filter: true,
            show_source_controls: true,
            show_target_controls: true,
            meta_key_selection: true,
        }
    }
}

impl PickListConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_key(mut self, key: impl Into<String>) -> Self {
        self.data_key = Some(key.into());
        self
    }

    pub fn tab_index(mut self, index: i32) -> Self {
        self.tab_index = index;
        self
    }

    pub fn filter_by(mut self, fields: impl Into<String>) -> Self {
        self.filter_by = Some(fields.into());
        self
    }

    pub fn filter_match_mode(mut self, mode: MatchMode) -> Self {
        self.filter_match_mode = mode;
        self
    }

    pub fn filter_locale(mut self, locale: impl Into<String>) -> Self {
        self.filter_locale = Some(locale.into());
        self
    }

    /// Set whether the filter input of `role` is shown.
    pub fn show_filter(mut self, role: ListRole, show: bool) -> Self {
        match role {
            ListRole::Source => self.show_source_filter = show,
            ListRole::Target => self.show_target_filter = show,
        }
        self
    }

    /// Set whether the reorder buttons of `role` are shown.
    pub fn show_controls(mut self, role: ListRole, show: bool) -> Self {
        match role {
            ListRole::Source => self.show_source_controls = show,
            ListRole::Target => self.show_target_controls = show,
        }
        self
    }

    pub fn meta_key_selection(mut self, enabled: bool) -> Self {
        self.meta_key_selection = enabled;
        self
    }

    /// The `filter_by` fields, trimmed, without empty entries.
    pub fn filter_fields(&self) -> Vec<String> {
        self.filter_by
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Whether any filter field is configured.
    pub fn has_filter_by(&self) -> bool {
        !self.filter_fields().is_empty()
    }

    /// Whether the filter input of `role` should be rendered.
    pub fn shows_filter(&self, role: ListRole) -> bool {
        let show = match role {
            ListRole::Source => self.show_source_filter,
            ListRole::Target => self.show_target_filter,
        };
        show && self.has_filter_by()
    }

    pub fn shows_controls(&self, role: ListRole) -> bool {
        match role {
            ListRole::Source => self.show_source_controls,
            ListRole::Target => self.show_target_controls,
        }
    }

    /// The identity policy implied by `data_key`.
    pub fn equality(&self) -> Equality {
        Equality::from_data_key(self.data_key.as_deref())
    }
}
