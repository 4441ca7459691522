//! Filter query state and visible-list computation.

use log::{debug, trace};

use crate::events::{FilterChangeEvent, OriginalEvent};
use crate::handlers::PickListHandlers;
use crate::item::{ListRole, PickListItem};
use crate::ownership::Owned;

use super::engine::{FilterEngine, MatchMode};
use super::locale::normalize_query;

/// Settings shared by both lists when filtering.
#[derive(Debug, Clone, Copy)]
pub struct FilterSettings<'a> {
    /// Fields to match on. Empty disables filtering.
    pub fields: &'a [String],
    pub mode: MatchMode,
    pub locale: Option<&'a str>,
}

impl FilterSettings<'_> {
    pub fn enabled(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// Owns (or mirrors) the filter query of each list.
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    source: Owned<String>,
    target: Owned<String>,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw query of `role`, as typed.
    pub fn query(&self, role: ListRole) -> &str {
        self.slot(role).get()
    }

    pub fn is_controlled(&self, role: ListRole) -> bool {
        self.slot(role).is_controlled()
    }

    /// Hand the query of `role` to the caller.
    pub fn make_controlled(&mut self, role: ListRole) {
        self.slot_mut(role).make_controlled();
    }

    /// Caller re-supplies a controlled query. Ignored when uncontrolled.
    pub fn supply(&mut self, role: ListRole, query: impl Into<String>) -> bool {
        self.slot_mut(role).supply(query.into())
    }

    /// Record a new query for `role`, or hand it to the role's handler when
    /// the query is controlled.
    pub fn change_filter<T>(
        &mut self,
        role: ListRole,
        query: String,
        original_event: OriginalEvent,
        handlers: &mut PickListHandlers<T>,
    ) {
        if self.is_controlled(role) {
            debug!("{} filter is controlled, delegating {:?}", role, query);
            if let Some(handler) = handlers.filter_handler(role) {
                handler(&FilterChangeEvent {
                    original_event,
                    value: query,
                });
            }
        } else {
            debug!("{} filter set to {:?}", role, query);
            self.slot_mut(role).store(query);
        }
    }

    /// The items of `list` that should be shown for `role`.
    ///
    /// Returns `list` unchanged unless filtering is enabled and the role
    /// has a non-empty query.
    pub fn visible<T: PickListItem>(
        &self,
        role: ListRole,
        list: &[T],
        settings: FilterSettings<'_>,
        engine: &dyn FilterEngine<T>,
    ) -> Vec<T> {
        let query = self.query(role);
        if !settings.enabled() || query.is_empty() {
            return list.to_vec();
        }

        let normalized = normalize_query(query, settings.locale);
        let visible = engine.filter(
            list,
            settings.fields,
            &normalized,
            settings.mode,
            settings.locale,
        );
        trace!(
            "{} filter {:?} ({}) kept {} of {} items",
            role,
            normalized,
            settings.mode,
            visible.len(),
            list.len()
        );
        visible
    }

    fn slot(&self, role: ListRole) -> &Owned<String> {
        match role {
            ListRole::Source => &self.source,
            ListRole::Target => &self.target,
        }
    }

    fn slot_mut(&mut self, role: ListRole) -> &mut Owned<String> {
        match role {
            ListRole::Source => &mut self.source,
            ListRole::Target => &mut self.target,
        }
    }
}
