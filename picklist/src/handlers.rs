//! Caller-supplied notification handlers.

use std::fmt;

use crate::events::{ChangeEvent, FilterChangeEvent, MoveEvent, SelectionChangeEvent};
use crate::item::ListRole;

/// A boxed notification handler.
pub type Handler<E> = Box<dyn FnMut(&E)>;

/// All handlers a pick list can notify.
///
/// Every slot is optional. An absent directional handler simply means that
/// notification is not delivered. A present selection or filter handler puts
/// the matching state slot in controlled mode.
pub struct PickListHandlers<T> {
    pub on_change: Option<Handler<ChangeEvent<T>>>,
    pub on_move_to_target: Option<Handler<MoveEvent<T>>>,
    pub on_move_all_to_target: Option<Handler<MoveEvent<T>>>,
    pub on_move_to_source: Option<Handler<MoveEvent<T>>>,
    pub on_move_all_to_source: Option<Handler<MoveEvent<T>>>,
    pub on_source_selection_change: Option<Handler<SelectionChangeEvent<T>>>,
    pub on_target_selection_change: Option<Handler<SelectionChangeEvent<T>>>,
    pub on_source_filter_change: Option<Handler<FilterChangeEvent>>,
    pub on_target_filter_change: Option<Handler<FilterChangeEvent>>,
}

impl<T> Default for PickListHandlers<T> {
    fn default() -> Self {
        Self {
            on_change: None,
            on_move_to_target: None,
            on_move_all_to_target: None,
            on_move_to_source: None,
            on_move_all_to_source: None,
            on_source_selection_change: None,
            on_target_selection_change: None,
            on_source_filter_change: None,
            on_target_filter_change: None,
        }
    }
}

impl<T> PickListHandlers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn selection_handler(
        &mut self,
        role: ListRole,
    ) -> Option<&mut Handler<SelectionChangeEvent<T>>> {
        match role {
            ListRole::Source => self.on_source_selection_change.as_mut(),
            ListRole::Target => self.on_target_selection_change.as_mut(),
        }
    }

    pub(crate) fn filter_handler(
        &mut self,
        role: ListRole,
    ) -> Option<&mut Handler<FilterChangeEvent>> {
        match role {
            ListRole::Source => self.on_source_filter_change.as_mut(),
            ListRole::Target => self.on_target_filter_change.as_mut(),
        }
    }

    /// Deliver `on_change` if registered.
    pub(crate) fn emit_change(&mut self, event: &ChangeEvent<T>) {
        if let Some(handler) = self.on_change.as_mut() {
            handler(event);
        }
    }
}

impl<T> fmt::Debug for PickListHandlers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickListHandlers")
            .field("on_change", &self.on_change.is_some())
            .field("on_move_to_target", &self.on_move_to_target.is_some())
            .field("on_move_all_to_target", &self.on_move_all_to_target.is_some())
            .field("on_move_to_source", &self.on_move_to_source.is_some())
            .field("on_move_all_to_source", &self.on_move_all_to_source.is_some())
            .field(
                "on_source_selection_change",
                &self.on_source_selection_change.is_some(),
            )
            .field(
                "on_target_selection_change",
                &self.on_target_selection_change.is_some(),
            )
            .field("on_source_filter_change", &self.on_source_filter_change.is_some())
            .field("on_target_filter_change", &self.on_target_filter_change.is_some())
            .finish()
    }
}
