//! Selection state for the two lists.
//!
//! A selection is an ordered set of items: it keeps the order in which items
//! were selected (reordering walks it in that order) and never holds the same
//! item twice under the configured [`Equality`] policy.

use log::{debug, trace};

use crate::events::{OriginalEvent, SelectionChangeEvent};
use crate::handlers::PickListHandlers;
use crate::item::{Equality, ListRole, PickListItem};
use crate::ownership::Owned;

// =============================================================================
// Selection
// =============================================================================

/// Items selected in one list, in selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    items: Vec<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Selection<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: PickListItem> Selection<T> {
    /// Build a selection from `items`, dropping duplicates (first one wins).
    pub fn from_items(items: Vec<T>, equality: &Equality) -> Self {
        let mut unique: Vec<T> = Vec::with_capacity(items.len());
        for item in items {
            if !equality.contains(&item, &unique) {
                unique.push(item);
            }
        }
        Self { items: unique }
    }

    /// Check if an item is selected.
    pub fn contains(&self, item: &T, equality: &Equality) -> bool {
        equality.contains(item, &self.items)
    }

    /// The selection that results from clicking `item`.
    ///
    /// With meta-key selection, a plain click selects only `item` and a
    /// ctrl/meta click toggles it. Without it (or for touch input) every
    /// click toggles.
    pub fn clicked(
        &self,
        item: &T,
        equality: &Equality,
        event: &OriginalEvent,
        meta_key_selection: bool,
    ) -> Vec<T> {
        let mut next = self.items.clone();
        let index = equality.index_of(item, &next);
        let meta_selection = meta_key_selection && !event.is_touch();

        if meta_selection {
            let toggles = event.modifiers.toggles();
            match index {
                Some(index) if toggles => {
                    next.remove(index);
                }
                _ => {
                    if !toggles {
                        next.clear();
                    }
                    next.push(item.clone());
                }
            }
        } else {
            match index {
                Some(index) => {
                    next.remove(index);
                }
                None => next.push(item.clone()),
            }
        }

        next
    }
}

// =============================================================================
// SelectionController
// =============================================================================

/// Owns (or mirrors) the source and target selections and keeps at most one
/// of them non-empty.
#[derive(Debug, Clone)]
pub struct SelectionController<T> {
    source: Owned<Selection<T>>,
    target: Owned<Selection<T>>,
}

impl<T> Default for SelectionController<T> {
    fn default() -> Self {
        Self {
            source: Owned::default(),
            target: Owned::default(),
        }
    }
}

impl<T: PickListItem> SelectionController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection of `role`.
    pub fn selection(&self, role: ListRole) -> &Selection<T> {
        self.slot(role).get()
    }

    pub fn is_controlled(&self, role: ListRole) -> bool {
        self.slot(role).is_controlled()
    }

    /// Hand the selection of `role` to the caller.
    pub fn make_controlled(&mut self, role: ListRole) {
        self.slot_mut(role).make_controlled();
    }

    /// Caller re-supplies a controlled selection. Ignored when uncontrolled.
    pub fn supply(&mut self, role: ListRole, items: Vec<T>, equality: &Equality) -> bool {
        self.slot_mut(role)
            .supply(Selection::from_items(items, equality))
    }

    /// Replace the selection of `role`, then clear the other list's
    /// selection if it is non-empty.
    ///
    /// Controlled slots are never written: their handler receives the new
    /// value instead.
    pub fn change_selection(
        &mut self,
        role: ListRole,
        value: Vec<T>,
        original_event: OriginalEvent,
        equality: &Equality,
        handlers: &mut PickListHandlers<T>,
    ) {
        self.apply(role, value, original_event, equality, handlers);

        let other = role.other();
        if !self.selection(other).is_empty() {
            debug!("clearing {} selection: {} selected", other, role);
            self.apply(other, Vec::new(), original_event, equality, handlers);
        }
    }

    /// Empty both selections, each through its own owner.
    pub fn clear_all(
        &mut self,
        original_event: OriginalEvent,
        equality: &Equality,
        handlers: &mut PickListHandlers<T>,
    ) {
        for role in [ListRole::Source, ListRole::Target] {
            self.apply(role, Vec::new(), original_event, equality, handlers);
        }
    }

    fn apply(
        &mut self,
        role: ListRole,
        value: Vec<T>,
        original_event: OriginalEvent,
        equality: &Equality,
        handlers: &mut PickListHandlers<T>,
    ) {
        if self.is_controlled(role) {
            trace!("{} selection is controlled, delegating {} items", role, value.len());
            if let Some(handler) = handlers.selection_handler(role) {
                handler(&SelectionChangeEvent {
                    original_event,
                    value,
                });
            }
        } else {
            trace!("{} selection stored: {} items", role, value.len());
            self.slot_mut(role)
                .store(Selection::from_items(value, equality));
        }
    }

    fn slot(&self, role: ListRole) -> &Owned<Selection<T>> {
        match role {
            ListRole::Source => &self.source,
            ListRole::Target => &self.target,
        }
    }

    fn slot_mut(&mut self, role: ListRole) -> &mut Owned<Selection<T>> {
        match role {
            ListRole::Source => &mut self.source,
            ListRole::Target => &mut self.target,
        }
    }
}
