//! The pick list: two lists, their selections and filters, and the
//! operations that move items between them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::{debug, trace};

use crate::config::PickListConfig;
use crate::events::{
    ChangeEvent, FilterChangeEvent, MoveEvent, OriginalEvent, SelectionChangeEvent,
};
use crate::filter::{FieldFilter, FilterController, FilterEngine, FilterSettings};
use crate::handlers::PickListHandlers;
use crate::item::{Equality, ListRole, PickListItem};
use crate::reorder::{reorder_list, ReorderCoordinator, ReorderDirection, ScrollEffect};
use crate::scroll::{ScrollRequest, ScrollState};
use crate::selection::SelectionController;
use crate::transfer::{can_transfer, TransferDirection, TransferPlan, TransferSide};

// =============================================================================
// PickListId
// =============================================================================

/// Unique identifier for a PickList instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickListId(usize);

impl PickListId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for PickListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__picklist_{}", self.0)
    }
}

/// What a host can introspect about a mounted pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickListHandle {
    /// Root presentation handle.
    pub id: PickListId,
    pub config: PickListConfig,
}

// =============================================================================
// PickList
// =============================================================================

/// A dual-list transfer widget.
///
/// The caller owns both lists: `set_source`/`set_target` hand in the current
/// contents, and every change comes back through the handlers as a proposal
/// the caller applies and re-supplies. The pick list owns only derived
/// state: selections and filter queries (unless the caller takes those over
/// by registering a change handler) plus the per-list scroll state.
///
/// # Example
///
/// ```ignore
/// let mut picklist = PickList::new(PickListConfig::new().filter_by("name"))
///     .with_lists(cars, Vec::new())
///     .on_change(|event| println!("{} / {}", event.source.len(), event.target.len()));
///
/// picklist.click_item(ListRole::Source, &cars[1], OriginalEvent::click());
/// picklist.transfer(TransferDirection::ToTarget, OriginalEvent::click());
/// ```
pub struct PickList<T: PickListItem> {
    id: PickListId,
    config: PickListConfig,
    equality: Equality,
    filter_fields: Vec<String>,

    source: Vec<T>,
    target: Vec<T>,

    selection: SelectionController<T>,
    filter: FilterController,
    reorder: ReorderCoordinator,
    source_scroll: ScrollState,
    target_scroll: ScrollState,

    engine: Box<dyn FilterEngine<T>>,
    handlers: PickListHandlers<T>,
}

impl<T: PickListItem> PickList<T> {
    /// Create an empty pick list.
    pub fn new(config: PickListConfig) -> Self {
        Self {
            id: PickListId::new(),
            equality: config.equality(),
            filter_fields: config.filter_fields(),
            config,
            source: Vec::new(),
            target: Vec::new(),
            selection: SelectionController::new(),
            filter: FilterController::new(),
            reorder: ReorderCoordinator::new(),
            source_scroll: ScrollState::new(),
            target_scroll: ScrollState::new(),
            engine: Box::new(FieldFilter),
            handlers: PickListHandlers::new(),
        }
    }

    /// Set both lists.
    pub fn with_lists(mut self, source: Vec<T>, target: Vec<T>) -> Self {
        self.set_lists(source, target);
        self
    }

    /// Replace the filter engine.
    pub fn with_filter_engine(mut self, engine: impl FilterEngine<T> + 'static) -> Self {
        self.engine = Box::new(engine);
        self
    }

    // -------------------------------------------------------------------------
    // Handlers
    // -------------------------------------------------------------------------

    pub fn on_change(mut self, handler: impl FnMut(&ChangeEvent<T>) + 'static) -> Self {
        self.handlers.on_change = Some(Box::new(handler));
        self
    }

    pub fn on_move_to_target(mut self, handler: impl FnMut(&MoveEvent<T>) + 'static) -> Self {
        self.handlers.on_move_to_target = Some(Box::new(handler));
        self
    }

    pub fn on_move_all_to_target(
        mut self,
        handler: impl FnMut(&MoveEvent<T>) + 'static,
    ) -> Self {
        self.handlers.on_move_all_to_target = Some(Box::new(handler));
        self
    }

    pub fn on_move_to_source(mut self, handler: impl FnMut(&MoveEvent<T>) + 'static) -> Self {
        self.handlers.on_move_to_source = Some(Box::new(handler));
        self
    }

    pub fn on_move_all_to_source(
        mut self,
        handler: impl FnMut(&MoveEvent<T>) + 'static,
    ) -> Self {
        self.handlers.on_move_all_to_source = Some(Box::new(handler));
        self
    }

    /// Take over the selection of `role`.
    ///
    /// From now on the pick list only proposes selections to `handler`; the
    /// caller applies them with [`set_selection`](Self::set_selection).
    pub fn on_selection_change(
        mut self,
        role: ListRole,
        handler: impl FnMut(&SelectionChangeEvent<T>) + 'static,
    ) -> Self {
        let handler = Some(Box::new(handler) as Box<dyn FnMut(&SelectionChangeEvent<T>)>);
        match role {
            ListRole::Source => self.handlers.on_source_selection_change = handler,
            ListRole::Target => self.handlers.on_target_selection_change = handler,
        }
        self.selection.make_controlled(role);
        self
    }

    /// Take over the filter query of `role`.
    ///
    /// The caller applies proposed queries with
    /// [`set_filter_value`](Self::set_filter_value).
    pub fn on_filter_change(
        mut self,
        role: ListRole,
        handler: impl FnMut(&FilterChangeEvent) + 'static,
    ) -> Self {
        let handler = Some(Box::new(handler) as Box<dyn FnMut(&FilterChangeEvent)>);
        match role {
            ListRole::Source => self.handlers.on_source_filter_change = handler,
            ListRole::Target => self.handlers.on_target_filter_change = handler,
        }
        self.filter.make_controlled(role);
        self
    }

    // -------------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------------

    pub fn id(&self) -> PickListId {
        self.id
    }

    pub fn config(&self) -> &PickListConfig {
        &self.config
    }

    /// Root handle plus configuration, for host introspection.
    pub fn handle(&self) -> PickListHandle {
        PickListHandle {
            id: self.id,
            config: self.config.clone(),
        }
    }

    pub fn shows_filter(&self, role: ListRole) -> bool {
        self.config.shows_filter(role)
    }

    pub fn shows_controls(&self, role: ListRole) -> bool {
        self.config.shows_controls(role)
    }

    // -------------------------------------------------------------------------
    // Caller-owned props
    // -------------------------------------------------------------------------

    /// Full contents of `role`.
    pub fn list(&self, role: ListRole) -> &[T] {
        match role {
            ListRole::Source => &self.source,
            ListRole::Target => &self.target,
        }
    }

    pub fn set_source(&mut self, source: Vec<T>) {
        self.source = source;
    }

    pub fn set_target(&mut self, target: Vec<T>) {
        self.target = target;
    }

    pub fn set_lists(&mut self, source: Vec<T>, target: Vec<T>) {
        self.source = source;
        self.target = target;
    }

    /// Re-supply a controlled selection. Ignored when the pick list owns it.
    pub fn set_selection(&mut self, role: ListRole, items: Vec<T>) -> bool {
        self.selection.supply(role, items, &self.equality)
    }

    /// Re-supply a controlled filter query. Ignored when the pick list owns it.
    pub fn set_filter_value(&mut self, role: ListRole, query: impl Into<String>) -> bool {
        self.filter.supply(role, query)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Current selection of `role`, in selection order.
    pub fn selection(&self, role: ListRole) -> &[T] {
        self.selection.selection(role).items()
    }

    pub fn is_selected(&self, role: ListRole, item: &T) -> bool {
        self.selection.selection(role).contains(item, &self.equality)
    }

    /// Replace the selection of `role`. A non-empty selection in the other
    /// list is cleared.
    pub fn change_selection(
        &mut self,
        role: ListRole,
        items: Vec<T>,
        original_event: OriginalEvent,
    ) {
        self.selection.change_selection(
            role,
            items,
            original_event,
            &self.equality,
            &mut self.handlers,
        );
    }

    /// Apply a click on `item` in the `role` list.
    pub fn click_item(&mut self, role: ListRole, item: &T, original_event: OriginalEvent) {
        let next = self.selection.selection(role).clicked(
            item,
            &self.equality,
            &original_event,
            self.config.meta_key_selection,
        );
        self.change_selection(role, next, original_event);
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Current filter query of `role`, as typed.
    pub fn filter_value(&self, role: ListRole) -> &str {
        self.filter.query(role)
    }

    pub fn change_filter(
        &mut self,
        role: ListRole,
        query: impl Into<String>,
        original_event: OriginalEvent,
    ) {
        self.filter
            .change_filter(role, query.into(), original_event, &mut self.handlers);
    }

    /// The items of `role` that should be rendered.
    pub fn visible(&self, role: ListRole) -> Vec<T> {
        self.filter.visible(
            role,
            self.list(role),
            self.filter_settings(),
            self.engine.as_ref(),
        )
    }

    /// Positions of selected items in the visible list of `role`.
    pub fn highlighted_indices(&self, role: ListRole) -> Vec<usize> {
        let selection = self.selection.selection(role);
        self.visible(role)
            .iter()
            .enumerate()
            .filter(|(_, item)| selection.contains(item, &self.equality))
            .map(|(index, _)| index)
            .collect()
    }

    fn filter_settings(&self) -> FilterSettings<'_> {
        FilterSettings {
            fields: &self.filter_fields,
            mode: self.config.filter_match_mode,
            locale: self.config.filter_locale.as_deref(),
        }
    }

    // -------------------------------------------------------------------------
    // Reordering
    // -------------------------------------------------------------------------

    /// Move the selected items of `role` in `direction`.
    ///
    /// Notifies `on_change` with the reordered list and schedules a scroll
    /// for the next [`after_render`](Self::after_render). Does nothing when
    /// `role` has no selection. Returns the reordered list.
    pub fn reorder(
        &mut self,
        role: ListRole,
        direction: ReorderDirection,
        original_event: OriginalEvent,
    ) -> Option<Vec<T>> {
        let reordered = reorder_list(
            self.list(role),
            self.selection(role),
            direction,
            &self.equality,
        )?;
        self.reorder_with(role, direction, reordered.clone(), original_event);
        Some(reordered)
    }

    /// Report a reorder computed elsewhere (an external control).
    pub fn reorder_with(
        &mut self,
        role: ListRole,
        direction: ReorderDirection,
        reordered: Vec<T>,
        original_event: OriginalEvent,
    ) {
        debug!("{} list reordered {}", role, direction);
        let (source, target) = match role {
            ListRole::Source => (reordered, self.target.clone()),
            ListRole::Target => (self.source.clone(), reordered),
        };
        self.handlers.emit_change(&ChangeEvent {
            original_event,
            source,
            target,
        });
        self.reorder.record(role, direction);
    }

    /// [`reorder`](Self::reorder) by direction name. Unknown names do nothing.
    pub fn reorder_named(
        &mut self,
        role: ListRole,
        direction: &str,
        original_event: OriginalEvent,
    ) -> Option<Vec<T>> {
        match direction.parse::<ReorderDirection>() {
            Ok(direction) => self.reorder(role, direction, original_event),
            Err(err) => {
                debug!("ignoring reorder: {}", err);
                None
            }
        }
    }

    /// Whether a reorder is waiting for the next render.
    pub fn has_pending_reorder(&self) -> bool {
        self.reorder.pending().is_some()
    }

    /// Call once the presentation layer has rendered.
    ///
    /// Consumes the pending reorder, if any, and schedules the scroll that
    /// keeps the moved items in view. The pending reorder is cleared even
    /// when no scroll can be scheduled (nothing highlighted, list not laid
    /// out yet).
    pub fn after_render(&mut self, now: Instant) -> Option<ScrollEffect> {
        let event = self.reorder.take()?;
        let highlighted = self.highlighted_indices(event.role);

        let Some(effect) = ScrollEffect::for_reorder(event, &highlighted) else {
            trace!("no highlighted items in {} list, skipping scroll", event.role);
            return None;
        };

        let scroll = self.scroll_mut(event.role);
        if !scroll.is_laid_out() {
            trace!("{} list not laid out, skipping scroll", event.role);
            return None;
        }
        effect.schedule(scroll, now);
        Some(effect)
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    pub fn scroll(&self, role: ListRole) -> &ScrollState {
        match role {
            ListRole::Source => &self.source_scroll,
            ListRole::Target => &self.target_scroll,
        }
    }

    pub fn scroll_mut(&mut self, role: ListRole) -> &mut ScrollState {
        match role {
            ListRole::Source => &mut self.source_scroll,
            ListRole::Target => &mut self.target_scroll,
        }
    }

    /// Layout feedback: `viewport` rows of `role` are visible.
    pub fn sync_layout(&mut self, role: ListRole, viewport: usize) {
        let content_height = self.visible(role).len();
        let scroll = self.scroll_mut(role);
        scroll.set_content_height(content_height);
        scroll.set_viewport(viewport);
    }

    /// Apply and return the scroll request of `role` that is ready at `now`.
    pub fn take_scroll_request(&mut self, role: ListRole, now: Instant) -> Option<ScrollRequest> {
        self.scroll_mut(role).process_request(now)
    }

    // -------------------------------------------------------------------------
    // Transfer
    // -------------------------------------------------------------------------

    /// Move items in `direction`.
    ///
    /// Notifies the directional handler with the items to move, clears both
    /// selections, and notifies `on_change` with both lists as they should
    /// look afterwards. The caller's lists are not modified.
    pub fn transfer(&mut self, direction: TransferDirection, original_event: OriginalEvent) {
        let plan = self.plan_transfer(direction);
        plan.dispatch(original_event, &mut self.handlers);

        self.selection
            .clear_all(original_event, &self.equality, &mut self.handlers);

        self.handlers.emit_change(&ChangeEvent {
            original_event,
            source: plan.source,
            target: plan.target,
        });
    }

    /// [`transfer`](Self::transfer) by direction name. Unknown names do
    /// nothing. Returns true if a transfer ran.
    pub fn transfer_named(&mut self, direction: &str, original_event: OriginalEvent) -> bool {
        match direction.parse::<TransferDirection>() {
            Ok(direction) => {
                self.transfer(direction, original_event);
                true
            }
            Err(err) => {
                debug!("ignoring transfer: {}", err);
                false
            }
        }
    }

    /// Work out a transfer without notifying anyone.
    pub fn plan_transfer(&self, direction: TransferDirection) -> TransferPlan<T> {
        let source_visible = self.visible(ListRole::Source);
        let target_visible = self.visible(ListRole::Target);
        TransferPlan::new(
            direction,
            self.side(ListRole::Source, &source_visible),
            self.side(ListRole::Target, &target_visible),
            &self.equality,
        )
    }

    /// Whether the button for `direction` should be enabled.
    pub fn can_transfer(&self, direction: TransferDirection) -> bool {
        let role = direction.from_role();
        let visible = self.visible(role);
        can_transfer(direction, self.side(role, &visible))
    }

    fn side<'a>(&'a self, role: ListRole, visible: &'a [T]) -> TransferSide<'a, T> {
        TransferSide {
            list: self.list(role),
            visible,
            selection: self.selection(role),
        }
    }
}

impl<T: PickListItem + std::fmt::Debug> std::fmt::Debug for PickList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickList")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("source", &self.source)
            .field("target", &self.target)
            .field("selection", &self.selection)
            .field("filter", &self.filter)
            .field("reorder", &self.reorder)
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}
