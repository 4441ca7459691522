//! Within-list reordering and the post-render scroll hand-off.
//!
//! A reorder changes the order of one list, notifies the caller, and leaves a
//! [`ReorderEvent`] in a one-shot [`Mailbox`]. After the caller has supplied
//! the reordered list and the presentation layer has rendered it, the event
//! is taken out of the mailbox and turned into a scroll request so the moved
//! items stay in view.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::trace;

use crate::error::PickListError;
use crate::item::{Equality, ListRole, PickListItem};
use crate::scroll::{ScrollRequest, ScrollState};

/// How long a scroll-to-bottom waits for layout to settle.
pub const SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(100);

// =============================================================================
// ReorderDirection
// =============================================================================

/// Where the selected items of a list are moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReorderDirection {
    /// One position towards the start.
    Up,
    /// To the start of the list.
    Top,
    /// One position towards the end.
    Down,
    /// To the end of the list.
    Bottom,
}

impl ReorderDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            ReorderDirection::Up => "up",
            ReorderDirection::Top => "top",
            ReorderDirection::Down => "down",
            ReorderDirection::Bottom => "bottom",
        }
    }
}

impl fmt::Display for ReorderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReorderDirection {
    type Err = PickListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(ReorderDirection::Up),
            "top" => Ok(ReorderDirection::Top),
            "down" => Ok(ReorderDirection::Down),
            "bottom" => Ok(ReorderDirection::Bottom),
            other => Err(PickListError::UnknownReorderDirection(other.to_string())),
        }
    }
}

/// The most recent reorder, waiting for the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderEvent {
    pub role: ListRole,
    pub direction: ReorderDirection,
}

// =============================================================================
// Mailbox
// =============================================================================

/// A single-slot message hand-off.
///
/// Posting overwrites an unread message. Taking always leaves the slot empty.
#[derive(Debug, Clone)]
pub struct Mailbox<M> {
    slot: Option<M>,
}

impl<M> Default for Mailbox<M> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<M> Mailbox<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave a message, replacing any unread one. Returns the replaced message.
    pub fn post(&mut self, message: M) -> Option<M> {
        self.slot.replace(message)
    }

    /// Read and clear the message.
    pub fn take(&mut self) -> Option<M> {
        self.slot.take()
    }

    pub fn peek(&self) -> Option<&M> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

// =============================================================================
// Reordering
// =============================================================================

/// Move the `selection` items of `list` in `direction`.
///
/// Returns `None` when there is nothing selected. Items are walked in
/// selection order for `Up`/`Top` and in reverse selection order for
/// `Down`/`Bottom`; the walk stops at the first item already at the edge.
pub fn reorder_list<T: PickListItem>(
    list: &[T],
    selection: &[T],
    direction: ReorderDirection,
    equality: &Equality,
) -> Option<Vec<T>> {
    if selection.is_empty() {
        return None;
    }

    let mut list = list.to_vec();
    match direction {
        ReorderDirection::Up => {
            for selected in selection {
                match equality.index_of(selected, &list) {
                    Some(0) => break,
                    Some(index) => list.swap(index, index - 1),
                    None => {}
                }
            }
        }
        ReorderDirection::Top => {
            for selected in selection {
                match equality.index_of(selected, &list) {
                    Some(0) => break,
                    Some(index) => {
                        let moved = list.remove(index);
                        list.insert(0, moved);
                    }
                    None => {}
                }
            }
        }
        ReorderDirection::Down => {
            let last = list.len().saturating_sub(1);
            for selected in selection.iter().rev() {
                match equality.index_of(selected, &list) {
                    Some(index) if index == last => break,
                    Some(index) => list.swap(index, index + 1),
                    None => {}
                }
            }
        }
        ReorderDirection::Bottom => {
            let last = list.len().saturating_sub(1);
            for selected in selection.iter().rev() {
                match equality.index_of(selected, &list) {
                    Some(index) if index == last => break,
                    Some(index) => {
                        let moved = list.remove(index);
                        list.push(moved);
                    }
                    None => {}
                }
            }
        }
    }

    Some(list)
}

// =============================================================================
// Post-render scroll
// =============================================================================

/// A scroll request scheduled on one list after a reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEffect {
    pub role: ListRole,
    pub request: ScrollRequest,
    /// Set when the request waits for layout to settle.
    pub delay: Option<Duration>,
}

impl ScrollEffect {
    /// The effect for a consumed reorder.
    ///
    /// `highlighted` are the visible indices of selected items, in list
    /// order. `Up`/`Down` need at least one of them; `Top`/`Bottom` do not.
    pub fn for_reorder(event: ReorderEvent, highlighted: &[usize]) -> Option<Self> {
        let (request, delay) = match event.direction {
            ReorderDirection::Up => (ScrollRequest::IntoView(*highlighted.first()?), None),
            ReorderDirection::Down => (ScrollRequest::IntoView(*highlighted.last()?), None),
            ReorderDirection::Top => (ScrollRequest::Home, None),
            ReorderDirection::Bottom => (ScrollRequest::End, Some(SCROLL_SETTLE_DELAY)),
        };
        Some(Self {
            role: event.role,
            request,
            delay,
        })
    }

    /// Queue this effect on the list's scroll state.
    pub fn schedule(&self, scroll: &mut ScrollState, now: Instant) {
        match (self.request, self.delay) {
            (ScrollRequest::IntoView(index), _) => scroll.scroll_into_view(index),
            (ScrollRequest::Home, _) => scroll.home(),
            (ScrollRequest::End, delay) => scroll.end_after(now, delay.unwrap_or_default()),
        }
        trace!("scheduled {:?} on {} list", self.request, self.role);
    }
}

/// Holds the pending reorder between the change and the next render.
#[derive(Debug, Clone, Default)]
pub struct ReorderCoordinator {
    pending: Mailbox<ReorderEvent>,
}

impl ReorderCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reorder. An unconsumed earlier one is dropped.
    pub fn record(&mut self, role: ListRole, direction: ReorderDirection) {
        if let Some(dropped) = self.pending.post(ReorderEvent { role, direction }) {
            trace!("superseded pending reorder {:?}", dropped);
        }
    }

    /// Consume the pending reorder, if any.
    pub fn take(&mut self) -> Option<ReorderEvent> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<&ReorderEvent> {
        self.pending.peek()
    }
}
