//! Moving items between the source and target lists.
//!
//! A transfer never edits the caller's lists. It decides which items should
//! move, computes what both lists would look like afterwards, and notifies
//! the caller through the matching directional handler.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::PickListError;
use crate::events::{MoveEvent, OriginalEvent};
use crate::handlers::{Handler, PickListHandlers};
use crate::item::{Equality, ListRole, PickListItem};

/// One of the four transfer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferDirection {
    /// Selected source items to the target.
    ToTarget,
    /// Every visible source item to the target.
    AllToTarget,
    /// Selected target items to the source.
    ToSource,
    /// Every visible target item to the source.
    AllToSource,
}

impl TransferDirection {
    pub const ALL: [TransferDirection; 4] = [
        TransferDirection::ToTarget,
        TransferDirection::AllToTarget,
        TransferDirection::ToSource,
        TransferDirection::AllToSource,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransferDirection::ToTarget => "toTarget",
            TransferDirection::AllToTarget => "allToTarget",
            TransferDirection::ToSource => "toSource",
            TransferDirection::AllToSource => "allToSource",
        }
    }

    /// The list items are taken from.
    pub fn from_role(self) -> ListRole {
        match self {
            TransferDirection::ToTarget | TransferDirection::AllToTarget => ListRole::Source,
            TransferDirection::ToSource | TransferDirection::AllToSource => ListRole::Target,
        }
    }

    /// Whether the whole visible list moves rather than the selection.
    pub fn is_all(self) -> bool {
        matches!(
            self,
            TransferDirection::AllToTarget | TransferDirection::AllToSource
        )
    }
}

impl fmt::Display for TransferDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransferDirection {
    type Err = PickListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toTarget" => Ok(TransferDirection::ToTarget),
            "allToTarget" => Ok(TransferDirection::AllToTarget),
            "toSource" => Ok(TransferDirection::ToSource),
            "allToSource" => Ok(TransferDirection::AllToSource),
            other => Err(PickListError::UnknownTransferDirection(other.to_string())),
        }
    }
}

/// A list and the parts of it a transfer reads.
#[derive(Debug, Clone, Copy)]
pub struct TransferSide<'a, T> {
    pub list: &'a [T],
    pub visible: &'a [T],
    pub selection: &'a [T],
}

/// Everything a transfer decided, before anyone is notified.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferPlan<T> {
    pub direction: TransferDirection,
    /// Value handed to the directional handler.
    pub payload: Vec<T>,
    /// Source list after the move.
    pub source: Vec<T>,
    /// Target list after the move.
    pub target: Vec<T>,
}

impl<T: PickListItem> TransferPlan<T> {
    /// Work out a transfer.
    ///
    /// The payload is the selection for single moves and the full list for
    /// "all" moves. The resulting lists move the selection (single) or the
    /// visible items (all), skipping items already present on the receiving
    /// side.
    pub fn new(
        direction: TransferDirection,
        source: TransferSide<'_, T>,
        target: TransferSide<'_, T>,
        equality: &Equality,
    ) -> Self {
        let (from, to) = match direction.from_role() {
            ListRole::Source => (source, target),
            ListRole::Target => (target, source),
        };

        let (payload, moving) = if direction.is_all() {
            (from.list.to_vec(), from.visible)
        } else {
            (from.selection.to_vec(), from.selection)
        };

        let mut remaining = from.list.to_vec();
        let mut receiving = to.list.to_vec();
        for item in moving {
            if equality.contains(item, &receiving) {
                continue;
            }
            if let Some(index) = equality.index_of(item, &remaining) {
                receiving.push(remaining.remove(index));
            }
        }

        let (source, target) = match direction.from_role() {
            ListRole::Source => (remaining, receiving),
            ListRole::Target => (receiving, remaining),
        };

        Self {
            direction,
            payload,
            source,
            target,
        }
    }

    /// Deliver the payload to the directional handler, if one is registered.
    ///
    /// Returns true if a handler ran.
    pub fn dispatch(
        &self,
        original_event: OriginalEvent,
        handlers: &mut PickListHandlers<T>,
    ) -> bool {
        let handler: Option<&mut Handler<MoveEvent<T>>> = match self.direction {
            TransferDirection::ToTarget => handlers.on_move_to_target.as_mut(),
            TransferDirection::AllToTarget => handlers.on_move_all_to_target.as_mut(),
            TransferDirection::ToSource => handlers.on_move_to_source.as_mut(),
            TransferDirection::AllToSource => handlers.on_move_all_to_source.as_mut(),
        };

        let Some(handler) = handler else {
            debug!("{} transfer has no handler", self.direction);
            return false;
        };

        debug!("{} transfer of {} items", self.direction, self.payload.len());
        handler(&MoveEvent {
            original_event,
            value: self.payload.clone(),
        });
        true
    }
}

/// Whether the button for `direction` should be enabled.
///
/// Single moves need a selection on the giving side; "all" moves need at
/// least one visible item there.
pub fn can_transfer<T>(direction: TransferDirection, from: TransferSide<'_, T>) -> bool {
    if direction.is_all() {
        !from.visible.is_empty()
    } else {
        !from.selection.is_empty()
    }
}
