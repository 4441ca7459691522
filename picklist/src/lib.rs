pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod handlers;
pub mod item;
pub mod ownership;
pub mod picklist;
pub mod reorder;
pub mod scroll;
pub mod selection;
pub mod transfer;

pub use picklist::{PickList, PickListHandle, PickListId};

pub mod prelude {
    pub use crate::config::PickListConfig;
    pub use crate::error::PickListError;
    pub use crate::events::{
        ChangeEvent, FilterChangeEvent, InputKind, Modifiers, MoveEvent, OriginalEvent,
        SelectionChangeEvent,
    };
    pub use crate::filter::{FieldFilter, FilterEngine, MatchMode};
    pub use crate::item::{Equality, FieldValue, ListRole, PickListItem};
    pub use crate::picklist::{PickList, PickListHandle, PickListId};
    pub use crate::reorder::{ReorderDirection, ReorderEvent, ScrollEffect, SCROLL_SETTLE_DELAY};
    pub use crate::scroll::{ScrollRequest, ScrollState};
    pub use crate::transfer::{TransferDirection, TransferPlan};
}
