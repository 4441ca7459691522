//! Input and notification event types.
//!
//! `OriginalEvent` describes the user interaction that caused a change and is
//! carried, untouched, inside every notification the pick list emits.

/// Modifier keys held during an interaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Control key held
    pub ctrl: bool,
    /// Meta (command / super) key held
    pub meta: bool,
    /// Shift key held
    pub shift: bool,
    /// Alt key held
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    /// Only ctrl held
    pub const CTRL: Self = Self {
        ctrl: true,
        meta: false,
        shift: false,
        alt: false,
    };

    /// Ctrl or meta held; both toggle membership in meta-key selection.
    pub fn toggles(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// What kind of interaction produced an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    /// Mouse click
    #[default]
    Click,
    /// Touch tap (meta-key selection is bypassed)
    Touch,
    /// Keyboard activation
    Key,
    /// Filter text input
    Text,
    /// Issued by code rather than a user
    Programmatic,
}

/// The interaction that triggered a pick list operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OriginalEvent {
    pub kind: InputKind,
    pub modifiers: Modifiers,
}

impl OriginalEvent {
    pub const fn new(kind: InputKind, modifiers: Modifiers) -> Self {
        Self { kind, modifiers }
    }

    /// A plain click without modifiers.
    pub const fn click() -> Self {
        Self::new(InputKind::Click, Modifiers::NONE)
    }

    /// A click with the given modifiers held.
    pub const fn click_with(modifiers: Modifiers) -> Self {
        Self::new(InputKind::Click, modifiers)
    }

    pub const fn touch() -> Self {
        Self::new(InputKind::Touch, Modifiers::NONE)
    }

    pub const fn key() -> Self {
        Self::new(InputKind::Key, Modifiers::NONE)
    }

    pub const fn text() -> Self {
        Self::new(InputKind::Text, Modifiers::NONE)
    }

    pub const fn programmatic() -> Self {
        Self::new(InputKind::Programmatic, Modifiers::NONE)
    }

    pub fn is_touch(&self) -> bool {
        self.kind == InputKind::Touch
    }
}

// =============================================================================
// Notifications
// =============================================================================

/// Passed to selection-change handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChangeEvent<T> {
    pub original_event: OriginalEvent,
    pub value: Vec<T>,
}

/// Passed to filter-change handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChangeEvent {
    pub original_event: OriginalEvent,
    pub value: String,
}

/// Passed to the four directional move handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveEvent<T> {
    pub original_event: OriginalEvent,
    /// Items the caller should move.
    pub value: Vec<T>,
}

/// Passed to `on_change` after a transfer or reorder.
///
/// `source` and `target` are the lists as they should look after the
/// operation. The pick list never writes them back itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent<T> {
    pub original_event: OriginalEvent,
    pub source: Vec<T>,
    pub target: Vec<T>,
}
