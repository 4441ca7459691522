//! State ownership strategy.
//!
//! Each piece of pick list state (a selection, a filter query) is owned
//! either by the widget or by the embedding caller. The choice is made per
//! slot when the caller registers a change handler for it.

/// A state slot and its owner.
#[derive(Debug, Clone, PartialEq)]
pub enum Owned<V> {
    /// Owned by the widget; updated by widget operations.
    Internal(V),
    /// Owned by the caller; only changes when the caller re-supplies it.
    External(V),
}

impl<V: Default> Default for Owned<V> {
    fn default() -> Self {
        Owned::Internal(V::default())
    }
}

impl<V> Owned<V> {
    /// Current value, whoever owns it.
    pub fn get(&self) -> &V {
        match self {
            Owned::Internal(value) | Owned::External(value) => value,
        }
    }

    /// Whether the caller owns this slot.
    pub fn is_controlled(&self) -> bool {
        matches!(self, Owned::External(_))
    }

    /// Widget-side write. Ignored for caller-owned slots.
    ///
    /// Returns true if the value was stored.
    pub fn store(&mut self, value: V) -> bool {
        match self {
            Owned::Internal(current) => {
                *current = value;
                true
            }
            Owned::External(_) => false,
        }
    }

    /// Caller-side write (a re-supplied prop). Ignored for widget-owned slots.
    ///
    /// Returns true if the value was stored.
    pub fn supply(&mut self, value: V) -> bool {
        match self {
            Owned::External(current) => {
                *current = value;
                true
            }
            Owned::Internal(_) => false,
        }
    }

    /// Hand ownership to the caller, keeping the current value.
    pub fn make_controlled(&mut self)
    where
        V: Default,
    {
        if let Owned::Internal(current) = self {
            *self = Owned::External(std::mem::take(current));
        }
    }
}
