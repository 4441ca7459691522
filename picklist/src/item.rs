//! Item identity, field access and list roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PickListError;

// =============================================================================
// ListRole
// =============================================================================

/// Which of the two lists a piece of state belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListRole {
    Source,
    Target,
}

impl ListRole {
    /// The opposite list.
    pub fn other(self) -> Self {
        match self {
            ListRole::Source => ListRole::Target,
            ListRole::Target => ListRole::Source,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListRole::Source => "source",
            ListRole::Target => "target",
        }
    }
}

impl fmt::Display for ListRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListRole {
    type Err = PickListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source" => Ok(ListRole::Source),
            "target" => Ok(ListRole::Target),
            other => Err(PickListError::UnknownRole(other.to_string())),
        }
    }
}

// =============================================================================
// FieldValue
// =============================================================================

/// Read access to named fields of an item, as text.
///
/// Used for `data_key` identity and for filtering on `filter_by` fields.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, PartialEq)]
/// struct Car {
///     vin: String,
///     brand: String,
/// }
///
/// impl FieldValue for Car {
///     fn field(&self, path: &str) -> Option<String> {
///         match path {
///             "vin" => Some(self.vin.clone()),
///             "brand" => Some(self.brand.clone()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait FieldValue {
    /// Resolve `path` to a text value, or `None` if the field is absent.
    fn field(&self, path: &str) -> Option<String>;
}

/// Resolves dotted paths (`address.city`, `tags.0`) through objects and arrays.
///
/// `null` resolves to `None`. Nested objects and arrays resolve to their JSON text.
impl FieldValue for Value {
    fn field(&self, path: &str) -> Option<String> {
        let mut current = self;
        for segment in path.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        match current {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            compound => Some(compound.to_string()),
        }
    }
}

/// Plain strings are their own value under any field name.
impl FieldValue for String {
    fn field(&self, _path: &str) -> Option<String> {
        Some(self.clone())
    }
}

impl FieldValue for &'static str {
    fn field(&self, _path: &str) -> Option<String> {
        Some((*self).to_string())
    }
}

/// Items that can live in a pick list.
///
/// Blanket-implemented for every `Clone + PartialEq + FieldValue` type.
pub trait PickListItem: Clone + PartialEq + FieldValue {}

impl<T: Clone + PartialEq + FieldValue> PickListItem for T {}

// =============================================================================
// Equality
// =============================================================================

/// How two items are judged to be the same item.
///
/// Every collaborator that looks items up (selection, reorder, transfer)
/// goes through this one policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Equality {
    /// Compare with `PartialEq`.
    #[default]
    Structural,
    /// Compare the text of the named key field. Falls back to `PartialEq`
    /// when either item lacks the field.
    Key(String),
}

impl Equality {
    /// Build the policy from an optional `data_key` setting.
    pub fn from_data_key(data_key: Option<&str>) -> Self {
        match data_key {
            Some(key) if !key.is_empty() => Equality::Key(key.to_string()),
            _ => Equality::Structural,
        }
    }

    pub fn equals<T: PickListItem>(&self, a: &T, b: &T) -> bool {
        match self {
            Equality::Structural => a == b,
            Equality::Key(key) => match (a.field(key), b.field(key)) {
                (Some(left), Some(right)) => left == right,
                _ => a == b,
            },
        }
    }

    /// Position of `item` in `list`.
    pub fn index_of<T: PickListItem>(&self, item: &T, list: &[T]) -> Option<usize> {
        list.iter().position(|candidate| self.equals(item, candidate))
    }

    pub fn contains<T: PickListItem>(&self, item: &T, list: &[T]) -> bool {
        self.index_of(item, list).is_some()
    }
}
