//! Field-based filter engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PickListError;
use crate::item::PickListItem;

use super::fuzzy::FuzzyMatcher;
use super::locale::{fold_accents, to_locale_lowercase};

/// How a field value is compared with the filter query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    StartsWith,
    #[default]
    Contains,
    NotContains,
    EndsWith,
    Equals,
    NotEquals,
    /// Subsequence match scored by nucleo-matcher.
    Fuzzy,
}

impl MatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::StartsWith => "startsWith",
            MatchMode::Contains => "contains",
            MatchMode::NotContains => "notContains",
            MatchMode::EndsWith => "endsWith",
            MatchMode::Equals => "equals",
            MatchMode::NotEquals => "notEquals",
            MatchMode::Fuzzy => "fuzzy",
        }
    }

    /// `NotContains` and `NotEquals`, which also match an absent value.
    pub fn is_negated(self) -> bool {
        matches!(self, MatchMode::NotContains | MatchMode::NotEquals)
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = PickListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "startsWith" => Ok(MatchMode::StartsWith),
            "contains" => Ok(MatchMode::Contains),
            "notContains" => Ok(MatchMode::NotContains),
            "endsWith" => Ok(MatchMode::EndsWith),
            "equals" => Ok(MatchMode::Equals),
            "notEquals" => Ok(MatchMode::NotEquals),
            "fuzzy" => Ok(MatchMode::Fuzzy),
            other => Err(PickListError::UnknownMatchMode(other.to_string())),
        }
    }
}

/// Selects the items of a list that match a text query.
///
/// Implementations must keep the input order and must not depend on
/// anything but their arguments.
pub trait FilterEngine<T> {
    /// Items of `list` for which any of `fields` matches `query`.
    ///
    /// `query` arrives already trimmed and lower-cased for `locale`.
    fn filter(
        &self,
        list: &[T],
        fields: &[String],
        query: &str,
        mode: MatchMode,
        locale: Option<&str>,
    ) -> Vec<T>;
}

/// Default engine: reads fields through [`FieldValue`](crate::item::FieldValue)
/// and compares their lower-cased text.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldFilter;

impl<T: PickListItem> FilterEngine<T> for FieldFilter {
    fn filter(
        &self,
        list: &[T],
        fields: &[String],
        query: &str,
        mode: MatchMode,
        locale: Option<&str>,
    ) -> Vec<T> {
        if query.is_empty() {
            return list.to_vec();
        }

        let mut fuzzy = (mode == MatchMode::Fuzzy).then(|| FuzzyMatcher::new(query));
        let query = fold_accents(query);

        list.iter()
            .filter(|item| {
                fields.iter().any(|field| {
                    let Some(value) = item.field(field) else {
                        // An absent value satisfies only the negated modes.
                        return mode.is_negated();
                    };
                    let value = to_locale_lowercase(&value, locale);
                    match fuzzy.as_mut() {
                        Some(fuzzy) => fuzzy.is_match(&value),
                        None => text_matches(&fold_accents(&value), &query, mode),
                    }
                })
            })
            .cloned()
            .collect()
    }
}

fn text_matches(value: &str, query: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::StartsWith => value.starts_with(query),
        MatchMode::Contains => value.contains(query),
        MatchMode::NotContains => !value.contains(query),
        MatchMode::EndsWith => value.ends_with(query),
        MatchMode::Equals => value == query,
        MatchMode::NotEquals => value != query,
        // Handled by the fuzzy matcher before reaching here.
        MatchMode::Fuzzy => false,
    }
}
