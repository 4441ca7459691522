//! Text filtering of the source and target lists.
//!
//! - `engine.rs` - the `FilterEngine` seam, match modes and the default engine
//! - `controller.rs` - per-list query state and visible-list computation
//! - `locale.rs` - locale-aware lower-casing and accent folding
//! - `fuzzy.rs` - nucleo-matcher wrapper for fuzzy mode

mod controller;
mod engine;
mod fuzzy;
mod locale;

pub use controller::{FilterController, FilterSettings};
pub use engine::{FieldFilter, FilterEngine, MatchMode};
pub use fuzzy::FuzzyMatcher;
pub use locale::{fold_accents, normalize_query, to_locale_lowercase};
