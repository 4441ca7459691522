//! Fuzzy matching using nucleo-matcher.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// A compiled fuzzy query with its own matcher scratch space.
///
/// # Example
///
/// ```ignore
/// let mut fuzzy = FuzzyMatcher::new("ap");
/// assert!(fuzzy.score("apricot").is_some());
/// assert!(fuzzy.score("banana").is_none());
/// ```
pub struct FuzzyMatcher {
    matcher: Matcher,
    pattern: Pattern,
    buf: Vec<char>,
}

impl FuzzyMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            pattern: Pattern::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            ),
            buf: Vec::new(),
        }
    }

    /// Match score for `text` (higher is better), or `None` if it does not match.
    pub fn score(&mut self, text: &str) -> Option<u32> {
        let haystack = Utf32Str::new(text, &mut self.buf);
        self.pattern.score(haystack, &mut self.matcher)
    }

    pub fn is_match(&mut self, text: &str) -> bool {
        self.score(text).is_some()
    }
}

impl std::fmt::Debug for FuzzyMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzyMatcher").finish_non_exhaustive()
    }
}
