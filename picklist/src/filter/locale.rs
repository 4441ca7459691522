//! Locale-aware lower-casing and accent folding for filter text.

use nucleo_matcher::chars;

/// Lower-case `text` the way `locale` expects.
///
/// Turkish and Azeri map `I` to dotless `ı` and `İ` to `i`. Every other
/// locale, and no locale, uses Unicode default lower-casing.
pub fn to_locale_lowercase(text: &str, locale: Option<&str>) -> String {
    if !locale.is_some_and(is_turkic) {
        return text.to_lowercase();
    }

    let mut lowered = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'I' => lowered.push('ı'),
            'İ' => lowered.push('i'),
            other => lowered.extend(other.to_lowercase()),
        }
    }
    lowered
}

/// Trim and lower-case a filter query.
pub fn normalize_query(query: &str, locale: Option<&str>) -> String {
    to_locale_lowercase(query.trim(), locale)
}

/// Strip accents from Latin letters, so `café` compares equal to `cafe`.
///
/// Dotless `ı` is its own letter and is kept.
pub fn fold_accents(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    text.chars()
        .map(|ch| match ch {
            'ı' => ch,
            other => chars::normalize(other),
        })
        .collect()
}

fn is_turkic(tag: &str) -> bool {
    let language = tag.split(['-', '_']).next().unwrap_or_default();
    language.eq_ignore_ascii_case("tr") || language.eq_ignore_ascii_case("az")
}
