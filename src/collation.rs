//! Collation
//!
//! Name ordering close to what a pt-BR collator gives: accents and case only
//! break ties, so "água" sorts next to "agua" and before "Batom".

use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Primary collation key: decomposed, accents dropped, lowercased.
pub fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two names alphabetically, ignoring case and accents first.
pub fn compare_names(left: &str, right: &str) -> Ordering {
    collation_key(left)
        .cmp(&collation_key(right))
        .then_with(|| left.to_lowercase().cmp(&right.to_lowercase()))
        .then_with(|| left.cmp(right))
}

/// Case- and accent-insensitive substring match used by the search boxes.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    let needle = collation_key(needle.trim());

    needle.is_empty() || collation_key(haystack).contains(&needle)
}
