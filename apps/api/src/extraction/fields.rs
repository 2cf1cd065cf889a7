//! Education and experience extractors. Both scan the full normalized text and are total:
//! no match gives an empty set or zero.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::models::EducationKeywords;

/// An ASCII integer, whitespace, then `year` or `years` as a whole word.
static YEARS_FIGURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\s+years?\b").expect("valid years regex"));

/// Keywords that occur anywhere in `text` as substrings.
pub fn extract_education(text: &str, keywords: &EducationKeywords) -> BTreeSet<String> {
    keywords
        .keywords()
        .iter()
        .filter(|k| text.contains(k.as_str()))
        .cloned()
        .collect()
}

/// Largest `N` across every "N year(s)" mention, or 0 when there is none.
///
/// Figures too large for `u64` saturate at `u64::MAX`.
pub fn extract_experience_years(text: &str) -> u64 {
    YEARS_FIGURE
        .captures_iter(text)
        // Only overflow can fail: the capture is a non-empty run of ASCII digits.
        .map(|caps| caps[1].parse::<u64>().unwrap_or(u64::MAX))
        .max()
        .unwrap_or(0)
}
