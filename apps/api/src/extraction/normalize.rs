//! Repairs PDF extraction artifacts and canonicalizes compound notations.

use once_cell::sync::Lazy;
use regex::Regex;

/// A whole line of single lowercase letters separated by single spaces, e.g. `t y p e`.
/// Trailing spaces left by PDF extraction are allowed.
static LETTER_SPACED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[a-z] )+[a-z] *$").expect("valid letter-spacing regex"));

/// Collapses lines that PDF extraction emitted one letter at a time.
///
/// Only whole lines qualify, so short words inside a sentence (`a b testing`) are untouched
/// unless they make up the entire line. Idempotent: a collapsed line has no interior spaces.
pub fn repair_spacing(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if LETTER_SPACED_LINE.is_match(line) {
                line.replace(' ', "")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Applies fixed `from → to` rewrites in order, e.g. `ui/ux` → `ui ux`.
pub fn canonicalize_tokens(text: &str, rewrites: &[(String, String)]) -> String {
    rewrites
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from.as_str(), to))
}

/// Spacing repair first, then canonical rewrites.
pub fn normalize(text: &str, rewrites: &[(String, String)]) -> String {
    canonicalize_tokens(&repair_spacing(text), rewrites)
}
