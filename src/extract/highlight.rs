//! Keyword highlighting for transcript display
//!
//! Wraps whole-word occurrences of the action vocabulary in `<mark>` tags so
//! the UI can emphasize them. Presentation only: the classifier matches the
//! same vocabulary as plain substrings, so highlighting and detection can
//! disagree on word fragments ("reviewing" is detected but not highlighted).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::keywords::ACTION_KEYWORDS;

static KEYWORD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ACTION_KEYWORDS
        .iter()
        .map(|kw| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(kw))).unwrap())
        .collect()
});

/// Wrap every whole-word, case-insensitive action keyword occurrence in a
/// `<mark>` span, preserving the original casing.
pub fn highlight_action_keywords(text: &str) -> String {
    let mut highlighted = text.to_string();
    for pattern in KEYWORD_PATTERNS.iter() {
        highlighted = pattern
            .replace_all(&highlighted, "<mark>$0</mark>")
            .into_owned();
    }
    highlighted
}
