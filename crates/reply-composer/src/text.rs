//! Text cleaning helpers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Remove anything that looks like a markup tag.
pub fn strip_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

/// Strip tags, collapse whitespace runs to a single space, and trim.
///
/// Idempotent: cleaning already-clean text returns it unchanged.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let stripped = strip_tags(text);
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

/// Keep the first `max_chars` characters, appending [`ELLIPSIS`] if anything was cut.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}
