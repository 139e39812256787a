//! Industry title normalization
//!
//! Titles from the survey and administrative panels are only comparable after
//! normalization, so every textual join key passes through [`normalize_title`].

/// Canonicalize a free-text title for join-key matching.
///
/// Trims surrounding whitespace, lowercases, replaces `&` with `and` and removes
/// all ASCII punctuation. Whitespace exposed by removed punctuation is trimmed as
/// well, so the result is stable under repeated application.
#[must_use]
pub fn normalize_title(text: &str) -> String {
    let stripped: String = text
        .trim()
        .to_lowercase()
        .replace('&', "and")
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    stripped.trim().to_string()
}

/// Normalize an optional title, mapping titles that normalize to nothing to `None`
#[must_use]
pub fn normalize_optional(text: Option<&str>) -> Option<String> {
    text.map(normalize_title).filter(|t| !t.is_empty())
}
