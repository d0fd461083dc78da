//! Charset normalization for raw comment text.

/// Lowercase the input and delete every character outside the allowed set:
/// CJK ideographs (U+4E00..=U+9FA5), ASCII letters, ASCII digits.
///
/// Whitespace, punctuation and emoji are removed rather than replaced, so
/// adjacent words may end up concatenated. Never fails; empty input yields
/// an empty string.
pub fn normalize_charset(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| is_allowed(c))
        .collect()
}

fn is_allowed(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fa5}') || c.is_ascii_alphanumeric()
}
