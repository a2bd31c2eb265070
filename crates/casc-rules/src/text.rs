//! String normalization for "cosmetic change" detection.
//!
//! Documentation strings routinely change in ways nobody cares about:
//! capitalization, punctuation, bullet markers, bold tags, re-wrapped
//! whitespace. Normalizing both sides before comparing flags exactly those
//! cases as equal.

/// ASCII punctuation stripped during normalization.
const ASCII_PUNCTUATION: &str = ";-'\"`,.";

/// Normalize a documentation string for comparison.
///
/// Lowercases, strips punctuation (including Unicode single quotes), drops
/// `\li` bullet markers and `<b>`/`</b>` tags, removes newlines, and
/// collapses whitespace runs to single spaces.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let stripped: String = lowered.chars().filter(|c| !is_stripped(*c)).collect();
    let cleaned = stripped
        .replace(" \\li ", " ")
        .replace("<b>", "")
        .replace("</b>", "")
        .replace('\n', "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_stripped(c: char) -> bool {
    ASCII_PUNCTUATION.contains(c) || c == '\u{2018}' || c == '\u{2019}'
}
