//! Output formatting
//!
//! Final stage of the translation pipeline: whitespace normalization and
//! spacing around Arabic text.

use super::bidi::is_rtl_char;

/// Operators padded with spaces when they sit between two Arabic characters.
const SPACED_OPERATORS: &[char] = &[
    '+', '-', '*', '/', '=', '<', '>', '≤', '≥', '≠', '≈', '×', '÷', '·', '±',
];

/// Collapse whitespace, pad `Arabic op Arabic` triples and separate
/// Arabic/Latin letter boundaries.
pub fn format_output(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let spaced = space_operators(&collapsed);
    space_script_boundaries(&spaced)
}

/// Collapse every whitespace run to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `س+ص` becomes `س + ص`. Chains (`س+ص+ع`) are handled in one scan.
pub fn space_operators(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    for (i, &ch) in chars.iter().enumerate() {
        let between_arabic = SPACED_OPERATORS.contains(&ch)
            && i > 0
            && is_rtl_char(chars[i - 1])
            && chars.get(i + 1).copied().is_some_and(is_rtl_char);
        if between_arabic {
            out.push(' ');
            out.push(ch);
            out.push(' ');
        } else {
            out.push(ch);
        }
    }
    out
}

/// Insert a space wherever an Arabic character touches a Latin letter.
pub fn space_script_boundaries(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if let Some(p) = prev {
            let boundary = (is_rtl_char(p) && ch.is_ascii_alphabetic())
                || (p.is_ascii_alphabetic() && is_rtl_char(ch));
            if boundary {
                out.push(' ');
            }
        }
        out.push(ch);
        prev = Some(ch);
    }
    out
}
