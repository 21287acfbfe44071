//! Bidi wrapping for Arabic runs
//!
//! [`ensure_rtl`] wraps every maximal run of Arabic-script characters in
//! RLE … PDF. It is not idempotent on its own; [`normalize_mixed`] strips
//! existing bidi controls first, so applying it twice changes nothing.

use lazy_static::lazy_static;
use regex::Regex;

/// Right-to-left embedding (U+202B)
pub const RLE: char = '\u{202B}';
/// Pop directional formatting (U+202C)
pub const PDF: char = '\u{202C}';

lazy_static! {
    /// Arabic (U+0600–U+06FF) and Arabic Supplement (U+0750–U+077F) runs.
    static ref ARABIC_RUN_RE: Regex = Regex::new(r"[\x{0600}-\x{06FF}\x{0750}-\x{077F}]+").unwrap();
    /// Embeddings, overrides and isolates.
    static ref BIDI_CONTROL_RE: Regex = Regex::new(r"[\x{202A}-\x{202E}\x{2066}-\x{2069}]").unwrap();
}

/// Whether `ch` belongs to the Arabic or Arabic Supplement blocks.
pub fn is_rtl_char(ch: char) -> bool {
    matches!(ch, '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}')
}

/// Whether `text` contains any Arabic-script character.
pub fn has_rtl(text: &str) -> bool {
    text.chars().any(is_rtl_char)
}

/// Wrap each Arabic run in RLE … PDF.
pub fn ensure_rtl(text: &str) -> String {
    ARABIC_RUN_RE
        .replace_all(text, |caps: &regex::Captures| format!("{}{}{}", RLE, &caps[0], PDF))
        .into_owned()
}

/// Remove every embedding, override and isolate control.
pub fn strip_bidi_controls(text: &str) -> String {
    BIDI_CONTROL_RE.replace_all(text, "").into_owned()
}

/// Strip existing bidi controls, then wrap Arabic runs again.
pub fn normalize_mixed(text: &str) -> String {
    ensure_rtl(&strip_bidi_controls(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wraps_arabic_runs() {
        assert_eq!(ensure_rtl("جا(س)"), "\u{202B}جا\u{202C}(\u{202B}س\u{202C})");
        assert_eq!(ensure_rtl("x + 1"), "x + 1");
        assert_eq!(ensure_rtl(""), "");
    }

    #[test]
    fn test_ensure_rtl_double_wraps() {
        let once = ensure_rtl("س");
        assert_ne!(ensure_rtl(&once), once);
    }

    #[test]
    fn test_normalize_mixed_idempotent() {
        let samples = [
            "",
            "x + y",
            "جا(س) + جتا(ص) = ١",
            "\u{202B}س\u{202C}\u{202B}\u{202B}ص",
            "\u{2067}abc\u{2069} ݐ",
        ];
        for s in samples {
            let once = normalize_mixed(s);
            assert_eq!(normalize_mixed(&once), once);
        }
    }

    #[test]
    fn test_is_rtl_char() {
        assert!(is_rtl_char('س'));
        assert!(is_rtl_char('٣'));
        assert!(is_rtl_char('\u{0750}'));
        assert!(!is_rtl_char('x'));
        assert!(has_rtl("a س"));
        assert!(!has_rtl("abc"));
    }
}
