//! String helpers for mixed Arabic/Latin text.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::core::bidi::PDF;

/// Right-to-left override (U+202E)
pub const RLO: char = '\u{202E}';

lazy_static! {
    static ref ARABIC_RUN_RE: Regex = Regex::new(r"[\x{0600}-\x{06FF}\x{0750}-\x{077F}]+").unwrap();
    static ref INVISIBLE_RE: Regex =
        Regex::new(r"[\x{200B}-\x{200D}\x{FEFF}\x{202A}-\x{202E}]").unwrap();
    static ref SLUG_STRIP_RE: Regex = Regex::new(r"[^A-Za-z0-9_\s-]").unwrap();
    static ref SLUG_SPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref SLUG_DASHES_RE: Regex = Regex::new(r"-+").unwrap();
}

/// Reverse the characters of `text`.
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

/// Force each Arabic run right-to-left with RLO … PDF.
pub fn add_directional_marks(text: &str) -> String {
    ARABIC_RUN_RE
        .replace_all(text, |caps: &regex::Captures| format!("{}{}{}", RLO, &caps[0], PDF))
        .into_owned()
}

/// Drop zero-width characters, the BOM and bidi embeddings/overrides, then
/// normalize to NFC.
pub fn sanitize_text(text: &str) -> String {
    INVISIBLE_RE.replace_all(text, "").nfc().collect()
}

fn transliterate_arabic(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'أ' | 'ا' | 'ع' | 'ى' | 'ء' => "a",
        'إ' => "i",
        'آ' => "aa",
        'ب' => "b",
        'ت' | 'ط' => "t",
        'ث' => "th",
        'ذ' | 'ظ' => "dh",
        'ج' => "j",
        'ح' | 'ه' | 'ة' => "h",
        'خ' => "kh",
        'د' | 'ض' => "d",
        'ر' => "r",
        'ز' => "z",
        'س' | 'ص' => "s",
        'ش' => "sh",
        'غ' => "gh",
        'ف' => "f",
        'ق' => "q",
        'ك' => "k",
        'ل' => "l",
        'م' => "m",
        'ن' => "n",
        'و' => "w",
        'ي' => "y",
        _ => return None,
    };
    Some(latin)
}

/// ASCII slug; Arabic letters are transliterated to Latin first and any
/// other non-ASCII character is dropped.
pub fn to_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let transliterated: String = lowered
        .trim()
        .chars()
        .map(|c| transliterate_arabic(c).map_or_else(|| c.to_string(), str::to_string))
        .collect();
    let stripped = SLUG_STRIP_RE.replace_all(&transliterated, "");
    let dashed = SLUG_SPACE_RE.replace_all(&stripped, "-");
    let collapsed = SLUG_DASHES_RE.replace_all(&dashed, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reverse_text() {
        assert_eq!(reverse_text("abc"), "cba");
        assert_eq!(reverse_text("جا"), "اج");
    }

    #[test]
    fn test_add_directional_marks() {
        assert_eq!(add_directional_marks("x س"), "x \u{202E}س\u{202C}");
    }

    #[test]
    fn test_sanitize_text() {
        assert_eq!(sanitize_text("a\u{200B}b\u{202B}س\u{202C}\u{FEFF}"), "abس");
    }

    #[test]
    fn test_sanitize_text_composes() {
        assert_eq!(sanitize_text("e\u{0301}"), "\u{e9}");
        assert_eq!(sanitize_text("ا\u{0653}"), "آ");
    }

    #[test]
    fn test_to_slug() {
        assert_eq!(to_slug("  Hello World! "), "hello-world");
        assert_eq!(to_slug("جذر تربيعي"), "jdhr-trbyay");
        assert_eq!(to_slug("--a -- b--"), "a-b");
        assert_eq!(to_slug("α٣ x"), "x");
    }
}
