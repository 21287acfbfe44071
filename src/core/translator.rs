//! Dictionary-driven translation pipeline
//!
//! Stages run in a fixed order, each gated by one option:
//! 1. LaTeX command translation (opt-in)
//! 2. Function names
//! 3. Variables and symbols
//! 4. Digits
//! 5. Arrow flipping, or the full RTL transform when `apply_rtl` is set
//! 6. Formatting (always)

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::format::format_output;
use super::mask::with_masked;
use super::rtl::{self, RtlOptions};
use crate::data::symbols::{
    variable_for_letter, ARABIC_DIGITS, DIGITS, FUNCTIONS, FUNCTION_KEYS, RESERVED_COMMANDS,
    STRUCTURAL_COMMANDS, VARIABLES, VARIABLE_WORD_KEYS,
};

// =============================================================================
// Translation Options
// =============================================================================

/// Options for the translation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateOptions {
    /// Convert ASCII digits to Arabic-Indic digits
    /// Default: true
    #[serde(default = "default_true")]
    pub translate_numbers: bool,

    /// Replace function names (`sin`, `log`, …)
    /// Default: true
    #[serde(default = "default_true")]
    pub translate_functions: bool,

    /// Replace variables, Greek names and constants
    /// Default: true
    #[serde(default = "default_true")]
    pub translate_variables: bool,

    /// Mirror directional arrows
    /// Default: true
    #[serde(default = "default_true")]
    pub flip_arrows: bool,

    /// Translate `\command` tokens before the word passes
    /// Default: false
    #[serde(default)]
    pub translate_latex_commands: bool,

    /// Run the structural RTL transform (fractions, bounds, matrices, brackets)
    /// Default: false
    #[serde(default)]
    pub apply_rtl: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            translate_numbers: true,
            translate_functions: true,
            translate_variables: true,
            flip_arrows: true,
            translate_latex_commands: false,
            apply_rtl: false,
        }
    }
}

impl TranslateOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stage enabled, including the opt-in ones
    pub fn full() -> Self {
        Self {
            translate_latex_commands: true,
            apply_rtl: true,
            ..Self::default()
        }
    }

    /// Digits only, for text a TeX engine will parse itself
    pub fn digits_only() -> Self {
        Self {
            translate_numbers: true,
            ..Self::none()
        }
    }

    /// Nothing but formatting
    pub fn none() -> Self {
        Self {
            translate_numbers: false,
            translate_functions: false,
            translate_variables: false,
            flip_arrows: false,
            translate_latex_commands: false,
            apply_rtl: false,
        }
    }
}

// =============================================================================
// Patterns
// =============================================================================

lazy_static! {
    static ref COMMAND_NAME_RE: Regex = Regex::new(r"\\([A-Za-z]+)").unwrap();
    static ref FUNCTION_RE: Regex = word_alternation(&FUNCTION_KEYS);
    static ref VARIABLE_WORD_RE: Regex = word_alternation(&VARIABLE_WORD_KEYS);
    static ref LATIN_LETTER_RE: Regex = Regex::new(r"[A-Za-z]").unwrap();
}

/// `\b(?:k1|k2|…)\b` with keys in the given (longest-first) order.
fn word_alternation(keys: &[&str]) -> Regex {
    let alternation = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation)).unwrap()
}

// =============================================================================
// Translator
// =============================================================================

/// Stateless translator; holds only its options.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    options: TranslateOptions,
}

impl Translator {
    pub fn new(options: TranslateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TranslateOptions) {
        self.options = options;
    }

    /// Translate `input` through every enabled stage.
    pub fn translate(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }
        let opts = &self.options;
        let mut out = input.to_string();

        if opts.translate_latex_commands {
            out = self.translate_latex_commands(&out);
        }
        if opts.translate_functions {
            out = self.translate_functions(&out);
            log::trace!("functions: {:?}", out);
        }
        if opts.translate_variables {
            out = self.translate_symbols(&out);
            log::trace!("symbols: {:?}", out);
        }
        if opts.translate_numbers {
            out = self.translate_numbers(&out);
            log::trace!("numbers: {:?}", out);
        }
        if opts.apply_rtl {
            out = self.apply_rtl(&out);
        } else if opts.flip_arrows {
            out = self.flip_arrows(&out);
            log::trace!("arrows: {:?}", out);
        }
        let out = self.format(&out);

        log::debug!("translate: {:?} -> {:?}", input, out);
        out
    }

    /// Like [`translate`](Self::translate), but a missing input yields an
    /// empty string.
    pub fn translate_opt(&self, input: Option<&str>) -> String {
        input.map(|s| self.translate(s)).unwrap_or_default()
    }

    /// Stage 1: structural commands get their direct replacement, reserved
    /// layout commands stay, other commands are looked up as functions and
    /// then as variables.
    pub fn translate_latex_commands(&self, text: &str) -> String {
        let out = COMMAND_NAME_RE.replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            if let Some(rep) = STRUCTURAL_COMMANDS.get(name) {
                return rep.to_string();
            }
            if RESERVED_COMMANDS.contains(name) {
                return caps[0].to_string();
            }
            FUNCTIONS
                .get(name)
                .or_else(|| VARIABLES.get(name))
                .map_or_else(|| caps[0].to_string(), |rep| rep.to_string())
        });
        log::trace!("latex commands: {:?}", out);
        out.into_owned()
    }

    /// Stage 2: whole-word function names, longest first, commands masked.
    pub fn translate_functions(&self, text: &str) -> String {
        with_masked(text, |masked| {
            FUNCTION_RE
                .replace_all(masked, |caps: &Captures| {
                    FUNCTIONS.get(&caps[0]).copied().unwrap_or_default().to_string()
                })
                .into_owned()
        })
    }

    /// Stage 3: multi-letter names first, then every remaining Latin letter
    /// through the single-letter table. Commands masked.
    pub fn translate_symbols(&self, text: &str) -> String {
        with_masked(text, |masked| {
            let words = VARIABLE_WORD_RE.replace_all(masked, |caps: &Captures| {
                VARIABLES.get(&caps[0]).copied().unwrap_or_default().to_string()
            });
            LATIN_LETTER_RE
                .replace_all(&words, |caps: &Captures| {
                    let letter = &caps[0];
                    letter
                        .chars()
                        .next()
                        .and_then(variable_for_letter)
                        .unwrap_or(letter)
                        .to_string()
                })
                .into_owned()
        })
    }

    /// Stage 4: ASCII digits to Arabic-Indic digits.
    pub fn translate_numbers(&self, text: &str) -> String {
        convert_numbers_to_arabic(text)
    }

    /// Stage 5 (default form): mirror arrows only.
    pub fn flip_arrows(&self, text: &str) -> String {
        rtl::flip_arrows(text)
    }

    /// Stage 5 (opt-in form): the full structural RTL transform. Arrows are
    /// flipped here instead of in [`flip_arrows`](Self::flip_arrows).
    pub fn apply_rtl(&self, text: &str) -> String {
        let rtl_options = RtlOptions {
            flip_arrows: self.options.flip_arrows,
            ..RtlOptions::default()
        };
        rtl::adapt(text, &rtl_options)
    }

    /// Stage 6: whitespace and spacing.
    pub fn format(&self, text: &str) -> String {
        format_output(text)
    }
}

/// Map each ASCII digit to its Arabic-Indic form.
pub fn convert_numbers_to_arabic(text: &str) -> String {
    text.chars()
        .map(|c| DIGITS.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Map each Arabic-Indic digit back to ASCII.
pub fn convert_numbers_to_english(text: &str) -> String {
    text.chars()
        .map(|c| ARABIC_DIGITS.get(&c).copied().unwrap_or(c))
        .collect()
}
