//! # arabic-math
//!
//! Translate Latin/LaTeX math notation into Arabic notation and adapt it for
//! right-to-left display.
//!
//! ## Pipeline
//!
//! ```text
//! input ─► LaTeX commands ─► functions ─► variables ─► digits ─► RTL ─► format ─► output
//! ```
//!
//! Each stage is toggled by [`TranslateOptions`]. Command tokens are masked
//! during the word passes so `\sum` never becomes `\ مج` or `\صum`.
//!
//! ## Example
//!
//! ```
//! use arabic_math::{translate_with_options, TranslateOptions};
//!
//! let out = translate_with_options("sin(x) + cos(y) = 1", &TranslateOptions::default());
//! assert_eq!(out, "جا(س) + جتا(ص) = ١");
//! ```
//!
//! [`ArabicMath`] adds bidi wrapping, render hand-off, events and fonts on
//! top of the pure pipeline.

pub mod core;
pub mod data;
pub mod events;
pub mod facade;
pub mod fonts;
pub mod render;
pub mod utils;
pub mod wasm;

pub use crate::core::{
    analyze_latex_structure, convert_numbers_to_arabic, convert_numbers_to_english,
    ensure_rtl, normalize_mixed, tokenize, BracketBalance, BracketError, ExpressionType,
    Parser, RtlOptions, ScanPolicy, Token, TokenKind, TranslateOptions, Translator,
    ValidationResult,
};
pub use events::{EventKind, EventPayload, ListenerId};
pub use facade::{ArabicMath, ArabicMathOptions, VERSION};
pub use fonts::{FontRegistry, DEFAULT_FONTS};
pub use render::{MemoryTarget, RenderJob, RenderMode, RenderTarget};
pub use utils::error::{ArabicMathError, Result};

/// Translate with default options (no bidi wrapping).
pub fn translate(input: &str) -> String {
    Translator::default().translate(input)
}

/// Translate with explicit stage toggles (no bidi wrapping).
pub fn translate_with_options(input: &str, options: &TranslateOptions) -> String {
    Translator::new(*options).translate(input)
}

/// Bracket/brace validation with the unsupported-command warning.
pub fn validate(equation: &str) -> ValidationResult {
    Parser::new().validate(equation)
}

/// First matching expression kind, `Expression` when nothing matches.
pub fn detect_expression_type(expr: &str) -> ExpressionType {
    crate::core::detect_expression_type(expr)
}

/// Sorted single-letter variable names.
pub fn extract_variables(expr: &str) -> Vec<String> {
    crate::core::extract_variables(expr)
}

/// Every bracket error, including escaped brackets.
pub fn check_bracket_balance(expr: &str) -> BracketBalance {
    crate::core::classify::check_bracket_balance(expr)
}
