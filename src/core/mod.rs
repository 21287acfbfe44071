//! Translation core
//!
//! Everything here is a pure function over its input and the static
//! dictionaries:
//! - `translator`: the staged substitution pipeline
//! - `mask`: command masking used by the word passes
//! - `rtl`: structural right-to-left rewrites
//! - `bidi`: bidi control wrapping of Arabic runs
//! - `parser`, `tokenizer`, `brackets`: validation and tokenization
//! - `classify`: expression kind detection and variable extraction

pub mod bidi;
pub mod brackets;
pub mod classify;
mod format;
pub mod mask;
pub mod parser;
pub mod rtl;
pub mod tokenizer;
pub mod translator;

pub use bidi::{ensure_rtl, has_rtl, is_rtl_char, normalize_mixed, strip_bidi_controls};
pub use brackets::{BracketBalance, BracketError, ScanPolicy};
pub use classify::{
    analyze_latex_structure, detect_expression_type, extract_variables, ExpressionType,
    LatexStructure,
};
pub use format::format_output;
pub use mask::{mask, unmask, MaskedText};
pub use parser::{EquationStructure, Issues, ParsedEquation, Parser, ValidationResult};
pub use rtl::RtlOptions;
pub use tokenizer::{tokenize, Token, TokenKind};
pub use translator::{
    convert_numbers_to_arabic, convert_numbers_to_english, TranslateOptions, Translator,
};
