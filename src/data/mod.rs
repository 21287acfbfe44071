//! Static data tables
//!
//! This module contains the compile-time dictionaries the translation
//! pipeline reads from:
//! - Variable, function, operation and digit maps
//! - LaTeX command tables (structural replacements, reserved layout commands)
//! - Command mirror pairs and bracket symbols used by the right-to-left transform

pub mod symbols;

pub use symbols::{
    ARABIC_DIGITS, ARROW_COMMAND_MIRRORS, BRACKET_COMMAND_MIRRORS, BRACKET_SYMBOLS, DIGITS,
    FUNCTIONS, OPERATIONS, OPERATION_KEYS, RESERVED_COMMANDS, STRUCTURAL_COMMANDS, VARIABLES,
};
