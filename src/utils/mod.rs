//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - String helpers for mixed-direction text

pub mod error;
pub mod strings;

// Re-export commonly used items
pub use error::{ArabicMathError, Result};
pub use strings::{add_directional_marks, reverse_text, sanitize_text, to_slug};
