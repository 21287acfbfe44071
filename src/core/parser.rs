//! Lightweight equation parser and validator
//!
//! Not a grammar: validation is bracket/brace balance plus a denylist of
//! unsupported commands. Problems are reported as data, never as errors.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::brackets::{check_bracket_balance, BracketError, ScanPolicy};
use super::tokenizer::{tokenize, Token, TokenKind};

lazy_static! {
    /// Commands that are accepted but flagged.
    static ref UNSUPPORTED_COMMANDS: Vec<(&'static str, Regex)> =
        vec![("invalid", Regex::new(r"\\invalid\b").unwrap())];
}

/// Errors and warnings found by the basic checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Issues {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Outcome of [`Parser::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Node kind of a parsed equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EquationKind {
    Equation,
}

/// Outcome of [`Parser::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedEquation {
    pub kind: EquationKind,
    pub raw: String,
    pub issues: Issues,
}

/// Tokens grouped by role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EquationStructure {
    pub functions: Vec<Token>,
    pub variables: Vec<Token>,
    pub operators: Vec<Token>,
    pub commands: Vec<Token>,
}

#[derive(Debug, Clone, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    /// Wrap `equation` with the result of the basic checks.
    pub fn parse(&self, equation: &str) -> ParsedEquation {
        ParsedEquation {
            kind: EquationKind::Equation,
            raw: equation.to_string(),
            issues: basic_checks(equation),
        }
    }

    /// Check bracket balance and unsupported commands.
    pub fn validate(&self, equation: &str) -> ValidationResult {
        let Issues { errors, warnings } = basic_checks(equation);
        ValidationResult {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Tokenize `equation` and group the tokens by role.
    pub fn analyze(&self, equation: &str) -> EquationStructure {
        let mut structure = EquationStructure::default();
        for token in tokenize(equation) {
            match token.kind {
                TokenKind::Function => structure.functions.push(token),
                TokenKind::Variable => structure.variables.push(token),
                TokenKind::Operator => structure.operators.push(token),
                TokenKind::LatexCommand => structure.commands.push(token),
                _ => {}
            }
        }
        structure
    }

    pub fn tokenize(&self, equation: &str) -> Vec<Token> {
        tokenize(equation)
    }
}

fn basic_checks(text: &str) -> Issues {
    let mut issues = Issues::default();

    let balance = check_bracket_balance(text, ScanPolicy::StopAtFirst);
    if let Some(BracketError::Mismatch { position, .. }) =
        balance.errors.iter().find(|e| e.is_mismatch())
    {
        issues
            .errors
            .push(format!("Unbalanced bracket near index {}", position));
    }
    if balance.errors.iter().any(|e| !e.is_mismatch()) {
        issues
            .errors
            .push("Unbalanced brackets: missing closing".to_string());
    }

    // Raw count, independent of the scan above.
    let opening = text.matches('{').count();
    let closing = text.matches('}').count();
    if opening != closing {
        issues.errors.push("Mismatched curly braces".to_string());
    }

    for (name, re) in UNSUPPORTED_COMMANDS.iter() {
        if re.is_match(text) {
            issues
                .warnings
                .push(format!("Contains unsupported command \\{}", name));
        }
    }

    issues
}
