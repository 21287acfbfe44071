//! Expression classification and analysis helpers

use std::collections::BTreeSet;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::brackets::{self, BracketBalance, ScanPolicy};

/// Coarse kind of a math expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionType {
    Limit,
    Integral,
    Derivative,
    Summation,
    Product,
    Matrix,
    Equation,
    Inequality,
    Function,
    Expression,
}

impl ExpressionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpressionType::Limit => "limit",
            ExpressionType::Integral => "integral",
            ExpressionType::Derivative => "derivative",
            ExpressionType::Summation => "summation",
            ExpressionType::Product => "product",
            ExpressionType::Matrix => "matrix",
            ExpressionType::Equation => "equation",
            ExpressionType::Inequality => "inequality",
            ExpressionType::Function => "function",
            ExpressionType::Expression => "expression",
        }
    }
}

impl fmt::Display for ExpressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

lazy_static! {
    /// Checked in order; the first match wins.
    static ref TYPE_PATTERNS: Vec<(ExpressionType, Regex)> = vec![
        (ExpressionType::Limit, Regex::new(r"(?i)\\?lim|نها").unwrap()),
        (ExpressionType::Integral, Regex::new(r"(?i)\\?int|∫|تك").unwrap()),
        (
            ExpressionType::Derivative,
            Regex::new(r"(?i)\\?frac\{d|d\s*/\s*d|مشتقة").unwrap(),
        ),
        (ExpressionType::Summation, Regex::new(r"(?i)\\?sum|∑|مج").unwrap()),
        (ExpressionType::Product, Regex::new(r"(?i)\\?prod|∏|جد").unwrap()),
        (
            ExpressionType::Matrix,
            Regex::new(r"(?i)\\?begin\{.*matrix\}|مصفوفة").unwrap(),
        ),
        (ExpressionType::Equation, Regex::new(r"=").unwrap()),
        (ExpressionType::Inequality, Regex::new(r"[<>≤≥≠]").unwrap()),
        (
            ExpressionType::Function,
            Regex::new(r"(?i)\\?[a-z]+\s*\(|\b(?:sin|cos|tan|log|ln)\s*\(").unwrap(),
        ),
    ];

    static ref COMMAND_RE: Regex = Regex::new(r"\\[a-zA-Z]+").unwrap();
    static ref NAMED_FUNCTION_RE: Regex = Regex::new(r"(?i)\b(?:sin|cos|tan|log|ln|exp)\b").unwrap();
    static ref DIGITS_RE: Regex = Regex::new(r"\d+").unwrap();
    static ref NON_WORD_RE: Regex = Regex::new(r"[^\w\x{0600}-\x{06FF}]").unwrap();
    /// A Latin letter, or an Arabic letter with an optional trailing tatweel.
    static ref SINGLE_LETTER_RE: Regex =
        Regex::new(r"\b(?:[a-zA-Z]|[\x{0621}-\x{063A}\x{0641}-\x{064A}]\x{0640}?)\b").unwrap();
    static ref ENVIRONMENT_RE: Regex = Regex::new(r"\\begin\{([^}]+)\}").unwrap();
}

/// Classify `expr` by the first matching pattern, `Expression` otherwise.
pub fn detect_expression_type(expr: &str) -> ExpressionType {
    TYPE_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(expr))
        .map_or(ExpressionType::Expression, |(kind, _)| *kind)
}

/// Isolated single Latin or Arabic letters, sorted and deduplicated. A
/// tatweel after an Arabic letter (`جـ`) is part of it. Commands, common
/// function names and digits are removed first.
pub fn extract_variables(expr: &str) -> Vec<String> {
    let cleaned = COMMAND_RE.replace_all(expr, "");
    let cleaned = NAMED_FUNCTION_RE.replace_all(&cleaned, "");
    let cleaned = DIGITS_RE.replace_all(&cleaned, "");
    let cleaned = NON_WORD_RE.replace_all(&cleaned, " ");

    SINGLE_LETTER_RE
        .find_iter(&cleaned)
        .map(|m| m.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Bracket check that keeps going after the first mismatch.
pub fn check_bracket_balance(expr: &str) -> BracketBalance {
    brackets::check_bracket_balance(expr, ScanPolicy::CollectAll)
}

/// Bracket counts by shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BracketCounts {
    pub curly: usize,
    pub square: usize,
    pub round: usize,
}

/// Commands, environments and a rough complexity score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LatexStructure {
    /// Distinct commands in order of first appearance
    pub commands: Vec<String>,
    pub environments: Vec<String>,
    pub brackets: BracketCounts,
    /// Command occurrences plus two per environment
    pub complexity: usize,
}

pub fn analyze_latex_structure(latex: &str) -> LatexStructure {
    let mut structure = LatexStructure::default();

    let mut seen = BTreeSet::new();
    for m in COMMAND_RE.find_iter(latex) {
        structure.complexity += 1;
        if seen.insert(m.as_str()) {
            structure.commands.push(m.as_str().to_string());
        }
    }

    for caps in ENVIRONMENT_RE.captures_iter(latex) {
        structure.environments.push(caps[1].to_string());
        structure.complexity += 2;
    }

    structure.brackets = BracketCounts {
        curly: latex.matches('{').count(),
        square: latex.matches('[').count(),
        round: latex.matches('(').count(),
    };

    structure
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detect_limit() {
        assert_eq!(detect_expression_type(r"\lim_{x\to 0} f(x)"), ExpressionType::Limit);
        assert_eq!(detect_expression_type("نها س"), ExpressionType::Limit);
    }

    #[test]
    fn test_detect_order_matters() {
        assert_eq!(detect_expression_type(r"\lim f = 1"), ExpressionType::Limit);
        assert_eq!(detect_expression_type("x + y = z"), ExpressionType::Equation);
    }

    #[test]
    fn test_detect_other_kinds() {
        assert_eq!(detect_expression_type(r"\int_0^1 x dx"), ExpressionType::Integral);
        assert_eq!(detect_expression_type(r"\frac{dy}{dx}"), ExpressionType::Derivative);
        assert_eq!(detect_expression_type(r"\sum_{k} k"), ExpressionType::Summation);
        assert_eq!(detect_expression_type(r"\prod_{k} k"), ExpressionType::Product);
        assert_eq!(
            detect_expression_type(r"\begin{pmatrix} a \end{pmatrix}"),
            ExpressionType::Matrix
        );
        assert_eq!(detect_expression_type("x < y"), ExpressionType::Inequality);
        assert_eq!(detect_expression_type("f(x)"), ExpressionType::Function);
        assert_eq!(detect_expression_type("x + y"), ExpressionType::Expression);
    }

    #[test]
    fn test_extract_variables() {
        assert_eq!(extract_variables("a*x^2 + b*x + c"), vec!["a", "b", "c", "x"]);
        assert_eq!(extract_variables(r"\sin(x) + \alpha y"), vec!["x", "y"]);
        assert_eq!(extract_variables("sin(t) + 2"), vec!["t"]);
        assert_eq!(extract_variables("س + ص"), vec!["س", "ص"]);
        assert!(extract_variables("").is_empty());
    }

    #[test]
    fn test_extract_variables_keeps_tatweel_letter() {
        assert_eq!(
            extract_variables("أ * س^٢ + ب * س + جـ"),
            vec!["أ", "ب", "جـ", "س"]
        );
    }

    #[test]
    fn test_analyze_latex_structure() {
        let s = analyze_latex_structure(r"\begin{matrix} \frac{a}{b} & \frac{c}{d} \end{matrix} (x)");
        assert_eq!(s.commands, vec![r"\begin", r"\frac", r"\end"]);
        assert_eq!(s.environments, vec!["matrix"]);
        assert_eq!(s.complexity, 4 + 2);
        assert_eq!(
            s.brackets,
            BracketCounts {
                curly: 6,
                square: 0,
                round: 1,
            }
        );
    }

    #[test]
    fn test_check_bracket_balance_collects() {
        let result = check_bracket_balance(") (");
        assert!(!result.balanced);
        assert_eq!(result.errors.len(), 2);
    }
}
