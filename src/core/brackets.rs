//! Bracket balance checking
//!
//! One scanner serves both the validator and the classifier. Escaped
//! brackets (`\{`, `\(`, `\[` and their closers) count as single units that
//! only pair with their escaped partner. Positions are character indices.

use serde::Serialize;

/// How the scanner reacts to the first mismatched closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Stop scanning; brackets still open at that point are reported as unclosed.
    StopAtFirst,
    /// Record every mismatch and keep going.
    CollectAll,
}

/// A single bracket problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BracketError {
    /// A closer that does not match the innermost opener (`expected` is
    /// `None` when nothing was open).
    Mismatch {
        position: usize,
        expected: Option<String>,
        found: String,
    },
    /// An opener never closed.
    Unclosed { position: usize, bracket: String },
}

impl BracketError {
    pub fn position(&self) -> usize {
        match self {
            BracketError::Mismatch { position, .. } | BracketError::Unclosed { position, .. } => {
                *position
            }
        }
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, BracketError::Mismatch { .. })
    }
}

/// Result of a balance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketBalance {
    pub balanced: bool,
    pub errors: Vec<BracketError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bracket {
    Open(&'static str, &'static str),
    Close(&'static str),
}

fn classify(ch: char, escaped: bool) -> Option<Bracket> {
    let bracket = match (escaped, ch) {
        (false, '(') => Bracket::Open("(", ")"),
        (false, '{') => Bracket::Open("{", "}"),
        (false, '[') => Bracket::Open("[", "]"),
        (false, ')') => Bracket::Close(")"),
        (false, '}') => Bracket::Close("}"),
        (false, ']') => Bracket::Close("]"),
        (true, '(') => Bracket::Open("\\(", "\\)"),
        (true, '{') => Bracket::Open("\\{", "\\}"),
        (true, '[') => Bracket::Open("\\[", "\\]"),
        (true, ')') => Bracket::Close("\\)"),
        (true, '}') => Bracket::Close("\\}"),
        (true, ']') => Bracket::Close("\\]"),
        _ => return None,
    };
    Some(bracket)
}

/// Scan `text` for unbalanced `()`, `{}`, `[]` and their escaped forms.
pub fn check_bracket_balance(text: &str, policy: ScanPolicy) -> BracketBalance {
    let chars: Vec<char> = text.chars().collect();
    // (opener, expected closer, position)
    let mut stack: Vec<(&'static str, &'static str, usize)> = Vec::new();
    let mut errors = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        let start = i;
        let (ch, escaped) = match chars[i] {
            '\\' if i + 1 < chars.len() && chars[i + 1] == '\\' => {
                // `\\` is a row break, never an escape.
                i += 2;
                continue;
            }
            '\\' if i + 1 < chars.len() => {
                i += 2;
                (chars[start + 1], true)
            }
            c => {
                i += 1;
                (c, false)
            }
        };

        match classify(ch, escaped) {
            Some(Bracket::Open(open, close)) => stack.push((open, close, start)),
            Some(Bracket::Close(close)) => {
                let expected = stack.pop().map(|(_, expected, _)| expected);
                if expected != Some(close) {
                    errors.push(BracketError::Mismatch {
                        position: start,
                        expected: expected.map(str::to_string),
                        found: close.to_string(),
                    });
                    if policy == ScanPolicy::StopAtFirst {
                        break;
                    }
                }
            }
            None => {}
        }
    }

    for (open, _, position) in stack {
        errors.push(BracketError::Unclosed {
            position,
            bracket: open.to_string(),
        });
    }

    BracketBalance {
        balanced: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_balanced() {
        let result = check_bracket_balance("(a+b)[c]{d}", ScanPolicy::CollectAll);
        assert!(result.balanced);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_stray_closer() {
        let result = check_bracket_balance("a+b)", ScanPolicy::StopAtFirst);
        assert_eq!(
            result.errors,
            vec![BracketError::Mismatch {
                position: 3,
                expected: None,
                found: ")".into(),
            }]
        );
    }

    #[test]
    fn test_unclosed() {
        let result = check_bracket_balance("(a+b", ScanPolicy::CollectAll);
        assert_eq!(
            result.errors,
            vec![BracketError::Unclosed {
                position: 0,
                bracket: "(".into(),
            }]
        );
    }

    #[test]
    fn test_collect_all_continues() {
        let result = check_bracket_balance("(]) )", ScanPolicy::CollectAll);
        let mismatches = result.errors.iter().filter(|e| e.is_mismatch()).count();
        assert_eq!(mismatches, 3);

        let first = check_bracket_balance("(]) )", ScanPolicy::StopAtFirst);
        assert_eq!(first.errors.len(), 1);
        assert_eq!(first.errors[0].position(), 1);
    }

    #[test]
    fn test_stop_reports_open_brackets() {
        let result = check_bracket_balance("((]", ScanPolicy::StopAtFirst);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].is_mismatch());
        assert!(!result.errors[1].is_mismatch());
    }

    #[test]
    fn test_escaped_brackets_are_units() {
        assert!(check_bracket_balance(r"\{ x \}", ScanPolicy::CollectAll).balanced);
        assert!(check_bracket_balance(r"\left( x \right)", ScanPolicy::CollectAll).balanced);
        assert!(!check_bracket_balance(r"\{ x }", ScanPolicy::CollectAll).balanced);
        assert!(check_bracket_balance(r"a \\ (b)", ScanPolicy::CollectAll).balanced);
    }

    #[test]
    fn test_positions_are_char_indices() {
        let result = check_bracket_balance("سص)", ScanPolicy::StopAtFirst);
        assert_eq!(result.errors[0].position(), 2);
    }
}
