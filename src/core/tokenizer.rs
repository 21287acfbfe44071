//! Lenient math tokenizer
//!
//! Scans left to right trying an ordered list of patterns at the cursor.
//! The first pattern that matches at the cursor wins. When none matches,
//! the character is skipped without a token or an error (whitespace and
//! unknown symbols are dropped this way).

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::data::symbols::{FUNCTIONS, FUNCTION_KEYS};

/// Kind of a math token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    LatexCommand,
    Function,
    Number,
    Variable,
    Operator,
    Symbol,
    Bracket,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LatexCommand => write!(f, "latex_command"),
            TokenKind::Function => write!(f, "function"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Variable => write!(f, "variable"),
            TokenKind::Operator => write!(f, "operator"),
            TokenKind::Symbol => write!(f, "symbol"),
            TokenKind::Bracket => write!(f, "bracket"),
        }
    }
}

/// A token with its character offset in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }
}

lazy_static! {
    /// Patterns in priority order; each is anchored at the cursor.
    static ref PATTERNS: Vec<(TokenKind, Regex)> = vec![
        (TokenKind::LatexCommand, anchored(r"\\(?:[A-Za-z]+|[{}()\[\],;!|])")),
        (TokenKind::Function, anchored(&function_pattern())),
        (
            TokenKind::Number,
            anchored(r"[0-9\x{0660}-\x{0669}]+(?:[.\x{066B}][0-9\x{0660}-\x{0669}]+)?"),
        ),
        (
            TokenKind::Variable,
            anchored(r"[A-Za-z]|[α-ωΑ-Ω]|[\x{0621}-\x{064A}]\x{0640}?"),
        ),
        (TokenKind::Operator, anchored(r"[+\-*/=<>^_!]|[≤≥≠≈≡±∓×÷·]")),
        (TokenKind::Symbol, anchored(r"[∫∬∭∮∑∏∞∂∇∈∉⊂⊃∪∩∅∧∨¬∀∃→←⟹⟸⇒⇐↔⟺,;:|&]")),
        (TokenKind::Bracket, anchored(r"[(){}\[\]]")),
    ];
}

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})", pattern)).unwrap()
}

/// Latin function keys and their purely alphabetic Arabic images, longest
/// first, ending on a word boundary.
fn function_pattern() -> String {
    let mut names: Vec<&str> = FUNCTION_KEYS.to_vec();
    names.extend(
        FUNCTIONS
            .values()
            .copied()
            .filter(|v| v.chars().all(char::is_alphabetic)),
    );
    names.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    names.dedup();
    let alternation = names
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?:{})\b", alternation)
}

/// Tokenize `text`. Unrecognised characters are skipped silently.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;

    while byte_pos < text.len() {
        let rest = &text[byte_pos..];
        let matched = PATTERNS
            .iter()
            .find_map(|(kind, re)| re.find(rest).map(|m| (*kind, m.as_str())));

        match matched {
            Some((kind, lexeme)) if !lexeme.is_empty() => {
                tokens.push(Token::new(kind, lexeme, char_pos));
                byte_pos += lexeme.len();
                char_pos += lexeme.chars().count();
            }
            _ => {
                let skipped = rest.chars().next().map_or(1, char::len_utf8);
                byte_pos += skipped;
                char_pos += 1;
            }
        }
    }

    tokens
}
