//! Right-to-left structural transform
//!
//! Pattern-based rearrangement of math for right-to-left reading order:
//! fraction swapping, integral/sum/limit bound swapping, matrix column
//! reversal and arrow/bracket mirroring. This is the single implementation;
//! the translator's RTL stage calls [`adapt`].
//!
//! These are surface rewrites, not a bidi algorithm. Fraction and bound
//! patterns only match brace groups without nested braces; anything else
//! passes through unchanged.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::data::symbols::{
    ARROW_COMMAND_MIRRORS, BRACKET_COMMAND_MIRRORS, BRACKET_SYMBOLS, OPERATIONS, OPERATION_KEYS,
};

/// Upper bound on inside-out fraction rewriting rounds.
const MAX_FRACTION_DEPTH: usize = 32;

/// Which RTL rewrites to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RtlOptions {
    /// Mirror directional arrows (Unicode and named commands)
    pub flip_arrows: bool,
    /// Swap `_{a}^{b}` bounds of limits, sums, products and integrals
    pub swap_bounds: bool,
    /// Rewrite `\frac{A}{B}` as `B/A`
    pub handle_fractions: bool,
    /// Reverse column order of matrix environments
    pub handle_matrices: bool,
    /// Mirror paired brackets
    pub mirror_brackets: bool,
}

impl Default for RtlOptions {
    fn default() -> Self {
        Self {
            flip_arrows: true,
            swap_bounds: true,
            handle_fractions: true,
            handle_matrices: true,
            mirror_brackets: true,
        }
    }
}

impl RtlOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Structural swaps only; leave brackets and arrows alone.
    pub fn structural() -> Self {
        Self {
            flip_arrows: false,
            mirror_brackets: false,
            ..Self::default()
        }
    }
}

lazy_static! {
    static ref FRACTION_RE: Regex =
        Regex::new(r"\\[dt]?frac\s*\{([^{}]*)\}\s*\{([^{}]*)\}").unwrap();
    static ref LOCAL_FRACTION_RE: Regex = Regex::new(r"كسر\s*\{([^{}]*)\}\s*\{([^{}]*)\}").unwrap();
    static ref BOUNDS_RE: Regex = Regex::new(concat!(
        r"(?P<op>\\(?:iiint|iint|oint|int|sum|prod|lim|bigcup|bigcap)|نها|مج|جد|تك|∫|∬|∭|∮|∑|∏)",
        r"(?P<limits>\s*\\limits)?",
        r"\s*_\s*(?P<lo>\{[^{}]*\}|[^\s{}^_\\])",
        r"\s*\^\s*(?P<hi>\{[^{}]*\}|[^\s{}^_\\])",
    ))
    .unwrap();
    static ref MATRIX_BEGIN_RE: Regex = Regex::new(r"\\begin\{([A-Za-z]*matrix\*?)\}").unwrap();
    /// Commands, escaped braces, then every operation symbol.
    static ref MIRROR_TOKEN_RE: Regex = {
        let symbols = OPERATION_KEYS
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"\\[A-Za-z]+|\\[{{}}]|{}", symbols)).unwrap()
    };
}

/// Apply the enabled rewrites in fixed order: fractions, bounds, matrices,
/// then one mirroring pass for arrows and brackets.
pub fn adapt(text: &str, options: &RtlOptions) -> String {
    let mut out = text.to_string();
    if options.handle_fractions {
        out = swap_fractions(&out);
    }
    if options.swap_bounds {
        out = swap_bounds(&out);
    }
    if options.handle_matrices {
        out = reverse_matrix_columns(&out);
    }
    if options.flip_arrows || options.mirror_brackets {
        out = mirror(&out, options.flip_arrows, options.mirror_brackets);
    }
    log::trace!("rtl adapt: {:?} -> {:?}", text, out);
    out
}

/// Rewrite `\frac{A}{B}` (and `\dfrac`, `\tfrac`, `كسر{A}{B}`) as `B/A`.
/// Nested fractions resolve inside-out.
pub fn swap_fractions(text: &str) -> String {
    let mut out = text.to_string();
    for _ in 0..MAX_FRACTION_DEPTH {
        let next = FRACTION_RE.replace_all(&out, "$2/$1");
        let next = LOCAL_FRACTION_RE.replace_all(&next, "$2/$1").into_owned();
        if next == out {
            break;
        }
        out = next;
    }
    out
}

/// Swap `X_{a}^{b}` to `X^{b}_{a}` for limit, sum, product and integral
/// operators, raw or already translated. Already swapped text is not
/// matched again.
pub fn swap_bounds(text: &str) -> String {
    BOUNDS_RE
        .replace_all(text, |caps: &Captures| {
            let limits = caps.name("limits").map_or("", |m| m.as_str());
            format!("{}{}^{}_{}", &caps["op"], limits, &caps["hi"], &caps["lo"])
        })
        .into_owned()
}

/// Reverse the column order of every row in `\begin{…matrix}` bodies.
/// Rows split on `\\`, columns on `&`.
pub fn reverse_matrix_columns(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(caps) = MATRIX_BEGIN_RE.captures(rest) {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        let end_tag = format!("\\end{{{}}}", &caps[1]);
        let body_start = whole.end;
        let Some(body_len) = rest[body_start..].find(&end_tag) else {
            break;
        };
        out.push_str(&rest[..body_start]);
        out.push_str(&reverse_rows(&rest[body_start..body_start + body_len]));
        out.push_str(&end_tag);
        rest = &rest[body_start + body_len + end_tag.len()..];
    }
    out.push_str(rest);
    out
}

fn reverse_rows(body: &str) -> String {
    body.split("\\\\")
        .map(|row| {
            if !row.contains('&') {
                return row.to_string();
            }
            let mut cells: Vec<&str> = row.split('&').map(str::trim).collect();
            cells.reverse();
            format!(" {} ", cells.join(" & "))
        })
        .collect::<Vec<_>>()
        .join("\\\\")
}

/// Mirror directional arrows, including named arrow commands.
pub fn flip_arrows(text: &str) -> String {
    mirror(text, true, false)
}

/// Mirror paired brackets, including escaped braces and named delimiters.
pub fn mirror_brackets(text: &str) -> String {
    mirror(text, false, true)
}

/// One left-to-right pass, so each token is replaced at most once and
/// pairs swap instead of collapsing.
fn mirror(text: &str, arrows: bool, brackets: bool) -> String {
    MIRROR_TOKEN_RE
        .replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            mirror_token(token, arrows, brackets).unwrap_or(token).to_string()
        })
        .into_owned()
}

/// Symbols come from the operations table, named commands from the command
/// mirror tables.
fn mirror_token(token: &str, arrows: bool, brackets: bool) -> Option<&'static str> {
    if token.starts_with('\\') {
        let arrow = ARROW_COMMAND_MIRRORS.get(token).filter(|_| arrows);
        let bracket = BRACKET_COMMAND_MIRRORS.get(token).filter(|_| brackets);
        return arrow.or(bracket).copied();
    }
    let enabled = if BRACKET_SYMBOLS.contains(token) {
        brackets
    } else {
        arrows
    };
    OPERATIONS.get(token).copied().filter(|_| enabled)
}
