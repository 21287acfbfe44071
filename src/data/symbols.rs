//! Arabic math dictionaries
//!
//! Every table here is a `phf` map built at compile time. Keys are
//! case-sensitive; the longest-first ordering needed for whole-word
//! replacement is derived once in [`sorted_keys`].

use lazy_static::lazy_static;
use phf::{phf_map, phf_set};

/// Variables: single Latin letters plus Greek letter and constant names.
pub static VARIABLES: phf::Map<&'static str, &'static str> = phf_map! {
    // Latin letters
    "a" => "أ",
    "b" => "ب",
    "c" => "جـ",
    "d" => "د",
    "e" => "هـ",
    "f" => "ق",
    "g" => "ج",
    "h" => "ح",
    "k" => "ك",
    "l" => "ل",
    "m" => "م",
    "n" => "ن",
    "r" => "ر",
    "t" => "ت",
    "u" => "هـ",
    "v" => "خ",
    "w" => "و",
    "x" => "س",
    "y" => "ص",
    "z" => "ع",
    // Greek letters
    "alpha" => "α",
    "beta" => "β",
    "gamma" => "γ",
    "delta" => "δ",
    "epsilon" => "ε",
    "varepsilon" => "ε",
    "zeta" => "ζ",
    "eta" => "η",
    "theta" => "θ",
    "lambda" => "λ",
    "mu" => "μ",
    "nu" => "ν",
    "xi" => "ξ",
    "pi" => "π",
    "rho" => "ρ",
    "sigma" => "σ",
    "tau" => "τ",
    "phi" => "φ",
    "varphi" => "φ",
    "chi" => "χ",
    "psi" => "ψ",
    "omega" => "ω",
    "Gamma" => "Γ",
    "Delta" => "Δ",
    "Theta" => "Θ",
    "Lambda" => "Λ",
    "Pi" => "Π",
    "Sigma" => "Σ",
    "Phi" => "Φ",
    "Psi" => "Ψ",
    "Omega" => "Ω",
    // Constants
    "infinity" => "∞",
    "infty" => "∞",
};

/// Function names and their Arabic abbreviations.
pub static FUNCTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    // trigonometric
    "sin" => "جا",
    "cos" => "جتا",
    "tan" => "ظا",
    "cot" => "ظتا",
    "sec" => "قا",
    "csc" => "قتا",
    // hyperbolic
    "sinh" => "جاز",
    "cosh" => "جتاز",
    "tanh" => "ظاز",
    // logarithmic / exp
    "ln" => "لو",
    "log" => "لو",
    "exp" => "هـ^",
    // other
    "sqrt" => "جذر",
    "abs" => "مطلق",
    "max" => "غا",
    "min" => "صغ",
    "det" => "محدد",
    "lim" => "نها",
    "sum" => "مج",
    "prod" => "جد",
    "int" => "تك",
};

/// Operation symbols. Arrows and brackets map to their mirror partner,
/// symmetric symbols map to themselves.
pub static OPERATIONS: phf::Map<&'static str, &'static str> = phf_map! {
    // arrows
    "→" => "←",
    "←" => "→",
    "⟹" => "⟸",
    "⟸" => "⟹",
    "⇒" => "⇐",
    "⇐" => "⇒",
    "↦" => "↤",
    "↤" => "↦",
    "↔" => "↔",
    "⟺" => "⟺",
    // brackets
    "(" => ")",
    ")" => "(",
    "[" => "]",
    "]" => "[",
    "⟨" => "⟩",
    "⟩" => "⟨",
    "⌊" => "⌋",
    "⌋" => "⌊",
    "⌈" => "⌉",
    "⌉" => "⌈",
    // calculus and sums
    "∫" => "∫",
    "∬" => "∬",
    "∭" => "∭",
    "∮" => "∮",
    "∑" => "∑",
    "∏" => "∏",
    // comparisons
    "≤" => "≤",
    "≥" => "≥",
    "≠" => "≠",
    "≈" => "≈",
    "≡" => "≡",
    // sets
    "∈" => "∈",
    "∉" => "∉",
    "⊂" => "⊂",
    "⊃" => "⊃",
    "∪" => "∪",
    "∩" => "∩",
    "∅" => "∅",
    // logic
    "∧" => "∧",
    "∨" => "∨",
    "¬" => "¬",
    "∀" => "∀",
    "∃" => "∃",
};

/// Operation symbols that are brackets; every other mirrored operation is
/// an arrow.
pub static BRACKET_SYMBOLS: phf::Set<&'static str> = phf_set! {
    "(", ")", "[", "]", "⟨", "⟩", "⌊", "⌋", "⌈", "⌉",
};

/// Named LaTeX arrow commands and their mirror partner.
pub static ARROW_COMMAND_MIRRORS: phf::Map<&'static str, &'static str> = phf_map! {
    "\\to" => "\\gets",
    "\\gets" => "\\to",
    "\\rightarrow" => "\\leftarrow",
    "\\leftarrow" => "\\rightarrow",
    "\\Rightarrow" => "\\Leftarrow",
    "\\Leftarrow" => "\\Rightarrow",
    "\\longrightarrow" => "\\longleftarrow",
    "\\longleftarrow" => "\\longrightarrow",
    "\\Longrightarrow" => "\\Longleftarrow",
    "\\Longleftarrow" => "\\Longrightarrow",
    "\\implies" => "\\impliedby",
    "\\impliedby" => "\\implies",
    "\\mapsto" => "\\mapsfrom",
    "\\mapsfrom" => "\\mapsto",
};

/// Escaped braces and named LaTeX delimiters and their mirror partner.
pub static BRACKET_COMMAND_MIRRORS: phf::Map<&'static str, &'static str> = phf_map! {
    "\\{" => "\\}",
    "\\}" => "\\{",
    "\\langle" => "\\rangle",
    "\\rangle" => "\\langle",
    "\\lfloor" => "\\rfloor",
    "\\rfloor" => "\\lfloor",
    "\\lceil" => "\\rceil",
    "\\rceil" => "\\lceil",
};

/// ASCII digits to Arabic-Indic digits.
pub static DIGITS: phf::Map<char, char> = phf_map! {
    '0' => '٠',
    '1' => '١',
    '2' => '٢',
    '3' => '٣',
    '4' => '٤',
    '5' => '٥',
    '6' => '٦',
    '7' => '٧',
    '8' => '٨',
    '9' => '٩',
};

/// Arabic-Indic digits back to ASCII.
pub static ARABIC_DIGITS: phf::Map<char, char> = phf_map! {
    '٠' => '0',
    '١' => '1',
    '٢' => '2',
    '٣' => '3',
    '٤' => '4',
    '٥' => '5',
    '٦' => '6',
    '٧' => '7',
    '٨' => '8',
    '٩' => '9',
};

/// LaTeX commands (without backslash) with a direct replacement.
/// `frac` and `prod` are intentionally absent.
pub static STRUCTURAL_COMMANDS: phf::Map<&'static str, &'static str> = phf_map! {
    "sqrt" => "جذر",
    "lim" => "نها",
    "sum" => "مج",
    "int" => "∫",
    "iint" => "∬",
    "iiint" => "∭",
    "oint" => "∮",
    "to" => "→",
    "infty" => "∞",
    "cdot" => "·",
    "times" => "×",
    "div" => "÷",
    "pm" => "±",
    "mp" => "∓",
    "leq" => "≤",
    "le" => "≤",
    "geq" => "≥",
    "ge" => "≥",
    "neq" => "≠",
    "ne" => "≠",
    "approx" => "≈",
    "equiv" => "≡",
    "partial" => "∂",
    "nabla" => "∇",
    "in" => "∈",
    "notin" => "∉",
    "subset" => "⊂",
    "supset" => "⊃",
    "cup" => "∪",
    "cap" => "∩",
    "emptyset" => "∅",
    "forall" => "∀",
    "exists" => "∃",
    "land" => "∧",
    "lor" => "∨",
    "neg" => "¬",
    "rightarrow" => "→",
    "leftarrow" => "←",
    "leftrightarrow" => "↔",
    "Rightarrow" => "⇒",
    "Leftarrow" => "⇐",
    "implies" => "⟹",
    "iff" => "⟺",
};

/// Layout commands stage 1 leaves untouched, plus the structural commands
/// deferred to later handling (`frac`, `prod`).
pub static RESERVED_COMMANDS: phf::Set<&'static str> = phf_set! {
    "begin",
    "end",
    "left",
    "right",
    "matrix",
    "pmatrix",
    "bmatrix",
    "Bmatrix",
    "vmatrix",
    "Vmatrix",
    "smallmatrix",
    "text",
    "displaystyle",
    "limits",
    "nonumber",
    "qquad",
    "quad",
    "frac",
    "prod",
};

lazy_static! {
    /// Function keys, longest first.
    pub static ref FUNCTION_KEYS: Vec<&'static str> = sorted_keys(&FUNCTIONS, |_| true);

    /// Operation keys, longest first.
    pub static ref OPERATION_KEYS: Vec<&'static str> = sorted_keys(&OPERATIONS, |_| true);

    /// Multi-letter variable keys (Greek names, constants), longest first.
    pub static ref VARIABLE_WORD_KEYS: Vec<&'static str> =
        sorted_keys(&VARIABLES, |k| k.chars().count() > 1);
}

/// Collect the keys of `map` accepted by `filter`, sorted by descending
/// length with a lexical tie-break so the order never depends on hashing.
pub fn sorted_keys(
    map: &phf::Map<&'static str, &'static str>,
    filter: impl Fn(&str) -> bool,
) -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = map.keys().copied().filter(|k| filter(k)).collect();
    keys.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    keys
}

/// Look up a single Latin letter in the variable table.
pub fn variable_for_letter(ch: char) -> Option<&'static str> {
    let mut buf = [0u8; 4];
    let key: &str = ch.encode_utf8(&mut buf);
    VARIABLES.get(key).copied()
}
