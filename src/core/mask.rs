//! LaTeX command masking
//!
//! Word-boundary substitution must never see command names such as `\sum`
//! or `\alpha`. A pass masks every command with an opaque placeholder,
//! runs its replacements, then restores the commands before the next pass.
//! `\begin{..}`, `\end{..}` and text commands are masked together with
//! their braced argument, so environment names and prose stay Latin.
//!
//! Placeholders are `OPEN id CLOSE` where `OPEN`/`CLOSE` are private-use
//! characters. Sentinel characters already present in the input are masked
//! like commands, so restoring is exact for every input.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Opening sentinel of a placeholder.
pub const PLACEHOLDER_OPEN: char = '\u{F8F0}';
/// Closing sentinel of a placeholder.
pub const PLACEHOLDER_CLOSE: char = '\u{F8F1}';

lazy_static! {
    /// An environment tag or text command with its argument, a command
    /// (`\` + Latin letters), a TeX row break `\\`, or a stray sentinel.
    static ref COMMAND_RE: Regex = Regex::new(
        r"\\(?:begin|end|text|textrm|mathrm|mathbf|operatorname)\s*\{[^{}]*\}|\\[A-Za-z]+|\\\\|[\x{F8F0}\x{F8F1}]"
    )
    .unwrap();
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"\x{F8F0}([0-9]+)\x{F8F1}").unwrap();
}

/// Text with its commands replaced by numbered placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedText {
    /// The masked text
    pub text: String,
    /// Original command text, indexed by placeholder id
    pub commands: Vec<String>,
}

impl MaskedText {
    /// Restore the commands into `transformed`, typically the masked text
    /// after a substitution pass.
    pub fn unmask(&self, transformed: &str) -> String {
        unmask(transformed, &self.commands)
    }

    /// Whether any command was masked.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Build the placeholder for command number `id`.
pub fn placeholder(id: usize) -> String {
    format!("{}{}{}", PLACEHOLDER_OPEN, id, PLACEHOLDER_CLOSE)
}

/// Replace every command with a placeholder, in order of appearance.
pub fn mask(text: &str) -> MaskedText {
    let mut commands = Vec::new();
    let masked = COMMAND_RE.replace_all(text, |caps: &Captures| {
        let id = commands.len();
        commands.push(caps[0].to_string());
        placeholder(id)
    });
    MaskedText {
        text: masked.into_owned(),
        commands,
    }
}

/// Replace each placeholder with `commands[id]`. Placeholders without an
/// entry are left as they are.
pub fn unmask(text: &str, commands: &[String]) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|id| commands.get(id))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Run `pass` over the masked form of `text` and restore the commands.
pub fn with_masked(text: &str, pass: impl FnOnce(&str) -> String) -> String {
    let masked = mask(text);
    if masked.is_empty() {
        return pass(text);
    }
    let transformed = pass(&masked.text);
    masked.unmask(&transformed)
}
