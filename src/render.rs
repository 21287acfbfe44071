//! Render hand-off
//!
//! The core never talks to a typesetting engine. It decides how much
//! pre-translation is safe for the selected engine and passes a
//! [`RenderJob`] to a caller-supplied [`RenderTarget`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::parser::Issues;
use crate::core::translator::TranslateOptions;
use crate::utils::error::Result;

/// CSS class applied to rendered containers.
pub const CSS_CLASS: &str = "arabic-math";

/// Typesetting engine that will receive the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Plain text display
    #[default]
    None,
    /// MathJax-style engine, expects TeX delimiters
    MathJax,
    /// KaTeX-style engine, expects raw TeX
    Katex,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::None => "none",
            RenderMode::MathJax => "mathjax",
            RenderMode::Katex => "katex",
        }
    }

    /// Whether a TeX engine will parse the structure itself.
    pub fn is_tex_engine(&self) -> bool {
        !matches!(self, RenderMode::None)
    }

    /// Stages that are safe before handing text to this engine. TeX
    /// engines only get digit translation so TeX syntax stays intact.
    pub fn translate_options(&self, base: &TranslateOptions) -> TranslateOptions {
        match self {
            RenderMode::None => *base,
            RenderMode::MathJax | RenderMode::Katex => TranslateOptions {
                translate_numbers: base.translate_numbers,
                ..TranslateOptions::none()
            },
        }
    }

    /// Add whatever delimiters the engine expects.
    pub fn wrap(&self, text: &str, display_mode: bool) -> String {
        match self {
            RenderMode::MathJax if display_mode => format!("\\[{}\\]", text),
            RenderMode::MathJax => format!("\\({}\\)", text),
            RenderMode::None | RenderMode::Katex => text.to_string(),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "" => Ok(RenderMode::None),
            "mathjax" => Ok(RenderMode::MathJax),
            "katex" => Ok(RenderMode::Katex),
            other => Err(format!("unknown math renderer '{}'", other)),
        }
    }
}

/// Presentation details for the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub mode: RenderMode,
    pub display_mode: bool,
    /// Always `rtl`
    pub direction: &'static str,
    pub css_class: &'static str,
    pub version: &'static str,
}

/// Everything a target needs to display one equation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderJob {
    pub text: String,
    pub context: RenderContext,
    pub issues: Issues,
}

/// An external display surface (DOM element, terminal, file, …).
pub trait RenderTarget {
    fn render(&mut self, job: &RenderJob) -> Result<()>;
}

/// Target that keeps the jobs it receives.
#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    pub jobs: Vec<RenderJob>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_text(&self) -> Option<&str> {
        self.jobs.last().map(|job| job.text.as_str())
    }
}

impl RenderTarget for MemoryTarget {
    fn render(&mut self, job: &RenderJob) -> Result<()> {
        self.jobs.push(job.clone());
        Ok(())
    }
}
