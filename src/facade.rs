//! Top-level entry point
//!
//! [`ArabicMath`] owns a translator, a parser, an event bus and a font
//! registry. Every piece of state lives on the instance and is released by
//! [`ArabicMath::dispose`].

use serde::{Deserialize, Serialize};

use crate::core::bidi::ensure_rtl;
use crate::core::parser::{Parser, ValidationResult};
use crate::core::translator::{TranslateOptions, Translator};
use crate::events::{EventBus, EventKind, EventPayload, ListenerId};
use crate::fonts::FontRegistry;
use crate::render::{RenderContext, RenderJob, RenderMode, RenderTarget, CSS_CLASS};
use crate::utils::error::{ArabicMathError, Result};

/// Library version reported to render targets.
pub const VERSION: &str = "0.1.0";

fn default_true() -> bool {
    true
}

/// Options for [`ArabicMath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArabicMathOptions {
    /// Wrap Arabic runs in bidi controls. Default: true
    #[serde(default = "default_true")]
    pub rtl: bool,

    /// Translate equations before rendering. Default: true
    #[serde(default = "default_true")]
    pub auto_translate: bool,

    /// Engine that receives rendered text. Default: none
    #[serde(default)]
    pub math_renderer: RenderMode,

    /// Display (block) math rather than inline. Default: true
    #[serde(default = "default_true")]
    pub display_mode: bool,

    /// Pipeline stage toggles
    #[serde(default)]
    pub translate: TranslateOptions,
}

impl Default for ArabicMathOptions {
    fn default() -> Self {
        Self {
            rtl: true,
            auto_translate: true,
            math_renderer: RenderMode::None,
            display_mode: true,
            translate: TranslateOptions::default(),
        }
    }
}

impl ArabicMathOptions {
    /// Options for a MathJax-style engine.
    pub fn mathjax() -> Self {
        Self {
            math_renderer: RenderMode::MathJax,
            ..Self::default()
        }
    }

    /// Options for a KaTeX-style engine.
    pub fn katex() -> Self {
        Self {
            math_renderer: RenderMode::Katex,
            ..Self::default()
        }
    }
}

#[derive(Debug, Default)]
pub struct ArabicMath {
    options: ArabicMathOptions,
    translator: Translator,
    parser: Parser,
    events: EventBus,
    fonts: FontRegistry,
}

impl ArabicMath {
    pub fn new(options: ArabicMathOptions) -> Self {
        Self {
            options,
            translator: Translator::new(options.translate),
            parser: Parser::new(),
            events: EventBus::new(),
            fonts: FontRegistry::new(),
        }
    }

    pub fn version() -> &'static str {
        VERSION
    }

    pub fn options(&self) -> &ArabicMathOptions {
        &self.options
    }

    /// Replace the options and notify `options:change` listeners.
    pub fn set_options(&mut self, options: ArabicMathOptions) {
        self.options = options;
        self.translator.set_options(options.translate);
        self.events
            .emit(EventKind::OptionsChange, &EventPayload::OptionsChange(&self.options));
    }

    /// Modify the current options in place, then notify listeners.
    pub fn update_options(&mut self, patch: impl FnOnce(&mut ArabicMathOptions)) {
        let mut options = self.options;
        patch(&mut options);
        self.set_options(options);
    }

    /// Full translation, wrapped for RTL display when `rtl` is set.
    pub fn translate(&self, input: &str) -> String {
        let out = self.translator.translate(input);
        if self.options.rtl {
            ensure_rtl(&out)
        } else {
            out
        }
    }

    pub fn validate_equation(&self, equation: &str) -> ValidationResult {
        self.parser.validate(equation)
    }

    /// Prepare `equation` for the configured engine and hand it to `target`.
    ///
    /// A missing target is an integration error and fails loudly.
    pub fn render(
        &self,
        target: Option<&mut dyn RenderTarget>,
        equation: &str,
    ) -> Result<RenderJob> {
        let target = target.ok_or(ArabicMathError::TargetNotFound)?;
        let mode = self.options.math_renderer;

        let text = if self.options.auto_translate {
            self.prepare(mode, equation)
        } else {
            equation.to_string()
        };
        let parsed = self.parser.parse(&text);

        let job = RenderJob {
            text,
            context: RenderContext {
                mode,
                display_mode: self.options.display_mode,
                direction: "rtl",
                css_class: CSS_CLASS,
                version: VERSION,
            },
            issues: parsed.issues,
        };
        log::debug!("render [{}]: {:?}", mode, job.text);

        self.emit(
            EventKind::BeforeRender,
            &EventPayload::Render {
                equation: &job.text,
                context: &job.context,
            },
        );
        target.render(&job)?;
        self.emit(
            EventKind::AfterRender,
            &EventPayload::Render {
                equation: &job.text,
                context: &job.context,
            },
        );
        Ok(job)
    }

    fn prepare(&self, mode: RenderMode, equation: &str) -> String {
        match mode {
            RenderMode::None => self.translate(equation),
            RenderMode::MathJax | RenderMode::Katex => {
                let options = mode.translate_options(&self.options.translate);
                let tex = Translator::new(options).translate(equation);
                mode.wrap(&tex, self.options.display_mode)
            }
        }
    }

    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl Fn(&EventPayload<'_>) + 'static,
    ) -> ListenerId {
        self.events.on(kind, listener)
    }

    pub fn off(&mut self, kind: EventKind, id: ListenerId) -> bool {
        self.events.off(kind, id)
    }

    pub fn emit(&self, kind: EventKind, payload: &EventPayload<'_>) {
        self.events.emit(kind, payload);
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    pub fn fonts_mut(&mut self) -> &mut FontRegistry {
        &mut self.fonts
    }

    /// Drop all listeners and forget loaded fonts.
    pub fn dispose(&mut self) {
        self.events.clear();
        self.fonts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bidi::{PDF, RLE};
    use crate::render::MemoryTarget;

    #[test]
    fn test_translate_wraps_for_rtl() {
        let math = ArabicMath::default();
        let out = math.translate("sin(x)");
        assert!(out.starts_with(RLE));
        assert!(out.contains(PDF));
        assert!(out.contains("جا"));
    }

    #[test]
    fn test_translate_without_rtl() {
        let math = ArabicMath::new(ArabicMathOptions {
            rtl: false,
            ..Default::default()
        });
        assert_eq!(math.translate("x = 2"), "س = ٢");
    }

    #[test]
    fn test_missing_target() {
        let math = ArabicMath::default();
        let err = math.render(None, "x").unwrap_err();
        assert!(matches!(err, ArabicMathError::TargetNotFound));
    }

    #[test]
    fn test_options_deserialize_defaults() {
        let options: ArabicMathOptions =
            serde_json::from_str(r#"{"mathRenderer":"katex","rtl":false}"#).unwrap();
        assert_eq!(options.math_renderer, RenderMode::Katex);
        assert!(!options.rtl);
        assert!(options.auto_translate);
        assert!(options.display_mode);
        assert_eq!(options.translate, TranslateOptions::default());
    }

    #[test]
    fn test_render_katex_keeps_tex() {
        let math = ArabicMath::new(ArabicMathOptions::katex());
        let mut target = MemoryTarget::new();
        let job = math.render(Some(&mut target), r"\frac{x}{2}").unwrap();
        assert_eq!(job.text, r"\frac{x}{٢}");
        assert_eq!(target.last_text(), Some(r"\frac{x}{٢}"));
    }
}
