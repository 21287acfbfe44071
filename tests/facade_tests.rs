//! Tests for the ArabicMath entry point: render hand-off, events and fonts

use std::cell::RefCell;
use std::rc::Rc;

use arabic_math::{
    ArabicMath, ArabicMathError, ArabicMathOptions, EventKind, EventPayload, MemoryTarget,
    RenderJob, RenderMode, RenderTarget, Result, TranslateOptions, DEFAULT_FONTS,
};
use pretty_assertions::assert_eq;

struct FailingTarget;

impl RenderTarget for FailingTarget {
    fn render(&mut self, _job: &RenderJob) -> Result<()> {
        Err(ArabicMathError::render("engine unavailable"))
    }
}

fn record_events(math: &mut ArabicMath) -> Rc<RefCell<Vec<String>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for kind in [EventKind::BeforeRender, EventKind::AfterRender, EventKind::OptionsChange] {
        let log = Rc::clone(&log);
        math.on(kind, move |payload| {
            let entry = match payload {
                EventPayload::Render { equation, .. } => format!("{} {}", kind, equation),
                EventPayload::OptionsChange(options) => {
                    format!("{} {}", kind, options.math_renderer)
                }
            };
            log.borrow_mut().push(entry);
        });
    }
    log
}

// ============================================================================
// Render Tests
// ============================================================================

mod render {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_mode_uses_full_translation() {
        let math = ArabicMath::default();
        let mut target = MemoryTarget::new();
        let job = math.render(Some(&mut target), "sin(x) = 1").unwrap();

        assert_eq!(job.text, math.translate("sin(x) = 1"));
        assert_eq!(job.context.mode, RenderMode::None);
        assert_eq!(job.context.direction, "rtl");
        assert_eq!(job.context.css_class, "arabic-math");
        assert_eq!(job.context.version, ArabicMath::version());
        assert_eq!(target.jobs.len(), 1);
    }

    #[test]
    fn test_mathjax_display_and_inline() {
        let math = ArabicMath::new(ArabicMathOptions::mathjax());
        let mut target = MemoryTarget::new();
        let job = math.render(Some(&mut target), r"\frac{x}{2}").unwrap();
        assert_eq!(job.text, r"\[\frac{x}{٢}\]");

        let inline = ArabicMath::new(ArabicMathOptions {
            display_mode: false,
            ..ArabicMathOptions::mathjax()
        });
        let job = inline.render(Some(&mut target), "x + 1").unwrap();
        assert_eq!(job.text, r"\(x + ١\)");
    }

    #[test]
    fn test_katex_gets_raw_tex() {
        let math = ArabicMath::new(ArabicMathOptions::katex());
        let mut target = MemoryTarget::new();
        let job = math.render(Some(&mut target), r"\sin x = 3").unwrap();
        assert_eq!(job.text, r"\sin x = ٣");
    }

    #[test]
    fn test_tex_engine_respects_digit_toggle() {
        let math = ArabicMath::new(ArabicMathOptions {
            translate: TranslateOptions {
                translate_numbers: false,
                ..TranslateOptions::default()
            },
            ..ArabicMathOptions::katex()
        });
        let mut target = MemoryTarget::new();
        let job = math.render(Some(&mut target), "x = 3").unwrap();
        assert_eq!(job.text, "x = 3");
    }

    #[test]
    fn test_auto_translate_off() {
        let math = ArabicMath::new(ArabicMathOptions {
            auto_translate: false,
            ..ArabicMathOptions::default()
        });
        let mut target = MemoryTarget::new();
        let job = math.render(Some(&mut target), "sin(x").unwrap();
        assert_eq!(job.text, "sin(x");
        assert_eq!(job.issues.errors, vec!["Unbalanced brackets: missing closing"]);
    }

    #[test]
    fn test_missing_target_fails_loudly() {
        let math = ArabicMath::default();
        let err = math.render(None, "x").unwrap_err();
        assert!(matches!(err, ArabicMathError::TargetNotFound));
        assert_eq!(err.to_string(), "Target element not found");
    }

    #[test]
    fn test_target_error_propagates() {
        let mut math = ArabicMath::default();
        let log = record_events(&mut math);
        let err = math.render(Some(&mut FailingTarget), "x").unwrap_err();
        assert!(matches!(err, ArabicMathError::RenderFailed { .. }));
        assert_eq!(log.borrow().len(), 1);
        assert!(log.borrow()[0].starts_with("before:render"));
    }
}

// ============================================================================
// Event Tests
// ============================================================================

mod events {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_emits_before_and_after() {
        let mut math = ArabicMath::new(ArabicMathOptions {
            rtl: false,
            ..ArabicMathOptions::default()
        });
        let log = record_events(&mut math);
        let mut target = MemoryTarget::new();
        math.render(Some(&mut target), "x").unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["before:render س".to_string(), "after:render س".to_string()]
        );
    }

    #[test]
    fn test_set_options_emits_change() {
        let mut math = ArabicMath::default();
        let log = record_events(&mut math);
        math.update_options(|o| o.math_renderer = RenderMode::Katex);

        assert_eq!(math.options().math_renderer, RenderMode::Katex);
        assert_eq!(*log.borrow(), vec!["options:change katex".to_string()]);
    }

    #[test]
    fn test_set_options_updates_translator() {
        let mut math = ArabicMath::new(ArabicMathOptions {
            rtl: false,
            ..ArabicMathOptions::default()
        });
        assert_eq!(math.translate("x = 1"), "س = ١");
        math.update_options(|o| o.translate.translate_numbers = false);
        assert_eq!(math.translate("x = 1"), "س = 1");
    }

    #[test]
    fn test_panicking_listener_does_not_break_render() {
        let mut math = ArabicMath::default();
        math.on(EventKind::BeforeRender, |_| panic!("listener bug"));
        let log = record_events(&mut math);

        let mut target = MemoryTarget::new();
        assert!(math.render(Some(&mut target), "x").is_ok());
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_off_and_dispose() {
        let mut math = ArabicMath::default();
        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        let id = math.on(EventKind::AfterRender, move |_| *counter.borrow_mut() += 1);

        let mut target = MemoryTarget::new();
        math.render(Some(&mut target), "x").unwrap();
        assert!(math.off(EventKind::AfterRender, id));
        math.render(Some(&mut target), "x").unwrap();
        assert_eq!(*hits.borrow(), 1);

        let log = record_events(&mut math);
        math.dispose();
        math.render(Some(&mut target), "x").unwrap();
        assert!(log.borrow().is_empty());
    }
}

// ============================================================================
// Font Tests
// ============================================================================

mod fonts {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_font_list() {
        let names: Vec<_> = DEFAULT_FONTS.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Amiri", "Cairo", "Scheherazade New"]);
        assert!(DEFAULT_FONTS.iter().all(|f| f.url.starts_with("https://fonts.googleapis.com/")));
    }

    #[test]
    fn test_registry_is_per_instance_and_cleared_on_dispose() {
        let mut math = ArabicMath::default();
        let other = ArabicMath::default();

        let failures = math.fonts_mut().load_defaults(|_, _| Ok::<(), String>(()));
        assert!(failures.is_empty());
        assert!(math.fonts().is_loaded("Amiri"));
        assert!(!other.fonts().is_loaded("Amiri"));

        math.dispose();
        assert!(!math.fonts().is_loaded("Amiri"));
    }

    #[test]
    fn test_failed_font_reports_error() {
        let mut math = ArabicMath::default();
        let err = math
            .fonts_mut()
            .load("Cairo", DEFAULT_FONTS[1].url, |_, _| Err("network down"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Font 'Cairo' could not be loaded: network down");
    }
}
