//! Integration tests for the arabic-math translation pipeline

use arabic_math::core::mask::{mask, unmask};
use arabic_math::data::{DIGITS, FUNCTIONS, OPERATIONS, VARIABLES};
use arabic_math::{
    convert_numbers_to_arabic, convert_numbers_to_english, detect_expression_type, ensure_rtl,
    extract_variables, normalize_mixed, translate, translate_with_options, validate, ArabicMath,
    ExpressionType, TranslateOptions, Translator,
};
use pretty_assertions::assert_eq;

// ============================================================================
// Dictionary Tests
// ============================================================================

mod dictionaries {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_function_key_translates() {
        let t = Translator::new(TranslateOptions {
            translate_functions: true,
            ..TranslateOptions::none()
        });
        for (key, value) in FUNCTIONS.entries() {
            assert_eq!(t.translate(key), *value, "function key {:?}", key);
        }
    }

    #[test]
    fn test_every_variable_key_translates() {
        let t = Translator::new(TranslateOptions {
            translate_variables: true,
            ..TranslateOptions::none()
        });
        for (key, value) in VARIABLES.entries() {
            assert_eq!(t.translate(key), *value, "variable key {:?}", key);
        }
    }

    #[test]
    fn test_every_digit_translates() {
        for (digit, arabic) in DIGITS.entries() {
            assert_eq!(convert_numbers_to_arabic(&digit.to_string()), arabic.to_string());
        }
    }

    #[test]
    fn test_every_operation_key_mirrors() {
        let t = Translator::new(TranslateOptions {
            apply_rtl: true,
            flip_arrows: true,
            ..TranslateOptions::none()
        });
        for (key, value) in OPERATIONS.entries() {
            assert_eq!(t.translate(key), *value, "operation key {:?}", key);
        }
    }

    #[test]
    fn test_keys_are_word_bounded() {
        let t = Translator::new(TranslateOptions {
            translate_functions: true,
            ..TranslateOptions::none()
        });
        assert_eq!(t.translate("sinus"), "sinus");
        assert_eq!(t.translate("sinh"), "جاز");
    }
}

// ============================================================================
// Digit Tests
// ============================================================================

mod digits {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_roundtrip() {
        for input in ["0", "42", "0123456789", "9876543210", ""] {
            assert_eq!(convert_numbers_to_english(&convert_numbers_to_arabic(input)), input);
        }
    }

    #[test]
    fn test_non_digits_untouched() {
        assert_eq!(convert_numbers_to_arabic("x^2 + 3.5"), "x^٢ + ٣.٥");
    }
}

// ============================================================================
// Translation Tests
// ============================================================================

mod translation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_pipeline() {
        assert_eq!(translate("sin(x) + cos(y) = 1"), "جا(س) + جتا(ص) = ١");
    }

    #[test]
    fn test_end_to_end_wrapped_for_rtl() {
        let out = ArabicMath::default().translate("sin(x) + cos(y) = 1");
        assert_eq!(out, ensure_rtl("جا(س) + جتا(ص) = ١"));
        assert!(out.contains('\u{202B}'));
    }

    #[test]
    fn test_sum_survives_variable_pass() {
        assert_eq!(translate(r"\sum_{k} x"), r"\sum_{ك} س");
    }

    #[test]
    fn test_stage_toggles() {
        let digits = TranslateOptions::digits_only();
        assert_eq!(translate_with_options("sin(x) = 1", &digits), "sin(x) = ١");

        let no_vars = TranslateOptions {
            translate_variables: false,
            ..TranslateOptions::default()
        };
        assert_eq!(translate_with_options("sin(x)", &no_vars), "جا(x)");
    }

    #[test]
    fn test_fraction_swap_with_rtl() {
        let out = translate_with_options(r"\frac{1}{x}", &TranslateOptions::full());
        assert_eq!(out, "س / ١");
    }

    #[test]
    fn test_matrix_environment_keeps_its_name() {
        let out = translate_with_options(
            r"\begin{bmatrix} 1 & x \end{bmatrix}",
            &TranslateOptions::full(),
        );
        assert_eq!(out, r"\begin{bmatrix} س & ١ \end{bmatrix}");
    }

    #[test]
    fn test_empty_and_missing_input() {
        assert_eq!(translate(""), "");
        assert_eq!(Translator::default().translate_opt(None), "");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(translate("  x   +\t y  "), "س + ص");
    }
}

// ============================================================================
// Masking Tests
// ============================================================================

mod masking {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_roundtrip() {
        let inputs = [
            r"\lim_{x \to 0} \frac{\sin x}{x}",
            r"\begin{pmatrix} a & b \\ c & d \end{pmatrix}",
            "plain text",
            "\u{F8F0}3\u{F8F1}",
            r"\\",
        ];
        for input in inputs {
            let masked = mask(input);
            assert_eq!(unmask(&masked.text, &masked.commands), input);
        }
    }

    #[test]
    fn test_unknown_placeholder_left_alone() {
        let text = "\u{F8F0}7\u{F8F1}";
        assert_eq!(unmask(text, &[]), text);
    }
}

// ============================================================================
// RTL Normalization Tests
// ============================================================================

mod rtl {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_mixed_idempotent() {
        let inputs = [
            "جا(س) + 1",
            "x + y",
            "\u{202B}س\u{202C} + \u{202B}\u{202B}ص\u{202C}",
            "",
            "نها س ← ٠",
        ];
        for input in inputs {
            let once = normalize_mixed(input);
            assert_eq!(normalize_mixed(&once), once);
        }
    }

    #[test]
    fn test_ensure_rtl_not_idempotent() {
        let once = ensure_rtl("س");
        assert_ne!(ensure_rtl(&once), once);
        assert_eq!(normalize_mixed(&ensure_rtl(&once)), once);
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_balanced() {
        let result = validate("(a+b)");
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_missing_closing() {
        let result = validate("(a+b");
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("missing closing"));
    }

    #[test]
    fn test_stray_closer_index() {
        let result = validate("a+b)");
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Unbalanced bracket near index 3"]);
    }

    #[test]
    fn test_escaped_brace_does_not_pair_with_plain_brace() {
        let result = validate(r"\{ a }");
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Unbalanced bracket near index 5"]);
    }

    #[test]
    fn test_index_counts_characters() {
        let result = validate("س+ص)");
        assert_eq!(result.errors, vec!["Unbalanced bracket near index 3"]);
    }
}

// ============================================================================
// Classification Tests
// ============================================================================

mod classification {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detect_expression_type() {
        assert_eq!(detect_expression_type(r"\lim_{x\to 0} f(x)"), ExpressionType::Limit);
        assert_eq!(detect_expression_type("x + y = z"), ExpressionType::Equation);
        assert_eq!(detect_expression_type("x + y"), ExpressionType::Expression);
    }

    #[test]
    fn test_extract_variables() {
        assert_eq!(extract_variables("a*x^2 + b*x + c"), vec!["a", "b", "c", "x"]);
    }

    #[test]
    fn test_extract_variables_after_translation() {
        let translated = translate("a*x^2 + b*x + c");
        assert_eq!(extract_variables(&translated), vec!["أ", "ب", "جـ", "س"]);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ExpressionType::Summation.to_string(), "summation");
        assert_eq!(
            serde_json::to_string(&ExpressionType::Integral).unwrap(),
            r#""integral""#
        );
    }
}
