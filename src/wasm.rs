//! WASM bindings for arabic-math
//!
//! JavaScript-accessible translation, validation and classification.
//! Options objects use the same camelCase keys as the Rust options structs.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{ArabicMath, ArabicMathOptions, TranslateOptions};

/// Translation result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct TranslateResult {
    /// The translated output
    pub output: String,
    /// Whether translation succeeded
    pub success: bool,
    /// Error message if translation failed
    pub error: Option<String>,
    /// Validation warnings for the input
    pub warnings: Vec<String>,
}

/// Safely serialize a value to JsValue, returning an error object on failure.
#[cfg(feature = "wasm")]
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        let error_obj = TranslateResult {
            output: String::new(),
            success: false,
            error: Some(format!("Serialization error: {}", e)),
            warnings: vec![],
        };
        serde_wasm_bindgen::to_value(&error_obj).unwrap_or(JsValue::NULL)
    })
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Translate with default options. `null`/`undefined` yields an empty string.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "translate")]
pub fn translate_wasm(input: Option<String>) -> String {
    input.map_or_else(String::new, |text| {
        ArabicMath::new(ArabicMathOptions::default()).translate(&text)
    })
}

/// Translate with an `ArabicMathOptions`-shaped object.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "translateWithOptions")]
pub fn translate_with_options_wasm(input: Option<String>, options: JsValue) -> JsValue {
    let opts: ArabicMathOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let text = input.unwrap_or_default();
    let math = ArabicMath::new(opts);

    let result = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        math.translate(&text)
    })) {
        Ok(output) => TranslateResult {
            output,
            success: true,
            error: None,
            warnings: math.validate_equation(&text).warnings,
        },
        Err(e) => {
            let error_msg = if let Some(s) = e.downcast_ref::<&str>() {
                format!("Translation failed: {}", s)
            } else if let Some(s) = e.downcast_ref::<String>() {
                format!("Translation failed: {}", s)
            } else {
                "Translation failed: unknown error".to_string()
            };
            TranslateResult {
                output: String::new(),
                success: false,
                error: Some(error_msg),
                warnings: vec![],
            }
        }
    };

    to_js_value(&result)
}

/// Pipeline-only translation (no bidi wrapping), options as `TranslateOptions`.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "translatePlain")]
pub fn translate_plain_wasm(input: Option<String>, options: JsValue) -> String {
    let opts: TranslateOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    crate::translate_with_options(input.as_deref().unwrap_or_default(), &opts)
}

/// Validate bracket balance; returns `{ valid, errors, warnings }`.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "validate")]
pub fn validate_wasm(input: &str) -> JsValue {
    to_js_value(&crate::validate(input))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "detectExpressionType")]
pub fn detect_expression_type_wasm(input: &str) -> String {
    crate::detect_expression_type(input).as_str().to_string()
}

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "extractVariables")]
pub fn extract_variables_wasm(input: &str) -> JsValue {
    to_js_value(&crate::extract_variables(input))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "normalizeMixed")]
pub fn normalize_mixed_wasm(input: &str) -> String {
    crate::normalize_mixed(input)
}

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "tokenize")]
pub fn tokenize_wasm(input: &str) -> JsValue {
    to_js_value(&crate::tokenize(input))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    crate::VERSION.to_string()
}
