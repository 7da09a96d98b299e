#![deny(unsafe_code)]
//! WASM bindings for tonal-ramp.
//!
//! The browser front end passes the main color and a (possibly partial)
//! options object as JSON and gets the serialized `GradientResult` back.
//! Each exported function wraps a plain Rust function that returns
//! [`BindingError`], so the logic is testable off the wasm target.

mod error;

pub use error::BindingError;

use tonal_ramp_core::{clamp_chroma, derive, parse_color, GradientOptions, LUMINANCE};
use wasm_bindgen::prelude::*;

/// Parses an options object. A blank string means "all defaults".
pub fn parse_options(options_json: &str) -> Result<GradientOptions, BindingError> {
    if options_json.trim().is_empty() {
        return Ok(GradientOptions::default());
    }
    serde_json::from_str(options_json).map_err(|e| BindingError::Options(e.to_string()))
}

/// Derives a palette and returns it as JSON.
pub fn derive_json(main_color: &str, options_json: &str) -> Result<String, BindingError> {
    let options = parse_options(options_json)?;
    let result = derive(main_color, &options)?;
    serde_json::to_string(&result).map_err(|e| BindingError::Serialization(e.to_string()))
}

/// The gamut-clamped main color as a CSS `oklch()` string.
pub fn main_color_css(main_color: &str) -> Result<String, BindingError> {
    Ok(clamp_chroma(parse_color(main_color)?).to_css())
}

/// JSON of the default options.
pub fn default_options_json() -> Result<String, BindingError> {
    serde_json::to_string(&GradientOptions::default())
        .map_err(|e| BindingError::Serialization(e.to_string()))
}

fn to_js(e: BindingError) -> JsError {
    JsError::new(&e.to_string())
}

#[wasm_bindgen(js_name = deriveGradient)]
pub fn derive_gradient(main_color: &str, options_json: &str) -> Result<String, JsError> {
    derive_json(main_color, options_json).map_err(to_js)
}

#[wasm_bindgen(js_name = defaultOptions)]
pub fn default_options() -> Result<String, JsError> {
    default_options_json().map_err(to_js)
}

#[wasm_bindgen(js_name = luminanceSteps)]
pub fn luminance_steps() -> Vec<u16> {
    LUMINANCE.to_vec()
}

#[wasm_bindgen(js_name = oklchCss)]
pub fn oklch_css(main_color: &str) -> Result<String, JsError> {
    main_color_css(main_color).map_err(to_js)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn blank_options_are_defaults() {
        assert_eq!(parse_options("").unwrap(), GradientOptions::default());
        assert_eq!(parse_options("  ").unwrap(), GradientOptions::default());
        assert_eq!(parse_options("{}").unwrap(), GradientOptions::default());
    }

    #[test]
    fn malformed_options_are_rejected() {
        let err = parse_options("{minL: 0.1").unwrap_err();
        assert_eq!(err.kind(), "options");
        let err = parse_options(r#"{"maxL": "high"}"#).unwrap_err();
        assert_eq!(err.kind(), "options");
    }

    #[test]
    fn derive_json_has_all_labels() {
        let json = derive_json("#3b82f6", r#"{"mainColorStop": 0.4}"#).unwrap();
        let v: Value = serde_json::from_str(&json).unwrap();
        let palette = v["palette"].as_object().unwrap();
        let points = v["perceptualPoints"].as_object().unwrap();
        assert_eq!(palette.len(), 13);
        assert_eq!(points.len(), 13);
        for label in LUMINANCE {
            assert!(palette.contains_key(&label.to_string()), "missing {label}");
        }
        assert_eq!(v["palette"]["0"], "#ffffff");
        assert!(v["mainColorOklch"]["h"].is_number());
    }

    #[test]
    fn derive_json_no_options_equals_explicit_defaults() {
        let implicit = derive_json("#c2410c", "").unwrap();
        let explicit = derive_json(
            "#c2410c",
            r#"{"minL":0.2,"maxL":0.98,"darkChroma":0.001,"lightChroma":0.01,"mainColorStop":0.5}"#,
        )
        .unwrap();
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn derive_json_reports_bad_color() {
        let err = derive_json("banana", "").unwrap_err();
        assert_eq!(err.kind(), "invalid-color");
    }

    #[test]
    fn default_options_round_trip() {
        let json = default_options_json().unwrap();
        assert_eq!(parse_options(&json).unwrap(), GradientOptions::default());
    }

    #[test]
    fn main_color_css_formats_clamped_color() {
        let css = main_color_css("#3b82f6").unwrap();
        assert!(css.starts_with("oklch(0.6231 0.1880 259.8"), "got {css}");
        assert_eq!(main_color_css("#ffffff").unwrap(), "oklch(1.0000 0.0000 none)");
    }

    #[test]
    fn luminance_steps_match_core_table() {
        assert_eq!(luminance_steps(), LUMINANCE.to_vec());
    }
}
