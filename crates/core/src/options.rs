//! Knobs that shape a derived gradient.
//!
//! [`GradientOptions`] deserializes from a partial JSON object: any field the
//! caller leaves out keeps its default, and a field of the wrong type is an
//! error. Ranges are not validated.

use serde::{Deserialize, Serialize};

/// Lightness of the dark endpoint.
pub const DEFAULT_MIN_L: f64 = 0.2;
/// Lightness of the light endpoint.
pub const DEFAULT_MAX_L: f64 = 0.98;
/// Chroma of the dark endpoint.
pub const DEFAULT_DARK_CHROMA: f64 = 0.001;
/// Chroma of the light endpoint.
pub const DEFAULT_LIGHT_CHROMA: f64 = 0.01;
/// Position of the main color along the path.
pub const DEFAULT_MAIN_COLOR_STOP: f64 = 0.5;

/// Options for [`derive`](crate::gradient::derive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradientOptions {
    pub min_l: f64,
    pub max_l: f64,
    pub dark_chroma: f64,
    pub light_chroma: f64,
    pub main_color_stop: f64,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            min_l: DEFAULT_MIN_L,
            max_l: DEFAULT_MAX_L,
            dark_chroma: DEFAULT_DARK_CHROMA,
            light_chroma: DEFAULT_LIGHT_CHROMA,
            main_color_stop: DEFAULT_MAIN_COLOR_STOP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_documented_values() {
        let d = GradientOptions::default();
        assert_eq!(d.min_l, 0.2);
        assert_eq!(d.max_l, 0.98);
        assert_eq!(d.dark_chroma, 0.001);
        assert_eq!(d.light_chroma, 0.01);
        assert_eq!(d.main_color_stop, 0.5);
    }

    #[test]
    fn empty_object_deserializes_to_defaults() {
        let opts: GradientOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, GradientOptions::default());
    }

    #[test]
    fn partial_object_overrides_only_given_fields() {
        let opts: GradientOptions =
            serde_json::from_value(json!({"minL": 0.1, "mainColorStop": 0.3})).unwrap();
        assert_eq!(opts.min_l, 0.1);
        assert_eq!(opts.main_color_stop, 0.3);
        assert_eq!(opts.max_l, DEFAULT_MAX_L);
        assert_eq!(opts.dark_chroma, DEFAULT_DARK_CHROMA);
        assert_eq!(opts.light_chroma, DEFAULT_LIGHT_CHROMA);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let v = serde_json::to_value(GradientOptions::default()).unwrap();
        for key in ["minL", "maxL", "darkChroma", "lightChroma", "mainColorStop"] {
            assert!(v.get(key).is_some(), "missing {key} in {v}");
        }
    }

    #[test]
    fn strict_deserialize_rejects_wrong_types() {
        let result = serde_json::from_value::<GradientOptions>(json!({"minL": "dark"}));
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let opts: GradientOptions =
            serde_json::from_value(json!({"minL": -3.0, "mainColorStop": 2.0})).unwrap();
        assert_eq!(opts.min_l, -3.0);
        assert_eq!(opts.main_color_stop, 2.0);
    }
}
