//! Tonal palette derivation from a single main color.
//!
//! [`derive`] builds a three-keyframe path in OKLCh, dark endpoint → main
//! color → light endpoint, samples it at eleven evenly spaced positions and
//! labels the samples with [`SAMPLE_LABELS`]. Labels 0 and 1000 are always
//! pure white and pure black.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::{to_displayable, OkLch};
use crate::error::RampError;
use crate::gamut::clamp_chroma;
use crate::luminance::{BLACK_LABEL, SAMPLE_COUNT, SAMPLE_LABELS, WHITE_LABEL};
use crate::options::GradientOptions;
use crate::parse::parse_color;
use crate::path::{samples, InterpolationPath, Keyframe};

/// A derived palette.
///
/// Both maps hold exactly the 13 labels of
/// [`LUMINANCE`](crate::luminance::LUMINANCE).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientResult {
    /// Label → `"#rrggbb"`.
    pub palette: BTreeMap<u16, String>,
    /// Label → perceptual color, as sampled (before display clipping).
    pub perceptual_points: BTreeMap<u16, OkLch>,
    /// The main color after gamut clamping.
    pub main_color_oklch: OkLch,
}

/// The dark and light ends of a gradient, both gamut clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoints {
    pub dark: OkLch,
    pub light: OkLch,
}

/// Derives the dark and light endpoints for an already clamped main color.
///
/// Both keep the main color's hue; lightness and chroma come from `options`.
pub fn endpoints(main: OkLch, options: &GradientOptions) -> Endpoints {
    Endpoints {
        dark: clamp_chroma(main.with_lc(options.min_l, options.dark_chroma)),
        light: clamp_chroma(main.with_lc(options.max_l, options.light_chroma)),
    }
}

/// Derives a 13-entry tonal palette from `main_color`.
///
/// Returns `RampError::InvalidColor` if `main_color` does not parse, and
/// `RampError::InvariantViolation` if a sampled color has no displayable
/// form (only possible with NaN options).
pub fn derive(main_color: &str, options: &GradientOptions) -> Result<GradientResult, RampError> {
    let main = clamp_chroma(parse_color(main_color)?);
    let Endpoints { dark, light } = endpoints(main, options);

    let path = InterpolationPath::new(&[
        Keyframe::at(dark, 0.0),
        Keyframe::at(main, options.main_color_stop),
        Keyframe::at(light, 1.0),
    ])?;
    let sampled = path.sample(&samples(SAMPLE_COUNT));

    let mut palette = BTreeMap::new();
    let mut perceptual_points = BTreeMap::new();
    for (&label, color) in SAMPLE_LABELS.iter().zip(sampled) {
        let hex = to_displayable(color).ok_or_else(|| {
            RampError::InvariantViolation(format!(
                "label {label} has no displayable form: {color:?}"
            ))
        })?;
        palette.insert(label, hex);
        perceptual_points.insert(label, color);
    }

    palette.insert(WHITE_LABEL, "#ffffff".to_string());
    perceptual_points.insert(WHITE_LABEL, OkLch::WHITE);
    palette.insert(BLACK_LABEL, "#000000".to_string());
    perceptual_points.insert(BLACK_LABEL, OkLch::BLACK);

    Ok(GradientResult {
        palette,
        perceptual_points,
        main_color_oklch: main,
    })
}
