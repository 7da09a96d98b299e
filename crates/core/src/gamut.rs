//! sRGB gamut checks and chroma clamping in OKLCh.
//!
//! Clamping reduces chroma at constant lightness and hue until the color is
//! displayable, so a clamped color keeps its place on the lightness axis.

use crate::color::{oklch_to_srgb_unclipped, OkLch};

/// Slack allowed on each sRGB channel before a color counts as out of gamut.
pub const GAMUT_EPSILON: f64 = 1e-5;

/// Upper end of the OKLCh chroma range used to size the search resolution.
pub const MAX_CHROMA: f64 = 0.4;

/// Chroma resolution of the binary search: the chroma range split in 2^13.
const CHROMA_RESOLUTION: f64 = MAX_CHROMA / 8192.0;

/// Returns true if the color converts to sRGB channels within [0, 1]
/// (plus [`GAMUT_EPSILON`]).
pub fn in_gamut(c: OkLch) -> bool {
    let srgb = oklch_to_srgb_unclipped(c);
    [srgb.r, srgb.g, srgb.b]
        .iter()
        .all(|v| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(v))
}

/// Maps a color into the sRGB gamut, preserving lightness and hue.
///
/// In-gamut colors are returned unchanged. Otherwise chroma is binary searched
/// down to the largest displayable value. When even zero chroma is out of
/// gamut (lightness outside [0, 1]), lightness is clamped instead. The search
/// never starts above [`MAX_CHROMA`], so infinite chroma clamps like any other
/// vivid color. NaN lightness is returned unchanged.
pub fn clamp_chroma(color: OkLch) -> OkLch {
    if in_gamut(color) {
        return color;
    }

    let gray = color.with_lc(color.l, 0.0);
    if !in_gamut(gray) {
        if color.l.is_nan() {
            return color;
        }
        return OkLch::new(color.l.clamp(0.0, 1.0), 0.0, None);
    }

    let mut low = 0.0;
    let mut high = color.c.min(MAX_CHROMA);
    let mut last_good = 0.0;
    while high - low > CHROMA_RESOLUTION {
        let mid = low + (high - low) * 0.5;
        if in_gamut(color.with_lc(color.l, mid)) {
            last_good = mid;
            low = mid;
        } else {
            high = mid;
        }
    }
    OkLch::new(color.l, last_good, color.h)
}
