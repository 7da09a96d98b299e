//! Color types and conversion functions.
//!
//! Four color types (`Srgb`, `LinearRgb`, `OkLab`, `OkLch`) and pure
//! conversion functions between them, all in `f64`. `OkLch` is the canonical
//! form inside the crate; `Srgb` and its `"#rrggbb"` encoding only appear at
//! the boundary where a color is parsed or displayed.

use crate::error::RampError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chroma below this is treated as achromatic: the hue is dropped.
///
/// sRGB grays land around 1e-8 after the round trip through the OKLab
/// matrices, so the threshold sits well above that.
pub const ACHROMATIC_EPSILON: f64 = 1e-6;

/// sRGB color with components nominally in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-decoded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh, the cylindrical form of OKLab.
///
/// `h` is in degrees [0, 360), or `None` when the color is achromatic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
}

impl OkLch {
    /// Pure white, `{l: 1, c: 0}`.
    pub const WHITE: OkLch = OkLch {
        l: 1.0,
        c: 0.0,
        h: None,
    };

    /// Pure black, `{l: 0, c: 0}`.
    pub const BLACK: OkLch = OkLch {
        l: 0.0,
        c: 0.0,
        h: None,
    };

    /// Builds a color, dropping the hue when `c` is below
    /// [`ACHROMATIC_EPSILON`] and normalizing it to [0, 360) otherwise.
    pub fn new(l: f64, c: f64, h: Option<f64>) -> Self {
        let h = if c < ACHROMATIC_EPSILON {
            None
        } else {
            h.map(|h| h.rem_euclid(360.0))
        };
        OkLch { l, c, h }
    }

    /// Same hue, new lightness and chroma.
    pub fn with_lc(self, l: f64, c: f64) -> Self {
        OkLch::new(l, c, self.h)
    }

    /// True when the color carries no hue.
    pub fn is_achromatic(&self) -> bool {
        self.h.is_none()
    }

    /// Formats as a CSS `oklch()` string with `none` for a missing hue.
    pub fn to_css(&self) -> String {
        match self.h {
            Some(h) => format!("oklch({:.4} {:.4} {:.2})", self.l, self.c, h),
            None => format!("oklch({:.4} {:.4} none)", self.l, self.c),
        }
    }
}

impl Srgb {
    /// Parses a hex color such as `"#3b82f6"`, `"3B82F6"` or `"#fa0"`.
    ///
    /// Returns `RampError::InvalidColor` for anything but 3 or 6 hex digits.
    pub fn from_hex(hex: &str) -> Result<Srgb, RampError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(RampError::InvalidColor(format!(
                "non-ascii hex color: {hex:?}"
            )));
        }
        let channel = |digits: &str, name: &str| {
            u8::from_str_radix(digits, 16)
                .map_err(|e| RampError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        let (r, g, b) = match hex.len() {
            3 => {
                let r = channel(&hex[0..1], "red")?;
                let g = channel(&hex[1..2], "green")?;
                let b = channel(&hex[2..3], "blue")?;
                (r * 17, g * 17, b * 17)
            }
            6 => (
                channel(&hex[0..2], "red")?,
                channel(&hex[2..4], "green")?,
                channel(&hex[4..6], "blue")?,
            ),
            n => {
                return Err(RampError::InvalidColor(format!(
                    "expected 3 or 6 hex digits, got {n}"
                )))
            }
        };
        Ok(Srgb::from_u8(r, g, b))
    }

    /// Builds a color from 8-bit channels.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Srgb {
        Srgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are clipped to [0, 1] and rounded to 8 bits.
    pub fn to_hex(self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// True when all three channels are finite.
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_component_to_srgb(c: f64) -> f64 {
    // Odd extension keeps out-of-gamut (negative) channels meaningful.
    let magnitude = c.abs();
    let encoded = if magnitude <= 0.0031308 {
        magnitude * 12.92
    } else {
        1.055 * magnitude.powf(1.0 / 2.4) - 0.055
    };
    encoded.copysign(c)
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}

/// Converts linear RGB to sRGB by applying sRGB gamma.
pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: linear_component_to_srgb(c.r),
        g: linear_component_to_srgb(c.g),
        b: linear_component_to_srgb(c.b),
    }
}

/// Converts linear RGB to OKLab.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let l_ = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
    let m_ = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
    let s_ = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

    let l_c = l_.cbrt();
    let m_c = m_.cbrt();
    let s_c = s_.cbrt();

    OkLab {
        l: 0.2104542553 * l_c + 0.7936177850 * m_c - 0.0040720468 * s_c,
        a: 1.9779984951 * l_c - 2.4285922050 * m_c + 0.4505937099 * s_c,
        b: 0.0259040371 * l_c + 0.7827717662 * m_c - 0.8086757660 * s_c,
    }
}

/// Converts OKLab to linear RGB. The result may lie outside [0, 1].
pub fn oklab_to_linear(c: OkLab) -> LinearRgb {
    let l_ = c.l + 0.3963377774 * c.a + 0.2158037573 * c.b;
    let m_ = c.l - 0.1055613458 * c.a - 0.0638541728 * c.b;
    let s_ = c.l - 0.0894841775 * c.a - 1.2914855480 * c.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinearRgb {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// Converts OKLab to OKLCh. Near-zero chroma yields `h: None`.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let ch = (c.a * c.a + c.b * c.b).sqrt();
    OkLch::new(c.l, ch, Some(c.b.atan2(c.a).to_degrees()))
}

/// Converts OKLCh to OKLab. A missing hue puts the color on the neutral axis.
pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    match c.h {
        Some(h) => {
            let h_rad = h.to_radians();
            OkLab {
                l: c.l,
                a: c.c * h_rad.cos(),
                b: c.c * h_rad.sin(),
            }
        }
        None => OkLab {
            l: c.l,
            a: 0.0,
            b: 0.0,
        },
    }
}

/// sRGB -> linear -> OKLab -> OKLCh.
pub fn srgb_to_oklch(c: Srgb) -> OkLch {
    oklab_to_oklch(linear_to_oklab(srgb_to_linear(c)))
}

/// OKLCh -> OKLab -> linear -> sRGB without clipping, so callers can tell
/// whether the color is displayable.
pub fn oklch_to_srgb_unclipped(c: OkLch) -> Srgb {
    linear_to_srgb(oklab_to_linear(oklch_to_oklab(c)))
}

/// OKLCh to sRGB with output clipped to [0, 1].
pub fn oklch_to_srgb(c: OkLch) -> Srgb {
    let srgb = oklch_to_srgb_unclipped(c);
    Srgb {
        r: srgb.r.clamp(0.0, 1.0),
        g: srgb.g.clamp(0.0, 1.0),
        b: srgb.b.clamp(0.0, 1.0),
    }
}

/// Encodes an OKLCh color as `"#rrggbb"`.
///
/// Returns `None` when the conversion yields a non-finite channel; finite
/// out-of-gamut channels are clipped.
pub fn to_displayable(c: OkLch) -> Option<String> {
    let srgb = oklch_to_srgb_unclipped(c);
    srgb.is_finite().then(|| srgb.to_hex())
}
