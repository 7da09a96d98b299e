#![deny(unsafe_code)]
//! Core of tonal-ramp: derives a 13-step tonal palette from one main color.
//!
//! Provides color types (`Srgb`, `OkLab`, `OkLch`) and conversions, color
//! string parsing, sRGB gamut clamping in OKLCh, keyframed interpolation
//! paths, the fixed luminance label tables, `GradientOptions`, and the
//! `derive` function that ties them together.

pub mod color;
pub mod error;
pub mod gamut;
pub mod gradient;
pub mod luminance;
pub mod options;
pub mod parse;
pub mod path;

pub use color::{LinearRgb, OkLab, OkLch, Srgb};
pub use error::RampError;
pub use gamut::{clamp_chroma, in_gamut};
pub use gradient::{derive, GradientResult};
pub use luminance::{LUMINANCE, SAMPLE_LABELS};
pub use options::GradientOptions;
pub use parse::parse_color;
pub use path::{samples, InterpolationPath, Keyframe};
