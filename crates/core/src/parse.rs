//! Parsing of user-facing color strings into OKLCh.
//!
//! Accepted forms:
//! * `#rgb`, `#rrggbb` (the `#` is optional, case insensitive)
//! * `rgb(r, g, b)` with integer channels 0–255, comma or space separated
//! * `oklch(L C H)` where `L` is a number or a percentage and `H` may be `none`

use crate::color::{srgb_to_oklch, OkLch, Srgb};
use crate::error::RampError;

/// Parses a color string into its perceptual form.
///
/// `oklch()` input is taken as-is, so it may be outside the sRGB gamut; the
/// other forms are always displayable.
pub fn parse_color(input: &str) -> Result<OkLch, RampError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(RampError::InvalidColor("empty color string".into()));
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = function_args(&lower, "rgb") {
        return parse_css_rgb(args).map(srgb_to_oklch);
    }
    if let Some(args) = function_args(&lower, "oklch") {
        return parse_css_oklch(args);
    }
    Srgb::from_hex(s).map(srgb_to_oklch)
}

/// Returns the text between `name(` and the closing `)`.
fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn split_args(args: &str) -> Vec<&str> {
    args.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

fn parse_css_rgb(args: &str) -> Result<Srgb, RampError> {
    let nums = split_args(args);
    if nums.len() != 3 {
        return Err(RampError::InvalidColor(format!(
            "rgb() expects 3 channels, got {}",
            nums.len()
        )));
    }
    let channel = |token: &str| {
        token
            .parse::<u8>()
            .map_err(|_| RampError::InvalidColor(format!("rgb() channel out of range: {token}")))
    };
    Ok(Srgb::from_u8(
        channel(nums[0])?,
        channel(nums[1])?,
        channel(nums[2])?,
    ))
}

fn parse_css_oklch(args: &str) -> Result<OkLch, RampError> {
    let parts = split_args(args);
    if parts.len() != 3 {
        return Err(RampError::InvalidColor(format!(
            "oklch() expects 3 components, got {}",
            parts.len()
        )));
    }
    let l = match parts[0].strip_suffix('%') {
        Some(pct) => number(pct)? / 100.0,
        None => number(parts[0])?,
    };
    let c = number(parts[1])?;
    let h = match parts[2] {
        "none" => None,
        h => Some(number(h.strip_suffix("deg").unwrap_or(h))?),
    };
    Ok(OkLch::new(l, c, h))
}

fn number(token: &str) -> Result<f64, RampError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RampError::InvalidColor(format!("not a number: {token}")))
}
