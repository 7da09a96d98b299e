//! Piecewise interpolation paths through OKLCh keyframes.
//!
//! Each channel is interpolated linearly and independently. Hue takes the
//! shorter arc around the color wheel; when only one side of a segment has a
//! hue, that hue is carried across the segment.

use crate::color::OkLch;
use crate::error::RampError;

/// One anchor of an [`InterpolationPath`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub color: OkLch,
    /// Position in the path's domain; `None` lets the path place it.
    pub position: Option<f64>,
}

impl Keyframe {
    /// A keyframe at an explicit position.
    pub fn at(color: OkLch, position: f64) -> Self {
        Self {
            color,
            position: Some(position),
        }
    }

    /// A keyframe placed evenly between its positioned neighbours.
    pub fn auto(color: OkLch) -> Self {
        Self {
            color,
            position: None,
        }
    }
}

/// A continuous function from a position to an OKLCh color.
#[derive(Debug, Clone)]
pub struct InterpolationPath {
    colors: Vec<OkLch>,
    positions: Vec<f64>,
}

impl InterpolationPath {
    /// Builds a path from keyframes.
    ///
    /// Missing positions are resolved as: first defaults to 0, last to 1,
    /// interior runs are spread evenly between the nearest positioned
    /// neighbours. A position below its predecessor is raised to it.
    pub fn new(keyframes: &[Keyframe]) -> Result<Self, RampError> {
        if keyframes.is_empty() {
            return Err(RampError::EmptyPath);
        }
        let colors = keyframes.iter().map(|k| k.color).collect();
        let positions = resolve_positions(keyframes);
        Ok(Self { colors, positions })
    }

    /// Resolved keyframe positions, non-decreasing.
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Evaluates the path at `t`.
    ///
    /// `t` is clamped to the keyframe range; NaN maps to the first keyframe.
    /// Where several keyframes share a position, the earliest one is returned
    /// at exactly that position.
    pub fn at(&self, t: f64) -> OkLch {
        let n = self.colors.len();
        let first = self.positions[0];
        let last = self.positions[n - 1];
        if n == 1 || t.is_nan() || t <= first {
            return self.colors[0];
        }
        if t >= last {
            return self.colors[n - 1];
        }

        // First segment whose end is at or beyond t.
        let idx = self.positions[1..]
            .iter()
            .position(|&p| t <= p)
            .unwrap_or(n - 2);
        // t > p0 here, so the segment has non-zero width.
        let (p0, p1) = (self.positions[idx], self.positions[idx + 1]);
        lerp_oklch(self.colors[idx], self.colors[idx + 1], (t - p0) / (p1 - p0))
    }

    /// Evaluates the path at each position in `ts`.
    pub fn sample(&self, ts: &[f64]) -> Vec<OkLch> {
        ts.iter().map(|&t| self.at(t)).collect()
    }
}

/// `n` evenly spaced positions over [0, 1], both ends included.
///
/// A single sample sits at the midpoint.
pub fn samples(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.5],
        _ => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    }
}

fn resolve_positions(keyframes: &[Keyframe]) -> Vec<f64> {
    let n = keyframes.len();
    let mut positions: Vec<Option<f64>> = keyframes.iter().map(|k| k.position).collect();
    positions[0] = positions[0].or(Some(0.0));
    if n > 1 {
        positions[n - 1] = positions[n - 1].or(Some(1.0));
    }

    let mut resolved = Vec::with_capacity(n);
    let mut i = 0;
    while i < n {
        match positions[i] {
            Some(p) => {
                let floor = resolved.last().copied().unwrap_or(f64::NEG_INFINITY);
                resolved.push(if p < floor { floor } else { p });
                i += 1;
            }
            None => {
                // Run of unpositioned keyframes; the last one is always positioned.
                let start = resolved.last().copied().unwrap_or(0.0);
                let end_idx = (i..n).find(|&j| positions[j].is_some()).unwrap_or(n - 1);
                let end = positions[end_idx].unwrap_or(1.0).max(start);
                let gaps = (end_idx - i + 1) as f64;
                for k in 0..(end_idx - i) {
                    resolved.push(start + (end - start) * (k + 1) as f64 / gaps);
                }
                i = end_idx;
            }
        }
    }
    resolved
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

fn lerp_oklch(c0: OkLch, c1: OkLch, t: f64) -> OkLch {
    let h = match (c0.h, c1.h) {
        (Some(h0), Some(h1)) => Some(interpolate_hue(h0, h1, t)),
        (Some(h), None) | (None, Some(h)) => Some(h),
        (None, None) => None,
    };
    OkLch::new(lerp(c0.l, c1.l, t), lerp(c0.c, c1.c, t), h)
}

/// Interpolates hue along the shorter arc, handling wraparound at 360.
fn interpolate_hue(h0: f64, h1: f64, t: f64) -> f64 {
    let delta = match h1 - h0 {
        d if d > 180.0 => d - 360.0,
        d if d < -180.0 => d + 360.0,
        d => d,
    };
    (h0 + t * delta).rem_euclid(360.0)
}
