//! The fixed luminance labels that index a tonal palette.
//!
//! Labels run from 0 (white) to 1000 (black). Only the eleven labels between
//! them are sampled from the gradient, and they are sampled darkest first,
//! so the sample order is the reverse of [`LUMINANCE`]'s display order.

/// Every palette label in ascending (display) order.
pub const LUMINANCE: [u16; 13] = [0, 50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950, 1000];

/// Label that is always pure white.
pub const WHITE_LABEL: u16 = 0;

/// Label that is always pure black.
pub const BLACK_LABEL: u16 = 1000;

/// Number of colors sampled from the gradient path.
pub const SAMPLE_COUNT: usize = 11;

/// Label for each sample index. Sample 0 is the dark end of the path.
pub const SAMPLE_LABELS: [u16; SAMPLE_COUNT] = [950, 900, 800, 700, 600, 500, 400, 300, 200, 100, 50];
