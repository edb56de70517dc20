//! Per-pixel tone transforms. Each function takes one RGBA pixel (4 bytes) and never touches
//! the alpha byte.

use crate::foundation::math::{clamp_channel, luma};

const SATURATION_THRESHOLD: f64 = 0.5;
const SATURATION_FACTOR: f64 = 1.5;
const CONTRAST_FACTOR: f64 = 1.3;
const CONTRAST_PIVOT: f64 = 128.0;

pub(crate) fn vintage(px: &mut [u8]) {
    let r = f64::from(px[0]);
    let g = f64::from(px[1]);
    let b = f64::from(px[2]);
    px[0] = clamp_channel(r * 1.1 + 20.0);
    px[1] = clamp_channel(g * 0.95 + 10.0);
    px[2] = clamp_channel(b * 0.9);
}

pub(crate) fn black_white(px: &mut [u8]) {
    let gray = clamp_channel(luma(f64::from(px[0]), f64::from(px[1]), f64::from(px[2])));
    px[0] = gray;
    px[1] = gray;
    px[2] = gray;
}

/// Saturation boost for dull pixels, then an unconditional contrast stretch around 128.
///
/// The boosted values are stored (and therefore clamped and rounded) before the contrast step
/// reads them back.
pub(crate) fn peachy(px: &mut [u8]) {
    let max = px[0].max(px[1]).max(px[2]);
    let min = px[0].min(px[1]).min(px[2]);
    let saturation = if max == 0 {
        0.0
    } else {
        f64::from(max - min) / f64::from(max)
    };

    if saturation < SATURATION_THRESHOLD {
        let r = f64::from(px[0]);
        let g = f64::from(px[1]);
        let b = f64::from(px[2]);
        let gray = (r + g + b) / 3.0;
        px[0] = clamp_channel(gray + (r - gray) * SATURATION_FACTOR);
        px[1] = clamp_channel(gray + (g - gray) * SATURATION_FACTOR);
        px[2] = clamp_channel(gray + (b - gray) * SATURATION_FACTOR);
    }

    for c in &mut px[..3] {
        *c = clamp_channel((f64::from(*c) - CONTRAST_PIVOT) * CONTRAST_FACTOR + CONTRAST_PIVOT);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/tone.rs"]
mod tests;
