//! The "blue light" look: cool colour shift, slight softening, three synthesized corner light
//! leaks and a centre glow.
//!
//! Every output pixel depends only on its own coordinates and its own pre-filter value, read
//! from a snapshot taken before any write. Rows are independent, so the transform can run
//! row-parallel.

use rayon::prelude::*;

use crate::foundation::math::{clamp_channel, hypot, radial_falloff};

// (falloff weight, magnitude cap) per light-leak anchor.
const LEAK_TOP_LEFT: (f64, f64) = (0.6, 0.3);
const LEAK_TOP_RIGHT: (f64, f64) = (0.5, 0.25);
const LEAK_BOTTOM_RIGHT: (f64, f64) = (0.7, 0.2);
const LEAK_SCALE: f64 = 0.8;
const LEAK_BLUE: f64 = 0.4;
const LEAK_BRIGHTNESS: f64 = 0.3;

const GLOW_WEIGHT: f64 = 0.3;
const GLOW_CAP: f64 = 0.1;
const GLOW_BLUE_BOOST: f64 = 1.2;

const SOFTEN: f64 = 0.15;

/// Image-level constants shared by every pixel.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DreamyGeometry {
    width: f64,
    height: f64,
    center_x: f64,
    center_y: f64,
    half_diagonal: f64,
    diagonal: f64,
}

impl DreamyGeometry {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        let width = width as f64;
        let height = height as f64;
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            width,
            height,
            center_x,
            center_y,
            half_diagonal: hypot(center_x, center_y),
            diagonal: hypot(width, height),
        }
    }

    /// Combined, scaled light-leak intensity at `(x, y)`.
    pub(crate) fn leak(&self, x: f64, y: f64) -> f64 {
        let dx_right = self.width - x;
        let dy_bottom = self.height - y;

        let top_left = radial_falloff(hypot(x, y), self.diagonal, LEAK_TOP_LEFT.0, LEAK_TOP_LEFT.1);
        let top_right = radial_falloff(
            hypot(dx_right, y),
            self.diagonal,
            LEAK_TOP_RIGHT.0,
            LEAK_TOP_RIGHT.1,
        );
        let bottom_right = radial_falloff(
            hypot(dx_right, dy_bottom),
            self.diagonal,
            LEAK_BOTTOM_RIGHT.0,
            LEAK_BOTTOM_RIGHT.1,
        );

        (top_left + top_right + bottom_right) * LEAK_SCALE
    }

    /// Centre glow intensity at `(x, y)`, in `[0, 0.1]`.
    pub(crate) fn glow(&self, x: f64, y: f64) -> f64 {
        let dist = hypot(x - self.center_x, y - self.center_y);
        radial_falloff(dist, self.half_diagonal, GLOW_WEIGHT, GLOW_CAP)
    }

    pub(crate) fn shade(&self, src: &[u8], dst: &mut [u8], x: u32, y: u32) {
        // colour shift
        let mut r = (f64::from(src[0]) * 0.85).clamp(0.0, 255.0);
        let mut g = (f64::from(src[1]) * 0.92).clamp(0.0, 255.0);
        let mut b = (f64::from(src[2]) * 1.15 + 15.0).clamp(0.0, 255.0);

        // soften towards the pixel's own average
        let avg = (r + g + b) / 3.0;
        r = r * (1.0 - SOFTEN) + avg * SOFTEN;
        g = g * (1.0 - SOFTEN) + avg * SOFTEN;
        b = b * (1.0 - SOFTEN) + avg * SOFTEN;

        let (xf, yf) = (x as f64, y as f64);

        let leak = self.leak(xf, yf);
        let leak_blue = leak * 255.0 * LEAK_BLUE;
        let leak_brightness = leak * 255.0 * LEAK_BRIGHTNESS;
        r = (r + leak_brightness * 0.5).min(255.0);
        g = (g + leak_brightness * 0.6).min(255.0);
        b = (b + leak_blue + leak_brightness * 0.4).min(255.0);

        let glow = self.glow(xf, yf) * 255.0;
        r = (r + glow).min(255.0);
        g = (g + glow).min(255.0);
        b = (b + glow * GLOW_BLUE_BOOST).min(255.0);

        dst[0] = clamp_channel(r);
        dst[1] = clamp_channel(g);
        dst[2] = clamp_channel(b);
    }
}

/// Apply the dreamy transform in place.
///
/// Pixel coordinates come from the index within `buf` and the declared `width`; trailing bytes
/// that do not form a whole pixel are left alone.
pub(crate) fn apply(buf: &mut [u8], width: u32, height: u32, parallel: bool) {
    if width == 0 || height == 0 || buf.is_empty() {
        return;
    }
    let original = buf.to_vec();
    let geom = DreamyGeometry::new(width, height);
    let row_bytes = width as usize * 4;

    let shade_row = |(y, (dst_row, src_row)): (usize, (&mut [u8], &[u8]))| {
        for (x, (dst, src)) in dst_row
            .chunks_exact_mut(4)
            .zip(src_row.chunks_exact(4))
            .enumerate()
        {
            geom.shade(src, dst, x as u32, y as u32);
        }
    };

    if parallel {
        buf.par_chunks_mut(row_bytes)
            .zip(original.par_chunks(row_bytes))
            .enumerate()
            .for_each(shade_row);
    } else {
        buf.chunks_mut(row_bytes)
            .zip(original.chunks(row_bytes))
            .enumerate()
            .for_each(shade_row);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/dreamy.rs"]
mod tests;
