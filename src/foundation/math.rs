/// Rec. 601 luma weights.
pub(crate) const LUMA_R: f64 = 0.299;
pub(crate) const LUMA_G: f64 = 0.587;
pub(crate) const LUMA_B: f64 = 0.114;

/// Store a float sample into a u8 channel: clamp to `[0, 255]`, round half to even.
///
/// NaN stores as 0.
pub(crate) fn clamp_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0).round_ties_even() as u8
}

pub(crate) fn luma(r: f64, g: f64, b: f64) -> f64 {
    r * LUMA_R + g * LUMA_G + b * LUMA_B
}

/// Linear radial falloff: `max(0, 1 - (dist / max_dist) * weight) * cap`.
///
/// Returns 0 when `max_dist` is not positive.
pub(crate) fn radial_falloff(dist: f64, max_dist: f64, weight: f64, cap: f64) -> f64 {
    if max_dist <= 0.0 {
        return 0.0;
    }
    (1.0 - (dist / max_dist) * weight).max(0.0) * cap
}

pub(crate) fn hypot(dx: f64, dy: f64) -> f64 {
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
