use rand::Rng;

use crate::foundation::math::clamp_channel;

/// Peak-to-peak grain amplitude; noise is drawn from `[-15, 15)`.
pub(crate) const GRAIN_AMPLITUDE: f64 = 30.0;

/// One noise draw per pixel, added to R, G and B alike.
pub(crate) fn apply<R: Rng + ?Sized>(buf: &mut [u8], rng: &mut R) {
    for px in buf.chunks_exact_mut(4) {
        let noise = (rng.r#gen::<f64>() - 0.5) * GRAIN_AMPLITUDE;
        for c in &mut px[..3] {
            *c = clamp_channel(f64::from(*c) + noise);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/grain.rs"]
mod tests;
