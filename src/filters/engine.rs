use rand::Rng;
use rayon::prelude::*;

use crate::{
    filters::{dreamy, grain, kind::FilterKind, tone},
    foundation::core::FrameRgba,
};

/// Execution controls for [`apply_filter_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Run deterministic filters row-parallel on the rayon global pool.
    ///
    /// Grain always runs serially since it draws from a single RNG.
    pub parallel: bool,
}

/// Apply `kind` to an RGBA8 buffer in place, drawing grain noise from the thread-local RNG.
///
/// `buf` is expected to hold `width * height * 4` bytes. The call never reads past
/// `buf.len()`; a shorter or longer buffer is a caller bug and yields unspecified pixels, not a
/// panic. Alpha is never modified. [`FilterKind::None`] returns without touching the buffer.
pub fn apply_filter(buf: &mut [u8], width: u32, height: u32, kind: FilterKind) {
    if kind.is_identity() {
        return;
    }
    apply_filter_with(
        buf,
        width,
        height,
        kind,
        &FilterSettings::default(),
        &mut rand::thread_rng(),
    );
}

/// Like [`apply_filter`], with explicit settings and an injectable random source.
#[tracing::instrument(level = "debug", skip(buf, rng), fields(len = buf.len()))]
pub fn apply_filter_with<R: Rng + ?Sized>(
    buf: &mut [u8],
    width: u32,
    height: u32,
    kind: FilterKind,
    settings: &FilterSettings,
    rng: &mut R,
) {
    match kind {
        FilterKind::None => {}
        FilterKind::Vintage => for_each_pixel(buf, width, settings.parallel, tone::vintage),
        FilterKind::BlackWhite => for_each_pixel(buf, width, settings.parallel, tone::black_white),
        FilterKind::Peachy => for_each_pixel(buf, width, settings.parallel, tone::peachy),
        FilterKind::Blue => dreamy::apply(buf, width, height, settings.parallel),
        FilterKind::Grains => grain::apply(buf, rng),
    }
}

/// Apply `kind` to an owned frame.
pub fn apply_filter_to_frame<R: Rng + ?Sized>(
    frame: &mut FrameRgba,
    kind: FilterKind,
    settings: &FilterSettings,
    rng: &mut R,
) {
    if kind.is_identity() {
        return;
    }
    let (width, height) = (frame.width, frame.height);
    apply_filter_with(&mut frame.data, width, height, kind, settings, rng);
}

fn for_each_pixel(buf: &mut [u8], width: u32, parallel: bool, f: fn(&mut [u8])) {
    if !parallel {
        buf.chunks_exact_mut(4).for_each(f);
        return;
    }
    let row_bytes = (width as usize).max(1) * 4;
    buf.par_chunks_mut(row_bytes)
        .for_each(|row| row.chunks_exact_mut(4).for_each(f));
}

#[cfg(test)]
#[path = "../../tests/unit/filters/engine.rs"]
mod tests;
