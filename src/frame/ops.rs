use crate::foundation::core::FrameRgba;

/// Flip an RGBA8 buffer left-to-right in place, one row of `width` pixels at a time.
///
/// Used for selfie-style captures so the stored photo matches the mirrored preview. A trailing
/// partial row is left untouched.
pub fn mirror_horizontal(buf: &mut [u8], width: u32) {
    let row_bytes = width as usize * 4;
    if row_bytes == 0 {
        return;
    }
    for row in buf.chunks_exact_mut(row_bytes) {
        let (mut left, mut right) = (0usize, width as usize - 1);
        while left < right {
            for c in 0..4 {
                row.swap(left * 4 + c, right * 4 + c);
            }
            left += 1;
            right -= 1;
        }
    }
}

/// Mirror an owned frame in place.
pub fn mirror_frame(frame: &mut FrameRgba) {
    let width = frame.width;
    mirror_horizontal(&mut frame.data, width);
}

#[cfg(test)]
#[path = "../../tests/unit/frame/ops.rs"]
mod tests;
