use image::{RgbaImage, imageops};

use crate::{
    foundation::core::{FrameRgba, Rect},
    foundation::error::{PhotoboothError, PhotoboothResult},
    strip::template::StripTemplate,
};

/// Maximum number of photos placed on one strip.
pub const MAX_STRIP_PHOTOS: usize = 4;

/// Pixel geometry of a vertical photo strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StripLayout {
    /// Total strip width.
    pub width_px: u32,
    /// Outer padding on every side.
    pub padding_px: u32,
    /// Vertical gap between framed photos.
    pub gap_px: u32,
    /// Frame border thickness around each photo.
    pub border_px: u32,
    /// Height of the caption band below the last photo.
    pub footer_px: u32,
}

impl Default for StripLayout {
    fn default() -> Self {
        Self {
            width_px: 256,
            padding_px: 16,
            gap_px: 12,
            border_px: 2,
            footer_px: 32,
        }
    }
}

impl StripLayout {
    /// Same layout with every dimension multiplied by `factor` (e.g. 2 for a hi-dpi export).
    pub fn scaled(self, factor: u32) -> Self {
        Self {
            width_px: self.width_px.saturating_mul(factor),
            padding_px: self.padding_px.saturating_mul(factor),
            gap_px: self.gap_px.saturating_mul(factor),
            border_px: self.border_px.saturating_mul(factor),
            footer_px: self.footer_px.saturating_mul(factor),
        }
    }

    fn photo_width(&self) -> PhotoboothResult<u32> {
        self.width_px
            .checked_sub(self.padding_px.saturating_mul(2))
            .and_then(|w| w.checked_sub(self.border_px.saturating_mul(2)))
            .filter(|w| *w > 0)
            .ok_or_else(|| {
                PhotoboothError::validation("strip width leaves no room for photos")
            })
    }
}

/// Resolved strip geometry: final size and the rectangle each photo is drawn into.
#[derive(Clone, Debug, PartialEq)]
pub struct StripPlan {
    /// Strip width in pixels.
    pub width: u32,
    /// Strip height in pixels.
    pub height: u32,
    /// Photo rectangles (inside their frames), top to bottom.
    pub slots: Vec<Rect>,
}

/// Lay out photos of the given `(width, height)` sizes, top to bottom.
///
/// Each photo is scaled to the inner strip width, keeping its aspect ratio. Sizes past
/// [`MAX_STRIP_PHOTOS`] are ignored.
pub fn plan_strip(sizes: &[(u32, u32)], layout: &StripLayout) -> PhotoboothResult<StripPlan> {
    let sizes = &sizes[..sizes.len().min(MAX_STRIP_PHOTOS)];
    if sizes.is_empty() {
        return Err(PhotoboothError::validation("a strip needs at least one photo"));
    }
    let photo_w = layout.photo_width()?;

    let mut slots = Vec::with_capacity(sizes.len());
    let mut y = u64::from(layout.padding_px);
    for (i, &(w, h)) in sizes.iter().enumerate() {
        if w == 0 || h == 0 {
            return Err(PhotoboothError::validation(format!(
                "strip photo {i} has zero size"
            )));
        }
        if i > 0 {
            y += u64::from(layout.gap_px);
        }
        let photo_h = ((f64::from(h) * f64::from(photo_w) / f64::from(w)).round() as u64).max(1);
        let x0 = (u64::from(layout.padding_px) + u64::from(layout.border_px)) as f64;
        let y0 = (y + u64::from(layout.border_px)) as f64;
        slots.push(Rect::new(
            x0,
            y0,
            x0 + f64::from(photo_w),
            y0 + photo_h as f64,
        ));
        y += photo_h + 2 * u64::from(layout.border_px);
    }
    y += u64::from(layout.footer_px) + u64::from(layout.padding_px);

    let height = u32::try_from(y)
        .map_err(|_| PhotoboothError::validation("strip height is out of range"))?;
    Ok(StripPlan {
        width: layout.width_px,
        height,
        slots,
    })
}

/// Render photos onto a strip background in the template's colours.
///
/// Photos are alpha-blended over their frame. Overlay annotations are not drawn here; map them
/// with [`crate::Annotation::pixel_anchor`] against the returned frame's size.
#[tracing::instrument(skip(photos, template), fields(photos = photos.len(), template = template.id))]
pub fn compose_strip(
    photos: &[FrameRgba],
    template: &StripTemplate,
    layout: &StripLayout,
) -> PhotoboothResult<FrameRgba> {
    let sizes: Vec<(u32, u32)> = photos.iter().map(|p| (p.width, p.height)).collect();
    let plan = plan_strip(&sizes, layout)?;

    let mut canvas = RgbaImage::from_pixel(
        plan.width,
        plan.height,
        image::Rgba(template.background.to_array()),
    );
    let border = layout.border_px;

    for (photo, slot) in photos.iter().zip(&plan.slots) {
        let (sx, sy) = (slot.x0 as u32, slot.y0 as u32);
        let (sw, sh) = (slot.width() as u32, slot.height() as u32);

        fill_rect(
            &mut canvas,
            sx - border,
            sy - border,
            sw + 2 * border,
            sh + 2 * border,
            image::Rgba(template.frame.to_array()),
        );

        let src = RgbaImage::from_raw(photo.width, photo.height, photo.data.clone())
            .ok_or_else(|| PhotoboothError::image("photo buffer does not match its size"))?;
        let resized = if (photo.width, photo.height) == (sw, sh) {
            src
        } else {
            imageops::resize(&src, sw, sh, imageops::FilterType::Triangle)
        };
        imageops::overlay(&mut canvas, &resized, i64::from(sx), i64::from(sy));
    }

    tracing::debug!(width = plan.width, height = plan.height, "strip composed");
    FrameRgba::new(plan.width, plan.height, canvas.into_raw())
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: image::Rgba<u8>) {
    let x_end = x.saturating_add(w).min(img.width());
    let y_end = y.saturating_add(h).min(img.height());
    for yy in y..y_end {
        for xx in x..x_end {
            img.put_pixel(xx, yy, color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strip/compose.rs"]
mod tests;
