use rand::Rng;

use crate::foundation::error::{PhotoboothError, PhotoboothResult};

/// Closed numeric interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValueRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl ValueRange {
    /// Build a range. Bounds are checked by [`OverlayConfig::validate`], not here.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Uniform draw `min + u * (max - min)` with `u` in `[0, 1)`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.min + rng.r#gen::<f64>() * (self.max - self.min)
    }

    /// Clamp `v` into the range. Never panics: inverted bounds are swapped and a NaN bound is
    /// ignored.
    pub fn clamp(&self, v: f64) -> f64 {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        v.max(lo).min(hi)
    }

    fn validate(&self, name: &str) -> PhotoboothResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PhotoboothError::validation(format!(
                "{name} bounds must be finite"
            )));
        }
        if self.min > self.max {
            return Err(PhotoboothError::validation(format!(
                "{name} min must be <= max"
            )));
        }
        Ok(())
    }
}

/// Randomized initial placement for newly added annotations.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacementRanges {
    /// Horizontal centre, percent.
    pub x: ValueRange,
    /// Vertical centre, percent.
    pub y: ValueRange,
    /// Sticker size or font size, pixels.
    pub size: ValueRange,
    /// Rotation, degrees.
    pub rotation_deg: ValueRange,
}

impl PlacementRanges {
    fn validate(&self, name: &str) -> PhotoboothResult<()> {
        self.x.validate(&format!("{name}.x"))?;
        self.y.validate(&format!("{name}.y"))?;
        self.size.validate(&format!("{name}.size"))?;
        self.rotation_deg.validate(&format!("{name}.rotation_deg"))
    }
}

/// Overlay tuning: where new annotations appear and how far they can be dragged.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Placement of new stickers.
    pub sticker: PlacementRanges,
    /// Placement of new text labels.
    pub text: PlacementRanges,
    /// Allowed horizontal centre while dragging, percent.
    pub drag_x: ValueRange,
    /// Allowed vertical centre while dragging, percent.
    pub drag_y: ValueRange,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            sticker: PlacementRanges {
                x: ValueRange::new(20.0, 80.0),
                y: ValueRange::new(10.0, 90.0),
                size: ValueRange::new(28.0, 40.0),
                rotation_deg: ValueRange::new(-15.0, 15.0),
            },
            text: PlacementRanges {
                x: ValueRange::new(20.0, 80.0),
                y: ValueRange::new(10.0, 90.0),
                size: ValueRange::new(16.0, 24.0),
                rotation_deg: ValueRange::new(-5.0, 5.0),
            },
            drag_x: ValueRange::new(5.0, 95.0),
            drag_y: ValueRange::new(2.0, 98.0),
        }
    }
}

impl OverlayConfig {
    /// Parse a (possibly partial) JSON config; missing sections keep their defaults.
    pub fn from_json_str(s: &str) -> PhotoboothResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every range is finite and ordered.
    pub fn validate(&self) -> PhotoboothResult<()> {
        self.sticker.validate("sticker")?;
        self.text.validate("text")?;
        self.drag_x.validate("drag_x")?;
        self.drag_y.validate("drag_y")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/config.rs"]
mod tests;
