use crate::foundation::core::{Point, Size};

/// Stable identifier of an annotation within one overlay model.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct AnnotationId(pub u64);

impl std::fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "annotation-{}", self.0)
    }
}

/// Which family an annotation belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    /// A glyph/emoji sticker.
    Sticker,
    /// A free text label.
    Text,
}

/// Kind-specific payload of an [`Annotation`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AnnotationBody {
    /// Sticker payload.
    Sticker {
        /// Symbol drawn for the sticker (usually one emoji).
        glyph: String,
    },
    /// Text payload.
    Text {
        /// Label text.
        content: String,
        /// CSS-style colour string, e.g. `#FF6B6B`.
        color: String,
        /// Font family / font stack.
        font_family: String,
    },
}

/// A placeable overlay on the final strip.
///
/// `position` is the annotation centre in percent of the container (`0..=100` on both axes;
/// not clamped at creation). `size` is the sticker size or the text font size, in pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Annotation {
    /// Identifier, unique within its model.
    pub id: AnnotationId,
    /// Centre in percentage coordinates.
    pub position: Point,
    /// Visual scale: sticker size or font size.
    pub size: f64,
    /// Rotation in degrees, clockwise.
    pub rotation_deg: f64,
    /// Sticker or text payload.
    pub body: AnnotationBody,
}

impl Annotation {
    /// Family of this annotation.
    pub fn kind(&self) -> AnnotationKind {
        match self.body {
            AnnotationBody::Sticker { .. } => AnnotationKind::Sticker,
            AnnotationBody::Text { .. } => AnnotationKind::Text,
        }
    }

    /// Sticker glyph, if this is a sticker.
    pub fn glyph(&self) -> Option<&str> {
        match &self.body {
            AnnotationBody::Sticker { glyph } => Some(glyph),
            AnnotationBody::Text { .. } => None,
        }
    }

    /// Text content, if this is a text annotation.
    pub fn content(&self) -> Option<&str> {
        match &self.body {
            AnnotationBody::Text { content, .. } => Some(content),
            AnnotationBody::Sticker { .. } => None,
        }
    }

    /// Centre in container pixels, relative to the container's top-left corner.
    pub fn pixel_anchor(&self, container: Size) -> Point {
        Point::new(
            self.position.x / 100.0 * container.width,
            self.position.y / 100.0 * container.height,
        )
    }

    pub(crate) fn apply_text_patch(&mut self, patch: TextPatch) {
        let AnnotationBody::Text {
            content,
            color,
            font_family,
        } = &mut self.body
        else {
            return;
        };
        if let Some(v) = patch.content {
            *content = v;
        }
        if let Some(v) = patch.color {
            *color = v;
        }
        if let Some(v) = patch.font_family {
            *font_family = v;
        }
        if let Some(v) = patch.font_size.filter(|v| v.is_finite()) {
            self.size = v;
        }
    }
}

/// Partial update for a text annotation. `None` fields are left as they are.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextPatch {
    /// Replacement text.
    pub content: Option<String>,
    /// Replacement font size in pixels; non-finite values are ignored.
    pub font_size: Option<f64>,
    /// Replacement colour.
    pub color: Option<String>,
    /// Replacement font family.
    pub font_family: Option<String>,
}

impl TextPatch {
    /// Patch that only replaces the text.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Patch that only replaces the font size.
    pub fn font_size(font_size: f64) -> Self {
        Self {
            font_size: Some(font_size),
            ..Self::default()
        }
    }

    /// Patch that only replaces the colour.
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/annotation.rs"]
mod tests;
