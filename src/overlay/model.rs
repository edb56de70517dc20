use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    foundation::core::{Point, Rect},
    overlay::{
        annotation::{Annotation, AnnotationBody, AnnotationId, AnnotationKind, TextPatch},
        config::{OverlayConfig, PlacementRanges},
        drag::{DragState, dragged_position, grab_offset},
    },
};

/// Sticker and text annotations for one photo strip, plus the active drag.
///
/// Every operation is total: stale ids are absorbed as no-ops because pointer events can race
/// with removal. Annotations are kept in insertion order, which is also the default paint
/// order; see [`OverlayModel::render_order`].
///
/// The random source only feeds initial placement. Use [`OverlayModel::with_rng`] with a seeded
/// generator for reproducible layouts.
#[derive(Clone, Debug)]
pub struct OverlayModel<R: Rng = StdRng> {
    items: Vec<Annotation>,
    next_id: u64,
    drag: Option<DragState>,
    config: OverlayConfig,
    rng: R,
}

impl OverlayModel<StdRng> {
    /// Empty model with default config, seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_config_and_rng(OverlayConfig::default(), StdRng::from_entropy())
    }

    /// Empty model with a custom config, seeded from OS entropy.
    pub fn with_config(config: OverlayConfig) -> Self {
        Self::with_config_and_rng(config, StdRng::from_entropy())
    }
}

impl Default for OverlayModel<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> OverlayModel<R> {
    /// Empty model with default config and the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self::with_config_and_rng(OverlayConfig::default(), rng)
    }

    /// Empty model with explicit config and random source.
    ///
    /// A config that fails [`OverlayConfig::validate`] (inverted or non-finite ranges) is
    /// replaced by the default with a warning.
    pub fn with_config_and_rng(config: OverlayConfig, rng: R) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                tracing::warn!(%err, "invalid overlay config, using defaults");
                OverlayConfig::default()
            }
        };
        Self {
            items: Vec::new(),
            next_id: 1,
            drag: None,
            config,
            rng,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// All annotations in insertion order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.items
    }

    /// Stickers in insertion order.
    pub fn stickers(&self) -> impl Iterator<Item = &Annotation> {
        self.of_kind(AnnotationKind::Sticker)
    }

    /// Text annotations in insertion order.
    pub fn texts(&self) -> impl Iterator<Item = &Annotation> {
        self.of_kind(AnnotationKind::Text)
    }

    /// Look up an annotation by id.
    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.items.iter().find(|a| a.id == id)
    }

    /// Total number of annotations of both kinds.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when there are no annotations.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a sticker at a random position, size and tilt. Existing entries are kept.
    pub fn add_sticker(&mut self, glyph: impl Into<String>) -> Annotation {
        let ranges = self.config.sticker;
        let annotation = self.place(
            ranges,
            AnnotationBody::Sticker {
                glyph: glyph.into(),
            },
        );
        tracing::debug!(id = %annotation.id, "sticker added");
        annotation
    }

    /// Add a text label at a random position, font size and tilt.
    ///
    /// Content is trimmed; empty or whitespace-only content is rejected and returns `None`.
    pub fn add_text(
        &mut self,
        content: &str,
        color: impl Into<String>,
        font_family: impl Into<String>,
    ) -> Option<Annotation> {
        let content = content.trim();
        if content.is_empty() {
            tracing::trace!("ignoring empty text annotation");
            return None;
        }
        let ranges = self.config.text;
        let annotation = self.place(
            ranges,
            AnnotationBody::Text {
                content: content.to_string(),
                color: color.into(),
                font_family: font_family.into(),
            },
        );
        tracing::debug!(id = %annotation.id, "text added");
        Some(annotation)
    }

    /// Merge `patch` into the text annotation `id`. Unknown ids and stickers are ignored.
    pub fn update_text(&mut self, id: AnnotationId, patch: TextPatch) {
        match self
            .items
            .iter_mut()
            .find(|a| a.id == id && a.kind() == AnnotationKind::Text)
        {
            Some(a) => a.apply_text_patch(patch),
            None => tracing::trace!(%id, "update for missing text annotation ignored"),
        }
    }

    /// Remove sticker `id`; absent ids are a no-op.
    pub fn remove_sticker(&mut self, id: AnnotationId) {
        self.remove(id, AnnotationKind::Sticker);
    }

    /// Remove text annotation `id`; absent ids are a no-op.
    pub fn remove_text(&mut self, id: AnnotationId) {
        self.remove(id, AnnotationKind::Text);
    }

    /// Remove every sticker, leaving text annotations alone.
    pub fn clear_stickers(&mut self) {
        self.clear(AnnotationKind::Sticker);
    }

    /// Remove every text annotation, leaving stickers alone.
    pub fn clear_texts(&mut self) {
        self.clear(AnnotationKind::Text);
    }

    /// Start dragging `id`, replacing any drag already in progress.
    ///
    /// `container` is the strip's current on-screen rectangle, in the same space as `pointer`;
    /// it is re-measured by the caller on each drag start since layout may reflow. The
    /// pointer-to-centre offset is stored so the annotation keeps its grab point instead of
    /// snapping its centre to the pointer. If `id` does not name an annotation of `kind`, the
    /// previous drag is still cancelled and nothing becomes active.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn begin_drag(
        &mut self,
        id: AnnotationId,
        kind: AnnotationKind,
        pointer: Point,
        container: Rect,
    ) {
        self.drag = self
            .items
            .iter()
            .find(|a| a.id == id && a.kind() == kind)
            .map(|a| DragState {
                id,
                kind,
                offset: grab_offset(pointer, container, a.position),
            });
        if self.drag.is_none() {
            tracing::trace!("drag target missing");
        }
    }

    /// Move the dragged annotation to follow `pointer`, clamped to the drag bounds.
    ///
    /// No-op when no drag is active or the dragged annotation has been removed.
    pub fn update_drag(&mut self, pointer: Point, container: Rect) {
        let Some(drag) = self.drag else {
            return;
        };
        let bounds = (self.config.drag_x, self.config.drag_y);
        if let Some(a) = self
            .items
            .iter_mut()
            .find(|a| a.id == drag.id && a.kind() == drag.kind)
        {
            a.position = dragged_position(pointer, container, drag.offset, a.position, bounds);
        }
    }

    /// Finish the current drag. Safe to call with no drag active.
    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            tracing::debug!(id = %drag.id, "drag ended");
        }
    }

    /// The active drag, if any.
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Whether `id` is the annotation currently being dragged.
    pub fn is_dragging(&self, id: AnnotationId) -> bool {
        self.drag.is_some_and(|d| d.id == id)
    }

    /// Paint order: insertion order, with the dragged annotation (if any) moved to the top.
    pub fn render_order(&self) -> Vec<&Annotation> {
        let mut out: Vec<&Annotation> = self
            .items
            .iter()
            .filter(|a| !self.is_dragging(a.id))
            .collect();
        if let Some(dragged) = self.drag.and_then(|d| self.get(d.id)) {
            out.push(dragged);
        }
        out
    }

    fn of_kind(&self, kind: AnnotationKind) -> impl Iterator<Item = &Annotation> {
        self.items.iter().filter(move |a| a.kind() == kind)
    }

    fn place(&mut self, ranges: PlacementRanges, body: AnnotationBody) -> Annotation {
        let annotation = Annotation {
            id: self.alloc_id(),
            position: Point::new(
                ranges.x.sample(&mut self.rng),
                ranges.y.sample(&mut self.rng),
            ),
            size: ranges.size.sample(&mut self.rng),
            rotation_deg: ranges.rotation_deg.sample(&mut self.rng),
            body,
        };
        self.items.push(annotation.clone());
        annotation
    }

    fn alloc_id(&mut self) -> AnnotationId {
        let id = AnnotationId(self.next_id);
        self.next_id += 1;
        id
    }

    fn remove(&mut self, id: AnnotationId, kind: AnnotationKind) {
        let before = self.items.len();
        self.items.retain(|a| !(a.id == id && a.kind() == kind));
        if self.items.len() == before {
            tracing::trace!(%id, ?kind, "remove for missing annotation ignored");
            return;
        }
        if self.drag.is_some_and(|d| d.id == id) {
            self.drag = None;
        }
    }

    fn clear(&mut self, kind: AnnotationKind) {
        self.items.retain(|a| a.kind() != kind);
        if self.drag.is_some_and(|d| d.kind == kind) {
            self.drag = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/model.rs"]
mod tests;
