use crate::{
    foundation::core::{Point, Rect, Vec2},
    overlay::{
        annotation::{AnnotationId, AnnotationKind},
        config::ValueRange,
    },
};

/// The single in-flight drag, if any.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DragState {
    /// Annotation being moved.
    pub id: AnnotationId,
    /// Family of the annotation being moved.
    pub kind: AnnotationKind,
    /// Pointer minus the annotation centre, in container pixels, captured at drag start.
    pub offset: Vec2,
}

/// Annotation centre in pointer space for a percentage position inside `container`.
pub(crate) fn percent_to_pointer(position: Point, container: Rect) -> Point {
    Point::new(
        container.x0 + position.x / 100.0 * container.width(),
        container.y0 + position.y / 100.0 * container.height(),
    )
}

/// Offset between the grab point and the annotation centre.
pub(crate) fn grab_offset(pointer: Point, container: Rect, position: Point) -> Vec2 {
    pointer - percent_to_pointer(position, container)
}

/// New percentage position for a pointer sample, clamped into the drag bounds.
///
/// An axis that cannot be resolved (zero-sized container, non-finite pointer) keeps `current`.
pub(crate) fn dragged_position(
    pointer: Point,
    container: Rect,
    offset: Vec2,
    current: Point,
    bounds: (ValueRange, ValueRange),
) -> Point {
    let axis = |p: f64, origin: f64, off: f64, extent: f64, keep: f64, range: ValueRange| {
        let pct = (p - origin - off) / extent * 100.0;
        if pct.is_finite() {
            range.clamp(pct)
        } else {
            keep
        }
    };
    Point::new(
        axis(
            pointer.x,
            container.x0,
            offset.x,
            container.width(),
            current.x,
            bounds.0,
        ),
        axis(
            pointer.y,
            container.y0,
            offset.y,
            container.height(),
            current.y,
            bounds.1,
        ),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/drag.rs"]
mod tests;
