//! Photobooth core: pixel filters for captured frames, photo strip composition, and the
//! sticker/text overlay model used to decorate the finished strip.
//!
//! # Overview
//!
//! 1. **Capture**: a raw RGBA8 frame comes from the camera (outside this crate).
//! 2. **Filter**: [`apply_filter`] transforms the frame in place with one of the fixed
//!    [`FilterKind`] recipes.
//! 3. **Collect**: a [`PhotoSession`] stores up to four photos and walks the capture flow.
//! 4. **Compose**: [`compose_strip`] lays the photos out on a [`StripTemplate`].
//! 5. **Decorate**: an [`OverlayModel`] holds stickers and text in percentage coordinates,
//!    with clamped dragging. Rasterising overlays is left to the caller's renderer.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total core**: filters and overlay operations never fail; stale ids are no-ops and
//!   unknown filter names fall back to the identity.
//! - **Straight-alpha RGBA8** buffers, row-major, 4 bytes per pixel. Filters never touch alpha.
//! - **Injectable randomness**: grain noise and overlay placement take any [`rand::Rng`], so
//!   tests can seed them.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod filters;
mod foundation;
mod frame;
mod overlay;
mod session;
mod strip;

pub use filters::engine::{FilterSettings, apply_filter, apply_filter_to_frame, apply_filter_with};
pub use filters::kind::FilterKind;
pub use foundation::core::{FrameRgba, Point, Rect, Rgba8, Size, Vec2, rgba_byte_len};
pub use foundation::error::{PhotoboothError, PhotoboothResult};
pub use frame::ops::{mirror_frame, mirror_horizontal};
pub use overlay::annotation::{Annotation, AnnotationBody, AnnotationId, AnnotationKind, TextPatch};
pub use overlay::config::{OverlayConfig, PlacementRanges, ValueRange};
pub use overlay::drag::DragState;
pub use overlay::model::OverlayModel;
pub use session::flow::{FlowState, PhotoSession, SessionOpts, StripDraft};
pub use strip::compose::{MAX_STRIP_PHOTOS, StripLayout, StripPlan, compose_strip, plan_strip};
pub use strip::template::{StripTemplate, TEMPLATES, template_by_id, template_or_default};
