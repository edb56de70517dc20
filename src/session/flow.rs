//! Capture-flow state machine for one photobooth visit.
//!
//! ```text
//! Capturing --(3rd photo)--> AskMore --continue--> BonusCapture --(4th photo)--+
//!                               |                                              |
//!                               +--proceed--> SelectTemplate <-----------------+
//!                                                  |
//!                                           select_template
//!                                                  v
//!                                             FinalOutput
//! ```
//!
//! `reset` returns to `Capturing` from anywhere.

use rand::{Rng, rngs::StdRng};

use crate::{
    filters::{
        engine::{FilterSettings, apply_filter_to_frame},
        kind::FilterKind,
    },
    foundation::core::FrameRgba,
    foundation::error::{PhotoboothError, PhotoboothResult},
    frame::ops::mirror_frame,
    overlay::{config::OverlayConfig, model::OverlayModel},
    strip::{
        compose::{StripLayout, compose_strip},
        template::{StripTemplate, template_by_id},
    },
};

/// Where the visit currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    /// Taking the base photos.
    Capturing,
    /// Base photos done; asking whether to take a bonus photo.
    AskMore,
    /// Taking the optional bonus photo.
    BonusCapture,
    /// Choosing a strip template.
    SelectTemplate,
    /// Editing and exporting the final strip.
    FinalOutput,
}

/// Session tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionOpts {
    /// Flip captures left-to-right so they match the mirrored preview.
    pub mirror_selfie: bool,
    /// Photos taken before the "more?" prompt.
    pub base_photos: usize,
    /// Hard cap including the bonus photo.
    pub max_photos: usize,
    /// Filter execution settings for captures.
    pub filter: FilterSettings,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            mirror_selfie: true,
            base_photos: 3,
            max_photos: 4,
            filter: FilterSettings::default(),
        }
    }
}

/// The strip being edited once a template is chosen.
#[derive(Debug)]
pub struct StripDraft<R: Rng = StdRng> {
    /// Chosen template.
    pub template: &'static StripTemplate,
    /// Stickers and text placed on the strip.
    pub overlays: OverlayModel<R>,
}

/// One visit: captured photos, the flow state, and the strip draft once it exists.
#[derive(Debug)]
pub struct PhotoSession<R: Rng + Clone = StdRng> {
    state: FlowState,
    photos: Vec<FrameRgba>,
    draft: Option<StripDraft<R>>,
    opts: SessionOpts,
    overlay_config: OverlayConfig,
    rng: R,
}

impl PhotoSession<StdRng> {
    /// New session with default options, seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(SessionOpts::default(), rand::SeedableRng::from_entropy())
    }
}

impl Default for PhotoSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Clone> PhotoSession<R> {
    /// New session with explicit options and random source (grain noise and overlay placement).
    pub fn with_rng(opts: SessionOpts, rng: R) -> Self {
        Self {
            state: FlowState::Capturing,
            photos: Vec::new(),
            draft: None,
            opts,
            overlay_config: OverlayConfig::default(),
            rng,
        }
    }

    /// Use `config` for overlay models created by later [`PhotoSession::select_template`] calls.
    /// An invalid config is replaced by the default when the model is created.
    pub fn set_overlay_config(&mut self, config: OverlayConfig) {
        self.overlay_config = config;
    }

    /// Current flow state.
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Captured (mirrored and filtered) photos, oldest first.
    pub fn photos(&self) -> &[FrameRgba] {
        &self.photos
    }

    /// The strip draft, present in [`FlowState::FinalOutput`].
    pub fn draft(&self) -> Option<&StripDraft<R>> {
        self.draft.as_ref()
    }

    /// Mutable access to the strip's overlays, present in [`FlowState::FinalOutput`].
    pub fn overlays_mut(&mut self) -> Option<&mut OverlayModel<R>> {
        self.draft.as_mut().map(|d| &mut d.overlays)
    }

    /// Whether the capture button should be enabled.
    pub fn can_capture(&self) -> bool {
        match self.state {
            FlowState::Capturing => self.photos.len() < self.opts.base_photos,
            FlowState::BonusCapture => self.photos.len() < self.opts.max_photos,
            _ => false,
        }
    }

    /// Store a captured frame after mirroring and filtering it. Returns the photo's index.
    #[tracing::instrument(skip(self, frame), fields(state = ?self.state))]
    pub fn capture(&mut self, mut frame: FrameRgba, filter: FilterKind) -> PhotoboothResult<usize> {
        if !self.can_capture() {
            return Err(PhotoboothError::flow(format!(
                "cannot capture in state {:?} with {} photos",
                self.state,
                self.photos.len()
            )));
        }

        if self.opts.mirror_selfie {
            mirror_frame(&mut frame);
        }
        apply_filter_to_frame(&mut frame, filter, &self.opts.filter, &mut self.rng);
        self.photos.push(frame);

        match self.state {
            FlowState::BonusCapture => self.state = FlowState::SelectTemplate,
            FlowState::Capturing if self.photos.len() >= self.opts.base_photos => {
                self.state = FlowState::AskMore;
            }
            _ => {}
        }
        tracing::debug!(photos = self.photos.len(), next = ?self.state, "photo captured");
        Ok(self.photos.len() - 1)
    }

    /// Answer "yes" to the bonus-photo prompt.
    pub fn continue_capturing(&mut self) -> PhotoboothResult<()> {
        self.transition(FlowState::AskMore, FlowState::BonusCapture)
    }

    /// Answer "no" to the bonus-photo prompt.
    pub fn proceed(&mut self) -> PhotoboothResult<()> {
        self.transition(FlowState::AskMore, FlowState::SelectTemplate)
    }

    /// Pick the strip template and open the strip for editing.
    #[tracing::instrument(skip(self))]
    pub fn select_template(&mut self, template_id: &str) -> PhotoboothResult<()> {
        let template = template_by_id(template_id).ok_or_else(|| {
            PhotoboothError::validation(format!("unknown strip template '{template_id}'"))
        })?;
        self.transition(FlowState::SelectTemplate, FlowState::FinalOutput)?;
        self.draft = Some(StripDraft {
            template,
            overlays: OverlayModel::with_config_and_rng(self.overlay_config, self.rng.clone()),
        });
        Ok(())
    }

    /// Render the strip's photos onto the chosen template.
    pub fn compose(&self, layout: &StripLayout) -> PhotoboothResult<FrameRgba> {
        let draft = self
            .draft
            .as_ref()
            .ok_or_else(|| PhotoboothError::flow("no strip template selected yet"))?;
        compose_strip(&self.photos, draft.template, layout)
    }

    /// Discard everything and start over.
    pub fn reset(&mut self) {
        tracing::debug!(from = ?self.state, "session reset");
        self.photos.clear();
        self.draft = None;
        self.state = FlowState::Capturing;
    }

    fn transition(&mut self, from: FlowState, to: FlowState) -> PhotoboothResult<()> {
        if self.state != from {
            return Err(PhotoboothError::flow(format!(
                "expected state {from:?} to move to {to:?}, but session is in {:?}",
                self.state
            )));
        }
        self.state = to;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/flow.rs"]
mod tests;
