use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::foundation::core::Rgba8;

fn session() -> PhotoSession<StdRng> {
    PhotoSession::with_rng(SessionOpts::default(), StdRng::seed_from_u64(77))
}

fn frame() -> FrameRgba {
    FrameRgba::filled(8, 6, Rgba8::opaque(100, 100, 100)).unwrap()
}

#[test]
fn three_captures_reach_ask_more() {
    let mut s = session();
    for i in 0..3 {
        assert!(s.can_capture());
        assert_eq!(s.capture(frame(), FilterKind::None).unwrap(), i);
    }
    assert_eq!(s.state(), FlowState::AskMore);
    assert!(!s.can_capture());
    assert!(s.capture(frame(), FilterKind::None).is_err());
}

#[test]
fn bonus_capture_goes_to_template_selection() {
    let mut s = session();
    for _ in 0..3 {
        s.capture(frame(), FilterKind::None).unwrap();
    }
    s.continue_capturing().unwrap();
    assert_eq!(s.state(), FlowState::BonusCapture);
    assert!(s.can_capture());
    s.capture(frame(), FilterKind::Vintage).unwrap();
    assert_eq!(s.state(), FlowState::SelectTemplate);
    assert_eq!(s.photos().len(), 4);
    assert_eq!(s.photos()[3].pixel(0, 0), Some([130, 105, 90, 255]));
}

#[test]
fn proceed_skips_bonus() {
    let mut s = session();
    for _ in 0..3 {
        s.capture(frame(), FilterKind::None).unwrap();
    }
    s.proceed().unwrap();
    assert_eq!(s.state(), FlowState::SelectTemplate);
    assert!(s.continue_capturing().is_err());
}

#[test]
fn template_selection_opens_draft() {
    let mut s = session();
    assert!(s.overlays_mut().is_none());
    for _ in 0..3 {
        s.capture(frame(), FilterKind::None).unwrap();
    }
    s.proceed().unwrap();
    assert!(s.select_template("disco").is_err());
    assert_eq!(s.state(), FlowState::SelectTemplate);
    s.select_template("golden").unwrap();
    assert_eq!(s.state(), FlowState::FinalOutput);
    assert_eq!(s.draft().unwrap().template.id, "golden");

    let overlays = s.overlays_mut().unwrap();
    overlays.add_sticker("🌻");
    assert_eq!(s.draft().unwrap().overlays.len(), 1);

    let strip = s.compose(&StripLayout::default()).unwrap();
    assert_eq!(strip.width, 256);
}

#[test]
fn transitions_out_of_order_are_flow_errors() {
    let mut s = session();
    assert!(matches!(s.proceed(), Err(PhotoboothError::Flow(_))));
    assert!(matches!(
        s.select_template("classic"),
        Err(PhotoboothError::Flow(_))
    ));
    assert!(s.compose(&StripLayout::default()).is_err());
}

#[test]
fn capture_mirrors_selfies() {
    let mut s = session();
    let mut f = FrameRgba::filled(2, 1, Rgba8::opaque(0, 0, 0)).unwrap();
    f.data[0] = 200;
    s.capture(f, FilterKind::None).unwrap();
    assert_eq!(s.photos()[0].pixel(1, 0), Some([200, 0, 0, 255]));

    let mut plain = PhotoSession::with_rng(
        SessionOpts {
            mirror_selfie: false,
            ..SessionOpts::default()
        },
        StdRng::seed_from_u64(1),
    );
    let mut f = FrameRgba::filled(2, 1, Rgba8::opaque(0, 0, 0)).unwrap();
    f.data[0] = 200;
    plain.capture(f, FilterKind::None).unwrap();
    assert_eq!(plain.photos()[0].pixel(0, 0), Some([200, 0, 0, 255]));
}

#[test]
fn reset_returns_to_capturing() {
    let mut s = session();
    for _ in 0..3 {
        s.capture(frame(), FilterKind::None).unwrap();
    }
    s.proceed().unwrap();
    s.select_template("peach").unwrap();
    s.reset();
    assert_eq!(s.state(), FlowState::Capturing);
    assert!(s.photos().is_empty());
    assert!(s.draft().is_none());
    assert!(s.can_capture());
}

#[test]
fn invalid_overlay_config_does_not_reach_the_draft() {
    let mut s = session();
    s.set_overlay_config(OverlayConfig {
        drag_y: crate::ValueRange::new(f64::NAN, 98.0),
        ..OverlayConfig::default()
    });
    for _ in 0..3 {
        s.capture(frame(), FilterKind::None).unwrap();
    }
    s.proceed().unwrap();
    s.select_template("classic").unwrap();
    assert_eq!(*s.draft().unwrap().overlays.config(), OverlayConfig::default());
}
