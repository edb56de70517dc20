use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

#[test]
fn defaults_are_valid_and_match_strip_bounds() {
    let cfg = OverlayConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.drag_x, ValueRange::new(5.0, 95.0));
    assert_eq!(cfg.drag_y, ValueRange::new(2.0, 98.0));
    assert_eq!(cfg.sticker.size, ValueRange::new(28.0, 40.0));
    assert_eq!(cfg.text.rotation_deg, ValueRange::new(-5.0, 5.0));
}

#[test]
fn samples_stay_in_half_open_range() {
    let r = ValueRange::new(20.0, 80.0);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let v = r.sample(&mut rng);
        assert!((20.0..80.0).contains(&v));
    }
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = OverlayConfig::from_json_str(r#"{ "drag_x": { "min": 0.0, "max": 100.0 } }"#)
        .unwrap();
    assert_eq!(cfg.drag_x, ValueRange::new(0.0, 100.0));
    assert_eq!(cfg.drag_y, OverlayConfig::default().drag_y);
}

#[test]
fn inverted_range_is_rejected() {
    let err = OverlayConfig::from_json_str(r#"{ "drag_y": { "min": 90.0, "max": 10.0 } }"#)
        .unwrap_err();
    assert!(err.to_string().contains("drag_y"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = OverlayConfig::from_json_str("{ drag_x").unwrap_err();
    assert!(matches!(err, PhotoboothError::Serde(_)));
}

#[test]
fn clamp_tolerates_inverted_and_nan_bounds() {
    assert_eq!(ValueRange::new(95.0, 5.0).clamp(200.0), 95.0);
    assert_eq!(ValueRange::new(95.0, 5.0).clamp(-1.0), 5.0);
    assert_eq!(ValueRange::new(f64::NAN, 10.0).clamp(50.0), 10.0);
    assert_eq!(ValueRange::new(2.0, 98.0).clamp(f64::NAN), 2.0);
}
