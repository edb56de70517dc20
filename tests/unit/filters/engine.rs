use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use super::*;

fn noise_image(w: u32, h: u32, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..w * h * 4).map(|_| rng.r#gen::<u8>()).collect()
}

#[test]
fn none_is_byte_identical() {
    let mut buf = noise_image(7, 5, 1);
    let before = buf.clone();
    apply_filter(&mut buf, 7, 5, FilterKind::None);
    assert_eq!(buf, before);
}

#[test]
fn no_filter_changes_alpha() {
    for kind in FilterKind::ALL {
        let mut buf = noise_image(12, 9, 2);
        let before = buf.clone();
        apply_filter_with(
            &mut buf,
            12,
            9,
            kind,
            &FilterSettings::default(),
            &mut StdRng::seed_from_u64(9),
        );
        for (a, b) in buf.chunks_exact(4).zip(before.chunks_exact(4)) {
            assert_eq!(a[3], b[3], "{kind} changed alpha");
        }
    }
}

#[test]
fn parallel_matches_serial_for_deterministic_filters() {
    for kind in [
        FilterKind::Vintage,
        FilterKind::BlackWhite,
        FilterKind::Blue,
        FilterKind::Peachy,
    ] {
        let mut serial = noise_image(33, 17, 4);
        let mut parallel = serial.clone();
        let mut rng = StdRng::seed_from_u64(0);
        apply_filter_with(&mut serial, 33, 17, kind, &FilterSettings::default(), &mut rng);
        apply_filter_with(
            &mut parallel,
            33,
            17,
            kind,
            &FilterSettings { parallel: true },
            &mut rng,
        );
        assert_eq!(serial, parallel, "{kind}");
    }
}

#[test]
fn short_buffer_does_not_panic() {
    for kind in FilterKind::ALL {
        let mut buf = vec![50u8; 10];
        apply_filter(&mut buf, 64, 64, kind);
        assert_eq!(buf.len(), 10);
    }
}

#[test]
fn frame_wrapper_applies_filter() {
    let mut frame = FrameRgba::new(1, 1, vec![100, 100, 100, 255]).unwrap();
    apply_filter_to_frame(
        &mut frame,
        FilterKind::Vintage,
        &FilterSettings::default(),
        &mut StdRng::seed_from_u64(0),
    );
    assert_eq!(frame.data, vec![130, 105, 90, 255]);
}
