use super::*;

#[test]
fn mirror_reverses_each_row() {
    let mut buf = vec![
        1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, //
        4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6,
    ];
    mirror_horizontal(&mut buf, 3);
    assert_eq!(
        buf,
        vec![
            3, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, //
            6, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4,
        ]
    );
}

#[test]
fn mirror_twice_is_identity() {
    let mut frame = FrameRgba::new(4, 2, (0u8..32).collect()).unwrap();
    let before = frame.clone();
    mirror_frame(&mut frame);
    assert_ne!(frame, before);
    mirror_frame(&mut frame);
    assert_eq!(frame, before);
}

#[test]
fn zero_width_is_a_noop() {
    let mut buf = vec![9u8; 8];
    mirror_horizontal(&mut buf, 0);
    assert_eq!(buf, vec![9u8; 8]);
}
