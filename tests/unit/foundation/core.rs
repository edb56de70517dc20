use super::*;

#[test]
fn frame_new_rejects_length_mismatch() {
    assert!(FrameRgba::new(2, 2, vec![0; 15]).is_err());
    assert!(FrameRgba::new(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn byte_len_overflow_is_an_error() {
    assert!(rgba_byte_len(u32::MAX, u32::MAX).is_err());
    assert_eq!(rgba_byte_len(3, 5).unwrap(), 60);
}

#[test]
fn filled_frame_repeats_colour() {
    let f = FrameRgba::filled(3, 2, Rgba8::new(1, 2, 3, 4)).unwrap();
    assert_eq!(f.data.len(), 24);
    assert_eq!(f.pixel(2, 1), Some([1, 2, 3, 4]));
    assert_eq!(f.pixel(3, 0), None);
}
