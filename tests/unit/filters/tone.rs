use super::*;

#[test]
fn vintage_warms_mid_gray() {
    let mut px = [100u8, 100, 100, 255];
    vintage(&mut px);
    assert_eq!(px, [130, 105, 90, 255]);
}

#[test]
fn vintage_saturates_bright_red() {
    let mut px = [250u8, 0, 0, 7];
    vintage(&mut px);
    assert_eq!(px, [255, 10, 0, 7]);
}

#[test]
fn black_white_pure_red_is_76() {
    let mut px = [255u8, 0, 0, 255];
    black_white(&mut px);
    assert_eq!(px, [76, 76, 76, 255]);
}

#[test]
fn peachy_white_stays_white() {
    let mut px = [255u8, 255, 255, 255];
    peachy(&mut px);
    assert_eq!(px, [255, 255, 255, 255]);
}

#[test]
fn peachy_black_stays_black() {
    let mut px = [0u8, 0, 0, 40];
    peachy(&mut px);
    assert_eq!(px, [0, 0, 0, 40]);
}

#[test]
fn peachy_skips_saturation_for_vivid_pixels() {
    // saturation = 200/200 = 1.0: contrast only.
    let mut px = [200u8, 0, 0, 255];
    peachy(&mut px);
    // (200-128)*1.3+128 = 221.6 -> 222; (0-128)*1.3+128 < 0 -> 0
    assert_eq!(px, [222, 0, 0, 255]);
}

#[test]
fn peachy_boosts_dull_pixels_before_contrast() {
    // max 140, min 100 -> saturation 0.2857 < 0.5
    let mut px = [140u8, 120, 100, 255];
    peachy(&mut px);
    // gray 120; boosted 150,120,90; contrast: 156.6->157, 117.6->118, 78.6->79
    assert_eq!(px, [157, 118, 79, 255]);
}

#[test]
fn vintage_rounds_like_double_precision() {
    // 95 * 1.1 + 20 is 124.50000000000001 in f64, so it rounds up
    let mut px = [95u8, 175, 100, 255];
    vintage(&mut px);
    assert_eq!(px, [125, 176, 90, 255]);
}
