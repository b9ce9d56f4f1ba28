use super::*;

#[test]
fn over_coverage_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 255), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    assert_eq!(over(dst, WHITE, 255), WHITE);
    assert_eq!(over(WHITE, BLACK, 255), BLACK);
}

#[test]
fn over_dst_transparent_returns_scaled_src() {
    let src = [100, 110, 120, 200];
    assert_eq!(over(TRANSPARENT, src, 255), src);
}

#[test]
fn over_half_coverage_mixes() {
    let out = over(WHITE, BLACK, 128);
    assert_eq!(out[3], 255);
    assert!(out[0] > 100 && out[0] < 140);
}

#[test]
fn premultiply_then_unpremultiply_is_close() {
    let straight = [100u8, 50, 200, 128];
    let back = unpremultiply(premultiply(straight));
    for i in 0..3 {
        assert!((i32::from(back[i]) - i32::from(straight[i])).abs() <= 2);
    }
    assert_eq!(back[3], 128);
    assert_eq!(premultiply([9, 9, 9, 0]), TRANSPARENT);
}
