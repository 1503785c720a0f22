use super::*;

#[test]
fn transparent_and_opaque_sources() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
    assert_eq!(over(dst, [1, 2, 3, 255]), [1, 2, 3, 255]);
}

#[test]
fn half_alpha_blends() {
    let out = over([200, 200, 200, 255], [0, 0, 128, 128]);
    assert_eq!(out, [100, 100, 228, 255]);
}

#[test]
fn length_mismatch_is_an_error() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst, &[255u8; 8]).is_ok());
    assert_eq!(dst, vec![255u8; 8]);
}
