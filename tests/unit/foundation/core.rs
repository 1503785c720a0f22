use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(4, 0).is_err());
    let fps = Fps::new(4, 1).unwrap();
    assert_eq!(fps.as_f64(), 4.0);
    assert_eq!(fps.frame_delay_ms(), (1000, 4));
}

#[test]
fn canvas_from_inches_uses_dpi() {
    let c = Canvas::from_inches(8.0, 7.0, 300).unwrap();
    assert_eq!((c.width, c.height), (2400, 2100));
    assert_eq!(c.byte_len(), 2400 * 2100 * 4);

    assert!(Canvas::from_inches(0.0, 7.0, 300).is_err());
    assert!(Canvas::from_inches(400.0, 7.0, 300).is_err());
}

#[test]
fn rgb_helpers() {
    assert_eq!(Rgb8::from_unit(1.5, 0.5, -1.0), Rgb8::new(255, 128, 0));
    assert_eq!(Rgb8::new(200, 100, 50).scaled(0.5), Rgb8::new(100, 50, 25));
    assert_eq!(Rgb8::new(255, 0, 16).to_hex(), "#ff0010");
}
