use super::*;

#[test]
fn document_escapes_and_positions_text() {
    let labels = vec![
        Label::new("a < b & c", Point::new(10.0, 20.0), 10.0).anchored(Anchor::Start),
        Label::new("u value", Point::new(50.0, 40.0), 12.0).rotated(90.0),
        Label::new("×10", Point::new(5.0, 5.0), 10.0).with_superscript("-3"),
    ];
    let svg = svg_document(64, 48, &labels);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="64" height="48""#));
    assert!(svg.contains("a &lt; b &amp; c"));
    assert!(svg.contains(r#"text-anchor="start""#));
    assert!(svg.contains(r#"y="23.50""#));
    assert!(svg.contains("rotate(90.00 50.00 40.00)"));
    assert!(svg.contains(r#"baseline-shift="super""#));
    assert!(svg.contains(">-3</tspan>"));
}

#[test]
fn document_parses_with_usvg() {
    let labels = vec![Label::new("Iteration: 5", Point::new(32.0, 10.0), 9.0)];
    let svg = svg_document(64, 32, &labels);
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width(), 64.0);
}

#[test]
fn fontless_annotator_leaves_frame_untouched() {
    let mut frame = FrameRGBA {
        width: 4,
        height: 4,
        data: vec![255; 64],
        premultiplied: true,
    };
    let before = frame.clone();
    Annotator::without_fonts()
        .draw(&mut frame, &[Label::new("x", Point::new(2.0, 2.0), 3.0)])
        .unwrap();
    assert_eq!(frame, before);
}

#[test]
fn tick_text_is_compact() {
    assert_eq!(tick_text(0.0), "0");
    assert_eq!(tick_text(0.5), "0.5");
    assert_eq!(tick_text(2.0), "2");
    assert_eq!(tick_text(-1.25), "-1.25");
    assert_eq!(tick_text(25000.0), "2.5e4");
}
