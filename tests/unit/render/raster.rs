use super::*;
use crate::foundation::core::Point;

#[test]
fn background_then_fill() {
    let canvas = Canvas {
        width: 32,
        height: 32,
    };
    let mut raster = Raster::new(canvas, Rgb8::WHITE).unwrap();
    raster.fill(
        &polygon([
            Point::new(4.0, 4.0),
            Point::new(20.0, 4.0),
            Point::new(20.0, 20.0),
            Point::new(4.0, 20.0),
        ]),
        Rgb8::new(255, 0, 0),
    );
    let frame = raster.finish();
    assert_eq!((frame.width, frame.height), (32, 32));
    assert_eq!(frame.data.len(), 32 * 32 * 4);
    assert_eq!(frame.pixel(10, 10), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(28, 28), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(32, 0), None);
}

#[test]
fn stroke_marks_pixels_on_the_line() {
    let canvas = Canvas {
        width: 16,
        height: 16,
    };
    let mut raster = Raster::new(canvas, Rgb8::WHITE).unwrap();
    let mut line = BezPath::new();
    line.move_to(Point::new(0.0, 8.0));
    line.line_to(Point::new(16.0, 8.0));
    raster.stroke(&line, 4.0, Rgb8::BLACK);
    let frame = raster.finish();
    assert_eq!(frame.pixel(8, 7), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(8, 1), Some([255, 255, 255, 255]));
}

#[test]
fn empty_canvas_is_rejected() {
    let canvas = Canvas {
        width: 0,
        height: 8,
    };
    assert!(Raster::new(canvas, Rgb8::WHITE).is_err());
}

#[test]
fn polygon_of_nothing_is_empty() {
    assert!(polygon(std::iter::empty()).elements().is_empty());
}
