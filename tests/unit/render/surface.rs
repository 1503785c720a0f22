use super::*;
use crate::data::table::ConnectivityTable;
use crate::foundation::error::FieldError;

fn square_mesh() -> Mesh {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];
    let conn = ConnectivityTable {
        triangles: vec![[0, 1, 2], [0, 2, 3]],
    };
    Mesh::explicit(points, &conn).unwrap()
}

fn renderer() -> SurfaceRenderer {
    SurfaceRenderer::new(
        SurfaceStyle {
            canvas: Canvas {
                width: 96,
                height: 80,
            },
            colormap: Colormap::Jet,
            camera: OrbitCamera::default(),
            edge_width_px: 0.2,
            z_label: "u".to_string(),
            background: Rgb8::WHITE,
        },
        Annotator::without_fonts(),
    )
}

#[test]
fn frames_are_deterministic_and_sized() {
    let mesh = square_mesh();
    let values = [0.0, 1.0, 2.0, 3.0];
    let frame = SurfaceFrame {
        mesh: &mesh,
        values: &values,
        scale: ColorScale { min: 0.0, max: 3.0 },
        title: "[Baseline] Iteration: 0",
        index: FrameIndex(0),
    };
    let r = renderer();
    let a = r.render(&frame).unwrap();
    let b = r.render(&frame).unwrap();
    assert_eq!(a, b);
    assert_eq!((a.width, a.height), (96, 80));
    assert_eq!(a.data.len(), 96 * 80 * 4);
    assert_eq!(a.pixel(0, 0), Some([255, 255, 255, 255]));
}

#[test]
fn camera_moves_between_frames() {
    let mesh = square_mesh();
    let values = [0.0, 1.0, 2.0, 3.0];
    let mut frame = SurfaceFrame {
        mesh: &mesh,
        values: &values,
        scale: ColorScale { min: 0.0, max: 3.0 },
        title: "",
        index: FrameIndex(0),
    };
    let r = renderer();
    let first = r.render(&frame).unwrap();
    frame.index = FrameIndex(20);
    let later = r.render(&frame).unwrap();
    assert_ne!(first, later);
}

#[test]
fn mismatched_values_are_rejected() {
    let mesh = square_mesh();
    let values = [0.0, 1.0];
    let frame = SurfaceFrame {
        mesh: &mesh,
        values: &values,
        scale: ColorScale { min: 0.0, max: 1.0 },
        title: "",
        index: FrameIndex(0),
    };
    let err = renderer().render(&frame).unwrap_err();
    assert!(matches!(err, FieldError::DataFormat(_)));
}

#[test]
fn flat_scale_still_renders() {
    let mesh = square_mesh();
    let values = [5.0; 4];
    let frame = SurfaceFrame {
        mesh: &mesh,
        values: &values,
        scale: ColorScale { min: 5.0, max: 5.0 },
        title: "",
        index: FrameIndex(3),
    };
    assert!(renderer().render(&frame).is_ok());
}
