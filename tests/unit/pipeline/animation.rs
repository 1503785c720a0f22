use std::path::PathBuf;

use super::*;
use crate::color::colormap::Colormap;
use crate::data::iteration::discover_iteration_files;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::{Canvas, Rgb8};
use crate::render::annotate::Annotator;
use crate::render::camera::OrbitCamera;
use crate::render::surface::SurfaceStyle;

fn sequence() -> FrameSequence {
    let dir = PathBuf::from("target/unit_animation");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    for (n, bump) in [(0, 0.0), (5, 1.0), (10, 2.0)] {
        let rows: String = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]
            .iter()
            .enumerate()
            .map(|(i, (x, y))| format!("{x},{y},{}\n", i as f64 + bump))
            .collect();
        std::fs::write(dir.join(format!("solution_{n}.csv")), rows).unwrap();
    }
    FrameSequence::load(&discover_iteration_files(&dir).unwrap()).unwrap()
}

fn renderer() -> SurfaceRenderer {
    SurfaceRenderer::new(
        SurfaceStyle {
            canvas: Canvas {
                width: 40,
                height: 32,
            },
            colormap: Colormap::Jet,
            camera: OrbitCamera::default(),
            edge_width_px: 0.3,
            z_label: "u".to_string(),
            background: Rgb8::WHITE,
        },
        Annotator::without_fonts(),
    )
}

#[test]
fn one_frame_per_snapshot_in_order() {
    let seq = sequence();
    let mesh = Mesh::delaunay(seq.points().to_vec()).unwrap();
    let variant = crate::pipeline::config::RunConfig::builtin().variants[0].clone();
    let mut sink = InMemorySink::new();

    let n = assemble(&renderer(), &mesh, &seq, &variant, Fps::new(4, 1).unwrap(), &mut sink).unwrap();

    assert_eq!(n, 3);
    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.fps.num), (40, 32, 4));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2]);
}
