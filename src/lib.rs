//! Trifield renders scalar fields defined on triangular meshes.
//!
//! A solver writes one `solution_<n>.csv` snapshot per iteration (`x, y, value` per vertex) plus a
//! `solution_final.csv`. For every configured variant trifield produces:
//!
//! 1. a looping GIF of the shaded 3D surface, one frame per snapshot, with a slowly orbiting
//!    camera and a color scale shared by all frames;
//! 2. a filled-contour PNG of the final state with black isolines and a colorbar.
//!
//! # Pipeline overview
//!
//! 1. **Read**: headerless numeric tables ([`read_table`]), ordered by iteration
//!    ([`iteration_index`])
//! 2. **Mesh**: Delaunay triangulation or explicit connectivity ([`Mesh`])
//! 3. **Normalize**: one [`ColorScale`] per artifact, contour levels and colorbar exponent
//! 4. **Render**: [`SurfaceRenderer`] / [`ContourRenderer`] produce premultiplied [`FrameRGBA`]s
//! 5. **Encode**: frames stream into a [`FrameSink`] ([`GifSink`]); stills go through [`write_png`]
//!
//! [`Orchestrator`] runs all of this per [`VariantConfig`] and never aborts on a single
//! variant's failure.
#![forbid(unsafe_code)]

mod color;
mod data;
mod encode;
mod foundation;
mod mesh;
mod pipeline;
mod render;

pub use color::colormap::Colormap;
pub use color::scale::{
    ColorScale, DEFAULT_LEVEL_COUNT, DEGENERATE_EPS, OffsetLabel, RELATIVE_EPS,
};
pub use data::iteration::{
    IterationFile, discover_iteration_files, iteration_index, order_by_iteration,
};
pub use data::sequence::{FrameSequence, FrameValues};
pub use data::table::{
    ConnectivityTable, NumericTable, REQUIRED_COLUMNS, VertexTable, read_connectivity,
    read_table, read_vertex_table,
};
pub use encode::ensure_parent_dir;
pub use encode::gif::{GifSink, GifSinkOpts};
pub use encode::png::write_png;
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{Affine, BezPath, Canvas, Fps, FrameIndex, Point, Rect, Rgb8};
pub use foundation::error::{FieldError, FieldResult};
pub use foundation::math::{linspace, nice_ticks, unpremultiply_rgba8};
pub use mesh::delaunay::triangulate;
pub use mesh::{Mesh, Triangulation};
pub use pipeline::animation::assemble as assemble_animation;
pub use pipeline::config::{AnimationSettings, ContourSettings, RunConfig, VariantConfig};
pub use pipeline::contour::plot_final_state;
pub use pipeline::orchestrator::{Orchestrator, Outcome, RunOptions, RunReport, VariantReport};
pub use render::annotate::{Anchor, Annotator, Label, svg_document, tick_text};
pub use render::camera::{OrbitCamera, Vec3, View};
pub use render::composite::{PremulRgba8, over, over_in_place};
pub use render::contour::{FieldPoint, clip_band, iso_segment};
pub use render::frame::FrameRGBA;
pub use render::plot2d::{ContourPlot, ContourRenderer, ContourStyle};
pub use render::raster::{Raster, polygon};
pub use render::surface::{SurfaceFrame, SurfaceRenderer, SurfaceStyle};
