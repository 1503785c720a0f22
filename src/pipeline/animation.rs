use crate::data::sequence::FrameSequence;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::FieldResult;
use crate::mesh::Mesh;
use crate::pipeline::config::VariantConfig;
use crate::render::surface::{SurfaceFrame, SurfaceRenderer};

/// Render every frame of `sequence` and stream it into `sink`.
///
/// The color scale is computed over the whole sequence before the first frame is drawn.
/// Returns the number of frames written, which always equals `sequence.len()`.
#[tracing::instrument(skip_all, fields(variant = %variant.name, frames = sequence.len()))]
pub fn assemble(
    renderer: &SurfaceRenderer,
    mesh: &Mesh,
    sequence: &FrameSequence,
    variant: &VariantConfig,
    fps: Fps,
    sink: &mut dyn FrameSink,
) -> FieldResult<usize> {
    let scale = sequence.color_scale()?;
    let canvas = renderer.style().canvas;
    sink.begin(SinkConfig {
        width: canvas.width,
        height: canvas.height,
        fps,
    })?;

    for (i, frame) in sequence.frames().iter().enumerate() {
        let title = variant.frame_title(frame.iteration);
        let index = FrameIndex(i as u64);
        let rendered = renderer.render(&SurfaceFrame {
            mesh,
            values: &frame.values,
            scale,
            title: &title,
            index,
        })?;
        sink.push_frame(index, &rendered)?;
        tracing::debug!(frame = i, iteration = frame.iteration, "frame rendered");
    }

    sink.end()?;
    Ok(sequence.len())
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/animation.rs"]
mod tests;
