use crate::color::scale::ColorScale;
use crate::data::iteration::IterationFile;
use crate::data::table::read_vertex_table;
use crate::foundation::core::Point;
use crate::foundation::error::{FieldError, FieldResult};

/// One snapshot's values with its solver iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameValues {
    pub iteration: u64,
    pub values: Vec<f64>,
}

impl AsRef<[f64]> for FrameValues {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Every snapshot of a variant, loaded eagerly and ordered by iteration.
///
/// Vertex positions come from the first file; later files only contribute values.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSequence {
    points: Vec<Point>,
    frames: Vec<FrameValues>,
}

impl FrameSequence {
    /// Read all `files` (already in iteration order).
    ///
    /// Fails with `DataFormat` when a file is malformed or its row count differs from the first.
    #[tracing::instrument(skip(files), fields(files = files.len()))]
    pub fn load(files: &[IterationFile]) -> FieldResult<Self> {
        let Some(first) = files.first() else {
            return Err(FieldError::missing_resource("no solution files to load"));
        };

        let head = read_vertex_table(&first.path)?;
        let vertex_count = head.len();
        let points = head.points;
        let mut frames = Vec::with_capacity(files.len());
        frames.push(FrameValues {
            iteration: first.iteration,
            values: head.values,
        });

        for file in &files[1..] {
            let table = read_vertex_table(&file.path)?;
            if table.len() != vertex_count {
                return Err(FieldError::data_format(format!(
                    "'{}' has {} vertices, expected {vertex_count}",
                    file.path.display(),
                    table.len()
                )));
            }
            frames.push(FrameValues {
                iteration: file.iteration,
                values: table.values,
            });
        }

        tracing::debug!(frames = frames.len(), vertex_count, "loaded frame sequence");
        Ok(Self { points, frames })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn frames(&self) -> &[FrameValues] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iterations(&self) -> Vec<u64> {
        self.frames.iter().map(|f| f.iteration).collect()
    }

    /// Global value range over every frame.
    pub fn color_scale(&self) -> FieldResult<ColorScale> {
        ColorScale::across_frames(&self.frames)
            .ok_or_else(|| FieldError::data_format("frame sequence has no finite values"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/sequence.rs"]
mod tests;
