use std::path::Path;

use crate::encode::ensure_parent_dir;
use crate::foundation::error::{FieldError, FieldResult};
use crate::render::frame::FrameRGBA;

/// Write `frame` as a PNG at `path`, creating parent directories as needed.
#[tracing::instrument(skip(frame), fields(width = frame.width, height = frame.height))]
pub fn write_png(path: &Path, frame: &FrameRGBA) -> FieldResult<()> {
    ensure_parent_dir(path)?;
    let image = frame.to_rgba_image()?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| FieldError::encode(format!("failed to write '{}': {e}", path.display())))
}
