//! Output encoders.
//!
//! Animations stream through a [`sink::FrameSink`]; still images are written in one call.

/// GIF animation sink.
pub mod gif;
/// PNG still-image output.
pub mod png;
/// Generic frame sink trait and built-in sinks.
pub mod sink;

use std::path::Path;

use crate::foundation::error::FieldResult;

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> FieldResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
