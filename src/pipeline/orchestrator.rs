//! Runs the pipeline once per configured variant and reports what happened to each artifact.

use std::fmt;
use std::path::PathBuf;

use crate::data::iteration::discover_iteration_files;
use crate::data::sequence::FrameSequence;
use crate::data::table::{ConnectivityTable, read_connectivity};
use crate::encode::gif::{GifSink, GifSinkOpts};
use crate::foundation::error::{FieldError, FieldResult};
use crate::mesh::Mesh;
use crate::pipeline::animation::assemble;
use crate::pipeline::config::{RunConfig, VariantConfig};
use crate::pipeline::contour::plot_final_state;
use crate::render::annotate::Annotator;
use crate::render::plot2d::ContourRenderer;
use crate::render::surface::SurfaceRenderer;

/// Which artifacts a run produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub skip_animation: bool,
    pub skip_contour: bool,
}

/// Result of one artifact of one variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Written { path: PathBuf, frames: usize },
    Skipped { reason: String },
    Failed { error: String },
}

impl Outcome {
    fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    /// Missing inputs skip the artifact; anything else is a failure.
    fn from_error(err: &FieldError) -> Self {
        if err.skips_artifact() {
            Self::skipped(err.to_string())
        } else {
            Self::Failed {
                error: err.to_string(),
            }
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written { path, frames } => {
                write!(f, "wrote {} ({frames} frame(s))", path.display())
            }
            Self::Skipped { reason } => write!(f, "skipped: {reason}"),
            Self::Failed { error } => write!(f, "failed: {error}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantReport {
    pub name: String,
    pub animation: Outcome,
    pub contour: Outcome,
}

/// Per-variant outcomes, in configuration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub variants: Vec<VariantReport>,
}

impl RunReport {
    pub fn written(&self) -> usize {
        self.variants
            .iter()
            .flat_map(|v| [&v.animation, &v.contour])
            .filter(|o| o.is_written())
            .count()
    }

    pub fn variant(&self, name: &str) -> Option<&VariantReport> {
        self.variants.iter().find(|v| v.name == name)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.variants {
            writeln!(f, "{}:", v.name)?;
            writeln!(f, "  animation: {}", v.animation)?;
            writeln!(f, "  contour:   {}", v.contour)?;
        }
        write!(f, "{} artifact(s) written", self.written())
    }
}

/// Drives every variant of a [`RunConfig`] through the pipeline.
///
/// A variant's failure never stops the others.
pub struct Orchestrator {
    config: RunConfig,
    annotator: Annotator,
    options: RunOptions,
}

impl Orchestrator {
    pub fn new(config: RunConfig, annotator: Annotator, options: RunOptions) -> Self {
        Self {
            config,
            annotator,
            options,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn run(&self) -> RunReport {
        let variants = self
            .config
            .variants
            .iter()
            .map(|v| self.run_variant(v))
            .collect();
        let report = RunReport { variants };
        tracing::info!(written = report.written(), "run finished");
        report
    }

    #[tracing::instrument(skip_all, fields(variant = %variant.name))]
    fn run_variant(&self, variant: &VariantConfig) -> VariantReport {
        tracing::info!(dir = %variant.input_dir.display(), "processing variant");
        let whole = |outcome: Outcome| VariantReport {
            name: variant.name.clone(),
            animation: outcome.clone(),
            contour: outcome,
        };

        if !variant.input_dir.is_dir() {
            let reason = format!("directory '{}' not found", variant.input_dir.display());
            tracing::warn!(%reason, "skipping variant");
            return whole(Outcome::skipped(reason));
        }

        let connectivity = match variant.connectivity_path() {
            None => None,
            Some(path) if !path.is_file() => {
                let reason = format!("connectivity file '{}' not found", path.display());
                tracing::warn!(%reason, "skipping variant");
                return whole(Outcome::skipped(reason));
            }
            Some(path) => match read_connectivity(&path) {
                Ok(table) => Some(table),
                Err(e) => {
                    tracing::warn!(error = %e, "unreadable connectivity, skipping variant");
                    return whole(Outcome::from_error(&e));
                }
            },
        };

        let animation = if self.options.skip_animation {
            Outcome::skipped("animation disabled")
        } else {
            self.animation(variant, connectivity.as_ref())
        };
        let contour = if self.options.skip_contour {
            Outcome::skipped("contour plot disabled")
        } else {
            self.contour(variant, connectivity.as_ref())
        };

        VariantReport {
            name: variant.name.clone(),
            animation,
            contour,
        }
    }

    fn animation(
        &self,
        variant: &VariantConfig,
        connectivity: Option<&ConnectivityTable>,
    ) -> Outcome {
        let Some(out) = variant.animation_out.clone() else {
            return Outcome::skipped("no animation output configured");
        };
        let outcome = self
            .write_animation(variant, connectivity, &out)
            .map(|frames| Outcome::Written { path: out, frames })
            .unwrap_or_else(|e| Outcome::from_error(&e));
        log_outcome("animation", &outcome);
        outcome
    }

    fn write_animation(
        &self,
        variant: &VariantConfig,
        connectivity: Option<&ConnectivityTable>,
        out: &std::path::Path,
    ) -> FieldResult<usize> {
        let files = discover_iteration_files(&variant.input_dir)?;
        if files.is_empty() {
            return Err(FieldError::missing_resource(format!(
                "no solution_<n>.csv files in '{}'",
                variant.input_dir.display()
            )));
        }
        tracing::info!(files = files.len(), "generating animation");

        let sequence = FrameSequence::load(&files)?;
        let mesh = Mesh::build(sequence.points().to_vec(), connectivity)?;
        let settings = &self.config.animation;
        // Scoped per variant; released on every return path.
        let renderer = SurfaceRenderer::new(settings.surface_style()?, self.annotator.clone());
        let mut sink = GifSink::new(GifSinkOpts::new(out));
        assemble(&renderer, &mesh, &sequence, variant, settings.fps, &mut sink)
    }

    fn contour(
        &self,
        variant: &VariantConfig,
        connectivity: Option<&ConnectivityTable>,
    ) -> Outcome {
        let Some(out) = variant.contour_path() else {
            return Outcome::skipped("no contour output configured");
        };
        let input = variant.final_path();
        if !input.is_file() {
            let outcome = Outcome::skipped(format!("file '{}' not found", input.display()));
            log_outcome("contour", &outcome);
            return outcome;
        }

        let outcome = self
            .config
            .contour
            .contour_style()
            .and_then(|style| {
                let renderer = ContourRenderer::new(style, self.annotator.clone());
                plot_final_state(&renderer, &input, connectivity, &variant.title, &out)
            })
            .map(|()| Outcome::Written {
                path: out,
                frames: 1,
            })
            .unwrap_or_else(|e| Outcome::from_error(&e));
        log_outcome("contour", &outcome);
        outcome
    }
}

fn log_outcome(artifact: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Written { path, frames } => {
            tracing::info!(artifact, path = %path.display(), frames, "saved");
        }
        Outcome::Skipped { reason } => tracing::warn!(artifact, %reason, "skipped"),
        Outcome::Failed { error } => tracing::warn!(artifact, %error, "failed"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/orchestrator.rs"]
mod tests;
