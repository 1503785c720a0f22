//! Run configuration: the ordered variant list plus per-artifact settings.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::color::colormap::Colormap;
use crate::foundation::core::{Canvas, Fps, Rgb8};
use crate::foundation::error::{FieldError, FieldResult};
use crate::render::camera::OrbitCamera;
use crate::render::plot2d::ContourStyle;
use crate::render::surface::SurfaceStyle;

const POINTS_PER_INCH: f64 = 72.0;

fn pt_to_px(pt: f64, dpi: u32) -> f64 {
    pt * f64::from(dpi) / POINTS_PER_INCH
}

/// One experiment whose results are rendered.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VariantConfig {
    /// Short name, upper-cased in animation titles.
    pub name: String,
    /// Title of the contour plot.
    pub title: String,
    /// Directory holding `solution_<n>.csv` and the final-state file.
    pub input_dir: PathBuf,
    /// Connectivity file name inside `input_dir`; Delaunay triangulation when absent.
    #[serde(default)]
    pub connectivity: Option<String>,
    #[serde(default = "default_final_file")]
    pub final_file: String,
    /// Animation output path; no animation when absent.
    #[serde(default)]
    pub animation_out: Option<PathBuf>,
    /// Contour image file name, written inside `input_dir`; no contour plot when absent.
    #[serde(default = "default_contour_out")]
    pub contour_out: Option<String>,
}

fn default_final_file() -> String {
    "solution_final.csv".to_string()
}

fn default_contour_out() -> Option<String> {
    Some("final_plot_2d.png".to_string())
}

impl VariantConfig {
    pub fn connectivity_path(&self) -> Option<PathBuf> {
        self.connectivity.as_ref().map(|c| self.input_dir.join(c))
    }

    pub fn final_path(&self) -> PathBuf {
        self.input_dir.join(&self.final_file)
    }

    pub fn contour_path(&self) -> Option<PathBuf> {
        self.contour_out.as_ref().map(|c| self.input_dir.join(c))
    }

    /// Title of one animation frame.
    pub fn frame_title(&self, iteration: u64) -> String {
        format!("[{}] Iteration: {iteration}", self.name.to_uppercase())
    }
}

/// Rotating 3D animation settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    /// Playback rate of the encoded file.
    pub fps: Fps,
    /// Interactive preview interval. Informational only; the encoded rate is `fps`.
    pub preview_interval_ms: u32,
    pub camera: OrbitCamera,
    pub colormap: Colormap,
    pub edge_width_pt: f64,
    pub z_label: String,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            width_in: 10.0,
            height_in: 8.0,
            dpi: 100,
            fps: Fps { num: 4, den: 1 },
            preview_interval_ms: 300,
            camera: OrbitCamera::default(),
            colormap: Colormap::Jet,
            edge_width_pt: 0.2,
            z_label: "u".to_string(),
        }
    }
}

impl AnimationSettings {
    pub fn canvas(&self) -> FieldResult<Canvas> {
        Canvas::from_inches(self.width_in, self.height_in, self.dpi)
    }

    pub fn validate(&self) -> FieldResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        self.canvas()?;
        if !self.edge_width_pt.is_finite() || self.edge_width_pt < 0.0 {
            return Err(FieldError::validation(
                "animation edge_width_pt must be finite and >= 0",
            ));
        }
        let cam = &self.camera;
        if ![cam.elevation_deg, cam.azimuth_start_deg, cam.azimuth_step_deg]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(FieldError::validation("camera angles must be finite"));
        }
        Ok(())
    }

    pub fn surface_style(&self) -> FieldResult<SurfaceStyle> {
        Ok(SurfaceStyle {
            canvas: self.canvas()?,
            colormap: self.colormap,
            camera: self.camera,
            edge_width_px: pt_to_px(self.edge_width_pt, self.dpi),
            z_label: self.z_label.clone(),
            background: Rgb8::WHITE,
        })
    }
}

/// Final-state contour plot settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContourSettings {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub levels: usize,
    pub colormap: Colormap,
    pub isoline_width_pt: f64,
    pub colorbar_label: String,
}

impl Default for ContourSettings {
    fn default() -> Self {
        Self {
            width_in: 8.0,
            height_in: 7.0,
            dpi: 300,
            levels: crate::color::scale::DEFAULT_LEVEL_COUNT,
            colormap: Colormap::Jet,
            isoline_width_pt: 0.5,
            colorbar_label: "u value".to_string(),
        }
    }
}

impl ContourSettings {
    pub fn canvas(&self) -> FieldResult<Canvas> {
        Canvas::from_inches(self.width_in, self.height_in, self.dpi)
    }

    pub fn validate(&self) -> FieldResult<()> {
        self.canvas()?;
        if self.levels < 2 {
            return Err(FieldError::validation(format!(
                "contour levels must be >= 2, got {}",
                self.levels
            )));
        }
        if !self.isoline_width_pt.is_finite() || self.isoline_width_pt < 0.0 {
            return Err(FieldError::validation(
                "contour isoline_width_pt must be finite and >= 0",
            ));
        }
        Ok(())
    }

    pub fn contour_style(&self) -> FieldResult<ContourStyle> {
        Ok(ContourStyle {
            canvas: self.canvas()?,
            colormap: self.colormap,
            level_count: self.levels,
            isoline_width_px: pt_to_px(self.isoline_width_pt, self.dpi),
            colorbar_label: self.colorbar_label.clone(),
            background: Rgb8::WHITE,
        })
    }
}

/// Everything one run needs. Variants are processed in order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunConfig {
    pub variants: Vec<VariantConfig>,
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub contour: ContourSettings,
}

impl RunConfig {
    /// The two result directories written by the solvers.
    pub fn builtin() -> Self {
        let variant = |name: &str, title: &str| VariantConfig {
            name: name.to_string(),
            title: title.to_string(),
            input_dir: PathBuf::from(format!("./results_{name}/")),
            connectivity: None,
            final_file: default_final_file(),
            animation_out: Some(PathBuf::from(format!("{name}_demo.gif"))),
            contour_out: default_contour_out(),
        };
        Self {
            variants: vec![
                variant("baseline", "Baseline Method (Final)"),
                variant("improved", "Improved Method (Hybrid Final)"),
            ],
            animation: AnimationSettings::default(),
            contour: ContourSettings::default(),
        }
    }

    pub fn from_json_path(path: &Path) -> FieldResult<Self> {
        if !path.is_file() {
            return Err(FieldError::missing_resource(format!(
                "config '{}' not found",
                path.display()
            )));
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text).map_err(|e| {
            FieldError::data_format(format!("parse config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> FieldResult<()> {
        self.animation.validate()?;
        self.contour.validate()?;
        for (i, v) in self.variants.iter().enumerate() {
            if v.name.trim().is_empty() {
                return Err(FieldError::validation(format!(
                    "variant #{} has an empty name",
                    i + 1
                )));
            }
            if v.final_file.trim().is_empty() {
                return Err(FieldError::validation(format!(
                    "variant '{}' has an empty final_file",
                    v.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
