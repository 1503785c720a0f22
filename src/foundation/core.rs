use crate::foundation::error::{FieldError, FieldResult};

pub use kurbo::{Affine, BezPath, Point, Rect};

/// 0-based position of a frame inside an animation (not the solver iteration).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> FieldResult<Self> {
        if den == 0 {
            return Err(FieldError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FieldError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in whole milliseconds as a `(numer, denom)` pair.
    pub fn frame_delay_ms(self) -> (u32, u32) {
        (self.den.saturating_mul(1000), self.num)
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Canvas for a figure of `width_in x height_in` inches rasterized at `dpi`.
    pub fn from_inches(width_in: f64, height_in: f64, dpi: u32) -> FieldResult<Self> {
        let px = |inches: f64| -> FieldResult<u32> {
            let v = (inches * f64::from(dpi)).round();
            if !v.is_finite() || v < 1.0 {
                return Err(FieldError::validation(format!(
                    "figure size {inches}in at {dpi}dpi is not a valid raster size"
                )));
            }
            Ok(v as u32)
        };
        let canvas = Self {
            width: px(width_in)?,
            height: px(height_in)?,
        };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Raster sizes must fit the CPU rasterizer's `u16` surfaces.
    pub fn validate(self) -> FieldResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::validation("canvas width/height must be non-zero"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(FieldError::validation(format!(
                "canvas {}x{} exceeds {}x{}",
                self.width,
                self.height,
                u16::MAX,
                u16::MAX
            )));
        }
        Ok(())
    }

    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// Straight-alpha opaque color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from unit-interval channels, clamping out-of-range input.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Multiply every channel by `k` (Lambert shading).
    pub fn scaled(self, k: f64) -> Self {
        Self::from_unit(
            f64::from(self.r) / 255.0 * k,
            f64::from(self.g) / 255.0 * k,
            f64::from(self.b) / 255.0 * k,
        )
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub(crate) fn to_cpu(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
