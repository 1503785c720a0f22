use crate::foundation::error::{FieldError, FieldResult};
use crate::foundation::math::linspace;

/// Ranges narrower than this are widened before contour levels are derived.
pub const DEGENERATE_EPS: f64 = 1.0e-9;

/// Relative counterpart of [`DEGENERATE_EPS`] for large magnitudes; keeps thousands of ulps
/// between the padded bounds.
pub const RELATIVE_EPS: f64 = 1.0e-12;

/// Number of contour boundaries used by the final-state plot.
pub const DEFAULT_LEVEL_COUNT: usize = 12;

/// The `[min, max]` value range every frame of one artifact maps onto the colormap.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
}

impl ColorScale {
    /// Global extrema over every value of every frame.
    ///
    /// This is a full reduction: callers load all frames first and render afterwards. NaNs are
    /// ignored; `None` when no finite value exists.
    pub fn across_frames<F>(frames: &[F]) -> Option<Self>
    where
        F: AsRef<[f64]>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for frame in frames {
            for &v in frame.as_ref() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        (min.is_finite() && max.is_finite()).then_some(Self { min, max })
    }

    /// Extrema of one value array.
    pub fn of_values(values: &[f64]) -> Option<Self> {
        Self::across_frames(&[values])
    }

    /// Contour-mode range: one frame, widened symmetrically when it is (nearly) flat.
    pub fn for_contour(values: &[f64]) -> Option<Self> {
        Self::of_values(values).map(Self::widened_if_degenerate)
    }

    /// Pads a range narrower than `max(DEGENERATE_EPS, RELATIVE_EPS * |bound|)` by that amount
    /// on each side, so the padding survives rounding at any magnitude.
    pub fn widened_if_degenerate(self) -> Self {
        let pad = DEGENERATE_EPS.max(RELATIVE_EPS * self.min.abs().max(self.max.abs()));
        if self.span() < pad {
            Self {
                min: self.min - pad,
                max: self.max + pad,
            }
        } else {
            self
        }
    }

    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Position of `v` inside the range, clamped to `[0, 1]`.
    ///
    /// A zero-width range maps everything to the middle of the colormap.
    pub fn normalize(self, v: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 || !span.is_finite() {
            return 0.5;
        }
        ((v - self.min) / span).clamp(0.0, 1.0)
    }

    /// `n` evenly spaced boundaries spanning the closed range.
    pub fn levels(self, n: usize) -> FieldResult<Vec<f64>> {
        if n < 2 {
            return Err(FieldError::validation(format!(
                "contour needs at least 2 levels, got {n}"
            )));
        }
        Ok(linspace(self.min, self.max, n))
    }

    /// Power of ten shared by the colorbar tick labels.
    ///
    /// `floor(log10(max(|min|, |max|)))`, or 0 when both bounds are within
    /// [`DEGENERATE_EPS`] of zero.
    pub fn colorbar_exponent(self) -> i32 {
        let max_abs = self.min.abs().max(self.max.abs());
        if max_abs < DEGENERATE_EPS || !max_abs.is_finite() {
            return 0;
        }
        max_abs.log10().floor() as i32
    }

    /// Offset label (`×10^e`) drawn above the colorbar.
    ///
    /// Fails for non-finite ranges. The label is cosmetic: callers log and drop the error.
    pub fn offset_label(self) -> FieldResult<OffsetLabel> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(FieldError::cosmetic(format!(
                "no exponent for range [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(OffsetLabel {
            exponent: self.colorbar_exponent(),
        })
    }
}

/// Shared power-of-ten scaling for colorbar ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffsetLabel {
    pub exponent: i32,
}

impl OffsetLabel {
    /// Tick label for `v` once the shared power of ten is factored out.
    pub fn format_tick(self, v: f64, step: f64) -> String {
        let scale = 10f64.powi(self.exponent);
        let scaled = v / scale;
        let scaled_step = (step / scale).abs();
        let decimals = if scaled_step > 0.0 && scaled_step.is_finite() {
            (-scaled_step.log10().floor()).clamp(0.0, 8.0) as usize
        } else {
            1
        };
        let s = format!("{scaled:.decimals$}");
        // "-0.0" reads oddly next to a zero tick.
        if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
            s.trim_start_matches('-').to_string()
        } else {
            s
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/scale.rs"]
mod tests;
