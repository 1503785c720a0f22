use crate::foundation::core::Rgb8;

/// Value-to-color gradients available to the renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Colormap {
    /// Rainbow blue → cyan → yellow → red, piecewise linear per channel.
    #[default]
    Jet,
    /// Perceptually uniform purple → green → yellow.
    Viridis,
}

type Ramp = &'static [(f64, f64)];

const JET_R: Ramp = &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)];
const JET_G: Ramp = &[
    (0.0, 0.0),
    (0.125, 0.0),
    (0.375, 1.0),
    (0.64, 1.0),
    (0.91, 0.0),
    (1.0, 0.0),
];
const JET_B: Ramp = &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)];

const VIRIDIS: [Rgb8; 9] = [
    Rgb8::new(0x44, 0x01, 0x54),
    Rgb8::new(0x47, 0x2c, 0x7a),
    Rgb8::new(0x3b, 0x52, 0x8b),
    Rgb8::new(0x2c, 0x72, 0x8e),
    Rgb8::new(0x21, 0x91, 0x8c),
    Rgb8::new(0x28, 0xae, 0x80),
    Rgb8::new(0x5e, 0xc9, 0x62),
    Rgb8::new(0xad, 0xdc, 0x30),
    Rgb8::new(0xfd, 0xe7, 0x25),
];

fn sample_ramp(ramp: Ramp, t: f64) -> f64 {
    for w in ramp.windows(2) {
        let ((x0, y0), (x1, y1)) = (w[0], w[1]);
        if t <= x1 {
            let u = if x1 > x0 { (t - x0) / (x1 - x0) } else { 0.0 };
            return y0 + (y1 - y0) * u;
        }
    }
    ramp.last().map_or(0.0, |&(_, y)| y)
}

impl Colormap {
    /// Color at `t` in `[0, 1]`; out-of-range and NaN input is clamped.
    pub fn sample(self, t: f64) -> Rgb8 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Jet => Rgb8::from_unit(
                sample_ramp(JET_R, t),
                sample_ramp(JET_G, t),
                sample_ramp(JET_B, t),
            ),
            Self::Viridis => {
                let x = t * (VIRIDIS.len() - 1) as f64;
                let i = (x.floor() as usize).min(VIRIDIS.len() - 2);
                let u = x - i as f64;
                let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
                let lerp = |p: u8, q: u8| {
                    (f64::from(p) + (f64::from(q) - f64::from(p)) * u) / 255.0
                };
                Rgb8::from_unit(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/colormap.rs"]
mod tests;
