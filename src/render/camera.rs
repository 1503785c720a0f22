use crate::foundation::core::{FrameIndex, Point};

/// World-space position inside the normalized plot box.
pub type Vec3 = [f64; 3];

pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn normalize(a: Vec3) -> Option<Vec3> {
    let len = dot(a, a).sqrt();
    (len > 0.0 && len.is_finite()).then(|| [a[0] / len, a[1] / len, a[2] / len])
}

/// Slow orbit around the z axis: fixed elevation, azimuth advancing per frame.
///
/// The azimuth is a pure function of the frame index, so frames can be rendered in any order.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrbitCamera {
    pub elevation_deg: f64,
    pub azimuth_start_deg: f64,
    pub azimuth_step_deg: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            elevation_deg: 30.0,
            azimuth_start_deg: -60.0,
            azimuth_step_deg: 2.0,
        }
    }
}

impl OrbitCamera {
    pub fn azimuth_deg(&self, frame: FrameIndex) -> f64 {
        self.azimuth_start_deg + self.azimuth_step_deg * frame.0 as f64
    }

    pub fn view(&self, frame: FrameIndex) -> View {
        View::new(self.elevation_deg, self.azimuth_deg(frame))
    }
}

/// Orthographic view basis for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    /// Screen-right direction in world space.
    pub right: Vec3,
    /// Screen-up direction in world space.
    pub up: Vec3,
    /// Direction from the origin towards the viewer.
    pub toward: Vec3,
}

impl View {
    pub fn new(elevation_deg: f64, azimuth_deg: f64) -> Self {
        let (se, ce) = elevation_deg.to_radians().sin_cos();
        let (sa, ca) = azimuth_deg.to_radians().sin_cos();
        Self {
            right: [-sa, ca, 0.0],
            up: [-se * ca, -se * sa, ce],
            toward: [ce * ca, ce * sa, se],
        }
    }

    /// Screen coordinates (y up) and depth; larger depth is closer to the viewer.
    pub fn project(&self, p: Vec3) -> (Point, f64) {
        (
            Point::new(dot(p, self.right), dot(p, self.up)),
            dot(p, self.toward),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/camera.rs"]
mod tests;
