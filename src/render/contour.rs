//! Filled-contour geometry on linear triangles.
//!
//! The scalar field is interpolated linearly over each triangle. A band `[lo, hi]` is the part of
//! the triangle where `lo <= value <= hi`; it is found by clipping the triangle twice against the
//! field, once per bound.

use crate::foundation::core::Point;

/// A position carrying the interpolated field value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldPoint {
    pub pos: Point,
    pub value: f64,
}

impl FieldPoint {
    pub fn new(pos: Point, value: f64) -> Self {
        Self { pos, value }
    }

    fn lerp_to_level(self, other: Self, level: f64) -> Self {
        let d = other.value - self.value;
        let t = if d == 0.0 { 0.0 } else { (level - self.value) / d };
        Self {
            pos: self.pos.lerp(other.pos, t.clamp(0.0, 1.0)),
            value: level,
        }
    }
}

/// Keep the half where `value >= level` (`above`) or `value <= level`.
fn clip_half(poly: &[FieldPoint], level: f64, above: bool) -> Vec<FieldPoint> {
    let inside = |p: &FieldPoint| {
        if above {
            p.value >= level
        } else {
            p.value <= level
        }
    };
    let mut out = Vec::with_capacity(poly.len() + 2);
    for (i, &cur) in poly.iter().enumerate() {
        let prev = poly[(i + poly.len() - 1) % poly.len()];
        match (inside(&prev), inside(&cur)) {
            (true, true) => out.push(cur),
            (true, false) => out.push(prev.lerp_to_level(cur, level)),
            (false, true) => {
                out.push(prev.lerp_to_level(cur, level));
                out.push(cur);
            }
            (false, false) => {}
        }
    }
    out
}

/// Polygon covering the part of `tri` with `lo <= value <= hi`; empty when there is none.
pub fn clip_band(tri: &[FieldPoint; 3], lo: f64, hi: f64) -> Vec<FieldPoint> {
    let lower = clip_half(tri, lo, true);
    if lower.len() < 3 {
        return Vec::new();
    }
    let band = clip_half(&lower, hi, false);
    if band.len() < 3 { Vec::new() } else { band }
}

/// The segment where the field crosses `level` inside `tri`, if it does.
pub fn iso_segment(tri: &[FieldPoint; 3], level: f64) -> Option<(Point, Point)> {
    let mut ends = Vec::with_capacity(2);
    for i in 0..3 {
        let a = tri[i];
        let b = tri[(i + 1) % 3];
        if (a.value >= level) != (b.value >= level) {
            ends.push(a.lerp_to_level(b, level).pos);
        }
    }
    match ends.as_slice() {
        [p, q] => Some((*p, *q)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/contour.rs"]
mod tests;
