//! Bowyer-Watson Delaunay triangulation of a 2D point set.
//!
//! Points are normalized into the unit box before insertion so the predicates work on
//! comparable magnitudes regardless of the mesh's physical units. Instead of a finite enclosing
//! triangle, every convex-hull edge carries a ghost triangle whose third vertex is a symbolic
//! point at infinity. The result covers the convex hull of the input; holes and concave
//! boundaries are filled.

use std::collections::{HashMap, HashSet};

use crate::foundation::core::Point;
use crate::foundation::error::{FieldError, FieldResult};

/// Vertex index standing for the point at infinity.
const GHOST: usize = usize::MAX;
/// Seed triangles with a smaller doubled area (in normalized units) count as collinear.
const SEED_AREA_EPS: f64 = 1.0e-12;

/// A triangle stored counter-clockwise; a ghost keeps [`GHOST`] in the last slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tri {
    v: [usize; 3],
}

impl Tri {
    fn new(v: [usize; 3]) -> Self {
        let v = match v.iter().position(|&i| i == GHOST) {
            Some(0) => [v[1], v[2], v[0]],
            Some(1) => [v[2], v[0], v[1]],
            _ => v,
        };
        Self { v }
    }

    fn is_ghost(&self) -> bool {
        self.v[2] == GHOST
    }

    /// Bowyer-Watson conflict test.
    ///
    /// A ghost's circumcircle degenerates into the open half-plane beyond its hull edge plus the
    /// open edge itself.
    fn conflicts(&self, pts: &[Point], p: Point) -> bool {
        let [a, b, c] = self.v;
        if c == GHOST {
            let (a, b) = (pts[a], pts[b]);
            let o = cross(a, b, p);
            o > 0.0 || (o == 0.0 && strictly_between(a, b, p))
        } else {
            in_circle(pts[a], pts[b], pts[c], p) > 0.0
        }
    }
}

/// Twice the signed area of `abc`; positive when counter-clockwise.
fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Positive when `d` lies inside the circumcircle of the counter-clockwise triangle `abc`.
fn in_circle(a: Point, b: Point, c: Point, d: Point) -> f64 {
    let (adx, ady) = (a.x - d.x, a.y - d.y);
    let (bdx, bdy) = (b.x - d.x, b.y - d.y);
    let (cdx, cdy) = (c.x - d.x, c.y - d.y);
    let ad = adx * adx + ady * ady;
    let bd = bdx * bdx + bdy * bdy;
    let cd = cdx * cdx + cdy * cdy;
    adx * (bdy * cd - bd * cdy) - ady * (bdx * cd - bd * cdx) + ad * (bdx * cdy - bdy * cdx)
}

/// `p` is on segment `ab` (assumed collinear) and differs from both ends.
fn strictly_between(a: Point, b: Point, p: Point) -> bool {
    let t = (p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y);
    t > 0.0 && t < (b.x - a.x).powi(2) + (b.y - a.y).powi(2)
}

/// Pick a well-shaped first triangle: the first point, the first distinct one, and the point
/// farthest from the line through them.
fn seed(pts: &[Point]) -> FieldResult<[usize; 3]> {
    let a = 0;
    let b = pts
        .iter()
        .position(|&p| p != pts[a])
        .ok_or_else(|| FieldError::data_format("all vertices coincide"))?;
    let (c, area) = pts
        .iter()
        .enumerate()
        .map(|(i, &p)| (i, cross(pts[a], pts[b], p)))
        .max_by(|x, y| x.1.abs().total_cmp(&y.1.abs()))
        .ok_or_else(|| FieldError::data_format("no vertices to triangulate"))?;
    if area.abs() <= SEED_AREA_EPS {
        return Err(FieldError::data_format(
            "vertices are collinear; no triangles can be formed",
        ));
    }
    Ok(if area > 0.0 { [a, b, c] } else { [a, c, b] })
}

/// Triangulate `points`, returning counter-clockwise index triples into `points`.
///
/// Exact duplicate points are inserted once; the later copies stay unreferenced.
pub fn triangulate(points: &[Point]) -> FieldResult<Vec<[usize; 3]>> {
    if points.len() < 3 {
        return Err(FieldError::data_format(format!(
            "triangulation needs at least 3 points, got {}",
            points.len()
        )));
    }
    if let Some(i) = points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(FieldError::data_format(format!(
            "vertex {i} has a non-finite coordinate"
        )));
    }

    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    let extent = (max_x - min_x).max(max_y - min_y);
    if extent <= 0.0 {
        return Err(FieldError::data_format("all vertices coincide"));
    }

    let pts: Vec<Point> = points
        .iter()
        .map(|p| Point::new((p.x - min_x) / extent, (p.y - min_y) / extent))
        .collect();

    let [a, b, c] = seed(&pts)?;
    let mut tris = vec![
        Tri::new([a, b, c]),
        Tri::new([b, a, GHOST]),
        Tri::new([c, b, GHOST]),
        Tri::new([a, c, GHOST]),
    ];

    let mut seen: HashSet<(u64, u64)> = [a, b, c]
        .iter()
        .map(|&i| (pts[i].x.to_bits(), pts[i].y.to_bits()))
        .collect();
    let mut edges: HashMap<(usize, usize), ((usize, usize), u32)> = HashMap::new();
    for (i, &p) in pts.iter().enumerate() {
        if !seen.insert((p.x.to_bits(), p.y.to_bits())) {
            continue;
        }

        edges.clear();
        let mut k = 0;
        while k < tris.len() {
            if tris[k].conflicts(&pts, p) {
                let [u, v, w] = tris.swap_remove(k).v;
                for (s, t) in [(u, v), (v, w), (w, u)] {
                    let key = (s.min(t), s.max(t));
                    edges
                        .entry(key)
                        .and_modify(|e| e.1 += 1)
                        .or_insert(((s, t), 1));
                }
            } else {
                k += 1;
            }
        }
        if edges.is_empty() {
            tracing::debug!(vertex = i, "vertex conflicts with no triangle; left out");
            continue;
        }

        tris.extend(
            edges
                .values()
                .filter(|&&(_, count)| count == 1)
                .map(|&((s, t), _)| Tri::new([s, t, i])),
        );
    }

    let mut out: Vec<[usize; 3]> = tris
        .into_iter()
        .filter(|t| !t.is_ghost())
        .map(|t| t.v)
        .collect();
    out.sort_unstable();
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/mesh/delaunay.rs"]
mod tests;
