//! Triangulated surfaces shared by every frame of a variant.

pub mod delaunay;

use crate::data::table::ConnectivityTable;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{FieldError, FieldResult};

/// Where a mesh's triangles came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Triangulation {
    /// Computed from the point cloud; covers the convex hull, so holes are filled.
    Delaunay,
    /// Taken verbatim from a connectivity table; preserves holes and concave boundaries.
    Explicit,
}

/// Vertex positions plus triangles indexing into them. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    points: Vec<Point>,
    triangles: Vec<[usize; 3]>,
    kind: Triangulation,
}

impl Mesh {
    /// Triangulate a scattered point set.
    pub fn delaunay(points: Vec<Point>) -> FieldResult<Self> {
        let triangles = delaunay::triangulate(&points)?;
        Ok(Self {
            points,
            triangles,
            kind: Triangulation::Delaunay,
        })
    }

    /// Use the given triangles as-is after checking every index is a valid vertex.
    pub fn explicit(points: Vec<Point>, connectivity: &ConnectivityTable) -> FieldResult<Self> {
        let n = points.len();
        for (row, tri) in connectivity.triangles.iter().enumerate() {
            if let Some(&bad) = tri.iter().find(|&&v| v >= n) {
                return Err(FieldError::data_format(format!(
                    "connectivity row {} references vertex {bad}, but the mesh has {n} vertices",
                    row + 1
                )));
            }
        }
        Ok(Self {
            points,
            triangles: connectivity.triangles.clone(),
            kind: Triangulation::Explicit,
        })
    }

    /// Explicit triangles win whenever they are supplied.
    pub fn build(
        points: Vec<Point>,
        connectivity: Option<&ConnectivityTable>,
    ) -> FieldResult<Self> {
        match connectivity {
            Some(c) => Self::explicit(points, c),
            None => Self::delaunay(points),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    pub fn kind(&self) -> Triangulation {
        self.kind
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Axis-aligned bounds of all vertices (zero rect for an empty mesh).
    pub fn bounds(&self) -> Rect {
        let mut it = self.points.iter();
        let Some(first) = it.next() else {
            return Rect::ZERO;
        };
        it.fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p))
    }

    /// A per-vertex value array must line up with the vertex list.
    pub fn check_values(&self, values: &[f64]) -> FieldResult<()> {
        if values.len() != self.points.len() {
            return Err(FieldError::data_format(format!(
                "frame has {} values but the mesh has {} vertices",
                values.len(),
                self.points.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mesh/mesh.rs"]
mod tests;
