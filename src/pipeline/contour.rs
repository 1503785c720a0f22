use std::path::Path;

use crate::data::table::{ConnectivityTable, read_vertex_table};
use crate::encode::png::write_png;
use crate::foundation::error::FieldResult;
use crate::mesh::Mesh;
use crate::render::plot2d::{ContourPlot, ContourRenderer};

/// Plot the final-state file at `input` and save it as a PNG at `out`.
///
/// The mesh is rebuilt from this file's vertices, with `connectivity` taking precedence over
/// Delaunay triangulation.
#[tracing::instrument(skip(renderer, connectivity))]
pub fn plot_final_state(
    renderer: &ContourRenderer,
    input: &Path,
    connectivity: Option<&ConnectivityTable>,
    title: &str,
    out: &Path,
) -> FieldResult<()> {
    let table = read_vertex_table(input)?;
    let mesh = Mesh::build(table.points, connectivity)?;
    let image = renderer.render(&ContourPlot {
        mesh: &mesh,
        values: &table.values,
        title,
    })?;
    write_png(out, &image)
}
