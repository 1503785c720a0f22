use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Point;
use crate::foundation::error::{FieldError, FieldResult};

/// Columns every table must carry (`x,y,value` or `v1,v2,v3`).
pub const REQUIRED_COLUMNS: usize = 3;

/// Headerless numeric table, row-major, with a uniform column count of at least 3.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericTable {
    columns: usize,
    cells: Vec<f64>,
}

impl NumericTable {
    pub fn rows(&self) -> usize {
        self.cells.len().checked_div(self.columns).unwrap_or(0)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.columns..(i + 1) * self.columns]
    }

    pub fn column(&self, c: usize) -> Vec<f64> {
        (0..self.rows()).map(|r| self.row(r)[c]).collect()
    }
}

/// Read a comma-delimited table with no header row.
///
/// Extra columns are kept; rows shorter than [`REQUIRED_COLUMNS`] or ragged against the first
/// row fail the whole table.
pub fn read_table(path: &Path) -> FieldResult<NumericTable> {
    if !path.is_file() {
        return Err(FieldError::missing_resource(format!(
            "table '{}' not found",
            path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("open table '{}'", path.display()))
        .map_err(|e| FieldError::data_format(format!("{e:#}")))?;

    let mut columns = 0usize;
    let mut cells = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("read row {} of '{}'", line + 1, path.display()))
            .map_err(|e| FieldError::data_format(format!("{e:#}")))?;
        // Blank lines come through as a single empty field.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if columns == 0 {
            if record.len() < REQUIRED_COLUMNS {
                return Err(FieldError::data_format(format!(
                    "'{}' row {} has {} column(s), need at least {REQUIRED_COLUMNS}",
                    path.display(),
                    line + 1,
                    record.len()
                )));
            }
            columns = record.len();
        } else if record.len() != columns {
            return Err(FieldError::data_format(format!(
                "'{}' row {} has {} column(s), expected {columns}",
                path.display(),
                line + 1,
                record.len()
            )));
        }

        for (col, field) in record.iter().enumerate() {
            let v: f64 = field.parse().map_err(|_| {
                FieldError::data_format(format!(
                    "'{}' row {} column {}: '{field}' is not a number",
                    path.display(),
                    line + 1,
                    col + 1
                ))
            })?;
            cells.push(v);
        }
    }

    if cells.is_empty() {
        return Err(FieldError::data_format(format!(
            "'{}' contains no rows",
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), rows = cells.len() / columns, columns, "read table");
    Ok(NumericTable { columns, cells })
}

/// One solver snapshot: vertex positions plus the scalar value at each vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexTable {
    pub points: Vec<Point>,
    pub values: Vec<f64>,
}

impl VertexTable {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<&NumericTable> for VertexTable {
    fn from(table: &NumericTable) -> Self {
        let mut points = Vec::with_capacity(table.rows());
        let mut values = Vec::with_capacity(table.rows());
        for r in 0..table.rows() {
            let row = table.row(r);
            points.push(Point::new(row[0], row[1]));
            values.push(row[2]);
        }
        Self { points, values }
    }
}

/// Load a solution file (`x, y, value[, ...]`).
pub fn read_vertex_table(path: &Path) -> FieldResult<VertexTable> {
    read_table(path).map(|t| VertexTable::from(&t))
}

/// Explicit triangles as zero-based vertex indices, one row per triangle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectivityTable {
    pub triangles: Vec<[usize; 3]>,
}

impl ConnectivityTable {
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl TryFrom<&NumericTable> for ConnectivityTable {
    type Error = FieldError;

    fn try_from(table: &NumericTable) -> FieldResult<Self> {
        fn to_index(v: f64, row: usize) -> FieldResult<usize> {
            if !v.is_finite() || v < 0.0 || v.fract() != 0.0 || v > usize::MAX as f64 {
                return Err(FieldError::data_format(format!(
                    "connectivity row {}: '{v}' is not a vertex index",
                    row + 1
                )));
            }
            Ok(v as usize)
        }

        let mut triangles = Vec::with_capacity(table.rows());
        for r in 0..table.rows() {
            let row = table.row(r);
            triangles.push([
                to_index(row[0], r)?,
                to_index(row[1], r)?,
                to_index(row[2], r)?,
            ]);
        }
        Ok(Self { triangles })
    }
}

/// Load a connectivity file (`v1, v2, v3[, ...]`).
pub fn read_connectivity(path: &Path) -> FieldResult<ConnectivityTable> {
    let table = read_table(path)?;
    ConnectivityTable::try_from(&table)
}

#[cfg(test)]
#[path = "../../tests/unit/data/table.rs"]
mod tests;
