use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context as _;
use regex::Regex;

use crate::foundation::error::{FieldError, FieldResult};

fn solution_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^solution_(\d+)\.csv$").expect("static pattern is valid"))
}

/// Solver iteration embedded in a `solution_<digits>.csv` file name.
///
/// Returns `None` for anything else (including `solution_final.csv`) and for digit runs that
/// do not fit a `u64`. Only the final path component is inspected.
pub fn iteration_index(file_name: impl AsRef<Path>) -> Option<u64> {
    let name = file_name.as_ref().file_name()?.to_str()?;
    let caps = solution_pattern().captures(name)?;
    caps[1].parse().ok()
}

/// A per-iteration solution file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IterationFile {
    pub iteration: u64,
    pub path: PathBuf,
}

/// Keep the files that carry an iteration index and order them by it.
///
/// The sort is stable, so duplicate indices keep their input order.
pub fn order_by_iteration<I>(paths: I) -> Vec<IterationFile>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut files: Vec<IterationFile> = paths
        .into_iter()
        .filter_map(|path| {
            iteration_index(&path).map(|iteration| IterationFile { iteration, path })
        })
        .collect();
    files.sort_by_key(|f| f.iteration);
    files
}

/// List the iteration files directly inside `dir`, ordered by iteration.
pub fn discover_iteration_files(dir: &Path) -> FieldResult<Vec<IterationFile>> {
    if !dir.is_dir() {
        return Err(FieldError::missing_resource(format!(
            "directory '{}' not found",
            dir.display()
        )));
    }

    let mut paths = Vec::new();
    let entries = std::fs::read_dir(dir).with_context(|| format!("list '{}'", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("list '{}'", dir.display()))?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    Ok(order_by_iteration(paths))
}

#[cfg(test)]
#[path = "../../tests/unit/data/iteration.rs"]
mod tests;
