use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EvalError, Result};


const WEIGHT_SUFFIX: &str = "csv";


/// Lists every `*.csv` file in `dir`, in directory enumeration order.
///
/// The returned order is not sorted and carries no meaning beyond the
/// run-local classifier index: voting is order-independent, only the
/// index-to-file mapping must stay stable within one run.
///
/// Fails with [`EvalError::Io`] when the directory cannot be read and
/// with [`EvalError::NoClassifiers`] when no file matches, so callers
/// can never index into an empty classifier set.
pub fn discover_weight_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|source| EvalError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| EvalError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let is_weight_file = path.is_file()
            && path.extension().is_some_and(|ext| ext == WEIGHT_SUFFIX);
        if is_weight_file && seen.insert(path.clone()) {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(EvalError::NoClassifiers { dir: dir.to_path_buf() });
    }
    Ok(files)
}
