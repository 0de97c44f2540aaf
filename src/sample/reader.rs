use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{EvalError, Result};
use super::sample_struct::{Instance, Sample};


/// The feature file expected inside a validation directory.
pub(crate) const DATASET_FILE: &str = "dataset.csv";
/// The label file expected inside a validation directory.
pub(crate) const LABELS_FILE: &str = "labels.csv";


/// A builder that reads a validation directory into [`Sample`].
///
/// The directory must contain exactly two files:
/// `dataset.csv` with one `length,width` row per instance, and
/// `labels.csv` whose first column carries the integer class id
/// (additional columns are ignored).
/// Both files start with a header line that is discarded.
///
/// # Example
/// ```no_run
/// use hardvote::SampleReader;
/// let sample = SampleReader::new("/path/to/validation")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    dir: P,
}


impl<P: AsRef<Path>> SampleReader<P> {
    /// Set the validation directory.
    pub fn new(dir: P) -> Self {
        Self { dir }
    }


    /// Reads `dataset.csv` and `labels.csv`,
    /// returning the index-aligned [`Sample`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let dir = self.dir.as_ref();

        let instances = read_instances(&dir.join(DATASET_FILE))?;
        let labels = read_labels(&dir.join(LABELS_FILE))?;

        Sample::new(instances, labels)
    }
}


/// Reads the rows of `path`, discarding the leading header line
/// unconditionally. Empty lines yield no row.
/// Each returned pair carries the 1-based line number for diagnostics.
pub(crate) fn data_lines(path: &Path) -> Result<Vec<(usize, String)>> {
    let file = File::open(path).map_err(|source| EvalError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows = Vec::new();
    for (ix, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| EvalError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // The first line is a header.
        if ix == 0 || line.trim().is_empty() {
            continue;
        }
        rows.push((ix + 1, line));
    }
    Ok(rows)
}


/// Parses one CSV row into exactly `n_fields` real-valued columns.
///
/// A wrong column count or an unparseable field fails with
/// [`EvalError::Format`]. Silent zero-coercion is deliberately not
/// an option here.
pub(crate) fn parse_float_row(
    path: &Path,
    line_no: usize,
    line: &str,
    n_fields: usize,
) -> Result<Vec<f64>>
{
    let fields = line.split(',')
        .map(str::trim)
        .collect::<Vec<_>>();

    if fields.len() != n_fields {
        return Err(EvalError::Format {
            path: path.to_path_buf(),
            line: line_no,
            reason: format!(
                "expected {n_fields} columns, found {}", fields.len(),
            ),
        });
    }

    fields.into_iter()
        .map(|field| {
            field.parse::<f64>().map_err(|_| EvalError::Format {
                path: path.to_path_buf(),
                line: line_no,
                reason: format!("`{field}` is not a number"),
            })
        })
        .collect()
}


fn read_instances(path: &Path) -> Result<Vec<Instance>> {
    data_lines(path)?
        .into_iter()
        .map(|(line_no, line)| {
            let row = parse_float_row(path, line_no, &line, 2)?;
            Ok(Instance { length: row[0], width: row[1] })
        })
        .collect()
}


fn read_labels(path: &Path) -> Result<Vec<usize>> {
    data_lines(path)?
        .into_iter()
        .map(|(line_no, line)| {
            // Only the first column carries the class id.
            let field = line.split(',').next().unwrap_or("").trim();
            field.parse::<usize>().map_err(|_| EvalError::Format {
                path: path.to_path_buf(),
                line: line_no,
                reason: format!("`{field}` is not a class id"),
            })
        })
        .collect()
}
