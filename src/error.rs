//! Defines the error type shared across this crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;


/// A specialized `Result` type for evaluation runs.
pub type Result<T> = std::result::Result<T, EvalError>;


/// Errors that abort an evaluation run.
///
/// Every variant is unrecoverable for a single run.
/// The pipeline has no partial-success mode,
/// so callers propagate these to the top and exit non-zero
/// instead of producing a degraded result.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A required file or directory cannot be opened or read.
    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        /// The file or directory that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A row has the wrong column count or a non-numeric field.
    /// `line` is 1-based, counting the header line.
    #[error("{}:{line}: {reason}", .path.display())]
    Format {
        /// The offending file.
        path: PathBuf,
        /// The offending line number.
        line: usize,
        /// What went wrong on that line.
        reason: String,
    },

    /// The weight-vector directory contains no `*.csv` file.
    #[error("no classifier weight files (*.csv) found in `{}`", .dir.display())]
    NoClassifiers {
        /// The directory that was scanned.
        dir: PathBuf,
    },

    /// The weight matrices disagree on the number of classes.
    #[error("classifier `{name}` votes over {found} classes, expected {expected}")]
    ClassCountMismatch {
        /// The classifier whose class count disagrees.
        name: String,
        /// The class count fixed by the first classifier.
        expected: usize,
        /// The class count this classifier was built with.
        found: usize,
    },

    /// Two index-aligned sequences have different lengths.
    #[error("length mismatch: expected {expected} rows, found {found}")]
    LengthMismatch {
        /// The expected row count.
        expected: usize,
        /// The row count actually found.
        found: usize,
    },

    /// Arg-max was invoked over an empty sequence.
    /// Upstream validation makes this unreachable in the pipeline,
    /// but the guard stays in place.
    #[error("argmax over an empty sequence")]
    EmptyInput,
}
