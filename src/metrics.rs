//! Accuracy computation.

use crate::error::{EvalError, Result};


/// The fraction of rows where `predicted` agrees with `labels`,
/// a value in `[0, 1]`. No weighting, no smoothing.
///
/// Fails with [`EvalError::LengthMismatch`] when the two sequences are
/// not index-aligned, and with [`EvalError::EmptyInput`] when both are
/// empty, since an empty sample has no meaningful accuracy.
pub fn accuracy(predicted: &[usize], labels: &[usize]) -> Result<f64> {
    if predicted.len() != labels.len() {
        return Err(EvalError::LengthMismatch {
            expected: labels.len(),
            found: predicted.len(),
        });
    }
    if predicted.is_empty() {
        return Err(EvalError::EmptyInput);
    }

    let n_correct = predicted.iter()
        .zip(labels)
        .filter(|(p, y)| p == y)
        .count();

    Ok(n_correct as f64 / predicted.len() as f64)
}
