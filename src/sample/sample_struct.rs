use serde::{Serialize, Deserialize};

use crate::error::{EvalError, Result};


/// A single validation instance.
///
/// Named fields replace the positional column layout of the input file,
/// so a swapped column can never silently change the meaning of a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// The first feature column of `dataset.csv`.
    pub length: f64,
    /// The second feature column of `dataset.csv`.
    pub width: f64,
}


/// Struct `Sample` holds the validation instances together with their
/// ground-truth class ids.
///
/// The two sequences are index-aligned and immutable after construction.
/// Class ids are dense integers starting at `0`.
#[derive(Debug, Clone)]
pub struct Sample {
    instances: Vec<Instance>,
    labels: Vec<usize>,
}


impl Sample {
    /// Construct a new `Sample` from index-aligned parts.
    ///
    /// Fails with [`EvalError::LengthMismatch`] when the instance and
    /// label sequences disagree in length.
    pub fn new(instances: Vec<Instance>, labels: Vec<usize>) -> Result<Self> {
        if instances.len() != labels.len() {
            return Err(EvalError::LengthMismatch {
                expected: instances.len(),
                found: labels.len(),
            });
        }
        Ok(Self { instances, labels })
    }


    /// Returns the number of instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }


    /// Returns `true` when the sample holds no instance.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }


    /// Returns the `row`-th instance.
    pub fn at(&self, row: usize) -> Instance {
        self.instances[row]
    }


    /// Returns a slice over the instances.
    pub fn instances(&self) -> &[Instance] {
        &self.instances[..]
    }


    /// Returns the ground-truth class ids,
    /// index-aligned with the instances.
    pub fn labels(&self) -> &[usize] {
        &self.labels[..]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_rejects_misaligned_parts() {
        let instances = vec![
            Instance { length: 1.0, width: 2.0 },
            Instance { length: 3.0, width: 4.0 },
        ];
        let labels = vec![0];

        let result = Sample::new(instances, labels);
        assert!(matches!(
            result,
            Err(EvalError::LengthMismatch { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn sample_keeps_row_order() {
        let instances = vec![
            Instance { length: 1.0, width: 2.0 },
            Instance { length: 3.0, width: 4.0 },
        ];
        let labels = vec![0, 1];

        let sample = Sample::new(instances, labels).unwrap();
        assert_eq!(sample.len(), 2);
        assert_eq!(sample.at(1), Instance { length: 3.0, width: 4.0 });
        assert_eq!(sample.labels(), &[0, 1]);
    }
}
