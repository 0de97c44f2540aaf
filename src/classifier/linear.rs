use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::common::argmax;
use crate::error::{EvalError, Result};
use crate::sample::{Instance, Sample};
use crate::sample::reader::{data_lines, parse_float_row};
use super::classifier_trait::Classifier;


/// Per-class coefficients of a linear classifier.
///
/// One row of a weight file. The named fields replace the positional
/// column indices of the file layout, so the fixed column order
/// `betha_0, betha_1, bias` is decoded exactly once, at read time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassWeights {
    /// The coefficient applied to [`Instance::length`].
    pub betha0: f64,
    /// The coefficient applied to [`Instance::width`].
    pub betha1: f64,
    /// The constant term.
    pub bias: f64,
}


impl ClassWeights {
    /// The linear score of `x` for this class.
    #[inline]
    pub fn score(&self, x: Instance) -> f64 {
        self.bias + self.betha0 * x.length + self.betha1 * x.width
    }
}


/// A linear multi-class classifier read from one weight file.
///
/// Row `c` of the file carries the coefficients of class `c`,
/// so the row count is the class count.
/// You can read/write this struct by `Serde` trait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    name: String,
    weights: Vec<ClassWeights>,
}


impl LinearClassifier {
    /// Construct a classifier from per-class weights.
    ///
    /// Fails with [`EvalError::EmptyInput`] when `weights` is empty,
    /// since a classifier without classes cannot score anything.
    pub fn new<S>(name: S, weights: Vec<ClassWeights>) -> Result<Self>
        where S: Into<String>,
    {
        if weights.is_empty() {
            return Err(EvalError::EmptyInput);
        }
        Ok(Self { name: name.into(), weights })
    }


    /// Reads one weight file into a classifier.
    ///
    /// The file starts with a header line (discarded), followed by one
    /// `betha_0,betha_1,bias` row per class. The classifier is named
    /// after the file stem.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut weights = Vec::new();
        for (line_no, line) in data_lines(path)? {
            let row = parse_float_row(path, line_no, &line, 3)?;
            weights.push(ClassWeights {
                betha0: row[0],
                betha1: row[1],
                bias: row[2],
            });
        }

        if weights.is_empty() {
            return Err(EvalError::Format {
                path: path.to_path_buf(),
                line: 1,
                reason: "weight file has no class rows".into(),
            });
        }
        Self::new(name, weights)
    }


    /// The per-class linear scores of `x`,
    /// index-aligned with the class ids.
    pub fn scores(&self, x: Instance) -> Vec<f64> {
        self.weights.iter()
            .map(|w| w.score(x))
            .collect()
    }


    /// Returns a slice over the per-class weights.
    pub fn weights(&self) -> &[ClassWeights] {
        &self.weights[..]
    }
}


impl Classifier for LinearClassifier {
    fn n_classes(&self) -> usize {
        self.weights.len()
    }


    fn predict(&self, sample: &Sample, row: usize) -> usize {
        let scores = self.scores(sample.at(row));
        argmax(&scores).expect("`weights` is non-empty by construction")
    }


    fn name(&self) -> &str {
        &self.name
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> LinearClassifier {
        LinearClassifier::new("stub", vec![
            ClassWeights { betha0: -1.0, betha1: -1.0, bias: 5.0 },
            ClassWeights { betha0:  1.0, betha1:  1.0, bias: -5.0 },
        ]).unwrap()
    }

    #[test]
    fn score_is_bias_plus_weighted_features() {
        let w = ClassWeights { betha0: 2.0, betha1: -0.5, bias: 1.0 };
        let x = Instance { length: 3.0, width: 4.0 };
        assert_eq!(w.score(x), 1.0 + 2.0 * 3.0 - 0.5 * 4.0);
    }

    #[test]
    fn predict_picks_the_highest_scoring_class() {
        let h = classifier();
        let sample = Sample::new(
            vec![
                Instance { length: 1.0, width: 1.0 },
                Instance { length: 9.0, width: 9.0 },
            ],
            vec![0, 1],
        ).unwrap();

        assert_eq!(h.predict_all(&sample), vec![0, 1]);
    }

    #[test]
    fn predictions_stay_in_class_range() {
        let h = classifier();
        let sample = Sample::new(
            (0..20).map(|i| Instance {
                length: i as f64 - 10.0,
                width: 10.0 - i as f64,
            }).collect(),
            vec![0; 20],
        ).unwrap();

        assert!(h.predict_all(&sample).iter().all(|&c| c < h.n_classes()));
    }

    #[test]
    fn empty_weight_matrix_is_rejected() {
        let result = LinearClassifier::new("empty", Vec::new());
        assert!(matches!(result, Err(EvalError::EmptyInput)));
    }
}
