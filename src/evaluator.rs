//! The evaluation pipeline, from weight files to the accuracy report.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::classifier::{
    discover_weight_files,
    Classifier,
    LinearClassifier,
};
use crate::ensemble::HardVoting;
use crate::error::Result;
use crate::metrics::accuracy;
use crate::sample::SampleReader;


/// The standalone accuracy of a single ensemble member.
#[derive(Debug, Clone, Serialize)]
pub struct MemberAccuracy {
    /// The classifier name, the stem of its weight file.
    pub name: String,
    /// Its accuracy on the validation sample, in `[0, 1]`.
    pub accuracy: f64,
}


/// The report of one evaluation run.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// The majority-vote accuracy of the ensemble, in `[0, 1]`.
    pub ensemble_accuracy: f64,
    /// The standalone accuracy of each member, in discovery order.
    pub members: Vec<MemberAccuracy>,
    /// The class count shared by every member.
    pub n_classes: usize,
    /// The number of validation instances.
    pub n_instances: usize,
}


/// Wires the whole pipeline together: weight-file discovery, sample
/// loading, per-member prediction, majority voting and accuracy
/// scoring.
///
/// The composition order is fixed: the classifier set is discovered
/// and validated before the sample is read, so a misconfigured weight
/// directory fails fast, and every member's predictions are computed
/// exactly once, feeding both the vote and the per-member diagnostics.
///
/// # Example
/// ```no_run
/// use hardvote::Evaluator;
///
/// let report = Evaluator::new("validation/", "weights/")
///     .run()
///     .unwrap();
/// println!("Accuracy: {:.2}%", 100.0 * report.ensemble_accuracy);
/// ```
pub struct Evaluator {
    validation_dir: PathBuf,
    weight_dir: PathBuf,
}


impl Evaluator {
    /// Set the validation and weight-vector directories.
    pub fn new<P, Q>(validation_dir: P, weight_dir: Q) -> Self
        where P: AsRef<Path>,
              Q: AsRef<Path>,
    {
        Self {
            validation_dir: validation_dir.as_ref().to_path_buf(),
            weight_dir: weight_dir.as_ref().to_path_buf(),
        }
    }


    /// Runs the pipeline once and returns the report.
    pub fn run(&self) -> Result<Evaluation> {
        let files = discover_weight_files(&self.weight_dir)?;
        let classifiers = files.iter()
            .map(LinearClassifier::from_csv)
            .collect::<Result<Vec<_>>>()?;
        let ensemble = HardVoting::new(classifiers)?;

        let sample = SampleReader::new(&self.validation_dir).read()?;

        let predictions = ensemble.member_predictions(&sample);
        let members = ensemble.members().iter()
            .zip(&predictions)
            .map(|(member, prediction)| {
                let acc = accuracy(prediction, sample.labels())?;
                Ok(MemberAccuracy {
                    name: member.name().to_string(),
                    accuracy: acc,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let consensus = ensemble.vote(&predictions)?;
        let ensemble_accuracy = accuracy(&consensus, sample.labels())?;

        Ok(Evaluation {
            ensemble_accuracy,
            members,
            n_classes: ensemble.n_classes(),
            n_instances: sample.len(),
        })
    }
}
