#![warn(missing_docs)]

//!
//! A crate that evaluates an ensemble of linear multi-class classifiers
//! by unweighted majority vote.
//!
//! Each classifier is a small weight matrix read from a CSV file:
//! one row of coefficients `(betha_0, betha_1, bias)` per class.
//! Given a validation sample, every classifier predicts the class with
//! the largest linear score for each instance, the ensemble takes a
//! hard vote over those predictions, and the result is scored against
//! the ground-truth labels.
//!
//! The whole pipeline is wired by [`Evaluator`]:
//!
//! ```no_run
//! use hardvote::Evaluator;
//!
//! let report = Evaluator::new("validation/", "weights/")
//!     .run()
//!     .unwrap();
//! println!("Accuracy: {:.2}%", 100.0 * report.ensemble_accuracy);
//! ```

pub mod error;
pub mod common;
pub mod sample;
pub mod classifier;
pub mod ensemble;
pub mod metrics;
pub mod evaluator;
pub mod prelude;


// Export the functions that read CSV files into crate types.
pub use sample::{Instance, Sample, SampleReader};
pub use classifier::{Classifier, ClassWeights, LinearClassifier};
pub use classifier::discover_weight_files;

pub use ensemble::HardVoting;

pub use common::argmax;
pub use metrics::accuracy;

pub use evaluator::{Evaluation, Evaluator, MemberAccuracy};
pub use error::{EvalError, Result};
