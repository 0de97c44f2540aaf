//! Exports the common types and traits of this crate.

pub use crate::sample::{
    Instance,
    Sample,
    SampleReader,
};


pub use crate::classifier::{
    // Classifier trait
    Classifier,

    // Linear classifiers and their weight files
    ClassWeights,
    LinearClassifier,
    discover_weight_files,
};


pub use crate::ensemble::HardVoting;


pub use crate::evaluator::{
    Evaluation,
    Evaluator,
    MemberAccuracy,
};


pub use crate::metrics::accuracy;
pub use crate::error::{EvalError, Result};
