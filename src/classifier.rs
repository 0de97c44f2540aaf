//! Linear classifiers and their weight files.

// Provides the classifier trait.
pub(crate) mod classifier_trait;
// Provides the linear classifier struct.
pub(crate) mod linear;
// Provides weight-file discovery.
pub(crate) mod discovery;


pub use classifier_trait::Classifier;
pub use linear::{ClassWeights, LinearClassifier};
pub use discovery::discover_weight_files;
