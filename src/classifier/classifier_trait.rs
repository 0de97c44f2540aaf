use crate::sample::Sample;


/// A trait that defines the behavior of a multi-class classifier.
/// You only need to implement the `n_classes` and `predict` methods.
pub trait Classifier {
    /// The number of classes this classifier votes over.
    fn n_classes(&self) -> usize;


    /// Predicts the class id of the `row`-th instance of `sample`.
    /// Implementations must return a value in `[0, n_classes)`.
    fn predict(&self, sample: &Sample, row: usize) -> usize;


    /// Predicts the class ids of every instance of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<usize> {
        (0..sample.len())
            .map(|row| self.predict(sample, row))
            .collect()
    }


    /// A short name used in diagnostics.
    fn name(&self) -> &str {
        "classifier"
    }
}
