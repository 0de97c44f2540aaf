//! Hard-voting aggregation over a set of classifiers.

use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::classifier::Classifier;
use crate::common::argmax;
use crate::error::{EvalError, Result};
use crate::sample::Sample;


/// An unweighted majority vote over an index-stable set of classifiers.
///
/// Every member casts one vote per instance and the class with the most
/// votes wins. Ties resolve to the **lowest** class id through the
/// first-index arg-max — a deterministic policy, not an ML heuristic.
///
/// `HardVoting` implements [`Classifier`] itself, so the ensemble
/// predicts through the same interface as its members.
#[derive(Debug, Serialize, Deserialize)]
pub struct HardVoting<C> {
    members: Vec<C>,
    n_classes: usize,
}


impl<C: Classifier> HardVoting<C> {
    /// Construct an ensemble from its members.
    ///
    /// The class count is fixed by the first member; any member that
    /// disagrees fails the construction with
    /// [`EvalError::ClassCountMismatch`]. An empty member set fails
    /// with [`EvalError::EmptyInput`].
    pub fn new(members: Vec<C>) -> Result<Self> {
        let n_classes = match members.first() {
            Some(first) => first.n_classes(),
            None => return Err(EvalError::EmptyInput),
        };

        for member in &members {
            if member.n_classes() != n_classes {
                return Err(EvalError::ClassCountMismatch {
                    name: member.name().to_string(),
                    expected: n_classes,
                    found: member.n_classes(),
                });
            }
        }
        Ok(Self { members, n_classes })
    }


    /// Returns the number of voting members.
    pub fn n_members(&self) -> usize {
        self.members.len()
    }


    /// Returns a slice over the members, in construction order.
    pub fn members(&self) -> &[C] {
        &self.members[..]
    }


    /// Runs every member over `sample`,
    /// returning one prediction vector per member,
    /// index-aligned with the member order.
    ///
    /// The members are independent and share no mutable state,
    /// so they run in parallel. The output order is the member order
    /// regardless of scheduling.
    pub fn member_predictions(&self, sample: &Sample) -> Vec<Vec<usize>>
        where C: Sync,
    {
        self.members.par_iter()
            .map(|member| member.predict_all(sample))
            .collect()
    }


    /// Aggregates already computed per-member prediction vectors into
    /// the majority-vote consensus, one class id per instance.
    ///
    /// `predictions[k]` must be the output of member `k` over the same
    /// sample: one vector per member, all of equal length, every class
    /// id in `[0, n_classes)`. Violations fail with
    /// [`EvalError::LengthMismatch`] or
    /// [`EvalError::ClassCountMismatch`].
    pub fn vote(&self, predictions: &[Vec<usize>]) -> Result<Vec<usize>> {
        if predictions.len() != self.members.len() {
            return Err(EvalError::LengthMismatch {
                expected: self.members.len(),
                found: predictions.len(),
            });
        }

        let n_rows = predictions.first().map_or(0, Vec::len);
        for prediction in predictions {
            if prediction.len() != n_rows {
                return Err(EvalError::LengthMismatch {
                    expected: n_rows,
                    found: prediction.len(),
                });
            }
        }

        (0..n_rows)
            .map(|row| self.tally_row(predictions, row))
            .collect()
    }


    /// The winning class of one instance.
    fn tally_row(&self, predictions: &[Vec<usize>], row: usize)
        -> Result<usize>
    {
        let mut tally = vec![0_usize; self.n_classes];
        for (member, prediction) in self.members.iter().zip(predictions) {
            let class = prediction[row];
            let slot = tally.get_mut(class)
                .ok_or_else(|| EvalError::ClassCountMismatch {
                    name: member.name().to_string(),
                    expected: self.n_classes,
                    found: class + 1,
                })?;
            *slot += 1;
        }

        argmax(&tally).ok_or(EvalError::EmptyInput)
    }
}


impl<C: Classifier> Classifier for HardVoting<C> {
    fn n_classes(&self) -> usize {
        self.n_classes
    }


    fn predict(&self, sample: &Sample, row: usize) -> usize {
        let mut tally = vec![0_usize; self.n_classes];
        for member in &self.members {
            tally[member.predict(sample, row)] += 1;
        }

        argmax(&tally).expect("the ensemble is non-empty by construction")
    }


    fn name(&self) -> &str {
        "hard voting"
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    /// A test double that replays a fixed prediction vector.
    struct Fixed {
        n_classes: usize,
        outputs: Vec<usize>,
    }

    impl Classifier for Fixed {
        fn n_classes(&self) -> usize {
            self.n_classes
        }

        fn predict(&self, _sample: &Sample, row: usize) -> usize {
            self.outputs[row]
        }
    }

    fn fixed(n_classes: usize, outputs: &[usize]) -> Fixed {
        Fixed { n_classes, outputs: outputs.to_vec() }
    }

    #[test]
    fn majority_wins() {
        let ensemble = HardVoting::new(vec![
            fixed(3, &[0, 2]),
            fixed(3, &[1, 2]),
            fixed(3, &[1, 0]),
        ]).unwrap();

        let predictions = vec![vec![0, 2], vec![1, 2], vec![1, 0]];
        assert_eq!(ensemble.vote(&predictions).unwrap(), vec![1, 2]);
    }

    #[test]
    fn split_vote_resolves_to_the_lowest_class_id() {
        let ensemble = HardVoting::new(vec![
            fixed(2, &[1]),
            fixed(2, &[0]),
        ]).unwrap();

        let predictions = vec![vec![1], vec![0]];
        assert_eq!(ensemble.vote(&predictions).unwrap(), vec![0]);
    }

    #[test]
    fn voting_is_deterministic() {
        let ensemble = HardVoting::new(vec![
            fixed(4, &[3, 1, 2]),
            fixed(4, &[0, 1, 3]),
            fixed(4, &[3, 2, 2]),
        ]).unwrap();
        let predictions = vec![
            vec![3, 1, 2],
            vec![0, 1, 3],
            vec![3, 2, 2],
        ];

        let first = ensemble.vote(&predictions).unwrap();
        for _ in 0..10 {
            assert_eq!(ensemble.vote(&predictions).unwrap(), first);
        }
    }

    #[test]
    fn empty_member_set_is_rejected() {
        let result = HardVoting::<Fixed>::new(Vec::new());
        assert!(matches!(result, Err(EvalError::EmptyInput)));
    }

    #[test]
    fn disagreeing_class_counts_are_rejected() {
        let result = HardVoting::new(vec![
            fixed(3, &[0]),
            fixed(2, &[0]),
        ]);
        assert!(matches!(
            result,
            Err(EvalError::ClassCountMismatch { expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn misaligned_prediction_vectors_are_rejected() {
        let ensemble = HardVoting::new(vec![
            fixed(2, &[0, 1]),
            fixed(2, &[1]),
        ]).unwrap();

        let predictions = vec![vec![0, 1], vec![1]];
        assert!(matches!(
            ensemble.vote(&predictions),
            Err(EvalError::LengthMismatch { expected: 2, found: 1 })
        ));
    }
}
