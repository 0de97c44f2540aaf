//! Defines some small functions used across this library.


/// Returns the index of the largest value in `values`,
/// or `None` when `values` is empty.
///
/// Ties resolve to the **first** index attaining the maximum:
/// the scan runs left to right and replaces the current winner
/// only on a strictly greater value.
#[inline]
pub fn argmax<T>(values: &[T]) -> Option<usize>
    where T: PartialOrd + Copy,
{
    let mut iter = values.iter().copied().enumerate();
    let (mut ix, mut max) = iter.next()?;

    for (i, v) in iter {
        if v > max {
            max = v;
            ix = i;
        }
    }
    Some(ix)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_picks_the_largest_value() {
        assert_eq!(argmax(&[0.1, 3.0, -2.0, 2.9]), Some(1));
        assert_eq!(argmax(&[5.0]), Some(0));
        assert_eq!(argmax(&[-3.0, -1.0, -2.0]), Some(1));
    }

    #[test]
    fn argmax_breaks_ties_by_first_index() {
        assert_eq!(argmax(&[1.0, 1.0, 1.0]), Some(0));
        assert_eq!(argmax(&[0.0, 2.0, 2.0]), Some(1));
        assert_eq!(argmax(&[2usize, 0, 2, 1]), Some(0));
    }

    #[test]
    fn argmax_rejects_empty_input() {
        let empty: [f64; 0] = [];
        assert_eq!(argmax(&empty), None);
    }

    #[test]
    fn argmax_works_on_integer_tallies() {
        assert_eq!(argmax(&[0usize, 4, 2]), Some(1));
    }
}
