//! Numeric folds over [`Number`] sequences.
//!
//! All four return [`Number::ZERO`] for an empty sequence, and also when a
//! floating point reduction ends in NaN.

use crate::number::Number;
use crate::sequence::Sequence;

use super::fold::fold;

/// Maps an empty (`None`) or NaN reduction to zero.
#[inline]
fn or_zero<N: Number>(result: Option<N>) -> N {
    result
        .filter(|value| !value.is_nan())
        .unwrap_or(N::ZERO)
}

/// Returns the smallest value, or zero for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::min;
///
/// assert_eq!(min(vec![3, -1, 2]), -1);
/// assert_eq!(min(Vec::<i32>::new()), 0);
/// ```
pub fn min<S>(source: S) -> S::Item
where
    S: Sequence,
    S::Item: Number,
{
    or_zero(fold(|acc, value| if acc < value { acc } else { value }, source))
}

/// Returns the largest value, or zero for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::max;
///
/// assert_eq!(max(vec![3.5, -1.0, 2.0]), 3.5);
/// ```
pub fn max<S>(source: S) -> S::Item
where
    S: Sequence,
    S::Item: Number,
{
    or_zero(fold(|acc, value| if acc < value { value } else { acc }, source))
}

/// Returns the sum of all values, or zero for an empty sequence.
///
/// Integer overflow follows the element type's `+` operator.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::sum;
///
/// assert_eq!(sum(vec![1, 2, 3, 4]), 10);
/// ```
pub fn sum<S>(source: S) -> S::Item
where
    S: Sequence,
    S::Item: Number,
{
    or_zero(fold(|acc, value| acc + value, source))
}

/// Returns the running pairwise mean: each step replaces the accumulator
/// with `(acc + value) / 2`.
///
/// This weighs later values more heavily than earlier ones and equals the
/// arithmetic mean only for two values or constant input. Each step uses
/// [`Number::midpoint`], so integer input never overflows. Zero for an empty
/// sequence.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::avg;
///
/// assert_eq!(avg(vec![2.0, 4.0]), 3.0);
/// assert_eq!(avg(vec![0.0, 0.0, 4.0]), 2.0);
/// ```
pub fn avg<S>(source: S) -> S::Item
where
    S: Sequence,
    S::Item: Number,
{
    or_zero(fold(<S::Item as Number>::midpoint, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::take;
    use crate::source::range;
    use rstest::rstest;

    #[rstest]
    #[case(vec![4, 1, 3], 1, 4, 8)]
    #[case(vec![-2], -2, -2, -2)]
    #[case(vec![], 0, 0, 0)]
    fn test_integer_folds(
        #[case] values: Vec<i32>,
        #[case] smallest: i32,
        #[case] largest: i32,
        #[case] total: i32,
    ) {
        assert_eq!(min(values.clone()), smallest);
        assert_eq!(max(values.clone()), largest);
        assert_eq!(sum(values), total);
    }

    #[test]
    fn test_avg_is_pairwise() {
        assert!((avg(vec![1.0_f64, 2.0, 4.0]) - 2.75).abs() < f64::EPSILON);
        assert_eq!(avg(vec![6_u32, 6, 6]), 6);
    }

    #[rstest]
    #[case(vec![i32::MAX, i32::MAX], i32::MAX)]
    #[case(vec![i32::MIN, i32::MIN, i32::MIN], i32::MIN)]
    #[case(vec![i32::MAX - 1, i32::MAX], i32::MAX - 1)]
    #[case(vec![-3, 2], 0)]
    fn test_avg_of_large_signed_values(#[case] values: Vec<i32>, #[case] expected: i32) {
        assert_eq!(avg(values), expected);
    }

    #[test]
    fn test_avg_of_large_unsigned_values() {
        assert_eq!(avg(vec![200_u8, 100]), 150);
        assert_eq!(avg(vec![u64::MAX, u64::MAX, u64::MAX]), u64::MAX);
    }

    #[test]
    fn test_nan_result_is_zero() {
        assert_eq!(sum(vec![f64::NAN]), 0.0);
        assert_eq!(sum(vec![1.0_f64, f64::NAN]), 0.0);
        assert_eq!(avg(vec![f32::NAN, 2.0]), 0.0);
    }

    #[test]
    fn test_infinite_result_is_kept() {
        assert_eq!(sum(vec![f64::INFINITY, 1.0]), f64::INFINITY);
    }

    #[test]
    fn test_sum_over_range() {
        assert_eq!(sum(range(1_u64, 101)), 5_050);
        assert_eq!(sum(take(4, range(0.5_f64, 10.0))), 8.0);
    }
}
