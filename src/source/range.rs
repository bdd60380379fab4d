//! Numeric range generators.

use std::iter::FusedIterator;

use crate::number::Number;
use crate::sequence::Sequence;

/// A lazy, restartable arithmetic progression.
///
/// The end is exclusive. The range ascends when `end >= start` and descends
/// otherwise; the step is always a magnitude (its sign is ignored, and a zero
/// step counts as one). Without an end the range ascends forever, or until
/// the integer type overflows.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::Sequence;
/// use lazy_seq::source::{range, range_from, Range};
///
/// assert_eq!(range(0, 4).cursor().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
/// assert_eq!(range(3, 0).cursor().collect::<Vec<_>>(), vec![3, 2, 1]);
/// assert_eq!(
///     range(0, 20).with_step(-5).cursor().collect::<Vec<_>>(),
///     vec![0, 5, 10, 15]
/// );
/// assert_eq!(range_from(7_u8).cursor().take(2).collect::<Vec<_>>(), vec![7, 8]);
/// assert_eq!(Range::<i64>::default().cursor().nth(10), Some(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<N> {
    start: N,
    end: Option<N>,
    step: N,
}

impl<N: Number> Range<N> {
    /// Creates a range from `start` towards `end` with step one.
    ///
    /// `None` for `end` means positive infinity.
    #[inline]
    pub const fn new(start: N, end: Option<N>) -> Self {
        Self {
            start,
            end,
            step: N::ONE,
        }
    }

    /// Replaces the step, keeping only its magnitude.
    #[inline]
    #[must_use]
    pub fn with_step(self, step: N) -> Self {
        Self {
            step: normalize_step(step),
            ..self
        }
    }

    /// Returns the first value of the range.
    #[inline]
    pub const fn start(&self) -> N {
        self.start
    }

    /// Returns the exclusive end, `None` when unbounded.
    #[inline]
    pub const fn end(&self) -> Option<N> {
        self.end
    }

    /// Returns the step magnitude.
    #[inline]
    pub const fn step(&self) -> N {
        self.step
    }

    /// Returns `true` when the range counts down.
    #[inline]
    pub fn is_descending(&self) -> bool {
        matches!(self.end, Some(end) if end < self.start)
    }
}

impl<N: Number> Default for Range<N> {
    /// The unbounded range `0, 1, 2, ...`.
    fn default() -> Self {
        Self::new(N::ZERO, None)
    }
}

#[inline]
fn normalize_step<N: Number>(step: N) -> N {
    let magnitude = step.magnitude();
    // `!(m > 0)` also catches NaN.
    if magnitude > N::ZERO {
        magnitude
    } else {
        N::ONE
    }
}

/// Creates the range `start, start ± 1, ...` up to, excluding, `end`.
#[inline]
pub const fn range<N: Number>(start: N, end: N) -> Range<N> {
    Range::new(start, Some(end))
}

/// Creates the unbounded ascending range starting at `start`.
#[inline]
pub const fn range_from<N: Number>(start: N) -> Range<N> {
    Range::new(start, None)
}

impl<N: Number> Sequence for Range<N> {
    type Item = N;
    type Cursor<'a>
        = RangeCursor<N>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        RangeCursor {
            next: Some(self.start),
            end: self.end,
            step: self.step,
            descending: self.is_descending(),
        }
    }
}

/// Cursor over a [`Range`].
///
/// `next` is the two-state machine: `Some` while active, `None` once done.
#[derive(Debug, Clone)]
pub struct RangeCursor<N> {
    next: Option<N>,
    end: Option<N>,
    step: N,
    descending: bool,
}

impl<N: Number> Iterator for RangeCursor<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.next?;
        let in_bounds = match self.end {
            None => true,
            Some(end) if self.descending => current > end,
            Some(end) => current < end,
        };
        if !in_bounds {
            self.next = None;
            return None;
        }
        self.next = if self.descending {
            current.checked_sub(self.step)
        } else {
            current.checked_add(self.step)
        };
        Some(current)
    }
}

impl<N: Number> FusedIterator for RangeCursor<N> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect<N: Number>(range: Range<N>) -> Vec<N> {
        range.cursor().collect()
    }

    #[rstest]
    #[case(range(0, 4), vec![0, 1, 2, 3])]
    #[case(range(2, 5), vec![2, 3, 4])]
    #[case(range(-3, 3), vec![-3, -2, -1, 0, 1, 2])]
    #[case(range(0, 20).with_step(5), vec![0, 5, 10, 15])]
    #[case(range(5, 5), vec![])]
    #[case(range(5, 0).with_step(2), vec![5, 3, 1])]
    #[case(range(0, 3).with_step(0), vec![0, 1, 2])]
    fn test_integer_ranges(#[case] input: Range<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(collect(input), expected);
    }

    #[test]
    fn test_unsigned_descending_stops_at_zero() {
        assert_eq!(collect(range(3_u32, 0)), vec![3, 2, 1]);
        assert_eq!(collect(range(5_u8, 0).with_step(10)), vec![5]);
    }

    #[test]
    fn test_unbounded_range_ends_on_overflow() {
        assert_eq!(collect(range_from(254_u8)), vec![254, 255]);
    }

    #[test]
    fn test_float_range() {
        assert_eq!(collect(range(0.0, 1.0).with_step(0.25)), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_float_nan_step_counts_as_one() {
        assert_eq!(range(0.0, 2.0).with_step(f64::NAN).step(), 1.0);
    }

    #[test]
    fn test_infinite_float_end_is_unbounded() {
        let values: Vec<f64> = range(0.0, f64::INFINITY).cursor().take(3).collect();
        assert_eq!(values, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_range_is_restartable() {
        let range = range(1, 3);
        assert_eq!(collect(range), collect(range));
        assert!(!range.is_descending());
        assert_eq!(range.start(), 1);
        assert_eq!(range.end(), Some(3));
    }

    #[test]
    fn test_cursor_is_fused() {
        let mut cursor = range(0, 1).cursor();
        assert_eq!(cursor.next(), Some(0));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }
}
