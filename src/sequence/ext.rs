//! Method-chaining forms of the lazy combinators.

use crate::combinator::{self, Filter, Map, Skip, Take, Zip, ZipWith};
#[cfg(feature = "consumer")]
use crate::consumer::{self, Reverse};

use super::erased::Seq;
use super::traits::Sequence;

/// Extension methods available on every [`Sequence`].
///
/// Each method is the receiver-first spelling of the free function of the
/// same name in [`combinator`](crate::combinator), so pipelines read left to
/// right. Like the free functions, none of them traverses anything.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{Sequence, SequenceExt};
/// use lazy_seq::source::range_from;
///
/// let pipeline = range_from(1_u32)
///     .filter(|value: &u32| value % 3 == 0)
///     .map(|value: u32| value * 2)
///     .skip(1)
///     .take(3);
///
/// assert_eq!(pipeline.cursor().collect::<Vec<_>>(), vec![12, 18, 24]);
/// ```
pub trait SequenceExt: Sequence + Sized {
    /// See [`combinator::map`].
    #[inline]
    fn map<F, R>(self, function: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> R,
    {
        combinator::map(function, self)
    }

    /// See [`combinator::filter`].
    #[inline]
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: Fn(&Self::Item) -> bool,
    {
        combinator::filter(predicate, self)
    }

    /// See [`combinator::take`].
    #[inline]
    fn take(self, count: usize) -> Take<Self> {
        combinator::take(count, self)
    }

    /// See [`combinator::skip`].
    #[inline]
    fn skip(self, count: usize) -> Skip<Self> {
        combinator::skip(count, self)
    }

    /// See [`combinator::zip`].
    #[inline]
    fn zip<B: Sequence>(self, other: B) -> Zip<Self, B> {
        combinator::zip(self, other)
    }

    /// See [`combinator::zipf`].
    #[inline]
    fn zip_with<B, F, R>(self, other: B, function: F) -> ZipWith<Self, B, F>
    where
        B: Sequence,
        F: Fn(Self::Item, B::Item) -> R,
    {
        combinator::zipf(function, self, other)
    }

    /// See [`consumer::reverse`].
    #[cfg(feature = "consumer")]
    #[inline]
    fn reversed(self) -> Reverse<Self> {
        consumer::reverse(self)
    }

    /// Erases the concrete pipeline type behind a shareable [`Seq`].
    #[inline]
    fn boxed(self) -> Seq<Self::Item>
    where
        Self: 'static,
    {
        Seq::new(self)
    }
}

impl<S: Sequence> SequenceExt for S {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_matches_free_functions() {
        let chained = vec![1, 2, 3, 4, 5].map(|value: i32| value + 1).skip(1).take(2);
        let nested = combinator::take(
            2,
            combinator::skip(1, combinator::map(|value: i32| value + 1, vec![1, 2, 3, 4, 5])),
        );
        assert_eq!(
            chained.cursor().collect::<Vec<_>>(),
            nested.cursor().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_zip_with() {
        let sums = vec![1, 2].zip_with(vec![10, 20, 30], |a: i32, b: i32| a + b);
        assert_eq!(sums.cursor().collect::<Vec<_>>(), vec![11, 22]);
    }

    #[test]
    fn test_boxed_keeps_random_access() {
        let erased = vec!['a', 'b'].map(|c: char| c.to_ascii_uppercase()).boxed();
        assert_eq!(erased.random_access_len(), Some(2));
        assert_eq!(erased.item_at(1), Some('B'));
    }

    #[cfg(feature = "consumer")]
    #[test]
    fn test_reversed() {
        let reversed = "abc".zip(vec![1, 2, 3]).reversed();
        assert_eq!(
            reversed.cursor().collect::<Vec<_>>(),
            vec![('c', 3), ('b', 2), ('a', 1)]
        );
    }
}
