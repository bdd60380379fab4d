//! The `filter` combinator.

use std::fmt;
use std::iter::FusedIterator;

use crate::sequence::{CursorState, Sequence};

/// A sequence keeping the upstream values matching a predicate. Created by
/// [`filter`].
#[derive(Clone)]
pub struct Filter<S, F> {
    source: S,
    predicate: F,
}

/// Lazily keeps the values of `source` for which `predicate` returns `true`.
///
/// Order is preserved. `predicate` is called once per upstream value, when a
/// cursor pulls it.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::combinator::filter;
/// use lazy_seq::sequence::Sequence;
///
/// let evens = filter(|value: &i32| value % 2 == 0, vec![1, 2, 3, 4]);
/// assert_eq!(evens.cursor().collect::<Vec<_>>(), vec![2, 4]);
/// ```
#[inline]
pub const fn filter<S, F>(predicate: F, source: S) -> Filter<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    Filter { source, predicate }
}

impl<S, F> Sequence for Filter<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = FilterCursor<'a, S::Cursor<'a>, F>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        FilterCursor {
            upstream: CursorState::new(self.source.cursor()),
            predicate: &self.predicate,
        }
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Filter<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Cursor of a [`Filter`].
pub struct FilterCursor<'a, C, F> {
    upstream: CursorState<C>,
    predicate: &'a F,
}

impl<C, F> Iterator for FilterCursor<'_, C, F>
where
    C: Iterator,
    F: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        while let Some(value) = self.upstream.pull() {
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.upstream.size_hint().1)
    }
}

impl<C, F> FusedIterator for FilterCursor<'_, C, F>
where
    C: Iterator,
    F: Fn(&C::Item) -> bool,
{
}
