//! The `take` combinator.

use std::iter::FusedIterator;

use crate::sequence::{CursorState, Sequence};

/// A sequence of at most the first `count` upstream values. Created by
/// [`take`].
#[derive(Debug, Clone)]
pub struct Take<S> {
    source: S,
    count: usize,
}

/// Lazily yields at most the first `count` values of `source`.
///
/// `take(0, s)` yields nothing and never starts an upstream traversal. A
/// `count` beyond the upstream length yields everything available. Once
/// `count` values have been produced the upstream cursor is dropped without
/// pulling any further, which makes `take` the way to bound infinite
/// sequences.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::combinator::take;
/// use lazy_seq::sequence::Sequence;
/// use lazy_seq::source::Range;
///
/// let first = take(4, Range::<u64>::default());
/// assert_eq!(first.cursor().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
/// assert_eq!(take(10, vec!['a']).cursor().count(), 1);
/// ```
#[inline]
pub const fn take<S: Sequence>(count: usize, source: S) -> Take<S> {
    Take { source, count }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor<'a>
        = TakeCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        let upstream = if self.count == 0 {
            CursorState::Done
        } else {
            CursorState::new(self.source.cursor())
        };
        TakeCursor {
            upstream,
            remaining: self.count,
        }
    }

    fn random_access_len(&self) -> Option<usize> {
        self.source
            .random_access_len()
            .map(|len| len.min(self.count))
    }

    fn item_at(&self, index: usize) -> Option<S::Item> {
        if index < self.count {
            self.source.item_at(index)
        } else {
            None
        }
    }
}

/// Cursor of a [`Take`].
#[derive(Debug, Clone)]
pub struct TakeCursor<C> {
    upstream: CursorState<C>,
    remaining: usize,
}

impl<C: Iterator> Iterator for TakeCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.remaining == 0 {
            self.upstream.finish();
            return None;
        }
        let value = self.upstream.pull()?;
        self.remaining -= 1;
        if self.remaining == 0 {
            self.upstream.finish();
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.upstream.is_done() {
            return (0, Some(0));
        }
        let (lower, upper) = self.upstream.size_hint();
        let upper = upper.map_or(self.remaining, |upper| upper.min(self.remaining));
        (lower.min(self.remaining), Some(upper))
    }
}

impl<C: Iterator> FusedIterator for TakeCursor<C> {}
