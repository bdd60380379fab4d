//! The `skip` combinator.

use std::iter::FusedIterator;

use crate::sequence::{CursorState, Sequence};

/// A sequence without the first `count` upstream values. Created by [`skip`].
#[derive(Debug, Clone)]
pub struct Skip<S> {
    source: S,
    count: usize,
}

/// Lazily discards the first `count` values of `source`, then forwards the
/// rest unchanged and in order.
///
/// If `source` has fewer than `count` values the result is empty. The
/// discarding happens on the first pull, not here.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::combinator::skip;
/// use lazy_seq::sequence::Sequence;
///
/// let rest = skip(2, vec![1, 2, 3, 4]);
/// assert_eq!(rest.cursor().collect::<Vec<_>>(), vec![3, 4]);
/// assert_eq!(skip(5, vec![1]).cursor().next(), None);
/// ```
#[inline]
pub const fn skip<S: Sequence>(count: usize, source: S) -> Skip<S> {
    Skip { source, count }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor<'a>
        = SkipCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SkipCursor {
            upstream: CursorState::new(self.source.cursor()),
            pending: self.count,
        }
    }

    fn random_access_len(&self) -> Option<usize> {
        self.source
            .random_access_len()
            .map(|len| len.saturating_sub(self.count))
    }

    fn item_at(&self, index: usize) -> Option<S::Item> {
        self.source.item_at(index.checked_add(self.count)?)
    }
}

/// Cursor of a [`Skip`].
#[derive(Debug, Clone)]
pub struct SkipCursor<C> {
    upstream: CursorState<C>,
    pending: usize,
}

impl<C: Iterator> Iterator for SkipCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        let pending = std::mem::take(&mut self.pending);
        if pending > 0 {
            return self.upstream.nth(pending);
        }
        self.upstream.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.upstream.size_hint();
        (
            lower.saturating_sub(self.pending),
            upper.map(|upper| upper.saturating_sub(self.pending)),
        )
    }
}

impl<C: Iterator> FusedIterator for SkipCursor<C> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_zero_forwards_everything() {
        assert_eq!(skip(0, vec![1, 2]).cursor().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_skip_random_access_is_offset() {
        let rest = skip(1, vec!['a', 'b', 'c']);
        assert_eq!(rest.random_access_len(), Some(2));
        assert_eq!(rest.item_at(0), Some('b'));
        assert_eq!(rest.item_at(usize::MAX), None);
        assert_eq!(skip(4, vec!['a']).random_access_len(), Some(0));
    }

    #[test]
    fn test_skip_past_end_stays_done() {
        let rest = skip(3, vec![1]);
        let mut cursor = rest.cursor();
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }
}
