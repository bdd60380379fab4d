//! Reversal, with a random-access fast path.

use std::iter::FusedIterator;

use crate::sequence::Sequence;

/// A sequence yielding its upstream from the last value to the first.
/// Created by [`reverse`].
#[derive(Debug, Clone)]
pub struct Reverse<S> {
    source: S,
}

/// Lazily reverses `source`.
///
/// Two strategies are used, chosen per cursor:
///
/// - when `source` has random access (see
///   [`Sequence::random_access_len`]), values are fetched by descending
///   index with O(1) extra space
/// - otherwise the first pull drains `source` into a buffer, which is then
///   emptied from the end, using O(length) extra space
///
/// Nothing is traversed when `reverse` is called. The fallback never
/// terminates on an infinite sequence.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::reverse;
/// use lazy_seq::sequence::Sequence;
///
/// assert_eq!(reverse(vec![1, 2, 3]).cursor().collect::<Vec<_>>(), vec![3, 2, 1]);
/// assert_eq!(reverse("abc").cursor().collect::<String>(), "cba");
/// ```
#[inline]
pub const fn reverse<S: Sequence>(source: S) -> Reverse<S> {
    Reverse { source }
}

impl<S: Sequence> Sequence for Reverse<S> {
    type Item = S::Item;
    type Cursor<'a>
        = ReverseCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        let state = match self.source.random_access_len() {
            Some(remaining) => ReverseState::Indexed {
                source: &self.source,
                remaining,
            },
            None => ReverseState::Pending(self.source.cursor()),
        };
        ReverseCursor { state }
    }

    fn random_access_len(&self) -> Option<usize> {
        self.source.random_access_len()
    }

    fn item_at(&self, index: usize) -> Option<S::Item> {
        let len = self.source.random_access_len()?;
        let mirrored = len.checked_sub(index)?.checked_sub(1)?;
        self.source.item_at(mirrored)
    }
}

enum ReverseState<'a, S: Sequence + 'a> {
    Indexed { source: &'a S, remaining: usize },
    Pending(S::Cursor<'a>),
    Buffered(Vec<S::Item>),
    Done,
}

/// Cursor of a [`Reverse`].
pub struct ReverseCursor<'a, S: Sequence + 'a> {
    state: ReverseState<'a, S>,
}

impl<S: Sequence> ReverseCursor<'_, S> {
    /// Drains a pending upstream into the buffer.
    fn fill(&mut self) {
        if !matches!(self.state, ReverseState::Pending(_)) {
            return;
        }
        if let ReverseState::Pending(upstream) =
            std::mem::replace(&mut self.state, ReverseState::Done)
        {
            let buffer: Vec<S::Item> = upstream.collect();
            tracing::debug!(len = buffer.len(), "reverse buffered upstream without random access");
            self.state = ReverseState::Buffered(buffer);
        }
    }
}

impl<S: Sequence> Iterator for ReverseCursor<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.fill();
        let value = match &mut self.state {
            ReverseState::Indexed { source, remaining } => {
                remaining.checked_sub(1).and_then(|index| {
                    *remaining = index;
                    source.item_at(index)
                })
            }
            ReverseState::Buffered(buffer) => buffer.pop(),
            ReverseState::Pending(_) | ReverseState::Done => None,
        };
        if value.is_none() {
            self.state = ReverseState::Done;
        }
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            ReverseState::Indexed { remaining, .. } => (*remaining, Some(*remaining)),
            ReverseState::Pending(upstream) => upstream.size_hint(),
            ReverseState::Buffered(buffer) => (buffer.len(), Some(buffer.len())),
            ReverseState::Done => (0, Some(0)),
        }
    }
}

impl<S: Sequence> FusedIterator for ReverseCursor<'_, S> {}
