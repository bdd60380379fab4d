//! The `map` combinator.

use std::fmt;
use std::iter::FusedIterator;

use crate::sequence::{CursorState, Sequence};

/// A sequence transforming every value of its upstream. Created by [`map`].
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    function: F,
}

/// Lazily transforms every value of `source` with `function`.
///
/// Order and length are preserved. `function` is called exactly once per
/// value, and only when a cursor pulls that value. A random-access upstream
/// keeps its random access.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::combinator::map;
/// use lazy_seq::sequence::Sequence;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let doubled = map(|value: i32| {
///     calls.set(calls.get() + 1);
///     value * 2
/// }, vec![1, 2, 3]);
///
/// assert_eq!(calls.get(), 0);
/// assert_eq!(doubled.cursor().collect::<Vec<_>>(), vec![2, 4, 6]);
/// assert_eq!(calls.get(), 3);
/// ```
#[inline]
pub const fn map<S, F, R>(function: F, source: S) -> Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R,
{
    Map { source, function }
}

impl<S, F, R> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R,
{
    type Item = R;
    type Cursor<'a>
        = MapCursor<'a, S::Cursor<'a>, F>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        MapCursor {
            upstream: CursorState::new(self.source.cursor()),
            function: &self.function,
        }
    }

    #[inline]
    fn random_access_len(&self) -> Option<usize> {
        self.source.random_access_len()
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<R> {
        self.source.item_at(index).map(&self.function)
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Cursor of a [`Map`].
pub struct MapCursor<'a, C, F> {
    upstream: CursorState<C>,
    function: &'a F,
}

impl<C, F, R> Iterator for MapCursor<'_, C, F>
where
    C: Iterator,
    F: Fn(C::Item) -> R,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<R> {
        self.upstream.pull().map(self.function)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<C, F, R> FusedIterator for MapCursor<'_, C, F>
where
    C: Iterator,
    F: Fn(C::Item) -> R,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_random_access() {
        let squares = map(|value: u32| value * value, vec![1, 2, 3]);
        assert_eq!(squares.random_access_len(), Some(3));
        assert_eq!(squares.item_at(2), Some(9));
        assert_eq!(squares.item_at(3), None);
    }

    #[test]
    fn test_map_changes_type() {
        let lengths = map(|word: &str| word.len(), vec!["a", "abc"]);
        assert_eq!(lengths.cursor().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_map_debug_shows_source() {
        let mapped = map(|value: i32| value, vec![1]);
        assert_eq!(format!("{mapped:?}"), "Map { source: [1], .. }");
    }
}
