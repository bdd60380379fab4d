//! The `Sequence` capability.

use std::rc::Rc;

use super::cursor::Cursor;

/// Anything able to produce a fresh traversal [`Cursor`] over its values.
///
/// A sequence is a capability, not a container: it may be computed lazily and
/// may be infinite. Each call to [`cursor`](Sequence::cursor) starts an
/// independent traversal, so a sequence can be traversed any number of times.
/// The only exception is a single-use generator source
/// (see [`Source::Generator`](crate::source::Source::Generator)), whose second
/// and later cursors are immediately done.
///
/// # Random access
///
/// Sequences that know their length and can fetch an element by position in
/// constant time advertise it through [`random_access_len`] and [`item_at`].
/// Consumers such as [`reverse`](crate::consumer::reverse) probe this
/// capability to avoid buffering.
///
/// [`random_access_len`]: Sequence::random_access_len
/// [`item_at`]: Sequence::item_at
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::Sequence;
///
/// let values = vec![1, 2, 3];
/// let first: Vec<i32> = values.cursor().collect();
/// let second: Vec<i32> = values.cursor().collect();
/// assert_eq!(first, second);
/// assert_eq!(values.random_access_len(), Some(3));
/// assert_eq!(values.item_at(1), Some(2));
/// ```
pub trait Sequence {
    /// The type of the values produced.
    type Item;

    /// The cursor type, borrowing from the sequence.
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    /// Starts a new traversal.
    ///
    /// Creating a cursor never pulls a value.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Returns the length if it is known in O(1) and [`item_at`](Sequence::item_at)
    /// is O(1) as well.
    ///
    /// The default reports no random-access capability.
    #[inline]
    fn random_access_len(&self) -> Option<usize> {
        None
    }

    /// Returns the value at `index` for random-access sequences.
    ///
    /// Only meaningful when [`random_access_len`](Sequence::random_access_len)
    /// returns `Some`. The default returns `None`.
    #[inline]
    fn item_at(&self, index: usize) -> Option<Self::Item> {
        let _ = index;
        None
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }

    #[inline]
    fn random_access_len(&self) -> Option<usize> {
        (**self).random_access_len()
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<Self::Item> {
        (**self).item_at(index)
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }

    #[inline]
    fn random_access_len(&self) -> Option<usize> {
        (**self).random_access_len()
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<Self::Item> {
        (**self).item_at(index)
    }
}

impl<S: Sequence + ?Sized> Sequence for Rc<S> {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }

    #[inline]
    fn random_access_len(&self) -> Option<usize> {
        (**self).random_access_len()
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<Self::Item> {
        (**self).item_at(index)
    }
}
