//! Type-erased, shareable sequence handles.

use std::fmt;
use std::rc::Rc;

use super::cursor::BoxCursor;
use super::traits::Sequence;

/// Object-safe view of a [`Sequence`].
trait ErasedSequence<T> {
    fn erased_cursor(&self) -> BoxCursor<'_, T>;

    fn erased_random_access_len(&self) -> Option<usize>;

    fn erased_item_at(&self, index: usize) -> Option<T>;
}

impl<S: Sequence> ErasedSequence<S::Item> for S {
    #[inline]
    fn erased_cursor(&self) -> BoxCursor<'_, S::Item> {
        Box::new(self.cursor())
    }

    #[inline]
    fn erased_random_access_len(&self) -> Option<usize> {
        self.random_access_len()
    }

    #[inline]
    fn erased_item_at(&self, index: usize) -> Option<S::Item> {
        self.item_at(index)
    }
}

/// A cheaply clonable, type-erased sequence.
///
/// `Seq<T>` is what [`adapt`](crate::source::adapt) returns: the concrete
/// shape of the source is resolved once, at adaptation time, and hidden
/// behind this handle. Clones share the underlying sequence; each call to
/// [`cursor`](Sequence::cursor) still starts an independent traversal.
///
/// The random-access capability of the wrapped sequence is preserved.
///
/// `Seq<T>` is reference counted with [`Rc`] and is therefore neither
/// `Send` nor `Sync`.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{Seq, Sequence};
///
/// let seq = Seq::new(vec![1, 2, 3]);
/// let shared = seq.clone();
///
/// assert_eq!(seq.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(shared.cursor().sum::<i32>(), 6);
/// assert_eq!(shared.random_access_len(), Some(3));
/// ```
pub struct Seq<T> {
    inner: Rc<dyn ErasedSequence<T>>,
}

impl<T> Seq<T> {
    /// Wraps a sequence, erasing its concrete type.
    #[inline]
    pub fn new<S>(sequence: S) -> Self
    where
        S: Sequence<Item = T> + 'static,
    {
        Self {
            inner: Rc::new(sequence),
        }
    }

    /// Returns `true` if both handles share the same underlying sequence.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.inner, &other.inner)
    }
}

impl<T> Clone for Seq<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Seq")
            .field("random_access_len", &self.inner.erased_random_access_len())
            .finish_non_exhaustive()
    }
}

impl<T> Sequence for Seq<T> {
    type Item = T;
    type Cursor<'a>
        = BoxCursor<'a, T>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.inner.erased_cursor()
    }

    #[inline]
    fn random_access_len(&self) -> Option<usize> {
        self.inner.erased_random_access_len()
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<T> {
        self.inner.erased_item_at(index)
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = T;
    type IntoIter = BoxCursor<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

static_assertions::assert_not_impl_any!(Seq<i32>: Send, Sync);
static_assertions::assert_impl_all!(Seq<i32>: Clone, fmt::Debug);
