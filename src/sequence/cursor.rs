//! Cursors and the two-state traversal machine.
//!
//! A cursor is a single-owner, single-pass traversal over a sequence. In Rust
//! terms it is a [`FusedIterator`]: `next` produces the next value, and once
//! it returns `None` it keeps returning `None`.
//!
//! Upstream iterators handed to this crate are not required to be fused, so
//! every cursor built here tracks its state explicitly with
//! [`CursorState`].

use std::iter::FusedIterator;

/// A stateful single-pass traversal whose completion is sticky.
///
/// Blanket-implemented for every [`FusedIterator`].
pub trait Cursor: FusedIterator {}

impl<I: FusedIterator + ?Sized> Cursor for I {}

/// A type-erased cursor borrowing from its sequence for `'a`.
pub type BoxCursor<'a, T> = Box<dyn Cursor<Item = T> + 'a>;

/// The state of a cursor: either still pulling from an upstream, or done.
///
/// `Done` is terminal. Moving to `Done` drops the upstream value, which is
/// how abandoned upstream cursors are released.
///
/// `CursorState` is itself a cursor over its upstream, so wrapping any
/// iterator in it yields a fused traversal.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::CursorState;
///
/// let mut state = CursorState::new(vec![1, 2].into_iter());
/// assert_eq!(state.pull(), Some(1));
/// assert_eq!(state.pull(), Some(2));
/// assert_eq!(state.pull(), None);
/// assert!(state.is_done());
/// assert_eq!(state.pull(), None);
/// ```
#[derive(Debug, Clone)]
pub enum CursorState<C> {
    /// The upstream may still produce values.
    Active(C),
    /// The traversal has completed or been abandoned.
    Done,
}

impl<C> CursorState<C> {
    /// Starts a traversal over `upstream`.
    #[inline]
    pub const fn new(upstream: C) -> Self {
        Self::Active(upstream)
    }

    /// Returns `true` once the traversal has reached its terminal state.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Moves to the terminal state, dropping the upstream.
    #[inline]
    pub fn finish(&mut self) {
        *self = Self::Done;
    }

    /// Returns the upstream while the traversal is active.
    #[inline]
    pub const fn active_mut(&mut self) -> Option<&mut C> {
        match self {
            Self::Active(upstream) => Some(upstream),
            Self::Done => None,
        }
    }
}

impl<C: Iterator> CursorState<C> {
    /// Pulls one value from the upstream, finishing when it is exhausted.
    #[inline]
    pub fn pull(&mut self) -> Option<C::Item> {
        let Self::Active(upstream) = self else {
            return None;
        };
        let value = upstream.next();
        if value.is_none() {
            self.finish();
        }
        value
    }
}

impl<C: Iterator> Iterator for CursorState<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Active(upstream) => upstream.size_hint(),
            Self::Done => (0, Some(0)),
        }
    }
}

impl<C: Iterator> FusedIterator for CursorState<C> {}
