//! Positional combination of sequences.
//!
//! [`zipf_n`] is the general algorithm: it combines any number (at least
//! two) of same-typed sequences row by row. [`zipf`] is its two-input
//! specialization, statically typed so the inputs may differ in item type.
//! Both pull the inputs in order within a row, and stop as soon as one input
//! is exhausted, without pulling the inputs after it.
//!
//! [`zip`] and [`zip_n`] are the same combinators with row construction
//! (a tuple or a `Vec`) as the combining function.

use std::fmt;
use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::error::{Result, ValidationError};
use crate::sequence::{CursorState, Sequence};

/// Combining function building a pair.
pub type Pair<X, Y> = fn(X, Y) -> (X, Y);

/// Combining function keeping the row as is.
pub type Row<T> = fn(Vec<T>) -> Vec<T>;

#[inline]
fn pair<X, Y>(left: X, right: Y) -> (X, Y) {
    (left, right)
}

#[inline]
const fn row<T>(values: Vec<T>) -> Vec<T> {
    values
}

// =============================================================================
// Two inputs
// =============================================================================

/// Two sequences combined positionally by a function. Created by [`zipf`].
#[derive(Clone)]
pub struct ZipWith<A, B, F> {
    left: A,
    right: B,
    function: F,
}

/// Two sequences combined into pairs. Created by [`zip`].
pub type Zip<A, B> = ZipWith<A, B, Pair<<A as Sequence>::Item, <B as Sequence>::Item>>;

/// Lazily combines `left` and `right` positionally with `function`.
///
/// The result is as long as the shorter input.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::combinator::zipf;
/// use lazy_seq::sequence::Sequence;
///
/// let sums = zipf(|a: i32, b: i32| a + b, vec![1, 2, 3], vec![10, 20]);
/// assert_eq!(sums.cursor().collect::<Vec<_>>(), vec![11, 22]);
/// ```
#[inline]
pub const fn zipf<A, B, F, R>(function: F, left: A, right: B) -> ZipWith<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: Fn(A::Item, B::Item) -> R,
{
    ZipWith {
        left,
        right,
        function,
    }
}

/// Lazily pairs up the values of `left` and `right`.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::combinator::zip;
/// use lazy_seq::sequence::Sequence;
///
/// let pairs = zip(vec![1, 2, 3], vec!['a', 'b']);
/// assert_eq!(pairs.cursor().collect::<Vec<_>>(), vec![(1, 'a'), (2, 'b')]);
/// ```
#[inline]
pub fn zip<A: Sequence, B: Sequence>(left: A, right: B) -> Zip<A, B> {
    zipf(pair as Pair<A::Item, B::Item>, left, right)
}

impl<A, B, F, R> Sequence for ZipWith<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: Fn(A::Item, B::Item) -> R,
{
    type Item = R;
    type Cursor<'a>
        = ZipWithCursor<'a, A::Cursor<'a>, B::Cursor<'a>, F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ZipWithCursor {
            state: CursorState::new((self.left.cursor(), self.right.cursor())),
            function: &self.function,
        }
    }

    fn random_access_len(&self) -> Option<usize> {
        let left = self.left.random_access_len()?;
        let right = self.right.random_access_len()?;
        Some(left.min(right))
    }

    fn item_at(&self, index: usize) -> Option<R> {
        let left = self.left.item_at(index)?;
        let right = self.right.item_at(index)?;
        Some((self.function)(left, right))
    }
}

impl<A: fmt::Debug, B: fmt::Debug, F> fmt::Debug for ZipWith<A, B, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ZipWith")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}

/// Cursor of a [`ZipWith`].
pub struct ZipWithCursor<'a, L, Rt, F> {
    state: CursorState<(L, Rt)>,
    function: &'a F,
}

impl<L, Rt, F, R> Iterator for ZipWithCursor<'_, L, Rt, F>
where
    L: Iterator,
    Rt: Iterator,
    F: Fn(L::Item, Rt::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let (left, right) = self.state.active_mut()?;
        let values = left
            .next()
            .and_then(|left_value| right.next().map(|right_value| (left_value, right_value)));
        match values {
            Some((left_value, right_value)) => Some((self.function)(left_value, right_value)),
            None => {
                self.state.finish();
                None
            }
        }
    }
}

impl<L, Rt, F, R> FusedIterator for ZipWithCursor<'_, L, Rt, F>
where
    L: Iterator,
    Rt: Iterator,
    F: Fn(L::Item, Rt::Item) -> R,
{
}

// =============================================================================
// N inputs
// =============================================================================

/// Any number of same-typed sequences combined row by row. Created by
/// [`zipf_n`].
#[derive(Clone)]
pub struct ZipNWith<S, F> {
    sequences: Vec<S>,
    function: F,
}

/// Any number of same-typed sequences combined into rows. Created by
/// [`zip_n`].
pub type ZipN<S> = ZipNWith<S, Row<<S as Sequence>::Item>>;

/// Lazily combines `sequences` positionally, calling `function` with one row
/// of values at a time.
///
/// # Errors
///
/// Returns [`ValidationError::TooFewSequences`] when fewer than two
/// sequences are given.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::combinator::zipf_n;
/// use lazy_seq::sequence::Sequence;
///
/// let totals = zipf_n(
///     |row: Vec<i32>| row.iter().sum::<i32>(),
///     vec![vec![1, 2], vec![10, 20], vec![100, 200, 300]],
/// )?;
/// assert_eq!(totals.cursor().collect::<Vec<_>>(), vec![111, 222]);
///
/// assert!(zipf_n(|row: Vec<i32>| row, vec![vec![1]]).is_err());
/// # Ok::<(), lazy_seq::error::ValidationError>(())
/// ```
pub fn zipf_n<S, F, R, I>(function: F, sequences: I) -> Result<ZipNWith<S, F>>
where
    S: Sequence,
    F: Fn(Vec<S::Item>) -> R,
    I: IntoIterator<Item = S>,
{
    let sequences: Vec<S> = sequences.into_iter().collect();
    if sequences.len() < 2 {
        tracing::debug!(count = sequences.len(), "zip rejected: too few sequences");
        return Err(ValidationError::TooFewSequences {
            count: sequences.len(),
        });
    }
    Ok(ZipNWith {
        sequences,
        function,
    })
}

/// Lazily combines `sequences` into rows.
///
/// # Errors
///
/// Returns [`ValidationError::TooFewSequences`] when fewer than two
/// sequences are given.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::combinator::zip_n;
/// use lazy_seq::sequence::Sequence;
///
/// let rows = zip_n(vec!["ab", "xyz", "123"])?;
/// assert_eq!(
///     rows.cursor().collect::<Vec<_>>(),
///     vec![vec!['a', 'x', '1'], vec!['b', 'y', '2']]
/// );
/// # Ok::<(), lazy_seq::error::ValidationError>(())
/// ```
pub fn zip_n<S, I>(sequences: I) -> Result<ZipN<S>>
where
    S: Sequence,
    I: IntoIterator<Item = S>,
{
    zipf_n(row as Row<S::Item>, sequences)
}

impl<S, F> ZipNWith<S, F> {
    /// Returns the number of combined sequences.
    #[inline]
    pub fn arity(&self) -> usize {
        self.sequences.len()
    }
}

impl<S, F, R> Sequence for ZipNWith<S, F>
where
    S: Sequence,
    F: Fn(Vec<S::Item>) -> R,
{
    type Item = R;
    type Cursor<'a>
        = ZipNCursor<'a, S::Cursor<'a>, F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ZipNCursor {
            state: CursorState::new(self.sequences.iter().map(Sequence::cursor).collect()),
            function: &self.function,
        }
    }

    fn random_access_len(&self) -> Option<usize> {
        self.sequences
            .iter()
            .map(Sequence::random_access_len)
            .try_fold(usize::MAX, |shortest, len| Some(shortest.min(len?)))
    }

    fn item_at(&self, index: usize) -> Option<R> {
        let values: Option<Vec<S::Item>> = self
            .sequences
            .iter()
            .map(|sequence| sequence.item_at(index))
            .collect();
        values.map(&self.function)
    }
}

impl<S: fmt::Debug, F> fmt::Debug for ZipNWith<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ZipNWith")
            .field("sequences", &self.sequences)
            .finish_non_exhaustive()
    }
}

/// Cursor of a [`ZipNWith`].
pub struct ZipNCursor<'a, C, F> {
    state: CursorState<SmallVec<[C; 4]>>,
    function: &'a F,
}

impl<C, F, R> Iterator for ZipNCursor<'_, C, F>
where
    C: Iterator,
    F: Fn(Vec<C::Item>) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let cursors = self.state.active_mut()?;
        let values: Option<Vec<C::Item>> = cursors.iter_mut().map(Iterator::next).collect();
        match values {
            Some(values) => Some((self.function)(values)),
            None => {
                self.state.finish();
                None
            }
        }
    }
}

impl<C, F, R> FusedIterator for ZipNCursor<'_, C, F>
where
    C: Iterator,
    F: Fn(Vec<C::Item>) -> R,
{
}
