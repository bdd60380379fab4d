//! Consumers whose combining step can fail.

use crate::sequence::Sequence;

/// Folds `source` from the left with a fallible step, stopping at the first
/// error.
///
/// Values after the failing one are never pulled.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::try_fold;
///
/// let checked = try_fold(|acc: u8, value: u8| acc.checked_add(value).ok_or("overflow"), vec![100, 100], 0);
/// assert_eq!(checked, Ok(200));
///
/// let overflowed = try_fold(|acc: u8, value: u8| acc.checked_add(value).ok_or("overflow"), vec![200, 100], 0);
/// assert_eq!(overflowed, Err("overflow"));
/// ```
///
/// # Errors
///
/// Returns the first error produced by `function`.
pub fn try_fold<S, F, R, E>(function: F, source: S, initial: R) -> Result<R, E>
where
    S: Sequence,
    F: FnMut(R, S::Item) -> Result<R, E>,
{
    source.cursor().try_fold(initial, function)
}

/// Collects a sequence of results into a `Vec`, stopping at the first error.
///
/// # Errors
///
/// Returns the first `Err` value found in `source`.
pub fn try_collect<S, T, E>(source: S) -> Result<Vec<T>, E>
where
    S: Sequence<Item = Result<T, E>>,
{
    source.cursor().collect()
}
