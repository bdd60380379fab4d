//! Left and right folds.

use crate::sequence::Sequence;

use super::reverse::reverse;

/// Folds `source` from the left, seeding the accumulator with its first value.
///
/// Returns `None` for an empty sequence, in which case `function` is never
/// called. A single-value sequence yields that value unchanged.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::fold;
///
/// assert_eq!(fold(|acc, value| acc - value, vec![10, 3, 2]), Some(5));
/// assert_eq!(fold(|acc: i32, value| acc + value, Vec::<i32>::new()), None);
/// ```
pub fn fold<S, F>(function: F, source: S) -> Option<S::Item>
where
    S: Sequence,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let mut cursor = source.cursor();
    let first = cursor.next()?;
    Some(cursor.fold(first, function))
}

/// Folds `source` from the left, starting from `initial`.
///
/// An empty sequence returns `initial`.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::fold_with;
///
/// let text = fold_with(|acc: String, c| format!("{acc}{c}"), "abc", String::from(">"));
/// assert_eq!(text, ">abc");
/// ```
pub fn fold_with<S, F, R>(function: F, source: S, initial: R) -> R
where
    S: Sequence,
    F: FnMut(R, S::Item) -> R,
{
    source.cursor().fold(initial, function)
}

/// Folds `source` from the right, seeding the accumulator with its last value.
///
/// Equivalent to [`fold`] over [`reverse`]`(source)`: the accumulator is the
/// first argument of `function`. The traversal is iterative, so length is
/// bounded only by memory.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::fold_right;
///
/// assert_eq!(fold_right(|acc, value| acc - value, vec![2, 3, 10]), Some(5));
/// ```
pub fn fold_right<S, F>(function: F, source: S) -> Option<S::Item>
where
    S: Sequence,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    fold(function, reverse(source))
}

/// Folds `source` from the right, starting from `initial`.
///
/// Equivalent to [`fold_with`] over [`reverse`]`(source)`.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::fold_right_with;
///
/// let text = fold_right_with(|acc: String, c| format!("{acc}{c}"), "abc", String::new());
/// assert_eq!(text, "cba");
/// ```
pub fn fold_right_with<S, F, R>(function: F, source: S, initial: R) -> R
where
    S: Sequence,
    F: FnMut(R, S::Item) -> R,
{
    fold_with(function, reverse(source), initial)
}
