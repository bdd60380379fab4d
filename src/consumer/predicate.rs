//! Short-circuiting queries.

use crate::sequence::Sequence;

/// Returns `true` if `predicate` holds for some value of `source`.
///
/// Stops at the first match. An empty sequence gives `false`.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::any;
/// use lazy_seq::source::range_from;
///
/// // Terminates on an infinite sequence because it stops at the first match.
/// assert!(any(|value: u32| value > 100, range_from(0_u32)));
/// assert!(!any(|value: i32| value > 0, Vec::<i32>::new()));
/// ```
pub fn any<S, F>(predicate: F, source: S) -> bool
where
    S: Sequence,
    F: FnMut(S::Item) -> bool,
{
    source.cursor().any(predicate)
}

/// Returns `true` if `predicate` holds for every value of `source`.
///
/// Stops at the first mismatch. An empty sequence gives `true`.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::all;
///
/// assert!(all(|value: i32| value > 0, vec![1, 2, 3]));
/// assert!(all(|value: i32| value > 0, Vec::<i32>::new()));
/// ```
pub fn all<S, F>(predicate: F, source: S) -> bool
where
    S: Sequence,
    F: FnMut(S::Item) -> bool,
{
    source.cursor().all(predicate)
}

/// Returns `true` if `source` yields no value. Pulls at most one value.
pub fn is_empty<S: Sequence>(source: S) -> bool {
    source.cursor().next().is_none()
}

/// Returns the value at zero-based position `index`, or `None` if `source`
/// is shorter.
///
/// The traversal is linear and stops at `index`.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::nth;
///
/// assert_eq!(nth(1, "abc"), Some('b'));
/// assert_eq!(nth(3, "abc"), None);
/// ```
pub fn nth<S: Sequence>(index: usize, source: S) -> Option<S::Item> {
    source.cursor().nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::range_from;
    use rstest::rstest;
    use std::cell::Cell;

    #[test]
    fn test_any_stops_at_first_match() {
        let calls = Cell::new(0);
        let found = any(
            |value: i32| {
                calls.set(calls.get() + 1);
                value == 2
            },
            vec![1, 2, 3, 4],
        );
        assert!(found);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_all_stops_at_first_mismatch() {
        let calls = Cell::new(0);
        let holds = all(
            |value: i32| {
                calls.set(calls.get() + 1);
                value < 2
            },
            vec![1, 2, 3, 4],
        );
        assert!(!holds);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    #[case(Vec::new(), true)]
    #[case(vec![0], false)]
    fn test_is_empty(#[case] values: Vec<i32>, #[case] expected: bool) {
        assert_eq!(is_empty(values), expected);
    }

    #[test]
    fn test_is_empty_on_infinite_sequence() {
        assert!(!is_empty(range_from(0_u8)));
    }

    #[test]
    fn test_nth_on_infinite_sequence() {
        assert_eq!(nth(1_000, range_from(0_u64)), Some(1_000));
    }
}
