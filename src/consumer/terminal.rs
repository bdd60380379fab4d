//! Consumers that traverse a whole sequence.

use std::fmt::Display;

use crate::sequence::Sequence;

/// Calls `action` once for every value of `source`, in order.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::apply;
///
/// let mut seen = Vec::new();
/// apply(|value: i32| seen.push(value * 2), vec![1, 2, 3]);
/// assert_eq!(seen, vec![2, 4, 6]);
/// ```
pub fn apply<S, F>(action: F, source: S)
where
    S: Sequence,
    F: FnMut(S::Item),
{
    source.cursor().for_each(action);
}

/// Renders every value with [`Display`] and joins them with `glue`.
///
/// An empty sequence gives the empty string.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::consumer::join;
///
/// assert_eq!(join(", ", vec![1, 2, 3]), "1, 2, 3");
/// assert_eq!(join("-", Vec::<i32>::new()), "");
/// ```
pub fn join<S>(glue: &str, source: S) -> String
where
    S: Sequence,
    S::Item: Display,
{
    let mut rendered = String::new();
    for (position, value) in source.cursor().enumerate() {
        if position > 0 {
            rendered.push_str(glue);
        }
        rendered.push_str(&value.to_string());
    }
    rendered
}

/// Collects every value of `source` into a `Vec`, in order.
pub fn collect<S: Sequence>(source: S) -> Vec<S::Item> {
    source.cursor().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::take;
    use crate::source::range_from;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], "")]
    #[case(vec!["a"], "a")]
    #[case(vec!["a", "b", "c"], "a::b::c")]
    fn test_join(#[case] values: Vec<&str>, #[case] expected: &str) {
        assert_eq!(join("::", values), expected);
    }

    #[test]
    fn test_join_uses_display() {
        assert_eq!(join("|", vec![1.5_f64, -0.25]), "1.5|-0.25");
        assert_eq!(join("", vec!['a', 'b']), "ab");
    }

    #[test]
    fn test_join_chars() {
        assert_eq!(join(" ", "abc"), "a b c");
    }

    #[test]
    fn test_collect_bounded_infinite() {
        assert_eq!(collect(take(3, range_from(5_i32))), vec![5, 6, 7]);
    }

    #[test]
    fn test_apply_visits_in_order() {
        let mut seen = String::new();
        apply(|c: char| seen.push(c), "xyz");
        assert_eq!(seen, "xyz");
    }
}
