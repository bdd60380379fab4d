//! UTF-16 code unit sequences over text.

use crate::sequence::Sequence;

/// The UTF-16 code units of a text, in index order.
///
/// Characters outside the Basic Multilingual Plane are encoded as a
/// surrogate pair and therefore produce two values.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::Sequence;
/// use lazy_seq::source::code_units;
///
/// let units = code_units("hello😀");
/// assert_eq!(units.cursor().count(), 7);
/// assert_eq!(units.cursor().nth(5), Some(0xD83D));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeUnits<S> {
    text: S,
}

impl<S: AsRef<str>> CodeUnits<S> {
    /// Returns the underlying text.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.text.as_ref()
    }

    /// Consumes the sequence, returning the underlying text.
    #[inline]
    pub fn into_inner(self) -> S {
        self.text
    }
}

/// Creates the UTF-16 code unit sequence of `text`.
#[inline]
pub const fn code_units<S: AsRef<str>>(text: S) -> CodeUnits<S> {
    CodeUnits { text }
}

impl<S: AsRef<str>> Sequence for CodeUnits<S> {
    type Item = u16;
    type Cursor<'a>
        = std::str::EncodeUtf16<'a>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.text.as_ref().encode_utf16()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrogate_pair_is_two_units() {
        let units: Vec<u16> = code_units("😀").cursor().collect();
        assert_eq!(units, vec![0xD83D, 0xDE00]);
    }

    #[test]
    fn test_ascii_units_match_bytes() {
        let units: Vec<u16> = code_units(String::from("hi")).cursor().collect();
        assert_eq!(units, vec![u16::from(b'h'), u16::from(b'i')]);
    }

    #[test]
    fn test_restartable() {
        let units = code_units("abc");
        assert_eq!(units.cursor().count(), units.cursor().count());
        assert_eq!(units.as_str(), "abc");
        assert_eq!(units.into_inner(), "abc");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(code_units("").cursor().next(), None);
    }
}
