//! Validation errors raised at call time.
//!
//! Every fallible operation in this crate validates its arguments before any
//! traversal happens and reports a [`ValidationError`] synchronously. Errors
//! raised by user-supplied closures are not represented here: they surface
//! at the pull that evaluates the closure (see
//! [`try_fold`](crate::consumer::try_fold) for `Result`-returning
//! transforms).
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::error::ValidationError;
//!
//! let error = ValidationError::TooFewSequences { count: 1 };
//! assert_eq!(
//!     format!("{error}"),
//!     "requires at least two input sequences (got 1)"
//! );
//! ```

use thiserror::Error;

/// The single error kind for malformed or unsupported call-time arguments.
///
/// The leading words of each message are stable identifiers callers may
/// match on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The source handed to [`adapt`](crate::source::adapt) has no
    /// enumeration capability.
    #[error("unsupported source kind: {kind}")]
    UnsupportedSource {
        /// A description of the rejected source.
        kind: String,
    },
    /// The value has no `keys` capability.
    #[error("not key-projectable")]
    NotKeyProjectable,
    /// The value has no `values` capability.
    #[error("not value-projectable")]
    NotValueProjectable,
    /// An N-input zip was given fewer than two sequences.
    #[error("requires at least two input sequences (got {count})")]
    TooFewSequences {
        /// The number of sequences actually supplied.
        count: usize,
    },
}

impl ValidationError {
    /// Returns the stable identifier of this error, without any details.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_seq::error::ValidationError;
    ///
    /// let error = ValidationError::UnsupportedSource { kind: "socket".to_string() };
    /// assert_eq!(error.identifier(), "unsupported source kind");
    /// ```
    #[must_use]
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::UnsupportedSource { .. } => "unsupported source kind",
            Self::NotKeyProjectable => "not key-projectable",
            Self::NotValueProjectable => "not value-projectable",
            Self::TooFewSequences { .. } => "requires at least two input sequences",
        }
    }
}

/// Result alias for operations that validate their arguments.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ValidationError::UnsupportedSource { kind: "number".to_string() })]
    #[case(ValidationError::NotKeyProjectable)]
    #[case(ValidationError::NotValueProjectable)]
    #[case(ValidationError::TooFewSequences { count: 0 })]
    fn test_display_starts_with_identifier(#[case] error: ValidationError) {
        assert!(format!("{error}").starts_with(error.identifier()));
    }

    #[rstest]
    fn test_unsupported_source_display() {
        let error = ValidationError::UnsupportedSource {
            kind: "number".to_string(),
        };
        assert_eq!(format!("{error}"), "unsupported source kind: number");
    }

    #[rstest]
    fn test_projection_errors_display() {
        assert_eq!(
            format!("{}", ValidationError::NotKeyProjectable),
            "not key-projectable"
        );
        assert_eq!(
            format!("{}", ValidationError::NotValueProjectable),
            "not value-projectable"
        );
    }

    #[rstest]
    fn test_error_source_is_none() {
        use std::error::Error;

        let error = ValidationError::TooFewSequences { count: 1 };
        assert!(error.source().is_none());
    }

    #[rstest]
    fn test_error_equality() {
        assert_eq!(
            ValidationError::TooFewSequences { count: 1 },
            ValidationError::TooFewSequences { count: 1 }
        );
        assert_ne!(
            ValidationError::TooFewSequences { count: 1 },
            ValidationError::TooFewSequences { count: 0 }
        );
    }
}
