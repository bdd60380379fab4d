//! # lazy-seq
//!
//! Lazy, composable sequences for Rust.
//!
//! ## Overview
//!
//! A [`Sequence`](sequence::Sequence) is anything able to hand out fresh
//! cursors over its values. On top of that single capability the crate
//! provides:
//!
//! - **Sources**: adapt standard containers, producers, generators,
//!   iterators and property bags into one sequence type, plus numeric
//!   ranges and UTF-16 code units
//! - **Combinators**: `map`, `filter`, `zip` (two or many inputs), `take`
//!   and `skip`, all lazy and pull-driven
//! - **Consumers**: folds in both directions, short-circuiting queries,
//!   numeric reductions, `join` and reversal with a random-access fast path
//!
//! Nothing is traversed until a consumer (or a caller advancing a cursor)
//! asks for values, and then only as many as are needed.
//!
//! ## Feature Flags
//!
//! - `source`: source adaptation, ranges, property bags and projections
//! - `combinator`: lazy combinators and the [`SequenceExt`](sequence::SequenceExt) trait
//! - `consumer`: folds, queries, numeric reductions and reversal
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazy_seq::prelude::*;
//!
//! let evens = range_from(0_u32).filter(|value: &u32| value % 2 == 0);
//! let labelled = zipf(|n: u32, c: char| format!("{c}{n}"), evens, "abc");
//!
//! assert_eq!(join(" ", &labelled), "a0 b2 c4");
//! assert_eq!(fold_right(|acc: String, s| acc + &s, &labelled).as_deref(), Some("c4b2a0"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the sequence traits, every source, combinator and consumer,
/// [`ValidationError`](crate::error::ValidationError) and
/// [`Number`](crate::number::Number). The crate's `Result` alias is
/// deliberately left out so that it does not shadow `std::result::Result`.
///
/// # Usage
///
/// ```rust
/// use lazy_seq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ValidationError;
    pub use crate::number::Number;
    pub use crate::sequence::*;

    #[cfg(feature = "source")]
    pub use crate::source::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "consumer")]
    pub use crate::consumer::*;
}

pub mod error;
pub mod number;
pub mod sequence;

#[cfg(feature = "source")]
pub mod source;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "consumer")]
pub mod consumer;
