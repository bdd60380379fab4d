//! Lazy combinators.
//!
//! Every function here consumes one or more [`Sequence`]s and returns a new
//! sequence without traversing anything. Work happens only when a cursor of
//! the resulting pipeline is advanced, one pull at a time:
//!
//! - [`map`]: transform every value
//! - [`filter`]: keep matching values
//! - [`zip`] / [`zipf`]: combine two sequences positionally
//! - [`zip_n`] / [`zipf_n`]: combine any number of sequences positionally
//! - [`take`]: at most the first `n` values
//! - [`skip`]: everything after the first `n` values
//!
//! Apart from the arity check of [`zip_n`] and [`zipf_n`], constructing a
//! combinator cannot fail.
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::combinator::{filter, map, skip, take};
//! use lazy_seq::sequence::Sequence;
//! use lazy_seq::source::range_from;
//!
//! // Squares of odd numbers, skipping the first, bounded to three values.
//! let odd = filter(|value: &u64| value % 2 == 1, range_from(0_u64));
//! let squares = map(|value: u64| value * value, odd);
//! let pipeline = take(3, skip(1, squares));
//!
//! assert_eq!(pipeline.cursor().collect::<Vec<_>>(), vec![9, 25, 49]);
//! ```
//!
//! [`Sequence`]: crate::sequence::Sequence

mod filter;
mod map;
mod skip;
mod take;
mod zip;

pub use filter::{Filter, FilterCursor, filter};
pub use map::{Map, MapCursor, map};
pub use skip::{Skip, SkipCursor, skip};
pub use take::{Take, TakeCursor, take};
pub use zip::{
    Pair, Row, Zip, ZipN, ZipNCursor, ZipNWith, ZipWith, ZipWithCursor, zip, zip_n, zipf, zipf_n,
};
