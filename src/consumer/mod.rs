//! Consumers and reversal.
//!
//! Everything here except [`reverse`] is eager: it starts a cursor, drains
//! as much of it as it needs, and returns a plain value.
//!
//! | Consumer | Empty input | Stops early |
//! |----------|-------------|-------------|
//! | [`fold`], [`fold_right`] | `None` | no |
//! | [`fold_with`], [`fold_right_with`] | the initial value | no |
//! | [`any`] / [`all`] | `false` / `true` | on first match / mismatch |
//! | [`is_empty`] | `true` | after one pull |
//! | [`nth`] | `None` | at the index |
//! | [`min`], [`max`], [`sum`], [`avg`] | zero | no |
//! | [`join`] | `""` | no |
//! | [`try_fold`], [`try_collect`] | `Ok` | on first error |
//!
//! Consumers that must see every value never terminate on an infinite
//! sequence; bound it with [`take`](crate::combinator::take) first.
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::combinator::{map, take};
//! use lazy_seq::consumer::{fold_right_with, join, reverse, sum};
//! use lazy_seq::source::range_from;
//!
//! let squares = map(|value: u64| value * value, range_from(1_u64));
//! assert_eq!(sum(take(3, &squares)), 14);
//!
//! let text = fold_right_with(|acc: String, c| acc + &c.to_string(), "seq", String::new());
//! assert_eq!(text, "qes");
//!
//! assert_eq!(join("<", reverse(vec![1, 2, 3])), "3<2<1");
//! ```

mod fallible;
mod fold;
mod numeric;
mod predicate;
mod reverse;
mod terminal;

pub use fallible::{try_collect, try_fold};
pub use fold::{fold, fold_right, fold_right_with, fold_with};
pub use numeric::{avg, max, min, sum};
pub use predicate::{all, any, is_empty, nth};
pub use reverse::{Reverse, ReverseCursor, reverse};
pub use terminal::{apply, collect, join};
