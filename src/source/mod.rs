//! Source adaptation.
//!
//! This module turns arbitrary enumerable sources into [`Sequence`]s:
//!
//! - [`adapt`] / [`adapt_with`]: resolve a [`Source`] (sequence, producer
//!   function, single-use generator, bare cursor, property bag) into a
//!   [`Seq`]
//! - [`project_keys`] / [`project_values`]: lazy key and value projections
//! - [`range`] / [`range_from`]: numeric progressions, possibly infinite
//! - [`code_units`]: the UTF-16 code units of a text
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::sequence::Sequence;
//! use lazy_seq::source::{adapt_with, code_units, range, AdaptOptions, PropertyBag};
//! use std::rc::Rc;
//!
//! let defaults = Rc::new(PropertyBag::new().with("role", "guest"));
//! let user = PropertyBag::with_prototype(defaults).with("name", "Ann");
//!
//! let fields = adapt_with(user, AdaptOptions::new().all_properties(true))?;
//! assert_eq!(fields.cursor().count(), 2);
//!
//! assert_eq!(range(-3, 3).cursor().count(), 6);
//! assert_eq!(code_units("hello😀").cursor().count(), 7);
//! # Ok::<(), lazy_seq::error::ValidationError>(())
//! ```
//!
//! [`Sequence`]: crate::sequence::Sequence
//! [`Seq`]: crate::sequence::Seq

mod adapt;
mod code_units;
mod projection;
mod property_bag;
mod range;

pub use adapt::{AdaptOptions, DynIterator, ProducerFn, Source, adapt, adapt_with};
pub use code_units::{CodeUnits, code_units};
pub use projection::{Keys, Projection, Values, project_keys, project_values};
pub use property_bag::{Properties, PropertyBag};
pub use range::{Range, RangeCursor, range, range_from};
