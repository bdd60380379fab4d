//! The sequence abstraction.
//!
//! This module defines the uniform capability every other part of the crate
//! builds on:
//!
//! - [`Sequence`]: anything able to produce a fresh traversal cursor
//! - [`Cursor`]: a fused, single-pass traversal
//! - [`CursorState`]: the explicit `{Active, Done}` machine cursors are built on
//! - [`Seq`]: a type-erased, shareable sequence handle
//! - [`SequenceExt`]: method-chaining forms of the lazy combinators
//!
//! Standard containers (`Vec`, slices, arrays, `VecDeque`, hash and
//! B-tree sets and maps) and text (`str`, `String`) implement [`Sequence`]
//! directly.
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::sequence::Sequence;
//! use std::collections::BTreeMap;
//!
//! let users: BTreeMap<&str, u32> = [("ann", 29), ("bob", 28)].into_iter().collect();
//! let names: Vec<&str> = users.cursor().map(|(name, _)| name).collect();
//! assert_eq!(names, vec!["ann", "bob"]);
//!
//! // Each cursor is an independent traversal.
//! assert_eq!(users.cursor().count(), 2);
//! ```

mod cursor;
mod erased;
#[cfg(feature = "combinator")]
mod ext;
mod native;
mod traits;

pub use cursor::{BoxCursor, Cursor, CursorState};
pub use erased::Seq;
#[cfg(feature = "combinator")]
pub use ext::SequenceExt;
pub use traits::Sequence;
