//! Key and value projections.
//!
//! A value is *key-projectable* when it can enumerate its keys and
//! *value-projectable* when it can enumerate its values. The capability is
//! probed at call time by [`project_keys`] and [`project_values`].

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;

use super::property_bag::PropertyBag;
use crate::error::{Result, ValidationError};
use crate::sequence::{BoxCursor, Sequence};

/// Optional `keys` and `values` capabilities.
///
/// Both methods default to `None`, meaning the capability is absent.
///
/// | Type | Keys | Values |
/// |---|---|---|
/// | `Vec<T>`, `[T]` | indices | elements |
/// | `HashMap`, `BTreeMap` | keys | values |
/// | `HashSet`, `BTreeSet` | elements | elements |
/// | [`PropertyBag`] | absent | absent |
pub trait Projection {
    /// The key type.
    type Key;
    /// The value type.
    type Value;

    /// Starts a traversal over the keys, if the capability exists.
    fn key_cursor(&self) -> Option<BoxCursor<'_, Self::Key>> {
        None
    }

    /// Starts a traversal over the values, if the capability exists.
    fn value_cursor(&self) -> Option<BoxCursor<'_, Self::Value>> {
        None
    }
}

impl<X: Projection + ?Sized> Projection for &X {
    type Key = X::Key;
    type Value = X::Value;

    fn key_cursor(&self) -> Option<BoxCursor<'_, Self::Key>> {
        (**self).key_cursor()
    }

    fn value_cursor(&self) -> Option<BoxCursor<'_, Self::Value>> {
        (**self).value_cursor()
    }
}

impl<T: Clone> Projection for [T] {
    type Key = usize;
    type Value = T;

    fn key_cursor(&self) -> Option<BoxCursor<'_, usize>> {
        Some(Box::new(0..self.len()))
    }

    fn value_cursor(&self) -> Option<BoxCursor<'_, T>> {
        Some(Box::new(self.iter().cloned()))
    }
}

impl<T: Clone> Projection for Vec<T> {
    type Key = usize;
    type Value = T;

    fn key_cursor(&self) -> Option<BoxCursor<'_, usize>> {
        self.as_slice().key_cursor()
    }

    fn value_cursor(&self) -> Option<BoxCursor<'_, T>> {
        self.as_slice().value_cursor()
    }
}

impl<K: Clone, V: Clone, S: BuildHasher> Projection for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn key_cursor(&self) -> Option<BoxCursor<'_, K>> {
        Some(Box::new(self.keys().cloned()))
    }

    fn value_cursor(&self) -> Option<BoxCursor<'_, V>> {
        Some(Box::new(self.values().cloned()))
    }
}

impl<K: Clone, V: Clone> Projection for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn key_cursor(&self) -> Option<BoxCursor<'_, K>> {
        Some(Box::new(self.keys().cloned()))
    }

    fn value_cursor(&self) -> Option<BoxCursor<'_, V>> {
        Some(Box::new(self.values().cloned()))
    }
}

impl<T: Clone, S: BuildHasher> Projection for HashSet<T, S> {
    type Key = T;
    type Value = T;

    fn key_cursor(&self) -> Option<BoxCursor<'_, T>> {
        Some(Box::new(self.iter().cloned()))
    }

    fn value_cursor(&self) -> Option<BoxCursor<'_, T>> {
        Some(Box::new(self.iter().cloned()))
    }
}

impl<T: Clone> Projection for BTreeSet<T> {
    type Key = T;
    type Value = T;

    fn key_cursor(&self) -> Option<BoxCursor<'_, T>> {
        Some(Box::new(self.iter().cloned()))
    }

    fn value_cursor(&self) -> Option<BoxCursor<'_, T>> {
        Some(Box::new(self.iter().cloned()))
    }
}

/// A plain bag of fields has neither capability.
impl<V> Projection for PropertyBag<V> {
    type Key = String;
    type Value = V;
}

/// The lazy sequence of a value's keys. Created by [`project_keys`].
#[derive(Debug, Clone)]
pub struct Keys<X> {
    source: X,
}

/// The lazy sequence of a value's values. Created by [`project_values`].
#[derive(Debug, Clone)]
pub struct Values<X> {
    source: X,
}

impl<X: Projection> Sequence for Keys<X> {
    type Item = X::Key;
    type Cursor<'a>
        = BoxCursor<'a, X::Key>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        match self.source.key_cursor() {
            Some(cursor) => cursor,
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<X: Projection> Sequence for Values<X> {
    type Item = X::Value;
    type Cursor<'a>
        = BoxCursor<'a, X::Value>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        match self.source.value_cursor() {
            Some(cursor) => cursor,
            None => Box::new(std::iter::empty()),
        }
    }
}

/// Projects the keys of `source` as a lazy, restartable sequence.
///
/// # Errors
///
/// Returns [`ValidationError::NotKeyProjectable`] if `source` has no keys
/// capability.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::error::ValidationError;
/// use lazy_seq::sequence::Sequence;
/// use lazy_seq::source::{project_keys, PropertyBag};
/// use std::collections::BTreeMap;
///
/// let ages: BTreeMap<&str, u32> = [("ann", 29), ("bob", 28)].into_iter().collect();
/// let names = project_keys(&ages)?;
/// assert_eq!(names.cursor().collect::<Vec<_>>(), vec!["ann", "bob"]);
///
/// let bag = PropertyBag::new().with("a", 1);
/// assert_eq!(project_keys(&bag).unwrap_err(), ValidationError::NotKeyProjectable);
/// # Ok::<(), ValidationError>(())
/// ```
pub fn project_keys<X: Projection>(source: X) -> Result<Keys<X>> {
    if source.key_cursor().is_none() {
        tracing::debug!("source has no keys capability");
        return Err(ValidationError::NotKeyProjectable);
    }
    Ok(Keys { source })
}

/// Projects the values of `source` as a lazy, restartable sequence.
///
/// # Errors
///
/// Returns [`ValidationError::NotValueProjectable`] if `source` has no values
/// capability.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::Sequence;
/// use lazy_seq::source::project_values;
///
/// let letters = vec!['x', 'y'];
/// let values = project_values(&letters)?;
/// assert_eq!(values.cursor().collect::<String>(), "xy");
/// # Ok::<(), lazy_seq::error::ValidationError>(())
/// ```
pub fn project_values<X: Projection>(source: X) -> Result<Values<X>> {
    if source.value_cursor().is_none() {
        tracing::debug!("source has no values capability");
        return Err(ValidationError::NotValueProjectable);
    }
    Ok(Values { source })
}
