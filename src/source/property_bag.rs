//! Property bags: named fields without a native enumeration capability.

use std::collections::HashSet;
use std::iter::FusedIterator;
use std::rc::Rc;

use crate::sequence::BoxCursor;

/// A source of `(key, value)` entries with optional inherited fields.
///
/// Implemented by [`PropertyBag`]; implement it for other record-like types
/// to adapt them through [`Source::Bag`](super::Source::Bag).
pub trait Properties {
    /// The entry type produced, usually a `(key, value)` pair.
    type Entry;

    /// Starts a traversal over the own fields, followed by the inherited
    /// fields when `all_properties` is `true`.
    fn entries(&self, all_properties: bool) -> BoxCursor<'_, Self::Entry>;
}

/// An ordered mapping of named fields with an optional prototype.
///
/// Own fields keep insertion order; inserting an existing key replaces its
/// value in place. A bag may inherit fields from a shared prototype bag,
/// which may in turn have its own prototype.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::source::PropertyBag;
/// use std::rc::Rc;
///
/// let base = Rc::new(PropertyBag::new().with("kind", "user"));
/// let bob = PropertyBag::with_prototype(base).with("name", "Bob");
///
/// assert_eq!(bob.get("name"), Some(&"Bob"));
/// assert_eq!(bob.get("kind"), Some(&"user"));
/// assert_eq!(bob.get_own("kind"), None);
/// assert_eq!(bob.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyBag<V> {
    fields: Vec<(String, V)>,
    prototype: Option<Rc<PropertyBag<V>>>,
}

impl<V> PropertyBag<V> {
    /// Creates an empty bag with no prototype.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            prototype: None,
        }
    }

    /// Creates an empty bag inheriting from `prototype`.
    #[inline]
    pub const fn with_prototype(prototype: Rc<Self>) -> Self {
        Self {
            fields: Vec::new(),
            prototype: Some(prototype),
        }
    }

    /// Returns the prototype, if any.
    #[inline]
    pub const fn prototype(&self) -> Option<&Rc<Self>> {
        self.prototype.as_ref()
    }

    /// Sets an own field, returning the previous own value.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((key, value));
                None
            }
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Looks up an own field.
    pub fn get_own(&self, key: &str) -> Option<&V> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Looks up a field, searching own fields and then the prototype chain.
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut current = Some(self);
        while let Some(bag) = current {
            if let Some(value) = bag.get_own(key) {
                return Some(value);
            }
            current = bag.prototype.as_deref();
        }
        None
    }

    /// Returns `true` if `key` is an own field.
    pub fn contains_own(&self, key: &str) -> bool {
        self.get_own(key).is_some()
    }

    /// Returns the number of own fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no own fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over own fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> Default for PropertyBag<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for PropertyBag<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

impl<V: Clone> Properties for PropertyBag<V> {
    type Entry = (String, V);

    fn entries(&self, all_properties: bool) -> BoxCursor<'_, Self::Entry> {
        Box::new(Entries {
            current: Some(self),
            index: 0,
            inherited: all_properties,
            seen: HashSet::new(),
        })
    }
}

/// Cursor over the entries of a [`PropertyBag`].
///
/// When walking inherited fields, a key already produced by a nearer bag
/// shadows the same key further up the chain.
struct Entries<'a, V> {
    current: Option<&'a PropertyBag<V>>,
    index: usize,
    inherited: bool,
    seen: HashSet<&'a str>,
}

impl<V: Clone> Iterator for Entries<'_, V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let bag = self.current?;
            if let Some((key, value)) = bag.fields.get(self.index) {
                self.index += 1;
                if self.inherited && !self.seen.insert(key.as_str()) {
                    continue;
                }
                return Some((key.clone(), value.clone()));
            }
            self.current = if self.inherited {
                bag.prototype.as_deref()
            } else {
                None
            };
            self.index = 0;
        }
    }
}

impl<V: Clone> FusedIterator for Entries<'_, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(bag: &PropertyBag<i32>, all_properties: bool) -> Vec<String> {
        bag.entries(all_properties).map(|(key, _)| key).collect()
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut bag = PropertyBag::new().with("a", 1).with("b", 2);
        assert_eq!(bag.insert("a", 10), Some(1));
        assert_eq!(keys(&bag, false), vec!["a", "b"]);
        assert_eq!(bag.get_own("a"), Some(&10));
    }

    #[test]
    fn test_own_entries_exclude_prototype() {
        let base = Rc::new(PropertyBag::new().with("inherited", 0));
        let bag = PropertyBag::with_prototype(base).with("own", 1);
        assert_eq!(keys(&bag, false), vec!["own"]);
        assert_eq!(keys(&bag, true), vec!["own", "inherited"]);
    }

    #[test]
    fn test_shadowed_keys_are_not_repeated() {
        let grandparent = Rc::new(PropertyBag::new().with("x", 1).with("z", 3));
        let parent = Rc::new(PropertyBag::with_prototype(grandparent).with("x", 2).with("y", 2));
        let bag = PropertyBag::with_prototype(parent).with("y", 9);

        let entries: Vec<(String, i32)> = bag.entries(true).collect();
        assert_eq!(
            entries,
            vec![
                ("y".to_string(), 9),
                ("x".to_string(), 2),
                ("z".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_get_walks_chain() {
        let base = Rc::new(PropertyBag::new().with("depth", 0));
        let bag = PropertyBag::with_prototype(Rc::clone(&base));
        assert_eq!(bag.get("depth"), Some(&0));
        assert!(!bag.contains_own("depth"));
        assert!(bag.is_empty());
        assert_eq!(bag.prototype(), Some(&base));
    }

    #[test]
    fn test_entries_cursor_is_fused() {
        let bag = PropertyBag::new().with("only", 1);
        let mut cursor = bag.entries(true);
        assert!(cursor.next().is_some());
        assert!(cursor.next().is_none());
        assert!(cursor.next().is_none());
    }

    #[test]
    fn test_from_iterator_preserves_order() {
        let bag: PropertyBag<i32> = [("b", 1), ("a", 2)].into_iter().collect();
        assert_eq!(bag.iter().map(|(key, _)| key).collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
