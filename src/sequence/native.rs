//! `Sequence` implementations for standard library containers and text.
//!
//! Containers yield cloned elements so that a sequence stays a borrowed,
//! restartable view. Contiguous containers also expose random access.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::BuildHasher;
use std::iter::Cloned;

use super::traits::Sequence;

// =============================================================================
// Contiguous containers
// =============================================================================

impl<T: Clone> Sequence for [T] {
    type Item = T;
    type Cursor<'a>
        = Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter().cloned()
    }

    #[inline]
    fn random_access_len(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Cursor<'a>
        = Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter().cloned()
    }

    #[inline]
    fn random_access_len(&self) -> Option<usize> {
        Some(N)
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Cursor<'a>
        = Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter().cloned()
    }

    #[inline]
    fn random_access_len(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;
    type Cursor<'a>
        = Cloned<std::collections::vec_deque::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter().cloned()
    }

    #[inline]
    fn random_access_len(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

// =============================================================================
// Set-like containers
// =============================================================================

impl<T: Clone, S: BuildHasher> Sequence for HashSet<T, S> {
    type Item = T;
    type Cursor<'a>
        = Cloned<std::collections::hash_set::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter().cloned()
    }
}

impl<T: Clone> Sequence for BTreeSet<T> {
    type Item = T;
    type Cursor<'a>
        = Cloned<std::collections::btree_set::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter().cloned()
    }
}

// =============================================================================
// Map-like containers
// =============================================================================

/// Entry-cloning function used by the map cursors.
pub(crate) type CloneEntry<'a, K, V> = fn((&'a K, &'a V)) -> (K, V);

#[inline]
pub(crate) fn clone_entry<K: Clone, V: Clone>((key, value): (&K, &V)) -> (K, V) {
    (key.clone(), value.clone())
}

impl<K: Clone, V: Clone, S: BuildHasher> Sequence for HashMap<K, V, S> {
    type Item = (K, V);
    type Cursor<'a>
        = std::iter::Map<std::collections::hash_map::Iter<'a, K, V>, CloneEntry<'a, K, V>>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter().map(clone_entry as CloneEntry<'_, K, V>)
    }
}

impl<K: Clone, V: Clone> Sequence for BTreeMap<K, V> {
    type Item = (K, V);
    type Cursor<'a>
        = std::iter::Map<std::collections::btree_map::Iter<'a, K, V>, CloneEntry<'a, K, V>>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter().map(clone_entry as CloneEntry<'_, K, V>)
    }
}

// =============================================================================
// Text
// =============================================================================

/// Strings are sequences of Unicode scalar values.
///
/// Use [`code_units`](crate::source::code_units) for UTF-16 code units.
impl Sequence for str {
    type Item = char;
    type Cursor<'a>
        = std::str::Chars<'a>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.chars()
    }
}

impl Sequence for String {
    type Item = char;
    type Cursor<'a>
        = std::str::Chars<'a>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.chars()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_is_restartable() {
        let values = vec![1, 2, 3];
        assert_eq!(values.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(values.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_slice_random_access() {
        let values: &[i32] = &[4, 5, 6];
        assert_eq!(values.random_access_len(), Some(3));
        assert_eq!(values.item_at(2), Some(6));
        assert_eq!(values.item_at(3), None);
    }

    #[test]
    fn test_array_random_access() {
        let values = ['a', 'b'];
        assert_eq!(values.random_access_len(), Some(2));
        assert_eq!(values.item_at(0), Some('a'));
    }

    #[test]
    fn test_vec_deque_random_access() {
        let mut values = VecDeque::new();
        values.push_back(2);
        values.push_front(1);
        assert_eq!(values.cursor().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(values.item_at(0), Some(1));
    }

    #[test]
    fn test_sets_yield_elements() {
        let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(set.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(set.random_access_len(), None);

        let hashed: HashSet<i32> = [7].into_iter().collect();
        assert_eq!(hashed.cursor().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_maps_yield_entries() {
        let map: BTreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(map.cursor().collect::<Vec<_>>(), vec![("a", 1), ("b", 2)]);

        let hashed: HashMap<&str, i32> = [("only", 1)].into_iter().collect();
        assert_eq!(hashed.cursor().collect::<Vec<_>>(), vec![("only", 1)]);
    }

    #[test]
    fn test_text_yields_scalar_values() {
        let text = "hi😀";
        assert_eq!(text.cursor().count(), 3);
        assert_eq!(String::from(text).cursor().last(), Some('😀'));
    }

    #[test]
    fn test_reference_forwards_capabilities() {
        let values = vec![1, 2];
        let borrowed = &values;
        assert_eq!(Sequence::random_access_len(&borrowed), Some(2));
        assert_eq!(borrowed.cursor().collect::<Vec<_>>(), vec![1, 2]);
    }
}
