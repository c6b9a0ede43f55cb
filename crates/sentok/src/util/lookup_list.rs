//! # Ordered Lookup List
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// A small insertion-ordered set, for delimiter, special token, and title lists.
///
/// Membership is a linear scan; iteration follows first-insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<K>", into = "Vec<K>")]
pub struct LookupList<K: PartialEq + Clone> {
    items: Vec<K>,
}

impl<K: PartialEq + Clone> Default for LookupList<K> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<K: PartialEq + Clone> From<Vec<K>> for LookupList<K> {
    fn from(items: Vec<K>) -> Self {
        items.into_iter().collect()
    }
}

impl<K: PartialEq + Clone> From<LookupList<K>> for Vec<K> {
    fn from(list: LookupList<K>) -> Self {
        list.items
    }
}

impl<K: PartialEq + Clone> FromIterator<K> for LookupList<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<K: PartialEq + Clone> Extend<K> for LookupList<K> {
    fn extend<I: IntoIterator<Item = K>>(
        &mut self,
        iter: I,
    ) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, K: PartialEq + Clone> IntoIterator for &'a LookupList<K> {
    type Item = &'a K;

    type IntoIter = std::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<K: PartialEq + Clone> LookupList<K> {
    /// The number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert an entry; returns `false` if it was already present.
    pub fn insert(
        &mut self,
        item: K,
    ) -> bool {
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Membership test.
    pub fn contains<Q>(
        &self,
        item: &Q,
    ) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.items.iter().any(|k| k.borrow() == item)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.items.iter()
    }

    /// View the entries as a slice.
    pub fn as_slice(&self) -> &[K] {
        &self.items
    }
}
