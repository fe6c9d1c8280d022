//! Element storage.
//!
//! Registries own exactly one [`Store`]. Two shapes are provided:
//!
//! - [`ElementCollection`] keeps insertion order and duplicate keys.
//! - [`ElementMapping`] keeps one element per exact signature; the last
//!   insertion for a signature replaces the previous element.

use elementalist_core::{Element, Signature};
use indexmap::IndexMap;
use std::{ops::BitOr, sync::Arc};

/// Storage interface shared by both store shapes.
pub trait Store<V>: Default + Clone + Send + Sync {
    /// Insert an element, returning the element it replaced, if any.
    fn insert(&mut self, element: Arc<Element<V>>) -> Option<Arc<Element<V>>>;

    /// Iterate over the stored elements in store order.
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a Arc<Element<V>>>
    where
        V: 'a;

    /// The element stored under exactly `key`.
    fn get(&self, key: &Signature) -> Option<&Arc<Element<V>>>;

    /// A new store holding `self`'s elements followed by `other`'s.
    fn union(&self, other: &Self) -> Self;

    /// Number of stored elements.
    fn len(&self) -> usize;

    /// Whether the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered store; duplicates are kept as separate entries.
pub struct ElementCollection<V> {
    elements: Vec<Arc<Element<V>>>,
}

impl<V> ElementCollection<V> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// The stored elements in insertion order.
    pub fn as_slice(&self) -> &[Arc<Element<V>>] {
        &self.elements
    }
}

impl<V> Default for ElementCollection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for ElementCollection<V> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<V: Send + Sync> Store<V> for ElementCollection<V> {
    fn insert(&mut self, element: Arc<Element<V>>) -> Option<Arc<Element<V>>> {
        self.elements.push(element);
        None
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a Arc<Element<V>>>
    where
        V: 'a,
    {
        self.elements.iter()
    }

    fn get(&self, key: &Signature) -> Option<&Arc<Element<V>>> {
        self.elements.iter().find(|element| element.key() == key)
    }

    fn union(&self, other: &Self) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + other.elements.len());
        elements.extend(self.elements.iter().cloned());
        elements.extend(other.elements.iter().cloned());
        Self { elements }
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<V: Send + Sync> BitOr for &ElementCollection<V> {
    type Output = ElementCollection<V>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// Store keyed by exact signature; re-registering a signature overwrites.
pub struct ElementMapping<V> {
    entries: IndexMap<Signature, Arc<Element<V>>>,
}

impl<V> ElementMapping<V> {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Iterate over `(signature, element)` pairs in first-insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&Signature, &Arc<Element<V>>)> {
        self.entries.iter()
    }
}

impl<V> Default for ElementMapping<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for ElementMapping<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<V: Send + Sync> Store<V> for ElementMapping<V> {
    fn insert(&mut self, element: Arc<Element<V>>) -> Option<Arc<Element<V>>> {
        self.entries.insert(element.key().clone(), element)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a Arc<Element<V>>>
    where
        V: 'a,
    {
        self.entries.values()
    }

    fn get(&self, key: &Signature) -> Option<&Arc<Element<V>>> {
        self.entries.get(key)
    }

    fn union(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.entries.extend(
            other
                .entries
                .iter()
                .map(|(key, element)| (key.clone(), Arc::clone(element))),
        );
        merged
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<V: Send + Sync> BitOr for &ElementMapping<V> {
    type Output = ElementMapping<V>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;
    use elementalist_core::{Details, Signature};

    fn element(value: &'static str, key: Signature) -> Arc<Element<&'static str>> {
        Arc::new(Element::new(value, key, Details::new()))
    }

    #[test]
    fn test_collection_keeps_duplicates_in_order() {
        let fx = Fixture::new();
        let key = Signature::new([&fx.context, &fx.view]);

        let mut store = ElementCollection::new();
        store.insert(element("a", key.clone()));
        store.insert(element("b", key.clone()));

        let values: Vec<_> = store.iter().map(|e| *e.value()).collect();
        assert_eq!(values, ["a", "b"]);
        assert_eq!(store.get(&key).map(|e| *e.value()), Some("a"));
    }

    #[test]
    fn test_collection_union_concatenates() {
        let fx = Fixture::new();
        let key = Signature::new([&fx.context, &fx.view]);

        let mut left = ElementCollection::new();
        left.insert(element("a", key.clone()));
        let mut right = ElementCollection::new();
        right.insert(element("b", key.clone()));

        let merged = &left | &right;
        let values: Vec<_> = merged.iter().map(|e| *e.value()).collect();
        assert_eq!(values, ["a", "b"]);
        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 1);
    }

    #[test]
    fn test_mapping_last_write_wins() {
        let fx = Fixture::new();
        let key = Signature::new([&fx.context, &fx.view]);

        let mut store = ElementMapping::new();
        assert!(store.insert(element("a", key.clone())).is_none());
        let replaced = store.insert(element("b", key.clone()));

        assert_eq!(replaced.map(|e| *e.value()), Some("a"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&key).map(|e| *e.value()), Some("b"));
    }

    #[test]
    fn test_mapping_union_is_right_biased() {
        let fx = Fixture::new();
        let shared = Signature::new([&fx.context, &fx.view]);
        let only_left = Signature::new([&fx.sub_context, &fx.view]);

        let mut left = ElementMapping::new();
        left.insert(element("left", shared.clone()));
        left.insert(element("only-left", only_left.clone()));
        let mut right = ElementMapping::new();
        right.insert(element("right", shared.clone()));

        let merged = &left | &right;
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get(&shared).map(|e| *e.value()), Some("right"));
        assert_eq!(merged.get(&only_left).map(|e| *e.value()), Some("only-left"));
        assert_eq!(left.get(&shared).map(|e| *e.value()), Some("left"));
    }
}
