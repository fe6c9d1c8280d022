//! Ordered registry without unique resolution.

use super::{base::SignatureRegistry, impl_registry};
use crate::store::ElementCollection;
use elementalist_core::{Arg, Element, Hierarchy, Signature};
use std::sync::Arc;

/// Keeps every registration, duplicates included, and answers "all
/// handlers for these arguments, most specific first".
pub struct CollectionRegistry<V> {
    inner: SignatureRegistry<V, ElementCollection<V>>,
}

impl<V: Send + Sync> CollectionRegistry<V> {
    /// An empty, unrestricted registry.
    pub fn new(hierarchy: Arc<Hierarchy>) -> Self {
        Self {
            inner: SignatureRegistry::new(hierarchy),
        }
    }

    /// An empty registry bounded by `restrictions`.
    pub fn with_restrictions<I>(hierarchy: Arc<Hierarchy>, restrictions: I) -> Self
    where
        I: IntoIterator<Item = Signature>,
    {
        Self {
            inner: SignatureRegistry::with_restrictions(hierarchy, restrictions),
        }
    }

    /// All matching elements, most specific first.
    pub fn match_all(&self, args: &[Arg<'_>]) -> Vec<&Arc<Element<V>>> {
        self.inner.match_all(args)
    }

    /// Stored elements in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &Arc<Element<V>>> {
        self.inner.elements()
    }

    /// The underlying store/resolver/restriction triple.
    pub fn base(&self) -> &SignatureRegistry<V, ElementCollection<V>> {
        &self.inner
    }
}

impl_registry!(CollectionRegistry, "CollectionRegistry", |signature, _| signature);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        registry::Registry,
        testing::{Context, Fixture, SubContext, SubView, View},
    };
    use elementalist_core::Details;

    fn values(found: Vec<&Arc<Element<&'static str>>>) -> Vec<&'static str> {
        found.into_iter().map(|e| *e.value()).collect()
    }

    #[test]
    fn test_match_orders_most_specific_first() {
        let fx = Fixture::new();
        let mut registry = CollectionRegistry::new(fx.hierarchy.clone());
        registry.create("test1", [&fx.context, &fx.view]).unwrap();
        registry.create("test2", [&fx.context, &fx.sub_view]).unwrap();
        registry.create("test3", [&fx.sub_context, &fx.view]).unwrap();

        let found = registry.match_all(&[Arg::value(&Context), Arg::value(&View)]);
        assert_eq!(values(found), ["test1"]);

        let found = registry.match_all(&[Arg::value(&SubContext), Arg::value(&View)]);
        assert_eq!(values(found), ["test3", "test1"]);

        let found = registry.match_all(&[Arg::value(&SubContext), Arg::value(&SubView)]);
        assert_eq!(values(found), ["test2", "test3", "test1"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let fx = Fixture::new();
        let mut registry = CollectionRegistry::new(fx.hierarchy.clone());
        registry.create("first", [&fx.context]).unwrap();
        registry.create("second", [&fx.context]).unwrap();

        assert_eq!(registry.len(), 2);
        let found = registry.match_all(&[Arg::value(&SubContext)]);
        assert_eq!(values(found), ["first", "second"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let fx = Fixture::new();
        let mut registry = CollectionRegistry::new(fx.hierarchy.clone());
        registry
            .create_with("handler", [&fx.context, &fx.view], Details::named("h"))
            .unwrap();

        assert!(registry.match_all(&[Arg::value(&View), Arg::value(&Context)]).is_empty());
        assert!(registry.match_all(&[Arg::value(&Context)]).is_empty());
    }

    #[test]
    fn test_merge_concatenates() {
        let fx = Fixture::new();
        let mut left = CollectionRegistry::new(fx.hierarchy.clone());
        left.create("left", [&fx.context]).unwrap();
        let mut right = CollectionRegistry::new(fx.hierarchy.clone());
        right.create("right", [&fx.context]).unwrap();
        right.create("sub", [&fx.sub_context]).unwrap();

        let merged = &left | &right;
        let found = merged.match_all(&[Arg::value(&SubContext)]);
        assert_eq!(values(found), ["sub", "left", "right"]);
        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 2);
    }
}
