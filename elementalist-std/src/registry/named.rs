//! Registry grouping elements by name.

use super::{base::SignatureRegistry, impl_registry};
use crate::store::ElementMapping;
use elementalist_core::{ALL, Arg, DEFAULT, Element, Hierarchy, Literal, LookupError, Pattern, Signature};
use indexmap::IndexMap;
use std::sync::Arc;

/// Signatures end with a `name | ALL` position, so every element can be
/// reached either by its own name or through the `ALL` sentinel.
///
/// [`match_all`](NamedElementRegistry::match_all) returns the most specific
/// match for each distinct name.
pub struct NamedElementRegistry<V> {
    inner: SignatureRegistry<V, ElementMapping<V>>,
}

impl<V: Send + Sync> NamedElementRegistry<V> {
    /// An empty, unrestricted registry.
    pub fn new(hierarchy: Arc<Hierarchy>) -> Self {
        Self {
            inner: SignatureRegistry::new(hierarchy),
        }
    }

    /// An empty registry bounded by `restrictions`.
    ///
    /// Restrictions must include the trailing name position, e.g.
    /// `(Context, View, Any)`.
    pub fn with_restrictions<I>(hierarchy: Arc<Hierarchy>, restrictions: I) -> Self
    where
        I: IntoIterator<Item = Signature>,
    {
        Self {
            inner: SignatureRegistry::with_restrictions(hierarchy, restrictions),
        }
    }

    /// The most specific matching element for each name, keyed by name.
    ///
    /// Names appear in the order their winning elements sort in.
    pub fn match_all(&self, args: &[Arg<'_>]) -> IndexMap<String, &Arc<Element<V>>> {
        let mut query = args.to_vec();
        query.push(Arg::ALL);

        let mut elements = IndexMap::new();
        for element in self.inner.match_all(&query) {
            elements
                .entry(element.name().to_owned())
                .or_insert(element);
        }
        elements
    }

    /// Resolve against a raw argument tuple whose last entry is a name or `ALL`.
    pub fn lookup(&self, args: &[Arg<'_>]) -> Result<&Arc<Element<V>>, LookupError> {
        self.inner.lookup(args)
    }

    /// The most specific element registered under `name`.
    pub fn get(&self, args: &[Arg<'_>], name: &str) -> Result<&Arc<Element<V>>, LookupError> {
        let mut query = args.to_vec();
        query.push(Arg::from(name));
        self.lookup(&query)
    }

    /// The most specific element registered under the default name.
    pub fn get_default(&self, args: &[Arg<'_>]) -> Result<&Arc<Element<V>>, LookupError> {
        self.get(args, DEFAULT)
    }

    /// Stored elements in first-registration order.
    pub fn elements(&self) -> impl Iterator<Item = &Arc<Element<V>>> {
        self.inner.elements()
    }

    /// The underlying store/resolver/restriction triple.
    pub fn base(&self) -> &SignatureRegistry<V, ElementMapping<V>> {
        &self.inner
    }
}

impl_registry!(NamedElementRegistry, "NamedElementRegistry", |signature, name| {
    signature.with(Pattern::union([Literal::from(name), ALL]))
});
