//! Registry requiring an exact name.

use super::{base::SignatureRegistry, impl_registry};
use crate::store::ElementMapping;
use elementalist_core::{Arg, DEFAULT, Element, Hierarchy, Literal, LookupError, Signature};
use std::sync::Arc;

/// Signatures start with the element's exact name; there is no `ALL`
/// fallback, so queries for an unknown name find nothing.
pub struct SpecificElementRegistry<V> {
    inner: SignatureRegistry<V, ElementMapping<V>>,
}

impl<V: Send + Sync> SpecificElementRegistry<V> {
    /// An empty, unrestricted registry.
    pub fn new(hierarchy: Arc<Hierarchy>) -> Self {
        Self {
            inner: SignatureRegistry::new(hierarchy),
        }
    }

    /// An empty registry bounded by `restrictions`.
    ///
    /// Restrictions must include the leading name position, e.g.
    /// `(Any, Context, View)`.
    pub fn with_restrictions<I>(hierarchy: Arc<Hierarchy>, restrictions: I) -> Self
    where
        I: IntoIterator<Item = Signature>,
    {
        Self {
            inner: SignatureRegistry::with_restrictions(hierarchy, restrictions),
        }
    }

    /// All matching elements for a raw tuple whose first entry is the name.
    pub fn match_all(&self, args: &[Arg<'_>]) -> Vec<&Arc<Element<V>>> {
        self.inner.match_all(args)
    }

    /// All elements registered under exactly `name` that accept `args`.
    pub fn match_name(&self, name: &str, args: &[Arg<'_>]) -> Vec<&Arc<Element<V>>> {
        self.match_all(&with_name(name, args))
    }

    /// Resolve against a raw tuple whose first entry is the name.
    pub fn lookup(&self, args: &[Arg<'_>]) -> Result<&Arc<Element<V>>, LookupError> {
        self.inner.lookup(args)
    }

    /// The most specific element registered under exactly `name`.
    pub fn get(&self, args: &[Arg<'_>], name: &str) -> Result<&Arc<Element<V>>, LookupError> {
        self.lookup(&with_name(name, args))
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

fn with_name<'a>(name: &str, args: &[Arg<'a>]) -> Vec<Arg<'a>> {
    let mut query = Vec::with_capacity(args.len() + 1);
    query.push(Arg::from(name));
    query.extend(args.iter().cloned());
    query
}

impl_registry!(
    SpecificElementRegistry,
    "SpecificElementRegistry",
    |signature, name| signature.with_leading(Literal::from(name))
);
