//! Registry with unique signatures and single-winner resolution.

use super::{base::SignatureRegistry, impl_registry};
use crate::store::ElementMapping;
use elementalist_core::{Arg, Element, Hierarchy, LookupError, Signature};
use std::sync::Arc;

/// One element per exact signature; `lookup` picks the most specific match.
pub struct MappingRegistry<V> {
    inner: SignatureRegistry<V, ElementMapping<V>>,
}

impl<V: Send + Sync> MappingRegistry<V> {
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

    /// The element under the single most specific matching signature.
    ///
    /// Fails with [`LookupError::NoMatch`] when nothing matches and with
    /// [`LookupError::AmbiguousMatch`] when several incomparable signatures
    /// are equally specific.
    pub fn lookup(&self, args: &[Arg<'_>]) -> Result<&Arc<Element<V>>, LookupError> {
        self.inner.lookup(args)
    }

    /// Alias of [`lookup`](MappingRegistry::lookup).
    pub fn get(&self, args: &[Arg<'_>]) -> Result<&Arc<Element<V>>, LookupError> {
        self.lookup(args)
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

impl_registry!(MappingRegistry, "MappingRegistry", |signature, _| signature);
