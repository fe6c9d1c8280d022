//! The store + resolver + restriction triple every registry variant wraps.

use crate::{
    resolver::{SignatureResolver, most_specific_first},
    store::Store,
};
use elementalist_core::{Arg, Details, Element, Hierarchy, LookupError, RegistryError, Signature};
use indexmap::IndexSet;
use std::{marker::PhantomData, sync::Arc};

/// A store, the resolver kept in sync with it, and a restriction set.
///
/// Mutation goes through `&mut self` only, so a registry can never be
/// written while it is being read. Once built it can be shared behind an
/// `Arc` for concurrent lookups.
pub struct SignatureRegistry<V, S> {
    resolver: SignatureResolver,
    store: S,
    restrict: IndexSet<Signature>,
    _marker: PhantomData<fn() -> V>,
}

impl<V, S: Store<V>> SignatureRegistry<V, S> {
    /// An empty, unrestricted registry.
    pub fn new(hierarchy: Arc<Hierarchy>) -> Self {
        Self::with_restrictions(hierarchy, [])
    }

    /// An empty registry accepting only signatures dominated by a restriction.
    pub fn with_restrictions<I>(hierarchy: Arc<Hierarchy>, restrictions: I) -> Self
    where
        I: IntoIterator<Item = Signature>,
    {
        Self {
            resolver: SignatureResolver::new(hierarchy),
            store: S::default(),
            restrict: restrictions.into_iter().collect(),
            _marker: PhantomData,
        }
    }

    /// The resolver.
    pub fn resolver(&self) -> &SignatureResolver {
        &self.resolver
    }

    /// The store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The type table.
    pub fn hierarchy(&self) -> &Arc<Hierarchy> {
        self.resolver.hierarchy()
    }

    /// The restriction set; empty means unrestricted.
    pub fn restrictions(&self) -> &IndexSet<Signature> {
        &self.restrict
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Stored elements in store order.
    pub fn elements(&self) -> impl Iterator<Item = &Arc<Element<V>>> {
        self.store.iter()
    }

    /// Check `signature` against the restriction set.
    pub fn assert_valid(&self, signature: &Signature) -> Result<(), RegistryError> {
        if self.restrict.is_empty() || self.restrict.iter().any(|bound| signature <= bound) {
            Ok(())
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(%signature, "signature rejected by restrictions");
            Err(RegistryError::RestrictionViolation {
                signature: signature.clone(),
            })
        }
    }

    /// Validate, then register the signature and store the element.
    ///
    /// Nothing is modified when validation fails.
    pub fn insert(
        &mut self,
        value: V,
        signature: Signature,
        details: Details<V>,
    ) -> Result<Arc<Element<V>>, RegistryError> {
        self.assert_valid(&signature)?;

        let element = Arc::new(Element::new(value, signature.clone(), details));
        #[cfg(feature = "tracing")]
        tracing::debug!(%signature, name = element.name(), "registered element");

        self.resolver.register(signature);
        self.store.insert(Arc::clone(&element));
        Ok(element)
    }

    /// Every stored element accepting `args`, most specific first.
    pub fn match_all(&self, args: &[Arg<'_>]) -> Vec<&Arc<Element<V>>> {
        let probes = self.resolver.probe(args);
        let found: Vec<&Arc<Element<V>>> = self
            .store
            .iter()
            .filter(|element| element.key().matches(&probes))
            .collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(matches = found.len(), "matched elements");
        most_specific_first(found, |element| element.key())
    }

    /// The element stored under the single most specific matching signature.
    pub fn lookup(&self, args: &[Arg<'_>]) -> Result<&Arc<Element<V>>, LookupError> {
        let signature = self.resolver.resolve(args)?;
        self.store
            .get(signature)
            .ok_or_else(|| LookupError::NoMatch {
                query: signature.to_string(),
            })
    }

    /// A new registry holding both operands; neither operand is modified.
    pub fn union(&self, other: &Self) -> Self {
        let mut restrict = self.restrict.clone();
        restrict.extend(other.restrict.iter().cloned());
        Self {
            resolver: self.resolver.union(&other.resolver),
            store: self.store.union(&other.store),
            restrict,
            _marker: PhantomData,
        }
    }
}

impl<V, S: Clone> Clone for SignatureRegistry<V, S> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            store: self.store.clone(),
            restrict: self.restrict.clone(),
            _marker: PhantomData,
        }
    }
}
