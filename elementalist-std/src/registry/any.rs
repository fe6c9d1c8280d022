//! Registry variant chosen at runtime.

use super::{
    CollectionRegistry, MappingRegistry, NamedElementRegistry, Registry, SpecificElementRegistry,
};
use elementalist_core::{Arg, Details, Element, Pattern, RegistryError, Signature};
use indexmap::IndexSet;
use std::{fmt, sync::Arc};

/// One of the four registry variants.
///
/// Useful when the variant is picked from configuration or when registries
/// from several plugins are combined: merging two different variants is an
/// error rather than a type mismatch.
pub enum AnyRegistry<V> {
    /// See [`CollectionRegistry`].
    Collection(CollectionRegistry<V>),
    /// See [`MappingRegistry`].
    Mapping(MappingRegistry<V>),
    /// See [`NamedElementRegistry`].
    Named(NamedElementRegistry<V>),
    /// See [`SpecificElementRegistry`].
    Specific(SpecificElementRegistry<V>),
}

impl<V: Send + Sync> AnyRegistry<V> {
    /// Merge two registries of the same variant into a new one.
    pub fn try_merge(&self, other: &AnyRegistry<V>) -> Result<AnyRegistry<V>, RegistryError> {
        match (self, other) {
            (AnyRegistry::Collection(a), AnyRegistry::Collection(b)) => {
                Ok(AnyRegistry::Collection(a | b))
            }
            (AnyRegistry::Mapping(a), AnyRegistry::Mapping(b)) => Ok(AnyRegistry::Mapping(a | b)),
            (AnyRegistry::Named(a), AnyRegistry::Named(b)) => Ok(AnyRegistry::Named(a | b)),
            (AnyRegistry::Specific(a), AnyRegistry::Specific(b)) => {
                Ok(AnyRegistry::Specific(a | b))
            }
            _ => Err(RegistryError::IncompatibleMerge {
                left: self.variant(),
                right: other.variant(),
            }),
        }
    }

    /// All matching elements, most specific first.
    ///
    /// Named registries contribute their per-name winners; specific
    /// registries expect the name as the first argument.
    pub fn match_all(&self, args: &[Arg<'_>]) -> Vec<&Arc<Element<V>>> {
        match self {
            AnyRegistry::Collection(registry) => registry.match_all(args),
            AnyRegistry::Mapping(registry) => registry.match_all(args),
            AnyRegistry::Named(registry) => registry.match_all(args).into_values().collect(),
            AnyRegistry::Specific(registry) => registry.match_all(args),
        }
    }
}

impl<V: Send + Sync> Registry<V> for AnyRegistry<V> {
    fn variant(&self) -> &'static str {
        match self {
            AnyRegistry::Collection(registry) => registry.variant(),
            AnyRegistry::Mapping(registry) => registry.variant(),
            AnyRegistry::Named(registry) => registry.variant(),
            AnyRegistry::Specific(registry) => registry.variant(),
        }
    }

    fn create_with<I>(
        &mut self,
        value: V,
        discriminant: I,
        details: Details<V>,
    ) -> Result<Arc<Element<V>>, RegistryError>
    where
        I: IntoIterator,
        I::Item: Into<Pattern>,
    {
        match self {
            AnyRegistry::Collection(registry) => registry.create_with(value, discriminant, details),
            AnyRegistry::Mapping(registry) => registry.create_with(value, discriminant, details),
            AnyRegistry::Named(registry) => registry.create_with(value, discriminant, details),
            AnyRegistry::Specific(registry) => registry.create_with(value, discriminant, details),
        }
    }

    fn len(&self) -> usize {
        match self {
            AnyRegistry::Collection(registry) => registry.len(),
            AnyRegistry::Mapping(registry) => registry.len(),
            AnyRegistry::Named(registry) => registry.len(),
            AnyRegistry::Specific(registry) => registry.len(),
        }
    }

    fn restrictions(&self) -> &IndexSet<Signature> {
        match self {
            AnyRegistry::Collection(registry) => registry.restrictions(),
            AnyRegistry::Mapping(registry) => registry.restrictions(),
            AnyRegistry::Named(registry) => registry.restrictions(),
            AnyRegistry::Specific(registry) => registry.restrictions(),
        }
    }
}

impl<V: Send + Sync> fmt::Debug for AnyRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyRegistry")
            .field("variant", &self.variant())
            .field("len", &self.len())
            .finish()
    }
}

impl<V> From<CollectionRegistry<V>> for AnyRegistry<V> {
    fn from(registry: CollectionRegistry<V>) -> Self {
        AnyRegistry::Collection(registry)
    }
}

impl<V> From<MappingRegistry<V>> for AnyRegistry<V> {
    fn from(registry: MappingRegistry<V>) -> Self {
        AnyRegistry::Mapping(registry)
    }
}

impl<V> From<NamedElementRegistry<V>> for AnyRegistry<V> {
    fn from(registry: NamedElementRegistry<V>) -> Self {
        AnyRegistry::Named(registry)
    }
}

impl<V> From<SpecificElementRegistry<V>> for AnyRegistry<V> {
    fn from(registry: SpecificElementRegistry<V>) -> Self {
        AnyRegistry::Specific(registry)
    }
}
