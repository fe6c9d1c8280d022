//! Builder for registries sharing a type table and restriction set.

use super::{CollectionRegistry, MappingRegistry, NamedElementRegistry, SpecificElementRegistry};
use elementalist_core::{Hierarchy, Pattern, Signature};
use std::sync::Arc;

/// Configures the type table and restriction set, then builds any variant.
///
/// # Example
///
/// ```rust,ignore
/// let registry = RegistryBuilder::new(hierarchy)
///     .restrict([&ctx, &view])
///     .mapping::<Handler<()>>();
/// ```
#[derive(Clone)]
pub struct RegistryBuilder {
    hierarchy: Arc<Hierarchy>,
    restrictions: Vec<Signature>,
}

impl RegistryBuilder {
    /// Start from a type table.
    pub fn new(hierarchy: impl Into<Arc<Hierarchy>>) -> Self {
        Self {
            hierarchy: hierarchy.into(),
            restrictions: Vec::new(),
        }
    }

    /// Add a restriction signature built from its patterns.
    pub fn restrict<I>(mut self, patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Pattern>,
    {
        self.restrictions.push(Signature::new(patterns));
        self
    }

    /// Add several restriction signatures.
    pub fn restrict_all<I>(mut self, restrictions: I) -> Self
    where
        I: IntoIterator<Item = Signature>,
    {
        self.restrictions.extend(restrictions);
        self
    }

    /// Number of configured restrictions.
    pub fn restriction_count(&self) -> usize {
        self.restrictions.len()
    }

    /// Build a [`CollectionRegistry`].
    pub fn collection<V: Send + Sync>(self) -> CollectionRegistry<V> {
        CollectionRegistry::with_restrictions(self.hierarchy, self.restrictions)
    }

    /// Build a [`MappingRegistry`].
    pub fn mapping<V: Send + Sync>(self) -> MappingRegistry<V> {
        MappingRegistry::with_restrictions(self.hierarchy, self.restrictions)
    }

    /// Build a [`NamedElementRegistry`].
    pub fn named<V: Send + Sync>(self) -> NamedElementRegistry<V> {
        NamedElementRegistry::with_restrictions(self.hierarchy, self.restrictions)
    }

    /// Build a [`SpecificElementRegistry`].
    pub fn specific<V: Send + Sync>(self) -> SpecificElementRegistry<V> {
        SpecificElementRegistry::with_restrictions(self.hierarchy, self.restrictions)
    }
}
