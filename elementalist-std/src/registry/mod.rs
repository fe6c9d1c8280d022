//! # Registries
//!
//! A registry composes one [`Store`](crate::store::Store), one
//! [`SignatureResolver`](crate::resolver::SignatureResolver) and a
//! restriction set. Four variants differ in how they build signatures and
//! what queries they answer:
//!
//! | Variant | Store | `match_all` | `lookup` / `get` |
//! |---|---|---|---|
//! | [`CollectionRegistry`] | ordered, duplicates kept | all matches, most specific first | none |
//! | [`MappingRegistry`] | unique by signature | all matches, most specific first | single most specific winner |
//! | [`NamedElementRegistry`] | unique, trailing `name \| ALL` | most specific match per name | within one name |
//! | [`SpecificElementRegistry`] | unique, leading exact name | matches for that exact name only | exact name required |
//!
//! Registries of the same variant merge with `&a | &b` into a new,
//! independently owned registry. [`AnyRegistry`] holds a variant chosen at
//! runtime and reports [`RegistryError::IncompatibleMerge`] instead.

mod any;
mod base;
mod builder;
mod collection;
mod mapping;
mod named;
mod specific;

pub use any::AnyRegistry;
pub use base::SignatureRegistry;
pub use builder::RegistryBuilder;
pub use collection::CollectionRegistry;
pub use mapping::MappingRegistry;
pub use named::NamedElementRegistry;
pub use specific::SpecificElementRegistry;

use elementalist_core::{Details, Element, Pattern, RegistryError, Signature};
use indexmap::IndexSet;
use std::sync::Arc;

/// Registration interface shared by every variant.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Registry` of `{V}`",
    label = "missing `Registry` implementation"
)]
pub trait Registry<V> {
    /// Name of the concrete variant.
    fn variant(&self) -> &'static str;

    /// Build an element from `value`, `discriminant` and `details` and store it.
    ///
    /// Fails with [`RegistryError::RestrictionViolation`] without modifying the
    /// registry when the resulting signature is outside the restriction set.
    fn create_with<I>(
        &mut self,
        value: V,
        discriminant: I,
        details: Details<V>,
    ) -> Result<Arc<Element<V>>, RegistryError>
    where
        I: IntoIterator,
        I::Item: Into<Pattern>;

    /// Number of stored elements.
    fn len(&self) -> usize;

    /// The restriction set; empty means unrestricted.
    fn restrictions(&self) -> &IndexSet<Signature>;

    /// Whether nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// [`create_with`](Registry::create_with) using default details.
    fn create<I>(&mut self, value: V, discriminant: I) -> Result<Arc<Element<V>>, RegistryError>
    where
        I: IntoIterator,
        I::Item: Into<Pattern>,
    {
        self.create_with(value, discriminant, Details::new())
    }

    /// Register a handler as it is defined and hand it back unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let render = registry.register(
    ///     [&fx.context, &fx.view],
    ///     Details::named("render"),
    ///     |args: &[Arg<'_>]| args.len(),
    /// )?;
    /// // `render` is still the plain closure.
    /// ```
    fn register<F, I>(
        &mut self,
        discriminant: I,
        details: Details<V>,
        handler: F,
    ) -> Result<F, RegistryError>
    where
        F: Clone + Into<V>,
        I: IntoIterator,
        I::Item: Into<Pattern>,
    {
        self.create_with(handler.clone().into(), discriminant, details)?;
        Ok(handler)
    }
}

/// Implement `Registry` and `|` for a newtype over [`SignatureRegistry`].
///
/// `$build` turns the discriminant signature and the element name into the
/// stored signature.
macro_rules! impl_registry {
    ($name:ident, $variant:literal, $build:expr) => {
        impl<V: Send + Sync> $crate::registry::Registry<V> for $name<V> {
            fn variant(&self) -> &'static str {
                $variant
            }

            fn create_with<I>(
                &mut self,
                value: V,
                discriminant: I,
                details: elementalist_core::Details<V>,
            ) -> Result<std::sync::Arc<elementalist_core::Element<V>>, elementalist_core::RegistryError>
            where
                I: IntoIterator,
                I::Item: Into<elementalist_core::Pattern>,
            {
                let build: fn(elementalist_core::Signature, &str) -> elementalist_core::Signature =
                    $build;
                let signature = build(elementalist_core::Signature::new(discriminant), &details.name);
                self.inner.insert(value, signature, details)
            }

            fn len(&self) -> usize {
                self.inner.len()
            }

            fn restrictions(&self) -> &indexmap::IndexSet<elementalist_core::Signature> {
                self.inner.restrictions()
            }
        }

        impl<V: Send + Sync> std::ops::BitOr for &$name<V> {
            type Output = $name<V>;

            fn bitor(self, rhs: Self) -> Self::Output {
                $name {
                    inner: self.inner.union(&rhs.inner),
                }
            }
        }

        impl<V: Send + Sync> std::fmt::Debug for $name<V> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct($variant)
                    .field("len", &self.inner.len())
                    .field("restrictions", &self.inner.restrictions().len())
                    .finish()
            }
        }

        impl<V> Clone for $name<V> {
            fn clone(&self) -> Self {
                $name {
                    inner: self.inner.clone(),
                }
            }
        }
    };
}

pub(crate) use impl_registry;
