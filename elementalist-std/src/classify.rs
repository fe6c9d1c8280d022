//! Classifier tag filters.
//!
//! Filters are lazy iterator adaptors over anything that exposes a classifier
//! set. They never touch the source: cloning a [`Classify`] built on a
//! cloneable iterator (a slice iterator, say) restarts the filter from the
//! beginning.
//!
//! ```rust,ignore
//! let elements: Vec<Arc<Element<_>>> = registry.elements().cloned().collect();
//! let html: Vec<_> = one_of(&elements, ["html", "json"])?.collect();
//! ```

use elementalist_core::{ClassifierError, Element};
use std::{collections::BTreeSet, sync::Arc};

/// Anything carrying a set of classifier tags.
pub trait Classified {
    /// The tag set.
    fn classifiers(&self) -> &BTreeSet<String>;
}

impl<V> Classified for Element<V> {
    fn classifiers(&self) -> &BTreeSet<String> {
        Element::classifiers(self)
    }
}

impl<T: Classified + ?Sized> Classified for &T {
    fn classifiers(&self) -> &BTreeSet<String> {
        (**self).classifiers()
    }
}

impl<T: Classified + ?Sized> Classified for Arc<T> {
    fn classifiers(&self) -> &BTreeSet<String> {
        (**self).classifiers()
    }
}

/// How an element's tags are compared with the requested ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// At least one requested tag is present.
    OneOf,
    /// The tag sets are equal.
    Exact,
    /// Every requested tag is present.
    Partial,
}

impl Mode {
    /// Whether `tags` satisfies `query` under this mode.
    pub fn accepts(self, tags: &BTreeSet<String>, query: &BTreeSet<String>) -> bool {
        match self {
            Mode::OneOf => !tags.is_disjoint(query),
            Mode::Exact => tags == query,
            Mode::Partial => tags.is_superset(query),
        }
    }
}

/// Lazy filter produced by [`one_of`], [`exact`] and [`partial`].
#[derive(Debug, Clone)]
pub struct Classify<I> {
    inner: I,
    mode: Mode,
    query: BTreeSet<String>,
}

impl<I> Classify<I> {
    /// Wrap `inner`; fails when `tags` is empty.
    pub fn new<T>(inner: I, mode: Mode, tags: T) -> Result<Self, ClassifierError>
    where
        T: IntoIterator,
        T::Item: Into<String>,
    {
        let query: BTreeSet<String> = tags.into_iter().map(Into::into).collect();
        if query.is_empty() {
            return Err(ClassifierError::EmptyQuery);
        }
        Ok(Self { inner, mode, query })
    }

    /// The comparison mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The requested tags.
    pub fn query(&self) -> &BTreeSet<String> {
        &self.query
    }
}

impl<I> Iterator for Classify<I>
where
    I: Iterator,
    I::Item: Classified,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let (mode, query) = (self.mode, &self.query);
        self.inner
            .by_ref()
            .find(|item| mode.accepts(item.classifiers(), query))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Keep elements sharing at least one tag with `tags`.
pub fn one_of<E, T>(elements: E, tags: T) -> Result<Classify<E::IntoIter>, ClassifierError>
where
    E: IntoIterator,
    E::Item: Classified,
    T: IntoIterator,
    T::Item: Into<String>,
{
    Classify::new(elements.into_iter(), Mode::OneOf, tags)
}

/// Keep elements whose tag set equals `tags`.
pub fn exact<E, T>(elements: E, tags: T) -> Result<Classify<E::IntoIter>, ClassifierError>
where
    E: IntoIterator,
    E::Item: Classified,
    T: IntoIterator,
    T::Item: Into<String>,
{
    Classify::new(elements.into_iter(), Mode::Exact, tags)
}

/// Keep elements whose tag set contains every tag in `tags`.
pub fn partial<E, T>(elements: E, tags: T) -> Result<Classify<E::IntoIter>, ClassifierError>
where
    E: IntoIterator,
    E::Item: Classified,
    T: IntoIterator,
    T::Item: Into<String>,
{
    Classify::new(elements.into_iter(), Mode::Partial, tags)
}
