//! Guard conditions gating the invocation of an element.
//!
//! A guard is a boolean check evaluated against the element and the call
//! arguments. [`resolve_guards`] applies a list of guards and collects the
//! ones that failed.

use crate::{arg::Arg, element::Element};
use std::{borrow::Cow, sync::Arc};

/// A boolean check gating an element's payload.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Guard` for elements holding `{V}`",
    label = "missing `Guard` implementation",
    note = "Wrap a closure with `Condition::new` to get a guard."
)]
pub trait Guard<V>: Send + Sync {
    /// Human readable description, reported when the guard fails.
    fn describe(&self) -> Cow<'_, str>;

    /// Whether the call may proceed.
    fn check(&self, element: &Element<V>, args: &[Arg<'_>]) -> bool;
}

/// A shared, type-erased guard.
pub type SharedGuard<V> = Arc<dyn Guard<V>>;

/// A named closure guard.
pub struct Condition<F> {
    name: Cow<'static, str>,
    check: F,
}

impl<F> Condition<F> {
    /// Create a guard named `name` from a predicate.
    pub fn new(name: impl Into<Cow<'static, str>>, check: F) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

impl<V, F> Guard<V> for Condition<F>
where
    F: Fn(&Element<V>, &[Arg<'_>]) -> bool + Send + Sync,
{
    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn check(&self, element: &Element<V>, args: &[Arg<'_>]) -> bool {
        (self.check)(element, args)
    }
}

/// Evaluate guards in order and return the descriptions of those that failed.
///
/// Every guard is evaluated even after a failure so the caller gets the full
/// list.
pub fn resolve_guards<V>(
    guards: &[SharedGuard<V>],
    element: &Element<V>,
    args: &[Arg<'_>],
) -> Vec<String> {
    guards
        .iter()
        .filter(|guard| !guard.check(element, args))
        .map(|guard| guard.describe().into_owned())
        .collect()
}
