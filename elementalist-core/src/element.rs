//! # Elements
//!
//! An [`Element`] is an immutable record pairing a payload with the
//! [`Signature`] it is dispatched under, plus its name, classifier tags,
//! guard conditions and free-form metadata.
//!
//! # Guarded invocation
//!
//! Elements whose payload implements [`Invoke`] can be called under two
//! conventions:
//!
//! - [`Element::call_secure`] fails with [`InvokeError::GuardRejected`] when
//!   any guard rejects the call.
//! - [`Element::call`] returns `Ok(None)` instead.
//!
//! Both fail with [`InvokeError::NotCallable`] when the payload is plain data.

use crate::{
    arg::Arg,
    error::InvokeError,
    guard::{Condition, Guard, SharedGuard, resolve_guards},
    handler::Invoke,
    signature::Signature,
};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    sync::Arc,
};

/// Free-form element metadata.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// A registered payload with its dispatch key and descriptive attributes.
#[derive(Clone)]
pub struct Element<V> {
    key: Signature,
    value: V,
    name: String,
    title: String,
    description: String,
    conditions: Vec<SharedGuard<V>>,
    classifiers: BTreeSet<String>,
    metadata: Metadata,
}

impl<V> Element<V> {
    /// Build an element from its payload, key and details.
    pub fn new(value: V, key: Signature, details: Details<V>) -> Self {
        let Details {
            name,
            title,
            description,
            conditions,
            classifiers,
            metadata,
        } = details;
        Self {
            key,
            value,
            name,
            title,
            description,
            conditions,
            classifiers,
            metadata,
        }
    }

    /// The dispatch key.
    pub fn key(&self) -> &Signature {
        &self.key
    }

    /// The payload.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The element name; empty for the default name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short human readable title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Longer human readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Guard conditions, in evaluation order.
    pub fn conditions(&self) -> &[SharedGuard<V>] {
        &self.conditions
    }

    /// Classifier tags.
    pub fn classifiers(&self) -> &BTreeSet<String> {
        &self.classifiers
    }

    /// Free-form metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Evaluate the guards and return the descriptions of those that failed.
    pub fn evaluate(&self, args: &[Arg<'_>]) -> Vec<String> {
        resolve_guards(&self.conditions, self, args)
    }
}

impl<V: Invoke> Element<V> {
    /// Invoke the payload, failing if any guard rejects the call.
    pub fn call_secure(&self, args: &[Arg<'_>]) -> Result<V::Output, InvokeError> {
        self.ensure_callable()?;
        let failed = self.evaluate(args);
        if !failed.is_empty() {
            return Err(InvokeError::GuardRejected { failed });
        }
        self.value.invoke(args)
    }

    /// Invoke the payload, returning `Ok(None)` if any guard rejects the call.
    pub fn call(&self, args: &[Arg<'_>]) -> Result<Option<V::Output>, InvokeError> {
        self.ensure_callable()?;
        if self.evaluate(args).is_empty() {
            self.value.invoke(args).map(Some)
        } else {
            Ok(None)
        }
    }

    fn ensure_callable(&self) -> Result<(), InvokeError> {
        if self.value.is_callable() {
            Ok(())
        } else {
            Err(InvokeError::NotCallable(format!(
                "element {:?} at {}",
                self.name, self.key
            )))
        }
    }
}

impl<V> PartialEq for Element<V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.name == other.name
    }
}

impl<V> AsRef<Element<V>> for Element<V> {
    fn as_ref(&self) -> &Element<V> {
        self
    }
}

impl<V: fmt::Debug> fmt::Debug for Element<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("name", &self.name)
            .field("classifiers", &self.classifiers)
            .field("conditions", &self.conditions.len())
            .field("metadata", &self.metadata)
            .finish()
    }
}

impl<V> fmt::Display for Element<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.key)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// Everything about an element except its payload and key.
///
/// # Example
///
/// ```rust,ignore
/// let details = Details::named("save")
///     .title("Save")
///     .classifier("file")
///     .guard("writable", |_, _| true)
///     .meta("order", 10);
/// ```
pub struct Details<V> {
    /// Element name.
    pub name: String,
    /// Short title.
    pub title: String,
    /// Long description.
    pub description: String,
    /// Guard conditions.
    pub conditions: Vec<SharedGuard<V>>,
    /// Classifier tags.
    pub classifiers: BTreeSet<String>,
    /// Free-form metadata.
    pub metadata: Metadata,
}

impl<V> Default for Details<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Details<V> {
    /// Empty details: default name, no guards, no tags.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            description: String::new(),
            conditions: Vec::new(),
            classifiers: BTreeSet::new(),
            metadata: Metadata::new(),
        }
    }

    /// Details with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().name(name)
    }

    /// Set the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add one classifier tag.
    pub fn classifier(mut self, tag: impl Into<String>) -> Self {
        self.classifiers.insert(tag.into());
        self
    }

    /// Add several classifier tags.
    pub fn classifiers<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.classifiers.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Append a guard.
    pub fn condition(mut self, guard: impl Guard<V> + 'static) -> Self {
        self.conditions.push(Arc::new(guard));
        self
    }

    /// Append an already shared guard.
    pub fn shared_condition(mut self, guard: SharedGuard<V>) -> Self {
        self.conditions.push(guard);
        self
    }

    /// Append a named closure guard.
    pub fn guard<F>(self, name: &'static str, check: F) -> Self
    where
        V: 'static,
        F: Fn(&Element<V>, &[Arg<'_>]) -> bool + Send + Sync + 'static,
    {
        self.condition(Condition::new(name, check))
    }

    /// Attach a metadata entry.
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::Handler;

    fn element<V>(value: V, details: Details<V>) -> Element<V> {
        Element::new(value, Signature::default(), details)
    }

    #[test]
    fn test_defaults() {
        let el = element("payload", Details::new());
        assert_eq!(el.name(), "");
        assert!(el.classifiers().is_empty());
        assert!(el.conditions().is_empty());
        assert!(el.metadata().is_empty());
    }

    #[test]
    fn test_details_builder() {
        let el = element(
            "payload",
            Details::named("save")
                .title("Save")
                .description("Write to disk")
                .classifiers(["file", "io"])
                .meta("order", 3),
        );
        assert_eq!(el.name(), "save");
        assert_eq!(el.title(), "Save");
        assert_eq!(el.description(), "Write to disk");
        assert!(el.classifiers().contains("io"));
        assert_eq!(el.metadata()["order"], serde_json::json!(3));
        assert_eq!(el.to_string(), "save");
    }

    #[test]
    fn test_call_secure_collects_failures() {
        let el = element(
            Handler::new(|args: &[Arg<'_>]| args.len()),
            Details::new()
                .guard("never", |_, _| false)
                .guard("always", |_, _| true)
                .guard("nonempty", |_, args| !args.is_empty()),
        );

        let err = el.call_secure(&[]).unwrap_err();
        assert_eq!(
            err,
            InvokeError::GuardRejected {
                failed: vec!["never".to_string(), "nonempty".to_string()]
            }
        );
    }

    #[test]
    fn test_call_conditional_degrades_to_none() {
        let el = element(
            Handler::new(|args: &[Arg<'_>]| args.len()),
            Details::new().guard("nonempty", |_, args| !args.is_empty()),
        );

        assert_eq!(el.call(&[]).unwrap(), None);
        assert_eq!(el.call(&[Arg::from("x")]).unwrap(), Some(1));
        assert_eq!(el.call_secure(&[Arg::from("x")]).unwrap(), 1);
    }

    #[test]
    fn test_guard_sees_element() {
        let el = element(
            Handler::new(|_: &[Arg<'_>]| "ran"),
            Details::named("admin").guard("named admin", |el, _| el.name() == "admin"),
        );
        assert_eq!(el.call_secure(&[]).unwrap(), "ran");
    }

    #[test]
    fn test_plain_data_is_not_callable() {
        let el = element("data", Details::new().guard("never", |_, _| false));
        assert!(matches!(el.call(&[]), Err(InvokeError::NotCallable(_))));
        assert!(matches!(el.call_secure(&[]), Err(InvokeError::NotCallable(_))));
    }
}
