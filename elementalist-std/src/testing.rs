//! Testing utilities for Elementalist.
//!
//! This module provides utilities to make testing registries, guards and
//! handlers easier.
//!
//! # Features
//!
//! - [`Fixture`]: A small `Context`/`View` type hierarchy with ready-made kinds
//! - [`RecordingGuard`]: A guard that records every check and returns a fixed verdict
//! - [`CountingHandler`]: A handler factory that counts invocations

use elementalist_core::{Arg, Element, Guard, Handler, Hierarchy, HierarchyError, Kind, Signature};
use std::{
    borrow::Cow,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

// ============================================================================
// Fixture Hierarchy
// ============================================================================

/// Base context type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context;

/// A context subtype.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubContext;

/// Base view type.
#[derive(Debug, Clone, Copy, Default)]
pub struct View;

/// A view subtype.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubView;

/// The `Context`/`View` hierarchy with its kinds.
///
/// # Example
///
/// ```rust,ignore
/// let fx = Fixture::new();
/// let mut registry = MappingRegistry::new(fx.hierarchy.clone());
/// registry.create("base", [&fx.context, &fx.view])?;
/// ```
#[derive(Clone)]
pub struct Fixture {
    /// The type table.
    pub hierarchy: Arc<Hierarchy>,
    /// Kind of [`Context`].
    pub context: Kind,
    /// Kind of [`SubContext`].
    pub sub_context: Kind,
    /// Kind of [`View`].
    pub view: Kind,
    /// Kind of [`SubView`].
    pub sub_view: Kind,
}

impl Fixture {
    /// Build the fixture hierarchy.
    ///
    /// # Panics
    ///
    /// Never in practice; see [`Fixture::try_new`].
    pub fn new() -> Self {
        Self::try_new().expect("fixture hierarchy is acyclic and fully declared")
    }

    /// Build the fixture hierarchy, propagating hierarchy errors.
    pub fn try_new() -> Result<Self, HierarchyError> {
        let hierarchy = Hierarchy::builder()
            .declare::<Context>()
            .declare::<SubContext>()
            .declare::<View>()
            .declare::<SubView>()
            .extends::<SubContext, Context>()
            .extends::<SubView, View>()
            .build()?;
        Ok(Self {
            context: hierarchy.kind::<Context>()?,
            sub_context: hierarchy.kind::<SubContext>()?,
            view: hierarchy.kind::<View>()?,
            sub_view: hierarchy.kind::<SubView>()?,
            hierarchy: Arc::new(hierarchy),
        })
    }

    /// `(Context, View)`, `(Context, SubView)` and `(SubContext, View)`.
    pub fn signatures(&self) -> (Signature, Signature, Signature) {
        (
            Signature::new([&self.context, &self.view]),
            Signature::new([&self.context, &self.sub_view]),
            Signature::new([&self.sub_context, &self.view]),
        )
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Recording Guard
// ============================================================================

/// A guard that records the arity of every call it checks.
///
/// # Example
///
/// ```rust,ignore
/// let guard = RecordingGuard::rejecting("closed");
/// let details = Details::new().condition(guard.clone());
///
/// // ... invoke the element ...
///
/// assert_eq!(guard.count(), 1);
/// ```
pub struct RecordingGuard {
    name: &'static str,
    verdict: bool,
    calls: Arc<Mutex<Vec<usize>>>,
}

impl RecordingGuard {
    /// A guard that lets every call through.
    pub fn accepting(name: &'static str) -> Self {
        Self {
            name,
            verdict: true,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A guard that rejects every call.
    pub fn rejecting(name: &'static str) -> Self {
        Self {
            verdict: false,
            ..Self::accepting(name)
        }
    }

    /// Argument counts of the recorded checks.
    pub fn calls(&self) -> Vec<usize> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded checks.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Forget recorded checks.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Clone for RecordingGuard {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            verdict: self.verdict,
            calls: self.calls.clone(),
        }
    }
}

impl<V> Guard<V> for RecordingGuard {
    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name)
    }

    fn check(&self, _element: &Element<V>, args: &[Arg<'_>]) -> bool {
        self.calls.lock().unwrap().push(args.len());
        self.verdict
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// Hands out handlers that count their invocations.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHandler::new();
/// registry.create(counter.handler(), [&fx.context])?;
///
/// // ... call the element ...
///
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counter.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A handler returning the invocation count after incrementing it.
    pub fn handler(&self) -> Handler<usize> {
        let count = Arc::clone(&self.count);
        Handler::new(move |_: &[Arg<'_>]| count.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingHandler {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}
