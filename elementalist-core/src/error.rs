//! Error types for Elementalist.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ElementalistError`] - Top-level error type for all Elementalist operations
//! - [`RegistryError`] - Errors while registering or merging
//! - [`LookupError`] - Errors while resolving a single winner
//! - [`InvokeError`] - Errors from guarded invocation of an element
//! - [`HierarchyError`] - Errors while building the type table
//! - [`ClassifierError`] - Errors from classifier filters

use crate::signature::Signature;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Elementalist operations.
#[derive(Error, Debug)]
pub enum ElementalistError {
    /// An error occurred during registration or merge.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// An error occurred during resolution.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// An error occurred while invoking an element.
    #[error("invoke error: {0}")]
    Invoke(#[from] InvokeError),

    /// The type hierarchy is malformed.
    #[error("hierarchy error: {0}")]
    Hierarchy(#[from] HierarchyError),

    /// A classifier filter was misused.
    #[error("classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised while mutating or combining registries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The signature is not dominated by any member of the restriction set.
    #[error("signature {signature} does not match any restriction")]
    RestrictionViolation {
        /// The rejected signature.
        signature: Signature,
    },

    /// Two registries of different variants were merged.
    #[error("unsupported merge between {left} and {right}")]
    IncompatibleMerge {
        /// Variant of the left operand.
        left: &'static str,
        /// Variant of the right operand.
        right: &'static str,
    },
}

/// Errors raised while resolving the single most specific element.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No registered signature accepts the arguments.
    #[error("no signature matches {query}")]
    NoMatch {
        /// Rendering of the queried argument tuple.
        query: String,
    },

    /// Several mutually incomparable signatures are equally specific.
    #[error("could not determine the most precise signature for {query}: {}", render(.candidates))]
    AmbiguousMatch {
        /// Rendering of the queried argument tuple.
        query: String,
        /// The tied, maximally specific candidates.
        candidates: Vec<Signature>,
    },
}

/// Errors raised by a guarded invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    /// One or more guards rejected the call.
    #[error("rejected by guards: {}", .failed.join(", "))]
    GuardRejected {
        /// Descriptions of the failing guards, in evaluation order.
        failed: Vec<String>,
    },

    /// The element payload is plain data.
    #[error("{0} is not callable")]
    NotCallable(String),
}

/// Errors raised while building a [`Hierarchy`](crate::Hierarchy).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// The subtype relation contains a cycle through this type.
    #[error("type hierarchy has a cycle through {0}")]
    Cycle(&'static str),

    /// A type was used without being declared.
    #[error("type {0} was not declared")]
    Undeclared(&'static str),
}

/// Errors raised by classifier filters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierError {
    /// The filter was called without any classifier.
    #[error("at least one classifier is required")]
    EmptyQuery,
}

fn render(signatures: &[Signature]) -> String {
    signatures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// Convenience conversions
impl From<BoxError> for ElementalistError {
    fn from(err: BoxError) -> Self {
        ElementalistError::Custom(err)
    }
}
