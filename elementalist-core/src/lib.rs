//! # elementalist-core
//!
//! Core vocabulary for the Elementalist signature dispatch registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! plugins that only need to describe handlers, not resolve them.
//!
//! # Building Blocks
//!
//! ## Type table ([`Hierarchy`], [`Kind`])
//!
//! Subtyping is data: a hierarchy declares which Rust types take part in
//! dispatch and which of them extend which. Every [`Kind`] carries its full
//! ancestor set.
//!
//! ## Signatures ([`Pattern`], [`Signature`])
//!
//! A signature is a positional tuple of patterns. Signatures are partially
//! ordered by specificity; two signatures may be incomparable, which is how
//! ambiguous dispatch is detected.
//!
//! ## Elements ([`Element`], [`Details`], [`Guard`])
//!
//! An element pairs a payload with its signature, a name, classifier tags,
//! guard conditions and metadata. Payloads implementing [`Invoke`] can be
//! called through the guards.
//!
//! # Error Types
//!
//! - [`ElementalistError`] - Top-level error type
//! - [`RegistryError`] - Registration and merge errors
//! - [`LookupError`] - Resolution errors
//! - [`InvokeError`] - Guarded invocation errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod arg;
mod element;
mod error;
mod guard;
mod handler;
mod kind;
mod pattern;
mod signature;

// Re-exports
pub use arg::{Arg, Probe, render_probes};
pub use element::{Details, Element, Metadata};
pub use error::{
    BoxError, ClassifierError, ElementalistError, HierarchyError, InvokeError, LookupError,
    RegistryError,
};
pub use guard::{Condition, Guard, SharedGuard, resolve_guards};
pub use handler::{Handler, Invoke};
pub use kind::{Hierarchy, HierarchyBuilder, Kind};
pub use pattern::{ALL, Alternatives, DEFAULT, Literal, Pattern};
pub use signature::Signature;
