//! # elementalist-std
//!
//! Dispatch engine for the Elementalist signature registry.
//!
//! This crate provides:
//! - **Stores**: [`ElementCollection`](store::ElementCollection), [`ElementMapping`](store::ElementMapping)
//! - **Resolution**: [`SignatureResolver`](resolver::SignatureResolver), [`most_specific_first`](resolver::most_specific_first)
//! - **Registries**: collection, mapping, named and specific variants, plus
//!   [`AnyRegistry`](registry::AnyRegistry) and [`RegistryBuilder`](registry::RegistryBuilder)
//! - **Classifier filters**: [`one_of`](classify::one_of), [`exact`](classify::exact), [`partial`](classify::partial)
//! - **Standard guards**: Traced, Not, Arity
//! - **Testing utilities**: fixture hierarchy, recording guard, counting handler

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core vocabulary
pub use elementalist_core;

// Modules
pub mod classify;
pub mod guards;
pub mod registry;
pub mod resolver;
pub mod store;
pub mod testing;
