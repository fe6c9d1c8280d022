//! # elementalist - Signature Dispatch Registry
//!
//! `elementalist` stores handlers under positional type signatures and, given
//! concrete call arguments, finds every handler that applies (most specific
//! first) or the single most specific one. Two equally specific but
//! incomparable handlers are reported as ambiguous, never picked arbitrarily.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use elementalist::prelude::*;
//!
//! struct Request;
//! struct Admin;
//!
//! let hierarchy = Hierarchy::builder()
//!     .declare::<Request>()
//!     .declare::<Admin>()
//!     .extends::<Admin, Request>()
//!     .build()?;
//! let request = hierarchy.kind::<Request>()?;
//! let admin = hierarchy.kind::<Admin>()?;
//!
//! let mut registry = MappingRegistry::new(hierarchy.into());
//! registry.create("generic", [&request])?;
//! registry.create("admin only", [&admin])?;
//!
//! let winner = registry.lookup(&[Arg::value(&Admin)])?;
//! assert_eq!(*winner.value(), "admin only");
//! ```
//!
//! ## Registry Variants
//!
//! | Variant | Use it for |
//! |---|---|
//! | [`CollectionRegistry`] | every applicable handler, duplicates kept |
//! | [`MappingRegistry`] | one handler per signature, single-winner lookup |
//! | [`NamedElementRegistry`] | the best handler per name (views, actions) |
//! | [`SpecificElementRegistry`] | handlers addressed by an exact name |

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use elementalist_core::{
    // Arguments
    ALL,
    Alternatives,
    Arg,
    // Error types
    BoxError,
    ClassifierError,
    // Guards
    Condition,
    DEFAULT,
    // Elements
    Details,
    Element,
    ElementalistError,
    Guard,
    // Payloads
    Handler,
    // Type table
    Hierarchy,
    HierarchyBuilder,
    HierarchyError,
    InvokeError,
    Invoke,
    Kind,
    Literal,
    LookupError,
    Metadata,
    // Signatures
    Pattern,
    Probe,
    RegistryError,
    SharedGuard,
    Signature,
    render_probes,
    resolve_guards,
};

// Registries
pub use elementalist_std::registry::{
    AnyRegistry, CollectionRegistry, MappingRegistry, NamedElementRegistry, Registry,
    RegistryBuilder, SignatureRegistry, SpecificElementRegistry,
};

// Engine
pub use elementalist_std::{
    resolver::{SignatureResolver, most_specific_first},
    store::{ElementCollection, ElementMapping, Store},
};

/// Classifier tag filters.
pub mod classify {
    pub use elementalist_std::classify::{Classified, Classify, Mode, exact, one_of, partial};
}

/// Standard guard implementations.
pub mod guards {
    #![allow(clippy::wildcard_imports)]
    pub use elementalist_std::guards::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use elementalist_std::testing::*;
}

/// Prelude module - common imports for Elementalist.
///
/// # Usage
///
/// ```rust,ignore
/// use elementalist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Arguments
        ALL,
        Arg,
        // Registries
        CollectionRegistry,
        DEFAULT,
        // Elements
        Details,
        Element,
        // Errors
        ElementalistError,
        Guard,
        Handler,
        // Type table
        Hierarchy,
        Kind,
        LookupError,
        MappingRegistry,
        NamedElementRegistry,
        Pattern,
        Registry,
        RegistryError,
        Signature,
        SpecificElementRegistry,
    };
}
