//! # Signature Resolver
//!
//! The resolver owns the set of signatures a registry has accepted and
//! answers two questions about a runtime argument tuple:
//!
//! - which signatures accept it ([`SignatureResolver::candidates`]), and
//! - which single signature is the most specific among those
//!   ([`SignatureResolver::resolve`]).
//!
//! Resolution never breaks ties arbitrarily: when several mutually
//! incomparable signatures are all maximally specific, it fails with
//! [`LookupError::AmbiguousMatch`].

use elementalist_core::{Arg, Hierarchy, LookupError, Probe, Signature, render_probes};
use indexmap::IndexSet;
use std::sync::Arc;

/// The query structure paired with a store.
#[derive(Clone)]
pub struct SignatureResolver {
    hierarchy: Arc<Hierarchy>,
    signatures: IndexSet<Signature>,
}

impl SignatureResolver {
    /// Create an empty resolver over a type table.
    pub fn new(hierarchy: Arc<Hierarchy>) -> Self {
        Self {
            hierarchy,
            signatures: IndexSet::new(),
        }
    }

    /// The type table runtime arguments are resolved against.
    pub fn hierarchy(&self) -> &Arc<Hierarchy> {
        &self.hierarchy
    }

    /// Accept a signature. Returns `false` if it was already known.
    pub fn register(&mut self, signature: Signature) -> bool {
        self.signatures.insert(signature)
    }

    /// Whether the signature was accepted.
    pub fn contains(&self, signature: &Signature) -> bool {
        self.signatures.contains(signature)
    }

    /// Accepted signatures in registration order.
    pub fn signatures(&self) -> impl Iterator<Item = &Signature> {
        self.signatures.iter()
    }

    /// Number of accepted signatures.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Whether no signature was accepted.
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Resolve every argument against the type table.
    pub fn probe<'a>(&'a self, args: &'a [Arg<'_>]) -> Vec<Probe<'a>> {
        args.iter().map(|arg| arg.probe(&self.hierarchy)).collect()
    }

    /// Whether `signature` accepts `args`.
    pub fn matches(&self, signature: &Signature, args: &[Arg<'_>]) -> bool {
        signature.matches(&self.probe(args))
    }

    /// Accepted signatures matching the resolved arguments, in registration order.
    pub fn candidates(&self, probes: &[Probe<'_>]) -> Vec<&Signature> {
        self.signatures
            .iter()
            .filter(|signature| signature.matches(probes))
            .collect()
    }

    /// The single most specific signature accepting `args`.
    pub fn resolve(&self, args: &[Arg<'_>]) -> Result<&Signature, LookupError> {
        let probes = self.probe(args);
        let candidates = self.candidates(&probes);
        if candidates.is_empty() {
            return Err(LookupError::NoMatch {
                query: render_probes(&probes),
            });
        }

        let maximal: Vec<&Signature> = candidates
            .iter()
            .copied()
            .filter(|candidate| {
                !candidates
                    .iter()
                    .any(|other| other.is_more_specific_than(candidate))
            })
            .collect();

        match maximal.as_slice() {
            [winner] => {
                #[cfg(feature = "tracing")]
                tracing::trace!(signature = %winner, "resolved signature");
                Ok(*winner)
            }
            _ => {
                let query = render_probes(&probes);
                #[cfg(feature = "tracing")]
                tracing::debug!(%query, candidates = maximal.len(), "ambiguous match");
                Err(LookupError::AmbiguousMatch {
                    query,
                    candidates: maximal.into_iter().cloned().collect(),
                })
            }
        }
    }

    /// A new resolver accepting the signatures of both operands.
    pub fn union(&self, other: &SignatureResolver) -> SignatureResolver {
        let hierarchy = if Arc::ptr_eq(&self.hierarchy, &other.hierarchy) {
            Arc::clone(&self.hierarchy)
        } else {
            Arc::new(self.hierarchy.union(&other.hierarchy))
        };
        let mut signatures = self.signatures.clone();
        signatures.extend(other.signatures.iter().cloned());
        SignatureResolver {
            hierarchy,
            signatures,
        }
    }
}

/// Reorder items so that more specific signatures come first.
///
/// This is a stable topological sort over the specificity partial order:
/// at each step the earliest remaining item that no other remaining item is
/// strictly more specific than is emitted. Incomparable and equal keys keep
/// their relative order.
pub fn most_specific_first<T, F>(mut items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> &Signature,
{
    let mut ordered = Vec::with_capacity(items.len());
    while !items.is_empty() {
        let next = (0..items.len())
            .find(|&i| {
                let candidate = key(&items[i]);
                !items
                    .iter()
                    .any(|other| key(other).is_more_specific_than(candidate))
            })
            .unwrap_or(0);
        ordered.push(items.remove(next));
    }
    ordered
}
