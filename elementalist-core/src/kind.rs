//! # Type Table (Kind / Hierarchy)
//!
//! Dispatch positions are typed against an explicit hierarchy rather than
//! the host language's own dynamic typing. A [`Hierarchy`] records, for each
//! declared Rust type, the set of types it is a subtype of. Every [`Kind`]
//! handed out by the hierarchy carries that ancestor set, so subtype checks
//! are answered from data without consulting the table again.
//!
//! # Example
//!
//! ```rust,ignore
//! let types = Hierarchy::builder()
//!     .declare::<Context>()
//!     .declare::<SubContext>()
//!     .extends::<SubContext, Context>()
//!     .build()?;
//!
//! let ctx = types.kind::<Context>()?;
//! let sub = types.kind::<SubContext>()?;
//! assert!(sub.is_subkind_of(&ctx));
//! ```

use crate::error::HierarchyError;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{
    any::{Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A declared type together with everything it is a subtype of.
///
/// Equality and hashing only consider the underlying [`TypeId`].
#[derive(Clone)]
pub struct Kind(Arc<KindInner>);

struct KindInner {
    id: TypeId,
    name: &'static str,
    ancestors: FxHashSet<TypeId>,
}

impl Kind {
    /// The Rust type identity of this kind.
    pub fn id(&self) -> TypeId {
        self.0.id
    }

    /// Short display name (last path segment of the Rust type name).
    pub fn name(&self) -> &'static str {
        self.0.name
    }

    /// Whether `self` is `other` or one of its subtypes.
    pub fn is_subkind_of(&self, other: &Kind) -> bool {
        self.0.id == other.0.id || self.0.ancestors.contains(&other.0.id)
    }

    /// Whether `self` is a proper subtype of `other`.
    pub fn is_strict_subkind_of(&self, other: &Kind) -> bool {
        self.0.id != other.0.id && self.0.ancestors.contains(&other.0.id)
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Kind {}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name)
    }
}

/// The registered type hierarchy / interface-implementation table.
#[derive(Clone, Default)]
pub struct Hierarchy {
    kinds: FxHashMap<TypeId, Kind>,
}

impl Hierarchy {
    /// Start declaring a hierarchy.
    pub fn builder() -> HierarchyBuilder {
        HierarchyBuilder::default()
    }

    /// The kind declared for `T`.
    pub fn kind<T: Any>(&self) -> Result<Kind, HierarchyError> {
        self.kinds
            .get(&TypeId::of::<T>())
            .cloned()
            .ok_or_else(|| HierarchyError::Undeclared(short_name::<T>()))
    }

    /// The kind of a runtime value, if its type was declared.
    pub fn kind_of(&self, value: &dyn Any) -> Option<&Kind> {
        self.kinds.get(&value.type_id())
    }

    /// Whether `T` was declared.
    pub fn contains<T: Any>(&self) -> bool {
        self.kinds.contains_key(&TypeId::of::<T>())
    }

    /// Number of declared kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Combine two tables. Declarations in `self` win on conflict.
    pub fn union(&self, other: &Hierarchy) -> Hierarchy {
        let mut kinds = other.kinds.clone();
        kinds.extend(self.kinds.iter().map(|(id, kind)| (*id, kind.clone())));
        Hierarchy { kinds }
    }
}

impl fmt::Debug for Hierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.kinds.values().map(Kind::name).collect();
        names.sort_unstable();
        f.debug_set().entries(names).finish()
    }
}

/// Builder for a [`Hierarchy`].
///
/// Declarations and edges can be given in any order; ancestry is computed
/// once in [`build`](HierarchyBuilder::build).
#[derive(Default)]
pub struct HierarchyBuilder {
    declared: Vec<(TypeId, &'static str)>,
    parents: FxHashMap<TypeId, Vec<TypeId>>,
    pending: Vec<(TypeId, &'static str, TypeId, &'static str)>,
}

impl HierarchyBuilder {
    /// Declare `T` as a dispatchable type.
    pub fn declare<T: Any>(mut self) -> Self {
        let id = TypeId::of::<T>();
        if !self.declared.iter().any(|(known, _)| *known == id) {
            self.declared.push((id, short_name::<T>()));
        }
        self
    }

    /// Record that `Child` is a subtype of `Parent`.
    pub fn extends<Child: Any, Parent: Any>(mut self) -> Self {
        self.pending.push((
            TypeId::of::<Child>(),
            short_name::<Child>(),
            TypeId::of::<Parent>(),
            short_name::<Parent>(),
        ));
        self
    }

    /// Compute ancestor sets and freeze the table.
    pub fn build(mut self) -> Result<Hierarchy, HierarchyError> {
        let names: FxHashMap<TypeId, &'static str> = self.declared.iter().copied().collect();
        for (child, child_name, parent, parent_name) in std::mem::take(&mut self.pending) {
            if !names.contains_key(&child) {
                return Err(HierarchyError::Undeclared(child_name));
            }
            if !names.contains_key(&parent) {
                return Err(HierarchyError::Undeclared(parent_name));
            }
            let edges = self.parents.entry(child).or_default();
            if !edges.contains(&parent) {
                edges.push(parent);
            }
        }

        let mut kinds = FxHashMap::default();
        for &(id, name) in &self.declared {
            let ancestors = self.ancestors(id, &names)?;
            kinds.insert(
                id,
                Kind(Arc::new(KindInner {
                    id,
                    name,
                    ancestors,
                })),
            );
        }
        Ok(Hierarchy { kinds })
    }

    fn ancestors(
        &self,
        start: TypeId,
        names: &FxHashMap<TypeId, &'static str>,
    ) -> Result<FxHashSet<TypeId>, HierarchyError> {
        let mut seen = FxHashSet::default();
        let mut stack: Vec<TypeId> = self.parents.get(&start).cloned().unwrap_or_default();
        while let Some(next) = stack.pop() {
            if next == start {
                return Err(HierarchyError::Cycle(names[&start]));
            }
            if seen.insert(next) {
                if let Some(parents) = self.parents.get(&next) {
                    stack.extend(parents.iter().copied());
                }
            }
        }
        Ok(seen)
    }
}

fn short_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    match base.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
