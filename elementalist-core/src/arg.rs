//! Runtime call arguments.

use crate::{
    kind::{Hierarchy, Kind},
    pattern::Literal,
};
use std::{any::Any, fmt};

/// One runtime argument of a dispatch query.
///
/// Values are matched by their kind in a [`Hierarchy`]; literals are matched
/// by equality.
#[derive(Clone)]
pub enum Arg<'a> {
    /// A borrowed runtime value.
    Value(&'a (dyn Any + Send + Sync)),
    /// A literal such as an element name or the `ALL` sentinel.
    Literal(Literal),
}

impl<'a> Arg<'a> {
    /// The `ALL` sentinel as an argument.
    pub const ALL: Arg<'static> = Arg::Literal(Literal::All);

    /// Borrow a runtime value as an argument.
    pub fn value<T: Any + Send + Sync>(value: &'a T) -> Self {
        Arg::Value(value)
    }

    /// Wrap a literal.
    pub fn literal(literal: impl Into<Literal>) -> Self {
        Arg::Literal(literal.into())
    }

    /// The borrowed value as a `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        match self {
            Arg::Value(value) => (*value).downcast_ref::<T>(),
            Arg::Literal(_) => None,
        }
    }

    /// Whether the argument is a value of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Resolve the argument against a type table.
    pub fn probe<'h>(&'h self, hierarchy: &'h Hierarchy) -> Probe<'h> {
        match self {
            Arg::Value(value) => Probe::Instance(hierarchy.kind_of(*value)),
            Arg::Literal(literal) => Probe::Literal(literal),
        }
    }
}

impl From<&str> for Arg<'_> {
    fn from(name: &str) -> Self {
        Arg::Literal(Literal::from(name))
    }
}

impl From<Literal> for Arg<'_> {
    fn from(literal: Literal) -> Self {
        Arg::Literal(literal)
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Value(_) => f.write_str("Value(..)"),
            Arg::Literal(literal) => write!(f, "Literal({literal})"),
        }
    }
}

/// An argument after resolution against a [`Hierarchy`].
#[derive(Debug, Clone, Copy)]
pub enum Probe<'a> {
    /// A runtime value; `None` when its type was never declared.
    Instance(Option<&'a Kind>),
    /// A literal argument.
    Literal(&'a Literal),
}

impl fmt::Display for Probe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Probe::Instance(Some(kind)) => write!(f, "{kind}"),
            Probe::Instance(None) => f.write_str("<undeclared>"),
            Probe::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

/// Render a resolved argument tuple as `(A, B, "name")`.
pub fn render_probes(probes: &[Probe<'_>]) -> String {
    let parts: Vec<String> = probes.iter().map(ToString::to_string).collect();
    format!("({})", parts.join(", "))
}
