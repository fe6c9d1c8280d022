//! Per-position dispatch patterns.
//!
//! A [`Pattern`] accepts runtime arguments by type ([`Pattern::Type`]), by
//! exact value ([`Pattern::Literal`]), or by any of several alternatives
//! ([`Pattern::Union`]). Patterns are partially ordered by how narrow they
//! are; [`Pattern::Any`] is the top of that order.

use crate::{arg::Probe, kind::Kind};
use std::fmt;

/// Name given to elements registered without one.
pub const DEFAULT: &str = "";

/// An exact value a dispatch position can require.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Literal {
    /// Sentinel accepted by name-aware signatures regardless of name.
    /// Never equal to a real name.
    All,
    /// A string value, usually an element name.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A boolean value.
    Bool(bool),
}

/// The `ALL` sentinel.
pub const ALL: Literal = Literal::All;

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::All => f.write_str("ALL"),
            Literal::Str(s) => write!(f, "{s:?}"),
            Literal::Int(i) => write!(f, "{i}"),
            Literal::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_owned())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

/// A single dispatch position.
///
/// Unions are kept normalized: flat, without duplicates, without
/// alternatives covered by a broader one, and in a canonical order. Two
/// patterns that are each `<=` the other are therefore structurally equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Accepts every argument.
    Any,
    /// Accepts values whose kind is this kind or a subkind.
    Type(Kind),
    /// Accepts exactly this literal.
    Literal(Literal),
    /// Accepts whatever one of the alternatives accepts.
    ///
    /// Built with [`Pattern::union`] only.
    Union(Alternatives),
}

/// The normalized alternatives of a [`Pattern::Union`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alternatives(Vec<Pattern>);

impl Alternatives {
    /// Iterate in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.0.iter()
    }

    /// The alternatives as a slice.
    pub fn as_slice(&self) -> &[Pattern] {
        &self.0
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no alternatives.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Alternatives {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Pattern {
    /// Build a normalized union of alternatives.
    pub fn union<I>(alternatives: I) -> Pattern
    where
        I: IntoIterator,
        I::Item: Into<Pattern>,
    {
        let mut flat = Vec::new();
        for alternative in alternatives {
            match alternative.into() {
                Pattern::Any => return Pattern::Any,
                Pattern::Union(inner) => flat.extend(inner.0),
                other => flat.push(other),
            }
        }

        let mut kept: Vec<Pattern> = flat
            .iter()
            .filter(|x| !flat.iter().any(|y| y != *x && x.le(y)))
            .cloned()
            .collect();
        kept.sort_by_cached_key(Pattern::canonical_key);
        kept.dedup();

        match kept.len() {
            1 => kept.pop().unwrap_or(Pattern::Any),
            _ => Pattern::Union(Alternatives(kept)),
        }
    }

    /// Whether `self` is the same as or narrower than `other`.
    pub fn le(&self, other: &Pattern) -> bool {
        match (self, other) {
            (_, Pattern::Any) => true,
            (Pattern::Any, _) => false,
            (Pattern::Union(xs), _) => xs.iter().all(|x| x.le(other)),
            (_, Pattern::Union(ys)) => ys.iter().any(|y| self.le(y)),
            (Pattern::Type(a), Pattern::Type(b)) => a.is_subkind_of(b),
            (Pattern::Literal(a), Pattern::Literal(b)) => a == b,
            _ => false,
        }
    }

    /// Whether `self` is strictly narrower than `other`.
    pub fn lt(&self, other: &Pattern) -> bool {
        self != other && self.le(other)
    }

    /// Whether the pattern accepts a resolved runtime argument.
    pub fn accepts(&self, probe: &Probe<'_>) -> bool {
        match (self, probe) {
            (Pattern::Any, _) => true,
            (Pattern::Type(kind), Probe::Instance(Some(actual))) => actual.is_subkind_of(kind),
            (Pattern::Literal(expected), Probe::Literal(actual)) => expected == *actual,
            (Pattern::Union(alternatives), _) => alternatives.iter().any(|p| p.accepts(probe)),
            _ => false,
        }
    }

    fn canonical_key(&self) -> (u8, String) {
        match self {
            Pattern::Any => (0, String::new()),
            Pattern::Type(kind) => (1, format!("{}{:?}", kind.name(), kind.id())),
            Pattern::Literal(literal) => (2, format!("{literal:?}")),
            Pattern::Union(alternatives) => (3, format!("{:?}", alternatives.0)),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Any => f.write_str("Any"),
            Pattern::Type(kind) => write!(f, "{kind}"),
            Pattern::Literal(literal) => write!(f, "{literal}"),
            Pattern::Union(alternatives) => {
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{alternative}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<Kind> for Pattern {
    fn from(kind: Kind) -> Self {
        Pattern::Type(kind)
    }
}

impl From<&Kind> for Pattern {
    fn from(kind: &Kind) -> Self {
        Pattern::Type(kind.clone())
    }
}

impl From<Literal> for Pattern {
    fn from(literal: Literal) -> Self {
        Pattern::Literal(literal)
    }
}

impl From<&Pattern> for Pattern {
    fn from(pattern: &Pattern) -> Self {
        pattern.clone()
    }
}
