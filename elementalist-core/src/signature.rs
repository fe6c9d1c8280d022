//! Positional dispatch signatures and their specificity order.

use crate::{arg::Probe, pattern::Pattern};
use std::{cmp::Ordering, fmt};

/// An ordered tuple of per-position [`Pattern`]s.
///
/// Signatures are partially ordered: `a <= b` when `a` has the same arity as
/// `b` and every pattern of `a` is the same as or narrower than the pattern of
/// `b` at that position. `a < b` additionally requires one position to be
/// strictly narrower. Signatures of different arity, or with crossing
/// positions, are incomparable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Signature {
    patterns: Vec<Pattern>,
}

impl Signature {
    /// Build a signature from patterns or kinds.
    pub fn new<I>(patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Pattern>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a trailing pattern.
    pub fn with(mut self, pattern: impl Into<Pattern>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Prepend a leading pattern.
    pub fn with_leading(mut self, pattern: impl Into<Pattern>) -> Self {
        self.patterns.insert(0, pattern.into());
        self
    }

    /// The patterns, in position order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Number of positions.
    pub fn arity(&self) -> usize {
        self.patterns.len()
    }

    /// Whether every position accepts the corresponding resolved argument.
    pub fn matches(&self, probes: &[Probe<'_>]) -> bool {
        self.patterns.len() == probes.len()
            && self
                .patterns
                .iter()
                .zip(probes)
                .all(|(pattern, probe)| pattern.accepts(probe))
    }

    /// Whether `self` is strictly more specific than `other`.
    pub fn is_more_specific_than(&self, other: &Signature) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Less))
    }

    fn le(&self, other: &Signature) -> bool {
        self.arity() == other.arity()
            && self
                .patterns
                .iter()
                .zip(&other.patterns)
                .all(|(a, b)| a.le(b))
    }
}

impl PartialOrd for Signature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.le(other), other.le(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{pattern}")?;
        }
        f.write_str(")")
    }
}

impl<P: Into<Pattern>> FromIterator<P> for Signature {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Signature::new(iter)
    }
}
