//! A canonical container for unions of disjoint intervals.
//!
//! [`IntervalUnion`] wraps a `Vec<Interval>` and guarantees the **canonical
//! invariant** at all times: no component is empty, components are sorted by
//! interval order, and no two neighbours are mergeable. Neighbours are either
//! separated by a gap of positive length, or meet at a coordinate that
//! neither of them contains (`[0,1[ ∪ ]1,2]`).
//!
//! Read access is fully transparent via `Deref<Target = [Interval]>`.
//! Construction and the few mutation methods re-establish the invariant; the
//! set algebra always returns fresh values.

mod algebra;
mod sampling;

use std::fmt::Display;
use std::ops::{Deref, Index};

use crate::interval::Interval;
use crate::operations::{compute_intersection, compute_union, normalize};
use crate::similarity::Similarity;

/// A sorted set of pairwise disjoint, non-mergeable intervals.
///
/// # Transparent read access
///
/// `IntervalUnion` implements `Deref<Target = [Interval]>`, so all
/// immutable slice methods (`.len()`, `.iter()`, indexing, `.first()`,
/// `.last()`, `.windows()`, etc.) are available directly.
///
/// # Performance
///
/// - Construction from unsorted input: O(n log n) sort + O(n) merge.
/// - `push`: O(n) ordered merge.
/// - Union, intersection, complement: O(n + m) sweeps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntervalUnion(Vec<Interval>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl IntervalUnion {
    /// Creates the empty union `∅`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The whole real line `]-Inf,Inf[`.
    pub fn real_line() -> Self {
        Self(vec![Interval::real_line()])
    }

    /// Wraps a `Vec` that is **already in canonical form** without re-sorting.
    ///
    /// In debug builds this asserts the invariant; in release builds the check
    /// is elided.
    pub(crate) fn from_sorted_unchecked(vec: Vec<Interval>) -> Self {
        debug_assert!(
            crate::operations::assertions::is_canonical(&vec),
            "IntervalUnion::from_sorted_unchecked called with non-canonical input"
        );
        Self(vec)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Mutation methods
// ─────────────────────────────────────────────────────────────────────

impl IntervalUnion {
    /// Inserts an interval, maintaining canonical form.
    pub fn push(&mut self, interval: Interval) {
        if interval.is_empty() {
            return;
        }
        self.0 = compute_union(&self.0, &[interval]);
    }

    /// Appends all intervals from a slice, then re-normalizes.
    pub fn extend_from_slice(&mut self, intervals: &[Interval]) {
        if intervals.is_empty() {
            return;
        }
        self.0.extend_from_slice(intervals);
        self.0 = normalize(std::mem::take(&mut self.0));
    }

    /// Consumes the union and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<Interval> {
        self.0
    }

    /// Returns a slice of the components.
    pub fn as_slice(&self) -> &[Interval] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────

impl IntervalUnion {
    pub fn number_of_components(&self) -> usize {
        self.0.len()
    }

    /// Left endpoints of the components, in order.
    pub fn lefts(&self) -> Vec<f64> {
        self.0.iter().map(Interval::left).collect()
    }

    /// Right endpoints of the components, in order.
    pub fn rights(&self) -> Vec<f64> {
        self.0.iter().map(Interval::right).collect()
    }

    /// Every distinct endpoint coordinate, ascending.
    pub fn limits(&self) -> Vec<f64> {
        let mut limits: Vec<f64> = self
            .0
            .iter()
            .flat_map(|iv| [iv.left(), iv.right()])
            .collect();
        limits.sort_by(f64::total_cmp);
        limits.dedup();
        limits
    }

    /// Total measure; components are disjoint so nothing is counted twice.
    pub fn cardinal(&self) -> f64 {
        self.0.iter().map(Interval::cardinal).sum()
    }

    /// Returns true if some component contains `x`.
    pub fn contains(&self, x: f64) -> bool {
        // First component whose right end is not strictly below `x`.
        let idx = self.0.partition_point(|iv| iv.right() < x);
        self.0[idx..]
            .iter()
            .take_while(|iv| iv.left() <= x)
            .any(|iv| iv.contains(x))
    }

    /// Returns true if `interval` lies entirely inside one component.
    pub fn contains_interval(&self, interval: &Interval) -> bool {
        interval.is_empty() || self.0.iter().any(|iv| interval.is_subset(iv))
    }

    /// Returns true if every member of `self` is a member of `other`.
    ///
    /// A component of `self` is connected, so it must fit inside a single
    /// component of the canonical `other`.
    pub fn is_subset(&self, other: &IntervalUnion) -> bool {
        self.0.iter().all(|iv| other.contains_interval(iv))
    }

    /// Returns true if the two unions share no point.
    pub fn is_disjoint(&self, other: &IntervalUnion) -> bool {
        compute_intersection(&self.0, &other.0).is_empty()
    }
}

impl Similarity for IntervalUnion {
    fn cardinal(&self) -> f64 {
        IntervalUnion::cardinal(self)
    }

    fn intersection_cardinal(&self, other: &Self) -> f64 {
        compute_intersection(&self.0, &other.0)
            .iter()
            .map(Interval::cardinal)
            .sum()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl Deref for IntervalUnion {
    type Target = [Interval];

    fn deref(&self) -> &[Interval] {
        &self.0
    }
}

impl AsRef<[Interval]> for IntervalUnion {
    fn as_ref(&self) -> &[Interval] {
        &self.0
    }
}

impl std::borrow::Borrow<[Interval]> for IntervalUnion {
    fn borrow(&self) -> &[Interval] {
        &self.0
    }
}

impl Index<usize> for IntervalUnion {
    type Output = Interval;

    fn index(&self, index: usize) -> &Interval {
        &self.0[index]
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl From<Vec<Interval>> for IntervalUnion {
    /// Creates an `IntervalUnion` from an arbitrary `Vec`, normalizing on
    /// construction.
    fn from(vec: Vec<Interval>) -> Self {
        Self(normalize(vec))
    }
}

impl From<Interval> for IntervalUnion {
    /// Creates a single-component union, or `∅` for the empty interval.
    fn from(interval: Interval) -> Self {
        if interval.is_empty() {
            Self::new()
        } else {
            Self(vec![interval])
        }
    }
}

impl FromIterator<Interval> for IntervalUnion {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let vec: Vec<Interval> = iter.into_iter().collect();
        Self::from(vec)
    }
}

impl Extend<Interval> for IntervalUnion {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        self.0.extend(iter);
        self.0 = normalize(std::mem::take(&mut self.0));
    }
}

// ─────────────────────────────────────────────────────────────────────
// Iterators
// ─────────────────────────────────────────────────────────────────────

impl IntoIterator for IntervalUnion {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntervalUnion {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

/// Components joined by ` ∪ `, or `∅`.
impl Display for IntervalUnion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "∅");
        }
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ∪ ")?;
            }
            write!(f, "{}", interval)?;
        }
        Ok(())
    }
}

/// Enables `assert_eq!(interval_union, vec![...])` in tests.
impl PartialEq<Vec<Interval>> for IntervalUnion {
    fn eq(&self, other: &Vec<Interval>) -> bool {
        self.0 == *other
    }
}

/// Enables `assert_eq!(vec![...], interval_union)` in tests.
impl PartialEq<IntervalUnion> for Vec<Interval> {
    fn eq(&self, other: &IntervalUnion) -> bool {
        *self == other.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for IntervalUnion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntervalUnion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = <Vec<Interval> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(vec))
    }
}
