//! Set algebra and bounding queries on [`IntervalUnion`].

use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

use super::IntervalUnion;
use crate::interval::Interval;
use crate::operations::{compute_complement, compute_gaps, compute_intersection, compute_union};
use crate::similarity::ratio;

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl IntervalUnion {
    /// Returns the union of `self` and `other`.
    pub fn union(&self, other: &IntervalUnion) -> IntervalUnion {
        IntervalUnion::from_sorted_unchecked(compute_union(&self.0, &other.0))
    }

    /// Returns the intersection of `self` and `other`.
    pub fn intersect(&self, other: &IntervalUnion) -> IntervalUnion {
        IntervalUnion::from_sorted_unchecked(compute_intersection(&self.0, &other.0))
    }

    /// Returns everything on the real line that is not in `self`.
    pub fn complement(&self) -> IntervalUnion {
        IntervalUnion::from_sorted_unchecked(compute_complement(&self.0))
    }

    /// Returns the members of `self` that are not in `other`.
    pub fn difference(&self, other: &IntervalUnion) -> IntervalUnion {
        self.intersect(&other.complement())
    }

    /// Returns the members of exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &IntervalUnion) -> IntervalUnion {
        self.difference(other).union(&other.difference(self))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Bounding queries
// ─────────────────────────────────────────────────────────────────────

impl IntervalUnion {
    /// Smallest closed interval containing every component. Infinite ends
    /// stay open. Empty for `∅`.
    pub fn compact(&self) -> Interval {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => Interval::closed(first.left(), last.right()),
            _ => Interval::empty(),
        }
    }

    /// Smallest interval containing every component, keeping the kinds of
    /// the extreme endpoints.
    pub fn superset(&self) -> Interval {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => Interval::new(
                first.left(),
                first.left_boundary(),
                last.right(),
                last.right_boundary(),
            ),
            _ => Interval::empty(),
        }
    }

    /// Complement of [`superset`](Self::superset).
    pub fn super_complement(&self) -> IntervalUnion {
        self.superset().complement()
    }

    /// The gaps between components, without the two exterior rays.
    pub fn restricted_complement(&self) -> IntervalUnion {
        IntervalUnion::from_sorted_unchecked(compute_gaps(&self.0))
    }

    /// Total length of the gaps between components.
    pub fn complement_cardinal(&self) -> f64 {
        compute_gaps(&self.0).iter().map(Interval::cardinal).sum()
    }

    /// Share of the compact hull covered by the union, in `[0, 1]`.
    ///
    /// `0.0` when the hull has zero or infinite measure.
    pub fn compactness(&self) -> f64 {
        ratio(self.cardinal(), self.compact().cardinal())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────

impl BitOr for &IntervalUnion {
    type Output = IntervalUnion;

    fn bitor(self, rhs: &IntervalUnion) -> IntervalUnion {
        self.union(rhs)
    }
}

impl BitAnd for &IntervalUnion {
    type Output = IntervalUnion;

    fn bitand(self, rhs: &IntervalUnion) -> IntervalUnion {
        self.intersect(rhs)
    }
}

impl Sub for &IntervalUnion {
    type Output = IntervalUnion;

    fn sub(self, rhs: &IntervalUnion) -> IntervalUnion {
        self.difference(rhs)
    }
}

impl BitXor for &IntervalUnion {
    type Output = IntervalUnion;

    fn bitxor(self, rhs: &IntervalUnion) -> IntervalUnion {
        self.symmetric_difference(rhs)
    }
}

impl Not for &IntervalUnion {
    type Output = IntervalUnion;

    fn not(self) -> IntervalUnion {
        self.complement()
    }
}
