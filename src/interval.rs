//! A single contiguous range of reals with independently open or closed ends.

use std::cmp::Ordering;
use std::fmt::Display;

use log::{debug, trace};
use rand::Rng;

use crate::boundary::Boundary;
use crate::error::{IntervalError, Result};
use crate::interval_union::IntervalUnion;
use crate::similarity::Similarity;

/// Contiguous range between `left` and `right`.
///
/// Intervals are immutable values kept in canonical form by every
/// constructor:
///
/// - infinite endpoints are always [`Boundary::Open`];
/// - `left > right`, a NaN endpoint, or `left == right` with an open side
///   collapses to the single canonical empty interval;
/// - `left == right` with both sides closed is a one-point set.
///
/// Because the empty value is canonical, derived equality is set equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    left: f64,
    right: f64,
    left_boundary: Boundary,
    right_boundary: Boundary,
}

const EMPTY: Interval = Interval {
    left: 0.0,
    right: 0.0,
    left_boundary: Boundary::Open,
    right_boundary: Boundary::Open,
};

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl Interval {
    /// Creates an interval from its two endpoints and their kinds.
    ///
    /// Never fails: inputs that do not describe a non-empty range yield
    /// [`Interval::empty`].
    pub fn new(left: f64, left_boundary: Boundary, right: f64, right_boundary: Boundary) -> Self {
        if left.is_nan() || right.is_nan() || left > right {
            return EMPTY;
        }
        let left_boundary = if left.is_infinite() {
            Boundary::Open
        } else {
            left_boundary
        };
        let right_boundary = if right.is_infinite() {
            Boundary::Open
        } else {
            right_boundary
        };
        if left == right && (left_boundary.is_open() || right_boundary.is_open()) {
            return EMPTY;
        }
        // `+ 0.0` folds -0.0 into 0.0 so equality and ordering agree.
        Self {
            left: left + 0.0,
            right: right + 0.0,
            left_boundary,
            right_boundary,
        }
    }

    /// `[left, right]`
    pub fn closed(left: f64, right: f64) -> Self {
        Self::new(left, Boundary::Closed, right, Boundary::Closed)
    }

    /// `]left, right[`
    pub fn open(left: f64, right: f64) -> Self {
        Self::new(left, Boundary::Open, right, Boundary::Open)
    }

    /// `]left, right]`
    pub fn left_open(left: f64, right: f64) -> Self {
        Self::new(left, Boundary::Open, right, Boundary::Closed)
    }

    /// `[left, right[`
    pub fn right_open(left: f64, right: f64) -> Self {
        Self::new(left, Boundary::Closed, right, Boundary::Open)
    }

    /// `[x, x]`
    pub fn point(x: f64) -> Self {
        Self::closed(x, x)
    }

    /// The canonical empty interval.
    pub const fn empty() -> Self {
        EMPTY
    }

    /// `]-Inf, Inf[`
    pub const fn real_line() -> Self {
        Self {
            left: f64::NEG_INFINITY,
            right: f64::INFINITY,
            left_boundary: Boundary::Open,
            right_boundary: Boundary::Open,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────

impl Interval {
    pub const fn left(&self) -> f64 {
        self.left
    }

    pub const fn right(&self) -> f64 {
        self.right
    }

    pub const fn left_boundary(&self) -> Boundary {
        self.left_boundary
    }

    pub const fn right_boundary(&self) -> Boundary {
        self.right_boundary
    }

    pub const fn is_left_closed(&self) -> bool {
        self.left_boundary.is_closed()
    }

    pub const fn is_right_closed(&self) -> bool {
        self.right_boundary.is_closed()
    }

    pub fn is_empty(&self) -> bool {
        *self == EMPTY
    }

    /// Returns true for a one-point set `[x, x]`.
    pub fn is_point(&self) -> bool {
        !self.is_empty() && self.left == self.right
    }

    /// Returns true if both endpoints are finite. The empty interval is bounded.
    pub fn is_bounded(&self) -> bool {
        self.left.is_finite() && self.right.is_finite()
    }

    /// Lebesgue measure of the interval: zero for points and the empty
    /// interval, `+Inf` when unbounded.
    pub fn cardinal(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.right - self.left
        }
    }

    /// Returns true if `x` belongs to the interval.
    pub fn contains(&self, x: f64) -> bool {
        if self.is_empty() {
            return false;
        }
        let after_left = match self.left_boundary {
            Boundary::Closed => self.left <= x,
            Boundary::Open => self.left < x,
        };
        let before_right = match self.right_boundary {
            Boundary::Closed => x <= self.right,
            Boundary::Open => x < self.right,
        };
        after_left && before_right
    }

    /// Returns true if every member of `self` is a member of `other`.
    pub fn is_subset(&self, other: &Interval) -> bool {
        if self.is_empty() {
            return true;
        }
        if other.is_empty() {
            return false;
        }
        let left_covered = match other.left.total_cmp(&self.left) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => covers(other.left_boundary, self.left_boundary),
        };
        let right_covered = match other.right.total_cmp(&self.right) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => covers(other.right_boundary, self.right_boundary),
        };
        left_covered && right_covered
    }

    /// Returns true if the two intervals share no point.
    pub fn is_disjoint(&self, other: &Interval) -> bool {
        self.intersect(other).is_empty()
    }

    /// Returns true if the union of the two intervals is itself an interval:
    /// they overlap, or they touch at a coordinate that one of them contains.
    ///
    /// The empty interval is mergeable with everything.
    pub fn is_mergeable(&self, other: &Interval) -> bool {
        if self.is_empty() || other.is_empty() || !self.is_disjoint(other) {
            return true;
        }
        touches(self, other) || touches(other, self)
    }
}

/// Whether an endpoint of kind `outer` covers an endpoint of kind `inner` at
/// the same coordinate.
fn covers(outer: Boundary, inner: Boundary) -> bool {
    match (outer, inner) {
        (Boundary::Closed, _) | (Boundary::Open, Boundary::Open) => true,
        (Boundary::Open, Boundary::Closed) => false,
    }
}

/// `a` ends where `b` starts and the shared coordinate belongs to one of them.
fn touches(a: &Interval, b: &Interval) -> bool {
    a.right == b.left && a.right_boundary.union(b.left_boundary).is_closed()
}

// ─────────────────────────────────────────────────────────────────────
// Pairwise operations
// ─────────────────────────────────────────────────────────────────────

impl Interval {
    /// Returns the overlap of the two intervals, possibly empty.
    pub fn intersect(&self, other: &Interval) -> Interval {
        if self.is_empty() || other.is_empty() {
            return EMPTY;
        }
        let (left, left_boundary) = match self.left.total_cmp(&other.left) {
            Ordering::Greater => (self.left, self.left_boundary),
            Ordering::Less => (other.left, other.left_boundary),
            Ordering::Equal => (self.left, self.left_boundary.intersect(other.left_boundary)),
        };
        let (right, right_boundary) = match self.right.total_cmp(&other.right) {
            Ordering::Less => (self.right, self.right_boundary),
            Ordering::Greater => (other.right, other.right_boundary),
            Ordering::Equal => (
                self.right,
                self.right_boundary.intersect(other.right_boundary),
            ),
        };
        Interval::new(left, left_boundary, right, right_boundary)
    }

    /// Returns the union of two mergeable intervals.
    ///
    /// # Errors
    ///
    /// [`IntervalError::DisjointUnion`] if the union would be two separate
    /// pieces; use [`IntervalUnion`] for those.
    pub fn union(&self, other: &Interval) -> Result<Interval> {
        if !self.is_mergeable(other) {
            debug!("Rejecting union of disjoint intervals {} and {}", self, other);
            return Err(IntervalError::DisjointUnion);
        }
        Ok(self.hull(other))
    }

    /// Tightest interval covering both operands. At an extreme reached by
    /// both, a closed endpoint wins.
    pub(crate) fn hull(&self, other: &Interval) -> Interval {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let (left, left_boundary) = match self.left.total_cmp(&other.left) {
            Ordering::Less => (self.left, self.left_boundary),
            Ordering::Greater => (other.left, other.left_boundary),
            Ordering::Equal => (self.left, self.left_boundary.union(other.left_boundary)),
        };
        let (right, right_boundary) = match self.right.total_cmp(&other.right) {
            Ordering::Greater => (self.right, self.right_boundary),
            Ordering::Less => (other.right, other.right_boundary),
            Ordering::Equal => (self.right, self.right_boundary.union(other.right_boundary)),
        };
        Interval::new(left, left_boundary, right, right_boundary)
    }

    /// Returns everything on the real line outside the interval: zero, one
    /// or two rays.
    pub fn complement(&self) -> IntervalUnion {
        IntervalUnion::from(*self).complement()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Sampling
// ─────────────────────────────────────────────────────────────────────

impl Interval {
    /// Draws one value uniformly from `[left, right]`.
    ///
    /// # Errors
    ///
    /// [`IntervalError::EmptyInterval`] for the empty interval,
    /// [`IntervalError::UnboundedSample`] if the span is infinite.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        self.check_sampleable()?;
        Ok(self.draw(rng))
    }

    /// Draws `n` independent values uniformly from `[left, right]`.
    pub fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<f64>> {
        self.check_sampleable()?;
        trace!("Sampling {} values from {}", n, self);
        Ok((0..n).map(|_| self.draw(rng)).collect())
    }

    pub(crate) fn check_sampleable(&self) -> Result<()> {
        if self.is_empty() {
            return Err(IntervalError::EmptyInterval);
        }
        if !is_drawable_span(self.cardinal()) {
            return Err(IntervalError::UnboundedSample);
        }
        Ok(())
    }

    /// Caller guarantees the interval passed `check_sampleable`.
    pub(crate) fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.left == self.right {
            self.left
        } else {
            rng.gen_range(self.left..=self.right)
        }
    }
}

/// Returns true if `rand` can build a uniform distribution over a span of
/// this width. Its float sampler divides the width by `1 - ε`, so widths just
/// below `f64::MAX` overflow as well as infinite ones.
pub(crate) fn is_drawable_span(width: f64) -> bool {
    (width / (1.0 - f64::EPSILON)).is_finite()
}

impl Similarity for Interval {
    fn cardinal(&self) -> f64 {
        Interval::cardinal(self)
    }

    fn intersection_cardinal(&self, other: &Self) -> f64 {
        self.intersect(other).cardinal()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

impl Default for Interval {
    fn default() -> Self {
        EMPTY
    }
}

// NaN never reaches a stored endpoint.
impl Eq for Interval {}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic order on `(left, left kind, right, right kind)` with a
/// closed endpoint sorting before an open one. The empty interval sorts first.
impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self
                .left
                .total_cmp(&other.left)
                .then(self.left_boundary.cmp(&other.left_boundary))
                .then(self.right.total_cmp(&other.right))
                .then(self.right_boundary.cmp(&other.right_boundary)),
        }
    }
}

pub(crate) fn fmt_limit(value: f64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if value == f64::INFINITY {
        write!(f, "Inf")
    } else if value == f64::NEG_INFINITY {
        write!(f, "-Inf")
    } else {
        write!(f, "{}", value)
    }
}

/// Bracket notation: `[0,1]`, `]0.2,2]`, `[2,3[`, `∅`.
impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "∅");
        }
        write!(f, "{}", if self.is_left_closed() { '[' } else { ']' })?;
        fmt_limit(self.left, f)?;
        write!(f, ",")?;
        fmt_limit(self.right, f)?;
        write!(f, "{}", if self.is_right_closed() { ']' } else { '[' })
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 4)?;
        s.serialize_field("left", &self.left)?;
        s.serialize_field("right", &self.right)?;
        s.serialize_field("left_closed", &self.is_left_closed())?;
        s.serialize_field("right_closed", &self.is_right_closed())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            left: f64,
            right: f64,
            left_closed: bool,
            right_closed: bool,
        }

        let raw = <Raw as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::new(
            raw.left,
            Boundary::from_closed(raw.left_closed),
            raw.right,
            Boundary::from_closed(raw.right_closed),
        ))
    }
}
