//! Endpoint kinds and the truth tables used at every merge and split site.

/// Whether an endpoint belongs to its interval.
///
/// `Closed` is declared first so that the derived ordering sorts a closed
/// endpoint before an open one at the same coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    Closed,
    Open,
}

impl Boundary {
    /// Builds a boundary from a "closed" flag.
    pub const fn from_closed(closed: bool) -> Self {
        if closed {
            Boundary::Closed
        } else {
            Boundary::Open
        }
    }

    pub const fn is_closed(self) -> bool {
        matches!(self, Boundary::Closed)
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Boundary::Open)
    }

    /// Kind of the boundary left behind when the endpoint is cut out of the
    /// line: a closed endpoint leaves an open gap and vice versa.
    pub const fn negate(self) -> Self {
        match self {
            Boundary::Closed => Boundary::Open,
            Boundary::Open => Boundary::Closed,
        }
    }

    /// Kind of a shared coordinate in the union of two endpoints.
    pub const fn union(self, other: Self) -> Self {
        match (self, other) {
            (Boundary::Closed, _) | (_, Boundary::Closed) => Boundary::Closed,
            (Boundary::Open, Boundary::Open) => Boundary::Open,
        }
    }

    /// Kind of a shared coordinate in the intersection of two endpoints.
    pub const fn intersect(self, other: Self) -> Self {
        match (self, other) {
            (Boundary::Closed, Boundary::Closed) => Boundary::Closed,
            (Boundary::Open, _) | (_, Boundary::Open) => Boundary::Open,
        }
    }
}
