//! Sweep algorithms over canonical interval sequences.
//!
//! Every function here takes sorted, pairwise non-mergeable slices (see
//! [`assertions::is_canonical`]) and returns a sequence in the same form.

mod complement;
mod intersection;
mod union;

pub use complement::{compute_complement, compute_gaps};
pub use intersection::compute_intersection;
pub use union::{compute_union, normalize};

#[cfg(debug_assertions)]
pub mod assertions;

#[cfg(not(debug_assertions))]
pub mod assertions {
    use crate::interval::Interval;

    pub fn is_canonical(_intervals: &[Interval]) -> bool {
        true
    }
}
