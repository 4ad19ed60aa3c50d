use std::cmp::Ordering;

use crate::interval::Interval;

/// Computes the intersection of two canonical sequences.
///
/// Two-pointer sweep: each step intersects the current pair and advances the
/// side whose current interval ends first. Pieces cut from distinct pairs are
/// separated by a gap of one of the inputs, so the output is canonical
/// without a further merge.
pub fn compute_intersection(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    debug_assert!(super::assertions::is_canonical(a));
    debug_assert!(super::assertions::is_canonical(b));

    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(a.len().max(b.len()));
    let mut i = 0usize;
    let mut j = 0usize;

    while i < a.len() && j < b.len() {
        let overlap = a[i].intersect(&b[j]);
        if !overlap.is_empty() {
            result.push(overlap);
        }

        match a[i].right().total_cmp(&b[j].right()) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    debug_assert!(super::assertions::is_canonical(&result));
    result
}
