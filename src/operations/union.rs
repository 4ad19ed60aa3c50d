use log::trace;

use crate::interval::Interval;

/// Appends `iv` to a canonical prefix, merging it into the last interval when
/// the two are mergeable.
///
/// Intervals must arrive in ascending interval order.
fn merge_into(result: &mut Vec<Interval>, iv: Interval) {
    if iv.is_empty() {
        return;
    }
    if let Some(last) = result.last_mut() {
        if last.is_mergeable(&iv) {
            *last = last.hull(&iv);
            return;
        }
    }
    result.push(iv);
}

/// Brings an arbitrary sequence of intervals into canonical form.
///
/// Drops empty intervals, sorts by interval order, then sweeps once merging
/// each interval into the running one whenever they overlap or touch at a
/// closed endpoint. O(n log n).
pub fn normalize(mut intervals: Vec<Interval>) -> Vec<Interval> {
    let input_len = intervals.len();
    intervals.retain(|iv| !iv.is_empty());
    intervals.sort_unstable();

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        merge_into(&mut merged, interval);
    }
    trace!(
        "Normalized {} intervals into {} components",
        input_len,
        merged.len()
    );
    merged
}

/// Computes the union of two canonical sequences with a single ordered merge.
///
/// # Arguments
///
/// * `a` - First canonical sequence
/// * `b` - Second canonical sequence
///
/// # Returns
///
/// The canonical sequence covering every point of `a` and `b`.
pub fn compute_union(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    debug_assert!(super::assertions::is_canonical(a));
    debug_assert!(super::assertions::is_canonical(b));

    let mut result: Vec<Interval> = Vec::with_capacity(a.len() + b.len());
    let mut i = 0usize;
    let mut j = 0usize;

    while i < a.len() && j < b.len() {
        if a[i] <= b[j] {
            merge_into(&mut result, a[i]);
            i += 1;
        } else {
            merge_into(&mut result, b[j]);
            j += 1;
        }
    }

    for iv in &a[i..] {
        merge_into(&mut result, *iv);
    }
    for iv in &b[j..] {
        merge_into(&mut result, *iv);
    }

    result
}
