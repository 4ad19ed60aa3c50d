use crate::interval::Interval;

/// Returns true if `intervals` is canonical: no empty component, sorted by
/// interval order, and no two neighbours mergeable into one interval.
pub fn is_canonical(intervals: &[Interval]) -> bool {
    intervals.iter().all(|iv| !iv.is_empty())
        && intervals.windows(2).all(|w| {
            let prev = &w[0];
            let curr = &w[1];
            prev < curr && !prev.is_mergeable(curr)
        })
}
