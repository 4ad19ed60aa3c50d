use crate::boundary::Boundary;
use crate::interval::Interval;

/// Returns the gaps strictly between consecutive intervals of a canonical
/// sequence. Each gap's endpoints take the negated kind of the neighbouring
/// component endpoints.
pub fn compute_gaps(canonical: &[Interval]) -> Vec<Interval> {
    debug_assert!(super::assertions::is_canonical(canonical));
    canonical
        .windows(2)
        .map(|w| {
            Interval::new(
                w[0].right(),
                w[0].right_boundary().negate(),
                w[1].left(),
                w[1].left_boundary().negate(),
            )
        })
        .filter(|gap| !gap.is_empty())
        .collect()
}

/// Returns the complement of a canonical sequence on the whole real line:
/// the ray before the first component, the internal gaps, and the ray after
/// the last component.
pub fn compute_complement(canonical: &[Interval]) -> Vec<Interval> {
    let (Some(first), Some(last)) = (canonical.first(), canonical.last()) else {
        return vec![Interval::real_line()];
    };

    let mut result = Vec::with_capacity(canonical.len() + 1);
    let leading = Interval::new(
        f64::NEG_INFINITY,
        Boundary::Open,
        first.left(),
        first.left_boundary().negate(),
    );
    if !leading.is_empty() {
        result.push(leading);
    }

    result.extend(compute_gaps(canonical));

    let trailing = Interval::new(
        last.right(),
        last.right_boundary().negate(),
        f64::INFINITY,
        Boundary::Open,
    );
    if !trailing.is_empty() {
        result.push(trailing);
    }

    result
}
