//! Measure-based similarity coefficients between sets of reals.

/// Sets with a Lebesgue measure that can be compared to each other.
///
/// Implementors supply their own measure and the measure of their overlap;
/// the coefficients follow from those two quantities. The union measure is
/// derived as `|X| + |Y| - |X ∩ Y|`, so the coefficients are defined for
/// disjoint operands too.
///
/// A zero or undefined denominator (both operands of measure zero, or
/// infinite measures) yields `0.0` instead of NaN.
pub trait Similarity {
    /// Total measure of the set.
    fn cardinal(&self) -> f64;

    /// Measure of the intersection of `self` and `other`.
    fn intersection_cardinal(&self, other: &Self) -> f64;

    /// Jaccard index `|X ∩ Y| / |X ∪ Y|`.
    fn jaccard(&self, other: &Self) -> f64 {
        let shared = self.intersection_cardinal(other);
        ratio(shared, self.cardinal() + other.cardinal() - shared)
    }

    /// Overlap coefficient `|X ∩ Y| / min(|X|, |Y|)`.
    fn overlap_coefficient(&self, other: &Self) -> f64 {
        let shared = self.intersection_cardinal(other);
        ratio(shared, self.cardinal().min(other.cardinal()))
    }

    /// Sørensen–Dice coefficient `2 |X ∩ Y| / (|X| + |Y|)`.
    fn dice_coefficient(&self, other: &Self) -> f64 {
        let shared = self.intersection_cardinal(other);
        ratio(2.0 * shared, self.cardinal() + other.cardinal())
    }
}

/// `numerator / denominator`, or `0.0` when the quotient is not finite.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    let value = numerator / denominator;
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Length {
        total: f64,
        shared: f64,
    }

    impl Similarity for Length {
        fn cardinal(&self) -> f64 {
            self.total
        }

        fn intersection_cardinal(&self, _other: &Self) -> f64 {
            self.shared
        }
    }

    #[test]
    fn ratio_handles_zero_denominator() {
        assert_eq!(ratio(0.0, 0.0), 0.0);
        assert_eq!(ratio(1.0, 0.0), 0.0);
        assert_eq!(ratio(f64::INFINITY, f64::INFINITY), 0.0);
        assert_eq!(ratio(1.0, 4.0), 0.25);
    }

    #[test]
    fn coefficients_from_measures() {
        let x = Length { total: 3.0, shared: 1.0 };
        let y = Length { total: 2.0, shared: 1.0 };
        assert!((x.jaccard(&y) - 0.25).abs() < 1e-12);
        assert!((x.overlap_coefficient(&y) - 0.5).abs() < 1e-12);
        assert!((x.dice_coefficient(&y) - 0.4).abs() < 1e-12);
    }
}
