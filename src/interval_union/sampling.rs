//! Uniform sampling over a union of bounded intervals.

use log::trace;
use rand::distributions::{Distribution, Uniform, WeightedIndex};
use rand::Rng;

use super::IntervalUnion;
use crate::error::{IntervalError, Result};
use crate::interval::{is_drawable_span, Interval};

/// Chooses the component each draw comes from.
enum ComponentPicker {
    /// Proportional to component length.
    Weighted(WeightedIndex<f64>),
    /// Every component is a point: each is equally likely.
    Uniform(Uniform<usize>),
}

impl ComponentPicker {
    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match self {
            ComponentPicker::Weighted(weighted) => weighted.sample(rng),
            ComponentPicker::Uniform(uniform) => uniform.sample(rng),
        }
    }
}

impl IntervalUnion {
    /// Draws one value uniformly from the union.
    ///
    /// # Errors
    ///
    /// [`IntervalError::EmptyUnion`] for `∅`, [`IntervalError::UnboundedSample`]
    /// if any component is unbounded or the total length overflows.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        let picker = self.picker()?;
        Ok(self.0[picker.pick(rng)].draw(rng))
    }

    /// Draws `n` independent values uniformly from the union.
    ///
    /// Each draw picks a component with probability proportional to its
    /// length, then samples inside it.
    pub fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<f64>> {
        let picker = self.picker()?;
        trace!("Sampling {} values from {}", n, self);
        Ok((0..n)
            .map(|_| self.0[picker.pick(rng)].draw(rng))
            .collect())
    }

    fn picker(&self) -> Result<ComponentPicker> {
        if self.0.is_empty() {
            return Err(IntervalError::EmptyUnion);
        }
        for component in &self.0 {
            component.check_sampleable()?;
        }
        // Component weights are summed into one float range.
        if !is_drawable_span(self.cardinal()) {
            return Err(IntervalError::UnboundedSample);
        }
        // Fails only when all weights are zero.
        Ok(
            match WeightedIndex::new(self.0.iter().map(Interval::cardinal)) {
                Ok(weighted) => ComponentPicker::Weighted(weighted),
                Err(_) => ComponentPicker::Uniform(Uniform::new(0, self.0.len())),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_land_inside_union() {
        let mut rng = StdRng::seed_from_u64(3);
        let union = IntervalUnion::from(vec![
            Interval::right_open(0.0, 1.0),
            Interval::left_open(1.0, 2.3),
            Interval::closed(5.0, 6.0),
        ]);
        let values = union.sample_n(&mut rng, 500).unwrap();
        assert_eq!(values.len(), 500);
        // Draws use closed spans, so the excluded point 1.0 may appear.
        let closure = IntervalUnion::from(vec![
            Interval::closed(0.0, 2.3),
            Interval::closed(5.0, 6.0),
        ]);
        assert!(values.iter().all(|v| closure.contains(*v)));
    }

    #[test]
    fn weights_follow_component_length() {
        let mut rng = StdRng::seed_from_u64(11);
        let union = IntervalUnion::from(vec![
            Interval::closed(0.0, 9.0),
            Interval::closed(100.0, 101.0),
        ]);
        let values = union.sample_n(&mut rng, 2000).unwrap();
        let in_long = values.iter().filter(|v| **v <= 9.0).count();
        // Expected 1800 of 2000.
        assert!(in_long > 1650 && in_long < 1950, "in_long = {}", in_long);
    }

    #[test]
    fn zero_length_components_are_picked_uniformly() {
        let mut rng = StdRng::seed_from_u64(5);
        let union = IntervalUnion::from(vec![Interval::point(1.0), Interval::point(2.0)]);
        let values = union.sample_n(&mut rng, 100).unwrap();
        assert!(values.iter().all(|v| *v == 1.0 || *v == 2.0));
        assert!(values.contains(&1.0));
        assert!(values.contains(&2.0));
    }

    #[test]
    fn point_components_are_never_drawn_next_to_long_ones() {
        let mut rng = StdRng::seed_from_u64(9);
        let union = IntervalUnion::from(vec![Interval::point(-5.0), Interval::closed(0.0, 1.0)]);
        let values = union.sample_n(&mut rng, 200).unwrap();
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn sampling_is_reproducible() {
        let union = IntervalUnion::from(vec![
            Interval::right_open(0.0, 1.0),
            Interval::left_open(1.0, 2.3),
        ]);
        let a = union.sample_n(&mut StdRng::seed_from_u64(42), 4).unwrap();
        let b = union.sample_n(&mut StdRng::seed_from_u64(42), 4).unwrap();
        assert_eq!(a, b);
        assert!(union.sample(&mut StdRng::seed_from_u64(1)).is_ok());
    }

    #[test]
    fn sampling_errors() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            IntervalUnion::new().sample(&mut rng),
            Err(IntervalError::EmptyUnion)
        );
        let unbounded = IntervalUnion::from(vec![
            Interval::closed(0.0, 1.0),
            Interval::closed(5.0, f64::INFINITY),
        ]);
        assert_eq!(
            unbounded.sample_n(&mut rng, 2),
            Err(IntervalError::UnboundedSample)
        );
    }

    #[test]
    fn overflowing_total_length_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let half = 0.6 * f64::MAX;
        let union = IntervalUnion::from(vec![
            Interval::closed(-half, 0.0),
            Interval::closed(1.0, half),
        ]);
        // Each component can be drawn from on its own.
        assert!(union.iter().all(|iv| iv.sample(&mut rng).is_ok()));
        assert_eq!(union.cardinal(), f64::INFINITY);
        assert_eq!(union.sample(&mut rng), Err(IntervalError::UnboundedSample));
        assert_eq!(
            union.sample_n(&mut rng, 3),
            Err(IntervalError::UnboundedSample)
        );

        let wide = IntervalUnion::from(Interval::closed(-f64::MAX, 0.0));
        assert_eq!(wide.sample(&mut rng), Err(IntervalError::UnboundedSample));
    }
}
