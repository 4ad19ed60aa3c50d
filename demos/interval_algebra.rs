//! Example walking through intervals and unions of intervals.
//!
//! Run with: `cargo run --example interval_algebra`

use interval_unions::{Interval, IntervalUnion, Similarity};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    println!("=== Interval Algebra Example ===\n");

    // Single intervals
    println!("--- Intervals ---");
    let i = Interval::closed(0.0, 1.0);
    let j = Interval::left_open(0.2, 2.0);
    println!("i = {}, j = {}", i, j);
    match i.union(&j) {
        Ok(merged) => println!("i ∪ j = {}", merged),
        Err(e) => println!("i ∪ j failed: {}", e),
    }
    println!("i ∩ j = {}", i.intersect(&j));
    println!("cardinal(j) = {}", j.cardinal());
    println!("0.2 ∈ j: {}", j.contains(0.2));

    let far = Interval::closed(2.0, 4.0);
    match i.union(&far) {
        Ok(merged) => println!("i ∪ {} = {}", far, merged),
        Err(e) => println!("i ∪ {} failed: {}", far, e),
    }

    // Unions of intervals
    println!("\n--- Interval unions ---");
    let a = IntervalUnion::from(vec![
        Interval::right_open(-2.0, 0.0),
        Interval::left_open(0.0, 1.3),
        Interval::right_open(2.0, 3.4),
    ]);
    let b = IntervalUnion::from(vec![
        Interval::right_open(0.0, 1.3),
        Interval::left_open(2.0, 4.0),
    ]);
    println!("a = {}", a);
    println!("b = {}", b);
    println!("cardinal(a) = {:.3}", a.cardinal());
    println!("a ∪ b = {}", a.union(&b));
    println!("a ∩ b = {}", a.intersect(&b));
    println!("∁a = {}", a.complement());
    println!("a \\ b = {}", a.difference(&b));
    println!("a Δ b = {}", a.symmetric_difference(&b));
    println!("a ∩ ∁a = {}", a.intersect(&a.complement()));
    println!("a ∪ ∁a = {}", a.union(&a.complement()));

    // Bounding queries
    println!("\n--- Bounding queries ---");
    println!("compact(a) = {}", a.compact());
    println!("superset(a) = {}", a.superset());
    println!("restricted complement(a) = {}", a.restricted_complement());
    println!("complement cardinal(a) = {:.3}", a.complement_cardinal());
    println!("compactness(a) = {:.3}", a.compactness());

    // Similarity
    println!("\n--- Similarity ---");
    println!("jaccard(a, b) = {:.4}", a.jaccard(&b));
    println!("overlap(a, b) = {:.4}", a.overlap_coefficient(&b));
    println!("dice(a, b) = {:.4}", a.dice_coefficient(&b));

    // Sampling
    println!("\n--- Sampling (seed 42) ---");
    let mut rng = StdRng::seed_from_u64(42);
    match a.sample_n(&mut rng, 4) {
        Ok(values) => println!("4 draws from a: {:?}", values),
        Err(e) => println!("Sampling failed: {}", e),
    }
    match IntervalUnion::real_line().sample(&mut rng) {
        Ok(value) => println!("Draw from the real line: {}", value),
        Err(e) => println!("Sampling the real line failed: {}", e),
    }
}
