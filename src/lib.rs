//! interval-unions - exact set algebra over intervals of real numbers.
//!
//! An [`Interval`] is one contiguous range with independently open or closed
//! endpoints, possibly unbounded, a single point, or empty. An
//! [`IntervalUnion`] is a canonical union of disjoint intervals and supports
//! the full set algebra: union, intersection, complement, difference and
//! symmetric difference, together with measure, sampling and similarity
//! queries.
//!
//! ```rust
//! use interval_unions::{Interval, IntervalUnion};
//!
//! let i = IntervalUnion::from(vec![
//!     Interval::right_open(-2.0, 0.0),
//!     Interval::left_open(0.0, 1.3),
//!     Interval::right_open(2.0, 3.4),
//! ]);
//! assert_eq!(i.to_string(), "[-2,0[ ∪ ]0,1.3] ∪ [2,3.4[");
//! assert_eq!(
//!     i.complement().to_string(),
//!     "]-Inf,-2[ ∪ [0,0] ∪ ]1.3,2[ ∪ [3.4,Inf["
//! );
//! ```

pub mod boundary;
pub mod error;
pub mod interval;
pub mod interval_union;
pub mod operations;
pub mod similarity;

pub use boundary::Boundary;
pub use error::{IntervalError, Result};
pub use interval::Interval;
pub use interval_union::IntervalUnion;
pub use similarity::Similarity;
