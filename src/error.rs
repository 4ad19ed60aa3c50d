use thiserror::Error;

/// Errors raised by the partial operations on intervals and unions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Cannot represent the union of two disjoint intervals as a single interval")]
    DisjointUnion,

    #[error("Cannot sample from an empty interval")]
    EmptyInterval,

    #[error("Cannot sample from an empty interval union")]
    EmptyUnion,

    #[error("Cannot sample uniformly from an unbounded range")]
    UnboundedSample,
}

/// Shorthand for results carrying an [`IntervalError`].
pub type Result<T> = std::result::Result<T, IntervalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_union_display() {
        let e = IntervalError::DisjointUnion;
        assert_eq!(
            e.to_string(),
            "Cannot represent the union of two disjoint intervals as a single interval"
        );
    }

    #[test]
    fn empty_display() {
        assert!(IntervalError::EmptyInterval.to_string().contains("empty interval"));
        assert!(IntervalError::EmptyUnion.to_string().contains("empty interval union"));
    }

    #[test]
    fn unbounded_display() {
        assert_eq!(
            IntervalError::UnboundedSample.to_string(),
            "Cannot sample uniformly from an unbounded range"
        );
    }

    #[test]
    fn error_equality() {
        assert_eq!(IntervalError::EmptyUnion, IntervalError::EmptyUnion);
        assert_ne!(IntervalError::EmptyUnion, IntervalError::EmptyInterval);
    }
}
