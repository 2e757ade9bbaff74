//! Errors surfaced by the public hull entry point.
//!
//! Every variant is a caller mistake rejected before any geometry runs.
//! Collinear or otherwise degenerate point sets are not errors; they come
//! back as 2-point hulls.

/// Broad error category, stable across variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

/// Errors that can occur during convex hull computation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// No points were given.
    #[error("invalid argument: input point set is empty")]
    Empty,

    /// A coordinate is NaN or infinite. Reports the input index.
    #[error("invalid argument: point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    /// Fewer than 3 points remain after tolerance dedup.
    #[error("invalid argument: need at least 3 distinct points, got {distinct}")]
    TooFewPoints { distinct: usize },

    /// `HullCfg::eps` is negative or not finite.
    #[error("invalid argument: tolerance must be finite and >= 0, got {0}")]
    InvalidTolerance(f64),
}

impl HullError {
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            HullError::Empty
            | HullError::NonFinite { .. }
            | HullError::TooFewPoints { .. }
            | HullError::InvalidTolerance(_) => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = std::result::Result<T, HullError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            HullError::TooFewPoints { distinct: 2 }.to_string(),
            "invalid argument: need at least 3 distinct points, got 2"
        );
        assert!(HullError::NonFinite { index: 4 }.to_string().contains("point 4"));
    }

    #[test]
    fn all_variants_are_invalid_argument() {
        for e in [
            HullError::Empty,
            HullError::NonFinite { index: 0 },
            HullError::TooFewPoints { distinct: 1 },
            HullError::InvalidTolerance(-1.0),
        ] {
            assert_eq!(e.kind(), ErrorKind::InvalidArgument);
        }
    }
}
