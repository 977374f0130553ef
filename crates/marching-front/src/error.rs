use std::fmt;

use marching_core::Point;

/// Errors raised while building a propagation or running it.
///
/// None of these are transient: they signal a configuration mistake or a
/// broken engine invariant, and the run stops at the first one.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontError {
    /// A point has fewer than two in-bounds neighbors.
    InvalidTopology { point: Point, found: usize },
    /// A transit was evaluated for a point with no neighbor in the cost map.
    NoReachableNeighbor { point: Point },
    /// Grid step must be strictly positive.
    InvalidStep { step: i32 },
    /// Sampling step must lie in `(0, 1]`.
    InvalidEpsilon { epsilon: f64 },
}

impl fmt::Display for FrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTopology { point, found } => write!(
                f,
                "invalid topology: point {point} has {found} in-bounds neighbor(s), at least 2 required"
            ),
            Self::NoReachableNeighbor { point } => {
                write!(f, "no neighbor of {point} has a known cost")
            }
            Self::InvalidStep { step } => {
                write!(f, "grid step must be positive, got {step}")
            }
            Self::InvalidEpsilon { epsilon } => {
                write!(f, "epsilon must lie in (0, 1], got {epsilon}")
            }
        }
    }
}

impl std::error::Error for FrontError {}
