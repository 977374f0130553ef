use marching_core::Point;

use crate::costs::CostMap;
use crate::error::FrontError;

/// Neighbor enumeration over a grid topology.
pub trait Neighborhood {
    /// Append neighbors of `p` into `buf`, in the topology's rotational
    /// order. The caller clears `buf` before calling.
    ///
    /// Fails with [`FrontError::InvalidTopology`] when fewer than two
    /// neighbors exist.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) -> Result<(), FrontError>;
}

/// Local cost update: the cheapest arrival at a point given its neighbors
/// and the costs known so far.
pub trait Transit {
    /// Minimal arrival cost at `p`. `neighbors` must be in rotational order.
    ///
    /// Fails with [`FrontError::NoReachableNeighbor`] when no neighbor
    /// contributes a cost.
    fn transit(&self, p: Point, neighbors: &[Point], costs: &CostMap) -> Result<f64, FrontError>;
}

impl<N: Neighborhood + ?Sized> Neighborhood for &N {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) -> Result<(), FrontError> {
        (**self).neighbors(p, buf)
    }
}

impl<T: Transit + ?Sized> Transit for &T {
    fn transit(&self, p: Point, neighbors: &[Point], costs: &CostMap) -> Result<f64, FrontError> {
        (**self).transit(p, neighbors, costs)
    }
}

impl<N: Neighborhood + ?Sized> Neighborhood for Box<N> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) -> Result<(), FrontError> {
        (**self).neighbors(p, buf)
    }
}

impl<T: Transit + ?Sized> Transit for Box<T> {
    fn transit(&self, p: Point, neighbors: &[Point], costs: &CostMap) -> Result<f64, FrontError> {
        (**self).transit(p, neighbors, costs)
    }
}
