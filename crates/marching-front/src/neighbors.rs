use marching_core::{Bounds, Point};

use crate::error::FrontError;
use crate::traits::Neighborhood;

/// Four orthogonal offsets, clockwise: right, down, left, up.
const QUAD: [Point; 4] = [
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(0, 1),
];

/// Eight compass offsets, clockwise starting east.
const OCTO: [Point; 8] = [
    Point::new(1, 0),
    Point::new(1, -1),
    Point::new(0, -1),
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
];

/// Built-in grid connectivities.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// 4-connected grid.
    Quad,
    /// 8-connected grid.
    Octo,
}

impl Topology {
    /// The topology's unit offsets in clockwise order.
    pub fn directions(self) -> &'static [Point] {
        match self {
            Self::Quad => &QUAD,
            Self::Octo => &OCTO,
        }
    }

    /// Number of neighbors of an interior point.
    pub fn degree(self) -> usize {
        self.directions().len()
    }
}

/// Neighbors on a regular grid delimited by inclusive [`Bounds`].
///
/// Each direction offset is scaled by `step` and kept if the resulting point
/// is inside the bounds. The direction order is preserved, which is what lets
/// the simplex transit walk consecutive neighbors as triangle edges.
#[derive(Clone, Debug)]
pub struct GridNeighborhood {
    step: i32,
    bounds: Bounds,
    directions: Vec<Point>,
}

impl GridNeighborhood {
    /// 4-connected grid.
    pub fn quad(step: i32, bounds: Bounds) -> Result<Self, FrontError> {
        Self::with_topology(Topology::Quad, step, bounds)
    }

    /// 8-connected grid.
    pub fn octo(step: i32, bounds: Bounds) -> Result<Self, FrontError> {
        Self::with_topology(Topology::Octo, step, bounds)
    }

    /// Grid with one of the built-in topologies.
    pub fn with_topology(topology: Topology, step: i32, bounds: Bounds) -> Result<Self, FrontError> {
        Self::with_directions(topology.directions().to_vec(), step, bounds)
    }

    /// Grid with a caller-supplied direction set.
    ///
    /// `directions` should be in rotational order if the neighborhood is
    /// meant to be used with [`InSimplex`](crate::InSimplex).
    pub fn with_directions(
        directions: Vec<Point>,
        step: i32,
        bounds: Bounds,
    ) -> Result<Self, FrontError> {
        if step <= 0 {
            return Err(FrontError::InvalidStep { step });
        }
        Ok(Self {
            step,
            bounds,
            directions,
        })
    }

    /// Grid step.
    #[inline]
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Grid bounds.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Direction offsets, unscaled.
    #[inline]
    pub fn directions(&self) -> &[Point] {
        &self.directions
    }
}

/// `p + d * step`, or `None` on overflow.
fn offset(p: Point, d: Point, step: i32) -> Option<Point> {
    let x = d.x.checked_mul(step)?.checked_add(p.x)?;
    let y = d.y.checked_mul(step)?.checked_add(p.y)?;
    Some(Point::new(x, y))
}

impl Neighborhood for GridNeighborhood {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) -> Result<(), FrontError> {
        let start = buf.len();
        for &d in &self.directions {
            // Offsets past the i32 range are outside any bounds.
            match offset(p, d, self.step) {
                Some(n) if self.bounds.contains(n) => buf.push(n),
                _ => {}
            }
        }
        let found = buf.len() - start;
        if found < 2 {
            return Err(FrontError::InvalidTopology { point: p, found });
        }
        Ok(())
    }
}
