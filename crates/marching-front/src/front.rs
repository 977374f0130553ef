use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};
use marching_core::Point;

use crate::costs::CostMap;
use crate::error::FrontError;
use crate::traits::{Neighborhood, Transit};

/// Heap entry: a discovered point and its (already final) cost.
#[derive(Clone, Copy, Debug)]
struct Open {
    cost: f64,
    pos: Point,
}

impl PartialEq for Open {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Open {}

impl Ord for Open {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest first; equal
        // costs pop in point order.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Front propagation from a single seed.
///
/// `Marcher` owns the cost map, the open front and scratch buffers. Each
/// [`step`](Marcher::step) accepts the cheapest point of the front and gives
/// a final cost to every neighbor that does not have one yet, using the
/// configured [`Transit`]. A point enters the cost map exactly once.
///
/// Runs are resumable: two calls to [`run`](Marcher::run) with budget `k`
/// leave the marcher in the same state as one call with budget `2k`.
pub struct Marcher<N, T> {
    neighborhood: N,
    transit: T,
    seed: Point,
    costs: CostMap,
    open: BinaryHeap<Open>,
    iterations: usize,
    // scratch buffers for neighbor queries
    around: Vec<Point>,
    nbuf: Vec<Point>,
}

impl<N: Neighborhood, T: Transit> Marcher<N, T> {
    /// Start a front at `seed`, with cost 0.
    pub fn new(neighborhood: N, transit: T, seed: Point) -> Self {
        let mut open = BinaryHeap::new();
        open.push(Open {
            cost: 0.0,
            pos: seed,
        });
        Self {
            neighborhood,
            transit,
            seed,
            costs: CostMap::with_seed(seed),
            open,
            iterations: 0,
            around: Vec::with_capacity(8),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// The seed point.
    #[inline]
    pub fn seed(&self) -> Point {
        self.seed
    }

    /// Costs finalized so far.
    #[inline]
    pub fn costs(&self) -> &CostMap {
        &self.costs
    }

    /// Consume the marcher and return its cost map.
    pub fn into_costs(self) -> CostMap {
        self.costs
    }

    /// Total number of accepted points across all calls.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Number of discovered points waiting to be accepted.
    #[inline]
    pub fn front_len(&self) -> usize {
        self.open.len()
    }

    /// Whether the front is empty, i.e. the reachable domain is finalized.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.open.is_empty()
    }

    /// Accept the cheapest point of the front and finalize its open
    /// neighbors.
    ///
    /// Returns the accepted point, or `None` if the front is empty.
    ///
    /// On error the point goes back on the front, so stepping again retries
    /// it. Neighbors finalized before the failure keep their cost.
    pub fn step(&mut self) -> Result<Option<Point>, FrontError> {
        let Some(current) = self.open.pop() else {
            return Ok(None);
        };
        let accepted = current.pos;
        trace!("accept {accepted} at cost {}", current.cost);

        let mut around = std::mem::take(&mut self.around);
        around.clear();
        let found = self.neighborhood.neighbors(accepted, &mut around);
        let result = found.and_then(|()| self.discover(&around));
        self.around = around;
        if let Err(e) = result {
            self.open.push(current);
            return Err(e);
        }

        self.iterations += 1;
        Ok(Some(accepted))
    }

    /// Give a cost to every point of `around` that has none yet.
    fn discover(&mut self, around: &[Point]) -> Result<(), FrontError> {
        for &n in around {
            if self.costs.contains(n) {
                continue;
            }
            self.nbuf.clear();
            self.neighborhood.neighbors(n, &mut self.nbuf)?;
            let cost = self.transit.transit(n, &self.nbuf, &self.costs)?;
            if self.costs.finalize(n, cost) {
                self.open.push(Open { cost, pos: n });
            }
        }
        Ok(())
    }

    /// Accept up to `budget` points. Stops early when the front empties.
    ///
    /// Returns the number of points accepted by this call.
    pub fn run(&mut self, budget: usize) -> Result<usize, FrontError> {
        debug!(
            "run from {}: budget {budget}, {} known, {} open",
            self.seed,
            self.costs.len(),
            self.open.len()
        );
        let mut accepted = 0;
        while accepted < budget && self.step()?.is_some() {
            accepted += 1;
        }
        debug!(
            "run from {} stopped after {accepted} step(s): {} known, {} open",
            self.seed,
            self.costs.len(),
            self.open.len()
        );
        Ok(accepted)
    }

    /// Accept points until the front is empty.
    pub fn run_to_completion(&mut self) -> Result<usize, FrontError> {
        self.run(usize::MAX)
    }
}

/// Propagate a front from `seed` for at most `budget` accepted points and
/// return the resulting cost map.
///
/// Reachable points not finalized within the budget are absent from the
/// map. Running out of budget is not an error.
pub fn propagate<N: Neighborhood, T: Transit>(
    seed: Point,
    budget: usize,
    neighborhood: N,
    transit: T,
) -> Result<CostMap, FrontError> {
    let mut marcher = Marcher::new(neighborhood, transit, seed);
    marcher.run(budget)?;
    Ok(marcher.into_costs())
}
