use marching_core::Point;

use crate::costs::CostMap;
use crate::error::FrontError;
use crate::traits::Transit;

/// Consecutive pairs of `points`, closed by the last-to-first pair.
fn tour(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Cost of reaching `p` straight from the known point `n`.
#[inline]
fn direct(p: Point, n: Point, cost: f64) -> f64 {
    cost + p.distance(n)
}

/// Graph relaxation: the cheapest known neighbor plus the edge length.
///
/// This is the Dijkstra update.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OnEdge;

impl Transit for OnEdge {
    fn transit(&self, p: Point, neighbors: &[Point], costs: &CostMap) -> Result<f64, FrontError> {
        neighbors
            .iter()
            .filter_map(|&n| costs.get(n).map(|c| direct(p, n, c)))
            .min_by(f64::total_cmp)
            .ok_or(FrontError::NoReachableNeighbor { point: p })
    }
}

/// Simplex interpolation: the cheapest arrival through any point of the
/// edges joining consecutive neighbors.
///
/// Each pair of consecutive neighbors `(pj, pk)` forms a triangle with `p`.
/// When both are known, the edge is sampled at `z = 0, ε, 2ε, …` while
/// `z < 1`; the position `z·pj + (1−z)·pk` is reached at cost
/// `z·cost(pj) + (1−z)·cost(pk)`. When only one endpoint is
/// known the edge falls back to direct relaxation against it.
///
/// This is a brute-force stand-in for the closed-form fast-marching update:
/// accuracy grows, and so does cost, linearly with `1 / epsilon`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InSimplex {
    epsilon: f64,
    samples: usize,
}

impl InSimplex {
    /// Create an evaluator sampling edges every `epsilon`, which must lie in
    /// `(0, 1]`.
    pub fn new(epsilon: f64) -> Result<Self, FrontError> {
        if !(epsilon > 0.0 && epsilon <= 1.0) {
            return Err(FrontError::InvalidEpsilon { epsilon });
        }
        // Count of `i` with `i * epsilon < 1`; the quotient can be off by one
        // either way after rounding.
        let mut samples = ((1.0 / epsilon).ceil() as usize).max(1);
        while samples > 1 && (samples - 1) as f64 * epsilon >= 1.0 {
            samples -= 1;
        }
        while (samples as f64) * epsilon < 1.0 {
            samples += 1;
        }
        Ok(Self { epsilon, samples })
    }

    /// Sampling step along an edge.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Number of samples taken on an edge with both endpoints known.
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Cheapest sampled arrival at `p` across the edge `(pj, pk)`.
    fn across(&self, p: Point, (pj, cj): (Point, f64), (pk, ck): (Point, f64)) -> f64 {
        let (vj, vk) = (pj.to_vec2(), pk.to_vec2());
        let target = p.to_vec2();
        (0..self.samples)
            .map(|i| {
                let z = i as f64 * self.epsilon;
                z * cj + (1.0 - z) * ck + target.distance(vj.lerp(vk, z))
            })
            .fold(f64::INFINITY, f64::min)
    }
}

impl Transit for InSimplex {
    fn transit(&self, p: Point, neighbors: &[Point], costs: &CostMap) -> Result<f64, FrontError> {
        let mut known = neighbors
            .iter()
            .filter_map(|&n| costs.get(n).map(|c| (n, c)));
        let first = known.next();
        let mincost = match (first, known.next()) {
            (None, _) => f64::INFINITY,
            // A lone known neighbor (around the seed, typically) leaves no
            // edge with a cost at both ends.
            (Some((n, c)), None) => direct(p, n, c),
            _ => tour(neighbors)
                .map(|(pj, pk)| match (costs.get(pj), costs.get(pk)) {
                    (Some(cj), Some(ck)) => self.across(p, (pj, cj), (pk, ck)),
                    (Some(cj), None) => direct(p, pj, cj),
                    (None, Some(ck)) => direct(p, pk, ck),
                    (None, None) => f64::INFINITY,
                })
                .fold(f64::INFINITY, f64::min),
        };
        if mincost.is_finite() {
            Ok(mincost)
        } else {
            Err(FrontError::NoReachableNeighbor { point: p })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn costs(entries: &[((i32, i32), f64)]) -> CostMap {
        entries.iter().map(|&((x, y), c)| (p(x, y), c)).collect()
    }

    /// Clockwise quad neighbors of the origin.
    fn quad_around_origin() -> Vec<Point> {
        vec![p(1, 0), p(0, -1), p(-1, 0), p(0, 1)]
    }

    #[test]
    fn tour_wraps_around() {
        let pts = [p(0, 0), p(1, 0), p(2, 0)];
        let pairs: Vec<_> = tour(&pts).collect();
        assert_eq!(
            pairs,
            vec![(p(0, 0), p(1, 0)), (p(1, 0), p(2, 0)), (p(2, 0), p(0, 0))]
        );
        let two = [p(0, 0), p(1, 0)];
        assert_eq!(tour(&two).count(), 2);
    }

    // -----------------------------------------------------------------------
    // OnEdge
    // -----------------------------------------------------------------------

    #[test]
    fn on_edge_takes_cheapest_known_neighbor() {
        let m = costs(&[((1, 0), 3.0), ((0, 1), 1.5)]);
        let c = OnEdge.transit(p(0, 0), &quad_around_origin(), &m).unwrap();
        assert_eq!(c, 2.5);
    }

    #[test]
    fn on_edge_ignores_unknown_neighbors() {
        let m = costs(&[((-1, 0), 4.0)]);
        let c = OnEdge.transit(p(0, 0), &quad_around_origin(), &m).unwrap();
        assert_eq!(c, 5.0);
    }

    #[test]
    fn on_edge_diagonal_uses_euclidean_length() {
        let m = costs(&[((1, 1), 0.0)]);
        let c = OnEdge.transit(p(0, 0), &[p(1, 1), p(1, 0)], &m).unwrap();
        assert_eq!(c, 2f64.sqrt());
    }

    #[test]
    fn on_edge_without_known_neighbor_fails() {
        let m = costs(&[((5, 5), 0.0)]);
        assert_eq!(
            OnEdge.transit(p(0, 0), &quad_around_origin(), &m),
            Err(FrontError::NoReachableNeighbor { point: p(0, 0) })
        );
    }

    // -----------------------------------------------------------------------
    // InSimplex
    // -----------------------------------------------------------------------

    #[test]
    fn epsilon_validated() {
        assert!(InSimplex::new(0.01).is_ok());
        assert!(InSimplex::new(1.0).is_ok());
        for bad in [0.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(
                InSimplex::new(bad),
                Err(FrontError::InvalidEpsilon { .. })
            ));
        }
    }

    #[test]
    fn sample_count() {
        assert_eq!(InSimplex::new(0.25).unwrap().samples(), 4);
        assert_eq!(InSimplex::new(0.3).unwrap().samples(), 4);
        assert_eq!(InSimplex::new(0.4).unwrap().samples(), 3);
        assert_eq!(InSimplex::new(1.0).unwrap().samples(), 1);
    }

    #[test]
    fn coarse_epsilon_samples_at_multiples() {
        // 1/0.3 is not an integer: samples sit at 0, 0.3, 0.6 and 0.9, not
        // at quarters of the edge.
        let (cj, ck) = (1.3, 1.0);
        let m = costs(&[((1, 0), cj), ((1, -1), ck)]);
        let around = [p(1, 0), p(1, -1), p(0, -1)];
        let c = InSimplex::new(0.3).unwrap().transit(p(0, 0), &around, &m).unwrap();
        let sampled = |zs: &[f64]| {
            zs.iter()
                .map(|&z| z * cj + (1.0 - z) * ck + (1.0 + (1.0 - z) * (1.0 - z)).sqrt())
                .fold(f64::INFINITY, f64::min)
        };
        assert!((c - sampled(&[0.0, 0.3, 0.6, 0.9])).abs() < 1e-12);
        assert!((c - 2.2570329614269014).abs() < 1e-12);
        assert!((c - sampled(&[0.0, 0.25, 0.5, 0.75])).abs() > 1e-4);
    }

    #[test]
    fn single_known_neighbor_is_direct_distance() {
        // Right after the seed is inserted: only the seed is known around
        // (1, 0).
        let seed = p(0, 0);
        let m = costs(&[((0, 0), 0.0)]);
        let around = [p(2, 0), p(1, -1), p(0, 0), p(1, 1)];
        let simplex = InSimplex::new(0.01).unwrap();
        let c = simplex.transit(p(1, 0), &around, &m).unwrap();
        assert_eq!(c, p(1, 0).distance(seed));
    }

    #[test]
    fn single_known_neighbor_diagonal() {
        let m = costs(&[((0, 0), 0.0)]);
        let around = [p(2, 1), p(2, 0), p(1, 0), p(0, 0), p(0, 1)];
        let c = InSimplex::new(0.5).unwrap().transit(p(1, 1), &around, &m).unwrap();
        assert_eq!(c, 2f64.sqrt());
    }

    #[test]
    fn both_known_edge_finds_interior_minimum() {
        // Two known corners at cost 0: the cheapest arrival at the origin is
        // the foot of the perpendicular on the segment, at distance sqrt(2)/2.
        let m = costs(&[((1, 0), 0.0), ((0, 1), 0.0)]);
        let around = [p(1, 0), p(0, 1)];
        let simplex = InSimplex::new(1.0 / 1024.0).unwrap();
        let c = simplex.transit(p(0, 0), &around, &m).unwrap();
        assert_eq!(c, 0.5f64.sqrt());
        assert!(c < OnEdge.transit(p(0, 0), &around, &m).unwrap());
    }

    #[test]
    fn one_known_endpoint_degrades_to_relaxation() {
        let m = costs(&[((1, 0), 2.0), ((-1, 0), 1.0)]);
        // Known points are never consecutive in the tour.
        let c = InSimplex::new(0.1)
            .unwrap()
            .transit(p(0, 0), &quad_around_origin(), &m)
            .unwrap();
        assert_eq!(c, 2.0);
    }

    #[test]
    fn no_known_neighbor_fails() {
        let m = CostMap::new();
        assert_eq!(
            InSimplex::new(0.1)
                .unwrap()
                .transit(p(3, 3), &quad_around_origin(), &m),
            Err(FrontError::NoReachableNeighbor { point: p(3, 3) })
        );
    }

    #[test]
    fn converges_as_epsilon_shrinks() {
        // The cost gradient along the edge pulls the optimum off the
        // vertices: u = 1 - z solves u / sqrt(1 + u^2) = 0.3.
        let m = costs(&[((1, 0), 1.3), ((1, -1), 1.0)]);
        let around = [p(1, 0), p(1, -1), p(0, -1)];
        let exact = 1.3 + 0.91f64.sqrt();
        let at = |eps: f64| {
            InSimplex::new(eps)
                .unwrap()
                .transit(p(0, 0), &around, &m)
                .unwrap()
        };
        let coarse = at(0.5);
        let fine = at(1.0 / 4096.0);
        let finer = at(1.0 / 8192.0);
        assert!(fine < coarse);
        assert!(finer <= fine);
        assert!(fine - finer < 1e-6);
        assert!((finer - exact).abs() < 1e-6);
    }

    fn known_subset() -> impl Strategy<Value = Vec<Option<f64>>> {
        prop::collection::vec(prop::option::of(0.0f64..10.0), 8)
    }

    fn octo_around(center: Point) -> Vec<Point> {
        crate::Topology::Octo
            .directions()
            .iter()
            .map(|&d| center + d)
            .collect()
    }

    fn with_known(around: &[Point], known: &[Option<f64>]) -> CostMap {
        around
            .iter()
            .zip(known)
            .filter_map(|(&n, c)| c.map(|c| (n, c)))
            .collect()
    }

    proptest! {
        #[test]
        fn simplex_never_exceeds_edge(known in known_subset(), k in 1usize..64) {
            let center = p(0, 0);
            let around = octo_around(center);
            let m = with_known(&around, &known);
            let edge = OnEdge.transit(center, &around, &m);
            let simplex = InSimplex::new(1.0 / k as f64).unwrap().transit(center, &around, &m);
            match (edge, simplex) {
                (Ok(e), Ok(s)) => prop_assert!(s <= e),
                (Err(_), Err(_)) => {}
                (e, s) => prop_assert!(false, "edge {:?} vs simplex {:?}", e, s),
            }
        }

        #[test]
        fn halving_epsilon_never_increases_cost(known in known_subset(), k in 1usize..32) {
            let center = p(0, 0);
            let around = octo_around(center);
            let m = with_known(&around, &known);
            prop_assume!(!m.is_empty());
            let coarse = InSimplex::new(1.0 / k as f64).unwrap().transit(center, &around, &m).unwrap();
            let fine = InSimplex::new(1.0 / (2 * k) as f64).unwrap().transit(center, &around, &m).unwrap();
            prop_assert!(fine <= coarse);
        }
    }
}
