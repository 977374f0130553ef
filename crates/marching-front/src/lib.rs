//! Front propagation over 2D grids.
//!
//! This crate computes the minimal arrival cost from a seed to every
//! reachable point of a grid by expanding a cost-ordered front, in the manner
//! of Dijkstra's algorithm and of the Fast Marching Method:
//!
//! - **Neighborhoods** ([`GridNeighborhood`]) enumerate the in-bounds
//!   neighbors of a point in rotational order (4- or 8-connected, or a
//!   custom direction set).
//! - **Transits** compute the cost of a newly discovered point from its
//!   known neighbors: [`OnEdge`] relaxes graph edges (Dijkstra),
//!   [`InSimplex`] interpolates across the triangles formed with consecutive
//!   neighbors (fast-marching-like).
//! - **[`Marcher`]** drives the expansion and owns the [`CostMap`];
//!   [`propagate`] is the one-shot entry point.
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`Neighborhood`] | grid topology |
//! | [`Transit`] | local cost update |

mod costs;
mod error;
mod front;
mod neighbors;
mod traits;
mod transit;

pub use costs::CostMap;
pub use error::FrontError;
pub use front::{Marcher, propagate};
pub use neighbors::{GridNeighborhood, Topology};
pub use traits::{Neighborhood, Transit};
pub use transit::{InSimplex, OnEdge};
