//! The four topology × transit combinations shown by the demo.

use std::fmt;

use log::info;
use marching_front::{CostMap, GridNeighborhood, InSimplex, OnEdge, Topology, Transit, propagate};

use crate::config::DemoConfig;
use crate::error::DemoError;

/// Cost update rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Method {
    /// Graph edge relaxation.
    Dijkstra,
    /// Simplex interpolation.
    FastMarching,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dijkstra => f.write_str("Dijkstra"),
            Self::FastMarching => f.write_str("Fast marching"),
        }
    }
}

/// One demo run: a topology and a method.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub topology: Topology,
    pub method: Method,
}

impl Scenario {
    /// Every combination, in display order.
    pub const ALL: [Scenario; 4] = [
        Scenario::new(Topology::Quad, Method::Dijkstra),
        Scenario::new(Topology::Quad, Method::FastMarching),
        Scenario::new(Topology::Octo, Method::Dijkstra),
        Scenario::new(Topology::Octo, Method::FastMarching),
    ];

    pub const fn new(topology: Topology, method: Method) -> Self {
        Self { topology, method }
    }

    /// Heading printed above the rendered map.
    pub fn title(&self) -> String {
        format!("{}, {} neighbors", self.method, self.topology.degree())
    }

    /// Propagate from the configured seed with this scenario's strategies.
    pub fn run(&self, config: &DemoConfig) -> Result<CostMap, DemoError> {
        let neighborhood = GridNeighborhood::with_topology(self.topology, config.step, config.bounds())?;
        let transit: Box<dyn Transit> = match self.method {
            Method::Dijkstra => Box::new(OnEdge),
            Method::FastMarching => Box::new(InSimplex::new(config.epsilon)?),
        };
        let costs = propagate(config.seed, config.iterations, neighborhood, transit)?;
        info!("{}: {} point(s) with a cost", self.title(), costs.len());
        Ok(costs)
    }
}
