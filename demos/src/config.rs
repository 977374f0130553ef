//! Demo configuration, loadable from JSON.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use marching_core::{Bounds, Point};
use serde::{Deserialize, Serialize};

use crate::error::DemoError;

/// Parameters shared by every demo scenario.
///
/// Missing fields fall back to [`DemoConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Point with null cost.
    pub seed: Point,
    /// Grid corner with minimal coordinates.
    pub min: Point,
    /// Grid corner with maximal coordinates.
    pub max: Point,
    /// Length of an orthogonal grid edge.
    pub step: i32,
    /// Maximum number of accepted points per scenario.
    pub iterations: usize,
    /// Sampling step for simplex interpolation.
    pub epsilon: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: Point::ZERO,
            min: Point::new(-5, -5),
            max: Point::new(15, 15),
            step: 1,
            iterations: 300,
            epsilon: 0.01,
        }
    }
}

impl DemoConfig {
    /// Read a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DemoError> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Grid bounds.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.min, self.max)
    }
}
