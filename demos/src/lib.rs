//! Demo driver for the *marching* front propagation crates.
//!
//! Runs the four combinations of grid topology (4 or 8 neighbors) and
//! transit (graph edges or simplex interpolation) from a single
//! [`DemoConfig`], and prints each cost map as a text grid.

pub mod config;
pub mod error;
pub mod render;
pub mod scenario;

pub use config::DemoConfig;
pub use error::DemoError;
pub use render::write_grid;
pub use scenario::{Method, Scenario};
