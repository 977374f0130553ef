//! **marching-core** — geometry primitives for grid front propagation.
//!
//! This crate provides the foundational types used across the *marching*
//! workspace: integer grid points, real-valued positions produced by
//! interpolation, and the inclusive bounding box that delimits a grid.

pub mod geom;

pub use geom::{Bounds, BoundsIter, Point, Vec2};
