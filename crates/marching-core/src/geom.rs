//! Geometry primitives: [`Point`], [`Vec2`] and [`Bounds`].
//!
//! Grid points are integer and serve as map keys. Interpolated positions
//! along simplex edges are real-valued and only ever feed distance
//! computations.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Real-valued position of this grid point.
    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.to_vec2().distance(other.to_vec2())
    }
}

// --- trait impls for Point ---

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

/// A real-valued 2D position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Create a new position.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Weighted combination `z * self + (1 - z) * other`.
    ///
    /// `z = 1` yields `self`, `z = 0` yields `other`.
    #[inline]
    pub fn lerp(self, other: Vec2, z: f64) -> Vec2 {
        Vec2::new(
            z * self.x + (1.0 - z) * other.x,
            z * self.y + (1.0 - z) * other.y,
        )
    }
}

impl From<Point> for Vec2 {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// An inclusive rectangle \[min, max\] on both axes.
///
/// Construction canonicalizes the corners, so a `Bounds` always holds at
/// least one point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Create bounds from two corners, auto-canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Create bounds from two corner points.
    #[inline]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Number of integer columns covered.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x + 1
    }

    /// Number of integer rows covered.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y + 1
    }

    /// Total number of integer points in the bounds.
    #[inline]
    pub fn area(self) -> usize {
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether `p` lies inside the bounds, edges included.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    /// Row-major iterator over every integer point in the bounds.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Point;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}]", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Point,
}

impl Iterator for BoundsIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y > self.bounds.max.y {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x > self.bounds.max.x {
            self.cur.x = self.bounds.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cur.y > self.bounds.max.y {
            return (0, Some(0));
        }
        let w = self.bounds.width() as usize;
        let remaining_in_row = (self.bounds.max.x - self.cur.x + 1) as usize;
        let remaining_rows = (self.bounds.max.y - self.cur.y) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // -----------------------------------------------------------------------
    // Point
    // -----------------------------------------------------------------------

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a * 3, Point::new(3, 6));
    }

    #[test]
    fn point_structural_hash() {
        let mut set = HashSet::new();
        set.insert(Point::new(2, -3));
        assert!(set.contains(&Point::from((2, -3))));
        assert!(!set.contains(&Point::new(-3, 2)));
    }

    #[test]
    fn point_order_is_row_major() {
        let mut pts = vec![Point::new(1, 1), Point::new(0, 1), Point::new(5, 0)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(5, 0), Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn point_distance() {
        assert_eq!(Point::new(0, 0).distance(Point::new(3, 4)), 5.0);
        assert_eq!(Point::new(1, 1).distance(Point::new(1, 1)), 0.0);
        assert_eq!(Point::new(0, 0).distance(Point::new(1, 1)), 2f64.sqrt());
    }

    // -----------------------------------------------------------------------
    // Vec2
    // -----------------------------------------------------------------------

    #[test]
    fn vec2_lerp_endpoints() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert_eq!(a.lerp(b, 1.0), a);
        assert_eq!(a.lerp(b, 0.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn vec2_from_point() {
        let v: Vec2 = Point::new(-2, 7).into();
        assert_eq!(v, Vec2::new(-2.0, 7.0));
    }

    // -----------------------------------------------------------------------
    // Bounds
    // -----------------------------------------------------------------------

    #[test]
    fn bounds_basics() {
        let b = Bounds::new(0, 0, 2, 1);
        assert_eq!(b.width(), 3);
        assert_eq!(b.height(), 2);
        assert_eq!(b.area(), 6);
        assert!(b.contains(Point::new(0, 0)));
        assert!(b.contains(Point::new(2, 1)));
        assert!(!b.contains(Point::new(3, 0)));
        assert!(!b.contains(Point::new(0, -1)));
    }

    #[test]
    fn bounds_auto_canonicalize() {
        let b = Bounds::new(3, 2, -1, -4);
        assert_eq!(b.min, Point::new(-1, -4));
        assert_eq!(b.max, Point::new(3, 2));
        assert_eq!(Bounds::from_corners(b.max, b.min), b);
    }

    #[test]
    fn bounds_single_point() {
        let b = Bounds::new(4, 4, 4, 4);
        assert_eq!(b.area(), 1);
        assert_eq!(b.iter().collect::<Vec<_>>(), vec![Point::new(4, 4)]);
    }

    #[test]
    fn bounds_iter_row_major() {
        let b = Bounds::new(-1, 0, 1, 1);
        let pts: Vec<_> = b.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(-1, 0));
        assert_eq!(pts[2], Point::new(1, 0));
        assert_eq!(pts[3], Point::new(-1, 1));
        assert_eq!(pts[5], Point::new(1, 1));
        assert_eq!(b.iter().len(), 6);
    }
}
