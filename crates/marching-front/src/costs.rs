use std::collections::HashMap;
use std::collections::hash_map::Entry;

use marching_core::Point;

/// Finalized arrival costs, keyed by grid point.
///
/// Entries are inserted once and never updated: a point present in the map
/// has its final cost. Only the propagation engine inserts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CostMap {
    costs: HashMap<Point, f64>,
}

impl CostMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding only `seed` at cost 0.
    pub fn with_seed(seed: Point) -> Self {
        let mut m = Self::new();
        m.costs.insert(seed, 0.0);
        m
    }

    /// Record the cost of a point not yet present. Returns `false`, leaving
    /// the map untouched, if `p` was already finalized.
    pub(crate) fn finalize(&mut self, p: Point, cost: f64) -> bool {
        match self.costs.entry(p) {
            Entry::Occupied(_) => false,
            Entry::Vacant(v) => {
                v.insert(cost);
                true
            }
        }
    }

    /// Cost of `p`, if finalized.
    #[inline]
    pub fn get(&self, p: Point) -> Option<f64> {
        self.costs.get(&p).copied()
    }

    /// Whether `p` has been finalized.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.costs.contains_key(&p)
    }

    /// Number of finalized points.
    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Whether no point has been finalized.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Iterate over `(point, cost)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        self.costs.iter().map(|(&p, &c)| (p, c))
    }

    /// All entries sorted by point (row-major).
    pub fn to_sorted_vec(&self) -> Vec<(Point, f64)> {
        let mut v: Vec<_> = self.iter().collect();
        v.sort_by_key(|&(p, _)| p);
        v
    }
}

/// Builds a map from entries; a repeated point keeps its first cost.
impl FromIterator<(Point, f64)> for CostMap {
    fn from_iter<I: IntoIterator<Item = (Point, f64)>>(iter: I) -> Self {
        let mut m = CostMap::new();
        for (p, c) in iter {
            m.finalize(p, c);
        }
        m
    }
}


#[cfg(feature = "serde")]
impl serde::Serialize for CostMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_sorted_vec().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CostMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<(Point, f64)>::deserialize(deserializer)?;
        let mut m = CostMap::new();
        for (p, c) in entries {
            if !m.finalize(p, c) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate cost entry for {p}"
                )));
            }
        }
        Ok(m)
    }
}
