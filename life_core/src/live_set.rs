//! The sparse set of live cells.
//!
//! Presence is the only state a cell carries between ticks. Neighbour tallies
//! live in a separate map owned by a single transition (see [`crate::rules`]).

use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Coord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveSet {
    cells: HashSet<Coord>,
}

impl LiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { cells: HashSet::with_capacity(capacity) }
    }

    pub fn is_alive(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Returns `false` if the cell was already live.
    pub fn insert(&mut self, coord: Coord) -> bool {
        self.cells.insert(coord)
    }

    /// Returns `false` if the cell was not live.
    pub fn remove(&mut self, coord: Coord) -> bool {
        self.cells.remove(&coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Move every live cell out, leaving the set empty.
    pub fn take(&mut self) -> LiveSet {
        std::mem::take(self)
    }

    /// Live cells in row-major order.
    pub fn sorted(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.iter().collect();
        cells.sort_unstable();
        cells
    }

    /// Order-independent hash of the population, used for cycle detection.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for coord in self.sorted() {
            coord.hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl FromIterator<Coord> for LiveSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl IntoIterator for LiveSet {
    type Item = Coord;
    type IntoIter = std::collections::hash_set::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
