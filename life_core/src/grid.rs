// grid.rs - Coordinates and grid bounds for the bounded Life board

use crate::error::ConfigError;

/// Relative positions of the eight Moore neighbours.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A cell position on the board, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Board dimensions. Valid cells are `[0, rows) x [0, cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    rows: usize,
    cols: usize,
}

impl Bounds {
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    /// Total number of cells on the board.
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Shift `coord` by `(dr, dc)`, or `None` if the result leaves the board.
    /// Edges are clamped, never wrapped.
    pub fn offset(&self, coord: Coord, (dr, dc): (isize, isize)) -> Option<Coord> {
        let row = coord.row.checked_add_signed(dr)?;
        let col = coord.col.checked_add_signed(dc)?;
        let shifted = Coord { row, col };
        self.contains(shifted).then_some(shifted)
    }

    /// In-bounds Moore neighbours of `coord`. Corner cells yield 3, edge cells 5.
    pub fn neighbors(self, coord: Coord) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |delta| self.offset(coord, delta))
    }
}
