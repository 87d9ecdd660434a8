// patterns.rs - Named seed patterns and random soups

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::{Bounds, Coord};

/// A pattern as offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box as (rows, cols).
    pub fn size(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(rows, cols), &(r, c)| {
            (rows.max(r + 1), cols.max(c + 1))
        })
    }

    /// Cells with the pattern's top-left corner at `anchor`.
    pub fn cells_at(&self, anchor: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .map(move |&(r, c)| Coord::new(anchor.row + r, anchor.col + c))
    }

    /// Anchor that centres the pattern, or the origin if it does not fit.
    pub fn centered_in(&self, bounds: Bounds) -> Coord {
        let (rows, cols) = self.size();
        Coord::new(
            bounds.rows().saturating_sub(rows) / 2,
            bounds.cols().saturating_sub(cols) / 2,
        )
    }
}

/// Roughly one cell in three, reproducible from `seed`.
pub fn random_cells(bounds: Bounds, seed: u64) -> Vec<Coord> {
    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    let mut state = hasher.finish();

    let mut cells = Vec::with_capacity(bounds.area() / 3);
    for row in 0..bounds.rows() {
        for col in 0..bounds.cols() {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            if (state >> 16) % 3 == 0 {
                cells.push(Coord::new(row, col));
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn patterns_have_unique_cells() {
        for pattern in PATTERNS {
            let unique: HashSet<_> = pattern.cells.iter().collect();
            assert_eq!(unique.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn sizes() {
        assert_eq!(Pattern::find("glider").unwrap().size(), (3, 3));
        assert_eq!(Pattern::find("Pulsar").unwrap().size(), (13, 13));
        assert_eq!(Pattern::find("Gosper Glider Gun").unwrap().size(), (9, 36));
        assert!(Pattern::find("nope").is_none());
    }

    #[test]
    fn centered_anchor() {
        let bounds = Bounds::new(10, 10).unwrap();
        let blinker = Pattern::find("Blinker").unwrap();
        assert_eq!(blinker.centered_in(bounds), Coord::new(4, 3));
        let gun = Pattern::find("Gosper Glider Gun").unwrap();
        assert_eq!(gun.centered_in(bounds), Coord::new(0, 0));
    }

    #[test]
    fn random_cells_are_reproducible_and_in_bounds() {
        let bounds = Bounds::new(20, 30).unwrap();
        let a = random_cells(bounds, 42);
        let b = random_cells(bounds, 42);
        assert_eq!(a, b);
        assert!(a.iter().all(|&c| bounds.contains(c)));
        assert!(!a.is_empty() && a.len() < bounds.area());
        assert_ne!(a, random_cells(bounds, 43));
    }
}
