//! One generation step over a bounded board.
//!
//! Every live cell acknowledges each of its in-bounds neighbours by bumping
//! that neighbour's tally. Live cells are seeded into the tally at zero so an
//! isolated cell is still evaluated (and dies). The tally is dropped when the
//! step returns.

use std::collections::HashMap;

use crate::grid::{Bounds, Coord};
use crate::live_set::LiveSet;

/// Result of one tick: the next population plus the cells that changed.
#[derive(Debug, Clone, Default)]
pub struct Transition {
    pub next: LiveSet,
    pub born: Vec<Coord>,
    pub died: Vec<Coord>,
}

impl Transition {
    pub fn is_still(&self) -> bool {
        self.born.is_empty() && self.died.is_empty()
    }
}

/// B3/S23.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Live-neighbour count for every cell that is live or adjacent to a live cell.
pub fn tally(live: &LiveSet, bounds: Bounds) -> HashMap<Coord, u8> {
    let mut counts: HashMap<Coord, u8> = live.iter().map(|coord| (coord, 0)).collect();
    for coord in live.iter() {
        for neighbor in bounds.neighbors(coord) {
            *counts.entry(neighbor).or_insert(0) += 1;
        }
    }
    counts
}

pub fn step(live: &LiveSet, bounds: Bounds) -> Transition {
    let mut transition = Transition {
        next: LiveSet::with_capacity(live.len()),
        ..Transition::default()
    };

    for (coord, count) in tally(live, bounds) {
        let was_alive = live.is_alive(coord);
        let alive = next_state(was_alive, count);
        if alive {
            transition.next.insert(coord);
        }
        match (was_alive, alive) {
            (false, true) => transition.born.push(coord),
            (true, false) => transition.died.push(coord),
            _ => {}
        }
    }
    transition
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(usize, usize)]) -> LiveSet {
        coords.iter().copied().map(Coord::from).collect()
    }

    fn sorted(mut coords: Vec<Coord>) -> Vec<Coord> {
        coords.sort();
        coords
    }

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "live with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn corner_cell_only_reaches_three_neighbors() {
        let bounds = Bounds::new(3, 3).unwrap();
        let counts = tally(&cells(&[(0, 0)]), bounds);
        // itself plus three neighbours
        assert_eq!(counts.len(), 4);
        assert_eq!(counts[&Coord::new(0, 0)], 0);
        assert_eq!(counts.values().filter(|&&n| n == 1).count(), 3);
    }

    #[test]
    fn lone_cell_dies() {
        let bounds = Bounds::new(3, 3).unwrap();
        let t = step(&cells(&[(1, 1)]), bounds);
        assert!(t.next.is_empty());
        assert_eq!(t.died, vec![Coord::new(1, 1)]);
        assert!(t.born.is_empty());
    }

    #[test]
    fn block_is_still_life() {
        let bounds = Bounds::new(4, 4).unwrap();
        let block = cells(&[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let t = step(&block, bounds);
        assert_eq!(t.next, block);
        assert!(t.is_still());
    }

    #[test]
    fn block_in_corner_survives_without_wrap() {
        let bounds = Bounds::new(2, 2).unwrap();
        let block = cells(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(step(&block, bounds).next, block);
    }

    #[test]
    fn blinker_flips() {
        let bounds = Bounds::new(5, 5).unwrap();
        let t = step(&cells(&[(2, 1), (2, 2), (2, 3)]), bounds);
        assert_eq!(t.next.sorted(), cells(&[(1, 2), (2, 2), (3, 2)]).sorted());
        assert_eq!(sorted(t.born), vec![Coord::new(1, 2), Coord::new(3, 2)]);
        assert_eq!(sorted(t.died), vec![Coord::new(2, 1), Coord::new(2, 3)]);
    }

    #[test]
    fn blinker_on_edge_is_clipped() {
        // A vertical blinker in row 0 would need row -1; it decays instead.
        let bounds = Bounds::new(3, 3).unwrap();
        let t = step(&cells(&[(0, 0), (0, 1), (0, 2)]), bounds);
        assert_eq!(t.next.sorted(), vec![Coord::new(0, 1), Coord::new(1, 1)]);
    }

    #[test]
    fn overcrowded_cell_dies() {
        let bounds = Bounds::new(3, 3).unwrap();
        let plus = cells(&[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
        let t = step(&plus, bounds);
        assert!(!t.next.is_alive(Coord::new(1, 1)));
        assert!(t.died.contains(&Coord::new(1, 1)));
    }
}
