//! The simulation state machine.
//!
//! [`Simulation`] owns the live set, the board bounds and the run mode. It is
//! synchronous: every operation finishes inside the caller's turn and reports
//! changes to its [`CellRenderer`]. Scheduling of successive ticks lives in
//! [`crate::scheduler`].

use tracing::{debug, info, trace};

use crate::config::GridConfig;
use crate::error::ConfigError;
use crate::grid::{Bounds, Coord};
use crate::history::CycleDetector;
use crate::live_set::LiveSet;
use crate::render::CellRenderer;
use crate::rules;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Paused,
    Playing,
}

pub struct Simulation<R> {
    bounds: Bounds,
    live: LiveSet,
    mode: Mode,
    generation: u64,
    history: CycleDetector,
    renderer: R,
}

impl<R: CellRenderer> Simulation<R> {
    pub fn new(config: &GridConfig, renderer: R) -> Result<Self, ConfigError> {
        let bounds = config.bounds()?;
        debug!(rows = bounds.rows(), cols = bounds.cols(), "simulation created");
        Ok(Self {
            bounds,
            live: LiveSet::new(),
            mode: Mode::Paused,
            generation: 0,
            history: CycleDetector::new(config.cycle_window),
            renderer,
        })
    }

    pub fn bounds(&self) -> Bounds { self.bounds }
    pub fn live(&self) -> &LiveSet { &self.live }
    pub fn mode(&self) -> Mode { self.mode }
    pub fn generation(&self) -> u64 { self.generation }
    pub fn renderer(&self) -> &R { &self.renderer }
    pub fn renderer_mut(&mut self) -> &mut R { &mut self.renderer }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.live.is_alive(Coord::new(row, col))
    }

    /// Flip one cell. Ignored while playing or outside the board; returns
    /// whether anything changed.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        if self.mode != Mode::Paused {
            trace!(row, col, "toggle ignored while playing");
            return false;
        }
        let coord = Coord::new(row, col);
        if !self.bounds.contains(coord) {
            trace!(row, col, "toggle ignored outside grid");
            return false;
        }
        if self.live.remove(coord) {
            self.renderer.on_deactivate(row, col);
        } else {
            self.live.insert(coord);
            self.renderer.on_activate(row, col);
        }
        true
    }

    pub fn play(&mut self) {
        self.set_mode(Mode::Playing);
    }

    pub fn pause(&mut self) {
        self.set_mode(Mode::Paused);
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        info!(?mode, generation = self.generation, "mode changed");
        self.mode = mode;
        self.renderer.on_mode_change(mode);
    }

    /// Pause, empty the board and deactivate every cell that was live.
    ///
    /// Runs immediately; [`crate::scheduler::Controller::reset`] defers it.
    pub fn reset(&mut self) {
        self.pause();
        let cleared = self.live.take();
        info!(cleared = cleared.len(), "board reset");
        for coord in cleared {
            self.renderer.on_deactivate(coord.row, coord.col);
        }
        self.restart_count();
    }

    /// Replace the board with `cells` while paused. Cells outside the board
    /// are dropped. Returns `false` (and changes nothing) while playing.
    pub fn load<I>(&mut self, cells: I) -> bool
    where
        I: IntoIterator<Item = Coord>,
    {
        if self.mode != Mode::Paused {
            trace!("load ignored while playing");
            return false;
        }
        let next: LiveSet = cells
            .into_iter()
            .filter(|&coord| self.bounds.contains(coord))
            .collect();
        for coord in self.live.iter() {
            if !next.is_alive(coord) {
                self.renderer.on_deactivate(coord.row, coord.col);
            }
        }
        for coord in next.iter() {
            if !self.live.is_alive(coord) {
                self.renderer.on_activate(coord.row, coord.col);
            }
        }
        info!(live = next.len(), "board loaded");
        self.live = next;
        self.restart_count();
        true
    }

    fn restart_count(&mut self) {
        self.history.clear();
        if self.generation != 0 {
            self.generation = 0;
            self.renderer.on_generation(0);
        }
    }

    /// Advance one generation if playing. Returns `false` without touching
    /// anything when paused.
    ///
    /// With cycle detection enabled, a generation that repeats a recent one
    /// pauses the simulation after it has been applied.
    pub fn tick(&mut self) -> bool {
        if self.mode != Mode::Playing {
            return false;
        }
        let transition = rules::step(&self.live, self.bounds);
        self.live = transition.next;
        self.generation += 1;

        for coord in &transition.died {
            self.renderer.on_deactivate(coord.row, coord.col);
        }
        for coord in &transition.born {
            self.renderer.on_activate(coord.row, coord.col);
        }
        self.renderer.on_generation(self.generation);
        debug!(
            generation = self.generation,
            born = transition.born.len(),
            died = transition.died.len(),
            live = self.live.len(),
            "tick"
        );

        if self.history.observe(&self.live) {
            info!(generation = self.generation, "repeating generation detected, pausing");
            self.pause();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CellEvent, Recorder};

    fn sim(rows: usize, cols: usize) -> Simulation<Recorder> {
        Simulation::new(&GridConfig::new(rows, cols), Recorder::default()).unwrap()
    }

    #[test]
    fn starts_paused_and_empty() {
        let s = sim(4, 4);
        assert_eq!(s.mode(), Mode::Paused);
        assert!(s.live().is_empty());
        assert_eq!(s.generation(), 0);
    }

    #[test]
    fn rejects_empty_grid() {
        assert!(Simulation::new(&GridConfig::new(0, 0), ()).is_err());
    }

    #[test]
    fn toggle_flips_and_signals() {
        let mut s = sim(4, 4);
        assert!(s.toggle(1, 2));
        assert!(s.is_alive(1, 2));
        assert!(s.toggle(1, 2));
        assert!(!s.is_alive(1, 2));
        assert_eq!(s.renderer().events, vec![
            CellEvent::Activated(Coord::new(1, 2)),
            CellEvent::Deactivated(Coord::new(1, 2)),
        ]);
    }

    #[test]
    fn toggle_outside_grid_is_ignored() {
        let mut s = sim(4, 4);
        assert!(!s.toggle(4, 0));
        assert!(!s.toggle(0, 4));
        assert!(s.live().is_empty());
        assert!(s.renderer().events.is_empty());
    }

    #[test]
    fn toggle_while_playing_is_ignored() {
        let mut s = sim(4, 4);
        s.toggle(0, 0);
        s.play();
        assert!(!s.toggle(0, 0));
        assert!(!s.toggle(3, 3));
        assert!(s.is_alive(0, 0));
        assert!(!s.is_alive(3, 3));
    }

    #[test]
    fn tick_while_paused_does_nothing() {
        let mut s = sim(3, 3);
        s.toggle(1, 1);
        assert!(!s.tick());
        assert!(s.is_alive(1, 1));
        assert_eq!(s.generation(), 0);
    }

    #[test]
    fn pause_is_idempotent() {
        let mut s = sim(3, 3);
        s.play();
        s.pause();
        s.pause();
        assert_eq!(s.mode(), Mode::Paused);
        let mode_events = s.renderer().events.iter()
            .filter(|e| matches!(e, CellEvent::ModeChanged(_)))
            .count();
        assert_eq!(mode_events, 2);
    }

    #[test]
    fn reset_deactivates_everything() {
        let mut s = sim(5, 5);
        for (r, c) in [(2, 1), (2, 2), (2, 3)] {
            s.toggle(r, c);
        }
        s.play();
        s.tick();
        s.renderer_mut().clear();

        s.reset();
        assert_eq!(s.mode(), Mode::Paused);
        assert!(s.live().is_empty());
        assert_eq!(s.generation(), 0);
        assert_eq!(s.renderer().deactivated(), vec![
            Coord::new(1, 2), Coord::new(2, 2), Coord::new(3, 2),
        ]);
    }

    #[test]
    fn load_replaces_board_with_minimal_signals() {
        let mut s = sim(5, 5);
        s.toggle(0, 0);
        s.toggle(2, 2);
        s.renderer_mut().clear();

        let cells = [(2, 2), (3, 3), (9, 9)].map(Coord::from);
        assert!(s.load(cells));
        assert_eq!(s.live().sorted(), vec![Coord::new(2, 2), Coord::new(3, 3)]);
        assert_eq!(s.renderer().deactivated(), vec![Coord::new(0, 0)]);
        assert_eq!(s.renderer().activated(), vec![Coord::new(3, 3)]);
    }

    #[test]
    fn load_while_playing_is_ignored() {
        let mut s = sim(5, 5);
        s.play();
        assert!(!s.load([Coord::new(1, 1)]));
        assert!(s.live().is_empty());
    }

    #[test]
    fn cycle_detection_pauses_blinker() {
        let config = GridConfig::new(5, 5).with_cycle_window(10);
        let mut s = Simulation::new(&config, Recorder::default()).unwrap();
        for (r, c) in [(2, 1), (2, 2), (2, 3)] {
            s.toggle(r, c);
        }
        s.play();
        assert!(s.tick());
        assert!(s.tick());
        assert_eq!(s.mode(), Mode::Playing);
        assert!(s.tick());
        assert_eq!(s.mode(), Mode::Paused);
        assert_eq!(s.generation(), 3);
    }
}
