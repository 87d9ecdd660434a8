//! Outbound notifications to whatever draws the board.

use std::sync::mpsc::Sender;

use crate::engine::Mode;
use crate::grid::Coord;

/// Receives every visible state change from the engine.
///
/// Called synchronously from inside engine operations; implementations must
/// not call back into the engine.
pub trait CellRenderer {
    fn on_activate(&mut self, row: usize, col: usize);
    fn on_deactivate(&mut self, row: usize, col: usize);

    fn on_mode_change(&mut self, _mode: Mode) {}
    fn on_generation(&mut self, _generation: u64) {}
}

impl CellRenderer for () {
    fn on_activate(&mut self, _row: usize, _col: usize) {}
    fn on_deactivate(&mut self, _row: usize, _col: usize) {}
}

/// A renderer notification in message form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEvent {
    Activated(Coord),
    Deactivated(Coord),
    ModeChanged(Mode),
    Generation(u64),
}

/// Forwards notifications to another thread.
///
/// Send failures mean the receiving side has gone away and are dropped.
pub struct ChannelRenderer {
    events: Sender<CellEvent>,
    waker: Option<Box<dyn Fn() + Send>>,
}

impl ChannelRenderer {
    pub fn new(events: Sender<CellEvent>) -> Self {
        Self { events, waker: None }
    }

    /// Run `waker` after each forwarded event, e.g. to request a repaint.
    pub fn with_waker(mut self, waker: impl Fn() + Send + 'static) -> Self {
        self.waker = Some(Box::new(waker));
        self
    }

    fn forward(&self, event: CellEvent) {
        if self.events.send(event).is_ok() {
            if let Some(wake) = &self.waker {
                wake();
            }
        }
    }
}

impl CellRenderer for ChannelRenderer {
    fn on_activate(&mut self, row: usize, col: usize) {
        self.forward(CellEvent::Activated(Coord::new(row, col)));
    }

    fn on_deactivate(&mut self, row: usize, col: usize) {
        self.forward(CellEvent::Deactivated(Coord::new(row, col)));
    }

    fn on_mode_change(&mut self, mode: Mode) {
        self.forward(CellEvent::ModeChanged(mode));
    }

    fn on_generation(&mut self, generation: u64) {
        self.forward(CellEvent::Generation(generation));
    }
}

/// Keeps every notification in order. Useful headless and in tests.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub events: Vec<CellEvent>,
}

impl Recorder {
    pub fn activated(&self) -> Vec<Coord> {
        self.cells(|event| match event {
            CellEvent::Activated(coord) => Some(coord),
            _ => None,
        })
    }

    pub fn deactivated(&self) -> Vec<Coord> {
        self.cells(|event| match event {
            CellEvent::Deactivated(coord) => Some(coord),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn cells(&self, pick: impl Fn(CellEvent) -> Option<Coord>) -> Vec<Coord> {
        let mut coords: Vec<Coord> = self.events.iter().copied().filter_map(pick).collect();
        coords.sort();
        coords
    }
}

impl CellRenderer for Recorder {
    fn on_activate(&mut self, row: usize, col: usize) {
        self.events.push(CellEvent::Activated(Coord::new(row, col)));
    }

    fn on_deactivate(&mut self, row: usize, col: usize) {
        self.events.push(CellEvent::Deactivated(Coord::new(row, col)));
    }

    fn on_mode_change(&mut self, mode: Mode) {
        self.events.push(CellEvent::ModeChanged(mode));
    }

    fn on_generation(&mut self, generation: u64) {
        self.events.push(CellEvent::Generation(generation));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;

    #[test]
    fn channel_renderer_forwards_and_wakes() {
        let (tx, rx) = mpsc::channel();
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        let mut renderer = ChannelRenderer::new(tx)
            .with_waker(move || { counter.fetch_add(1, Ordering::SeqCst); });

        renderer.on_activate(1, 2);
        renderer.on_mode_change(Mode::Playing);
        renderer.on_deactivate(1, 2);

        let got: Vec<CellEvent> = rx.try_iter().collect();
        assert_eq!(got, vec![
            CellEvent::Activated(Coord::new(1, 2)),
            CellEvent::ModeChanged(Mode::Playing),
            CellEvent::Deactivated(Coord::new(1, 2)),
        ]);
        assert_eq!(wakes.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn closed_channel_is_ignored() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut renderer = ChannelRenderer::new(tx);
        renderer.on_activate(0, 0);
        renderer.on_generation(7);
    }
}
