// history.rs - Detects a population that repeats within a short window

use std::collections::VecDeque;

use crate::live_set::LiveSet;

#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    window: usize,
    seen: VecDeque<u64>,
}

impl CycleDetector {
    /// A window of 0 never reports a cycle.
    pub fn new(window: usize) -> Self {
        Self { window, seen: VecDeque::with_capacity(window) }
    }

    pub fn is_enabled(&self) -> bool {
        self.window > 0
    }

    /// Record `live` and report whether it matches one of the last `window`
    /// generations.
    pub fn observe(&mut self, live: &LiveSet) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let hash = live.fingerprint();
        if self.seen.contains(&hash) {
            return true;
        }
        if self.seen.len() == self.window {
            self.seen.pop_front();
        }
        self.seen.push_back(hash);
        false
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}
