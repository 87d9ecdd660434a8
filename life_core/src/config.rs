//! Engine configuration, fixed at construction.

use std::time::Duration;

use crate::error::ConfigError;
use crate::grid::Bounds;

/// Default board height.
pub const DEFAULT_ROWS: usize = 50;
/// Default board width.
pub const DEFAULT_COLS: usize = 100;
/// Default pause between generations.
pub const DEFAULT_TICK_DELAY: Duration = Duration::from_millis(100);
/// History length used when cycle detection is switched on.
pub const DEFAULT_CYCLE_WINDOW: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Delay between the end of one tick and the start of the next.
    pub tick_delay: Duration,
    /// Number of past generations checked for repeats; 0 disables the check.
    pub cycle_window: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_delay: DEFAULT_TICK_DELAY,
            cycle_window: 0,
        }
    }
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, ..Self::default() }
    }

    pub fn with_tick_delay(mut self, tick_delay: Duration) -> Self {
        self.tick_delay = tick_delay;
        self
    }

    pub fn with_cycle_window(mut self, cycle_window: usize) -> Self {
        self.cycle_window = cycle_window;
        self
    }

    /// Validated board dimensions.
    pub fn bounds(&self) -> Result<Bounds, ConfigError> {
        Bounds::new(self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = GridConfig::default();
        assert_eq!((cfg.rows, cfg.cols), (50, 100));
        assert_eq!(cfg.tick_delay, Duration::from_millis(100));
        assert_eq!(cfg.cycle_window, 0);
        assert!(cfg.bounds().is_ok());
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let err = GridConfig::new(0, 10).bounds().unwrap_err();
        assert_eq!(err, ConfigError::EmptyGrid { rows: 0, cols: 10 });
        assert_eq!(err.to_string(), "grid must have at least one row and one column, got 0x10");
    }
}
