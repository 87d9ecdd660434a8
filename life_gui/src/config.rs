//! Front-end configuration loaded from environment variables.
//!
//! | Variable             | Default | Description                                  |
//! |----------------------|---------|----------------------------------------------|
//! | `LIFE_ROWS`          | `50`    | Board height in cells                        |
//! | `LIFE_COLS`          | `100`   | Board width in cells                         |
//! | `LIFE_TICK_MS`       | `100`   | Delay between generations                    |
//! | `LIFE_CELL_PX`       | `12.0`  | Edge length of one drawn cell                |
//! | `LIFE_LOG_LEVEL`     | `info`  | tracing filter (trace/debug/info/warn/error) |
//! | `LIFE_STOP_ON_CYCLE` | `false` | Pause when a recent generation repeats       |

use std::time::Duration;

use life_core::config::{DEFAULT_COLS, DEFAULT_CYCLE_WINDOW, DEFAULT_ROWS, DEFAULT_TICK_DELAY};
use life_core::GridConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub cell_px: f32,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; absent or unparseable values fall back to
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = parse(&lookup, "LIFE_TICK_MS", DEFAULT_TICK_DELAY.as_millis() as u64);
        let cycle_window = if flag(&lookup, "LIFE_STOP_ON_CYCLE") { DEFAULT_CYCLE_WINDOW } else { 0 };
        let grid = GridConfig {
            rows:         parse(&lookup, "LIFE_ROWS", DEFAULT_ROWS),
            cols:         parse(&lookup, "LIFE_COLS", DEFAULT_COLS),
            tick_delay:   Duration::from_millis(tick_ms),
            cycle_window,
        };
        Self {
            grid,
            cell_px:   parse(&lookup, "LIFE_CELL_PX", 12.0_f32).max(2.0),
            log_level: lookup("LIFE_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> bool {
    lookup(key).is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

fn parse<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
