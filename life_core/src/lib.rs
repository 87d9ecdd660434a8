//! Conway's Game of Life on a bounded board.
//!
//! The live population is a sparse set of coordinates. Each tick tallies live
//! neighbours for only the cells that can change, applies B3/S23 and reports
//! births and deaths to a [`CellRenderer`]. Cells past the edge do not exist;
//! the board never wraps.

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod history;
pub mod live_set;
pub mod patterns;
pub mod render;
pub mod rules;
pub mod scheduler;

pub use config::GridConfig;
pub use engine::{Mode, Simulation};
pub use error::ConfigError;
pub use grid::{Bounds, Coord};
pub use live_set::LiveSet;
pub use patterns::{PATTERNS, Pattern};
pub use render::{CellEvent, CellRenderer, ChannelRenderer, Recorder};
pub use scheduler::{Command, Controller, serve};
