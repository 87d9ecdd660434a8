//! Cooperative tick loop.
//!
//! The [`Controller`] shares one [`Simulation`] with at most one loop task.
//! Everything runs on a single thread inside a [`tokio::task::LocalSet`], so
//! state is held in `Rc<RefCell<_>>` and no borrow crosses an `.await`.
//!
//! ```text
//! start() ──spawn_local──▶ tick ─▶ sleep(delay) ─▶ tick ─▶ ... ─▶ Paused? stop
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

use crate::config::GridConfig;
use crate::engine::{Mode, Simulation};
use crate::error::ConfigError;
use crate::grid::Coord;
use crate::render::CellRenderer;

/// Inbound engine operations in message form, for front ends on another thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle { row: usize, col: usize },
    Start,
    Pause,
    Reset,
    Load(Vec<Coord>),
    SetTickDelay(Duration),
}

/// Drives a [`Simulation`] on the current `LocalSet`.
///
/// `start` and `reset` spawn local tasks and panic when called outside a
/// `LocalSet`.
pub struct Controller<R> {
    sim: Rc<RefCell<Simulation<R>>>,
    tick_delay: Rc<Cell<Duration>>,
    loop_pending: Rc<Cell<bool>>,
}

impl<R> Clone for Controller<R> {
    fn clone(&self) -> Self {
        Self {
            sim: Rc::clone(&self.sim),
            tick_delay: Rc::clone(&self.tick_delay),
            loop_pending: Rc::clone(&self.loop_pending),
        }
    }
}

impl<R: CellRenderer + 'static> Controller<R> {
    pub fn new(config: &GridConfig, renderer: R) -> Result<Self, ConfigError> {
        Ok(Self {
            sim: Rc::new(RefCell::new(Simulation::new(config, renderer)?)),
            tick_delay: Rc::new(Cell::new(config.tick_delay)),
            loop_pending: Rc::new(Cell::new(false)),
        })
    }

    /// Switch to playing and make sure exactly one tick loop is scheduled.
    ///
    /// If a loop from an earlier `start` is still waiting out its delay it is
    /// reused: it will observe `Playing` when it wakes.
    pub fn start(&self) {
        self.sim.borrow_mut().play();
        if self.loop_pending.replace(true) {
            debug!("tick loop already scheduled");
            return;
        }
        tokio::task::spawn_local(tick_loop(
            Rc::clone(&self.sim),
            Rc::clone(&self.tick_delay),
            Rc::clone(&self.loop_pending),
        ));
    }

    /// Takes effect when the pending tick wakes; that tick does no work.
    pub fn pause(&self) {
        self.sim.borrow_mut().pause();
    }

    pub fn toggle(&self, row: usize, col: usize) -> bool {
        self.sim.borrow_mut().toggle(row, col)
    }

    pub fn load(&self, cells: Vec<Coord>) -> bool {
        self.sim.borrow_mut().load(cells)
    }

    /// Pause and clear the board on the next scheduling opportunity, never
    /// inside the caller's turn. Await the handle to observe completion.
    pub fn reset(&self) -> JoinHandle<()> {
        let sim = Rc::clone(&self.sim);
        tokio::task::spawn_local(async move {
            sim.borrow_mut().reset();
        })
    }

    /// Applies from the next sleep onwards.
    pub fn set_tick_delay(&self, delay: Duration) {
        debug!(delay_ms = delay.as_millis() as u64, "tick delay changed");
        self.tick_delay.set(delay);
    }

    pub fn tick_delay(&self) -> Duration {
        self.tick_delay.get()
    }

    pub fn mode(&self) -> Mode {
        self.sim.borrow().mode()
    }

    /// Whether a tick loop task is alive (running or waiting out its delay).
    pub fn is_ticking(&self) -> bool {
        self.loop_pending.get()
    }

    /// Read access to the simulation between ticks.
    pub fn with_simulation<T>(&self, f: impl FnOnce(&Simulation<R>) -> T) -> T {
        f(&self.sim.borrow())
    }

    pub fn apply(&self, command: Command) {
        trace!(?command, "command");
        match command {
            Command::Toggle { row, col } => {
                self.toggle(row, col);
            }
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Reset => {
                // Detached; completion is visible through the renderer.
                drop(self.reset());
            }
            Command::Load(cells) => {
                self.load(cells);
            }
            Command::SetTickDelay(delay) => self.set_tick_delay(delay),
        }
    }
}

async fn tick_loop<R: CellRenderer>(
    sim: Rc<RefCell<Simulation<R>>>,
    tick_delay: Rc<Cell<Duration>>,
    loop_pending: Rc<Cell<bool>>,
) {
    debug!("tick loop started");
    loop {
        let ticked = sim.borrow_mut().tick();
        if !ticked {
            loop_pending.set(false);
            debug!("tick loop stopped");
            return;
        }
        tokio::time::sleep(tick_delay.get()).await;
    }
}

/// Apply commands until every sender is dropped, then pause.
pub async fn serve<R: CellRenderer + 'static>(
    controller: Controller<R>,
    mut commands: UnboundedReceiver<Command>,
) {
    info!("engine ready");
    while let Some(command) = commands.recv().await {
        controller.apply(command);
    }
    controller.pause();
    info!("command channel closed, engine stopping");
}
