// engine.rs - Runs the simulation on its own thread

use std::sync::mpsc;
use std::thread;

use life_core::{CellEvent, ChannelRenderer, Command, Controller, GridConfig, serve};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::LocalSet;
use tracing::error;

/// Both ends the UI holds on to.
pub struct EngineHandle {
    pub commands: UnboundedSender<Command>,
    pub events: mpsc::Receiver<CellEvent>,
}

/// Start the engine thread. `wake` runs after every event so the UI can
/// repaint. The thread exits once every command sender is dropped.
pub fn spawn(grid: GridConfig, wake: impl Fn() + Send + 'static) -> std::io::Result<EngineHandle> {
    let (command_tx, command_rx) = unbounded_channel();
    let (event_tx, event_rx) = mpsc::channel();
    let renderer = ChannelRenderer::new(event_tx).with_waker(wake);

    thread::Builder::new()
        .name("life-engine".into())
        .spawn(move || run(grid, renderer, command_rx))?;

    Ok(EngineHandle { commands: command_tx, events: event_rx })
}

fn run(grid: GridConfig, renderer: ChannelRenderer, commands: UnboundedReceiver<Command>) {
    let runtime = match tokio::runtime::Builder::new_current_thread().enable_time().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "failed to build engine runtime");
            return;
        }
    };
    let controller = match Controller::new(&grid, renderer) {
        Ok(controller) => controller,
        Err(e) => {
            error!(error = %e, "invalid grid configuration");
            return;
        }
    };
    LocalSet::new().block_on(&runtime, serve(controller, commands));
}
