// main.rs - Desktop front end for the sparse Life engine
// The engine runs on its own thread; this side only draws and sends commands.

use std::process::ExitCode;
use std::sync::{Arc, OnceLock};

use eframe::egui;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

mod app;
mod config;
mod engine;

use app::LifeApp;
use config::AppConfig;

fn main() -> ExitCode {
    let config = AppConfig::from_env();

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).compact().init();

    let bounds = match config.grid.bounds() {
        Ok(bounds) => bounds,
        Err(e) => {
            error!(error = %e, "invalid grid configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(
        rows     = bounds.rows(),
        cols     = bounds.cols(),
        tick_ms  = config.grid.tick_delay.as_millis() as u64,
        cell_px  = config.cell_px,
        "starting"
    );

    // Filled in once the window exists; events before that need no repaint.
    let repaint: Arc<OnceLock<egui::Context>> = Arc::new(OnceLock::new());
    let waker = Arc::clone(&repaint);
    let handle = match engine::spawn(config.grid.clone(), move || {
        if let Some(ctx) = waker.get() {
            ctx.request_repaint();
        }
    }) {
        Ok(handle) => handle,
        Err(e) => {
            error!(error = %e, "failed to start engine thread");
            return ExitCode::FAILURE;
        }
    };

    // Layout is computed once here from the configured cell size.
    let pitch = config.cell_px + 0.5;
    let width = (pitch * bounds.cols() as f32 + 40.0).clamp(640.0, 1600.0);
    let height = (pitch * bounds.rows() as f32 + 220.0).clamp(480.0, 1000.0);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([width, height]),
        ..Default::default()
    };

    let tick_delay = config.grid.tick_delay;
    let cell_px = config.cell_px;
    let result = eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| {
            let _ = repaint.set(cc.egui_ctx.clone());
            Box::new(LifeApp::new(bounds, tick_delay, cell_px, handle.commands, handle.events))
        }),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "window closed with error");
            ExitCode::FAILURE
        }
    }
}
