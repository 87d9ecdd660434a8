// app.rs - egui front end: draws engine notifications, turns clicks into commands

use std::sync::mpsc::Receiver;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use life_core::patterns::{self, PATTERNS};
use life_core::{Bounds, CellEvent, Command, Coord, Mode};
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

const SPACING: f32 = 0.5;

pub struct LifeApp {
    bounds: Bounds,
    // Display buffer, row-major. Only engine events write to it.
    cells: Vec<bool>,
    live_count: usize,
    commands: UnboundedSender<Command>,
    events: Receiver<CellEvent>,

    is_running: bool,
    generation: u64,
    tick_delay: Duration,
    box_size: f32,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
}

impl LifeApp {
    pub fn new(
        bounds: Bounds,
        tick_delay: Duration,
        box_size: f32,
        commands: UnboundedSender<Command>,
        events: Receiver<CellEvent>,
    ) -> Self {
        Self {
            bounds,
            cells: vec![false; bounds.area()],
            live_count: 0,
            commands,
            events,
            is_running: false,
            generation: 0,
            tick_delay,
            box_size,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
        }
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            warn!("engine thread is gone, command dropped");
        }
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.bounds
            .contains(coord)
            .then(|| coord.row * self.bounds.cols() + coord.col)
    }

    fn set_cell(&mut self, coord: Coord, alive: bool) {
        if let Some(i) = self.index(coord) {
            if self.cells[i] != alive {
                self.cells[i] = alive;
                if alive { self.live_count += 1 } else { self.live_count -= 1 }
            }
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                CellEvent::Activated(coord) => self.set_cell(coord, true),
                CellEvent::Deactivated(coord) => self.set_cell(coord, false),
                CellEvent::ModeChanged(mode) => self.is_running = mode == Mode::Playing,
                CellEvent::Generation(generation) => self.generation = generation,
            }
        }
    }

    fn apply_selected_pattern(&self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            let anchor = pattern.centered_in(self.bounds);
            self.send(Command::Pause);
            self.send(Command::Load(pattern.cells_at(anchor).collect()));
        }
    }

    fn apply_random_pattern(&self) {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(self.generation);
        self.send(Command::Pause);
        self.send(Command::Load(patterns::random_cells(self.bounds, seed)));
    }

    /// Screen position to board cell.
    fn cell_at(&self, origin: Pos2, pos: Pos2) -> Option<Coord> {
        let pitch = self.box_size + SPACING;
        let rel = pos - origin;
        if rel.x < 0.0 || rel.y < 0.0 {
            return None;
        }
        let coord = Coord::new((rel.y / pitch) as usize, (rel.x / pitch) as usize);
        self.bounds.contains(coord).then_some(coord)
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.send(if self.is_running { Command::Pause } else { Command::Start });
            }

            if ui.button("⏹ Clear").clicked() {
                self.send(Command::Reset);
            }

            if ui.button("🎲 Random").clicked() {
                self.apply_random_pattern();
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.apply_selected_pattern();
            }

            ui.separator();

            ui.label(format!("Generation: {}", self.generation));
        });

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1000.0 / self.tick_delay.as_millis().max(1) as f32;
            if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                self.tick_delay = Duration::from_millis((1000.0 / speed) as u64);
                self.send(Command::SetTickDelay(self.tick_delay));
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let pitch = self.box_size + SPACING;
        let origin = ui.cursor().min;
        let total_size = Vec2::new(
            pitch * self.bounds.cols() as f32 - SPACING,
            pitch * self.bounds.rows() as f32 - SPACING,
        );

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

        painter.rect_filled(Rect::from_min_size(origin, total_size), 0.0, Color32::BLACK);

        for row in 0..self.bounds.rows() {
            for col in 0..self.bounds.cols() {
                let min = egui::pos2(origin.x + col as f32 * pitch, origin.y + row as f32 * pitch);
                let rect = Rect::from_min_size(min, Vec2::splat(self.box_size));
                let alive = self.cells[row * self.bounds.cols() + col];
                let cell_color = if alive { self.live_color } else { self.dead_color };

                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        // The engine ignores toggles while running; don't bother sending them.
        if !self.is_running && response.clicked() {
            if let Some(coord) = response
                .interact_pointer_pos()
                .and_then(|pos| self.cell_at(origin, pos))
            {
                self.send(Command::Toggle { row: coord.row, col: coord.col });
            }
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            self.controls(ui);

            ui.separator();

            ui.label("Click cells to toggle them while paused. Use Start/Pause to run the simulation.");

            ui.separator();

            egui::ScrollArea::both().show(ui, |ui| self.board(ui));

            ui.separator();

            let area = self.bounds.area();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", self.live_count));
                ui.label(format!("Dead cells: {}", area - self.live_count));
                ui.label(format!(
                    "Population: {:.1}%",
                    (self.live_count as f32 / area as f32) * 100.0
                ));
            });
        });
    }
}
