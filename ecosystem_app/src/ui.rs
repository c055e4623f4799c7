// ui.rs - egui front-end: grid painter, health card and controls
//
// Holds no simulation logic. Each frame takes a snapshot of the engine,
// draws it, and forwards clicks to engine operations.

use eframe::egui;
use egui::{Align2, Color32, FontId, RichText, Rect, Sense, Stroke, Vec2};
use tracing::warn;

use ecosystem::runner::{self, lock};
use ecosystem::{Business, Cell, EngineConfig, Grid, Runner, PATTERNS};

use crate::text;

const BACKGROUND: Color32 = Color32::from_rgb(0xd1, 0xfa, 0xe5);
const HEADING: Color32    = Color32::from_rgb(0x06, 0x5f, 0x46);
const BODY_TEXT: Color32  = Color32::from_rgb(0x04, 0x78, 0x57);
const CELL_BORDER: Color32 = Color32::from_rgb(0x6e, 0xe7, 0xb7);
const CARD_FILL: Color32  = Color32::from_rgba_premultiplied(204, 204, 204, 204);
const BUTTON_FILL: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

const CELL_SPACING: f32 = 1.0;

/// Fill color for a cell: white when empty, one pastel per business kind.
pub fn cell_color(cell: Cell) -> Color32 {
    match cell {
        None                    => Color32::WHITE,
        Some(Business::Office)  => Color32::from_rgb(0xbf, 0xdb, 0xfe),
        Some(Business::Factory) => Color32::from_rgb(0xfe, 0xca, 0xca),
        Some(Business::Bank)    => Color32::from_rgb(0xfe, 0xf0, 0x8a),
        Some(Business::Shop)    => Color32::from_rgb(0xbb, 0xf7, 0xd0),
    }
}

/// Maps a click offset from the grid's top-left corner to a cell.
/// Clicks in the gap between cells or outside the grid miss.
pub fn cell_at(offset: Vec2, cell_size: f32, rows: usize, cols: usize) -> Option<(usize, usize)> {
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let pitch = cell_size + CELL_SPACING;
    let (row, col) = ((offset.y / pitch) as usize, (offset.x / pitch) as usize);
    let inside = offset.x - col as f32 * pitch < cell_size && offset.y - row as f32 * pitch < cell_size;
    (inside && row < rows && col < cols).then_some((row, col))
}

pub fn install_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = BACKGROUND;
    ctx.set_visuals(visuals);
}

/// What one frame needs from the engine, copied out so the lock is not
/// held while painting.
struct Snapshot {
    grid: Grid,
    generation: u64,
    running: bool,
    active: usize,
    total: usize,
}

pub struct EcosystemApp {
    // Dropped before the runtime so its task is aborted on a live runtime
    runner: Runner,
    _runtime: tokio::runtime::Runtime,
    density: f64,
    selected_pattern: usize,
}

impl EcosystemApp {
    pub fn new(config: EngineConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("ecosystem-runner")
            .enable_time()
            .build()?;

        let engine = runner::shared(config.build()?);
        let runner = Runner::new(engine, config.interval, runtime.handle().clone())?;

        Ok(Self {
            runner,
            _runtime: runtime,
            density: config.density,
            selected_pattern: 0,
        })
    }

    fn snapshot(&self) -> Snapshot {
        let eco = lock(self.runner.engine());
        Snapshot {
            grid: eco.grid().clone(),
            generation: eco.generation(),
            running: eco.is_running(),
            active: eco.active_count(),
            total: eco.total_cells(),
        }
    }

    fn toggle_cell(&mut self, row: usize, col: usize) {
        if let Err(e) = lock(self.runner.engine()).toggle_cell(row, col) {
            warn!("toggle ignored: {e}");
        }
    }

    fn toggle_running(&mut self) {
        if let Err(e) = self.runner.toggle() {
            warn!("could not start simulation: {e}");
        }
    }

    fn clear(&mut self) {
        lock(self.runner.engine()).clear();
    }

    fn randomize(&mut self) {
        if let Err(e) = lock(self.runner.engine()).randomize(self.density) {
            warn!("randomize ignored: {e}");
        }
    }

    fn apply_selected_pattern(&mut self) {
        let Some(pattern) = PATTERNS.get(self.selected_pattern) else {
            return;
        };
        if let Err(e) = lock(self.runner.engine()).load_pattern(pattern) {
            warn!("pattern {} ignored: {e}", pattern.name);
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui, view: &Snapshot) {
        let width = ui.available_width();
        let start_stop = if view.running { "Stop Simulation" } else { "Start Simulation" };

        if wavy_button(ui, width, start_stop).clicked() {
            self.toggle_running();
        }
        if wavy_button(ui, width, "Clear Grid").clicked() {
            self.clear();
        }
        if wavy_button(ui, width, "Randomize").clicked() {
            self.randomize();
        }

        ui.horizontal(|ui| {
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.button("Apply").clicked() {
                self.apply_selected_pattern();
            }
        });
    }
}

impl eframe::App for EcosystemApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self.snapshot();

        egui::SidePanel::right("side_panel")
            .resizable(false)
            .min_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    card(ui, "Ecosystem Health", |ui| {
                        ui.label(format!("Active Businesses: {}", view.active));
                        ui.label(format!("Total Opportunities: {}", view.total));
                        ui.label(format!("Generation: {}", view.generation));
                    });
                    ui.add_space(8.0);

                    self.controls(ui, &view);
                    ui.add_space(8.0);

                    card(ui, "How to Play", |ui| {
                        for line in text::HOW_TO_PLAY {
                            ui.label(format!("• {line}"));
                        }
                    });
                    ui.add_space(8.0);

                    card(ui, "Simulation Rules and Significance", |ui| {
                        ui.label(RichText::new(text::RULES).monospace().size(12.0));
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(text::TITLE).heading().strong().size(32.0).color(HEADING));
                ui.label(RichText::new(text::WELCOME).color(BODY_TEXT));
            });
            ui.separator();

            if let Some((row, col)) = draw_grid(ui, &view.grid) {
                self.toggle_cell(row, col);
            }
        });

        // Keep repainting so timer-driven generations show up
        if view.running {
            ctx.request_repaint();
        }
    }
}

fn card(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style())
        .fill(CARD_FILL)
        .stroke(Stroke::new(1.0, HEADING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).strong().size(18.0).color(HEADING));
            ui.separator();
            body(ui);
        });
}

fn wavy_button(ui: &mut egui::Ui, width: f32, label: &str) -> egui::Response {
    ui.add_sized(
        [width, 36.0],
        egui::Button::new(RichText::new(label).color(Color32::WHITE).size(16.0)).fill(BUTTON_FILL),
    )
}

/// Paints the grid and returns the cell that was clicked this frame, if any.
fn draw_grid(ui: &mut egui::Ui, grid: &Grid) -> Option<(usize, usize)> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let available = ui.available_size();
    let fit = (available.x / cols as f32).min(available.y / rows as f32) - CELL_SPACING;
    let cell_size = fit.clamp(12.0, 40.0);
    let pitch = cell_size + CELL_SPACING;

    let total_size = Vec2::new(pitch * cols as f32 - CELL_SPACING, pitch * rows as f32 - CELL_SPACING);
    let (response, painter) = ui.allocate_painter(total_size, Sense::click());
    let origin = response.rect.min;

    painter.rect_filled(response.rect, 0.0, CELL_BORDER);

    for (row, cells) in grid.iter_rows().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            let rect = Rect::from_min_size(
                origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
                Vec2::splat(cell_size),
            );
            painter.rect_filled(rect, 1.0, cell_color(cell));
            painter.rect_stroke(rect, 1.0, Stroke::new(0.5, CELL_BORDER));

            if let Some(kind) = cell {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    kind.glyph(),
                    FontId::proportional(cell_size * 0.6),
                    Color32::BLACK,
                );
            }
        }
    }

    if !response.clicked() {
        return None;
    }
    let pos = response.interact_pointer_pos()?;
    cell_at(pos - origin, cell_size, rows, cols)
}
